//! Professions page: community grid and the hash-selected inline detail.

use super::{Action, PageController, PageKind};
use crate::env::Environment;
use crate::model::labels::{level_rank, resource_type_label};
use crate::model::{AdoptionMatrix, Catalog, Competency, Member, Practice, Profession};
use crate::repo::lookup::{find_member, find_practice, find_profession, resolve};
use crate::view::format::{format_date, initials, pluralize};
use crate::view::{Badge, Block, Card, Field, PageView, Region};
use log::debug;

pub struct ProfessionsController {
    professions: Vec<Profession>,
    members: Vec<Member>,
    practices: Vec<Practice>,
    adoption: AdoptionMatrix,
    /// Last profession resolved from the fragment.
    selected: Option<String>,
}

/// Competencies ordered advanced → intermediate → basic, unknown last.
pub fn sorted_competencies(competencies: &[Competency]) -> Vec<&Competency> {
    let mut sorted = competencies.iter().collect::<Vec<_>>();
    sorted.sort_by_key(|competency| level_rank(&competency.level));
    sorted
}

impl ProfessionsController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            professions: catalog.professions,
            members: catalog.members,
            practices: catalog.practices,
            adoption: catalog.adoption,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<&Profession> {
        self.selected
            .as_deref()
            .and_then(|id| find_profession(&self.professions, id))
    }

    fn grid(&self) -> Region {
        let cards = self
            .professions
            .iter()
            .map(|profession| {
                let mut card = Card::new(profession.display_name())
                    .id(&profession.id)
                    .icon(&profession.icon)
                    .meta(format!(
                        "{} участн. · {} практик",
                        profession.member_count(),
                        profession.practices.len()
                    ))
                    .link(format!("professions.html#{}", profession.id));
                card.active = self.selected.as_deref() == Some(profession.id.as_str());
                card
            })
            .collect();
        Region::new("professions-grid").with(Block::Cards(cards))
    }

    fn detail(&self, profession: &Profession) -> Vec<Region> {
        let lead = resolve(&self.members, profession.lead.as_deref());
        let header = Region::new("profession-header")
            .titled(&profession.name)
            .with(Block::Fields(vec![
                Field::new(
                    "Лид",
                    lead.map_or("Не назначен".to_string(), |lead| lead.name.clone()),
                ),
                Field::new("Версия", &profession.version),
            ]));

        let description = Region::new("profession-description")
            .titled("Описание")
            .with(Block::Text(profession.description.clone()));

        let mut regions = vec![header, description];

        if !profession.competencies.is_empty() {
            let cards = sorted_competencies(&profession.competencies)
                .into_iter()
                .map(|competency| Card::new(&competency.name).badge(Badge::level(&competency.level)))
                .collect();
            regions.push(
                Region::new("profession-competencies")
                    .titled("Компетенции")
                    .with(Block::Cards(cards)),
            );
        }

        let practice_cards = profession
            .practices
            .iter()
            .filter_map(|id| find_practice(&self.practices, id))
            .map(|practice| {
                let mut card = Card::new(&practice.name)
                    .id(&practice.id)
                    .badge(Badge::status(&practice.status))
                    .badge(Badge::adoption(
                        self.adoption.cell(&practice.id, &profession.id).unwrap_or_default(),
                    ))
                    .description(&practice.description);
                card.progress = Some(practice.adoption_level);
                card
            })
            .collect::<Vec<_>>();
        if !profession.practices.is_empty() {
            regions.push(
                Region::new("profession-practices")
                    .titled("Принятые практики")
                    .with(Block::Cards(practice_cards)),
            );
        }

        regions.push(self.team(profession));

        if !profession.resources.is_empty() {
            let cards = profession
                .resources
                .iter()
                .map(|resource| {
                    Card::new(&resource.title)
                        .icon("📄")
                        .badge(Badge::new("sm", resource_type_label(&resource.kind)))
                        .link(&resource.url)
                })
                .collect();
            regions.push(
                Region::new("profession-resources")
                    .titled("Ресурсы")
                    .with(Block::Cards(cards)),
            );
        }

        regions.push(Region::new("profession-meta").with(Block::Fields(vec![
            Field::new("Последнее обновление", format_date(&profession.last_updated)),
            Field::new("Версия", &profession.version),
        ])));
        regions
    }

    fn team(&self, profession: &Profession) -> Region {
        let groups: [(&str, Vec<&str>); 3] = [
            ("Лид", profession.lead.as_deref().into_iter().collect()),
            ("Эксперты", profession.experts.iter().map(String::as_str).collect()),
            (
                "Контрибьюторы",
                profession.contributors.iter().map(String::as_str).collect(),
            ),
        ];

        let mut region = Region::new("profession-team").titled("Команда");
        for (label, ids) in groups {
            let cards = ids
                .into_iter()
                .filter_map(|id| find_member(&self.members, id))
                .map(|member| {
                    Card::new(&member.name)
                        .id(&member.id)
                        .icon(initials(&member.name))
                        .badge(Badge::role(&member.role))
                        .meta(pluralize(
                            member.contributions,
                            "контрибуция",
                            "контрибуции",
                            "контрибуций",
                        ))
                })
                .collect::<Vec<_>>();
            if !cards.is_empty() {
                region = region
                    .with(Block::Heading(label.to_string()))
                    .with(Block::Cards(cards));
            }
        }
        region
    }
}

impl PageController for ProfessionsController {
    fn kind(&self) -> PageKind {
        PageKind::Professions
    }

    fn view(&self) -> PageView {
        let mut view = PageView::new(PageKind::Professions.title()).with_region(self.grid());
        if let Some(profession) = self.selected() {
            view.regions.extend(self.detail(profession));
        }
        view
    }

    fn apply(&mut self, action: &Action, env: &mut dyn Environment) -> bool {
        match action {
            Action::Select(id) => {
                env.set_fragment(Some(id.as_str()));
                self.on_hash_change(env)
            }
            Action::CloseDetail => {
                env.set_fragment(None);
                self.on_hash_change(env)
            }
            _ => false,
        }
    }

    /// A known id selects that profession; anything else clears the detail.
    fn on_hash_change(&mut self, env: &dyn Environment) -> bool {
        let selected = env
            .fragment()
            .filter(|hash| find_profession(&self.professions, hash).is_some());
        debug!(
            "event=hash_sync module=page page=professions status={}",
            if selected.is_some() { "hit" } else { "miss" }
        );
        let changed = selected != self.selected;
        self.selected = selected;
        changed
    }

    fn has_detail(&self) -> bool {
        self.selected.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::sorted_competencies;
    use crate::model::Competency;

    #[test]
    fn competencies_sort_by_level_and_keep_order_within_level() {
        let competencies = ["basic:a", "advanced:b", "mystery:c", "intermediate:d", "advanced:e"]
            .iter()
            .map(|entry| {
                let (level, name) = entry.split_once(':').unwrap();
                Competency {
                    name: name.to_string(),
                    level: level.to_string(),
                }
            })
            .collect::<Vec<_>>();

        let names = sorted_competencies(&competencies)
            .into_iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["b", "e", "d", "a", "c"]);
    }
}
