//! RFC page: status filter, RFC list, hash-opened detail, and the
//! proposal template.

use super::{cards_or_empty, set_filter, Action, PageController, PageKind};
use crate::env::Environment;
use crate::filter::{FilterState, ALL, STATUS};
use crate::model::{Catalog, Member, Profession, Rfc};
use crate::repo::lookup::{find_by_id, find_member, find_rfc_by_hash};
use crate::view::format::{format_date, format_day_month, member_name};
use crate::view::{Badge, Block, Card, ChipRow, Link, Modal, PageView, Region};

const FILTER_KEYS: &[&str] = &[STATUS];
const STATUS_CHIPS: &[(&str, &str)] = &[
    (ALL, "Все"),
    ("draft", "Черновики"),
    ("review", "Ревью"),
    ("accepted", "Принятые"),
    ("rejected", "Отклонённые"),
];
const UNKNOWN_AUTHOR: &str = "Неизвестен";

pub const RFC_TEMPLATE: &str = "# RFC-XXX: Название\n\n## Описание\n...\n\n## Обоснование\n...\n\n## Детали реализации\n...\n\n## Альтернативы\n...\n\n## Влияние\n...";

pub struct RfcController {
    rfcs: Vec<Rfc>,
    members: Vec<Member>,
    professions: Vec<Profession>,
    filters: FilterState,
    /// Id of the RFC whose modal is open.
    selected: Option<String>,
}

impl RfcController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            rfcs: catalog.rfcs,
            members: catalog.members,
            professions: catalog.professions,
            filters: FilterState::new(),
            selected: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn visible(&self) -> Vec<&Rfc> {
        self.filters.apply(&self.rfcs)
    }

    pub fn selected(&self) -> Option<&Rfc> {
        self.selected
            .as_deref()
            .and_then(|id| find_by_id(self.rfcs.as_slice(), id))
    }

    fn profession_badges(&self, rfc: &Rfc) -> Vec<Badge> {
        rfc.professions
            .iter()
            .map(|id| Badge::profession(id, &self.professions))
            .collect()
    }

    fn list_card(&self, rfc: &Rfc) -> Card {
        let author = find_member(&self.members, &rfc.author);
        Card::new(format!("{} {}", rfc.label(), rfc.title))
            .id(&rfc.id)
            .badge(Badge::status(&rfc.status))
            .badges(self.profession_badges(rfc))
            .meta(member_name(author, UNKNOWN_AUTHOR))
            .meta(format_day_month(&rfc.created_at))
            .link(format!("rfc.html#{}", rfc.hash_id()))
    }

    fn modal(&self, rfc: &Rfc) -> Modal {
        let author = find_member(&self.members, &rfc.author);
        let mut badges = vec![Badge::status(&rfc.status)];
        badges.extend(self.profession_badges(rfc));

        let mut modal = Modal::new(format!("{} — {}", rfc.label(), rfc.title))
            .large()
            .with(Block::Badges(badges))
            .with(Block::Text(format!(
                "{} · {}",
                member_name(author, UNKNOWN_AUTHOR),
                format_date(&rfc.created_at)
            )));

        if !rfc.description.is_empty() {
            modal.push(Block::Text(rfc.description.clone()));
        }
        if let Some(body) = &rfc.body {
            modal.push(Block::Text(body.clone()));
        }

        if !rfc.status_history.is_empty() {
            let last = rfc.status_history.len() - 1;
            let timeline = rfc
                .status_history
                .iter()
                .enumerate()
                .map(|(index, change)| {
                    let mut card = Card::new(format_day_month(&change.date))
                        .badge(Badge::status(&change.status));
                    if let Some(comment) = &change.comment {
                        card = card.description(comment);
                    }
                    card.active = index == last;
                    card
                })
                .collect();
            modal.push(Block::Heading("История статуса".to_string()));
            modal.push(Block::Cards(timeline));
        }

        if let Some(voting) = &rfc.voting {
            modal.push(Block::Heading("Голосование".to_string()));
            modal.push(Block::Badges(vec![
                Badge::new("accepted", format!("За: {}", voting.in_favor)),
                Badge::new("rejected", format!("Против: {}", voting.against)),
                Badge::plain(format!("Воздержались: {}", voting.abstain)),
            ]));
        }

        if !rfc.discussions.is_empty() {
            modal.push(Block::Heading("Обсуждение".to_string()));
            for discussion in &rfc.discussions {
                modal.push(Block::Text(discussion.text().to_string()));
            }
        }

        if let Some(practice) = &rfc.related_practice {
            modal.push(Block::Links(vec![Link::new(
                format!("Связанная практика: {practice}"),
                format!("practices.html#{practice}"),
            )]));
        }
        modal
    }
}

impl PageController for RfcController {
    fn kind(&self) -> PageKind {
        PageKind::Rfc
    }

    fn view(&self) -> PageView {
        let filters = Region::new("rfc-filters").with(Block::Chips(ChipRow::build(
            STATUS,
            self.filters.get(STATUS),
            STATUS_CHIPS.iter().copied(),
        )));

        let cards = self
            .visible()
            .into_iter()
            .map(|rfc| self.list_card(rfc))
            .collect();
        let list = Region::new("rfc-list").with(cards_or_empty(cards, "📝", "RFC не найдены"));

        let template = Region::new("rfc-template")
            .titled("Шаблон RFC")
            .with(Block::Code(RFC_TEMPLATE.to_string()));

        let mut view = PageView::new(PageKind::Rfc.title())
            .with_region(filters)
            .with_region(list)
            .with_region(template);
        view.modal = self.selected().map(|rfc| self.modal(rfc));
        view
    }

    fn apply(&mut self, action: &Action, env: &mut dyn Environment) -> bool {
        match action {
            Action::SetFilter { key, value } => set_filter(&mut self.filters, FILTER_KEYS, key, value),
            Action::Select(id) => {
                let Some(hash) = find_by_id(self.rfcs.as_slice(), id).map(Rfc::hash_id) else {
                    return false;
                };
                env.set_fragment(Some(hash.as_str()));
                self.on_hash_change(env)
            }
            Action::CloseDetail => {
                env.set_fragment(None);
                self.on_hash_change(env)
            }
            _ => false,
        }
    }

    /// `rfc-007` or a raw id opens the modal, an empty fragment closes it,
    /// and an unknown value leaves the page as it was.
    fn on_hash_change(&mut self, env: &dyn Environment) -> bool {
        let next = match env.fragment() {
            None => None,
            Some(hash) => match find_rfc_by_hash(&self.rfcs, &hash) {
                Some(rfc) => Some(rfc.id.clone()),
                None => return false,
            },
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    fn has_detail(&self) -> bool {
        self.selected.is_some()
    }

    fn export(&self) -> Option<String> {
        Some(RFC_TEMPLATE.to_string())
    }
}
