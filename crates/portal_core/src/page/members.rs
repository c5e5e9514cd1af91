//! Members page: profession and role filters, leaderboard, member grid.

use super::{cards_or_empty, label_chips, profession_chips, set_filter, Action, PageController, PageKind};
use crate::env::{selected_profession, Environment};
use crate::filter::{FilterState, PROFESSION, ROLE};
use crate::model::labels::ROLE_LABELS;
use crate::model::{Catalog, Member, Profession};
use crate::view::format::{initials, pluralize};
use crate::view::{Badge, Block, Card, PageView, Region};

pub const LEADERBOARD_SIZE: usize = 5;

const FILTER_KEYS: &[&str] = &[PROFESSION, ROLE];

pub struct MembersController {
    members: Vec<Member>,
    professions: Vec<Profession>,
    filters: FilterState,
    /// Member addressed by the fragment, highlighted in the grid.
    focused: Option<String>,
}

/// Top `limit` members by contributions, descending.
///
/// The sort is stable, so ties keep fixture order.
pub fn leaderboard(members: &[Member], limit: usize) -> Vec<&Member> {
    let mut ranked = members.iter().collect::<Vec<_>>();
    ranked.sort_by(|a, b| b.contributions.cmp(&a.contributions));
    ranked.truncate(limit);
    ranked
}

impl MembersController {
    pub fn new(catalog: Catalog, env: &dyn Environment) -> Self {
        let mut filters = FilterState::new();
        filters.set(PROFESSION, &selected_profession(env));
        Self {
            members: catalog.members,
            professions: catalog.professions,
            filters,
            focused: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn visible(&self) -> Vec<&Member> {
        self.filters.apply(&self.members)
    }

    pub fn leaderboard(&self) -> Vec<&Member> {
        leaderboard(&self.members, LEADERBOARD_SIZE)
    }

    fn member_card(&self, member: &Member) -> Card {
        let mut card = Card::new(&member.name)
            .id(&member.id)
            .icon(initials(&member.name))
            .badge(Badge::role(&member.role))
            .badges(
                member
                    .professions
                    .iter()
                    .map(|id| Badge::profession(id, &self.professions)),
            )
            .meta(pluralize(member.contributions, "контрибуция", "контрибуции", "контрибуций"));
        card.active = self.focused.as_deref() == Some(member.id.as_str());
        card
    }
}

impl PageController for MembersController {
    fn kind(&self) -> PageKind {
        PageKind::Members
    }

    fn view(&self) -> PageView {
        let filters = Region::new("members-filters")
            .with(Block::Chips(profession_chips(
                PROFESSION,
                self.filters.get(PROFESSION),
                &self.professions,
            )))
            .with(Block::Chips(label_chips(
                ROLE,
                self.filters.get(ROLE),
                ROLE_LABELS,
            )));

        let ranked = self
            .leaderboard()
            .into_iter()
            .enumerate()
            .map(|(index, member)| {
                let mut card = Card::new(&member.name)
                    .id(&member.id)
                    .icon(initials(&member.name))
                    .meta(member.contributions.to_string());
                card.rank = Some(index + 1);
                card
            })
            .collect();
        let leaderboard = Region::new("members-leaderboard")
            .titled("Лидерборд")
            .with(Block::Cards(ranked));

        let cards = self
            .visible()
            .into_iter()
            .map(|member| self.member_card(member))
            .collect();
        let grid = Region::new("members-grid").with(cards_or_empty(cards, "👥", "Участники не найдены"));

        PageView::new(PageKind::Members.title())
            .with_region(filters)
            .with_region(leaderboard)
            .with_region(grid)
    }

    fn apply(&mut self, action: &Action, _env: &mut dyn Environment) -> bool {
        match action {
            Action::SetFilter { key, value } => set_filter(&mut self.filters, FILTER_KEYS, key, value),
            _ => false,
        }
    }

    fn on_hash_change(&mut self, env: &dyn Environment) -> bool {
        let focused = env
            .fragment()
            .filter(|id| self.members.iter().any(|member| &member.id == id));
        let changed = focused != self.focused;
        self.focused = focused;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::leaderboard;
    use crate::model::Member;

    fn member(id: &str, contributions: u64) -> Member {
        Member {
            id: id.to_string(),
            contributions,
            ..Member::default()
        }
    }

    #[test]
    fn leaderboard_keeps_fixture_order_on_ties() {
        let members = vec![member("a", 3), member("b", 9), member("c", 3), member("d", 9)];
        let ids = leaderboard(&members, 3)
            .into_iter()
            .map(|m| m.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "d", "a"]);
    }
}
