//! Changelog page: filtered, date-grouped timeline with Markdown export.

use super::{label_chips, profession_chips, set_filter, Action, PageController, PageKind};
use crate::env::{selected_profession, Environment};
use crate::filter::{FilterState, PROFESSION, TYPE};
use crate::model::labels::{changelog_type_label, CHANGELOG_TYPE_LABELS};
use crate::model::{Catalog, ChangelogEntry, Member, Profession};
use crate::repo::lookup::resolve;
use crate::view::format::{format_date, parse_date};
use crate::view::{Badge, Block, Card, EmptyState, PageView, Region};
use std::cmp::Reverse;

const FILTER_KEYS: &[&str] = &[PROFESSION, TYPE];

pub struct ChangelogController {
    entries: Vec<ChangelogEntry>,
    professions: Vec<Profession>,
    members: Vec<Member>,
    filters: FilterState,
}

/// Groups entries by raw date, in first-seen order.
pub fn group_by_date<'a>(entries: &[&'a ChangelogEntry]) -> Vec<(String, Vec<&'a ChangelogEntry>)> {
    let mut groups: Vec<(String, Vec<&ChangelogEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(date, _)| *date == entry.date) {
            Some((_, items)) => items.push(*entry),
            None => groups.push((entry.date.clone(), vec![*entry])),
        }
    }
    groups
}

/// Markdown rendition of `entries`, one `##` section per date.
pub fn to_markdown(entries: &[&ChangelogEntry]) -> String {
    group_by_date(entries)
        .into_iter()
        .map(|(date, items)| {
            let lines = items
                .iter()
                .map(|entry| {
                    let version = entry
                        .version
                        .as_deref()
                        .map(|version| format!(" (v{version})"))
                        .unwrap_or_default();
                    format!(
                        "- **[{}]** {}{version}",
                        changelog_type_label(&entry.kind).to_uppercase(),
                        entry.description
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("## {}\n\n{lines}", format_date(&date))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

impl ChangelogController {
    pub fn new(catalog: Catalog, env: &dyn Environment) -> Self {
        let mut filters = FilterState::new();
        filters.set(PROFESSION, &selected_profession(env));
        Self {
            entries: catalog.changelog,
            professions: catalog.professions,
            members: catalog.members,
            filters,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Filtered entries, newest first; equal dates keep fixture order.
    pub fn visible(&self) -> Vec<&ChangelogEntry> {
        let mut visible = self.filters.apply(&self.entries);
        visible.sort_by_key(|entry| Reverse(parse_date(&entry.date)));
        visible
    }

    fn entry_card(&self, entry: &ChangelogEntry) -> Card {
        let mut card = Card::new(&entry.description)
            .id(&entry.id)
            .badge(Badge::new(&entry.kind, changelog_type_label(&entry.kind)));
        if let Some(profession) = &entry.profession {
            card = card.badge(Badge::profession(profession, &self.professions));
        }
        if let Some(author) = resolve(&self.members, Some(entry.author.as_str())) {
            card = card.meta(&author.name);
        }
        if let Some(version) = &entry.version {
            card = card.meta(format!("v{version}"));
        }
        if let Some(rfc) = &entry.related_rfc {
            card = card.meta(rfc).link(format!("rfc.html#{rfc}"));
        }
        card
    }
}

impl PageController for ChangelogController {
    fn kind(&self) -> PageKind {
        PageKind::Changelog
    }

    fn view(&self) -> PageView {
        let filters = Region::new("changelog-filters")
            .with(Block::Chips(profession_chips(
                PROFESSION,
                self.filters.get(PROFESSION),
                &self.professions,
            )))
            .with(Block::Chips(label_chips(
                TYPE,
                self.filters.get(TYPE),
                CHANGELOG_TYPE_LABELS,
            )));

        let visible = self.visible();
        let mut timeline = Region::new("changelog-timeline");
        if visible.is_empty() {
            timeline = timeline.with(EmptyState::new("📜", "Записей не найдено").into());
        }
        for (date, items) in group_by_date(&visible) {
            timeline = timeline
                .with(Block::Heading(format_date(&date)))
                .with(Block::Cards(
                    items.into_iter().map(|entry| self.entry_card(entry)).collect(),
                ));
        }

        PageView::new(PageKind::Changelog.title())
            .with_region(filters)
            .with_region(timeline)
    }

    fn apply(&mut self, action: &Action, _env: &mut dyn Environment) -> bool {
        match action {
            Action::SetFilter { key, value } => set_filter(&mut self.filters, FILTER_KEYS, key, value),
            _ => false,
        }
    }

    fn export(&self) -> Option<String> {
        Some(to_markdown(&self.visible()))
    }
}

#[cfg(test)]
mod tests {
    use super::to_markdown;
    use crate::model::ChangelogEntry;

    fn entry(date: &str, kind: &str, description: &str, version: Option<&str>) -> ChangelogEntry {
        ChangelogEntry {
            date: date.to_string(),
            kind: kind.to_string(),
            description: description.to_string(),
            version: version.map(str::to_string),
            ..ChangelogEntry::default()
        }
    }

    #[test]
    fn markdown_groups_by_date_and_uppercases_labels() {
        let a = entry("2025-03-15", "added", "Новый гайд", Some("1.2"));
        let b = entry("2025-03-15", "removed", "Старый чеклист", None);
        let c = entry("2025-03-01", "changed", "Обновлён шаблон", None);

        let markdown = to_markdown(&[&a, &b, &c]);
        assert_eq!(
            markdown,
            "## 15 марта 2025\n\n- **[ДОБАВЛЕНО]** Новый гайд (v1.2)\n- **[УДАЛЕНО]** Старый чеклист\n\n## 1 марта 2025\n\n- **[ИЗМЕНЕНО]** Обновлён шаблон"
        );
    }
}
