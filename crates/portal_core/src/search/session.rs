//! State of the global search overlay.

use super::global::{search, SearchOutcome, SearchResultItem};
use crate::fixture::FixtureStore;
use crate::view::{SearchEntry, SearchGroup, SearchPanel};

/// Open/closed flag, current query, and the highlighted result.
#[derive(Debug, Clone)]
pub struct SearchSession {
    open: bool,
    query: String,
    outcome: SearchOutcome,
    highlighted: Option<usize>,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            open: false,
            query: String::new(),
            outcome: SearchOutcome::TooShort,
            highlighted: None,
        }
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the overlay with an empty query.
    pub fn open(&mut self) {
        self.open = true;
        self.query.clear();
        self.outcome = SearchOutcome::TooShort;
        self.highlighted = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn outcome(&self) -> &SearchOutcome {
        &self.outcome
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Replaces the query and recomputes results; the highlight resets.
    pub fn set_query(&mut self, query: &str, store: &FixtureStore) {
        self.query = query.to_string();
        self.outcome = search(query, store);
        self.highlighted = None;
    }

    /// Moves the highlight down, stopping at the last result.
    pub fn move_down(&mut self) {
        let count = self.outcome.items().len();
        if count == 0 {
            return;
        }
        self.highlighted = Some(match self.highlighted {
            Some(index) => (index + 1).min(count - 1),
            None => 0,
        });
    }

    /// Moves the highlight up, stopping at the first result.
    pub fn move_up(&mut self) {
        if self.outcome.items().is_empty() {
            return;
        }
        self.highlighted = Some(self.highlighted.map_or(0, |index| index.saturating_sub(1)));
    }

    pub fn highlighted_item(&self) -> Option<&SearchResultItem> {
        self.highlighted
            .and_then(|index| self.outcome.items().get(index))
    }

    /// Returns the highlighted link and closes the overlay; no-op without
    /// a highlight.
    pub fn commit(&mut self) -> Option<String> {
        let link = self.highlighted_item()?.link.clone();
        self.close();
        Some(link)
    }

    /// View description of the overlay.
    pub fn panel(&self) -> SearchPanel {
        let items = self.outcome.items();
        let mut index = 0;
        let groups = SearchResultItem::grouped(items)
            .into_iter()
            .map(|(group, members)| SearchGroup {
                title: group.to_string(),
                entries: members
                    .into_iter()
                    .map(|item| {
                        let entry = SearchEntry {
                            icon: item.icon.to_string(),
                            title: item.title.clone(),
                            subtitle: item.subtitle.clone(),
                            link: item.link.clone(),
                            highlighted: self.highlighted == Some(index),
                        };
                        index += 1;
                        entry
                    })
                    .collect(),
            })
            .collect();

        SearchPanel {
            query: self.query.clone(),
            notice: self.outcome.notice(),
            groups,
        }
    }
}
