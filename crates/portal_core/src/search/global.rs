//! Cross-collection search over whatever fixtures are already cached.
//!
//! # Invariants
//! - Never triggers a fixture load; uncached collections are skipped.
//! - Results are grouped in a fixed collection order and keep fixture order
//!   inside each group.

use super::matcher::matches_search;
use crate::fixture::{FixtureStore, EVENTS, GLOSSARY, MEMBERS, PRACTICES, RFCS};
use crate::model::de::number_value;
use crate::model::labels::{event_type_label, status_label};
use crate::view::format::rfc_label;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Shortest query, in characters, that runs a search.
pub const MIN_QUERY_CHARS: usize = 2;

const GLOSSARY_SUBTITLE_CHARS: usize = 80;

/// One navigable search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResultItem {
    pub group: &'static str,
    pub title: String,
    pub subtitle: String,
    pub icon: &'static str,
    pub link: String,
}

/// Result of one query evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Query is empty or shorter than [`MIN_QUERY_CHARS`].
    TooShort,
    NoMatches { query: String },
    Results(Vec<SearchResultItem>),
}

impl SearchOutcome {
    pub fn items(&self) -> &[SearchResultItem] {
        match self {
            Self::Results(items) => items,
            _ => &[],
        }
    }

    /// User-facing message for the non-result outcomes.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::TooShort => Some("Введите минимум 2 символа для поиска".to_string()),
            Self::NoMatches { query } => Some(format!("Ничего не найдено по запросу «{query}»")),
            Self::Results(_) => None,
        }
    }
}

impl SearchResultItem {
    /// Groups items by `group`, in order of first appearance.
    pub fn grouped(items: &[SearchResultItem]) -> Vec<(&'static str, Vec<&SearchResultItem>)> {
        let mut groups: Vec<(&'static str, Vec<&SearchResultItem>)> = Vec::new();
        for item in items {
            match groups.iter_mut().find(|(group, _)| *group == item.group) {
                Some((_, members)) => members.push(item),
                None => groups.push((item.group, vec![item])),
            }
        }
        groups
    }
}

struct SearchableCollection {
    fixture: &'static str,
    /// Field holding the record array when the document is an object.
    nested: Option<&'static str>,
    group: &'static str,
    icon: &'static str,
    page: &'static str,
    fields: &'static [&'static str],
    present: fn(&Value) -> (String, String),
}

const COLLECTIONS: &[SearchableCollection] = &[
    SearchableCollection {
        fixture: PRACTICES,
        nested: Some("practices"),
        group: "Практики",
        icon: "📋",
        page: "practices",
        fields: &["name", "description", "category"],
        present: present_practice,
    },
    SearchableCollection {
        fixture: RFCS,
        nested: None,
        group: "RFC",
        icon: "📝",
        page: "rfc",
        fields: &["title", "description"],
        present: present_rfc,
    },
    SearchableCollection {
        fixture: MEMBERS,
        nested: None,
        group: "Участники",
        icon: "👤",
        page: "members",
        fields: &["name", "bio"],
        present: present_member,
    },
    SearchableCollection {
        fixture: EVENTS,
        nested: None,
        group: "События",
        icon: "📅",
        page: "events",
        fields: &["title", "description"],
        present: present_event,
    },
    SearchableCollection {
        fixture: GLOSSARY,
        nested: None,
        group: "Глоссарий",
        icon: "📖",
        page: "glossary",
        fields: &["term", "definition"],
        present: present_glossary,
    },
];

/// Searches the collections cached in `store`.
pub fn search(query: &str, store: &FixtureStore) -> SearchOutcome {
    search_in(query, |name| store.get_cached(name))
}

/// Searches collections supplied by `cached`, which returns `None` for
/// fixtures that are not available.
pub fn search_in<F>(query: &str, cached: F) -> SearchOutcome
where
    F: Fn(&str) -> Option<Arc<Value>>,
{
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchOutcome::TooShort;
    }

    let mut results = Vec::new();
    for collection in COLLECTIONS {
        let Some(document) = cached(collection.fixture) else {
            debug!(
                "event=search_skip module=search status=miss fixture={}",
                collection.fixture
            );
            continue;
        };
        let records = match collection.nested {
            Some(field) => document.get(field),
            None => Some(document.as_ref()),
        };
        let Some(Value::Array(records)) = records else {
            continue;
        };

        results.extend(
            records
                .iter()
                .filter(|record| matches_search(record, query, collection.fields))
                .map(|record| {
                    let (title, subtitle) = (collection.present)(record);
                    SearchResultItem {
                        group: collection.group,
                        title,
                        subtitle,
                        icon: collection.icon,
                        link: format!("{}.html#{}", collection.page, text(record, "id")),
                    }
                }),
        );
    }

    debug!(
        "event=search module=search status=ok query_chars={} results={}",
        query.chars().count(),
        results.len()
    );

    if results.is_empty() {
        SearchOutcome::NoMatches {
            query: query.to_string(),
        }
    } else {
        SearchOutcome::Results(results)
    }
}

fn text<'a>(record: &'a Value, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or_default()
}

fn present_practice(record: &Value) -> (String, String) {
    (
        text(record, "name").to_string(),
        format!(
            "{} · {}",
            status_label(text(record, "status")),
            text(record, "category")
        ),
    )
}

fn present_rfc(record: &Value) -> (String, String) {
    let number = record.get("number").map_or(0, number_value);
    (
        format!("{}: {}", rfc_label(number), text(record, "title")),
        status_label(text(record, "status")).to_string(),
    )
}

fn present_member(record: &Value) -> (String, String) {
    (
        text(record, "name").to_string(),
        text(record, "bio").to_string(),
    )
}

fn present_event(record: &Value) -> (String, String) {
    (
        text(record, "title").to_string(),
        format!(
            "{} · {}",
            event_type_label(text(record, "type")),
            text(record, "date")
        ),
    )
}

fn present_glossary(record: &Value) -> (String, String) {
    let mut subtitle = text(record, "definition")
        .chars()
        .take(GLOSSARY_SUBTITLE_CHARS)
        .collect::<String>();
    subtitle.push_str("...");
    (text(record, "term").to_string(), subtitle)
}
