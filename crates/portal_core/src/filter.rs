//! Per-page filter state and the shared filter derivation.
//!
//! # Responsibility
//! - Hold the active value of each equality filter a page exposes.
//! - Derive the visible subset of a collection from that state.
//!
//! # Invariants
//! - The sentinel [`ALL`] is never stored: assigning it removes the key, so
//!   "set to all" and "never set" are the same state.
//! - A record is visible iff every stored key matches it.

use crate::model::{ChangelogEntry, Event, Member, Practice, Rfc};
use std::collections::BTreeMap;

/// Filter value meaning "predicate always satisfied".
pub const ALL: &str = "all";

pub const PROFESSION: &str = "profession";
pub const ROLE: &str = "role";
pub const STATUS: &str = "status";
pub const CATEGORY: &str = "category";
pub const TYPE: &str = "type";

/// Value a record exposes for one filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRef<'a> {
    One(&'a str),
    /// Matches when any element equals the filter value.
    Many(&'a [String]),
    Missing,
}

/// Records that can be narrowed by [`FilterState`].
pub trait Filterable {
    fn filter_field(&self, key: &str) -> FieldRef<'_>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    active: BTreeMap<&'static str, String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value for `key`, [`ALL`] when unset.
    pub fn get(&self, key: &str) -> &str {
        self.active.get(key).map(String::as_str).unwrap_or(ALL)
    }

    pub fn is_all(&self, key: &str) -> bool {
        !self.active.contains_key(key)
    }

    /// Replaces the value of one key; returns whether the state changed.
    pub fn set(&mut self, key: &'static str, value: &str) -> bool {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            return self.active.remove(key).is_some();
        }
        match self.active.insert(key, value.to_string()) {
            Some(previous) => previous != value,
            None => true,
        }
    }

    /// Equality predicate for one key, short-circuited by [`ALL`].
    pub fn matches(&self, key: &str, actual: &str) -> bool {
        self.active.get(key).map_or(true, |wanted| wanted == actual)
    }

    pub fn admits<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        self.active.iter().all(|(key, wanted)| match record.filter_field(key) {
            FieldRef::One(actual) => actual == wanted,
            FieldRef::Many(values) => values.iter().any(|value| value == wanted),
            FieldRef::Missing => false,
        })
    }

    /// Visible subset of `records`, in collection order.
    pub fn apply<'a, T: Filterable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|record| self.admits(*record)).collect()
    }
}

impl Filterable for Member {
    fn filter_field(&self, key: &str) -> FieldRef<'_> {
        match key {
            PROFESSION => FieldRef::Many(&self.professions),
            ROLE => FieldRef::One(&self.role),
            _ => FieldRef::Missing,
        }
    }
}

impl Filterable for ChangelogEntry {
    fn filter_field(&self, key: &str) -> FieldRef<'_> {
        match key {
            PROFESSION => self
                .profession
                .as_deref()
                .map_or(FieldRef::Missing, FieldRef::One),
            TYPE => FieldRef::One(&self.kind),
            _ => FieldRef::Missing,
        }
    }
}

impl Filterable for Practice {
    fn filter_field(&self, key: &str) -> FieldRef<'_> {
        match key {
            STATUS => FieldRef::One(&self.status),
            CATEGORY => FieldRef::One(&self.category),
            PROFESSION => FieldRef::Many(&self.professions),
            _ => FieldRef::Missing,
        }
    }
}

impl Filterable for Rfc {
    fn filter_field(&self, key: &str) -> FieldRef<'_> {
        match key {
            STATUS => FieldRef::One(&self.status),
            PROFESSION => FieldRef::Many(&self.professions),
            _ => FieldRef::Missing,
        }
    }
}

impl Filterable for Event {
    fn filter_field(&self, key: &str) -> FieldRef<'_> {
        match key {
            TYPE => FieldRef::One(&self.kind),
            PROFESSION => self
                .profession
                .as_deref()
                .map_or(FieldRef::Missing, FieldRef::One),
            _ => FieldRef::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FilterState, ALL, ROLE, STATUS};

    #[test]
    fn assigning_all_removes_the_key() {
        let mut state = FilterState::new();
        assert!(state.set(STATUS, "draft"));
        assert_eq!(state.get(STATUS), "draft");

        assert!(state.set(STATUS, ALL));
        assert!(state.is_all(STATUS));
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn redundant_assignment_reports_no_change() {
        let mut state = FilterState::new();
        assert!(!state.set(ROLE, ALL));
        assert!(state.set(ROLE, "lead"));
        assert!(!state.set(ROLE, "lead"));
    }

    #[test]
    fn matches_short_circuits_unset_keys() {
        let mut state = FilterState::new();
        assert!(state.matches(STATUS, "anything"));
        state.set(STATUS, "review");
        assert!(state.matches(STATUS, "review"));
        assert!(!state.matches(STATUS, "draft"));
    }
}
