//! Host capabilities injected into page controllers.
//!
//! # Responsibility
//! - Hide preference storage, the navigation fragment and the clock behind
//!   one narrow trait so controllers run without a real host.
//!
//! # Invariants
//! - The fragment is stored without a leading `#`; an empty fragment is
//!   `None`.
//! - Preference write failures are logged and swallowed; the UI keeps the
//!   in-session value.

use crate::filter::ALL;
use crate::repo::preference_repo::PreferenceRepository;
use chrono::{Local, NaiveDate};
use log::warn;
use std::collections::HashMap;

/// Preference key holding the header's profession selector value.
pub const SELECTED_PROFESSION_KEY: &str = "selectedProfession";

pub trait Environment {
    fn preference(&self, key: &str) -> Option<String>;
    fn set_preference(&mut self, key: &str, value: &str);
    /// Current URL fragment without the leading `#`.
    fn fragment(&self) -> Option<String>;
    /// Sets or clears the fragment. Clearing restores the bare page address.
    fn set_fragment(&mut self, fragment: Option<&str>);
    fn today(&self) -> NaiveDate;
}

/// Persisted profession filter, `all` when never chosen.
pub fn selected_profession(env: &dyn Environment) -> String {
    env.preference(SELECTED_PROFESSION_KEY)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| ALL.to_string())
}

pub fn set_selected_profession(env: &mut dyn Environment, profession: &str) {
    env.set_preference(SELECTED_PROFESSION_KEY, profession);
}

fn normalize_fragment(fragment: Option<&str>) -> Option<String> {
    fragment
        .map(|value| value.trim_start_matches('#'))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Fully in-memory environment with an optionally pinned clock.
#[derive(Debug, Clone, Default)]
pub struct MemoryEnvironment {
    preferences: HashMap<String, String>,
    fragment: Option<String>,
    today: Option<NaiveDate>,
}

impl MemoryEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `today()` to a fixed date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = normalize_fragment(Some(fragment));
        self
    }

    pub fn with_preference(mut self, key: &str, value: &str) -> Self {
        self.preferences.insert(key.to_string(), value.to_string());
        self
    }
}

impl Environment for MemoryEnvironment {
    fn preference(&self, key: &str) -> Option<String> {
        self.preferences.get(key).cloned()
    }

    fn set_preference(&mut self, key: &str, value: &str) {
        self.preferences.insert(key.to_string(), value.to_string());
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = normalize_fragment(fragment);
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Environment whose preferences survive restarts through a repository.
pub struct PersistentEnvironment<R: PreferenceRepository> {
    repo: R,
    fragment: Option<String>,
    today: Option<NaiveDate>,
}

impl<R: PreferenceRepository> PersistentEnvironment<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            fragment: None,
            today: None,
        }
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }
}

impl<R: PreferenceRepository> Environment for PersistentEnvironment<R> {
    fn preference(&self, key: &str) -> Option<String> {
        match self.repo.get(key) {
            Ok(value) => value,
            Err(err) => {
                warn!("event=preference_get module=env status=error key={key} error={err}");
                None
            }
        }
    }

    fn set_preference(&mut self, key: &str, value: &str) {
        if let Err(err) = self.repo.set(key, value) {
            warn!("event=preference_set module=env status=error key={key} error={err}");
        }
    }

    fn fragment(&self) -> Option<String> {
        self.fragment.clone()
    }

    fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = normalize_fragment(fragment);
    }

    fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }
}
