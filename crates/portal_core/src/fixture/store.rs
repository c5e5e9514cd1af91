//! Memoizing fixture store.
//!
//! # Responsibility
//! - Fetch and parse each named fixture at most once per store.
//! - Load batches concurrently and settle every member before returning.
//! - Keep "failed" and "not requested yet" distinguishable for diagnostics.
//!
//! # Invariants
//! - A successful load is cached forever; failures are not cached, so a
//!   later `load` retries the source.
//! - Cache writes are first-writer-wins: concurrent loads of one name
//!   converge on a single shared `Arc`.
//! - No error crosses this boundary; callers receive `None` and render an
//!   empty state.

use super::source::{FetchError, FixtureSource};
use super::{
    ADOPTION_MATRIX, ANNOUNCEMENTS, CHANGELOG, EVENTS, GLOSSARY, MEMBERS, PRACTICES,
    PRACTICE_DEPENDENCIES, PROFESSIONS, RFCS,
};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

static DASH_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([a-z])").expect("valid dash-letter regex"));

/// Every fixture the portal knows about, in preload order.
pub const ALL_FIXTURES: &[&str] = &[
    PROFESSIONS,
    PRACTICES,
    RFCS,
    EVENTS,
    MEMBERS,
    CHANGELOG,
    GLOSSARY,
    ANNOUNCEMENTS,
    ADOPTION_MATRIX,
    PRACTICE_DEPENDENCIES,
];

/// Load state of one fixture name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureStatus {
    NotRequested,
    Loaded,
    /// Last attempt failed; carries the rendered reason.
    Failed(String),
}

/// Derives the batch key for a fixture file name.
///
/// `adoption-matrix.json` becomes `adoptionMatrix`.
pub fn fixture_key(name: &str) -> String {
    let stem = name.replacen(".json", "", 1);
    DASH_LETTER_RE
        .replace_all(&stem, |caps: &regex::Captures<'_>| caps[1].to_uppercase())
        .into_owned()
}

/// Settled result of a batch load, keyed by [`fixture_key`].
#[derive(Debug, Clone, Default)]
pub struct FixtureSet {
    entries: BTreeMap<String, Option<Arc<Value>>>,
}

impl FixtureSet {
    /// Returns the loaded document for `key`, or `None` when absent or failed.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key).and_then(|entry| entry.as_deref())
    }

    /// Returns the shared handle for `key`.
    pub fn shared(&self, key: &str) -> Option<Arc<Value>> {
        self.entries.get(key).cloned().flatten()
    }

    /// True when `key` was part of the batch.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// True when `key` was part of the batch and loaded successfully.
    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, value: Option<Arc<Value>>) {
        self.entries.insert(key, value);
    }
}

/// Process-local, explicitly constructed fixture cache.
pub struct FixtureStore {
    source: Box<dyn FixtureSource>,
    cache: Mutex<HashMap<String, Arc<Value>>>,
    failures: Mutex<HashMap<String, String>>,
}

impl FixtureStore {
    pub fn new(source: impl FixtureSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
        }
    }

    /// Loads `name`, returning the cached document when present.
    ///
    /// Failures are logged and reported as `None`.
    pub fn load(&self, name: &str) -> Option<Arc<Value>> {
        if let Some(hit) = self.get_cached(name) {
            debug!("event=fixture_load module=fixture status=hit name={name}");
            return Some(hit);
        }

        let started_at = Instant::now();
        match self.fetch_document(name) {
            Ok(value) => {
                let shared = self
                    .lock_cache()
                    .entry(name.to_string())
                    .or_insert_with(|| Arc::new(value))
                    .clone();
                self.lock_failures().remove(name);
                info!(
                    "event=fixture_load module=fixture status=ok name={name} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Some(shared)
            }
            Err(err) => {
                warn!(
                    "event=fixture_load module=fixture status=error name={name} source={} duration_ms={} error={}",
                    self.source.describe(),
                    started_at.elapsed().as_millis(),
                    err
                );
                self.lock_failures().insert(name.to_string(), err.to_string());
                None
            }
        }
    }

    /// Loads every name concurrently and returns once all have settled.
    ///
    /// Duplicate names are fetched once. A failed name maps to `None`
    /// without affecting the others.
    pub fn load_many(&self, names: &[&str]) -> FixtureSet {
        let mut distinct: Vec<&str> = Vec::with_capacity(names.len());
        for name in names {
            if !distinct.contains(name) {
                distinct.push(name);
            }
        }

        let settled: Vec<(&str, Option<Arc<Value>>)> = std::thread::scope(|scope| {
            let handles = distinct
                .iter()
                .map(|name| (*name, scope.spawn(move || self.load(name))))
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|(name, handle)| {
                    let value = handle.join().unwrap_or_else(|_| {
                        warn!(
                            "event=fixture_load module=fixture status=error name={name} error=loader_panicked"
                        );
                        None
                    });
                    (name, value)
                })
                .collect()
        });

        let mut set = FixtureSet::default();
        for (name, value) in settled {
            set.insert(fixture_key(name), value);
        }
        set
    }

    /// Loads every known fixture; intended to run once at startup.
    pub fn preload_all(&self) -> FixtureSet {
        let started_at = Instant::now();
        let set = self.load_many(ALL_FIXTURES);
        let loaded = set.keys().filter(|key| set.is_present(key)).count();
        info!(
            "event=fixture_preload module=fixture status=ok loaded={loaded} total={} duration_ms={}",
            set.len(),
            started_at.elapsed().as_millis()
        );
        set
    }

    /// Returns a cached document without triggering a load.
    pub fn get_cached(&self, name: &str) -> Option<Arc<Value>> {
        self.lock_cache().get(name).cloned()
    }

    /// Reports whether `name` is loaded, failed, or untouched.
    pub fn status(&self, name: &str) -> FixtureStatus {
        if self.lock_cache().contains_key(name) {
            return FixtureStatus::Loaded;
        }
        match self.lock_failures().get(name) {
            Some(reason) => FixtureStatus::Failed(reason.clone()),
            None => FixtureStatus::NotRequested,
        }
    }

    /// Names currently cached, sorted.
    pub fn cached_names(&self) -> Vec<String> {
        let mut names = self.lock_cache().keys().cloned().collect::<Vec<_>>();
        names.sort();
        names
    }

    fn fetch_document(&self, name: &str) -> Result<Value, FetchError> {
        let bytes = self.source.fetch(name)?;
        serde_json::from_slice(&bytes).map_err(|source| FetchError::Parse {
            name: name.to_string(),
            source,
        })
    }

    fn lock_cache(&self) -> MutexGuard<'_, HashMap<String, Arc<Value>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_failures(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::fixture_key;

    #[test]
    fn fixture_key_camel_cases_and_strips_extension() {
        assert_eq!(fixture_key("members.json"), "members");
        assert_eq!(fixture_key("adoption-matrix.json"), "adoptionMatrix");
        assert_eq!(
            fixture_key("practice-dependencies.json"),
            "practiceDependencies"
        );
    }
}
