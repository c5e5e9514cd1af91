mod common;

use portal_core::fixture::{fixture_key, ADOPTION_MATRIX, GLOSSARY, MEMBERS, RFCS};
use portal_core::{DirectorySource, FixtureStatus, FixtureStore, MemorySource};
use serde_json::json;
use std::sync::Arc;

#[test]
fn repeated_loads_share_one_value_and_fetch_once() {
    let source = Arc::new(common::portal_source());
    let store = FixtureStore::new(Arc::clone(&source));

    let first = store.load(MEMBERS).unwrap();
    let second = store.load(MEMBERS).unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(source.fetch_count(MEMBERS), 1);
    assert_eq!(first[0]["id"], "m1");
}

#[test]
fn concurrent_batch_converges_on_single_fetch() {
    let source = Arc::new(common::portal_source());
    let store = FixtureStore::new(Arc::clone(&source));

    let set = store.load_many(&[MEMBERS, MEMBERS, RFCS]);

    assert_eq!(set.len(), 2);
    assert_eq!(source.fetch_count(MEMBERS), 1);
    assert!(Arc::ptr_eq(
        &set.shared("members").unwrap(),
        &store.get_cached(MEMBERS).unwrap()
    ));
}

#[test]
fn one_failed_fixture_does_not_poison_the_batch() {
    let source = MemorySource::new()
        .with_json(MEMBERS, &common::members())
        .with_status(RFCS, 404)
        .with_raw(GLOSSARY, "{not json");
    let store = FixtureStore::new(source);

    let set = store.load_many(&[MEMBERS, RFCS, GLOSSARY]);

    assert!(set.is_present("members"));
    assert!(set.contains_key("rfcs"));
    assert!(!set.is_present("rfcs"));
    assert!(!set.is_present("glossary"));
    assert_eq!(store.status(MEMBERS), FixtureStatus::Loaded);
    assert!(matches!(store.status(RFCS), FixtureStatus::Failed(reason) if reason.contains("404")));
    assert!(matches!(store.status(GLOSSARY), FixtureStatus::Failed(reason) if reason.contains("malformed")));
}

#[test]
fn failures_are_retried_on_next_load() {
    let source = Arc::new(MemorySource::new().with_status(RFCS, 500));
    let store = FixtureStore::new(Arc::clone(&source));

    assert!(store.load(RFCS).is_none());
    assert!(store.load(RFCS).is_none());

    assert_eq!(source.fetch_count(RFCS), 2);
    assert!(store.get_cached(RFCS).is_none());
}

#[test]
fn untouched_fixture_reports_not_requested() {
    let store = FixtureStore::new(MemorySource::new());
    assert_eq!(store.status(MEMBERS), FixtureStatus::NotRequested);
    assert!(store.cached_names().is_empty());
}

#[test]
fn preload_warms_every_fixture() {
    let store = FixtureStore::new(common::portal_source());

    let set = store.preload_all();

    assert_eq!(set.len(), 10);
    assert!(set.keys().all(|key| set.is_present(key)));
    assert_eq!(store.cached_names().len(), 10);
}

#[test]
fn directory_source_reads_fixture_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(MEMBERS),
        json!([{"id": "m1", "name": "Анна"}]).to_string(),
    )
    .unwrap();
    let store = FixtureStore::new(DirectorySource::new(dir.path()));

    assert_eq!(store.load(MEMBERS).unwrap()[0]["name"], "Анна");
    assert!(store.load(RFCS).is_none());
    assert!(matches!(store.status(RFCS), FixtureStatus::Failed(_)));
}

#[test]
fn batch_keys_are_camel_cased_stems() {
    assert_eq!(fixture_key(ADOPTION_MATRIX), "adoptionMatrix");
    assert_eq!(fixture_key("practice-dependencies.json"), "practiceDependencies");
    assert_eq!(fixture_key(MEMBERS), "members");
}
