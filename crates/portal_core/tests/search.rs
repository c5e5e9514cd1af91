mod common;

use portal_core::fixture::{MEMBERS, RFCS};
use portal_core::search::search_in;
use portal_core::{search, FixtureStore, MemorySource, SearchOutcome, SearchResultItem, SearchSession};

fn warmed_store() -> FixtureStore {
    let store = FixtureStore::new(common::portal_source());
    store.preload_all();
    store
}

#[test]
fn single_character_query_asks_for_more_input() {
    let store = warmed_store();

    let outcome = search("а", &store);

    assert_eq!(outcome, SearchOutcome::TooShort);
    assert_eq!(
        outcome.notice().as_deref(),
        Some("Введите минимум 2 символа для поиска")
    );
}

#[test]
fn no_match_reports_the_query() {
    let store = warmed_store();

    let outcome = search("kubernetes", &store);

    assert!(outcome.items().is_empty());
    assert_eq!(
        outcome.notice().as_deref(),
        Some("Ничего не найдено по запросу «kubernetes»")
    );
}

#[test]
fn member_found_through_bio_only() {
    let store = warmed_store();

    let outcome = search("PROPERTY", &store);

    let items = outcome.items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].group, "Участники");
    assert_eq!(items[0].title, "Борис Орлов");
    assert_eq!(items[0].link, "members.html#m2");
}

#[test]
fn results_are_grouped_in_collection_order() {
    let store = warmed_store();

    let outcome = search("тест", &store);

    let groups = SearchResultItem::grouped(outcome.items())
        .into_iter()
        .map(|(group, items)| (group, items.len()))
        .collect::<Vec<_>>();
    assert_eq!(
        groups,
        vec![("Практики", 1), ("Участники", 1), ("События", 1)]
    );
    let practice = &outcome.items()[0];
    assert_eq!(practice.subtitle, "Ревью · Качество");
    assert_eq!(practice.link, "practices.html#p2");
}

#[test]
fn rfc_and_glossary_items_are_presented_for_display() {
    let store = warmed_store();

    let rfc = search("линтер", &store);
    assert_eq!(rfc.items()[0].title, "RFC-001: Единый линтер");
    assert_eq!(rfc.items()[0].link, "rfc.html#rfc-1");

    let term = search("выкатка", &store);
    let glossary = term
        .items()
        .iter()
        .find(|item| item.group == "Глоссарий")
        .unwrap();
    assert_eq!(glossary.title, "Деплой");
    assert!(glossary.subtitle.ends_with("..."));
}

#[test]
fn rfc_number_given_as_string_keeps_its_label() {
    let rfcs = std::sync::Arc::new(serde_json::json!([
        {"id": "rfc-7", "number": "7", "title": "Монорепозиторий", "status": "review"}
    ]));
    let outcome = search_in("моно", |name| {
        (name == RFCS).then(|| std::sync::Arc::clone(&rfcs))
    });
    assert_eq!(outcome.items()[0].title, "RFC-007: Монорепозиторий");
}

#[test]
fn uncached_collections_are_skipped() {
    let store = FixtureStore::new(
        MemorySource::new().with_json(MEMBERS, &common::members()),
    );

    assert_eq!(
        search("Анна", &store),
        SearchOutcome::NoMatches {
            query: "Анна".to_string()
        }
    );

    store.load(MEMBERS);
    assert_eq!(search("Анна", &store).items().len(), 1);
}

#[test]
fn search_in_reads_from_any_cache() {
    let members = std::sync::Arc::new(common::members());
    let outcome = search_in("дизайн", |name| {
        (name == MEMBERS).then(|| std::sync::Arc::clone(&members))
    });
    assert_eq!(outcome.items()[0].title, "Глеб Титов");
}

#[test]
fn session_highlight_clamps_and_commit_closes() {
    let store = warmed_store();
    let mut session = SearchSession::new();
    session.open();
    session.set_query("тест", &store);
    assert_eq!(session.highlighted(), None);

    session.move_up();
    assert_eq!(session.highlighted(), Some(0));
    for _ in 0..5 {
        session.move_down();
    }
    assert_eq!(session.highlighted(), Some(2));
    session.move_up();
    assert_eq!(session.highlighted(), Some(1));

    let panel = session.panel();
    assert!(panel.groups[1].entries[0].highlighted);

    assert_eq!(session.commit().as_deref(), Some("members.html#m2"));
    assert!(!session.is_open());
}

#[test]
fn session_ignores_arrows_without_results() {
    let store = warmed_store();
    let mut session = SearchSession::new();
    session.open();
    session.set_query("zz", &store);

    session.move_down();

    assert_eq!(session.highlighted(), None);
    assert_eq!(session.commit(), None);
    assert!(session.is_open());
}
