mod common;

use portal_core::filter::{CATEGORY, PROFESSION, ROLE, STATUS, TYPE};
use portal_core::page::{
    ChangelogController, MembersController, PracticesController, RfcController,
};
use portal_core::{Action, MemoryEnvironment, PageController};

fn ids<T>(records: &[&T], id: impl Fn(&T) -> &str) -> Vec<String> {
    records.iter().map(|record| id(record).to_string()).collect()
}

#[test]
fn all_sentinel_is_equivalent_to_no_filter() {
    let mut env = MemoryEnvironment::new();
    let mut page = MembersController::new(common::catalog(), &env);
    let unfiltered = ids(&page.visible(), |m| &m.id);

    assert!(page.apply(&Action::filter(PROFESSION, "qa"), &mut env));
    assert!(page.apply(&Action::filter(PROFESSION, "all"), &mut env));

    assert_eq!(ids(&page.visible(), |m| &m.id), unfiltered);
    assert!(page.filters().is_all(PROFESSION));
    assert_eq!(unfiltered.len(), 6);
}

#[test]
fn member_filters_use_membership_and_compose() {
    let mut env = MemoryEnvironment::new();
    let mut page = MembersController::new(common::catalog(), &env);

    page.apply(&Action::filter(PROFESSION, "qa"), &mut env);
    assert_eq!(ids(&page.visible(), |m| &m.id), ["m2", "m3", "m5"]);

    page.apply(&Action::filter(ROLE, "contributor"), &mut env);
    assert_eq!(ids(&page.visible(), |m| &m.id), ["m3"]);
}

#[test]
fn setting_the_same_value_does_not_rerender() {
    let mut env = MemoryEnvironment::new();
    let mut page = MembersController::new(common::catalog(), &env);

    assert!(page.apply(&Action::filter(ROLE, "lead"), &mut env));
    assert!(!page.apply(&Action::filter(ROLE, "lead"), &mut env));
    assert!(!page.apply(&Action::filter("unknown", "x"), &mut env));
}

#[test]
fn practice_status_and_category_filters() {
    let mut env = MemoryEnvironment::new();
    let mut page = PracticesController::new(common::catalog());

    page.apply(&Action::filter(CATEGORY, "Процессы"), &mut env);
    assert_eq!(ids(&page.visible(), |p| &p.id), ["p1", "p3"]);

    page.apply(&Action::filter(STATUS, "accepted"), &mut env);
    assert_eq!(ids(&page.visible(), |p| &p.id), ["p1"]);
}

#[test]
fn empty_filter_result_renders_empty_state() {
    let mut env = MemoryEnvironment::new();
    let mut page = RfcController::new(common::catalog());

    page.apply(&Action::filter(STATUS, "rejected"), &mut env);

    let view = page.view();
    let list = view.region("rfc-list").unwrap();
    assert!(list.cards().is_empty());
    assert_eq!(list.empty_state().unwrap().text, "RFC не найдены");
}

#[test]
fn active_chip_tracks_filter_state() {
    let mut env = MemoryEnvironment::new();
    let mut page = ChangelogController::new(common::catalog(), &env);

    page.apply(&Action::filter(TYPE, "removed"), &mut env);

    let view = page.view();
    let chips = view
        .region("changelog-filters")
        .unwrap()
        .blocks
        .iter()
        .filter_map(|block| match block {
            portal_core::view::Block::Chips(row) => Some(row),
            _ => None,
        })
        .find(|row| row.key == TYPE)
        .unwrap();
    assert_eq!(chips.active().unwrap().value, "removed");
    assert_eq!(ids(&page.visible(), |c| &c.id), ["c3"]);
}
