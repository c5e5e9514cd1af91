mod common;

use portal_core::filter::TYPE;
use portal_core::page::events::TIME_KEY;
use portal_core::page::{EventsController, MonthCursor, TimeWindow};
use portal_core::view::Block;
use portal_core::{Action, MemoryEnvironment, PageController};

fn events_page() -> (EventsController, MemoryEnvironment) {
    let env = MemoryEnvironment::new().with_today(common::today());
    let page = EventsController::new(common::catalog(), &env);
    (page, env)
}

fn visible_ids(page: &EventsController) -> Vec<String> {
    page.visible().iter().map(|event| event.id.clone()).collect()
}

#[test]
fn cursor_rolls_over_year_boundaries() {
    let december = MonthCursor::new(2024, 11);
    assert_eq!(december.next(), MonthCursor::new(2025, 0));

    let january = MonthCursor::new(2025, 0);
    assert_eq!(january.prev(), MonthCursor::new(2024, 11));
    assert_eq!(january.prev().next(), january);
}

#[test]
fn upcoming_sorts_soonest_first_and_past_most_recent_first() {
    let (mut page, mut env) = events_page();
    assert_eq!(page.window(), TimeWindow::Upcoming);
    assert_eq!(visible_ids(&page), ["e2", "e1", "e3"]);

    assert!(page.apply(&Action::filter(TIME_KEY, "past"), &mut env));
    assert_eq!(visible_ids(&page), ["e5", "e4"]);
}

#[test]
fn type_filter_composes_with_time_window() {
    let (mut page, mut env) = events_page();

    page.apply(&Action::filter(TYPE, "meetup"), &mut env);
    assert_eq!(visible_ids(&page), ["e1", "e3"]);

    page.apply(&Action::filter(TIME_KEY, "past"), &mut env);
    let view = page.view();
    let content = view.region("events-content").unwrap();
    assert_eq!(content.empty_state().unwrap().text, "Событий не найдено");
}

#[test]
fn calendar_starts_on_current_month_with_monday_blanks() {
    let (mut page, mut env) = events_page();
    assert!(page.apply(&Action::SetView("calendar".to_string()), &mut env));

    let view = page.view();
    let Some(Block::Calendar(calendar)) = view.region("events-content").unwrap().blocks.first()
    else {
        panic!("calendar block expected");
    };
    assert_eq!(calendar.title, "Март 2025");
    assert_eq!(calendar.weekdays.first().map(String::as_str), Some("Пн"));
    // 1 March 2025 is a Saturday.
    assert!(calendar.cells[..5].iter().all(|cell| cell.day.is_none()));
    assert_eq!(calendar.cells.len(), 5 + 31);
    assert!(calendar.day(10).unwrap().today);
    assert_eq!(calendar.day(20).unwrap().events.len(), 2);
}

#[test]
fn month_navigation_crosses_into_previous_year() {
    let (mut page, mut env) = events_page();

    for _ in 0..3 {
        assert!(page.apply(&Action::PrevMonth, &mut env));
    }

    assert_eq!(page.cursor(), MonthCursor::new(2024, 11));
    assert_eq!(page.events_on(25).len(), 1);
    assert!(page.events_on(20).is_empty());
}

#[test]
fn day_selection_opens_event_or_day_modal() {
    let (mut page, mut env) = events_page();

    assert!(page.apply(&Action::SelectDay(12), &mut env));
    assert_eq!(page.view().modal.unwrap().title, "Воркшоп по CSS");

    assert!(page.apply(&Action::SelectDay(20), &mut env));
    let modal = page.view().modal.unwrap();
    assert_eq!(modal.title, "20 Март");

    assert!(page.apply(&Action::CloseDetail, &mut env));
    assert!(page.apply(&Action::SelectDay(3), &mut env));
    assert!(page.view().modal.is_none());

    assert!(!page.apply(&Action::SelectDay(32), &mut env));
}

#[test]
fn event_modal_fills_missing_duration_with_dash() {
    let env = MemoryEnvironment::new().with_today(common::today());
    let mut catalog = common::catalog();
    catalog.events[1].duration.clear();
    let mut page = EventsController::new(catalog, &env);
    let mut env = env;

    page.apply(&Action::Select("e2".to_string()), &mut env);

    let modal = page.view().modal.unwrap();
    assert_eq!(modal.field("Длительность"), Some("—"));
    assert_eq!(modal.field("Спикер"), None);
}
