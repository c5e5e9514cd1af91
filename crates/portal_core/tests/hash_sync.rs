mod common;

use portal_core::page::{
    EventsController, MembersController, PracticesController, ProfessionsController,
    RfcController,
};
use portal_core::{Action, Environment, MemoryEnvironment, PageController};

#[test]
fn rfc_fragment_opens_closes_and_ignores_unknown() {
    let mut env = MemoryEnvironment::new().with_fragment("#rfc-007");
    let mut page = RfcController::new(common::catalog());

    assert!(page.on_hash_change(&env));
    let modal = page.view().modal.unwrap();
    assert_eq!(modal.title, "RFC-007 — Монорепозиторий");

    env.set_fragment(Some("rfc-404"));
    assert!(!page.on_hash_change(&env));
    assert_eq!(page.selected().unwrap().id, "rfc-7");

    env.set_fragment(None);
    assert!(page.on_hash_change(&env));
    assert!(page.view().modal.is_none());
}

#[test]
fn rfc_card_click_writes_label_fragment() {
    let mut env = MemoryEnvironment::new();
    let mut page = RfcController::new(common::catalog());

    assert!(page.apply(&Action::Select("rfc-1".to_string()), &mut env));
    assert_eq!(env.fragment().as_deref(), Some("rfc-001"));
    assert!(page.has_detail());

    assert!(page.apply(&Action::CloseDetail, &mut env));
    assert_eq!(env.fragment(), None);
    assert!(!page.has_detail());
}

#[test]
fn rfc_modal_shows_history_voting_and_unknown_author() {
    let env = MemoryEnvironment::new().with_fragment("rfc-001");
    let mut page = RfcController::new(common::catalog());
    page.on_hash_change(&env);

    let modal = page.view().modal.unwrap();
    let text = format!("{:?}", modal.blocks);
    assert!(text.contains("История статуса"));
    assert!(text.contains("За: 5"));
    assert!(text.contains("Связанная практика: p1"));

    let env = MemoryEnvironment::new().with_fragment("rfc-007");
    page.on_hash_change(&env);
    let text = format!("{:?}", page.view().modal.unwrap().blocks);
    assert!(text.contains("Неизвестен"));
}

#[test]
fn practice_fragment_follows_open_close_policy() {
    let mut env = MemoryEnvironment::new().with_fragment("p2");
    let mut page = PracticesController::new(common::catalog());

    assert!(page.on_hash_change(&env));
    let modal = page.view().modal.unwrap();
    assert_eq!(modal.title, "Контрактные тесты");
    assert_eq!(modal.field("Требует"), Some("Код-ревью"));
    assert_eq!(modal.field("Рекомендует"), Some("Feature flags"));

    env.set_fragment(Some("missing"));
    assert!(!page.on_hash_change(&env));
    assert_eq!(page.selected().unwrap().id, "p2");

    env.set_fragment(None);
    assert!(page.on_hash_change(&env));
    assert!(page.selected().is_none());
}

#[test]
fn unknown_profession_fragment_clears_selection() {
    let mut env = MemoryEnvironment::new().with_fragment("frontend");
    let mut page = ProfessionsController::new(common::catalog());

    assert!(page.on_hash_change(&env));
    let view = page.view();
    assert!(view.region("profession-team").is_some());
    assert!(view
        .region("professions-grid")
        .unwrap()
        .cards()
        .iter()
        .any(|card| card.active && card.id.as_deref() == Some("frontend")));

    env.set_fragment(Some("designers"));
    assert!(page.on_hash_change(&env));
    assert!(page.selected().is_none());
    assert!(page.view().region("profession-team").is_none());
}

#[test]
fn profession_detail_orders_competencies_by_level() {
    let env = MemoryEnvironment::new().with_fragment("frontend");
    let mut page = ProfessionsController::new(common::catalog());
    page.on_hash_change(&env);

    let view = page.view();
    let competencies = format!("{:?}", view.region("profession-competencies").unwrap());
    let advanced = competencies.find("Архитектура").unwrap();
    let basic = competencies.find("HTML").unwrap();
    assert!(advanced < basic);
}

#[test]
fn event_fragment_opens_modal() {
    let env = MemoryEnvironment::new()
        .with_today(common::today())
        .with_fragment("e1");
    let mut page = EventsController::new(common::catalog(), &env);

    assert!(page.on_hash_change(&env));
    let modal = page.view().modal.unwrap();
    assert_eq!(modal.title, "Митап по тестированию");
    assert_eq!(modal.field("Спикер"), Some("Борис Орлов"));
}

#[test]
fn member_fragment_highlights_card() {
    let env = MemoryEnvironment::new().with_fragment("m4");
    let mut page = MembersController::new(common::catalog(), &env);

    assert!(page.on_hash_change(&env));
    let view = page.view();
    let active = view
        .region("members-grid")
        .unwrap()
        .cards()
        .iter()
        .filter(|card| card.active)
        .map(|card| card.id.clone().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(active, ["m4"]);
}

#[test]
fn event_modal_and_fragment_stay_in_step() {
    let mut env = MemoryEnvironment::new()
        .with_today(common::today())
        .with_fragment("e1");
    let mut page = EventsController::new(common::catalog(), &env);
    page.on_hash_change(&env);

    assert!(page.apply(&Action::CloseDetail, &mut env));
    assert!(page.view().modal.is_none());
    assert_eq!(env.fragment(), None);

    assert!(page.apply(&Action::Select("e2".to_string()), &mut env));
    assert_eq!(env.fragment().as_deref(), Some("e2"));
    assert_eq!(page.view().modal.unwrap().title, "Воркшоп по CSS");

    env.set_fragment(None);
    assert!(page.on_hash_change(&env));
    assert!(!page.has_detail());

    assert!(page.apply(&Action::SelectDay(20), &mut env));
    assert_eq!(env.fragment(), None);
    assert!(!page.on_hash_change(&env));
    assert!(page.has_detail());
}
