mod common;

use portal_core::env::SELECTED_PROFESSION_KEY;
use portal_core::page::{
    load_page, ChangelogController, DashboardController, GlossaryController, MembersController,
    OnboardingController,
};
use portal_core::view::Block;
use portal_core::{Action, FixtureStore, MemoryEnvironment, MemorySource, PageController, PageKind};

#[test]
fn dashboard_metrics_and_previews() {
    let env = MemoryEnvironment::new().with_today(common::today());
    let page = DashboardController::new(common::catalog(), &env);

    let view = page.view();
    let Some(Block::Metrics(metrics)) = view.region("dashboard-metrics").unwrap().blocks.first()
    else {
        panic!("metrics block expected");
    };
    let values = metrics
        .iter()
        .map(|metric| (metric.label.as_str(), metric.value.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        values,
        [
            ("Принятых практик", "1"),
            ("Активных RFC", "1"),
            ("Ближайших событий", "3"),
            ("Участников", "6"),
        ]
    );
    assert_eq!(metrics[0].trend.as_deref(), Some("из 3 всего"));

    let upcoming = page
        .upcoming_events()
        .iter()
        .map(|event| event.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(upcoming, ["e2", "e1", "e3"]);

    let contributors = view.region("dashboard-contributors").unwrap().cards();
    assert_eq!(contributors.len(), 5);
    assert_eq!(contributors[0].meta, ["40 контрибуций"]);
    assert!(view.region("dashboard-announcements").is_some());
}

#[test]
fn dashboard_without_fixtures_renders_empty_regions() {
    let store = FixtureStore::new(MemorySource::new());
    let env = MemoryEnvironment::new().with_today(common::today());

    let page = load_page(PageKind::Dashboard, &store, &env);

    let view = page.view();
    let rfcs = view.region("dashboard-rfcs").unwrap();
    assert!(rfcs.cards().is_empty());
    assert_eq!(rfcs.empty_state().unwrap().text, "RFC пока нет");
    assert!(view.region("dashboard-announcements").is_none());
}

#[test]
fn leaderboard_takes_top_five_with_stable_ties() {
    let env = MemoryEnvironment::new();
    let page = MembersController::new(common::catalog(), &env);

    let ranked = page
        .leaderboard()
        .iter()
        .map(|member| member.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ranked, ["m1", "m2", "m3", "m4", "m5"]);

    let view = page.view();
    let cards = view.region("members-leaderboard").unwrap().cards();
    assert_eq!(cards[4].rank, Some(5));
}

#[test]
fn persisted_profession_seeds_members_and_changelog() {
    let env = MemoryEnvironment::new().with_preference(SELECTED_PROFESSION_KEY, "qa");

    let members = MembersController::new(common::catalog(), &env);
    assert_eq!(members.filters().get("profession"), "qa");
    assert_eq!(members.visible().len(), 3);

    let changelog = ChangelogController::new(common::catalog(), &env);
    let ids = changelog
        .visible()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, ["c2"]);
}

#[test]
fn changelog_is_newest_first_and_exports_markdown() {
    let env = MemoryEnvironment::new();
    let page = ChangelogController::new(common::catalog(), &env);

    let ids = page
        .visible()
        .iter()
        .map(|entry| entry.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, ["c2", "c1", "c3"]);

    let markdown = page.export().unwrap();
    assert!(markdown.starts_with("## 5 марта 2025\n\n- **[ИЗМЕНЕНО]** Обновлён гайд"));
    assert!(markdown.contains(
        "## 1 февраля 2025\n\n- **[ДОБАВЛЕНО]** Добавлен линтер (v1.2)\n- **[УДАЛЕНО]** Удалён старый чеклист"
    ));
}

#[test]
fn glossary_sorts_cyrillic_before_latin_and_filters_by_search() {
    let mut env = MemoryEnvironment::new();
    let mut page = GlossaryController::new(common::catalog());

    assert_eq!(page.letters(), ["Д", "Ё", "Р", "A"]);

    assert!(page.apply(&Action::SetSearch("  выкат ".to_string()), &mut env));
    let terms = page
        .visible()
        .iter()
        .map(|term| term.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(terms, ["g4"]);
    assert!(!page.apply(&Action::SetSearch("выкат".to_string()), &mut env));

    page.apply(&Action::SetSearch("api".to_string()), &mut env);
    let terms = page
        .visible()
        .iter()
        .map(|term| term.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(terms, ["g2"]);

    page.apply(&Action::SetSearch("zzz".to_string()), &mut env);
    let view = page.view();
    assert_eq!(
        view.region("glossary-content").unwrap().empty_state().unwrap().text,
        "Термины не найдены"
    );
}

#[test]
fn onboarding_faq_and_template() {
    let mut env = MemoryEnvironment::new();
    let mut page = OnboardingController::new();

    page.apply(&Action::ToggleFaq(0), &mut env);

    let view = page.view();
    let Some(Block::Accordion(items)) = view.region("onboarding-faq").unwrap().blocks.first()
    else {
        panic!("accordion expected");
    };
    assert_eq!(items.len(), 6);
    assert!(items[0].open);
    assert!(!items[1].open);
    assert!(page.export().unwrap().starts_with("# RFC: [Название]"));
}

#[test]
fn load_page_uses_only_required_fixtures() {
    let source = std::sync::Arc::new(common::portal_source());
    let store = FixtureStore::new(std::sync::Arc::clone(&source));
    let env = MemoryEnvironment::new();

    let page = load_page(PageKind::Glossary, &store, &env);

    assert_eq!(page.kind(), PageKind::Glossary);
    assert_eq!(store.cached_names(), ["glossary.json"]);
    assert_eq!(source.fetch_count("members.json"), 0);
}
