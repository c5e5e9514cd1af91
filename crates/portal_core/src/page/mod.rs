//! Page controllers: one per static page, each owning its filter state.
//!
//! # Responsibility
//! - Map a page stem to the fixtures it needs and the controller that
//!   renders it.
//! - Apply user actions as whole-key state replacements and describe the
//!   resulting page as a [`PageView`].
//!
//! # Invariants
//! - A controller is built only after every required fixture has settled
//!   (`Loading → Ready` happens once).
//! - Controllers own decoded copies of their collections; the shared
//!   fixture cache is never mutated.
//! - For hash-bound pages the fragment is the source of truth for which
//!   detail is open; the in-memory selection only caches the last lookup.

pub mod changelog;
pub mod dashboard;
pub mod events;
pub mod glossary;
pub mod members;
pub mod onboarding;
pub mod practices;
pub mod professions;
pub mod rfc;

pub use changelog::ChangelogController;
pub use dashboard::DashboardController;
pub use events::{EventsController, MonthCursor, TimeWindow};
pub use glossary::GlossaryController;
pub use members::MembersController;
pub use onboarding::OnboardingController;
pub use practices::PracticesController;
pub use professions::ProfessionsController;
pub use rfc::RfcController;

use crate::env::Environment;
use crate::filter::{FilterState, ALL};
use crate::fixture::{
    FixtureStore, ADOPTION_MATRIX, ALL_FIXTURES, CHANGELOG, EVENTS, GLOSSARY, MEMBERS,
    PRACTICES, PRACTICE_DEPENDENCIES, PROFESSIONS, RFCS,
};
use crate::model::{Catalog, Profession};
use crate::view::{Block, Card, ChipRow, EmptyState, PageView};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Static pages, keyed by their file stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Dashboard,
    Professions,
    Practices,
    Members,
    Changelog,
    Glossary,
    Rfc,
    Events,
    Onboarding,
}

impl PageKind {
    pub const ALL: [PageKind; 9] = [
        Self::Dashboard,
        Self::Professions,
        Self::Practices,
        Self::Members,
        Self::Changelog,
        Self::Glossary,
        Self::Rfc,
        Self::Events,
        Self::Onboarding,
    ];

    /// Parses a stem (`members`, `rfc.html`, `/site/events.html`).
    ///
    /// An empty stem is the dashboard.
    pub fn parse(stem: &str) -> Result<Self, RouteError> {
        let file = stem.rsplit('/').next().unwrap_or(stem).trim();
        let stem_only = file.strip_suffix(".html").unwrap_or(file);
        match stem_only {
            "" | "index" => Ok(Self::Dashboard),
            "professions" => Ok(Self::Professions),
            "practices" => Ok(Self::Practices),
            "members" => Ok(Self::Members),
            "changelog" => Ok(Self::Changelog),
            "glossary" => Ok(Self::Glossary),
            "rfc" => Ok(Self::Rfc),
            "events" => Ok(Self::Events),
            "onboarding" => Ok(Self::Onboarding),
            other => Err(RouteError::UnknownPage(other.to_string())),
        }
    }

    pub fn stem(self) -> &'static str {
        match self {
            Self::Dashboard => "index",
            Self::Professions => "professions",
            Self::Practices => "practices",
            Self::Members => "members",
            Self::Changelog => "changelog",
            Self::Glossary => "glossary",
            Self::Rfc => "rfc",
            Self::Events => "events",
            Self::Onboarding => "onboarding",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Главная",
            Self::Professions => "Профессии",
            Self::Practices => "Практики",
            Self::Members => "Участники",
            Self::Changelog => "История изменений",
            Self::Glossary => "Глоссарий",
            Self::Rfc => "RFC",
            Self::Events => "События",
            Self::Onboarding => "Онбординг",
        }
    }

    /// Fixtures loaded in parallel before the controller is built.
    pub fn required_fixtures(self) -> &'static [&'static str] {
        match self {
            Self::Dashboard => ALL_FIXTURES,
            Self::Professions => &[PROFESSIONS, MEMBERS, PRACTICES, ADOPTION_MATRIX],
            Self::Practices => &[PRACTICES, PROFESSIONS, ADOPTION_MATRIX, PRACTICE_DEPENDENCIES],
            Self::Members => &[MEMBERS, PROFESSIONS],
            Self::Changelog => &[CHANGELOG, PROFESSIONS, MEMBERS],
            Self::Glossary => &[GLOSSARY],
            Self::Rfc => &[RFCS, MEMBERS, PROFESSIONS],
            Self::Events => &[EVENTS, MEMBERS, PROFESSIONS],
            Self::Onboarding => &[],
        }
    }
}

impl Display for PageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.stem())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnknownPage(String),
}

impl Display for RouteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPage(stem) => write!(f, "unknown page `{stem}`"),
        }
    }
}

impl Error for RouteError {}

/// User interaction delivered to the active controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replaces one filter key; `all` clears it.
    SetFilter { key: String, value: String },
    /// Switches a view mode (`grid`/`matrix`, `list`/`calendar`).
    SetView(String),
    /// Glossary search box contents.
    SetSearch(String),
    /// Card click on a record id.
    Select(String),
    SelectDay(u32),
    PrevMonth,
    NextMonth,
    ToggleFaq(usize),
    CloseDetail,
}

impl Action {
    pub fn filter(key: &str, value: &str) -> Self {
        Self::SetFilter {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub trait PageController {
    fn kind(&self) -> PageKind;

    /// Describes the whole page from current state.
    fn view(&self) -> PageView;

    /// Applies one action; returns whether the page must be re-rendered.
    fn apply(&mut self, action: &Action, env: &mut dyn Environment) -> bool;

    /// Re-reads the fragment after external navigation.
    fn on_hash_change(&mut self, _env: &dyn Environment) -> bool {
        false
    }

    /// True while a modal or inline detail is shown.
    fn has_detail(&self) -> bool {
        false
    }

    /// Text offered for copying (Markdown export, templates).
    fn export(&self) -> Option<String> {
        None
    }
}

/// Lifecycle of the page shown by the application shell.
pub enum PageSlot {
    Loading(PageKind),
    Ready(Box<dyn PageController>),
}

impl PageSlot {
    pub fn kind(&self) -> PageKind {
        match self {
            Self::Loading(kind) => *kind,
            Self::Ready(controller) => controller.kind(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Loads `kind`'s fixtures in parallel and builds its controller.
///
/// Never fails: unreachable fixtures produce empty collections.
pub fn load_page(
    kind: PageKind,
    store: &FixtureStore,
    env: &dyn Environment,
) -> Box<dyn PageController> {
    let started_at = Instant::now();
    let set = store.load_many(kind.required_fixtures());
    let catalog = Catalog::from_set(&set);
    let missing = set.keys().filter(|key| !set.is_present(key)).count();

    let mut controller: Box<dyn PageController> = match kind {
        PageKind::Dashboard => Box::new(DashboardController::new(catalog, env)),
        PageKind::Professions => Box::new(ProfessionsController::new(catalog)),
        PageKind::Practices => Box::new(PracticesController::new(catalog)),
        PageKind::Members => Box::new(MembersController::new(catalog, env)),
        PageKind::Changelog => Box::new(ChangelogController::new(catalog, env)),
        PageKind::Glossary => Box::new(GlossaryController::new(catalog)),
        PageKind::Rfc => Box::new(RfcController::new(catalog)),
        PageKind::Events => Box::new(EventsController::new(catalog, env)),
        PageKind::Onboarding => Box::new(OnboardingController::new()),
    };
    controller.on_hash_change(env);

    info!(
        "event=page_load module=page status=ok page={kind} fixtures={} missing={missing} duration_ms={}",
        set.len(),
        started_at.elapsed().as_millis()
    );
    controller
}

/// Applies `value` to `key` when the page exposes that filter.
pub(crate) fn set_filter(
    filters: &mut FilterState,
    allowed: &[&'static str],
    key: &str,
    value: &str,
) -> bool {
    match allowed.iter().find(|candidate| **candidate == key) {
        Some(key) => filters.set(*key, value),
        None => false,
    }
}

/// `Все` followed by one chip per profession short name.
pub(crate) fn profession_chips(
    key: &'static str,
    current: &str,
    professions: &[Profession],
) -> ChipRow {
    let options = std::iter::once((ALL.to_string(), "Все".to_string())).chain(
        professions
            .iter()
            .map(|profession| (profession.id.clone(), profession.display_name().to_string())),
    );
    ChipRow::build(key, current, options)
}

/// `Все` followed by the entries of a label table.
pub(crate) fn label_chips(
    key: &'static str,
    current: &str,
    labels: &[(&'static str, &'static str)],
) -> ChipRow {
    ChipRow::build(
        key,
        current,
        std::iter::once((ALL, "Все")).chain(labels.iter().copied()),
    )
}

/// Card list, or the empty-state placeholder when there are no cards.
pub(crate) fn cards_or_empty(cards: Vec<Card>, icon: &str, text: &str) -> Block {
    if cards.is_empty() {
        EmptyState::new(icon, text).into()
    } else {
        Block::Cards(cards)
    }
}
