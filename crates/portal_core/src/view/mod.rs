//! Renderer-agnostic view descriptions.
//!
//! # Responsibility
//! - Describe what a page shows as plain data derived from controller state.
//! - Keep every markup decision out of page controllers.
//!
//! # Invariants
//! - Building a view never mutates controller state.
//! - An empty derived collection is described with [`EmptyState`], never
//!   with an empty container.
//! - Missing soft references render a fallback label, never an omitted row.

pub mod format;
pub mod text;

pub use text::{Renderer, TextRenderer};

use crate::model::labels::{
    adoption_label, event_type_label, level_label, role_label, status_label,
};
use crate::model::Profession;
use crate::repo::lookup::find_profession;

/// Full description of one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: String,
    pub regions: Vec<Region>,
    /// Detail overlay, when one is open.
    pub modal: Option<Modal>,
}

impl PageView {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            regions: Vec::new(),
            modal: None,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.regions.push(region);
        self
    }

    pub fn region(&self, id: &str) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }
}

/// One independently regenerated area of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub title: Option<String>,
    /// "See all" style link next to the title.
    pub link: Option<Link>,
    pub blocks: Vec<Block>,
}

impl Region {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            title: None,
            link: None,
            blocks: Vec::new(),
        }
    }

    pub fn titled(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn linked(mut self, label: impl Into<String>, href: impl Into<String>) -> Self {
        self.link = Some(Link::new(label, href));
        self
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    /// Returns the empty-state placeholder when the region shows one.
    pub fn empty_state(&self) -> Option<&EmptyState> {
        self.blocks.iter().find_map(|block| match block {
            Block::Empty(empty) => Some(empty),
            _ => None,
        })
    }

    /// Cards of the first card block, or an empty slice.
    pub fn cards(&self) -> &[Card] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::Cards(cards) => Some(cards.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(String),
    Text(String),
    Chips(ChipRow),
    Metrics(Vec<MetricCard>),
    Cards(Vec<Card>),
    Badges(Vec<Badge>),
    Fields(Vec<Field>),
    Progress(u64),
    Matrix(Matrix),
    Calendar(CalendarView),
    Steps(Vec<Step>),
    Accordion(Vec<AccordionItem>),
    Links(Vec<Link>),
    /// Preformatted text offered for copying.
    Code(String),
    SearchInput { placeholder: String, value: String },
    Empty(EmptyState),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// A small colored label; `kind` names the styling variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub kind: String,
    pub label: String,
}

impl Badge {
    pub fn new(kind: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            label: label.into(),
        }
    }

    pub fn plain(label: impl Into<String>) -> Self {
        Self::new("", label)
    }

    pub fn status(status: &str) -> Self {
        Self::new(status, status_label(status))
    }

    pub fn role(role: &str) -> Self {
        Self::new(role, role_label(role))
    }

    pub fn event_type(kind: &str) -> Self {
        Self::new(kind, event_type_label(kind))
    }

    pub fn level(level: &str) -> Self {
        Self::new(level, level_label(level))
    }

    /// Adoption cell; an empty value renders as `na`.
    pub fn adoption(status: &str) -> Self {
        let kind = if status.is_empty() { "na" } else { status };
        Self::new(kind, adoption_label(kind))
    }

    /// Profession short name, falling back to the raw id.
    pub fn profession(id: &str, professions: &[Profession]) -> Self {
        let label = find_profession(professions, id)
            .map(|profession| profession.display_name().to_string())
            .unwrap_or_else(|| id.to_string());
        Self::new(id, label)
    }
}

/// One filter or toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chip {
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// A row of mutually exclusive chips bound to one state key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipRow {
    pub key: &'static str,
    pub chips: Vec<Chip>,
}

impl ChipRow {
    /// Builds a row marking the chip equal to `current` as active.
    pub fn build<I, V, L>(key: &'static str, current: &str, options: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: Into<String>,
        L: Into<String>,
    {
        let chips = options
            .into_iter()
            .map(|(value, label)| {
                let value = value.into();
                Chip {
                    active: value == current,
                    value,
                    label: label.into(),
                }
            })
            .collect();
        Self { key, chips }
    }

    pub fn active(&self) -> Option<&Chip> {
        self.chips.iter().find(|chip| chip.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub icon: String,
    pub trend: Option<String>,
}

/// Generic list or grid item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Card {
    pub id: Option<String>,
    /// Leading glyph or avatar initials.
    pub icon: Option<String>,
    /// Position in a ranked list, starting at 1.
    pub rank: Option<usize>,
    pub title: String,
    pub badges: Vec<Badge>,
    pub meta: Vec<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub progress: Option<u64>,
    pub link: Option<String>,
    pub active: bool,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn badge(mut self, badge: Badge) -> Self {
        self.badges.push(badge);
        self
    }

    pub fn badges(mut self, badges: impl IntoIterator<Item = Badge>) -> Self {
        self.badges.extend(badges);
        self
    }

    /// Appends a meta fragment; empty text is skipped.
    pub fn meta(mut self, meta: impl Into<String>) -> Self {
        let meta = meta.into();
        if !meta.is_empty() {
            self.meta.push(meta);
        }
        self
    }

    /// Sets the description; empty text leaves it unset.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.description = (!text.is_empty()).then_some(text);
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.link = Some(href.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

impl Field {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Row-labelled grid of badges (practice × profession adoption).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub legend: Vec<Badge>,
    pub columns: Vec<String>,
    pub rows: Vec<MatrixRow>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixRow {
    pub label: String,
    pub cells: Vec<Badge>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    /// `Март 2025`.
    pub title: String,
    pub weekdays: Vec<String>,
    pub cells: Vec<CalendarCell>,
}

impl CalendarView {
    pub fn day(&self, day: u32) -> Option<&CalendarCell> {
        self.cells.iter().find(|cell| cell.day == Some(day))
    }
}

/// One grid cell; `day` is `None` for leading blanks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarCell {
    pub day: Option<u32>,
    pub today: bool,
    pub selected: bool,
    pub events: Vec<CalendarEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub number: usize,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionItem {
    pub title: String,
    pub body: String,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub title: String,
    pub large: bool,
    pub blocks: Vec<Block>,
}

impl Modal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            large: false,
            blocks: Vec::new(),
        }
    }

    pub fn large(mut self) -> Self {
        self.large = true;
        self
    }

    pub fn with(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Value of the first field with `label`, if any.
    pub fn field(&self, label: &str) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Fields(fields) => fields
                .iter()
                .find(|field| field.label == label)
                .map(|field| field.value.as_str()),
            _ => None,
        })
    }
}

/// Placeholder shown instead of an empty collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub icon: String,
    pub text: String,
}

impl EmptyState {
    pub fn new(icon: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
        }
    }
}

impl From<EmptyState> for Block {
    fn from(value: EmptyState) -> Self {
        Block::Empty(value)
    }
}

/// Global search overlay as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPanel {
    pub query: String,
    /// Prompt or "nothing found" message; `None` when results are shown.
    pub notice: Option<String>,
    pub groups: Vec<SearchGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGroup {
    pub title: String,
    pub entries: Vec<SearchEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEntry {
    pub icon: String,
    pub title: String,
    pub subtitle: String,
    pub link: String,
    pub highlighted: bool,
}
