//! Practices page: status and category filters, grid or adoption matrix,
//! and a hash-opened practice modal.

use super::{set_filter, Action, PageController, PageKind};
use crate::env::Environment;
use crate::filter::{FilterState, ALL, CATEGORY, STATUS};
use crate::model::labels::ADOPTION_LABELS;
use crate::model::{AdoptionMatrix, Catalog, Practice, PracticeDependency, Profession};
use crate::repo::lookup::{find_by_id, find_practice};
use crate::view::format::truncate_chars;
use crate::view::{
    Badge, Block, Card, ChipRow, EmptyState, Field, Link, Matrix, MatrixRow, Modal, PageView,
    Region,
};

const FILTER_KEYS: &[&str] = &[STATUS, CATEGORY];
const CARD_DESCRIPTION_CHARS: usize = 120;
const STATUS_CHIPS: &[(&str, &str)] = &[
    (ALL, "Все"),
    ("accepted", "Принятые"),
    ("review", "Ревью"),
    ("draft", "Черновики"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PracticesView {
    #[default]
    Grid,
    Matrix,
}

impl PracticesView {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "grid" => Some(Self::Grid),
            "matrix" => Some(Self::Matrix),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Matrix => "matrix",
        }
    }
}

pub struct PracticesController {
    practices: Vec<Practice>,
    professions: Vec<Profession>,
    adoption: AdoptionMatrix,
    dependencies: Vec<PracticeDependency>,
    /// Distinct categories in fixture order.
    categories: Vec<String>,
    filters: FilterState,
    mode: PracticesView,
    selected: Option<String>,
}

impl PracticesController {
    pub fn new(catalog: Catalog) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for practice in &catalog.practices {
            if !categories.contains(&practice.category) {
                categories.push(practice.category.clone());
            }
        }
        Self {
            practices: catalog.practices,
            professions: catalog.professions,
            adoption: catalog.adoption,
            dependencies: catalog.dependencies,
            categories,
            filters: FilterState::new(),
            mode: PracticesView::default(),
            selected: None,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn mode(&self) -> PracticesView {
        self.mode
    }

    pub fn visible(&self) -> Vec<&Practice> {
        self.filters.apply(&self.practices)
    }

    pub fn selected(&self) -> Option<&Practice> {
        self.selected
            .as_deref()
            .and_then(|id| find_practice(&self.practices, id))
    }

    fn profession_badges(&self, practice: &Practice) -> Vec<Badge> {
        practice
            .professions
            .iter()
            .map(|id| Badge::profession(id, &self.professions))
            .collect()
    }

    fn grid(&self, practices: &[&Practice]) -> Block {
        let cards = practices
            .iter()
            .map(|practice| {
                let mut card = Card::new(&practice.name)
                    .id(&practice.id)
                    .badge(Badge::status(&practice.status))
                    .badges(self.profession_badges(practice))
                    .meta(&practice.category)
                    .description(truncate_chars(&practice.description, CARD_DESCRIPTION_CHARS))
                    .link(format!("practices.html#{}", practice.id));
                card.progress = Some(practice.adoption_level);
                card
            })
            .collect();
        Block::Cards(cards)
    }

    fn matrix(&self, practices: &[&Practice]) -> Block {
        Block::Matrix(Matrix {
            legend: ADOPTION_LABELS
                .iter()
                .map(|(status, label)| Badge::new(*status, *label))
                .collect(),
            columns: self
                .professions
                .iter()
                .map(|profession| profession.display_name().to_string())
                .collect(),
            rows: practices
                .iter()
                .map(|practice| MatrixRow {
                    label: practice.name.clone(),
                    cells: self
                        .professions
                        .iter()
                        .map(|profession| {
                            Badge::adoption(self.adoption.status(&practice.id, &profession.id))
                        })
                        .collect(),
                })
                .collect(),
        })
    }

    fn dependency_names(&self, ids: &[String]) -> String {
        ids.iter()
            .map(|id| {
                find_practice(&self.practices, id)
                    .map_or(id.as_str(), |practice| practice.name.as_str())
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn modal(&self, practice: &Practice) -> Modal {
        let mut badges = vec![Badge::status(&practice.status)];
        badges.extend(self.profession_badges(practice));
        let mut modal = Modal::new(&practice.name).large().with(Block::Badges(badges));

        if !practice.description.is_empty() {
            modal.push(Block::Text(practice.description.clone()));
        }
        if let Some(rationale) = &practice.rationale {
            modal.push(Block::Heading("Обоснование".to_string()));
            modal.push(Block::Text(rationale.clone()));
        }
        if let Some(guide) = &practice.adoption_guide {
            modal.push(Block::Heading("Гайд по внедрению".to_string()));
            modal.push(Block::Text(guide.clone()));
        }
        if let Some(rfc) = &practice.related_rfc {
            modal.push(Block::Links(vec![Link::new(
                format!("Связанный RFC: {rfc}"),
                format!("rfc.html#{rfc}"),
            )]));
        }
        modal.push(Block::Progress(practice.adoption_level));

        if let Some(dependency) = find_by_id(self.dependencies.as_slice(), &practice.id) {
            let mut fields = Vec::new();
            if !dependency.requires.is_empty() {
                fields.push(Field::new("Требует", self.dependency_names(&dependency.requires)));
            }
            if !dependency.recommends.is_empty() {
                fields.push(Field::new(
                    "Рекомендует",
                    self.dependency_names(&dependency.recommends),
                ));
            }
            if !fields.is_empty() {
                modal.push(Block::Fields(fields));
            }
        }
        modal
    }
}

impl PageController for PracticesController {
    fn kind(&self) -> PageKind {
        PageKind::Practices
    }

    fn view(&self) -> PageView {
        let category_chips = std::iter::once((ALL.to_string(), "Все категории".to_string()))
            .chain(
                self.categories
                    .iter()
                    .map(|category| (category.clone(), category.clone())),
            );
        let filters = Region::new("practices-filters")
            .with(Block::Chips(ChipRow::build(
                STATUS,
                self.filters.get(STATUS),
                STATUS_CHIPS.iter().copied(),
            )))
            .with(Block::Chips(ChipRow::build(
                CATEGORY,
                self.filters.get(CATEGORY),
                category_chips,
            )));

        let toggle = Region::new("practices-view-toggle").with(Block::Chips(ChipRow::build(
            "view",
            self.mode.as_str(),
            [("grid", "Карточки"), ("matrix", "Матрица")],
        )));

        let visible = self.visible();
        let content = Region::new("practices-content").with(if visible.is_empty() {
            EmptyState::new("📋", "Практики не найдены").into()
        } else {
            match self.mode {
                PracticesView::Grid => self.grid(&visible),
                PracticesView::Matrix => self.matrix(&visible),
            }
        });

        let mut view = PageView::new(PageKind::Practices.title())
            .with_region(filters)
            .with_region(toggle)
            .with_region(content);
        view.modal = self.selected().map(|practice| self.modal(practice));
        view
    }

    fn apply(&mut self, action: &Action, env: &mut dyn Environment) -> bool {
        match action {
            Action::SetFilter { key, value } => {
                set_filter(&mut self.filters, FILTER_KEYS, key, value)
            }
            Action::SetView(mode) => match PracticesView::parse(mode) {
                Some(mode) if mode != self.mode => {
                    self.mode = mode;
                    true
                }
                _ => false,
            },
            Action::Select(id) => {
                if find_practice(&self.practices, id).is_none() {
                    return false;
                }
                env.set_fragment(Some(id.as_str()));
                self.on_hash_change(env)
            }
            Action::CloseDetail => {
                env.set_fragment(None);
                self.on_hash_change(env)
            }
            _ => false,
        }
    }

    /// A known id opens its modal, an empty fragment closes it, and an
    /// unknown id leaves the page as it was.
    fn on_hash_change(&mut self, env: &dyn Environment) -> bool {
        let next = match env.fragment() {
            None => None,
            Some(hash) if find_practice(&self.practices, &hash).is_some() => Some(hash),
            Some(_) => return false,
        };
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    fn has_detail(&self) -> bool {
        self.selected.is_some()
    }
}
