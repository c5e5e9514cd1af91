//! Glossary page: alphabetical terms, letter navigation, and a search box.

use super::{Action, PageController, PageKind};
use crate::env::Environment;
use crate::model::{Catalog, GlossaryTerm};
use crate::view::format::collation_key;
use crate::view::{Badge, Block, Card, EmptyState, Link, PageView, Region};

pub struct GlossaryController {
    /// Terms in collation order.
    terms: Vec<GlossaryTerm>,
    letters: Vec<String>,
    search: String,
    focused: Option<String>,
}

impl GlossaryController {
    pub fn new(catalog: Catalog) -> Self {
        let mut terms = catalog.glossary;
        terms.sort_by_cached_key(|term| collation_key(&term.term));

        let mut letters: Vec<String> = Vec::new();
        for letter in terms.iter().map(GlossaryTerm::letter) {
            if !letter.is_empty() && !letters.contains(&letter) {
                letters.push(letter);
            }
        }

        Self {
            terms,
            letters,
            search: String::new(),
            focused: None,
        }
    }

    pub fn letters(&self) -> &[String] {
        &self.letters
    }

    /// Terms matching the current search, in collation order.
    pub fn visible(&self) -> Vec<&GlossaryTerm> {
        if self.search.is_empty() {
            return self.terms.iter().collect();
        }
        let needle = self.search.to_lowercase();
        self.terms
            .iter()
            .filter(|term| {
                term.term.to_lowercase().contains(&needle)
                    || term.definition.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn term_card(&self, term: &GlossaryTerm) -> Card {
        let mut card = Card::new(&term.term)
            .id(format!("term-{}", term.id))
            .description(&term.definition)
            .badge(Badge::plain(&term.category));
        card.tags = term.related.clone();
        card.active = self.focused.as_deref() == Some(term.id.as_str());
        card
    }
}

impl PageController for GlossaryController {
    fn kind(&self) -> PageKind {
        PageKind::Glossary
    }

    fn view(&self) -> PageView {
        let nav = Region::new("glossary-alpha-nav").with(Block::Links(
            self.letters
                .iter()
                .map(|letter| Link::new(letter, format!("#letter-{letter}")))
                .collect(),
        ));
        let search = Region::new("glossary-search").with(Block::SearchInput {
            placeholder: "Поиск терминов...".to_string(),
            value: self.search.clone(),
        });

        let visible = self.visible();
        let mut content = Region::new("glossary-content");
        if visible.is_empty() {
            content = content.with(EmptyState::new("📖", "Термины не найдены").into());
        }
        let mut groups: Vec<(String, Vec<Card>)> = Vec::new();
        for term in visible {
            let letter = term.letter();
            let card = self.term_card(term);
            match groups.iter_mut().find(|(existing, _)| *existing == letter) {
                Some((_, cards)) => cards.push(card),
                None => groups.push((letter, vec![card])),
            }
        }
        groups.sort_by_cached_key(|(letter, _)| collation_key(letter));
        for (letter, cards) in groups {
            content = content.with(Block::Heading(letter)).with(Block::Cards(cards));
        }

        PageView::new(PageKind::Glossary.title())
            .with_region(nav)
            .with_region(search)
            .with_region(content)
    }

    fn apply(&mut self, action: &Action, _env: &mut dyn Environment) -> bool {
        match action {
            Action::SetSearch(text) => {
                let text = text.trim();
                if text == self.search {
                    return false;
                }
                self.search = text.to_string();
                true
            }
            _ => false,
        }
    }

    fn on_hash_change(&mut self, env: &dyn Environment) -> bool {
        let focused = env
            .fragment()
            .filter(|id| self.terms.iter().any(|term| &term.id == id));
        let changed = focused != self.focused;
        self.focused = focused;
        changed
    }
}
