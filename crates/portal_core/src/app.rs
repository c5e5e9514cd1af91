//! Application shell shared by every page.
//!
//! # Responsibility
//! - Own the fixture store, the host environment, the active page and the
//!   global search overlay.
//! - Route navigation, hash changes and keyboard shortcuts.
//!
//! # Invariants
//! - Exactly one page is active; it moves `Loading → Ready` once per
//!   navigation.
//! - `Escape` closes the search overlay before it closes a page detail.

use crate::env::{set_selected_profession, Environment};
use crate::filter::PROFESSION;
use crate::fixture::{FixtureSet, FixtureStore};
use crate::page::{load_page, Action, PageKind, PageSlot, RouteError};
use crate::search::SearchSession;
use crate::view::{PageView, SearchPanel};
use log::{info, warn};

/// Keys the shell reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
}

/// One key press with the modifiers that matter for shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    fn is_search_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && matches!(self.key, Key::Char('k') | Key::Char('K'))
    }
}

pub struct App<E: Environment> {
    store: FixtureStore,
    env: E,
    page: PageSlot,
    search: SearchSession,
}

impl<E: Environment> App<E> {
    /// Creates a shell showing the dashboard in its loading state.
    pub fn new(store: FixtureStore, env: E) -> Self {
        Self {
            store,
            env,
            page: PageSlot::Loading(PageKind::Dashboard),
            search: SearchSession::new(),
        }
    }

    pub fn store(&self) -> &FixtureStore {
        &self.store
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    pub fn page_kind(&self) -> PageKind {
        self.page.kind()
    }

    pub fn is_ready(&self) -> bool {
        self.page.is_ready()
    }

    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    /// Warms the cache so global search sees every collection.
    pub fn preload_all(&self) -> FixtureSet {
        self.store.preload_all()
    }

    /// Opens `target`, a page stem optionally followed by `#fragment`, then
    /// warms the cache with every other fixture so global search sees all
    /// collections.
    ///
    /// The fragment replaces the current one; a target without a fragment
    /// clears it.
    ///
    /// # Errors
    /// - Returns `RouteError::UnknownPage` for stems outside the portal; the
    ///   active page is left untouched.
    pub fn navigate(&mut self, target: &str) -> Result<(), RouteError> {
        let (stem, fragment) = match target.split_once('#') {
            Some((stem, fragment)) => (stem, Some(fragment)),
            None => (target, None),
        };
        let kind = PageKind::parse(stem).map_err(|err| {
            warn!("event=navigate module=app status=error target={target} error={err}");
            err
        })?;

        self.env.set_fragment(fragment);
        self.page = PageSlot::Loading(kind);
        let controller = load_page(kind, &self.store, &self.env);
        self.page = PageSlot::Ready(controller);
        let preloaded = self.store.preload_all();
        info!(
            "event=navigate module=app status=ok page={kind} preloaded={}",
            preloaded.keys().filter(|key| preloaded.is_present(key)).count()
        );
        Ok(())
    }

    /// Current page description, `None` while the page is still loading.
    pub fn view(&self) -> Option<PageView> {
        match &self.page {
            PageSlot::Ready(controller) => Some(controller.view()),
            PageSlot::Loading(_) => None,
        }
    }

    /// Delivers `action` to the active page; returns whether it re-renders.
    pub fn apply(&mut self, action: Action) -> bool {
        match &mut self.page {
            PageSlot::Ready(controller) => controller.apply(&action, &mut self.env),
            PageSlot::Loading(_) => false,
        }
    }

    /// Replaces the fragment from outside (back button, pasted link).
    pub fn hash_changed(&mut self, fragment: Option<&str>) -> bool {
        self.env.set_fragment(fragment);
        match &mut self.page {
            PageSlot::Ready(controller) => controller.on_hash_change(&self.env),
            PageSlot::Loading(_) => false,
        }
    }

    /// Header profession selector: persists the choice and forwards it to
    /// pages that filter by profession.
    pub fn select_profession(&mut self, profession: &str) -> bool {
        set_selected_profession(&mut self.env, profession);
        match self.page.kind() {
            PageKind::Members | PageKind::Changelog => {
                self.apply(Action::filter(PROFESSION, profession))
            }
            _ => false,
        }
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.search.set_query(query, &self.store);
    }

    /// Search overlay contents, `None` while it is closed.
    pub fn search_panel(&self) -> Option<SearchPanel> {
        self.search.is_open().then(|| self.search.panel())
    }

    /// Copyable text of the active page.
    pub fn export(&self) -> Option<String> {
        match &self.page {
            PageSlot::Ready(controller) => controller.export(),
            PageSlot::Loading(_) => None,
        }
    }

    /// Applies global shortcuts; returns whether anything visible changed.
    pub fn handle_key(&mut self, press: KeyPress) -> bool {
        if press.is_search_shortcut() {
            self.search.toggle();
            return true;
        }

        if self.search.is_open() {
            return match press.key {
                Key::Escape => {
                    self.search.close();
                    true
                }
                Key::ArrowDown => {
                    self.search.move_down();
                    true
                }
                Key::ArrowUp => {
                    self.search.move_up();
                    true
                }
                Key::Enter => match self.search.commit() {
                    Some(link) => match self.navigate(&link) {
                        Ok(()) => true,
                        Err(_) => false,
                    },
                    None => false,
                },
                Key::Char(_) => false,
            };
        }

        let has_detail = match &self.page {
            PageSlot::Ready(controller) => controller.has_detail(),
            PageSlot::Loading(_) => false,
        };
        if press.key == Key::Escape && has_detail {
            return self.apply(Action::CloseDetail);
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{Key, KeyPress};

    #[test]
    fn search_shortcut_needs_a_modifier() {
        assert!(KeyPress::ctrl(Key::Char('k')).is_search_shortcut());
        assert!(KeyPress {
            key: Key::Char('K'),
            ctrl: false,
            meta: true,
        }
        .is_search_shortcut());
        assert!(!KeyPress::plain(Key::Char('k')).is_search_shortcut());
    }
}
