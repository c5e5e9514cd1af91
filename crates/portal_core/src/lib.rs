//! Core logic for the community portal.
//! This crate is the single source of truth for fixture loading, lookups,
//! search and page state; hosts only render what it describes.

pub mod app;
pub mod config;
pub mod db;
pub mod env;
pub mod filter;
pub mod fixture;
pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod search;
pub mod view;

pub use app::{App, Key, KeyPress};
pub use config::{ConfigError, DataSource, PortalConfig};
pub use env::{Environment, MemoryEnvironment, PersistentEnvironment};
pub use filter::{FilterState, ALL};
pub use fixture::{
    DirectorySource, FetchError, FixtureSet, FixtureSource, FixtureStatus, FixtureStore,
    HttpSource, MemorySource,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::Catalog;
pub use page::{load_page, Action, PageController, PageKind, RouteError};
pub use repo::preference_repo::{
    PreferenceError, PreferenceRepository, SqlitePreferenceRepository,
};
pub use search::{search, SearchOutcome, SearchResultItem, SearchSession};
pub use view::{PageView, Renderer, SearchPanel, TextRenderer};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
