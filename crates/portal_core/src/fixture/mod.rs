//! Fixture loading: named JSON documents fetched once and shared read-only.
//!
//! # Responsibility
//! - Abstract where fixture bytes come from (`FixtureSource`).
//! - Memoize parsed documents per name for the lifetime of a store.
//!
//! # Invariants
//! - Repeated loads of one name return the same `Arc`.
//! - Load failures never propagate past the store; callers see `None`.

pub mod source;
pub mod store;

pub use source::{DirectorySource, FetchError, FixtureSource, HttpSource, MemorySource};
pub use store::{fixture_key, FixtureSet, FixtureStatus, FixtureStore, ALL_FIXTURES};

pub const PROFESSIONS: &str = "professions.json";
pub const PRACTICES: &str = "practices.json";
pub const RFCS: &str = "rfcs.json";
pub const EVENTS: &str = "events.json";
pub const MEMBERS: &str = "members.json";
pub const CHANGELOG: &str = "changelog.json";
pub const GLOSSARY: &str = "glossary.json";
pub const ANNOUNCEMENTS: &str = "announcements.json";
pub const ADOPTION_MATRIX: &str = "adoption-matrix.json";
pub const PRACTICE_DEPENDENCIES: &str = "practice-dependencies.json";
