//! Global search over cached fixtures.
//!
//! # Responsibility
//! - Linear, case-insensitive substring scan of five collections.
//! - Distinguish "query too short" from "no matches".
//! - Track overlay state and keyboard highlight.
//!
//! # Invariants
//! - Results are recomputed on every query change and never cached.
//! - The highlight is clamped at both ends of the flattened result list.

pub mod global;
pub mod matcher;
pub mod session;

pub use global::{search, search_in, SearchOutcome, SearchResultItem, MIN_QUERY_CHARS};
pub use matcher::matches_search;
pub use session::SearchSession;
