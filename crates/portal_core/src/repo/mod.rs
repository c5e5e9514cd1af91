//! Read-side lookups over fixture collections and the preference store.
//!
//! # Responsibility
//! - Resolve soft references (`speaker`, `author`, `lead`, ...) by id.
//! - Persist the handful of local UI preferences.
//!
//! # Invariants
//! - Lookups never fail: an absent collection or unknown id yields `None`.

pub mod lookup;
pub mod preference_repo;
