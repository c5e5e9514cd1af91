//! Typed records for every fixture collection.
//!
//! # Responsibility
//! - Give each fixture record an explicit Rust shape.
//! - Apply the default-on-missing-field policy once, at decode time, so
//!   render code never handles absent fields.
//!
//! # Invariants
//! - Every field has a default; only non-object records fail to decode.
//! - Cross-record ids (speaker, author, relatedRfc, ...) are soft references
//!   and are never validated here.

pub mod announcement;
pub mod catalog;
pub mod changelog;
pub(crate) mod de;
pub mod event;
pub mod glossary;
pub mod labels;
pub mod member;
pub mod practice;
pub mod profession;
pub mod rfc;

pub use announcement::Announcement;
pub use catalog::Catalog;
pub use changelog::ChangelogEntry;
pub use event::Event;
pub use glossary::GlossaryTerm;
pub use member::Member;
pub use practice::{AdoptionMatrix, Practice, PracticeDependency};
pub use profession::{Competency, Profession, Resource};
pub use rfc::{Discussion, Rfc, StatusChange, Voting};
