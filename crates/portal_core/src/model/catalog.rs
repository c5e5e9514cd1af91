//! Typed snapshot of a settled fixture batch.
//!
//! # Responsibility
//! - Unwrap nested collections (`practices`, `matrix`).
//! - Decode records one by one, skipping (and logging) those that fail.
//!
//! # Invariants
//! - An absent or failed fixture yields an empty collection, never an error.

use super::{
    AdoptionMatrix, Announcement, ChangelogEntry, Event, GlossaryTerm, Member, Practice,
    PracticeDependency, Profession, Rfc,
};
use crate::fixture::{fixture_key, FixtureSet};
use crate::fixture::{
    ADOPTION_MATRIX, ANNOUNCEMENTS, CHANGELOG, EVENTS, GLOSSARY, MEMBERS, PRACTICES,
    PRACTICE_DEPENDENCIES, PROFESSIONS, RFCS,
};
use log::warn;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub professions: Vec<Profession>,
    pub practices: Vec<Practice>,
    pub rfcs: Vec<Rfc>,
    pub events: Vec<Event>,
    pub members: Vec<Member>,
    pub changelog: Vec<ChangelogEntry>,
    pub glossary: Vec<GlossaryTerm>,
    pub announcements: Vec<Announcement>,
    pub adoption: AdoptionMatrix,
    pub dependencies: Vec<PracticeDependency>,
}

impl Catalog {
    /// Builds typed collections from whatever the batch contains.
    pub fn from_set(set: &FixtureSet) -> Self {
        let doc = |name: &str| set.get(&fixture_key(name));

        Self {
            professions: decode_records(doc(PROFESSIONS), PROFESSIONS),
            practices: decode_records(
                doc(PRACTICES).and_then(|value| value.get("practices")),
                PRACTICES,
            ),
            rfcs: decode_records(doc(RFCS), RFCS),
            events: decode_records(doc(EVENTS), EVENTS),
            members: decode_records(doc(MEMBERS), MEMBERS),
            changelog: decode_records(doc(CHANGELOG), CHANGELOG),
            glossary: decode_records(doc(GLOSSARY), GLOSSARY),
            announcements: decode_records(doc(ANNOUNCEMENTS), ANNOUNCEMENTS),
            adoption: decode_matrix(doc(ADOPTION_MATRIX).and_then(|value| value.get("matrix"))),
            dependencies: decode_records(doc(PRACTICE_DEPENDENCIES), PRACTICE_DEPENDENCIES),
        }
    }
}

/// Decodes an array of records; non-arrays decode to an empty list.
pub fn decode_records<T: DeserializeOwned>(value: Option<&Value>, fixture: &str) -> Vec<T> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match T::deserialize(item) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    "event=record_decode module=model status=error fixture={fixture} index={index} error={err}"
                );
                None
            }
        })
        .collect()
}

fn decode_matrix(value: Option<&Value>) -> AdoptionMatrix {
    let Some(value) = value else {
        return AdoptionMatrix::default();
    };
    AdoptionMatrix::deserialize(value).unwrap_or_else(|err| {
        warn!(
            "event=record_decode module=model status=error fixture={ADOPTION_MATRIX} error={err}"
        );
        AdoptionMatrix::default()
    })
}
