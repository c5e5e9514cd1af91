//! Engineering practice records, their dependencies, and adoption status.

use super::de;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Practice card as stored under `practices.json#/practices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Practice {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(deserialize_with = "de::string")]
    pub category: String,
    /// Shares the RFC status vocabulary (`draft`, `review`, `accepted`, ...).
    #[serde(deserialize_with = "de::string")]
    pub status: String,
    #[serde(deserialize_with = "de::string_list")]
    pub professions: Vec<String>,
    /// Percentage, 0..=100.
    #[serde(deserialize_with = "de::number")]
    pub adoption_level: u64,
    #[serde(deserialize_with = "de::opt_string")]
    pub rationale: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub adoption_guide: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub related_rfc: Option<String>,
}

/// One row of `practice-dependencies.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeDependency {
    #[serde(deserialize_with = "de::string")]
    pub practice: String,
    #[serde(deserialize_with = "de::string_list")]
    pub requires: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub recommends: Vec<String>,
}

/// Adoption status per practice and profession (`adoption-matrix.json#/matrix`).
///
/// Missing cells read as `na`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdoptionMatrix {
    cells: BTreeMap<String, BTreeMap<String, String>>,
}

impl AdoptionMatrix {
    pub const NOT_APPLICABLE: &'static str = "na";

    /// Raw cell value, `None` when the practice or profession has no entry.
    pub fn cell(&self, practice_id: &str, profession_id: &str) -> Option<&str> {
        self.cells
            .get(practice_id)
            .and_then(|row| row.get(profession_id))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Cell value with the `na` fallback applied.
    pub fn status(&self, practice_id: &str, profession_id: &str) -> &str {
        self.cell(practice_id, profession_id)
            .unwrap_or(Self::NOT_APPLICABLE)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
