//! Glossary term record.

use super::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GlossaryTerm {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub term: String,
    #[serde(deserialize_with = "de::string")]
    pub definition: String,
    #[serde(deserialize_with = "de::string")]
    pub category: String,
    /// Related term names, shown as clickable tags.
    #[serde(deserialize_with = "de::string_list")]
    pub related: Vec<String>,
}

impl GlossaryTerm {
    /// Uppercased first character of the term, used for alphabet grouping.
    pub fn letter(&self) -> String {
        self.term
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
