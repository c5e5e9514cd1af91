//! Changelog entry record.

use super::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChangelogEntry {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    /// ISO date (`YYYY-MM-DD`).
    #[serde(deserialize_with = "de::string")]
    pub date: String,
    /// One of `added | changed | deprecated | removed`.
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub profession: Option<String>,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(deserialize_with = "de::string")]
    pub author: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub version: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub related_rfc: Option<String>,
}
