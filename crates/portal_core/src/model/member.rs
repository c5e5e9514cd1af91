//! Community member record.

use super::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    /// One of `lead | expert | contributor | newcomer`.
    #[serde(deserialize_with = "de::string")]
    pub role: String,
    /// Profession ids (soft references).
    #[serde(deserialize_with = "de::string_list")]
    pub professions: Vec<String>,
    #[serde(deserialize_with = "de::number")]
    pub contributions: u64,
    #[serde(deserialize_with = "de::string")]
    pub bio: String,
}
