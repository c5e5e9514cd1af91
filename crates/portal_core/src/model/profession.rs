//! Profession (community) record with its team, competencies and resources.

use super::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Profession {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub short_name: String,
    #[serde(deserialize_with = "de::string")]
    pub icon: String,
    #[serde(deserialize_with = "de::string")]
    pub color: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    /// Member id of the community lead.
    #[serde(deserialize_with = "de::opt_string")]
    pub lead: Option<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub experts: Vec<String>,
    #[serde(deserialize_with = "de::string_list")]
    pub contributors: Vec<String>,
    /// Practice ids adopted by this profession.
    #[serde(deserialize_with = "de::string_list")]
    pub practices: Vec<String>,
    pub competencies: Vec<Competency>,
    pub resources: Vec<Resource>,
    #[serde(deserialize_with = "de::string")]
    pub version: String,
    #[serde(deserialize_with = "de::string")]
    pub last_updated: String,
}

impl Profession {
    /// Distinct member ids across lead, experts and contributors.
    pub fn member_count(&self) -> usize {
        let mut ids: Vec<&str> = Vec::new();
        let all = self
            .lead
            .iter()
            .chain(self.experts.iter())
            .chain(self.contributors.iter());
        for id in all {
            if !ids.contains(&id.as_str()) {
                ids.push(id.as_str());
            }
        }
        ids.len()
    }

    /// Short name when present, full name otherwise.
    pub fn display_name(&self) -> &str {
        if self.short_name.is_empty() {
            &self.name
        } else {
            &self.short_name
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Competency {
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    /// `basic | intermediate | advanced`.
    #[serde(deserialize_with = "de::string")]
    pub level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    /// `guide | template | checklist | dashboard`.
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub url: String,
}
