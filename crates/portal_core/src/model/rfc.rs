//! RFC record with status history, voting and discussion threads.

use super::de;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Rfc {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::number")]
    pub number: u64,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    #[serde(deserialize_with = "de::string")]
    pub status: String,
    /// Member id of the author.
    #[serde(deserialize_with = "de::string")]
    pub author: String,
    #[serde(deserialize_with = "de::string_list")]
    pub professions: Vec<String>,
    #[serde(deserialize_with = "de::string")]
    pub created_at: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub body: Option<String>,
    pub status_history: Vec<StatusChange>,
    pub voting: Option<Voting>,
    pub discussions: Vec<Discussion>,
    #[serde(deserialize_with = "de::opt_string")]
    pub related_practice: Option<String>,
}

impl Rfc {
    /// Display label, `RFC-007` for number 7.
    pub fn label(&self) -> String {
        crate::view::format::rfc_label(self.number)
    }

    /// URL fragment for deep links, `rfc-007` for number 7.
    pub fn hash_id(&self) -> String {
        self.label().to_lowercase()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusChange {
    #[serde(deserialize_with = "de::string")]
    pub status: String,
    #[serde(deserialize_with = "de::string")]
    pub date: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voting {
    #[serde(rename = "for", deserialize_with = "de::number")]
    pub in_favor: u64,
    #[serde(deserialize_with = "de::number")]
    pub against: u64,
    #[serde(deserialize_with = "de::number")]
    pub abstain: u64,
}

/// A discussion entry is either a bare question or an object with
/// `question` or `title`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Discussion {
    Text(String),
    Topic {
        #[serde(default)]
        question: Option<String>,
        #[serde(default)]
        title: Option<String>,
    },
}

impl Discussion {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Topic { question, title } => question
                .as_deref()
                .or(title.as_deref())
                .unwrap_or_default(),
        }
    }
}
