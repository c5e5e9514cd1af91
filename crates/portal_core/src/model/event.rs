//! Community event record.

use super::de;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub title: String,
    #[serde(deserialize_with = "de::string")]
    pub description: String,
    /// One of `meetup | workshop | review-event | demo | retro`.
    #[serde(rename = "type", deserialize_with = "de::string")]
    pub kind: String,
    #[serde(deserialize_with = "de::string")]
    pub date: String,
    #[serde(deserialize_with = "de::string")]
    pub time: String,
    #[serde(deserialize_with = "de::string")]
    pub duration: String,
    /// Member id of the speaker.
    #[serde(deserialize_with = "de::opt_string")]
    pub speaker: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub profession: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub location: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub link: Option<String>,
}

impl Event {
    /// Calendar day of the event; `None` when the date does not parse.
    pub fn day(&self) -> Option<NaiveDate> {
        crate::view::format::parse_date(&self.date)
    }

    /// True when the event falls strictly after `today`.
    ///
    /// Unparseable dates count as past so they never appear as upcoming.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.day().is_some_and(|day| day > today)
    }
}
