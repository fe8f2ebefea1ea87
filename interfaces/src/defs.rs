use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A named channel and the identifier its feed is keyed by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    pub display_name: String,
    pub source_id: String,
}

impl ChannelConfig {
    pub fn new(display_name: &str, source_id: &str) -> Self {
        Self {
            display_name: display_name.to_owned(),
            source_id: source_id.to_owned(),
        }
    }
}

/// One entry as delivered by a feed, before any filtering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry {
    pub title: String,
    pub link: String,
    // kept as text; the date component is parsed downstream
    pub published_timestamp: String,
    pub summary: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentItem {
    pub title: String,
    pub link: String,
    pub published_date: NaiveDate,
    pub channel_name: String,
    pub analysis: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub html: String,
    pub generated_at: NaiveDateTime,
}

// Object style note:
// Everything here is produced once per run and read downstream.
// Nothing in this crate does I/O; the stages that fill these structs
// live in the application crate and receive their configuration
// explicitly.
