// src/models.rs

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone)]
pub struct Channel {
    pub id: i64,
    pub name: String,
}

impl Channel {
    pub fn url(&self) -> String {
        format!("/{}/", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct Log {
    pub id: i64,
    pub channel_id: i64,
    pub date: NaiveDate,
    pub updated: DateTime<Utc>, // stored as RFC3339 text in the database
    pub content: String,
}

impl Log {
    pub fn url(&self, channel_name: &str) -> String {
        format!("/{}/{}/", channel_name, self.date.format("%Y/%m/%d"))
    }
}

#[derive(Debug, Clone)]
pub struct Bookmark {
    pub id: i64,
    pub log_id: i64,
    /// Opaque identifier, unique within a channel's bookmarks.
    pub path: String,
    pub line: Option<i64>,
}
