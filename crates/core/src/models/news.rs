//! News article model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    Announcement,
    Event,
    Update,
    Community,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::Announcement => "announcement",
            NewsCategory::Event => "event",
            NewsCategory::Update => "update",
            NewsCategory::Community => "community",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub category: NewsCategory,
    #[serde(default)]
    pub featured: bool,
    /// Display label, e.g. "3 min read"
    pub read_time: String,
}
