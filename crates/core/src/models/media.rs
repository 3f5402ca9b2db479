//! Gallery media models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of media asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    Trailer,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Trailer => "trailer",
        }
    }
}

/// Gallery category used by the category tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaCategory {
    Event,
    Build,
    Community,
    Server,
}

impl MediaCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaCategory::Event => "event",
            MediaCategory::Build => "build",
            MediaCategory::Community => "community",
            MediaCategory::Server => "server",
        }
    }

    /// Parse a category token; unknown tokens yield `None`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "event" => Some(MediaCategory::Event),
            "build" => Some(MediaCategory::Build),
            "community" => Some(MediaCategory::Community),
            "server" => Some(MediaCategory::Server),
            _ => None,
        }
    }

    pub fn all() -> &'static [MediaCategory] {
        &[
            MediaCategory::Event,
            MediaCategory::Build,
            MediaCategory::Community,
            MediaCategory::Server,
        ]
    }
}

impl std::fmt::Display for MediaCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A gallery entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub category: MediaCategory,
    /// Event the media was captured at, if any
    #[serde(default)]
    pub event_name: Option<String>,
    pub author: String,
    pub date: NaiveDate,
    pub likes: u32,
    pub views: u32,
    #[serde(default)]
    pub featured: bool,
    pub thumbnail: String,
}
