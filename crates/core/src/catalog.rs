//! Sample content catalog
//!
//! The site has no data service; its content ships as JSON fixtures embedded
//! in the binary. The catalog is read-only once loaded.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::{Error, Result};
use crate::invariants::assert_event_invariants;
use crate::models::{
    Event, EventDetail, MediaItem, ModerationItem, NewsArticle, ServerStats, TeamApplication,
    UserProfile,
};

const EVENTS_JSON: &str = include_str!("../data/events.json");
const EVENT_DETAILS_JSON: &str = include_str!("../data/event_details.json");
const MEDIA_JSON: &str = include_str!("../data/media.json");
const NEWS_JSON: &str = include_str!("../data/news.json");
const PROFILE_JSON: &str = include_str!("../data/profile.json");
const ADMIN_JSON: &str = include_str!("../data/admin.json");

/// Dashboard data shown to the admin
#[derive(Debug, Clone, Deserialize)]
pub struct AdminData {
    pub stats: ServerStats,
    pub applications: Vec<TeamApplication>,
    pub moderation: Vec<ModerationItem>,
}

/// All site content
#[derive(Debug, Clone)]
pub struct Catalog {
    pub events: Vec<Event>,
    pub event_details: HashMap<String, EventDetail>,
    pub media: Vec<MediaItem>,
    pub news: Vec<NewsArticle>,
    pub profile: UserProfile,
    pub admin: AdminData,
}

impl Catalog {
    /// Load the embedded sample content
    #[instrument]
    pub fn sample() -> Result<Self> {
        let catalog = Self {
            events: serde_json::from_str(EVENTS_JSON)?,
            event_details: serde_json::from_str(EVENT_DETAILS_JSON)?,
            media: serde_json::from_str(MEDIA_JSON)?,
            news: serde_json::from_str(NEWS_JSON)?,
            profile: serde_json::from_str(PROFILE_JSON)?,
            admin: serde_json::from_str(ADMIN_JSON)?,
        };

        for event in &catalog.events {
            assert_event_invariants(event);
        }

        info!(
            events = catalog.events.len(),
            media = catalog.media.len(),
            news = catalog.news.len(),
            "Loaded sample catalog"
        );
        Ok(catalog)
    }

    /// Detail page data for `/events/{id}`
    pub fn event_detail(&self, id: &str) -> Result<&EventDetail> {
        self.event_details
            .get(id)
            .ok_or_else(|| Error::RouteNotFound(format!("/events/{}", id)))
    }

    pub fn find_media(&self, id: u32) -> Option<&MediaItem> {
        self.media.iter().find(|m| m.id == id)
    }
}
