//! Presentation tags
//!
//! One lookup table from a model value to the tag a view styles it with
//! (a colour name, or an icon name for media types). Every view shares it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{BadgeRarity, EventStatus, EventType, MediaCategory, MediaType, NewsCategory};

pub const FALLBACK_TAG: &str = "gray";

/// Which kind of value is being tagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagFamily {
    EventType,
    EventStatus,
    MediaCategory,
    MediaType,
    NewsCategory,
    BadgeRarity,
}

/// Per-family overrides as read from the `[presentation]` config table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresentationOverrides {
    pub fallback: Option<String>,
    pub event_type: HashMap<String, String>,
    pub event_status: HashMap<String, String>,
    pub media_category: HashMap<String, String>,
    pub media_type: HashMap<String, String>,
    pub news_category: HashMap<String, String>,
    pub badge_rarity: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct PresentationTags {
    tables: HashMap<TagFamily, HashMap<String, String>>,
    fallback: String,
}

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

impl Default for PresentationTags {
    fn default() -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            TagFamily::EventType,
            table(&[
                ("competition", "blue"),
                ("tournament", "red"),
                ("adventure", "green"),
                ("workshop", "purple"),
            ]),
        );
        tables.insert(
            TagFamily::EventStatus,
            table(&[("open", "green"), ("full", "red"), ("completed", "gray")]),
        );
        tables.insert(
            TagFamily::MediaCategory,
            table(&[
                ("event", "blue"),
                ("build", "green"),
                ("community", "purple"),
                ("server", "orange"),
            ]),
        );
        tables.insert(
            TagFamily::MediaType,
            table(&[("image", "camera"), ("video", "play"), ("trailer", "film")]),
        );
        tables.insert(
            TagFamily::NewsCategory,
            table(&[
                ("announcement", "blue"),
                ("event", "green"),
                ("update", "purple"),
                ("community", "orange"),
            ]),
        );
        tables.insert(
            TagFamily::BadgeRarity,
            table(&[
                ("common", "gray"),
                ("rare", "blue"),
                ("epic", "purple"),
                ("legendary", "yellow"),
            ]),
        );
        Self {
            tables,
            fallback: FALLBACK_TAG.to_string(),
        }
    }
}

impl PresentationTags {
    /// Defaults with `overrides` layered on top, entry by entry
    pub fn with_overrides(overrides: &PresentationOverrides) -> Self {
        let mut tags = Self::default();
        if let Some(fallback) = &overrides.fallback {
            tags.fallback = fallback.clone();
        }
        let layers = [
            (TagFamily::EventType, &overrides.event_type),
            (TagFamily::EventStatus, &overrides.event_status),
            (TagFamily::MediaCategory, &overrides.media_category),
            (TagFamily::MediaType, &overrides.media_type),
            (TagFamily::NewsCategory, &overrides.news_category),
            (TagFamily::BadgeRarity, &overrides.badge_rarity),
        ];
        for (family, entries) in layers {
            tags.tables
                .entry(family)
                .or_default()
                .extend(entries.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        tags
    }

    /// Tag for `key`, or the fallback tag when the key is unknown
    pub fn tag(&self, family: TagFamily, key: &str) -> &str {
        self.tables
            .get(&family)
            .and_then(|t| t.get(key))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    pub fn event_type(&self, value: EventType) -> &str {
        self.tag(TagFamily::EventType, value.as_str())
    }

    pub fn event_status(&self, value: EventStatus) -> &str {
        self.tag(TagFamily::EventStatus, value.as_str())
    }

    pub fn media_category(&self, value: MediaCategory) -> &str {
        self.tag(TagFamily::MediaCategory, value.as_str())
    }

    pub fn media_type(&self, value: MediaType) -> &str {
        self.tag(TagFamily::MediaType, value.as_str())
    }

    pub fn news_category(&self, value: NewsCategory) -> &str {
        self.tag(TagFamily::NewsCategory, value.as_str())
    }

    pub fn badge_rarity(&self, value: BadgeRarity) -> &str {
        self.tag(TagFamily::BadgeRarity, value.as_str())
    }
}
