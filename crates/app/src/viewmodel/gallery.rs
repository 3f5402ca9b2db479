//! Gallery view model

use std::sync::Arc;

use etumlabs_core::filter::{self, ALL};
use etumlabs_core::{Catalog, MediaCategory, MediaItem};
use tracing::debug;

pub struct GalleryViewModel {
    catalog: Arc<Catalog>,
    category: String,
    selected: Option<u32>,
}

impl GalleryViewModel {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            category: ALL.to_string(),
            selected: None,
        }
    }

    /// Tab tokens: `all` followed by every category
    pub fn tabs() -> Vec<&'static str> {
        std::iter::once(ALL)
            .chain(MediaCategory::all().iter().map(|c| c.as_str()))
            .collect()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Switch tab; any token is accepted, unknown ones show nothing
    pub fn select_category(&mut self, token: &str) {
        debug!(token, "Gallery category selected");
        self.category = token.to_string();
    }

    pub fn items(&self) -> Vec<&MediaItem> {
        filter::filter_media(&self.catalog.media, &self.category)
    }

    pub fn featured(&self) -> Vec<&MediaItem> {
        filter::featured_media(&self.catalog.media)
    }

    /// Open the item viewer; false when `id` is unknown
    pub fn select_item(&mut self, id: u32) -> bool {
        if self.catalog.find_media(id).is_some() {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close_item(&mut self) {
        self.selected = None;
    }

    pub fn selected_item(&self) -> Option<&MediaItem> {
        self.selected.and_then(|id| self.catalog.find_media(id))
    }
}
