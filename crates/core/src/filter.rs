//! Event-to-date mapping and collection filters
//!
//! All functions are pure: they borrow the source collection, never mutate
//! it, and return matches in the collection's original order.

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{date_key, CalendarGrid, Cell};
use crate::models::{Event, EventStatus, MediaCategory, MediaItem, NewsArticle};

/// Token meaning "no filter"
pub const ALL: &str = "all";

/// Number of event titles previewed inside a calendar cell
pub const CELL_PREVIEW_LIMIT: usize = 2;

/// Events whose normalized date key equals `key`.
///
/// Matching is exact string equality; callers pass a zero-padded
/// `YYYY-MM-DD` key (see [`date_key`]).
pub fn events_on<'a>(events: &'a [Event], key: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| e.date_key() == key).collect()
}

/// Events on `date`, normalizing the date first
pub fn events_on_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events_on(events, &date_key(date))
}

/// Filter a category selector the way the gallery tabs do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(MediaCategory),
    /// A token that names no category; matches nothing
    Unmatched,
}

impl CategoryFilter {
    pub fn parse(token: &str) -> Self {
        if token == ALL {
            return CategoryFilter::All;
        }
        match MediaCategory::from_token(token) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unmatched,
        }
    }

    pub fn matches(&self, item: &MediaItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
            CategoryFilter::Unmatched => false,
        }
    }
}

/// Media items in the category named by `token`, or all of them for `"all"`
pub fn filter_media<'a>(items: &'a [MediaItem], token: &str) -> Vec<&'a MediaItem> {
    let filter = CategoryFilter::parse(token);
    let matched: Vec<&MediaItem> = items.iter().filter(|i| filter.matches(i)).collect();
    debug!(token, ?filter, matched = matched.len(), "Filtered media");
    matched
}

/// Events with the derived status named by `token`, or all of them for `"all"`
pub fn filter_events_by_status<'a>(events: &'a [Event], token: &str) -> Vec<&'a Event> {
    if token == ALL {
        return events.iter().collect();
    }
    match EventStatus::from_token(token) {
        Some(status) => events.iter().filter(|e| e.status() == status).collect(),
        None => Vec::new(),
    }
}

/// Featured media in original order
pub fn featured_media(items: &[MediaItem]) -> Vec<&MediaItem> {
    items.iter().filter(|i| i.featured).collect()
}

/// Split news into (featured, regular), each in original order
pub fn split_news(articles: &[NewsArticle]) -> (Vec<&NewsArticle>, Vec<&NewsArticle>) {
    articles.iter().partition(|a| a.featured)
}

/// A calendar cell paired with the events falling on it
#[derive(Debug, Clone)]
pub struct DayEvents<'a> {
    pub cell: Cell,
    pub events: Vec<&'a Event>,
}

impl<'a> DayEvents<'a> {
    /// Titles shown inside the cell
    pub fn preview(&self) -> impl Iterator<Item = &'a Event> + '_ {
        self.events.iter().copied().take(CELL_PREVIEW_LIMIT)
    }

    /// Count behind the "+N more" label, zero when everything fits
    pub fn overflow(&self) -> usize {
        self.events.len().saturating_sub(CELL_PREVIEW_LIMIT)
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Pair every grid cell with its events; empty cells get none
pub fn map_events<'a>(grid: &CalendarGrid, events: &'a [Event]) -> Vec<DayEvents<'a>> {
    grid.cells()
        .map(|cell| DayEvents {
            cell,
            events: cell
                .date()
                .map(|date| events_on_date(events, date))
                .unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarMonth;
    use crate::catalog::Catalog;
    use crate::models::EventType;

    fn event(id: u32, date: &str, participants: u32, max: u32) -> Event {
        Event {
            id,
            title: format!("Event {}", id),
            description: String::new(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: "12:00 UTC".to_string(),
            server: "Creative Server".to_string(),
            participants,
            max_participants: max,
            completed: false,
            event_type: EventType::Competition,
        }
    }

    #[test]
    fn test_events_on_exact_key() {
        let events = vec![
            event(1, "2024-01-15", 1, 10),
            event(2, "2024-01-18", 1, 10),
            event(3, "2024-01-15", 1, 10),
        ];
        let found: Vec<u32> = events_on(&events, "2024-01-15").iter().map(|e| e.id).collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn test_events_on_requires_normalized_key() {
        let events = vec![event(1, "2024-01-05", 1, 10)];
        assert!(events_on(&events, "2024-1-5").is_empty());
        assert_eq!(events_on(&events, "2024-01-05").len(), 1);
    }

    #[test]
    fn test_events_on_empty_day() {
        let events = vec![event(1, "2024-01-15", 1, 10)];
        assert!(events_on_date(&events, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()).is_empty());
    }

    #[test]
    fn test_filter_media_all_returns_everything_in_order() {
        let catalog = Catalog::sample().unwrap();
        let all = filter_media(&catalog.media, ALL);
        let ids: Vec<u32> = all.iter().map(|m| m.id).collect();
        let expected: Vec<u32> = catalog.media.iter().map(|m| m.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_filter_media_by_category() {
        let catalog = Catalog::sample().unwrap();
        let builds = filter_media(&catalog.media, "build");
        assert!(!builds.is_empty());
        assert!(builds.iter().all(|m| m.category == MediaCategory::Build));

        let ids: Vec<u32> = builds.iter().map(|m| m.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_filter_media_unknown_token_is_empty() {
        let catalog = Catalog::sample().unwrap();
        assert!(filter_media(&catalog.media, "screenshots").is_empty());
        assert!(filter_media(&catalog.media, "All").is_empty());
        assert_eq!(catalog.media.len(), 8);
    }

    #[test]
    fn test_filter_events_by_status() {
        let events = vec![
            event(1, "2024-01-15", 24, 50),
            event(2, "2024-01-18", 16, 16),
            event(3, "2024-01-22", 8, 30),
        ];
        let open: Vec<u32> = filter_events_by_status(&events, "open").iter().map(|e| e.id).collect();
        assert_eq!(open, vec![1, 3]);
        assert_eq!(filter_events_by_status(&events, "full").len(), 1);
        assert_eq!(filter_events_by_status(&events, ALL).len(), 3);
        assert!(filter_events_by_status(&events, "cancelled").is_empty());
    }

    #[test]
    fn test_split_news() {
        let catalog = Catalog::sample().unwrap();
        let (featured, regular) = split_news(&catalog.news);
        assert!(featured.iter().all(|a| a.featured));
        assert!(regular.iter().all(|a| !a.featured));
        assert_eq!(featured.len() + regular.len(), catalog.news.len());
    }

    #[test]
    fn test_map_events_onto_grid() {
        let events = vec![
            event(1, "2024-01-15", 1, 10),
            event(2, "2024-01-15", 1, 10),
            event(3, "2024-01-15", 1, 10),
            event(4, "2024-02-01", 1, 10),
        ];
        let grid = CalendarMonth::new(2024, 0).unwrap().grid();
        let days = map_events(&grid, &events);
        assert_eq!(days.len(), grid.len());

        let busy: Vec<&DayEvents> = days.iter().filter(|d| d.has_events()).collect();
        assert_eq!(busy.len(), 1);
        assert_eq!(busy[0].preview().count(), CELL_PREVIEW_LIMIT);
        assert_eq!(busy[0].overflow(), 1);
    }
}
