//! Events page view model

use std::sync::Arc;

use chrono::NaiveDate;
use etumlabs_core::calendar::parse_date_key;
use etumlabs_core::filter::{self, DayEvents};
use etumlabs_core::{CalendarMonth, Catalog, Error, Event, Result};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Calendar,
    List,
}

impl ViewMode {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "calendar" => Some(ViewMode::Calendar),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }
}

pub struct EventsViewModel {
    catalog: Arc<Catalog>,
    today: NaiveDate,
    month: CalendarMonth,
    mode: ViewMode,
    selected: Option<NaiveDate>,
}

impl EventsViewModel {
    /// Opens on the month containing `today`
    pub fn new(catalog: Arc<Catalog>, today: NaiveDate) -> Self {
        Self {
            catalog,
            today,
            month: CalendarMonth::containing(today),
            mode: ViewMode::default(),
            selected: None,
        }
    }

    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Jump to `month` (zero-based) of `year`
    pub fn show_month(&mut self, year: i32, month: u32) -> Result<()> {
        self.month = CalendarMonth::new(year, month)?;
        info!(month = %self.month.title(), "Showing month");
        Ok(())
    }

    pub fn next_month(&mut self) -> Result<()> {
        self.month = self
            .month
            .next()
            .ok_or_else(|| Error::InvalidDate("no month after this one".to_string()))?;
        Ok(())
    }

    pub fn previous_month(&mut self) -> Result<()> {
        self.month = self
            .month
            .previous()
            .ok_or_else(|| Error::InvalidDate("no month before this one".to_string()))?;
        Ok(())
    }

    /// Select the day given as `YYYY-MM-DD`. The displayed month follows
    /// the selection.
    pub fn select(&mut self, key: &str) -> Result<NaiveDate> {
        let date = parse_date_key(key)?;
        if !self.month.contains(date) {
            self.month = CalendarMonth::containing(date);
        }
        self.selected = Some(date);
        debug!(date = %key, "Date selected");
        Ok(date)
    }

    /// Every cell of the shown month with its events
    pub fn cells(&self) -> Vec<DayEvents<'_>> {
        filter::map_events(&self.month.grid(), &self.catalog.events)
    }

    /// Events on the selected day; empty without a selection
    pub fn selected_events(&self) -> Vec<&Event> {
        match self.selected {
            Some(date) => filter::events_on_date(&self.catalog.events, date),
            None => Vec::new(),
        }
    }

    /// All events, for the list view
    pub fn all_events(&self) -> &[Event] {
        &self.catalog.events
    }

    pub fn is_today(&self, date: NaiveDate) -> bool {
        date == self.today
    }
}
