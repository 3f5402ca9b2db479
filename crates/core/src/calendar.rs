//! Month grid layout for the events calendar
//!
//! A grid is a run of leading empty cells (one per weekday before the 1st,
//! weeks start on Sunday) followed by one cell per day of the month. The
//! final row is left incomplete; consumers must handle a short last row.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{Error, Result};
use crate::invariants::assert_grid_invariants;

/// Number of columns in a rendered calendar
pub const DAYS_PER_WEEK: usize = 7;

/// Column headers, Sunday first
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Zero-padded `YYYY-MM-DD` key used to match events to calendar days
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` key back into a date
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").map_err(|_| Error::InvalidDate(key.to_string()))
}

/// One entry of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Padding before the first day of the month
    Empty,
    Day { day: u32, date: NaiveDate },
}

impl Cell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Empty => None,
            Cell::Day { date, .. } => Some(*date),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// A calendar month, with `month` zero-based (0 = January)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    year: i32,
    month: u32,
    first: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if month > 11 {
            return Err(Error::InvalidDate(format!(
                "month index {} out of range 0-11",
                month
            )));
        }
        let first = NaiveDate::from_ymd_opt(year, month + 1, 1)
            .ok_or_else(|| Error::InvalidDate(format!("{}-{:02}", year, month + 1)))?;
        Ok(Self { year, month, first })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Weekday of the 1st, 0 = Sunday
    pub fn starting_weekday(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// Days in the month, taken as "day 0 of the next month"
    pub fn days_in_month(&self) -> u32 {
        self.next()
            .and_then(|next| next.first.pred_opt())
            .map(|last| last.day())
            // Only December of the last representable year lands here
            .unwrap_or(31)
    }

    /// The following month, rolling December into January of the next year
    pub fn next(&self) -> Option<Self> {
        let (year, month) = if self.month == 11 {
            (self.year.checked_add(1)?, 0)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).ok()
    }

    /// The preceding month, rolling January back into December
    pub fn previous(&self) -> Option<Self> {
        let (year, month) = if self.month == 0 {
            (self.year.checked_sub(1)?, 11)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).ok()
    }

    /// Whether `date` falls inside this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month
    }

    /// Header label, e.g. "February 2024"
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string()
    }

    /// Build the grid for this month
    pub fn grid(&self) -> CalendarGrid {
        let grid = CalendarGrid {
            month: *self,
            starting_weekday: self.starting_weekday(),
            days_in_month: self.days_in_month(),
        };
        assert_grid_invariants(&grid);
        debug!(
            year = self.year,
            month = self.month,
            starting_weekday = grid.starting_weekday,
            days_in_month = grid.days_in_month,
            "Built calendar grid"
        );
        grid
    }
}

/// Layout of one month; iterate with [`CalendarGrid::cells`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarGrid {
    month: CalendarMonth,
    starting_weekday: u32,
    days_in_month: u32,
}

impl CalendarGrid {
    pub fn month(&self) -> CalendarMonth {
        self.month
    }

    pub fn starting_weekday(&self) -> u32 {
        self.starting_weekday
    }

    pub fn days_in_month(&self) -> u32 {
        self.days_in_month
    }

    /// Total cell count: padding plus one per day
    pub fn len(&self) -> usize {
        (self.starting_weekday + self.days_in_month) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazy cell sequence. Each call starts again from the first cell.
    pub fn cells(&self) -> Cells {
        Cells {
            grid: *self,
            position: 0,
        }
    }

    /// Cells chunked into weeks; the last week may be shorter than 7
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        let cells: Vec<Cell> = self.cells().collect();
        cells.chunks(DAYS_PER_WEEK).map(<[Cell]>::to_vec).collect()
    }
}

impl IntoIterator for CalendarGrid {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.cells()
    }
}

/// Iterator over the cells of a [`CalendarGrid`]
#[derive(Debug, Clone)]
pub struct Cells {
    grid: CalendarGrid,
    position: u32,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        let lead = self.grid.starting_weekday;
        let total = lead + self.grid.days_in_month;
        if self.position >= total {
            return None;
        }
        let position = self.position;
        self.position += 1;

        if position < lead {
            return Some(Cell::Empty);
        }

        let day = position - lead + 1;
        let date = self.grid.month.first.with_day(day)?;
        Some(Cell::Day { day, date })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len().saturating_sub(self.position as usize);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}
