//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::calendar::CalendarGrid;
use crate::models::Event;

/// Validate that an event's counts are internally consistent
pub fn assert_event_invariants(event: &Event) {
    debug_assert!(
        event.participants <= event.max_participants,
        "Event {} has {} participants but capacity {}",
        event.id,
        event.participants,
        event.max_participants
    );

    debug_assert!(
        !event.title.trim().is_empty(),
        "Event {} has empty title",
        event.id
    );
}

/// Validate that a grid has the expected shape
pub fn assert_grid_invariants(grid: &CalendarGrid) {
    debug_assert!(
        grid.starting_weekday() < 7,
        "Grid starts on weekday {}",
        grid.starting_weekday()
    );

    debug_assert!(
        (28..=31).contains(&grid.days_in_month()),
        "Grid has {} days",
        grid.days_in_month()
    );
}
