//! Community event models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of community event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Competition,
    Tournament,
    Adventure,
    Workshop,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Competition => "competition",
            EventType::Tournament => "tournament",
            EventType::Adventure => "adventure",
            EventType::Workshop => "workshop",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registration status of an event, always derived from the event itself
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Open,
    Full,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Open => "open",
            EventStatus::Full => "full",
            EventStatus::Completed => "completed",
        }
    }

    /// Parse a status token; unknown tokens yield `None`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "open" => Some(EventStatus::Open),
            "full" => Some(EventStatus::Full),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scheduled community event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Display label, e.g. "14:00 UTC"
    pub time: String,
    pub server: String,
    pub participants: u32,
    pub max_participants: u32,
    /// Set once the event has taken place
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    /// Derived status: completed wins, then capacity decides open vs full
    pub fn status(&self) -> EventStatus {
        if self.completed {
            EventStatus::Completed
        } else if self.participants >= self.max_participants {
            EventStatus::Full
        } else {
            EventStatus::Open
        }
    }

    /// Whether the registration control should be enabled
    pub fn accepts_registrations(&self) -> bool {
        self.status() == EventStatus::Open
    }

    /// Normalized `YYYY-MM-DD` date key used for calendar lookups
    pub fn date_key(&self) -> String {
        crate::calendar::date_key(self.date)
    }

    /// Remaining free slots
    pub fn open_slots(&self) -> u32 {
        self.max_participants.saturating_sub(self.participants)
    }
}

/// Extended event information shown on `/events/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub long_description: String,
    pub organizer: String,
    #[serde(default)]
    pub rules: Vec<String>,
    #[serde(default)]
    pub prizes: Vec<String>,
}

impl EventDetail {
    /// Long description split into paragraphs on blank lines
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.long_description
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(participants: u32, max_participants: u32) -> Event {
        Event {
            id: 1,
            title: "Castle Building Competition".to_string(),
            description: "Build a castle".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: "14:00 UTC".to_string(),
            server: "Creative Server".to_string(),
            participants,
            max_participants,
            completed: false,
            event_type: EventType::Competition,
        }
    }

    #[test]
    fn test_status_derived_from_counts() {
        assert_eq!(make_event(24, 50).status(), EventStatus::Open);
        assert_eq!(make_event(16, 16).status(), EventStatus::Full);
    }

    #[test]
    fn test_status_tracks_participant_changes() {
        let mut event = make_event(15, 16);
        assert!(event.accepts_registrations());
        event.participants += 1;
        assert_eq!(event.status(), EventStatus::Full);
        assert!(!event.accepts_registrations());
        assert_eq!(event.open_slots(), 0);
    }

    #[test]
    fn test_completed_overrides_capacity() {
        let mut event = make_event(3, 16);
        event.completed = true;
        assert_eq!(event.status(), EventStatus::Completed);
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        assert_eq!(make_event(1, 2).date_key(), "2024-01-15");
    }

    #[test]
    fn test_deserialize_event_with_type_field() {
        let json = r#"{
            "id": 7,
            "title": "Redstone Workshop",
            "description": "Learn redstone",
            "date": "2024-01-25",
            "time": "18:00 UTC",
            "server": "Education Server",
            "participants": 12,
            "max_participants": 25,
            "type": "workshop"
        }"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.event_type, EventType::Workshop);
        assert!(!event.completed);
        assert_eq!(event.status(), EventStatus::Open);
    }

    #[test]
    fn test_status_tokens() {
        assert_eq!(EventStatus::from_token("full"), Some(EventStatus::Full));
        assert_eq!(EventStatus::from_token("Full"), None);
    }
}
