//! Admin dashboard models

use serde::{Deserialize, Serialize};

/// Headline numbers on the dashboard overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerStats {
    pub total_players: u32,
    pub active_events: u32,
    pub completed_events: u32,
    pub total_servers: u32,
    pub online_servers: u32,
    pub total_playtime: String,
    pub new_registrations: u32,
    pub pending_applications: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Decision taken on a team application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationAction {
    Approve,
    Reject,
}

impl ApplicationAction {
    pub fn resulting_status(&self) -> ApplicationStatus {
        match self {
            ApplicationAction::Approve => ApplicationStatus::Approved,
            ApplicationAction::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// A request to join the staff team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamApplication {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub minecraft_username: String,
    pub role: String,
    pub experience: String,
    pub motivation: String,
    pub applied_date: String,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationStatus {
    Pending,
    Resolved,
    Escalated,
    Dismissed,
}

/// Decision taken on a moderation queue entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Resolve,
    Escalate,
    Dismiss,
}

impl ModerationAction {
    pub fn resulting_status(&self) -> ModerationStatus {
        match self {
            ModerationAction::Resolve => ModerationStatus::Resolved,
            ModerationAction::Escalate => ModerationStatus::Escalated,
            ModerationAction::Dismiss => ModerationStatus::Dismissed,
        }
    }
}

/// What a moderation entry is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModerationSubject {
    /// A player reporting another player
    Report {
        reporter: String,
        reported: String,
        server: String,
    },
    /// A banned player asking to be let back in
    Appeal {
        username: String,
        original_ban: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationItem {
    pub id: u32,
    #[serde(flatten)]
    pub subject: ModerationSubject,
    pub reason: String,
    pub description: String,
    pub timestamp: String,
    pub status: ModerationStatus,
    pub priority: Priority,
}
