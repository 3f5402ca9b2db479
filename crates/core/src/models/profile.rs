//! Player profile models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Badge rarity in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl BadgeRarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeRarity::Common => "common",
            BadgeRarity::Rare => "rare",
            BadgeRarity::Epic => "epic",
            BadgeRarity::Legendary => "legendary",
        }
    }
}

/// An achievement badge earned by a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: BadgeRarity,
    pub earned_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_playtime: String,
    pub favorite_server: String,
    pub last_seen: NaiveDate,
}

/// A player's public profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub minecraft_username: String,
    pub join_date: NaiveDate,
    pub events_participated: u32,
    pub events_won: u32,
    #[serde(default)]
    pub badges: Vec<Badge>,
    pub stats: ProfileStats,
}

impl UserProfile {
    /// Badges shown in the profile header
    pub fn highlighted_badges(&self) -> &[Badge] {
        &self.badges[..self.badges.len().min(3)]
    }

    /// Share of participated events that were won, as a whole percentage
    pub fn win_rate(&self) -> u32 {
        if self.events_participated == 0 {
            return 0;
        }
        let rate = u64::from(self.events_won) * 100 / u64::from(self.events_participated);
        u32::try_from(rate).unwrap_or(u32::MAX)
    }
}
