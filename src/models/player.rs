//! Player, PlayerRecord and Standing data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in queues, matches and lookups).
pub type PlayerId = Uuid;

/// A player admitted to the court. Immutable after creation.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Lifetime results of a player. Created zeroed alongside its player.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
    /// Consecutive wins since the last loss.
    pub win_streak: u32,
    pub is_session_champion: bool,
}

impl PlayerRecord {
    /// Record a win for this player.
    pub fn add_win(&mut self) {
        self.wins += 1;
        self.win_streak += 1;
    }

    /// Record a loss for this player; the streak is broken.
    pub fn add_loss(&mut self) {
        self.losses += 1;
        self.win_streak = 0;
    }

    /// Whether the current streak grants queue priority.
    pub fn has_priority(&self, threshold: u32) -> bool {
        self.win_streak >= threshold
    }

    /// Wins per loss; `None` while the player has no losses yet.
    pub fn win_loss_ratio(&self) -> Option<f64> {
        if self.losses == 0 {
            None
        } else {
            Some(f64::from(self.wins) / f64::from(self.losses))
        }
    }
}

/// One leaderboard row (for API / display).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub player: Player,
    pub wins: u32,
    pub losses: u32,
    pub win_streak: u32,
    pub is_session_champion: bool,
    /// None means no losses yet.
    pub win_loss_ratio: Option<f64>,
}

impl Standing {
    pub fn from_record(player: &Player, record: &PlayerRecord) -> Self {
        Self {
            player: player.clone(),
            wins: record.wins,
            losses: record.losses,
            win_streak: record.win_streak,
            is_session_champion: record.is_session_champion,
            win_loss_ratio: record.win_loss_ratio(),
        }
    }
}
