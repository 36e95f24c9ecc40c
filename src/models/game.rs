//! Match (game), Side, and the reigning team of a winners-stay session.

use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A pre-formed team waiting in the team queue (exactly `team_size` players).
pub type Team = Vec<Player>;

/// One of the two competing groups in a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    A,
    B,
}

/// The match currently on court: two sides of equal size.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub side_a: Vec<Player>,
    pub side_b: Vec<Player>,
    pub started_at: DateTime<Utc>,
}

impl GameMatch {
    pub fn new(side_a: Vec<Player>, side_b: Vec<Player>) -> Self {
        Self {
            id: Uuid::new_v4(),
            side_a,
            side_b,
            started_at: Utc::now(),
        }
    }

    /// Split into (winners, losers) for the given winning side.
    pub fn split(&self, winner: Side) -> (&[Player], &[Player]) {
        match winner {
            Side::A => (&self.side_a, &self.side_b),
            Side::B => (&self.side_b, &self.side_a),
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.participants().any(|p| p.id == id)
    }

    /// Side A then side B.
    pub fn participants(&self) -> impl Iterator<Item = &Player> {
        self.side_a.iter().chain(self.side_b.iter())
    }
}

/// A team on a winning run under winners-stay, with everyone it has beaten so far.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ReigningTeam {
    pub team: Team,
    pub defeated_opponents: HashSet<PlayerId>,
}

impl ReigningTeam {
    /// True when `ids` is exactly this team's membership.
    pub fn is_same_team(&self, ids: &HashSet<PlayerId>) -> bool {
        self.team.len() == ids.len() && self.team.iter().all(|p| ids.contains(&p.id))
    }
}
