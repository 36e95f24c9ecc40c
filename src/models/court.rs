//! Court: the single rotation engine state (roster, queues, match, reign, champion).

use crate::models::game::{GameMatch, ReigningTeam, Team};
use crate::models::player::{Player, PlayerId, PlayerRecord, Standing};
use crate::models::settings::Settings;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Full engine state. Mutated only through the functions in `logic`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Court {
    /// Known players in admission order.
    pub players: Vec<Player>,
    /// Lifetime results per player id.
    pub records: HashMap<PlayerId, PlayerRecord>,
    /// Individuals waiting to play (singles) or to be teamed up (team mode).
    pub waiting_queue: Vec<PlayerId>,
    /// Pre-formed teams waiting for the court (team mode only).
    pub team_queue: Vec<Team>,
    pub current_match: Option<GameMatch>,
    /// Present only under winners-stay while a team is on a winning run.
    pub reigning_team: Option<ReigningTeam>,
    /// Set on coronation; pauses match formation until the season continues.
    pub champion: Option<Vec<Player>>,
    pub settings: Settings,
}

impl Court {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn record(&self, id: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(&id)
    }

    pub(crate) fn record_mut(&mut self, id: PlayerId) -> Option<&mut PlayerRecord> {
        self.records.get_mut(&id)
    }

    pub fn contains_player(&self, id: PlayerId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn is_in_current_match(&self, id: PlayerId) -> bool {
        self.current_match.as_ref().is_some_and(|m| m.contains(id))
    }

    /// Every known id, in admission order.
    pub fn all_player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    /// Champions first, then wins descending, then current streak descending.
    pub fn leaderboard(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .players
            .iter()
            .filter_map(|p| self.records.get(&p.id).map(|r| Standing::from_record(p, r)))
            .collect();
        rows.sort_by(|a, b| {
            b.is_session_champion
                .cmp(&a.is_session_champion)
                .then(b.wins.cmp(&a.wins))
                .then(b.win_streak.cmp(&a.win_streak))
        });
        rows
    }

    /// Drop the reign and any champion; badges are kept unless `clear_badges`.
    pub(crate) fn clear_championship_state(&mut self, clear_badges: bool) {
        self.reigning_team = None;
        self.champion = None;
        if clear_badges {
            for r in self.records.values_mut() {
                r.is_session_champion = false;
            }
        }
    }

    /// Append every known player who is in no queue and not on court.
    /// Used after a reign or champion is dropped so its members keep rotating.
    pub(crate) fn requeue_idle_players(&mut self) {
        let mut placed: HashSet<PlayerId> = self.waiting_queue.iter().copied().collect();
        placed.extend(self.team_queue.iter().flatten().map(|p| p.id));
        if let Some(m) = &self.current_match {
            placed.extend(m.participants().map(|p| p.id));
        }
        let idle: Vec<PlayerId> = self
            .players
            .iter()
            .map(|p| p.id)
            .filter(|id| !placed.contains(id))
            .collect();
        self.waiting_queue.extend(idle);
    }
}
