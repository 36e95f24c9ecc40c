//! Match results: stats, requeueing, reigns and champion detection.

use crate::logic::formation::start_match;
use crate::models::{Court, Player, PlayerId, ReigningTeam, RotationPolicy, Side};
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Resolve the active match in favour of `winner`. No-op without a match.
///
/// All-shuffle: everyone goes back to the waiting queue, winners first.
/// Winners-stay: losers are requeued and the winners hold the court; once they
/// have beaten every other known player during one reign they are crowned and
/// formation pauses until `end_championship_and_continue`.
pub fn declare_winner(court: &mut Court, winner: Side) {
    let Some(game) = court.current_match.take() else {
        log::debug!("No active match to resolve");
        return;
    };
    let (winners, losers) = game.split(winner);
    let winners = winners.to_vec();
    let losers = losers.to_vec();

    for p in &winners {
        if let Some(r) = court.record_mut(p.id) {
            r.add_win();
        }
    }
    for p in &losers {
        if let Some(r) = court.record_mut(p.id) {
            r.add_loss();
        }
    }

    match court.settings.rotation_policy {
        RotationPolicy::AllShuffle => {
            court
                .waiting_queue
                .extend(winners.iter().chain(losers.iter()).map(|p| p.id));
            court.reigning_team = None;
        }
        RotationPolicy::WinnersStay => resolve_reign(court, winners, &losers),
    }

    start_match(court);
}

/// Extend or start the winners' reign, crowning them on a completed round robin.
fn resolve_reign(court: &mut Court, winners: Vec<Player>, losers: &[Player]) {
    let winner_ids: HashSet<PlayerId> = winners.iter().map(|p| p.id).collect();
    let mut defeated = match court.reigning_team.take() {
        Some(reign) if reign.is_same_team(&winner_ids) => reign.defeated_opponents,
        _ => HashSet::new(),
    };
    defeated.extend(losers.iter().map(|p| p.id));
    court.waiting_queue.extend(losers.iter().map(|p| p.id));

    let opponents: Vec<PlayerId> = court
        .players
        .iter()
        .map(|p| p.id)
        .filter(|id| !winner_ids.contains(id))
        .collect();
    let defeated_all = !opponents.is_empty() && opponents.iter().all(|id| defeated.contains(id));

    if defeated_all {
        for p in &winners {
            if let Some(r) = court.record_mut(p.id) {
                r.is_session_champion = true;
            }
        }
        log::info!(
            "Champion crowned after beating all {} opponent(s): {}",
            opponents.len(),
            winners
                .iter()
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
                .join(" & ")
        );
        court.champion = Some(winners);
        court.reigning_team = None;
    } else {
        court.reigning_team = Some(ReigningTeam {
            team: winners,
            defeated_opponents: defeated,
        });
    }
}

/// Start a new season after a coronation: everyone is reshuffled into the
/// waiting queue. Records and badges are kept. No-op without a champion.
pub fn end_championship_and_continue(court: &mut Court) {
    if court.champion.is_none() {
        log::debug!("No champion pending");
        return;
    }
    court.clear_championship_state(false);
    court.current_match = None;

    let mut ids = court.all_player_ids();
    ids.shuffle(&mut rand::thread_rng());
    court.waiting_queue = ids;
    court.team_queue.clear();
    log::info!("New season started with {} player(s)", court.waiting_queue.len());

    start_match(court);
}
