//! Roster changes: admitting and removing players, full reset.

use crate::logic::formation::start_match;
use crate::models::{Court, Player, PlayerId, PlayerRecord, Team};

/// Admit a player by name and append them to the waiting queue.
///
/// Returns the new id, or `None` (and changes nothing) for a blank name.
/// A roster change voids any reign or champion and clears all champion badges.
pub fn admit_player(court: &mut Court, name: &str) -> Option<PlayerId> {
    let name = name.trim();
    if name.is_empty() {
        log::debug!("Ignoring blank player name");
        return None;
    }
    court.clear_championship_state(true);
    court.requeue_idle_players();

    let player = Player::new(name);
    let id = player.id;
    log::info!("Player admitted: {}", player.name);
    court.players.push(player);
    court.records.insert(id, PlayerRecord::default());
    court.waiting_queue.push(id);

    start_match(court);
    Some(id)
}

/// Remove a player and their record. Queued teams containing them are
/// dissolved and an active match involving them is cancelled; the other
/// members go back to the waiting queue. An unknown id removes nobody but
/// still voids any reign or champion, like every other roster change.
pub fn remove_player(court: &mut Court, id: PlayerId) {
    if !court.contains_player(id) {
        log::debug!("Removal of unknown player {}", id);
    }
    court.players.retain(|p| p.id != id);
    court.records.remove(&id);
    court.waiting_queue.retain(|&q| q != id);

    let (dissolved, kept): (Vec<Team>, Vec<Team>) = std::mem::take(&mut court.team_queue)
        .into_iter()
        .partition(|team| team.iter().any(|p| p.id == id));
    court.team_queue = kept;
    for team in dissolved {
        court
            .waiting_queue
            .extend(team.iter().map(|p| p.id).filter(|&m| m != id));
    }

    if court.is_in_current_match(id) {
        if let Some(game) = court.current_match.take() {
            log::info!("Match cancelled: participant removed");
            court
                .waiting_queue
                .extend(game.participants().map(|p| p.id).filter(|&m| m != id));
        }
    }

    court.clear_championship_state(true);
    court.requeue_idle_players();
    start_match(court);
}

/// Forget every player and all game state. Rules are kept.
pub fn reset_app(court: &mut Court) {
    let settings = court.settings;
    *court = Court::with_settings(settings);
    log::info!("Court reset");
}
