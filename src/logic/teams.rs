//! Team mode: turn waiting individuals into queued teams.

use crate::logic::formation::{priority_order, start_match};
use crate::models::{Court, PlayerId, Team};

/// Group the waiting queue into teams of `team_size`, streak holders first.
///
/// Full chunks are appended to the team queue (existing teams keep their place);
/// a short remainder stays behind as the new waiting queue. No-op in singles or
/// when fewer than `team_size` players are waiting.
pub fn generate_teams(court: &mut Court) {
    let size = court.settings.team_size;
    if size <= 1 || court.waiting_queue.len() < size {
        log::debug!(
            "Not generating teams: team size {}, {} waiting",
            size,
            court.waiting_queue.len()
        );
        return;
    }

    let ordered = priority_order(court, &court.waiting_queue);
    let mut new_teams: Vec<Team> = Vec::new();
    let mut leftover: Vec<PlayerId> = Vec::new();
    for chunk in ordered.chunks(size) {
        if chunk.len() == size {
            new_teams.push(
                chunk
                    .iter()
                    .filter_map(|&id| court.player(id).cloned())
                    .collect(),
            );
        } else {
            leftover.extend_from_slice(chunk);
        }
    }

    log::info!(
        "Generated {} team(s) of {}, {} left waiting",
        new_teams.len(),
        size,
        leftover.len()
    );
    court.team_queue.extend(new_teams);
    court.waiting_queue = leftover;
    start_match(court);
}
