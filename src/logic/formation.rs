//! Match formation: decide who goes on court next.

use crate::models::{Court, GameMatch, Player, PlayerId, RotationPolicy};
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Try to put a match on court. Runs after every mutation and on an explicit
/// start request; does nothing while a match is active or a champion is pending,
/// so calling it twice in a row has no further effect.
///
/// Team mode:
/// 1. Winners-stay with a reigning team: reigning team vs next queued team.
/// 2. Otherwise: first two queued teams, clearing any stale reign.
///
/// Singles: the reigning player (winners-stay) is forced in; challengers come
/// from the waiting queue, streak holders first.
pub fn start_match(court: &mut Court) {
    if court.current_match.is_some() || court.champion.is_some() {
        return;
    }
    let formed = if court.settings.is_singles() {
        form_singles_match(court)
    } else {
        form_team_match(court)
    };
    if let Some(game) = formed {
        log::info!(
            "Match started: {} vs {}",
            side_names(&game.side_a),
            side_names(&game.side_b)
        );
        court.current_match = Some(game);
    }
}

/// Order `ids` streak holders first (at or above the threshold), each group shuffled.
pub(crate) fn priority_order(court: &Court, ids: &[PlayerId]) -> Vec<PlayerId> {
    let threshold = court.settings.win_streak_threshold;
    let (mut priority, mut rest): (Vec<PlayerId>, Vec<PlayerId>) = ids
        .iter()
        .copied()
        .partition(|&id| court.record(id).is_some_and(|r| r.has_priority(threshold)));
    let mut rng = rand::thread_rng();
    priority.shuffle(&mut rng);
    rest.shuffle(&mut rng);
    priority.append(&mut rest);
    priority
}

fn form_team_match(court: &mut Court) -> Option<GameMatch> {
    if court.settings.rotation_policy == RotationPolicy::WinnersStay {
        if let Some(reign) = &court.reigning_team {
            if court.team_queue.is_empty() {
                // Reigning team waits for a challenger team to be generated.
                return None;
            }
            let holders = reign.team.clone();
            let challengers = court.team_queue.remove(0);
            return Some(GameMatch::new(holders, challengers));
        }
    }
    if court.team_queue.len() < 2 {
        return None;
    }
    let side_a = court.team_queue.remove(0);
    let side_b = court.team_queue.remove(0);
    court.reigning_team = None;
    Some(GameMatch::new(side_a, side_b))
}

fn form_singles_match(court: &mut Court) -> Option<GameMatch> {
    let forced: Vec<Player> = match (&court.reigning_team, court.settings.rotation_policy) {
        (Some(reign), RotationPolicy::WinnersStay) => reign.team.clone(),
        _ => Vec::new(),
    };
    let forced_ids: HashSet<PlayerId> = forced.iter().map(|p| p.id).collect();
    let available: Vec<PlayerId> = court
        .waiting_queue
        .iter()
        .copied()
        .filter(|id| !forced_ids.contains(id) && court.contains_player(*id))
        .collect();
    if forced.len() + available.len() < 2 {
        return None;
    }

    let pool = priority_order(court, &available);
    let needed = 2usize.saturating_sub(forced.len());
    if pool.len() < needed {
        return None;
    }
    let challenger_ids: Vec<PlayerId> = pool[..needed].to_vec();

    let mut slots = forced;
    slots.extend(
        challenger_ids
            .iter()
            .filter_map(|&id| court.player(id).cloned()),
    );
    court.waiting_queue.retain(|id| !challenger_ids.contains(id));

    let side_b = slots.split_off(1);
    Some(GameMatch::new(slots, side_b))
}

fn side_names(side: &[Player]) -> String {
    side.iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, PlayerRecord, Settings};

    fn court_with_streaks(streaks: &[u32]) -> Court {
        let mut court = Court::with_settings(Settings {
            win_streak_threshold: 2,
            ..Settings::default()
        });
        for (i, &s) in streaks.iter().enumerate() {
            let p = Player::new(format!("P{i}"));
            court.records.insert(
                p.id,
                PlayerRecord {
                    win_streak: s,
                    ..PlayerRecord::default()
                },
            );
            court.waiting_queue.push(p.id);
            court.players.push(p);
        }
        court
    }

    #[test]
    fn streak_holders_are_ordered_first() {
        let court = court_with_streaks(&[0, 3, 1, 2, 0]);
        let ids = court.waiting_queue.clone();
        let ordered = priority_order(&court, &ids);
        assert_eq!(ordered.len(), 5);
        let head: HashSet<PlayerId> = ordered[..2].iter().copied().collect();
        let expected: HashSet<PlayerId> = [ids[1], ids[3]].into_iter().collect();
        assert_eq!(head, expected);
    }

    #[test]
    fn start_is_idempotent() {
        let mut court = court_with_streaks(&[0, 0, 0, 0]);
        court.settings.team_size = 1;
        start_match(&mut court);
        let first = court.current_match.clone();
        let queue = court.waiting_queue.clone();
        start_match(&mut court);
        assert_eq!(court.current_match, first);
        assert_eq!(court.waiting_queue, queue);
        assert_eq!(court.waiting_queue.len(), 2);
    }
}
