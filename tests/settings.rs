//! Integration tests for rule changes, mode switches and the leaderboard.

use badminton_rotation::{
    admit_player, declare_winner, update_settings, Court, PlayerId, RotationPolicy, Settings,
    SettingsError, SettingsUpdate, Side,
};

fn side_of(court: &Court, id: PlayerId) -> Side {
    let m = court.current_match.as_ref().expect("match on court");
    if m.side_a.iter().any(|p| p.id == id) {
        Side::A
    } else {
        Side::B
    }
}

fn singles_court(rotation_policy: RotationPolicy, names: &[&str]) -> (Court, Vec<PlayerId>) {
    let mut court = Court::with_settings(Settings {
        win_streak_threshold: 3,
        rotation_policy,
        team_size: 1,
    });
    let ids = names
        .iter()
        .map(|n| admit_player(&mut court, n).unwrap())
        .collect();
    (court, ids)
}

#[test]
fn defaults_are_doubles_all_shuffle() {
    let s = Settings::default();
    assert_eq!(s.team_size, 2);
    assert_eq!(s.rotation_policy, RotationPolicy::AllShuffle);
    assert_eq!(s.win_streak_threshold, 3);
}

#[test]
fn switching_to_doubles_relinearizes_everyone() {
    let (mut court, ids) = singles_court(RotationPolicy::WinnersStay, &["P1", "P2", "P3"]);
    let side = side_of(&court, ids[0]);
    declare_winner(&mut court, side);
    assert!(court.reigning_team.is_some());
    assert!(court.current_match.is_some());

    update_settings(
        &mut court,
        SettingsUpdate {
            team_size: Some(2),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(court.settings.team_size, 2);
    assert!(court.current_match.is_none());
    assert!(court.reigning_team.is_none());
    assert!(court.champion.is_none());
    assert!(court.team_queue.is_empty());
    assert_eq!(court.waiting_queue, ids);
}

#[test]
fn policy_switch_keeps_badges() {
    let (mut court, ids) = singles_court(RotationPolicy::WinnersStay, &["P1", "P2"]);
    let side = side_of(&court, ids[0]);
    declare_winner(&mut court, side);
    assert!(court.champion.is_some());

    update_settings(
        &mut court,
        SettingsUpdate {
            rotation_policy: Some(RotationPolicy::AllShuffle),
            ..Default::default()
        },
    )
    .unwrap();

    assert!(court.champion.is_none());
    assert!(court.record(ids[0]).unwrap().is_session_champion);
    // Still singles, so play resumes straight away.
    assert!(court.current_match.is_some());
}

#[test]
fn threshold_change_is_not_a_mode_switch() {
    let (mut court, _) = singles_court(RotationPolicy::AllShuffle, &["P1", "P2", "P3"]);
    let game = court.current_match.clone();
    let queue = court.waiting_queue.clone();

    update_settings(
        &mut court,
        SettingsUpdate {
            win_streak_threshold: Some(1),
            rotation_policy: Some(RotationPolicy::AllShuffle),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(court.settings.win_streak_threshold, 1);
    assert_eq!(court.current_match, game);
    assert_eq!(court.waiting_queue, queue);
}

#[test]
fn zero_values_are_rejected() {
    let (mut court, _) = singles_court(RotationPolicy::AllShuffle, &["P1", "P2"]);
    let before = court.settings;

    let err = update_settings(
        &mut court,
        SettingsUpdate {
            team_size: Some(0),
            ..Default::default()
        },
    );
    assert_eq!(err, Err(SettingsError::InvalidTeamSize));

    let err = update_settings(
        &mut court,
        SettingsUpdate {
            win_streak_threshold: Some(0),
            ..Default::default()
        },
    );
    assert_eq!(err, Err(SettingsError::InvalidWinStreakThreshold));
    assert_eq!(court.settings, before);
    assert!(court.current_match.is_some());
}

#[test]
fn leaderboard_ranks_champions_then_wins_then_streak() {
    let (mut court, ids) = singles_court(RotationPolicy::AllShuffle, &["A", "B", "C", "D"]);
    let set = |court: &mut Court, id: PlayerId, wins: u32, streak: u32, champ: bool| {
        let r = court.records.get_mut(&id).unwrap();
        r.wins = wins;
        r.win_streak = streak;
        r.is_session_champion = champ;
    };
    set(&mut court, ids[0], 2, 0, false);
    set(&mut court, ids[1], 5, 1, false);
    set(&mut court, ids[2], 2, 2, false);
    set(&mut court, ids[3], 1, 1, true);

    let order: Vec<PlayerId> = court.leaderboard().iter().map(|s| s.player.id).collect();
    assert_eq!(order, vec![ids[3], ids[1], ids[2], ids[0]]);
    assert_eq!(court.leaderboard()[0].win_loss_ratio, None);
}
