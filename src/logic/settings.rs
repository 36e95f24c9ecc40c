//! Rule changes and mode switching.

use crate::logic::formation::start_match;
use crate::models::{Court, SettingsError, SettingsUpdate};

/// Merge `update` into the court's rules.
///
/// Changing team size or rotation policy is a mode switch: the reign and any
/// champion are dropped (badges kept), the active match is cancelled, the team
/// queue is emptied and every known player is requeued in admission order.
pub fn update_settings(court: &mut Court, update: SettingsUpdate) -> Result<(), SettingsError> {
    update.validate()?;
    let mode_switch = update.is_mode_switch(&court.settings);
    update.apply_to(&mut court.settings);

    if mode_switch {
        court.clear_championship_state(false);
        court.current_match = None;
        court.team_queue.clear();
        court.waiting_queue = court.all_player_ids();
        log::info!(
            "Mode switched to {:?}, team size {}; {} player(s) requeued",
            court.settings.rotation_policy,
            court.settings.team_size,
            court.waiting_queue.len()
        );
    }

    start_match(court);
    Ok(())
}
