//! Rotation engine operations: roster, match formation, results, teams, rules.

mod formation;
mod results;
mod roster;
mod settings;
mod teams;

pub use formation::start_match;
pub use results::{declare_winner, end_championship_and_continue};
pub use roster::{admit_player, remove_player, reset_app};
pub use settings::update_settings;
pub use teams::generate_teams;
