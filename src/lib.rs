//! Badminton court rotation: library with models and scheduling logic.

pub mod logic;
pub mod models;

pub use logic::{
    admit_player, declare_winner, end_championship_and_continue, generate_teams, remove_player,
    reset_app, start_match, update_settings,
};
pub use models::{
    Court, GameMatch, MatchId, Player, PlayerId, PlayerRecord, ReigningTeam, RotationPolicy,
    Settings, SettingsError, SettingsUpdate, Side, Standing, Team,
};
