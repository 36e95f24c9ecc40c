//! Data structures for the court: players, matches, rules and engine state.

mod court;
mod game;
mod player;
mod settings;

pub use court::Court;
pub use game::{GameMatch, MatchId, ReigningTeam, Side, Team};
pub use player::{Player, PlayerId, PlayerRecord, Standing};
pub use settings::{RotationPolicy, Settings, SettingsError, SettingsUpdate};
