//! Court rules: team size, rotation policy, streak priority threshold.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What happens to players after a match is decided.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPolicy {
    /// Everyone returns to the waiting queue.
    #[default]
    AllShuffle,
    /// Winners keep the court until beaten or crowned.
    WinnersStay,
}

impl FromStr for RotationPolicy {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_shuffle" => Ok(RotationPolicy::AllShuffle),
            "winners_stay" => Ok(RotationPolicy::WinnersStay),
            _ => Err(SettingsError::UnknownRotationPolicy(s.to_string())),
        }
    }
}

/// Errors from validating a settings change.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SettingsError {
    /// Team size must be at least 1.
    InvalidTeamSize,
    /// Win streak threshold must be at least 1.
    InvalidWinStreakThreshold,
    UnknownRotationPolicy(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::InvalidTeamSize => write!(f, "Team size must be at least 1"),
            SettingsError::InvalidWinStreakThreshold => {
                write!(f, "Win streak threshold must be at least 1")
            }
            SettingsError::UnknownRotationPolicy(s) => write!(f, "Unknown rotation policy: {}", s),
        }
    }
}

impl std::error::Error for SettingsError {}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Streak at which a player is pulled ahead in the queue.
    pub win_streak_threshold: u32,
    pub rotation_policy: RotationPolicy,
    /// Players per side; 1 is singles.
    pub team_size: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            win_streak_threshold: 3,
            rotation_policy: RotationPolicy::AllShuffle,
            team_size: 2,
        }
    }
}

impl Settings {
    pub fn is_singles(&self) -> bool {
        self.team_size == 1
    }
}

/// Partial settings: only `Some` fields are merged.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SettingsUpdate {
    #[serde(default)]
    pub win_streak_threshold: Option<u32>,
    #[serde(default)]
    pub rotation_policy: Option<RotationPolicy>,
    #[serde(default)]
    pub team_size: Option<usize>,
}

impl SettingsUpdate {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.team_size == Some(0) {
            return Err(SettingsError::InvalidTeamSize);
        }
        if self.win_streak_threshold == Some(0) {
            return Err(SettingsError::InvalidWinStreakThreshold);
        }
        Ok(())
    }

    /// Whether applying this update to `current` changes team size or policy.
    pub fn is_mode_switch(&self, current: &Settings) -> bool {
        self.team_size.is_some_and(|n| n != current.team_size)
            || self
                .rotation_policy
                .is_some_and(|p| p != current.rotation_policy)
    }

    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(n) = self.win_streak_threshold {
            settings.win_streak_threshold = n;
        }
        if let Some(p) = self.rotation_policy {
            settings.rotation_policy = p;
        }
        if let Some(n) = self.team_size {
            settings.team_size = n;
        }
    }
}
