//! Difficulty levels and the values they scale.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How hard the game is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Normal,
    Hard,
}

/// Input that does not name a difficulty level.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown difficulty '{0}', expected one of: easy, normal, hard")]
pub struct UnknownDifficulty(pub String);

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [Self::Easy, Self::Normal, Self::Hard];

    /// Number of rounds played.
    pub fn question_count(self) -> u32 {
        match self {
            Self::Easy => 3,
            Self::Normal => 4,
            Self::Hard => 5,
        }
    }

    /// Width of the window wrong years are drawn from, on each side.
    pub fn year_spread(self) -> i32 {
        match self {
            Self::Easy => 20,
            Self::Normal => 10,
            Self::Hard => 5,
        }
    }

    /// Score awarded per correct answer.
    pub fn points_per_correct(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Normal => 2,
            Self::Hard => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DifficultyLevel {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.name() == needle)
            .ok_or_else(|| UnknownDifficulty(s.trim().to_string()))
    }
}
