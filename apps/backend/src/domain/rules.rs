//! Game rules: difficulty tiers and the attempt cap.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

/// Default attempt budget per game. Difficulty tiers may override it via
/// configuration, but 10 is the stock rule.
pub const DEFAULT_MAX_ATTEMPTS: u8 = 10;

/// Difficulty tier; fixes the code length for every code in the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    /// Secret/guess length for this tier.
    pub fn code_length(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Normal => 5,
            Difficulty::Hard => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "normal" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DomainError::validation(
                ValidationKind::Other("PARSE_DIFFICULTY".into()),
                format!("Unknown difficulty: {s}"),
            )),
        }
    }
}

/// Resolved rules for one game: code length plus attempt cap.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameRules {
    pub code_length: usize,
    pub max_attempts: u8,
}

impl GameRules {
    pub fn for_difficulty(difficulty: Difficulty, max_attempts: u8) -> Self {
        Self {
            code_length: difficulty.code_length(),
            max_attempts,
        }
    }
}
