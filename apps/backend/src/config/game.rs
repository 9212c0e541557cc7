//! Game configuration from environment variables.

use std::env;

use crate::domain::rules::{Difficulty, GameRules, DEFAULT_MAX_ATTEMPTS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Environment variable overriding the per-game attempt cap.
pub const MAX_ATTEMPTS_VAR: &str = "CODEBREAK_MAX_ATTEMPTS";

/// Runtime game configuration.
///
/// The attempt cap defaults to the stock rule of 10 and may be overridden
/// per deployment; difficulty tiers keep their fixed code lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Build the config from the environment.
    ///
    /// A missing variable falls back to the default; a present-but-invalid
    /// value is a configuration error, not a silent fallback.
    pub fn from_env() -> Result<Self, DomainError> {
        let max_attempts = match env::var(MAX_ATTEMPTS_VAR) {
            Ok(raw) => {
                let parsed: u8 = raw.parse().map_err(|_| {
                    DomainError::validation(
                        ValidationKind::InvalidConfig,
                        format!("{MAX_ATTEMPTS_VAR} must be a number 1-255, got: '{raw}'"),
                    )
                })?;
                if parsed == 0 {
                    return Err(DomainError::validation(
                        ValidationKind::InvalidConfig,
                        format!("{MAX_ATTEMPTS_VAR} must be at least 1"),
                    ));
                }
                parsed
            }
            Err(env::VarError::NotPresent) => DEFAULT_MAX_ATTEMPTS,
            Err(e) => {
                return Err(DomainError::validation(
                    ValidationKind::InvalidConfig,
                    format!("{MAX_ATTEMPTS_VAR} unreadable: {e}"),
                ))
            }
        };

        Ok(Self { max_attempts })
    }

    /// Resolve the full rules for one game at the given difficulty.
    pub fn rules_for(&self, difficulty: Difficulty) -> GameRules {
        GameRules::for_difficulty(difficulty, self.max_attempts)
    }
}
