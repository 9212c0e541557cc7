//! Guess scoring: exact matches and color-only matches.
//!
//! Classic two-pass evaluation. The first pass counts position-exact hits,
//! the second counts the multiset intersection of the two codes with
//! consumption marking so duplicate pegs are never counted twice. Color
//! matches are the intersection minus the exact hits.

use crate::domain::code::Code;
use crate::errors::domain::{DomainError, ValidationKind};

/// Feedback for a single guess.
///
/// Invariant: `exact_matches + color_matches <= secret length`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GuessScore {
    /// Right peg, right position ("black pegs").
    pub exact_matches: u8,
    /// Right peg, wrong position ("white pegs"), disjoint from exact matches.
    pub color_matches: u8,
}

impl GuessScore {
    /// True when every position matched, i.e. the code was broken.
    pub fn is_full_match(&self, code_length: usize) -> bool {
        usize::from(self.exact_matches) == code_length
    }
}

/// Score a guess against the secret.
///
/// Both codes must be non-empty and of equal length; callers validate this
/// up front, but the evaluator defends against it anyway. Pure and
/// deterministic, no side effects.
pub fn score_guess(secret: &Code, guess: &Code) -> Result<GuessScore, DomainError> {
    if secret.is_empty() || guess.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::EmptyCode,
            "Secret and guess must be non-empty",
        ));
    }
    if secret.len() != guess.len() {
        return Err(DomainError::validation(
            ValidationKind::InvalidGuessLength,
            format!(
                "Guess length {} does not match secret length {}",
                guess.len(),
                secret.len()
            ),
        ));
    }

    let exact_matches = secret
        .pegs()
        .iter()
        .zip(guess.pegs())
        .filter(|(s, g)| s == g)
        .count() as u8;

    // Multiset intersection: consume each secret peg at most once so
    // duplicates in the guess cannot over-count.
    let mut remaining: Vec<Option<_>> = secret.pegs().iter().copied().map(Some).collect();
    let mut raw_matches: u8 = 0;
    for peg in guess.pegs() {
        if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(*peg)) {
            *slot = None;
            raw_matches += 1;
        }
    }

    Ok(GuessScore {
        exact_matches,
        color_matches: raw_matches - exact_matches,
    })
}
