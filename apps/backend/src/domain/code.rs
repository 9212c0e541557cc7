//! Core code-related types: Peg and Code (an ordered, fixed-length peg sequence)

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use crate::errors::domain::{DomainError, ValidationKind};

/// A single colored peg from the game's alphabet.
///
/// Pegs are equality-comparable but carry no meaningful ordering; `Ord` is
/// not implemented on purpose.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Peg {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Peg {
    /// Every peg color, in palette order. Used by secret generation and tests.
    pub const ALL: [Peg; 6] = [
        Peg::Red,
        Peg::Orange,
        Peg::Yellow,
        Peg::Green,
        Peg::Blue,
        Peg::Purple,
    ];

    /// Compact single-letter token (e.g., "R" for red) used on the wire.
    pub fn token(self) -> char {
        match self {
            Peg::Red => 'R',
            Peg::Orange => 'O',
            Peg::Yellow => 'Y',
            Peg::Green => 'G',
            Peg::Blue => 'B',
            Peg::Purple => 'P',
        }
    }
}

impl FromStr for Peg {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return Err(DomainError::validation(
                ValidationKind::ParsePeg,
                format!("Parse peg: {s}"),
            ));
        };
        match ch {
            'R' => Ok(Peg::Red),
            'O' => Ok(Peg::Orange),
            'Y' => Ok(Peg::Yellow),
            'G' => Ok(Peg::Green),
            'B' => Ok(Peg::Blue),
            'P' => Ok(Peg::Purple),
            _ => Err(DomainError::validation(
                ValidationKind::ParsePeg,
                format!("Parse peg: {s}"),
            )),
        }
    }
}

impl Display for Peg {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.token())
    }
}

/// Upper bound on code length, comfortably above the hardest difficulty.
/// Keeps peg counts representable in the `u8` feedback fields.
pub const MAX_CODE_LENGTH: usize = 16;

/// An ordered, fixed-length sequence of pegs (a secret or a guess).
///
/// Length is fixed per game by difficulty; `Code` itself guarantees
/// non-emptiness and the [`MAX_CODE_LENGTH`] bound. Length agreement between
/// a guess and a secret is enforced where the two meet (scoring,
/// [`crate::domain::game::Game::apply_guess`]).
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Code(Vec<Peg>);

impl Code {
    pub fn new(pegs: Vec<Peg>) -> Result<Self, DomainError> {
        if pegs.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyCode,
                "A code must contain at least one peg",
            ));
        }
        if pegs.len() > MAX_CODE_LENGTH {
            return Err(DomainError::validation(
                ValidationKind::Other("CODE_LENGTH".into()),
                format!(
                    "A code may contain at most {MAX_CODE_LENGTH} pegs, got {}",
                    pegs.len()
                ),
            ));
        }
        Ok(Self(pegs))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pegs(&self) -> &[Peg] {
        &self.0
    }
}

impl FromStr for Code {
    type Err = DomainError;

    /// Parse a compact code string (e.g., "RGBY").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let pegs = s
            .chars()
            .map(|ch| ch.to_string().parse::<Peg>())
            .collect::<Result<Vec<_>, _>>()?;
        Code::new(pegs)
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for peg in &self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}

/// Non-panicking helper to parse peg tokens (e.g., ["R", "G", "B", "Y"]) into a Code.
/// Returns Result<Code, DomainError> if any token is invalid or the list is empty.
pub fn try_parse_pegs<I, S>(tokens: I) -> Result<Code, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let pegs = tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Peg>())
        .collect::<Result<Vec<_>, _>>()?;
    Code::new(pegs)
}
