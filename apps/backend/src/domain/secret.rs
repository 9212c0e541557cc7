//! Deterministic secret generation.
//!
//! Secrets are derived from a per-game seed so that a game is fully
//! reproducible given its stored seed. Duplicate peg colors are allowed,
//! as in the classic rules.

use crate::domain::code::{Code, Peg};
use crate::errors::domain::DomainError;

/// Simple deterministic RNG for peg sampling.
///
/// Uses a SplitMix64-style generator for good statistical properties while
/// remaining fast and deterministic given a seed.
struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Largest multiple of m that fits in u64; values above it are
        // rejected to avoid modulo bias.
        let limit = u64::MAX - (u64::MAX % m);

        loop {
            let x = self.next();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }
}

/// Derive the secret-generation seed from the stored game seed.
///
/// Kept separate from the raw game seed so future seeded contexts (e.g.,
/// hint sampling) can derive their own streams without collisions.
pub fn derive_secret_seed(game_seed: i64) -> u64 {
    // Sign doesn't matter for seeding.
    (game_seed as u64).wrapping_mul(0x2545F4914F6CDD1D).wrapping_add(1)
}

/// Generate a secret code of `code_length` pegs from the game seed.
pub fn generate_secret(game_seed: i64, code_length: usize) -> Result<Code, DomainError> {
    let mut rng = SplitMix64::new(derive_secret_seed(game_seed));
    let pegs = (0..code_length)
        .map(|_| Peg::ALL[rng.next_range(Peg::ALL.len())])
        .collect();
    Code::new(pegs)
}
