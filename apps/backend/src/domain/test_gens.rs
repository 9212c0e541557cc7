// Proptest generators for domain types.
// These generators produce codes of matching lengths for scoring properties.

use proptest::prelude::*;

use crate::domain::{Code, Peg};

/// Generate a random Peg
pub fn peg() -> impl Strategy<Value = Peg> {
    prop_oneof![
        Just(Peg::Red),
        Just(Peg::Orange),
        Just(Peg::Yellow),
        Just(Peg::Green),
        Just(Peg::Blue),
        Just(Peg::Purple),
    ]
}

/// Generate a Code of exactly `len` pegs
pub fn code(len: usize) -> impl Strategy<Value = Code> {
    prop::collection::vec(peg(), len).prop_map(|pegs| {
        Code::new(pegs).expect("generator produces non-empty codes")
    })
}

/// Generate a Code of 1 to 8 pegs (covers every difficulty plus margin)
pub fn any_code() -> impl Strategy<Value = Code> {
    (1usize..=8).prop_flat_map(code)
}

/// Generate a (secret, guess) pair of equal length
pub fn code_pair() -> impl Strategy<Value = (Code, Code)> {
    (1usize..=8).prop_flat_map(|len| (code(len), code(len)))
}
