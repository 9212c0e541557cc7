//! Serialization and deserialization for peg and code types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::code::{Code, Peg};

// Peg serde (compact single-letter token like "R", "G")
impl Serialize for Peg {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token().to_string())
    }
}

impl<'de> Deserialize<'de> for Peg {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Peg>()
            .map_err(|_| serde::de::Error::custom(format!("Invalid peg: {s}")))
    }
}

// Code serde: an ordered list of peg tokens, matching the wire contract
// ("ordered sequence of Peg identifiers"). The empty-code invariant is
// enforced on deserialization.
impl Serialize for Code {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.pegs())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let pegs = Vec::<Peg>::deserialize(deserializer)?;
        Code::new(pegs).map_err(|e| serde::de::Error::custom(e.to_string()))
    }
}
