//! Person identifiers and id generation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a phonebook entry.
///
/// Held as an integer and rendered as a decimal string on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PersonId(u64);

impl PersonId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a string is not a canonical person id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid person id: {0:?}")]
pub struct ParseIdError(String);

impl FromStr for PersonId {
    type Err = ParseIdError;

    /// Accepts canonical decimal only, so that `"01"` or `"+1"` never alias `"1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = !s.is_empty()
            && s.bytes().all(|b| b.is_ascii_digit())
            && (s == "0" || !s.starts_with('0'));
        if !canonical {
            return Err(ParseIdError(s.to_string()));
        }
        s.parse::<u64>()
            .map(PersonId)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Monotonic id source.
///
/// Tracks the highest id ever handed out or observed; `next_id` returns one
/// past it. Removing records never lowers the mark.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    high_water: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from existing ids. An empty iterator leaves the mark at 0.
    pub fn seeded<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = PersonId>,
    {
        let mut generator = Self::new();
        for id in ids {
            generator.observe(id);
        }
        generator
    }

    /// Raise the mark to `id` if it is higher.
    pub fn observe(&mut self, id: PersonId) {
        self.high_water = self.high_water.max(id.0);
    }

    pub fn next_id(&mut self) -> PersonId {
        self.high_water += 1;
        PersonId(self.high_water)
    }

    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
