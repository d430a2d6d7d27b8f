//! Phonebook entry types.

use serde::{Deserialize, Serialize};

use crate::store::id::PersonId;

/// A single phonebook entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

/// Payload for creating an entry.
///
/// Both fields are optional at the type level; absence is reported by the
/// store as a missing field rather than as a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPerson {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            number: Some(number.into()),
        }
    }

    /// Returns the name and number if both are present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str)> {
        let name = self.name.as_deref().filter(|s| !s.is_empty())?;
        let number = self.number.as_deref().filter(|s| !s.is_empty())?;
        Some((name, number))
    }
}
