//! The ordered person collection and its operations.

use crate::store::id::{IdGenerator, PersonId};
use crate::store::person::{NewPerson, Person};

/// Errors reported by store operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("name or number missing")]
    MissingField,
    #[error("name {0:?} is already in the phonebook")]
    DuplicateName(String),
    #[error("person {0} not found")]
    NotFound(PersonId),
}

/// In-memory phonebook, ordered by insertion.
#[derive(Debug, Clone, Default)]
pub struct PersonStore {
    people: Vec<Person>,
    ids: IdGenerator,
}

impl PersonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `people` in the given order.
    ///
    /// The id generator is seeded past the largest id present.
    pub fn from_people(people: Vec<Person>) -> Self {
        let ids = IdGenerator::seeded(people.iter().map(|p| p.id));
        Self { people, ids }
    }

    /// The store the server starts with when sample data is enabled.
    pub fn with_sample_data() -> Self {
        let sample = [
            (1, "Arto Hellas", "040-123456"),
            (2, "Ada Lovelace", "39-44-5323523"),
            (3, "Dan Abramov", "12-43-234345"),
            (4, "Mary Poppendieck", "39-23-6423122"),
        ];
        Self::from_people(
            sample
                .into_iter()
                .map(|(id, name, number)| Person {
                    id: PersonId::new(id),
                    name: name.to_string(),
                    number: number.to_string(),
                })
                .collect(),
        )
    }

    pub fn list(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: PersonId) -> Result<&Person, StoreError> {
        self.people
            .iter()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Validate and append a new entry, returning it with its assigned id.
    ///
    /// Nothing is modified when validation fails.
    pub fn create(&mut self, new: &NewPerson) -> Result<Person, StoreError> {
        let (name, number) = new.fields().ok_or(StoreError::MissingField)?;

        if self.people.iter().any(|p| p.name == name) {
            return Err(StoreError::DuplicateName(name.to_string()));
        }

        let person = Person {
            id: self.ids.next_id(),
            name: name.to_string(),
            number: number.to_string(),
        };
        self.people.push(person.clone());
        Ok(person)
    }

    /// Remove every entry with `id`. Returns how many were removed.
    pub fn remove(&mut self, id: PersonId) -> usize {
        let before = self.people.len();
        self.people.retain(|p| p.id != id);
        before - self.people.len()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
