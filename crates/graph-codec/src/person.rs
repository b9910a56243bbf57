use crate::types::PersonId;
use chrono::NaiveDateTime;

/// An entity in the acquaintance graph.
///
/// Fields are private: callers read through the accessors and build a person
/// either with [`Person::new`] (fresh id) or [`Person::from_raw`] (explicit id).
/// Relations hold identifiers, resolved through the owning [`crate::Graph`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Person {
    id: PersonId,
    name: String,
    born_in: NaiveDateTime,
    relations: Vec<PersonId>,
}

impl Person {
    /// Create a person with a freshly generated id and no relations.
    pub fn new(name: impl Into<String>, born_in: NaiveDateTime) -> Self {
        Self::from_raw(PersonId::generate(), name, born_in)
    }

    /// Create a person from a raw identifier and attributes, with no relations.
    pub fn from_raw(id: PersonId, name: impl Into<String>, born_in: NaiveDateTime) -> Self {
        Self {
            id,
            name: name.into(),
            born_in,
            relations: Vec::new(),
        }
    }

    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn born_in(&self) -> NaiveDateTime {
        self.born_in
    }

    /// Related persons, in insertion order.
    pub fn relations(&self) -> &[PersonId] {
        &self.relations
    }

    /// Does this person reference `other`?
    pub fn knows(&self, other: &PersonId) -> bool {
        self.relations.contains(other)
    }

    /// Append a relation unconditionally. Callers decide about duplicates.
    pub(crate) fn push_relation(&mut self, other: PersonId) {
        self.relations.push(other);
    }
}
