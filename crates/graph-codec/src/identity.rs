use crate::error::MalformedInput;
use crate::types::{IdPolicy, PersonId};
use std::collections::HashMap;

/// Decode-scoped lookup from a record id to the id of the freshly allocated
/// person in the new arena.
///
/// Built by one decode call and dropped when it returns. Under
/// [`IdPolicy::Preserve`] both ids are equal; under [`IdPolicy::Regenerate`]
/// every record id maps to a new random id.
#[derive(Debug)]
pub struct IdentityMap {
    policy: IdPolicy,
    entries: HashMap<PersonId, PersonId>,
}

impl IdentityMap {
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_capacity(policy, 0)
    }

    pub fn with_capacity(policy: IdPolicy, capacity: usize) -> Self {
        Self {
            policy,
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Register `record_id` and return the id its person is allocated under.
    pub fn allocate(&mut self, record_id: &PersonId) -> Result<PersonId, MalformedInput> {
        if self.entries.contains_key(record_id) {
            return Err(MalformedInput::DuplicateId(record_id.clone()));
        }
        let allocated = match self.policy {
            IdPolicy::Preserve => record_id.clone(),
            IdPolicy::Regenerate => PersonId::generate(),
        };
        self.entries.insert(record_id.clone(), allocated.clone());
        Ok(allocated)
    }

    /// Look up the allocated id for a record id.
    pub fn resolve(&self, record_id: &PersonId) -> Option<&PersonId> {
        self.entries.get(record_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
