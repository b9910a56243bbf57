use crate::error::GraphError;
use crate::person::Person;
use crate::types::PersonId;
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};

/// Identifier-indexed arena owning every person of an acquaintance graph.
///
/// Relations are stored as [`PersonId`]s inside each [`Person`], so cycles
/// never become ownership cycles. Iteration follows insertion order.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    persons: Vec<Person>,
    index: HashMap<PersonId, usize>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person. Fails if a person with the same id already exists.
    pub fn insert(&mut self, person: Person) -> Result<PersonId, GraphError> {
        if self.index.contains_key(person.id()) {
            return Err(GraphError::DuplicateId(person.id().clone()));
        }
        let id = person.id().clone();
        self.index.insert(id.clone(), self.persons.len());
        self.persons.push(person);
        Ok(id)
    }

    /// Create a person with a fresh id and insert it.
    pub fn add(&mut self, name: impl Into<String>, born_in: NaiveDateTime) -> PersonId {
        let person = Person::new(name, born_in);
        let id = person.id().clone();
        self.index.insert(id.clone(), self.persons.len());
        self.persons.push(person);
        id
    }

    /// Make `a` and `b` acquainted in both directions.
    ///
    /// Idempotent: an existing edge is never duplicated, and a self-loop is
    /// stored once.
    pub fn relate(&mut self, a: &PersonId, b: &PersonId) -> Result<(), GraphError> {
        let ai = self.slot(a)?;
        let bi = self.slot(b)?;
        if !self.persons[ai].knows(b) {
            self.persons[ai].push_relation(b.clone());
        }
        if ai != bi && !self.persons[bi].knows(a) {
            self.persons[bi].push_relation(a.clone());
        }
        Ok(())
    }

    /// Append a one-directional edge `from -> to` without touching `to`.
    pub fn link(&mut self, from: &PersonId, to: &PersonId) -> Result<(), GraphError> {
        let fi = self.slot(from)?;
        self.slot(to)?;
        self.persons[fi].push_relation(to.clone());
        Ok(())
    }

    /// Look up a person by id.
    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.index.get(id).map(|&i| &self.persons[i])
    }

    /// Is a person with this id in the graph?
    pub fn contains(&self, id: &PersonId) -> bool {
        self.index.contains_key(id)
    }

    /// Number of persons, reachable or not.
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// All persons in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// First person with the given name, in insertion order.
    ///
    /// Names are not unique; ids are the stable handle.
    pub fn find_by_name(&self, name: &str) -> Option<&Person> {
        self.persons.iter().find(|p| p.name() == name)
    }

    /// Relations of a person, in insertion order.
    pub fn relations_of(&self, id: &PersonId) -> Result<&[PersonId], GraphError> {
        self.get(id)
            .map(Person::relations)
            .ok_or_else(|| GraphError::NotFound(id.clone()))
    }

    /// Persons reachable from `root`, in depth-first pre-order.
    ///
    /// Each person appears once; the visited set bounds the walk on cycles.
    /// An explicit stack replaces recursion, children are pushed in reverse so
    /// the first relation is explored first.
    pub fn depth_first(&self, root: &PersonId) -> Result<Vec<&Person>, GraphError> {
        let mut visited: HashSet<&PersonId> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![root];

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let person = self
                .get(current)
                .ok_or_else(|| GraphError::NotFound(current.clone()))?;
            order.push(person);

            for next in person.relations().iter().rev() {
                if !visited.contains(next) {
                    stack.push(next);
                }
            }
        }

        Ok(order)
    }

    /// Ids reachable from `root`, in depth-first pre-order.
    pub fn reachable_from(&self, root: &PersonId) -> Result<Vec<PersonId>, GraphError> {
        Ok(self
            .depth_first(root)?
            .into_iter()
            .map(|p| p.id().clone())
            .collect())
    }

    pub(crate) fn get_mut(&mut self, id: &PersonId) -> Option<&mut Person> {
        match self.index.get(id) {
            Some(&i) => Some(&mut self.persons[i]),
            None => None,
        }
    }

    fn slot(&self, id: &PersonId) -> Result<usize, GraphError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NotFound(id.clone()))
    }
}
