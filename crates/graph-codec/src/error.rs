use crate::types::PersonId;

/// Errors from codec operations.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed input: {0}")]
    Malformed(#[from] MalformedInput),
    #[error("relation invariant violated: {from} -> {to} has no reverse edge")]
    InvariantViolation { from: PersonId, to: PersonId },
    #[error("entity not found: {0}")]
    UnknownEntity(PersonId),
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Structural problems in a serialized record sequence.
#[derive(Debug, thiserror::Error)]
pub enum MalformedInput {
    #[error("record sequence is empty")]
    Empty,
    #[error("record {record} references unknown id {missing}")]
    DanglingRelation { record: PersonId, missing: PersonId },
    #[error("duplicate record id: {0}")]
    DuplicateId(PersonId),
    #[error("record {record}: unparseable timestamp {value:?}")]
    InvalidTimestamp { record: PersonId, value: String },
    #[error("record {record}: unexpected type tag {tag:?}")]
    UnexpectedType { record: PersonId, tag: String },
    #[error("snapshot root {0} is not among its records")]
    MissingRoot(PersonId),
    #[error("invalid document: {0}")]
    Syntax(String),
}

/// Errors from the in-memory graph arena.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("person already exists: {0}")]
    DuplicateId(PersonId),
    #[error("person not found: {0}")]
    NotFound(PersonId),
}

impl From<serde_json::Error> for MalformedInput {
    fn from(e: serde_json::Error) -> Self {
        MalformedInput::Syntax(e.to_string())
    }
}
