use crate::error::MalformedInput;
use crate::person::Person;
use crate::types::{format_timestamp, parse_timestamp, PersonId};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Type tag written into every record.
pub const RECORD_TYPE: &str = "Person";

/// Flat serialized form of one person.
///
/// Relations are identifiers, never nested records, so a record sequence can
/// express forward references and cycles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Optional on input; always `"Person"` on output.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub id: PersonId,
    pub name: String,
    /// Timestamp in [`crate::types::TIMESTAMP_FORMAT`].
    pub born_in: String,
    pub relations: Vec<PersonId>,
}

impl Record {
    /// Describe `person`, listing the ids of all of its relations.
    pub fn from_person(person: &Person) -> Self {
        Self {
            kind: Some(RECORD_TYPE.to_string()),
            id: person.id().clone(),
            name: person.name().to_string(),
            born_in: format_timestamp(&person.born_in()),
            relations: person.relations().to_vec(),
        }
    }

    /// Check the type tag, if any.
    pub fn check_kind(&self) -> Result<(), MalformedInput> {
        match self.kind.as_deref() {
            None | Some(RECORD_TYPE) => Ok(()),
            Some(other) => Err(MalformedInput::UnexpectedType {
                record: self.id.clone(),
                tag: other.to_string(),
            }),
        }
    }

    /// Parse the `born_in` attribute.
    pub fn parse_born_in(&self) -> Result<NaiveDateTime, MalformedInput> {
        parse_timestamp(&self.born_in).ok_or_else(|| MalformedInput::InvalidTimestamp {
            record: self.id.clone(),
            value: self.born_in.clone(),
        })
    }
}

/// Whole-graph document: every person plus an explicit root.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub root_id: PersonId,
    pub persons: Vec<Record>,
}
