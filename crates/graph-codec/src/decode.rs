//! Record sequence → fresh graph.

use crate::error::{CodecError, MalformedInput};
use crate::graph::Graph;
use crate::identity::IdentityMap;
use crate::person::Person;
use crate::record::{Record, Snapshot};
use crate::types::{IdPolicy, PersonId};
use crate::validation::SymmetryValidator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Knobs for a single decode call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    pub id_policy: IdPolicy,
    /// Reject graphs whose relations are not symmetric.
    pub verify_symmetry: bool,
}

/// A decoded graph together with its root.
#[derive(Clone, Debug)]
pub struct Decoded {
    pub graph: Graph,
    pub root: PersonId,
}

impl Decoded {
    pub fn root_person(&self) -> Option<&Person> {
        self.graph.get(&self.root)
    }
}

/// Decode with default options (ids preserved, no symmetry check).
pub fn decode(records: &[Record]) -> Result<Decoded, CodecError> {
    decode_with(records, DecodeOptions::default())
}

/// Decode a record sequence; the root is the person of `records[0]`.
pub fn decode_with(records: &[Record], options: DecodeOptions) -> Result<Decoded, CodecError> {
    let first = records.first().ok_or(MalformedInput::Empty)?;
    let (graph, ids) = rebuild(records, options)?;
    let root = ids
        .resolve(&first.id)
        .cloned()
        .ok_or_else(|| CodecError::UnknownEntity(first.id.clone()))?;

    debug!(root = %root, records = records.len(), policy = %options.id_policy, "Decoded graph");
    Ok(Decoded { graph, root })
}

/// Decode a whole-graph snapshot; the root is the person named by `root_id`.
pub fn decode_snapshot(snapshot: &Snapshot, options: DecodeOptions) -> Result<Decoded, CodecError> {
    if snapshot.persons.is_empty() {
        return Err(MalformedInput::Empty.into());
    }
    let (graph, ids) = rebuild(&snapshot.persons, options)?;
    let root = ids
        .resolve(&snapshot.root_id)
        .cloned()
        .ok_or_else(|| MalformedInput::MissingRoot(snapshot.root_id.clone()))?;

    debug!(root = %root, records = snapshot.persons.len(), "Decoded snapshot");
    Ok(Decoded { graph, root })
}

/// Two-phase reconstruction.
///
/// Allocation creates every person with empty relations before any edge is
/// wired, so forward references and cycles resolve without placeholders.
/// Wiring then appends relations verbatim, in record order.
fn rebuild(records: &[Record], options: DecodeOptions) -> Result<(Graph, IdentityMap), CodecError> {
    let mut ids = IdentityMap::with_capacity(options.id_policy, records.len());
    let mut graph = Graph::new();

    for record in records {
        record.check_kind()?;
        let born_in = record.parse_born_in()?;
        let id = ids.allocate(&record.id)?;
        graph.insert(Person::from_raw(id, record.name.clone(), born_in))?;
    }

    for record in records {
        let owner = ids
            .resolve(&record.id)
            .cloned()
            .ok_or_else(|| CodecError::UnknownEntity(record.id.clone()))?;

        let mut targets = Vec::with_capacity(record.relations.len());
        for rel in &record.relations {
            let target = ids.resolve(rel).ok_or_else(|| MalformedInput::DanglingRelation {
                record: record.id.clone(),
                missing: rel.clone(),
            })?;
            targets.push(target.clone());
        }

        let person = graph
            .get_mut(&owner)
            .ok_or_else(|| CodecError::UnknownEntity(owner.clone()))?;
        for target in targets {
            person.push_relation(target);
        }
    }

    if options.verify_symmetry {
        SymmetryValidator::ensure(&graph)?;
    }

    Ok((graph, ids))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, name: &str, relations: &[&str]) -> Record {
        Record {
            kind: Some("Person".into()),
            id: PersonId::from(id),
            name: name.into(),
            born_in: "2020-04-12T00:00:00".into(),
            relations: relations.iter().map(|r| PersonId::from(*r)).collect(),
        }
    }

    #[test]
    fn empty_input_rejected() {
        assert!(matches!(
            decode(&[]),
            Err(CodecError::Malformed(MalformedInput::Empty))
        ));
    }

    #[test]
    fn dangling_reference_rejected() {
        let records = vec![rec("a", "A", &["b", "ghost"]), rec("b", "B", &["a"])];
        match decode(&records) {
            Err(CodecError::Malformed(MalformedInput::DanglingRelation { record, missing })) => {
                assert_eq!(record.as_str(), "a");
                assert_eq!(missing.as_str(), "ghost");
            }
            other => panic!("expected dangling relation, got {:?}", other),
        }
    }

    #[test]
    fn unparseable_timestamp_rejected() {
        let mut bad = rec("a", "A", &[]);
        bad.born_in = "not a date".into();
        assert!(matches!(
            decode(&[bad]),
            Err(CodecError::Malformed(MalformedInput::InvalidTimestamp { .. }))
        ));
    }

    #[test]
    fn duplicate_ids_rejected() {
        let records = vec![rec("a", "A", &[]), rec("a", "A again", &[])];
        assert!(matches!(
            decode(&records),
            Err(CodecError::Malformed(MalformedInput::DuplicateId(_)))
        ));
    }

    #[test]
    fn forward_and_cyclic_references_resolve() {
        let records = vec![
            rec("a", "A", &["b"]),
            rec("b", "B", &["c"]),
            rec("c", "C", &["a"]),
        ];
        let decoded = decode(&records).unwrap();
        assert_eq!(decoded.root.as_str(), "a");
        assert_eq!(decoded.graph.len(), 3);
        let c = decoded.graph.get(&PersonId::from("c")).unwrap();
        assert_eq!(c.relations(), &[PersonId::from("a")]);
    }

    #[test]
    fn root_is_first_record_not_first_alphabetically() {
        let records = vec![rec("z", "Z", &["a"]), rec("a", "A", &["z"])];
        let decoded = decode(&records).unwrap();
        assert_eq!(decoded.root_person().unwrap().name(), "Z");
    }

    #[test]
    fn self_loop_reconstructed() {
        let decoded = decode(&[rec("a", "A", &["a"])]).unwrap();
        let a = decoded.root_person().unwrap();
        assert!(a.knows(a.id()));
    }

    #[test]
    fn asymmetry_reproduced_verbatim_by_default() {
        let records = vec![rec("a", "A", &["b"]), rec("b", "B", &[])];
        let decoded = decode(&records).unwrap();
        assert!(decoded.graph.get(&PersonId::from("b")).unwrap().relations().is_empty());
    }

    #[test]
    fn asymmetry_rejected_when_verified() {
        let records = vec![rec("a", "A", &["b"]), rec("b", "B", &[])];
        let options = DecodeOptions {
            verify_symmetry: true,
            ..Default::default()
        };
        assert!(matches!(
            decode_with(&records, options),
            Err(CodecError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn regenerate_assigns_new_ids_and_remaps_relations() {
        let records = vec![rec("a", "A", &["b"]), rec("b", "B", &["a"])];
        let options = DecodeOptions {
            id_policy: IdPolicy::Regenerate,
            ..Default::default()
        };
        let decoded = decode_with(&records, options).unwrap();
        let root = decoded.root_person().unwrap();
        assert_ne!(root.id().as_str(), "a");
        assert_eq!(root.name(), "A");

        let friend = decoded.graph.get(&root.relations()[0]).unwrap();
        assert_eq!(friend.name(), "B");
        assert_eq!(friend.relations(), &[root.id().clone()]);
    }

    #[test]
    fn snapshot_root_must_exist() {
        let snapshot = Snapshot {
            root_id: PersonId::from("nobody"),
            persons: vec![rec("a", "A", &[])],
        };
        assert!(matches!(
            decode_snapshot(&snapshot, DecodeOptions::default()),
            Err(CodecError::Malformed(MalformedInput::MissingRoot(_)))
        ));
    }

    #[test]
    fn snapshot_root_need_not_be_first() {
        let snapshot = Snapshot {
            root_id: PersonId::from("b"),
            persons: vec![rec("a", "A", &[]), rec("b", "B", &[])],
        };
        let decoded = decode_snapshot(&snapshot, DecodeOptions::default()).unwrap();
        assert_eq!(decoded.root_person().unwrap().name(), "B");
        assert_eq!(decoded.graph.len(), 2);
    }
}
