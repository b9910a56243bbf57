//! Graph → record sequence.

use crate::error::CodecError;
use crate::graph::Graph;
use crate::record::{Record, Snapshot};
use crate::types::PersonId;
use tracing::debug;

/// Encode the graph reachable from `root` as a flat record sequence.
///
/// Records appear in depth-first pre-order, so record 0 is always the root.
/// Every record lists all of its relations, including persons visited later
/// or already visited; the visited set alone stops the walk on cycles.
pub fn encode(graph: &Graph, root: &PersonId) -> Result<Vec<Record>, CodecError> {
    if !graph.contains(root) {
        return Err(CodecError::UnknownEntity(root.clone()));
    }

    let records: Vec<Record> = graph
        .depth_first(root)?
        .into_iter()
        .map(Record::from_person)
        .collect();

    debug!(root = %root, records = records.len(), "Encoded graph");
    Ok(records)
}

/// Encode every person of the graph, reachable or not, with an explicit root.
pub fn encode_snapshot(graph: &Graph, root: &PersonId) -> Result<Snapshot, CodecError> {
    if !graph.contains(root) {
        return Err(CodecError::UnknownEntity(root.clone()));
    }

    let persons: Vec<Record> = graph.iter().map(Record::from_person).collect();
    debug!(root = %root, records = persons.len(), "Encoded snapshot");
    Ok(Snapshot {
        root_id: root.clone(),
        persons,
    })
}
