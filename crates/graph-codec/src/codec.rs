use crate::config::CodecConfig;
use crate::decode::{decode_snapshot, decode_with, Decoded};
use crate::encode::{encode, encode_snapshot};
use crate::error::CodecError;
use crate::graph::Graph;
use crate::record::Record;
use crate::types::PersonId;
use crate::wire;

/// Configured entry point pairing the encoder and decoder with the JSON
/// transport.
///
/// Holds no state besides its configuration; every call builds and drops its
/// own visited set or identity map.
#[derive(Clone, Debug, Default)]
pub struct Codec {
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn encode(&self, graph: &Graph, root: &PersonId) -> Result<Vec<Record>, CodecError> {
        encode(graph, root)
    }

    pub fn decode(&self, records: &[Record]) -> Result<Decoded, CodecError> {
        decode_with(records, self.config.decode_options())
    }

    /// Encode the graph reachable from `root` into JSON bytes.
    pub fn encode_to_bytes(&self, graph: &Graph, root: &PersonId) -> Result<Vec<u8>, CodecError> {
        let records = self.encode(graph, root)?;
        wire::to_bytes(&records, self.config.pretty)
    }

    /// Decode JSON bytes produced by [`Codec::encode_to_bytes`].
    pub fn decode_from_bytes(&self, bytes: &[u8]) -> Result<Decoded, CodecError> {
        let records = wire::from_bytes(bytes)?;
        self.decode(&records)
    }

    /// Encode every person of the graph as a snapshot document.
    pub fn snapshot_to_bytes(&self, graph: &Graph, root: &PersonId) -> Result<Vec<u8>, CodecError> {
        let snapshot = encode_snapshot(graph, root)?;
        wire::snapshot_to_bytes(&snapshot, self.config.pretty)
    }

    pub fn snapshot_from_bytes(&self, bytes: &[u8]) -> Result<Decoded, CodecError> {
        let snapshot = wire::snapshot_from_bytes(bytes)?;
        decode_snapshot(&snapshot, self.config.decode_options())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdPolicy;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn ivan_and_petr() -> (Graph, PersonId) {
        let mut g = Graph::new();
        let ivan = g.add("Ivan", date(2020, 4, 12));
        let petr = g.add("Petr", date(2021, 9, 27));
        g.relate(&ivan, &petr).unwrap();
        (g, ivan)
    }

    #[test]
    fn bytes_roundtrip() {
        let (g, ivan) = ivan_and_petr();
        let codec = Codec::default();
        let bytes = codec.encode_to_bytes(&g, &ivan).unwrap();
        let decoded = codec.decode_from_bytes(&bytes).unwrap();

        let root = decoded.root_person().unwrap();
        assert_eq!(root.id(), &ivan);
        assert_eq!(root.name(), "Ivan");
        assert_eq!(root.relations().len(), 1);
        let friend = decoded.graph.get(&root.relations()[0]).unwrap();
        assert_eq!(friend.name(), "Petr");
    }

    #[test]
    fn garbage_bytes_are_malformed() {
        let codec = Codec::default();
        assert!(matches!(
            codec.decode_from_bytes(b"not json"),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn config_drives_id_policy() {
        let (g, ivan) = ivan_and_petr();
        let codec = Codec::new(CodecConfig {
            id_policy: IdPolicy::Regenerate,
            ..Default::default()
        });
        let bytes = codec.encode_to_bytes(&g, &ivan).unwrap();
        let decoded = codec.decode_from_bytes(&bytes).unwrap();
        assert_ne!(decoded.root, ivan);
        assert_eq!(decoded.root_person().unwrap().name(), "Ivan");
    }

    #[test]
    fn snapshot_roundtrip_keeps_island() {
        let (mut g, ivan) = ivan_and_petr();
        g.add("Hermit", date(1970, 1, 1));
        let codec = Codec::default();
        let bytes = codec.snapshot_to_bytes(&g, &ivan).unwrap();
        let decoded = codec.snapshot_from_bytes(&bytes).unwrap();
        assert_eq!(decoded.graph.len(), 3);
        assert_eq!(decoded.root, ivan);
        assert!(decoded.graph.iter().any(|p| p.name() == "Hermit"));
    }
}
