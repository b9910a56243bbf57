#![deny(unsafe_code)]
//! # graph-codec
//!
//! Serializes an acquaintance graph of persons, cycles included, into a flat
//! JSON record sequence and rebuilds an isomorphic graph from it.
//!
//! ## Architecture
//!
//! ```text
//! Graph ──encode──▶ [Record] ──wire──▶ bytes ──wire──▶ [Record] ──decode──▶ Graph
//! ```
//!
//! Persons live in an identifier-indexed arena ([`Graph`]); relations are
//! [`PersonId`]s, so a cycle never becomes an ownership cycle.
//!
//! - Encoding walks depth-first from the root, emitting each person once.
//!   Record 0 is always the root.
//! - Decoding allocates every person first, then wires relations through a
//!   per-call [`IdentityMap`]. Dangling references are rejected.
//!
//! ## Key Types
//!
//! - [`Person`] - a node with id, name, birth timestamp and relations
//! - [`Graph`] - arena owning persons
//! - [`Record`] / [`Snapshot`] - serialized forms
//! - [`Codec`] - configured facade over encode, decode and JSON transport
//! - [`SymmetryValidator`] - opt-in check of the symmetric-relation invariant

pub mod codec;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod graph;
pub mod identity;
pub mod person;
pub mod record;
pub mod types;
pub mod validation;
pub mod wire;

pub use codec::Codec;
pub use config::CodecConfig;
pub use decode::{decode, decode_snapshot, decode_with, DecodeOptions, Decoded};
pub use encode::{encode, encode_snapshot};
pub use error::{CodecError, GraphError, MalformedInput};
pub use graph::Graph;
pub use identity::IdentityMap;
pub use person::Person;
pub use record::{Record, Snapshot, RECORD_TYPE};
pub use types::{format_timestamp, parse_timestamp, IdPolicy, PersonId, ValidationResult};
pub use validation::SymmetryValidator;
