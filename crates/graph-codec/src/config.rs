use crate::decode::DecodeOptions;
use crate::error::CodecError;
use crate::types::IdPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a [`crate::Codec`].
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// pretty = false
/// id_policy = "regenerate"
/// verify_symmetry = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodecConfig {
    /// Indent JSON output.
    pub pretty: bool,
    /// Identifier handling on decode.
    pub id_policy: IdPolicy,
    /// Reject asymmetric relations on decode.
    pub verify_symmetry: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            id_policy: IdPolicy::Preserve,
            verify_symmetry: false,
        }
    }
}

impl CodecConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, CodecError> {
        toml::from_str(text).map_err(|e| CodecError::Config(e.to_string()))
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CodecError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            id_policy: self.id_policy,
            verify_symmetry: self.verify_symmetry,
        }
    }
}
