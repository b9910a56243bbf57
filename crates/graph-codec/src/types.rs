use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a person, unique within one graph and one record sequence.
///
/// Freshly created persons get a UUID v4 string; decoded persons keep whatever
/// string the record carried.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Generate a new random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PersonId({})", self.0)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Textual timestamp layout used on the wire.
///
/// `%.f` prints the fraction only when it is non-zero, using as many digits
/// as needed to stay exact.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Render a timestamp in the reversible wire format.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a wire timestamp. A bare `YYYY-MM-DD` date is read as midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// How the decoder assigns identifiers to the persons it allocates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Carry record ids through verbatim.
    #[default]
    Preserve,
    /// Give every decoded person a fresh id, remapping relations to match.
    Regenerate,
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::Regenerate => write!(f, "regenerate"),
        }
    }
}

/// Result of validating a graph.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub checks_performed: usize,
    pub checks_passed: usize,
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn ok(checks: usize) -> Self {
        Self {
            valid: true,
            checks_performed: checks,
            checks_passed: checks,
            errors: Vec::new(),
        }
    }

    pub fn failed(checks_performed: usize, checks_passed: usize, errors: Vec<String>) -> Self {
        Self {
            valid: false,
            checks_performed,
            checks_passed,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(PersonId::generate(), PersonId::generate());
    }

    #[test]
    fn person_id_serializes_as_plain_string() {
        let id = PersonId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: PersonId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn timestamp_whole_seconds_has_no_fraction() {
        let ts = NaiveDate::from_ymd_opt(2020, 4, 12)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2020-04-12T00:00:00");
    }

    #[test]
    fn timestamp_fraction_roundtrips_exactly() {
        let ts = NaiveDate::from_ymd_opt(2019, 3, 15)
            .unwrap()
            .and_hms_nano_opt(13, 45, 2, 123_456_789)
            .unwrap();
        let text = format_timestamp(&ts);
        assert_eq!(parse_timestamp(&text), Some(ts));
    }

    #[test]
    fn bare_date_parses_as_midnight() {
        let ts = parse_timestamp("2021-09-27").unwrap();
        assert_eq!(format_timestamp(&ts), "2021-09-27T00:00:00");
    }

    #[test]
    fn garbage_timestamp_rejected() {
        assert!(parse_timestamp("yesterday").is_none());
        assert!(parse_timestamp("2021-13-01T00:00:00").is_none());
    }

    #[test]
    fn id_policy_default_is_preserve() {
        assert_eq!(IdPolicy::default(), IdPolicy::Preserve);
        assert_eq!(format!("{}", IdPolicy::Regenerate), "regenerate");
    }

    #[test]
    fn validation_result_failed() {
        let r = ValidationResult::failed(3, 2, vec!["asymmetric".into()]);
        assert!(!r.valid);
        assert_eq!(r.checks_passed, 2);
        assert_eq!(r.errors.len(), 1);
    }
}
