use crate::error::CodecError;
use crate::graph::Graph;
use crate::types::ValidationResult;
use tracing::warn;

/// Checks the acquaintance invariant: every edge `a -> b` has a reverse edge
/// `b -> a`.
///
/// The decoder never enforces symmetry on its own; this validator is opt-in
/// through [`crate::DecodeOptions::verify_symmetry`] or callable directly.
pub struct SymmetryValidator;

impl SymmetryValidator {
    /// Check every edge and report all violations.
    pub fn validate(graph: &Graph) -> ValidationResult {
        let mut checks = 0;
        let mut passed = 0;
        let mut errors = Vec::new();

        for person in graph.iter() {
            for other in person.relations() {
                checks += 1;
                let symmetric = graph
                    .get(other)
                    .map(|target| target.knows(person.id()))
                    .unwrap_or(false);
                if symmetric {
                    passed += 1;
                } else {
                    errors.push(format!(
                        "asymmetric relation: {} -> {} has no reverse edge",
                        person.id(),
                        other
                    ));
                }
            }
        }

        if errors.is_empty() {
            ValidationResult::ok(checks)
        } else {
            warn!(violations = errors.len(), "Relation symmetry check failed");
            ValidationResult::failed(checks, passed, errors)
        }
    }

    /// Fail on the first edge without a reverse edge.
    pub fn ensure(graph: &Graph) -> Result<(), CodecError> {
        for person in graph.iter() {
            for other in person.relations() {
                let symmetric = graph
                    .get(other)
                    .map(|target| target.knows(person.id()))
                    .unwrap_or(false);
                if !symmetric {
                    warn!(from = %person.id(), to = %other, "Asymmetric relation");
                    return Err(CodecError::InvariantViolation {
                        from: person.id().clone(),
                        to: other.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn symmetric_graph_is_valid() {
        let mut g = Graph::new();
        let a = g.add("a", date());
        let b = g.add("b", date());
        let c = g.add("c", date());
        g.relate(&a, &b).unwrap();
        g.relate(&b, &c).unwrap();
        g.relate(&c, &c).unwrap();

        let result = SymmetryValidator::validate(&g);
        assert!(result.valid);
        assert_eq!(result.checks_performed, 5);
        assert!(SymmetryValidator::ensure(&g).is_ok());
    }

    #[test]
    fn empty_graph_is_valid() {
        let result = SymmetryValidator::validate(&Graph::new());
        assert!(result.valid);
        assert_eq!(result.checks_performed, 0);
    }

    #[test]
    fn one_way_link_is_reported() {
        let mut g = Graph::new();
        let a = g.add("a", date());
        let b = g.add("b", date());
        g.link(&a, &b).unwrap();

        let result = SymmetryValidator::validate(&g);
        assert!(!result.valid);
        assert_eq!(result.checks_passed, 0);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("asymmetric"));

        match SymmetryValidator::ensure(&g) {
            Err(CodecError::InvariantViolation { from, to }) => {
                assert_eq!(from, a);
                assert_eq!(to, b);
            }
            other => panic!("expected invariant violation, got {:?}", other),
        }
    }
}
