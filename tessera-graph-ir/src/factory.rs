//! Value factory: mints identifiers and literals
//!
//! Builders never construct IRIs or blank nodes directly; they go through a
//! [`ValueFactory`] so callers can swap in their own identifier scheme.

use crate::datatype::iri as dt;
use crate::error::Result;
use crate::{BlankId, Datatype, Iri, Term};
use std::sync::{Arc, LazyLock};
use uuid::Uuid;

/// Default label prefix for minted blank nodes
pub const DEFAULT_BLANK_PREFIX: &str = "genid";

/// Factory for identifiers and literals
///
/// Contract:
/// - `create_iri` with equal strings yields equal IRIs, and fails with
///   `MalformedIdentifierError` on invalid syntax.
/// - `create_blank` never fails and never returns the same identity twice.
pub trait ValueFactory: std::fmt::Debug + Send + Sync {
    /// Mint a named identifier from its string form
    fn create_iri(&self, iri: &str) -> Result<Iri>;

    /// Mint a fresh anonymous identifier
    fn create_blank(&self) -> BlankId;

    /// Plain string literal (xsd:string)
    fn create_literal(&self, value: &str) -> Term {
        Term::string(value)
    }

    /// Literal with an explicit datatype
    ///
    /// Boolean, integer, long and double lexical forms are stored as native
    /// values so they compare equal to literals built from Rust values. Any
    /// other form (or one that does not parse) is kept verbatim.
    fn create_typed_literal(&self, lexical: &str, datatype: Datatype) -> Term {
        let native = match datatype.as_iri() {
            dt::XSD_STRING => return Term::string(lexical),
            dt::XSD_BOOLEAN => match lexical {
                "true" | "1" => Some(Term::boolean(true)),
                "false" | "0" => Some(Term::boolean(false)),
                _ => None,
            },
            dt::XSD_INTEGER => lexical.parse().ok().map(Term::integer),
            dt::XSD_LONG => lexical.parse().ok().map(Term::long),
            dt::XSD_DOUBLE => lexical.parse().ok().map(Term::double),
            _ => None,
        };
        native.unwrap_or_else(|| Term::typed(lexical, datatype))
    }

    /// Language-tagged literal (rdf:langString)
    fn create_lang_literal(&self, value: &str, lang: &str) -> Term {
        Term::lang_string(value, lang)
    }
}

static SHARED: LazyLock<Arc<SimpleValueFactory>> =
    LazyLock::new(|| Arc::new(SimpleValueFactory::new()));

/// Default factory: validates IRIs syntactically, mints UUID-based blank nodes
///
/// Blank labels look like `genid-1b4e28ba2fa1412d8b3b0d3c2e6a4e8f`.
#[derive(Debug, Clone)]
pub struct SimpleValueFactory {
    blank_prefix: String,
}

impl SimpleValueFactory {
    pub fn new() -> Self {
        Self::with_blank_prefix(DEFAULT_BLANK_PREFIX)
    }

    /// Use `prefix` instead of `genid` for blank node labels
    pub fn with_blank_prefix(prefix: impl Into<String>) -> Self {
        Self {
            blank_prefix: prefix.into(),
        }
    }

    /// The process-wide shared instance
    pub fn shared() -> Arc<SimpleValueFactory> {
        Arc::clone(&*SHARED)
    }

    pub fn blank_prefix(&self) -> &str {
        &self.blank_prefix
    }
}

impl Default for SimpleValueFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueFactory for SimpleValueFactory {
    fn create_iri(&self, iri: &str) -> Result<Iri> {
        Iri::parse(iri)
    }

    fn create_blank(&self) -> BlankId {
        BlankId::new(format!("{}-{}", self.blank_prefix, Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedReason;

    #[test]
    fn test_named_identifiers_are_equal() {
        let vf = SimpleValueFactory::new();
        let a = vf.create_iri("urn:foo").unwrap();
        let b = vf.create_iri("urn:foo").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_malformed_identifier() {
        let vf = SimpleValueFactory::new();
        let err = vf.create_iri("no scheme here").unwrap_err();
        assert_eq!(err.iri, "no scheme here");
        assert_eq!(err.reason, MalformedReason::ForbiddenChar(' '));
    }

    #[test]
    fn test_blank_nodes_are_fresh() {
        let vf = SimpleValueFactory::new();
        let a = vf.create_blank();
        let b = vf.create_blank();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("genid-"));
    }

    #[test]
    fn test_blank_prefix() {
        let vf = SimpleValueFactory::with_blank_prefix("node");
        assert!(vf.create_blank().as_str().starts_with("node-"));
        assert_eq!(vf.blank_prefix(), "node");
    }

    #[test]
    fn test_shared_instance() {
        assert!(Arc::ptr_eq(
            &SimpleValueFactory::shared(),
            &SimpleValueFactory::shared()
        ));
    }

    #[test]
    fn test_literal_minting() {
        let vf = SimpleValueFactory::new();
        assert_eq!(vf.create_literal("x"), Term::string("x"));
        assert_eq!(
            vf.create_typed_literal("x", Datatype::xsd_string()),
            Term::string("x")
        );
        assert_eq!(
            vf.create_typed_literal("2024-01-01", Datatype::xsd_date()),
            Term::typed("2024-01-01", Datatype::xsd_date())
        );
        assert_eq!(
            vf.create_lang_literal("chat", "fr"),
            Term::lang_string("chat", "fr")
        );
    }

    #[test]
    fn test_typed_literal_matches_native_value() {
        let vf = SimpleValueFactory::new();
        assert_eq!(
            vf.create_typed_literal("1", Datatype::xsd_integer()),
            Term::integer(1)
        );
        assert_eq!(
            vf.create_typed_literal("-7", Datatype::xsd_long()),
            Term::long(-7)
        );
        assert_eq!(
            vf.create_typed_literal("2.5", Datatype::xsd_double()),
            Term::double(2.5)
        );
        assert_eq!(
            vf.create_typed_literal("true", Datatype::xsd_boolean()),
            Term::boolean(true)
        );
        assert_eq!(
            vf.create_typed_literal("0", Datatype::xsd_boolean()),
            Term::boolean(false)
        );
    }

    #[test]
    fn test_unparseable_typed_literal_is_kept_verbatim() {
        let vf = SimpleValueFactory::new();
        assert_eq!(
            vf.create_typed_literal("one", Datatype::xsd_integer()),
            Term::typed("one", Datatype::xsd_integer())
        );
        assert_eq!(
            vf.create_typed_literal("yes", Datatype::xsd_boolean()),
            Term::typed("yes", Datatype::xsd_boolean())
        );
    }
}
