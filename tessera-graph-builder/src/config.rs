//! Builder configuration
//!
//! Controls how raw identifier strings are resolved before they reach the
//! value factory, and how snapshots are shaped.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;
use tessera_graph_ir::iri::is_absolute;

/// Configuration for a [`GraphBuilder`](crate::GraphBuilder)
///
/// Deserializable so it can live in a host application's config file:
///
/// ```
/// use tessera_graph_builder::BuilderConfig;
///
/// let config: BuilderConfig = serde_json::from_str(r#"{
///     "base": "http://example.org/",
///     "prefixes": { "foaf": "http://xmlns.com/foaf/0.1/" }
/// }"#).unwrap();
///
/// assert_eq!(config.resolve("foaf:name"), "http://xmlns.com/foaf/0.1/name");
/// assert_eq!(config.resolve("alice"), "http://example.org/alice");
/// assert!(!config.canonicalize_snapshots);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuilderConfig {
    /// Base IRI relative identifier strings are joined to
    pub base: Option<String>,

    /// Prefix bindings used to expand compact IRIs (`prefix:local`)
    pub prefixes: BTreeMap<String, String>,

    /// Sort and dedupe snapshot copies (the accumulator itself is untouched)
    pub canonicalize_snapshots: bool,
}

impl BuilderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }

    /// Add the rdf, rdfs, xsd and owl bindings
    pub fn with_standard_prefixes(mut self) -> Self {
        for (prefix, namespace) in tessera_vocab::prefixes::STANDARD {
            self.prefixes
                .entry((*prefix).to_string())
                .or_insert_with(|| (*namespace).to_string());
        }
        self
    }

    pub fn with_canonical_snapshots(mut self, canonicalize: bool) -> Self {
        self.canonicalize_snapshots = canonicalize;
        self
    }

    /// Expand a raw identifier string.
    ///
    /// Registered compact IRIs are expanded first; other absolute IRIs pass
    /// through; relative strings are joined to `base` when one is set. The
    /// result is not validated here, that is the value factory's job.
    pub fn resolve<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        if let Some((prefix, local)) = split_compact(raw) {
            if let Some(namespace) = self.prefixes.get(prefix) {
                return Cow::Owned(format!("{}{}", namespace, local));
            }
        }

        if is_absolute(raw) {
            return Cow::Borrowed(raw);
        }

        match &self.base {
            Some(base) => Cow::Owned(join(base, raw)),
            None => Cow::Borrowed(raw),
        }
    }
}

/// Split `prefix:local`; `None` for strings that look like `scheme://...`
fn split_compact(s: &str) -> Option<(&str, &str)> {
    let (prefix, local) = s.split_once(':')?;
    if prefix.is_empty() || prefix.contains('/') || local.starts_with("//") {
        return None;
    }
    Some((prefix, local))
}

/// Join base IRI with a relative reference
///
/// A fragment reference keeps the whole base and replaces only its fragment.
fn join(base: &str, relative: &str) -> String {
    if relative.starts_with('#') {
        let stem = base.split_once('#').map_or(base, |(stem, _)| stem);
        format!("{}{}", stem, relative)
    } else if base.ends_with('/') || base.ends_with('#') {
        format!("{}{}", base, relative)
    } else {
        format!("{}/{}", base, relative)
    }
}
