//! External reference sub-objects
//!
//! Citations pointing at an external source. Only references carrying both a
//! source name and a url become graph elements; anything else is dropped
//! from node and relation emission alike.

use serde::{Deserialize, Serialize};
use stixgraph_core::{Element, StixId};
use xxhash_rust::xxh3::xxh3_64;

/// A citation sub-object on a domain object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    /// Name of the source being referenced
    #[serde(default)]
    pub source_name: Option<String>,

    /// Location of the referenced material
    #[serde(default)]
    pub url: Option<String>,

    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,

    /// Identifier within the source's own numbering scheme
    #[serde(default)]
    pub external_id: Option<String>,
}

impl ExternalReference {
    /// Create a reference with a source name and url
    pub fn new<S: Into<String>, U: Into<String>>(source_name: S, url: U) -> Self {
        Self {
            source_name: Some(source_name.into()),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Whether this reference is eligible to become a graph element
    ///
    /// Both `source_name` and `url` must be present and non-empty.
    pub fn is_eligible(&self) -> bool {
        matches!(
            (&self.source_name, &self.url),
            (Some(source), Some(url)) if !source.is_empty() && !url.is_empty()
        )
    }
}

impl Element for ExternalReference {
    /// Deterministic identifier derived from source name and url
    ///
    /// References have no wire identifier of their own; hashing the pair
    /// keeps the id stable across re-ingestions of the same object.
    fn id(&self) -> StixId {
        let source = self.source_name.as_deref().unwrap_or_default();
        let url = self.url.as_deref().unwrap_or_default();
        let hash = xxh3_64(format!("{source}|{url}").as_bytes());
        StixId::new(format!("external-reference--{hash:016x}"))
    }

    fn entity(&self) -> &'static str {
        "external-reference"
    }
}
