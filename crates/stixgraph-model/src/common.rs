//! Provenance fields shared by every domain object kind
//!
//! Rather than an inheritance hierarchy, each concrete object embeds
//! [`CommonProperties`] and exposes it through the [`HasProvenance`]
//! capability trait.

use crate::external_reference::ExternalReference;
use serde::{Deserialize, Serialize};
use stixgraph_core::{Result, StixId, Timestamp};

/// Temporal and provenance attributes common to all domain objects
///
/// `labels`, `object_marking_refs` and `external_references` keep their wire
/// order; relation extraction and the label chain depend on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommonProperties {
    /// Creation timestamp, raw as received
    pub created: Timestamp,

    /// Last-modification timestamp, raw as received
    pub modified: Timestamp,

    /// Whether the object has been revoked by its creator
    #[serde(default)]
    pub revoked: bool,

    /// Identity that authored this object
    #[serde(default)]
    pub created_by_ref: Option<StixId>,

    /// Free-text classification labels, order is display-relevant
    #[serde(default)]
    pub labels: Vec<String>,

    /// Marking definitions applied to this object
    #[serde(default)]
    pub object_marking_refs: Vec<StixId>,

    /// Citation sub-objects
    #[serde(default)]
    pub external_references: Vec<ExternalReference>,
}

/// Capability trait giving access to the shared provenance fields
pub trait HasProvenance {
    /// The embedded common properties
    fn common(&self) -> &CommonProperties;

    /// Creation timestamp in canonical local form
    fn created(&self) -> Result<String> {
        self.common().created.normalize()
    }

    /// Modification timestamp in canonical local form
    fn modified(&self) -> Result<String> {
        self.common().modified.normalize()
    }

    /// Whether the object has been revoked
    fn revoked(&self) -> bool {
        self.common().revoked
    }

    /// Query-fragment-shaped description of the object's labels
    ///
    /// `None` when there are no labels, so callers can distinguish "no label
    /// clause" from an empty one. Otherwise one `has stix_label <value>`
    /// fragment per label in order, space-joined, with a leading space. The
    /// escaping of each label is supplied by the caller.
    fn label_chain<F>(&self, prepare: F) -> Option<String>
    where
        F: Fn(&str) -> String,
        Self: Sized,
    {
        let labels = &self.common().labels;
        if labels.is_empty() {
            return None;
        }

        let chain = labels
            .iter()
            .map(|label| format!("has stix_label {}", prepare(label)))
            .collect::<Vec<_>>()
            .join(" ");
        Some(format!(" {chain}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare(CommonProperties);

    impl HasProvenance for Bare {
        fn common(&self) -> &CommonProperties {
            &self.0
        }
    }

    fn with_labels(labels: &[&str]) -> Bare {
        Bare(CommonProperties {
            labels: labels.iter().map(|l| l.to_string()).collect(),
            ..Default::default()
        })
    }

    #[test]
    fn test_created_and_modified_normalize_identically() {
        let object = Bare(CommonProperties {
            created: "2017-01-01T00:00:00.000Z".into(),
            modified: "2017-01-01T00:00:00.000Z".into(),
            ..Default::default()
        });
        assert_eq!(object.created().unwrap(), object.modified().unwrap());
        assert_eq!(object.created().unwrap(), "2017-01-01T00:00:00");
    }

    #[test]
    fn test_bad_timestamp_surfaces() {
        let object = Bare(CommonProperties {
            created: "yesterday".into(),
            ..Default::default()
        });
        assert!(object.created().is_err());
    }

    #[test]
    fn test_revoked_defaults_false() {
        let object: CommonProperties = serde_json::from_str(
            r#"{"created": "2017-01-01T00:00:00Z", "modified": "2017-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert!(!object.revoked);
        assert!(object.labels.is_empty());
    }

    #[test]
    fn test_label_chain_empty_is_none() {
        assert_eq!(with_labels(&[]).label_chain(|l| l.to_string()), None);
    }

    #[test]
    fn test_label_chain_single_label() {
        let chain = with_labels(&["TLP:RED"])
            .label_chain(|label| format!("\"{label}\""))
            .unwrap();
        assert_eq!(chain, " has stix_label \"TLP:RED\"");
    }

    #[test]
    fn test_label_chain_preserves_order() {
        let chain = with_labels(&["malicious-activity", "apt"])
            .label_chain(|label| label.to_string())
            .unwrap();
        assert_eq!(
            chain,
            " has stix_label malicious-activity has stix_label apt"
        );
    }
}
