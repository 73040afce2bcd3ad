//! Directed, typed edges between graph elements
//!
//! Relations are derived data: they are rebuilt on every ingestion of their
//! source object and never persisted independently of their endpoints.

use crate::element::NodeRef;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tag for the relations a domain object contributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationCategory {
    /// A "stix object" edge
    So,
}

impl RelationCategory {
    /// Get the wire name of the category
    pub fn as_str(self) -> &'static str {
        match self {
            RelationCategory::So => "so",
        }
    }
}

impl fmt::Display for RelationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of outbound relation a domain object produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    /// Object to one of its own citation sub-elements
    ExternalReference,
    /// Object to the identity that authored it
    Creator,
    /// Object to a data-handling marking definition
    Marking,
}

impl RelationKind {
    /// Get the wire name of the kind
    pub fn as_str(self) -> &'static str {
        match self {
            RelationKind::ExternalReference => "external_reference",
            RelationKind::Creator => "creator",
            RelationKind::Marking => "marking",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The source attribute a relation was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceAttribute {
    /// `created_by_ref`
    CreatedByRef,
    /// `object_marking_refs`
    ObjectMarkingRefs,
    /// `external_references`
    ExternalReferences,
}

impl SourceAttribute {
    /// Get the wire name of the attribute
    pub fn as_str(self) -> &'static str {
        match self {
            SourceAttribute::CreatedByRef => "created_by_ref",
            SourceAttribute::ObjectMarkingRefs => "object_marking_refs",
            SourceAttribute::ExternalReferences => "external_references",
        }
    }
}

impl fmt::Display for SourceAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A directed, typed edge between two graph elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relation {
    /// Source element handle
    pub source: NodeRef,

    /// Target element handle
    pub target: NodeRef,

    /// Category tag
    pub category: RelationCategory,

    /// Relation kind
    pub kind: RelationKind,

    /// Source attribute the relation was derived from
    pub attribute: SourceAttribute,
}

impl Relation {
    /// Create a new relation in the "stix object" category
    pub fn new(
        source: NodeRef,
        target: NodeRef,
        kind: RelationKind,
        attribute: SourceAttribute,
    ) -> Self {
        Self {
            source,
            target,
            category: RelationCategory::So,
            kind,
            attribute,
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -[{}:{}]-> {}",
            self.source.id, self.category, self.kind, self.target.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::StixId;

    fn handle(id: &str, entity: &str) -> NodeRef {
        NodeRef::new(StixId::new(id), entity)
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(RelationCategory::So.as_str(), "so");
        assert_eq!(RelationKind::ExternalReference.as_str(), "external_reference");
        assert_eq!(RelationKind::Creator.as_str(), "creator");
        assert_eq!(RelationKind::Marking.as_str(), "marking");
        assert_eq!(SourceAttribute::CreatedByRef.as_str(), "created_by_ref");
        assert_eq!(
            SourceAttribute::ObjectMarkingRefs.as_str(),
            "object_marking_refs"
        );
    }

    #[test]
    fn test_relation_category_fixed() {
        let relation = Relation::new(
            handle("indicator--1", "indicator"),
            handle("identity--1", "identity"),
            RelationKind::Creator,
            SourceAttribute::CreatedByRef,
        );
        assert_eq!(relation.category, RelationCategory::So);
    }

    #[test]
    fn test_relation_display() {
        let relation = Relation::new(
            handle("indicator--1", "indicator"),
            handle("marking--1", "marking-definition"),
            RelationKind::Marking,
            SourceAttribute::ObjectMarkingRefs,
        );
        assert_eq!(
            relation.to_string(),
            "indicator--1 -[so:marking]-> marking--1"
        );
    }
}
