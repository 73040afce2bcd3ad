//! stixgraph - STIX threat intelligence to graph conversion
//!
//! This is the main library crate that re-exports all stixgraph components.

pub use stixgraph_core as core;
pub use stixgraph_model as model;
pub use stixgraph_query as query;

// Re-export commonly used types
pub use stixgraph_core::{
    Element, Error, NodeRef, Relation, RelationCategory, RelationKind, Result, SourceAttribute,
    StixId, Timestamp,
};

pub use stixgraph_model::{
    CommonProperties, DomainObject, ExternalReference, HasProvenance, MarkingDefinition,
    ReferenceIndex, Sdo,
};

pub use stixgraph_query::prepare;
