//! stixgraph Core Library
//!
//! This crate provides the fundamental types and error handling for
//! converting STIX domain objects into graph elements and typed relations.
//!
//! # Overview
//!
//! stixgraph turns parsed threat-intelligence records into node-shaped graph
//! elements and directed, typed edges, ready to be handed to a graph store's
//! own loading primitives.
//!
//! # Modules
//!
//! - `id` - STIX identifier parsing and validation
//! - `element` - Node-shaped graph entities and lightweight handles
//! - `relation` - Directed, typed edges between elements
//! - `temporal` - Timestamp normalization to canonical local form
//! - `error` - Error types and result aliases

pub mod element;
pub mod error;
pub mod id;
pub mod relation;
pub mod temporal;

pub use element::{Element, NodeRef};
pub use error::{Error, Result};
pub use id::StixId;
pub use relation::{Relation, RelationCategory, RelationKind, SourceAttribute};
pub use temporal::{normalize, Timestamp};
