//! stixgraph Domain Model
//!
//! The in-memory representation of STIX domain objects and the relation
//! extraction that turns each object into graph contributions.
//!
//! # Overview
//!
//! A batch is processed in two phases with a hard barrier between them:
//! first every element intended to be referenced is registered in a
//! [`ReferenceIndex`], then each object is asked for its contributed
//! elements and its outbound relations. Extraction only reads the index, so
//! independent objects may be processed in parallel once the index is
//! frozen.
//!
//! # Modules
//!
//! - `common` - Provenance fields shared by every domain object kind
//! - `external_reference` - Citation sub-objects
//! - `marking` - Data-handling marking definitions
//! - `sdo` - Concrete domain object variants
//! - `index` - Batch-scoped identifier-to-element lookup
//! - `extract` - Contributed elements and outbound relations

pub mod common;
pub mod external_reference;
pub mod extract;
pub mod index;
pub mod marking;
pub mod sdo;

pub use common::{CommonProperties, HasProvenance};
pub use external_reference::ExternalReference;
pub use extract::DomainObject;
pub use index::ReferenceIndex;
pub use marking::MarkingDefinition;
pub use sdo::{AttackPattern, Identity, Indicator, IntrusionSet, Malware, Report, Sdo};
