//! Node-shaped graph entities
//!
//! Everything that becomes a node in the target graph store (domain objects,
//! marking definitions, external references) exposes its identity through
//! the [`Element`] trait. Relations and the reference index work with
//! lightweight [`NodeRef`] handles rather than whole elements.

use crate::id::StixId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node-shaped graph entity
///
/// Identifiers are returned by value because some elements (external
/// references) derive theirs rather than storing them.
pub trait Element {
    /// Stable textual identifier of the entity
    fn id(&self) -> StixId;

    /// Graph entity type tag (e.g. `indicator`, `external-reference`)
    fn entity(&self) -> &'static str;

    /// Lightweight handle used by relations and the reference index
    fn node_ref(&self) -> NodeRef {
        NodeRef::new(self.id(), self.entity())
    }
}

/// A resolved handle to a graph element: identifier plus entity type
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeRef {
    /// Stable textual identifier
    pub id: StixId,

    /// Graph entity type tag
    pub entity: String,
}

impl NodeRef {
    /// Create a new handle
    pub fn new<E: Into<String>>(id: StixId, entity: E) -> Self {
        Self {
            id,
            entity: entity.into(),
        }
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.entity)
    }
}
