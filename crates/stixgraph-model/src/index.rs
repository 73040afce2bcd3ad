//! Batch-scoped reference index
//!
//! Maps stable identifiers to resolved element handles. The orchestrator
//! populates it once per ingestion batch, before any relation extraction
//! runs; extraction then only reads it through a shared borrow.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stixgraph_core::{Element, NodeRef, StixId};
use tracing::debug;

/// Identifier-to-element lookup table for one ingestion batch
///
/// Ingestion order matters: an element must be registered before extraction
/// runs against objects that reference it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceIndex {
    entries: HashMap<StixId, NodeRef>,
}

impl ReferenceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register an element under its own identifier
    ///
    /// Re-registering an identifier replaces the previous handle.
    pub fn register(&mut self, element: &dyn Element) {
        self.insert(element.node_ref());
    }

    /// Insert a resolved handle
    pub fn insert(&mut self, node: NodeRef) -> Option<NodeRef> {
        debug!("Indexed {} as {}", node.id, node.entity);
        self.entries.insert(node.id.clone(), node)
    }

    /// Look up a handle by identifier
    pub fn lookup(&self, id: &StixId) -> Option<&NodeRef> {
        self.entries.get(id)
    }

    /// Check whether an identifier has been registered
    pub fn contains(&self, id: &StixId) -> bool {
        self.entries.contains_key(id)
    }

    /// Number of registered elements
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<NodeRef> for ReferenceIndex {
    fn extend<I: IntoIterator<Item = NodeRef>>(&mut self, nodes: I) {
        for node in nodes {
            self.insert(node);
        }
    }
}

impl FromIterator<NodeRef> for ReferenceIndex {
    fn from_iter<I: IntoIterator<Item = NodeRef>>(nodes: I) -> Self {
        let mut index = Self::new();
        index.extend(nodes);
        index
    }
}
