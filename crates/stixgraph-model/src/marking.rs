//! Marking definitions
//!
//! Elements representing data-handling markings (e.g. TLP). Markings are not
//! domain objects; they only exist as relation targets resolved through the
//! reference index.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stixgraph_core::{Element, StixId, Timestamp};

/// A data-handling / classification marking element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkingDefinition {
    /// Stable textual identifier
    pub id: StixId,

    /// Creation timestamp, raw as received
    #[serde(default)]
    pub created: Option<Timestamp>,

    /// Kind of marking (e.g. `tlp`, `statement`)
    #[serde(default)]
    pub definition_type: Option<String>,

    /// Marking payload keyed by definition type
    #[serde(default)]
    pub definition: HashMap<String, String>,
}

impl MarkingDefinition {
    /// Create a marking with just an identifier
    pub fn new<I: Into<StixId>>(id: I) -> Self {
        Self {
            id: id.into(),
            created: None,
            definition_type: None,
            definition: HashMap::new(),
        }
    }

    /// The marking value for its own definition type, if present
    pub fn value(&self) -> Option<&str> {
        let key = self.definition_type.as_deref()?;
        self.definition.get(key).map(String::as_str)
    }
}

impl Element for MarkingDefinition {
    fn id(&self) -> StixId {
        self.id.clone()
    }

    fn entity(&self) -> &'static str {
        "marking-definition"
    }
}
