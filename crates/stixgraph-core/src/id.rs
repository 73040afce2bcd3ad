//! STIX identifier handling
//!
//! STIX entities are keyed by `<object-type>--<uuid>` strings. The wire
//! format is loosely typed, so identifiers arrive as free text and are only
//! validated on demand.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A stable textual identifier for a graph element
///
/// Cross-references between objects (`created_by_ref`,
/// `object_marking_refs`) are plain strings of this shape; the reference
/// index is keyed by them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StixId(String);

impl StixId {
    /// Create an identifier without validating its shape
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    /// Parse and validate an identifier of the form `<object-type>--<uuid>`
    pub fn parse(value: &str) -> Result<Self> {
        let Some((object_type, tail)) = value.split_once("--") else {
            return Err(Error::MalformedId(value.to_string()));
        };

        let well_formed = !object_type.is_empty()
            && object_type
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !well_formed || Uuid::parse_str(tail).is_err() {
            return Err(Error::MalformedId(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// Get the identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the object-type prefix, if the identifier has one
    pub fn object_type(&self) -> Option<&str> {
        self.0.split_once("--").map(|(object_type, _)| object_type)
    }

    /// Convert to owned string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for StixId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StixId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for StixId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
