//! Error types for stixgraph
//!
//! Every failure aborts processing of the single object under conversion and
//! is reported upward with enough context (identifier, attribute) for
//! operator diagnosis or deferred-retry logic in the orchestrator.

use crate::id::StixId;
use crate::relation::SourceAttribute;
use thiserror::Error;

/// The main error type for stixgraph operations
#[derive(Error, Debug)]
pub enum Error {
    /// A `created`/`modified` value is not a valid zoned timestamp
    #[error("invalid timestamp {value:?}: {source}")]
    TimestampParse {
        value: String,
        source: chrono::ParseError,
    },

    /// A cross-reference could not be found in the reference index
    #[error("unresolved reference {id} ({attribute})")]
    UnresolvedReference {
        id: StixId,
        attribute: SourceAttribute,
    },

    /// An identifier does not have the `<object-type>--<uuid>` shape
    #[error("malformed STIX identifier: {0:?}")]
    MalformedId(String),
}

/// Result type alias for stixgraph operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns true if this error is an unresolved cross-reference
    ///
    /// Orchestrators may defer the object and retry once more of the batch
    /// has been indexed.
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Error::UnresolvedReference { .. })
    }

    /// Returns true if this error makes the whole object unprocessable
    pub fn is_unprocessable(&self) -> bool {
        matches!(self, Error::TimestampParse { .. } | Error::MalformedId(_))
    }
}
