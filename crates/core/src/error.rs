//! Error types for the kodeks engine
//!
//! This module defines all error types used by the engine crates.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Query-time operations are total over their domain and have no error
//! variants at all: an unknown term, a punctuation-only query, or a query
//! matching nothing all resolve to an empty result, never an `Err`.

use thiserror::Error;

/// Result type alias for kodeks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for engine construction
#[derive(Debug, Error)]
pub enum Error {
    /// A raw record is missing the required `text` field.
    ///
    /// Fatal to the construction call that ingested the record; no partial
    /// corpus or index is published.
    #[error("record {index} is missing required field `text`")]
    MissingText {
        /// 0-based position of the offending record in the input sequence
        index: usize,
    },
}
