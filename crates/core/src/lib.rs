//! Core types for the kodeks retrieval engine
//!
//! This crate defines the foundational types shared by every other crate:
//! - Document, DocId, RawRecord: the corpus data model
//! - ScoredResult: per-search output
//! - Error: the error taxonomy (thiserror)
//! - EngineConfig, Bm25Params, TokenizerConfig: engine configuration
//!
//! No algorithm lives here; see `kodeks-search` for the retrieval core and
//! `kodeks-engine` for the engine facade.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{Bm25Params, EngineConfig, TokenizeMode, TokenizerConfig};
pub use error::{Error, Result};
pub use types::{DocId, Document, RawRecord, ScoredResult};
