//! Engine facade for kodeks
//!
//! This crate owns the corpus and ties the retrieval core together:
//! - `corpus`: the ordered, immutable document store
//! - `engine`: construction (ingest → tokenize → index, eager and atomic)
//!   and the two public operations, `search` and `document`
//! - `highlight`: a pure span-finding helper for the presentation layer,
//!   independent of scoring
//!
//! # Usage
//!
//! ```
//! use kodeks_core::{EngineConfig, RawRecord};
//! use kodeks_engine::Engine;
//!
//! let records = vec![
//!     RawRecord::new("Шлюбом є сімейний союз жінки та чоловіка"),
//!     RawRecord::new("Позовна давність обчислюється за загальними правилами"),
//! ];
//! let engine = Engine::build(records, EngineConfig::default()).unwrap();
//!
//! let hits = engine.search("позовна давність", 5);
//! assert_eq!(hits[0].doc_id.as_usize(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod corpus;
pub mod engine;
pub mod highlight;

pub use corpus::Corpus;
pub use engine::Engine;
pub use highlight::{highlight, Span};
