//! kodeks - BM25 full-text retrieval for legal-code articles
//!
//! kodeks ingests a corpus of parsed legal-code articles and answers
//! free-text queries with a ranked list of the most relevant ones. The
//! engine is built once, eagerly, and is immutable and lock-free to search
//! afterwards; reflecting corpus changes means building a fresh engine.
//!
//! # Quick Start
//!
//! ```
//! use kodeks::{Engine, EngineConfig, RawRecord};
//!
//! let records = vec![
//!     RawRecord::new("Шлюбом є сімейний союз жінки та чоловіка"),
//!     RawRecord::new("Загальна позовна давність встановлюється у три роки"),
//! ];
//! let engine = Engine::build(records, EngineConfig::default())?;
//!
//! for hit in engine.search("позовна давність", 5) {
//!     let article = engine.document(hit.doc_id).unwrap();
//!     println!("{:.2}  {}", hit.score, article.text);
//! }
//! # Ok::<(), kodeks::Error>(())
//! ```
//!
//! # Architecture
//!
//! The retrieval algorithms (tokenizer, statistics index, BM25 scorer,
//! ranker) live in `kodeks-search`; the corpus store and the [`Engine`]
//! facade live in `kodeks-engine`; shared types and configuration live in
//! `kodeks-core`. This crate re-exports the public surface.

pub use kodeks_core::{
    Bm25Params, DocId, Document, EngineConfig, Error, RawRecord, Result, ScoredResult,
    TokenizeMode, TokenizerConfig,
};
pub use kodeks_engine::{highlight, Engine, Span};
pub use kodeks_search::{rank, tokenize, tokenize_unique, Bm25Scorer, Index};
