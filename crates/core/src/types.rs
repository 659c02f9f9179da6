//! Corpus data model
//!
//! This module defines the document types flowing through the engine:
//! - RawRecord: the record shape the ingestion collaborator hands over
//! - Document: an ingested article with its stable identity
//! - DocId: 0-based document identity, assigned at ingestion
//! - ScoredResult: one ranked search hit

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DocId
// ============================================================================

/// Stable document identity: the 0-based position of the document in the
/// ingestion sequence.
///
/// `DocId` is the sole cross-component identity. It is valid for the
/// lifetime of the engine instance that assigned it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocId(pub usize);

impl DocId {
    /// The id as a plain index into corpus-ordered storage.
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// RawRecord
// ============================================================================

/// A parsed-article record as produced by the ingestion collaborator.
///
/// Only `text` is required; every other field defaults to the empty string
/// when absent. `text` is an `Option` so that absence is detected at
/// ingestion (and reported with the record index) rather than at parse time.
///
/// The serde aliases accept the field names the upstream article parsers
/// emit (`article`, `url`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRecord {
    /// Article body; the only field the scoring core ever reads.
    pub text: Option<String>,

    /// Article title, for display.
    #[serde(default)]
    pub title: String,

    /// Article number/label (e.g. "625"), for display.
    #[serde(default, alias = "article")]
    pub article_label: String,

    /// Link back to the authoritative source, for display.
    #[serde(default, alias = "url")]
    pub source_url: String,

    /// Display tag naming the source code/statute this article belongs to.
    #[serde(default)]
    pub source_tag: String,
}

impl RawRecord {
    /// Create a record with body text only; display fields stay empty.
    pub fn new(text: impl Into<String>) -> Self {
        RawRecord {
            text: Some(text.into()),
            ..RawRecord::default()
        }
    }
}

// ============================================================================
// Document
// ============================================================================

/// An ingested article.
///
/// Immutable once the corpus is built. All fields other than `text` are
/// opaque metadata carried through for display; the scoring core never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identity, assigned in ingestion order.
    pub id: DocId,

    /// Article body.
    pub text: String,

    /// Article title.
    pub title: String,

    /// Article number/label.
    pub article_label: String,

    /// Link back to the authoritative source.
    pub source_url: String,

    /// Display tag naming the source code/statute.
    pub source_tag: String,
}

// ============================================================================
// ScoredResult
// ============================================================================

/// A single search hit: a document id and its BM25 score.
///
/// Produced per search call, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredResult {
    /// Id of the matched document.
    pub doc_id: DocId,

    /// BM25 relevance score (higher = more relevant).
    pub score: f64,
}

// ============================================================================
// Tests
// ============================================================================
