//! Result ranking
//!
//! Fixed order of operations: stable sort by score descending → truncate to
//! the requested window → drop non-positive scores from that window.
//!
//! The window is cut before the positivity filter on purpose: a document
//! with a positive score just outside the top-`limit` window is never
//! surfaced, even when non-positive entries inside the window are dropped.
//! Changing this to filter-then-truncate changes observable result counts
//! for borderline corpora and is not allowed.

use kodeks_core::DocId;
use std::cmp::Ordering;

/// Rank documents by score.
///
/// `scores` is indexed by document id (one entry per document). Ties keep
/// ascending id order (stable sort), so equal-scoring documents always come
/// back in corpus order. Returns at most `limit` ids; `limit = 0` and
/// all-zero scores both yield an empty vec, never an error.
pub fn rank(scores: &[f64], limit: usize) -> Vec<DocId> {
    let mut ids: Vec<usize> = (0..scores.len()).collect();
    ids.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));
    ids.truncate(limit);
    ids.retain(|&id| scores[id] > 0.0);
    ids.into_iter().map(DocId).collect()
}
