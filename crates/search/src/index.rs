//! Corpus statistics index for BM25
//!
//! Built once, eagerly, from the full corpus; read-only afterwards. The
//! index is a pure function of the corpus texts and the tokenizer
//! configuration: identical inputs always yield an identical index.
//!
//! Stored statistics per the BM25 formula's needs:
//! - postings: term → (doc id, term frequency), ascending doc id
//! - per-document token counts and the corpus-average token count
//! - document frequency per term (each document counts at most once)

use kodeks_core::{TokenizeMode, TokenizerConfig};
use rayon::prelude::*;
use std::collections::HashMap;

use crate::tokenizer::tokenize;

// ============================================================================
// Posting
// ============================================================================

/// A single entry in a term's postings list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Document containing the term.
    pub doc_id: usize,
    /// Number of occurrences of the term in that document.
    pub tf: u32,
}

// ============================================================================
// Index
// ============================================================================

/// Read-only inverted statistics index.
///
/// # Thread Safety
///
/// Nothing mutates after [`Index::build`] returns, so any number of
/// concurrent readers may share the index by reference without locking.
#[derive(Debug, Clone)]
pub struct Index {
    /// term → postings, ascending `doc_id` within each list
    postings: HashMap<String, Vec<Posting>>,

    /// doc id → token count
    doc_lengths: Vec<u32>,

    /// Sum of all document lengths (for the average)
    total_len: u64,
}

impl Index {
    /// Build the index from corpus texts, in corpus order.
    ///
    /// Runs once at engine construction; O(total tokens). Tokenization is
    /// parallelized per document, but the per-document statistics are merged
    /// in ascending document id so the result is identical to a sequential
    /// build.
    pub fn build<S>(texts: &[S], mode: TokenizeMode, config: &TokenizerConfig) -> Index
    where
        S: AsRef<str> + Sync,
    {
        // Map phase: tokenize and count terms per document.
        let per_doc: Vec<(u32, HashMap<String, u32>)> = texts
            .par_iter()
            .map(|text| {
                let tokens = tokenize(text.as_ref(), mode, config);
                let len = tokens.len() as u32;
                let mut tf: HashMap<String, u32> = HashMap::new();
                for token in tokens {
                    *tf.entry(token).or_insert(0) += 1;
                }
                (len, tf)
            })
            .collect();

        // Reduce phase: fold in ascending doc id.
        let mut postings: HashMap<String, Vec<Posting>> = HashMap::new();
        let mut doc_lengths = Vec::with_capacity(per_doc.len());
        let mut total_len = 0u64;

        for (doc_id, (len, tf_map)) in per_doc.into_iter().enumerate() {
            doc_lengths.push(len);
            total_len += u64::from(len);
            for (term, tf) in tf_map {
                postings
                    .entry(term)
                    .or_default()
                    .push(Posting { doc_id, tf });
            }
        }

        Index {
            postings,
            doc_lengths,
            total_len,
        }
    }

    /// Number of documents in the corpus (N).
    pub fn doc_count(&self) -> usize {
        self.doc_lengths.len()
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Token count of one document.
    ///
    /// # Panics
    ///
    /// Panics if `doc_id` is out of range; postings never reference one.
    pub fn doc_len(&self, doc_id: usize) -> u32 {
        self.doc_lengths[doc_id]
    }

    /// Average document length across the corpus; 0.0 for an empty corpus.
    pub fn avg_doc_len(&self) -> f64 {
        if self.doc_lengths.is_empty() {
            return 0.0;
        }
        self.total_len as f64 / self.doc_lengths.len() as f64
    }

    /// Document frequency of a term: how many documents contain it at
    /// least once. 0 for out-of-vocabulary terms.
    pub fn doc_freq(&self, term: &str) -> usize {
        self.postings.get(term).map_or(0, Vec::len)
    }

    /// Postings list of a term, ascending doc id; `None` when the term is
    /// absent from the whole corpus.
    pub fn postings(&self, term: &str) -> Option<&[Posting]> {
        self.postings.get(term).map(Vec::as_slice)
    }
}

// ============================================================================
// Tests
// ============================================================================
