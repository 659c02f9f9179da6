//! BM25 Okapi scoring
//!
//! Standard BM25 with free parameters `k1` (term-frequency saturation) and
//! `b` (length-normalization strength):
//!
//! ```text
//! idf(t)  = ln((N - df(t) + 0.5) / (df(t) + 0.5) + 1)
//! score(d) = Σ over distinct query terms t of
//!            idf(t) * tf(t,d)*(k1+1) / (tf(t,d) + k1*(1 - b + b*len(d)/avgLen))
//! ```
//!
//! Scores are computed in a canonical order (distinct query terms in
//! first-occurrence order, postings in ascending doc id), so identical
//! inputs reproduce identical floating-point output.

use kodeks_core::Bm25Params;
use std::collections::HashSet;

use crate::index::Index;

/// BM25 scorer over a statistics [`Index`].
#[derive(Debug, Clone, Copy)]
pub struct Bm25Scorer {
    params: Bm25Params,
}

impl Default for Bm25Scorer {
    fn default() -> Self {
        Bm25Scorer::new(Bm25Params::default())
    }
}

impl Bm25Scorer {
    /// Create a scorer with the given parameters.
    pub fn new(params: Bm25Params) -> Self {
        Bm25Scorer { params }
    }

    /// The configured parameters.
    pub fn params(&self) -> Bm25Params {
        self.params
    }

    /// Inverse document frequency of a term.
    ///
    /// Defined for every term, including out-of-vocabulary ones (df = 0
    /// gives the largest value). Very common terms (df > N/2) take the
    /// formula below 1 inside the logarithm's `+1` smoothing; the result is
    /// used as-is, never clamped.
    pub fn idf(&self, index: &Index, term: &str) -> f64 {
        let n = index.doc_count() as f64;
        let df = index.doc_freq(term) as f64;
        ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
    }

    /// Score every document against the query tokens.
    ///
    /// Returns one score per document id, dense. Documents containing no
    /// query term score 0. An empty corpus (average length 0) short-circuits
    /// to all zeros before any division. Out-of-vocabulary query terms get
    /// an idf but have no postings, so they contribute 0 to every document
    /// without disturbing other terms' contributions.
    pub fn score_all(&self, query_tokens: &[String], index: &Index) -> Vec<f64> {
        let mut scores = vec![0.0; index.doc_count()];
        let avg_len = index.avg_doc_len();
        if avg_len == 0.0 {
            return scores;
        }

        let Bm25Params { k1, b } = self.params;
        let mut seen: HashSet<&str> = HashSet::new();

        for term in query_tokens {
            // Distinct terms only, in first-occurrence order.
            if !seen.insert(term.as_str()) {
                continue;
            }
            let idf = self.idf(index, term);
            for posting in index.postings(term).unwrap_or(&[]) {
                let tf = f64::from(posting.tf);
                let len = f64::from(index.doc_len(posting.doc_id));
                let denom = tf + k1 * (1.0 - b + b * len / avg_len);
                scores[posting.doc_id] += idf * tf * (k1 + 1.0) / denom;
            }
        }

        scores
    }
}

// ============================================================================
// Tests
// ============================================================================
