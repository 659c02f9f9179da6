//! Engine construction and search
//!
//! The engine is an explicitly constructed, immutable value: corpus and
//! index are built eagerly inside [`Engine::build`] and published only when
//! it returns, so no caller ever observes a partially built index. Callers
//! share the engine by reference across any number of concurrent searches;
//! nothing mutates after construction, so no locking is involved.

use kodeks_core::{DocId, Document, EngineConfig, RawRecord, Result, ScoredResult};
use kodeks_search::{rank, tokenize_unique, Bm25Scorer, Index};

/// BM25 retrieval engine over a fixed corpus.
#[derive(Debug)]
pub struct Engine {
    corpus: super::Corpus,
    index: Index,
    scorer: Bm25Scorer,
    config: EngineConfig,
}

impl Engine {
    /// Ingest records and build the statistics index.
    ///
    /// Fails only on ingestion errors (a record without `text`); an empty
    /// record set is non-fatal and produces an engine whose every search
    /// returns no results.
    pub fn build(records: Vec<RawRecord>, config: EngineConfig) -> Result<Engine> {
        let corpus = super::Corpus::build(records)?;
        if corpus.is_empty() {
            tracing::warn!("corpus is empty; every search will return no results");
        }

        let texts: Vec<&str> = corpus.documents().iter().map(|d| d.text.as_str()).collect();
        let index = Index::build(&texts, config.mode, &config.tokenizer);
        tracing::info!(
            documents = corpus.len(),
            terms = index.term_count(),
            avg_doc_len = index.avg_doc_len(),
            "index built"
        );

        Ok(Engine {
            corpus,
            index,
            scorer: Bm25Scorer::new(config.params),
            config,
        })
    }

    /// Search the corpus, returning at most `limit` hits ordered by score
    /// descending (ties in ascending id order), non-positive scores dropped.
    ///
    /// Total over its domain: queries matching nothing, out-of-vocabulary
    /// terms and punctuation-only queries all yield an empty vec.
    pub fn search(&self, query: &str, limit: usize) -> Vec<ScoredResult> {
        let query_tokens = tokenize_unique(query, self.config.mode, &self.config.tokenizer);
        let scores = self.scorer.score_all(&query_tokens, &self.index);
        let ranked = rank(&scores, limit);
        tracing::debug!(query, hits = ranked.len(), "search");
        ranked
            .into_iter()
            .map(|doc_id| ScoredResult {
                doc_id,
                score: scores[doc_id.as_usize()],
            })
            .collect()
    }

    /// Read accessor for rendering: the document behind a hit.
    pub fn document(&self, id: DocId) -> Option<&Document> {
        self.corpus.get(id)
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.corpus.len()
    }

    /// The configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

// ============================================================================
// Tests
// ============================================================================
