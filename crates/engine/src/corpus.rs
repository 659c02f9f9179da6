//! Corpus store
//!
//! The ordered collection of ingested documents. Ids are assigned in input
//! order at construction and the order is part of the contract: it is the
//! iteration order and the tie-break source for equal scores.

use kodeks_core::{DocId, Document, Error, RawRecord, Result};

/// Ordered, immutable document store.
///
/// Built once from raw records; read-only afterwards. Reflecting corpus
/// changes requires building a fresh engine, by design.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    /// Ingest raw records, assigning `DocId(0..n)` in input order.
    ///
    /// Fails with [`Error::MissingText`] when a record has no `text`;
    /// every other field defaults to the empty string.
    pub fn build(records: Vec<RawRecord>) -> Result<Corpus> {
        let mut docs = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let text = record.text.ok_or(Error::MissingText { index })?;
            docs.push(Document {
                id: DocId(index),
                text,
                title: record.title,
                article_label: record.article_label,
                source_url: record.source_url,
                source_tag: record.source_tag,
            });
        }
        Ok(Corpus { docs })
    }

    /// Look up a document by id.
    pub fn get(&self, id: DocId) -> Option<&Document> {
        self.docs.get(id.as_usize())
    }

    /// All documents, in id order.
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether the corpus holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
