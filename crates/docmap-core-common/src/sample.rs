//! In-memory sample source, for tooling and tests.

use crate::document::Document;
use crate::mapper::SampleSource;

/// A [`SampleSource`] over an in-memory document set.
///
/// Stands in for the document-store driver wherever a real collection handle
/// is unavailable: CLI runs over exported files, and strategy tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySampleSource {
    documents: Vec<Document>,
}

impl InMemorySampleSource {
    /// Wraps an existing document set.
    #[must_use]
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// A source behaving like an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// All held documents, in order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Number of held documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` when the source holds no documents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl SampleSource for InMemorySampleSource {
    fn one_document(&self) -> Option<Document> {
        self.documents.first().cloned()
    }
}
