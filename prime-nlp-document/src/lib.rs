//! Document-level extraction for prime-nlp.
//!
//! The root crate extracts features from one sentence at a time. This crate
//! drives that extractor over a whole annotated document and merges the
//! results into a [`DocumentExtraction`]:
//!
//! - ordered [`SentenceRecord`]s with warm/cold sentiment vectors
//! - deduplicated subject and phenomenon collections
//! - a bounded enrichment-candidate shortlist
//!
//! It also owns the interchange layer: the [`ExtractionPayload`] JSON shape
//! consumed by rendering collaborators, and the [`ConceptEnricher`]
//! contract through which an external encyclopedia backend fills the
//! payload's `wiki` array. Enrichment failures are collected into an
//! [`EnrichmentOutcome`], never raised.
//!
//! ## Example
//!
//! ```
//! use prime_nlp::{AnnotatedDocument, AnnotatedSentence, PosTag};
//! use prime_nlp_document::{DocumentExtractor, ExtractionMeta, ExtractionPayload};
//!
//! let sent = AnnotatedSentence::new("Markets can move fast.")
//!     .with_token("Markets", PosTag::Noun)
//!     .with_token("can", PosTag::Other)
//!     .with_token("move", PosTag::Verb)
//!     .with_token("fast", PosTag::Other)
//!     .with_token(".", PosTag::Punctuation);
//!
//! let extraction = DocumentExtractor::new().extract(
//!     &AnnotatedDocument::new(vec![sent]),
//!     ExtractionMeta::new("doc-1", "2026-08-07T00:00:00", ""),
//! );
//! let json = ExtractionPayload::from(&extraction).to_json_string();
//! assert!(json.contains("wiki_blues"));
//! ```

mod enrich;
mod extraction;
mod payload;

pub use enrich::{
    enrich_extraction, ConceptEnricher, EnrichmentError, EnrichmentOutcome, EnrichmentSummary,
    ENRICHMENT_LOOKUP_CAP,
};
pub use extraction::{
    DocumentExtraction, DocumentExtractor, ExtractionMeta, SentenceRecord,
    ENRICHMENT_CANDIDATE_CAP,
};
pub use payload::{ExtractionPayload, ExtractionSource, Identity};
