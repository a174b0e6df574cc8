//! The consumed text-annotation capability.
//!
//! Sentence splitting, part-of-speech tagging, and named-entity recognition
//! are not implemented here. The pipeline consumes them through
//! [`TextAnnotator`], which an embedding application implements over its
//! linguistic backend of choice. The backend handle is constructed once and
//! passed explicitly; there is no ambient global instance.

use thiserror::Error;

use crate::token::AnnotatedDocument;

/// Errors raised while setting up an annotator backend.
///
/// Backend construction is a startup precondition: a missing model fails
/// fast here, before any document is processed. Per-document annotation is
/// infallible by contract — annotating empty or degenerate text yields an
/// empty [`AnnotatedDocument`], never an error.
#[derive(Debug, Error)]
pub enum AnnotatorError {
    /// The backing linguistic model could not be loaded.
    #[error("annotation model '{model}' unavailable: {message}")]
    ModelUnavailable { model: String, message: String },
}

/// Result type for annotator construction.
pub type AnnotatorResult<T> = Result<T, AnnotatorError>;

/// Capability trait for turning raw text into annotated sentences.
///
/// Implementations must provide, at minimum: sentence boundaries; per-token
/// surface text and a coarse tag covering proper nouns, verbs, adjectives,
/// determiners, punctuation, and whitespace; named-entity spans labeled
/// with the [`crate::EntityLabel`] set; and noun-phrase chunk spans.
pub trait TextAnnotator {
    /// Annotate raw text into sentence-level structures.
    fn annotate(&self, text: &str) -> AnnotatedDocument;
}
