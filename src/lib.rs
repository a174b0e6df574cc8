//! Semantic-prime anchored linguistic feature extraction.
//!
//! This crate turns externally annotated sentences into structured
//! linguistic features:
//!
//! - [`PrimeMatcher`] - finds occurrences of a fixed semantic-primitive
//!   vocabulary (after Wierzbicka's Natural Semantic Metalanguage)
//! - [`SentenceFeatureExtractor`] - extracts core subjects, prime-anchored
//!   concept/relation windows, and warm/cold sentiment vectors per sentence
//! - [`TextAnnotator`] - the consumed capability supplying sentence
//!   boundaries, part-of-speech tags, entity spans, and noun chunks
//!
//! Document-level merging lives in `prime-nlp-document`; per-entity
//! responsibility scoring lives in `prime-responsibility`.
//!
//! ## Example
//!
//! ```
//! use prime_nlp::{AnnotatedSentence, EntityLabel, PosTag, SentenceFeatureExtractor};
//!
//! let sent = AnnotatedSentence::new("Apple reported growth.")
//!     .with_token("Apple", PosTag::ProperNoun)
//!     .with_token("reported", PosTag::Verb)
//!     .with_token("growth", PosTag::Noun)
//!     .with_token(".", PosTag::Punctuation)
//!     .with_entity("Apple", EntityLabel::Organization);
//!
//! let features = SentenceFeatureExtractor::new().extract(&sent);
//! assert_eq!(features.subjects, vec!["Apple"]);
//! assert!(features.warm[0] > 0.0);
//! ```

mod annotator;
mod prime;
mod sentence;
mod sentiment;
mod token;

pub use annotator::{AnnotatorError, AnnotatorResult, TextAnnotator};
pub use prime::{PrimeKind, PrimeMatch, PrimeMatcher, SEMANTIC_PRIMES};
pub use sentence::{SentenceFeatureExtractor, SentenceFeatures};
pub use sentiment::{
    SentenceSentiment, Vector3, ENGAGEMENT_MODALS, NEGATIVE_WORDS, POSITIVE_WORDS, RISK_MODALS,
};
pub use token::{
    AnnotatedDocument, AnnotatedSentence, EntityLabel, EntitySpan, PosTag, Token,
};
