//! Responsibility-ratio scoring over prime-nlp document extractions.
//!
//! This crate turns a [`prime_nlp_document::DocumentExtraction`] into a
//! ranked responsibility report:
//!
//! - [`ResponsibilityAggregator`] - re-scans the extraction's sentences,
//!   counting case-insensitive substring mentions per entity and summing
//!   sentiment vectors; each sentence becomes one [`ResponsibilityEvent`]
//! - [`assess`] / [`ResponsibilityReport`] - convert accumulated vectors
//!   into intention and negligence scores, the responsibility ratio
//!   R = I/N, and a five-bin [`RiskTier`], ranked by ratio descending
//!
//! ## Example
//!
//! ```
//! use prime_nlp_document::{DocumentExtraction, SentenceRecord};
//! use prime_responsibility::{ResponsibilityAggregator, ResponsibilityReport};
//!
//! let extraction = DocumentExtraction {
//!     doc_id: "doc-1".to_string(),
//!     timestamp: "2026-08-07T00:00:00".to_string(),
//!     tag: String::new(),
//!     sentences: vec![SentenceRecord {
//!         sentence: "Acme reported growth.".to_string(),
//!         warm_vector: [0.25, 0.0, 1.0],
//!         cold_vector: [0.0, 0.0, 0.0],
//!     }],
//!     subjects: vec!["Acme".to_string()],
//!     phenomena: vec![],
//!     enrichment_candidates: vec![],
//!     enrichments: vec![],
//! };
//!
//! let aggregator = ResponsibilityAggregator::from_extraction(&extraction);
//! let report = ResponsibilityReport::generate(&aggregator, "2026-08-07T00:00:01");
//! assert_eq!(report.entity_assessments[0].entity, "Acme");
//! ```

mod aggregate;
mod scorer;

pub use aggregate::{EntityAccumulator, ResponsibilityAggregator, ResponsibilityEvent};
pub use scorer::{
    assess, intention_score, negligence_score, ResponsibilityAssessment, ResponsibilityReport,
    RiskTier,
};
