//! Concept-enrichment collaborator contract.
//!
//! Encyclopedia lookups live outside this crate. Consumers implement
//! [`ConceptEnricher`] over whatever backend they use; the integration here
//! walks the candidate shortlist and tolerates every per-candidate failure,
//! recording it instead of aborting the extraction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::extraction::DocumentExtraction;

/// How many candidates from the shortlist are actually looked up.
pub const ENRICHMENT_LOOKUP_CAP: usize = 10;

/// A single enrichment result for one candidate term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentSummary {
    /// The candidate term that was looked up
    pub search_term: String,
    /// URL of the matched reference entry, empty when unresolved
    pub reference_url: String,
    /// Short summary text, empty when unresolved
    pub summary_text: String,
}

impl EnrichmentSummary {
    /// An unresolved entry for `term`: the lookup found nothing or failed.
    pub fn unresolved(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            reference_url: String::new(),
            summary_text: String::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.summary_text.is_empty()
    }
}

/// A failed lookup for one candidate term.
#[derive(Debug, Error)]
#[error("enrichment lookup for '{term}' failed: {message}")]
pub struct EnrichmentError {
    pub term: String,
    pub message: String,
}

impl EnrichmentError {
    pub fn new(term: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            message: message.into(),
        }
    }
}

/// External lookup capability for candidate terms.
pub trait ConceptEnricher {
    /// Look up one term. `Ok(None)` means the backend answered but found
    /// nothing; `Err` means the lookup itself failed.
    fn lookup(&self, term: &str) -> Result<Option<EnrichmentSummary>, EnrichmentError>;

    /// Entry recorded for a term whose lookup found nothing or failed.
    /// Backends may override this to supply a best-guess reference URL.
    fn unresolved_entry(&self, term: &str) -> EnrichmentSummary {
        EnrichmentSummary::unresolved(term)
    }
}

/// What happened during one enrichment pass. Failures are collected here,
/// never raised.
#[derive(Debug, Default)]
pub struct EnrichmentOutcome {
    /// Number of candidates looked up
    pub attempted: usize,
    /// Number of lookups that produced a resolved summary
    pub resolved: usize,
    /// Messages from failed lookups
    pub warnings: Vec<String>,
}

impl EnrichmentOutcome {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the enricher over the first [`ENRICHMENT_LOOKUP_CAP`] candidates of
/// an extraction, appending one entry per attempted candidate.
pub fn enrich_extraction(
    extraction: &mut DocumentExtraction,
    enricher: &dyn ConceptEnricher,
) -> EnrichmentOutcome {
    let mut outcome = EnrichmentOutcome::default();

    for candidate in extraction
        .enrichment_candidates
        .iter()
        .take(ENRICHMENT_LOOKUP_CAP)
    {
        outcome.attempted += 1;
        match enricher.lookup(candidate) {
            Ok(Some(summary)) => {
                outcome.resolved += 1;
                extraction.enrichments.push(summary);
            }
            Ok(None) => extraction.enrichments.push(enricher.unresolved_entry(candidate)),
            Err(err) => {
                outcome.warnings.push(err.to_string());
                extraction.enrichments.push(enricher.unresolved_entry(candidate));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::{DocumentExtractor, ExtractionMeta};
    use prime_nlp::AnnotatedDocument;

    /// Enricher that resolves terms containing "known", fails on terms
    /// containing "broken", and finds nothing otherwise.
    struct FixtureEnricher;

    impl ConceptEnricher for FixtureEnricher {
        fn lookup(&self, term: &str) -> Result<Option<EnrichmentSummary>, EnrichmentError> {
            if term.contains("broken") {
                return Err(EnrichmentError::new(term, "backend timeout"));
            }
            if term.contains("known") {
                return Ok(Some(EnrichmentSummary {
                    search_term: term.to_string(),
                    reference_url: format!("https://example.org/{term}"),
                    summary_text: format!("summary of {term}"),
                }));
            }
            Ok(None)
        }
    }

    fn extraction_with_candidates(candidates: &[&str]) -> DocumentExtraction {
        let mut extraction = DocumentExtractor::new().extract(
            &AnnotatedDocument::empty(),
            ExtractionMeta::new("doc", "2026-08-07T00:00:00", ""),
        );
        extraction.enrichment_candidates =
            candidates.iter().map(|c| c.to_string()).collect();
        extraction
    }

    #[test]
    fn resolved_and_unresolved_entries() {
        let mut extraction = extraction_with_candidates(&["known term", "obscure term"]);
        let outcome = enrich_extraction(&mut extraction, &FixtureEnricher);

        assert_eq!(outcome.attempted, 2);
        assert_eq!(outcome.resolved, 1);
        assert!(!outcome.has_warnings());
        assert_eq!(extraction.enrichments.len(), 2);
        assert!(extraction.enrichments[0].is_resolved());
        assert!(!extraction.enrichments[1].is_resolved());
        assert_eq!(extraction.enrichments[1].search_term, "obscure term");
    }

    #[test]
    fn failures_are_collected_not_raised() {
        let mut extraction = extraction_with_candidates(&["broken term", "known term"]);
        let outcome = enrich_extraction(&mut extraction, &FixtureEnricher);

        // The failed candidate still produced a placeholder entry and the
        // pass continued to the next candidate.
        assert_eq!(extraction.enrichments.len(), 2);
        assert!(!extraction.enrichments[0].is_resolved());
        assert!(extraction.enrichments[1].is_resolved());
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("broken term"));
        assert!(outcome.warnings[0].contains("backend timeout"));
    }

    #[test]
    fn lookup_cap_limits_attempts() {
        let names: Vec<String> = (0..15).map(|i| format!("term {i}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut extraction = extraction_with_candidates(&refs);

        let outcome = enrich_extraction(&mut extraction, &FixtureEnricher);

        assert_eq!(outcome.attempted, ENRICHMENT_LOOKUP_CAP);
        assert_eq!(extraction.enrichments.len(), ENRICHMENT_LOOKUP_CAP);
    }

    #[test]
    fn empty_candidate_list_is_a_no_op() {
        let mut extraction = extraction_with_candidates(&[]);
        let outcome = enrich_extraction(&mut extraction, &FixtureEnricher);

        assert_eq!(outcome.attempted, 0);
        assert!(extraction.enrichments.is_empty());
    }
}
