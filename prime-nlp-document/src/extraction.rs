//! Document-wide feature extraction.
//!
//! Drives the per-sentence extractor over every sentence of an annotated
//! document, then merges the results: deduplicated subject and phenomenon
//! collections, ordered sentence records, and a bounded shortlist of
//! enrichment candidates.

use serde::{Deserialize, Serialize};

use prime_nlp::{AnnotatedDocument, SentenceFeatureExtractor, Vector3};

use crate::enrich::EnrichmentSummary;

/// Substrings that mark a phenomenon as a promising enrichment candidate.
const ENRICHMENT_PRIORITY_TERMS: &[&str] = &[
    "company",
    "corporation",
    "inc",
    "llc",
    "pandemic",
    "covid",
    "crisis",
    "technology",
    "system",
    "market",
    "industry",
    "regulation",
    "government",
    "economic",
    "financial",
    "business",
    "operations",
    "revenue",
    "debt",
];

/// Upper bound on the enrichment-candidate shortlist.
pub const ENRICHMENT_CANDIDATE_CAP: usize = 20;

/// Minimum trimmed length for a subject or phenomenon string.
const MIN_PHENOMENON_LEN: usize = 3;

/// One sentence with its sentiment vectors, as surfaced to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// Trimmed sentence text
    pub sentence: String,
    /// Warm vector (positivity, engagement, optimism)
    pub warm_vector: Vector3,
    /// Cold vector (negativity, risk, uncertainty)
    pub cold_vector: Vector3,
}

/// Caller-supplied identifying metadata for one extraction run.
///
/// Ids and timestamps come from the embedding application; the extraction
/// core itself reads no clock and generates no identifiers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractionMeta {
    /// Document identifier
    pub doc_id: String,
    /// Document-level timestamp, shared by every derived event
    pub timestamp: String,
    /// Free-form caller tag
    pub tag: String,
}

impl ExtractionMeta {
    pub fn new(
        doc_id: impl Into<String>,
        timestamp: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            doc_id: doc_id.into(),
            timestamp: timestamp.into(),
            tag: tag.into(),
        }
    }
}

/// The merged, document-level extraction result.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentExtraction {
    /// Document identifier
    pub doc_id: String,
    /// Document-level timestamp
    pub timestamp: String,
    /// Caller tag
    pub tag: String,
    /// Sentence records in source order
    pub sentences: Vec<SentenceRecord>,
    /// Deduplicated core subjects, trimmed, each longer than two characters
    pub subjects: Vec<String>,
    /// Deduplicated phenomena: subjects, concepts, and relations
    pub phenomena: Vec<String>,
    /// Enrichment-candidate shortlist, at most twenty entries
    pub enrichment_candidates: Vec<String>,
    /// Enrichment results, populated by an external collaborator
    pub enrichments: Vec<EnrichmentSummary>,
}

impl DocumentExtraction {
    /// Text of the first sentence, or empty when the document is empty.
    pub fn first_sentence(&self) -> &str {
        self.sentences
            .first()
            .map(|s| s.sentence.as_str())
            .unwrap_or("")
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }
}

/// Runs sentence-level extraction across a whole document and merges.
#[derive(Default)]
pub struct DocumentExtractor {
    sentence_extractor: SentenceFeatureExtractor,
}

impl DocumentExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract a whole document.
    ///
    /// Empty input is not an error: an empty annotated document yields an
    /// extraction with zero sentences and empty collections.
    pub fn extract(&self, doc: &AnnotatedDocument, meta: ExtractionMeta) -> DocumentExtraction {
        let mut sentences = Vec::with_capacity(doc.sentence_count());
        let mut all_subjects = Vec::new();
        let mut all_concepts = Vec::new();
        let mut all_relations = Vec::new();

        for sent in doc.iter() {
            let features = self.sentence_extractor.extract(sent);
            sentences.push(SentenceRecord {
                sentence: features.text,
                warm_vector: features.warm,
                cold_vector: features.cold,
            });
            all_subjects.extend(features.subjects);
            all_concepts.extend(features.concepts);
            all_relations.extend(features.relations);
        }

        let subjects = dedup_meaningful(all_subjects.iter());
        let phenomena = dedup_meaningful(
            all_subjects
                .iter()
                .chain(all_concepts.iter())
                .chain(all_relations.iter()),
        );
        let enrichment_candidates =
            select_enrichment_candidates(all_subjects.iter().chain(all_concepts.iter()));

        DocumentExtraction {
            doc_id: meta.doc_id,
            timestamp: meta.timestamp,
            tag: meta.tag,
            sentences,
            subjects,
            phenomena,
            enrichment_candidates,
            enrichments: Vec::new(),
        }
    }
}

/// Trim, drop strings of length <= 2, deduplicate keeping first occurrence.
fn dedup_meaningful<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for item in items {
        let trimmed = item.trim();
        if trimmed.len() >= MIN_PHENOMENON_LEN && seen.insert(trimmed.to_string()) {
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Shortlist strings likely to have an encyclopedia entry: capitalized,
/// containing a priority term, or multi-word. Deduplicated and capped at
/// [`ENRICHMENT_CANDIDATE_CAP`]; the cap is a size bound, not an ordering
/// contract.
fn select_enrichment_candidates<'a>(items: impl Iterator<Item = &'a String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();

    for item in items {
        if out.len() == ENRICHMENT_CANDIDATE_CAP {
            break;
        }
        let lower = item.to_lowercase();
        let qualifies = item.chars().next().map_or(false, char::is_uppercase)
            || ENRICHMENT_PRIORITY_TERMS.iter().any(|t| lower.contains(t))
            || item.split_whitespace().count() >= 2;
        if qualifies && seen.insert(item.clone()) {
            out.push(item.clone());
        }
    }

    out
}
