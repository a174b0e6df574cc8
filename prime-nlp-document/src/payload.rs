//! Interchange payloads for document extractions.
//!
//! These structs fix the JSON shape consumed by rendering and enrichment
//! collaborators: an envelope with document id and timestamp around a
//! nested source payload carrying the sentence records, subject and
//! phenomenon arrays, the enrichment shortlist (`wiki_blues`), and the
//! enrichment results (`wiki`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::enrich::EnrichmentSummary;
use crate::extraction::{DocumentExtraction, SentenceRecord};

/// Envelope around one serialized extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionPayload {
    /// Document identifier
    pub doc_id: String,
    /// Document-level timestamp
    pub timestamp: String,
    /// The extraction body
    pub source: ExtractionSource,
}

/// The nested extraction body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSource {
    /// Caller tag
    pub tag: String,
    /// Document identity block
    pub identity: Identity,
    /// Sentence records in source order
    pub sentences: Vec<SentenceRecord>,
    /// Deduplicated subject strings
    pub subjects: Vec<String>,
    /// Deduplicated phenomenon strings
    pub phen: Vec<String>,
    /// Enrichment-candidate shortlist
    pub wiki_blues: Vec<String>,
    /// Externally populated enrichment results
    pub wiki: Vec<EnrichmentSummary>,
}

/// Compact identity block mirrored into the payload body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub timestamp: String,
    pub tag: String,
    pub first_sentence: String,
}

impl ExtractionPayload {
    /// Convert to a JSON value for downstream consumers.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("payload always serializes")
    }

    /// Convert to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).expect("payload always serializes")
    }

    /// Parse a payload back from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<&DocumentExtraction> for ExtractionPayload {
    fn from(extraction: &DocumentExtraction) -> Self {
        Self {
            doc_id: extraction.doc_id.clone(),
            timestamp: extraction.timestamp.clone(),
            source: ExtractionSource {
                tag: extraction.tag.clone(),
                identity: Identity {
                    timestamp: extraction.timestamp.clone(),
                    tag: extraction.tag.clone(),
                    first_sentence: extraction.first_sentence().to_string(),
                },
                sentences: extraction.sentences.clone(),
                subjects: extraction.subjects.clone(),
                phen: extraction.phenomena.clone(),
                wiki_blues: extraction.enrichment_candidates.clone(),
                wiki: extraction.enrichments.clone(),
            },
        }
    }
}

impl From<ExtractionPayload> for DocumentExtraction {
    fn from(payload: ExtractionPayload) -> Self {
        Self {
            doc_id: payload.doc_id,
            timestamp: payload.timestamp,
            tag: payload.source.tag,
            sentences: payload.source.sentences,
            subjects: payload.source.subjects,
            phenomena: payload.source.phen,
            enrichment_candidates: payload.source.wiki_blues,
            enrichments: payload.source.wiki,
        }
    }
}
