//! Per-sentence feature extraction.
//!
//! One pass over an annotated sentence yields three things: core subjects
//! (named entities, proper nouns, capitalized noun phrases), prime-anchored
//! concept and relation windows plus lowercase phrase material, and the
//! warm/cold sentiment vectors.

use crate::prime::{PrimeKind, PrimeMatcher};
use crate::sentiment::{SentenceSentiment, Vector3};
use crate::token::{AnnotatedSentence, PosTag, Token};

/// Window half-width (tokens per side) around a prime occurrence.
const CONCEPT_WINDOW: usize = 3;

/// Context reach (tokens per side) around a verb or adjective.
const PHRASE_CONTEXT: usize = 2;

/// Everything extracted from one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceFeatures {
    /// Trimmed sentence text
    pub text: String,
    /// Warm sentiment vector (positivity, engagement, optimism)
    pub warm: Vector3,
    /// Cold sentiment vector (negativity, risk, uncertainty)
    pub cold: Vector3,
    /// Core subject surface forms, deduplicated, unordered
    pub subjects: Vec<String>,
    /// Concept strings in extraction order (may repeat)
    pub concepts: Vec<String>,
    /// Relation strings in extraction order (may repeat)
    pub relations: Vec<String>,
}

/// Extractor over annotated sentences.
#[derive(Default)]
pub struct SentenceFeatureExtractor {
    matcher: PrimeMatcher,
}

impl SentenceFeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract all features from one sentence.
    pub fn extract(&self, sent: &AnnotatedSentence) -> SentenceFeatures {
        let subjects = self.extract_subjects(sent);
        let (concepts, relations) = self.extract_concepts_and_relations(sent);
        let sentiment = SentenceSentiment::of(&sent.tokens);

        SentenceFeatures {
            text: sent.trimmed_text().to_string(),
            warm: sentiment.warm,
            cold: sentiment.cold,
            subjects,
            concepts,
            relations,
        }
    }

    /// Core subjects: allow-listed entity spans, then capitalized proper
    /// nouns not covered by a span, then short capitalized noun chunks.
    fn extract_subjects(&self, sent: &AnnotatedSentence) -> Vec<String> {
        let mut subjects = Vec::new();

        for ent in &sent.entities {
            if ent.label.is_core_subject() {
                subjects.push(ent.text.clone());
            }
        }

        for token in &sent.tokens {
            if token.tag == PosTag::ProperNoun
                && starts_uppercase(&token.text)
                && token.text.len() > 2
                && !sent.entities.iter().any(|e| e.text == token.text)
            {
                subjects.push(token.text.clone());
            }
        }

        for chunk in &sent.noun_chunks {
            if starts_uppercase(chunk)
                && chunk.split_whitespace().count() <= 3
                && !subjects.contains(chunk)
            {
                subjects.push(chunk.clone());
            }
        }

        dedup_in_place(subjects)
    }

    fn extract_concepts_and_relations(
        &self,
        sent: &AnnotatedSentence,
    ) -> (Vec<String>, Vec<String>) {
        let mut concepts = Vec::new();
        let mut relations = Vec::new();

        for m in self.matcher.find(&sent.tokens) {
            let window = concept_window(&sent.tokens, m.position);
            match m.kind() {
                PrimeKind::Relational => relations.push(window),
                PrimeKind::Conceptual => concepts.push(window),
            }
        }

        for chunk in &sent.noun_chunks {
            let chunk_text = chunk.trim();
            if chunk_text.split_whitespace().count() > 1
                && !starts_uppercase(chunk_text)
                && !concepts.iter().any(|c| c.as_str() == chunk_text)
                && chunk_text.len() > 3
            {
                concepts.push(chunk_text.to_string());
            }
        }

        for (idx, token) in sent.tokens.iter().enumerate() {
            if matches!(token.tag, PosTag::Verb | PosTag::Adjective)
                && !starts_uppercase(&token.text)
            {
                let phrase = phrase_context(&sent.tokens, idx);
                if !phrase.is_empty() && phrase.len() > 3 && !starts_uppercase(&phrase) {
                    concepts.push(phrase);
                }
            }
        }

        (concepts, relations)
    }
}

/// Join the tokens around a prime occurrence, skipping the prime's own
/// position and filler tokens. The window is symmetric in token positions,
/// so fewer than `2 * CONCEPT_WINDOW` words may survive the filtering.
fn concept_window(tokens: &[Token], prime_pos: usize) -> String {
    let start = prime_pos.saturating_sub(CONCEPT_WINDOW);
    let end = (prime_pos + CONCEPT_WINDOW + 1).min(tokens.len());

    let words: Vec<&str> = (start..end)
        .filter(|&i| i != prime_pos && !tokens[i].tag.is_filler())
        .map(|i| tokens[i].text.as_str())
        .collect();

    words.join(" ").trim().to_string()
}

/// Local context phrase around a verb or adjective: up to two tokens each
/// side, dropping fillers, determiners, and single-character tokens. The
/// anchor token itself is kept.
fn phrase_context(tokens: &[Token], anchor: usize) -> String {
    let start = anchor.saturating_sub(PHRASE_CONTEXT);
    let end = (anchor + PHRASE_CONTEXT + 1).min(tokens.len());

    let words: Vec<&str> = (start..end)
        .filter(|&i| {
            !tokens[i].tag.is_filler()
                && tokens[i].tag != PosTag::Determiner
                && tokens[i].text.len() > 1
        })
        .map(|i| tokens[i].text.as_str())
        .collect();

    words.join(" ").trim().to_string()
}

fn starts_uppercase(text: &str) -> bool {
    text.chars().next().map_or(false, char::is_uppercase)
}

/// Deduplicate preserving first occurrence.
fn dedup_in_place(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
