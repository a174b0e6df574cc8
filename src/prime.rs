//! Semantic-prime matching.
//!
//! Wierzbicka's Natural Semantic Metalanguage posits a small closed
//! vocabulary of maximally simple words. Occurrences of these primes anchor
//! the concept/relation windows extracted in [`crate::sentence`].

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::token::Token;

/// The semantic-prime vocabulary, lowercase. Multi-word entries span up to
/// four words and are matched before their constituent single words.
pub const SEMANTIC_PRIMES: &[&str] = &[
    // Substantives
    "i",
    "you",
    "someone",
    "something",
    "people",
    "body",
    // Relational substantives
    "kind",
    "part",
    // Determiners
    "this",
    "the same",
    "other",
    "else",
    // Quantifiers
    "one",
    "two",
    "some",
    "all",
    "much",
    "many",
    "little",
    "few",
    // Evaluators
    "good",
    "bad",
    // Descriptors
    "big",
    "small",
    // Mental predicates
    "think",
    "know",
    "want",
    "don't want",
    "feel",
    "see",
    "hear",
    // Speech
    "say",
    "words",
    "true",
    // Actions, events, movement
    "do",
    "happen",
    "move",
    // Location, existence, specification
    "be",
    "there is",
    "have",
    "be someone/something",
    // Life and death
    "live",
    "die",
    // Time
    "when",
    "now",
    "before",
    "after",
    "a long time",
    "a short time",
    "for some time",
    "moment",
    // Space
    "where",
    "here",
    "above",
    "below",
    "far",
    "near",
    "side",
    "inside",
    "touch",
    // Logical concepts
    "not",
    "maybe",
    "can",
    "because",
    "if",
    // Intensifier, augmentor
    "very",
    "more",
    // Similarity
    "like",
];

/// Primes whose concept windows are classified as relations rather than
/// concepts: connectives, mental/speech predicates, and event predicates
/// that link participants instead of naming things.
const RELATIONAL_PRIMES: &[&str] = &[
    "because", "if", "when", "where", "do", "happen", "move", "say", "think", "feel", "see",
    "hear", "like", "can",
];

static RELATIONAL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| RELATIONAL_PRIMES.iter().copied().collect());

/// Longest phrase length in the vocabulary.
const MAX_PHRASE_WORDS: usize = 4;

/// One prime occurrence in a token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeMatch {
    /// Index of the first matched token
    pub position: usize,
    /// Matched text, lowercase, words joined by single spaces
    pub text: String,
}

impl PrimeMatch {
    /// Whether this occurrence anchors a relation or a concept.
    pub fn kind(&self) -> PrimeKind {
        if RELATIONAL_SET.contains(self.text.as_str()) {
            PrimeKind::Relational
        } else {
            PrimeKind::Conceptual
        }
    }
}

/// Classification of a prime occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimeKind {
    /// Links participants; its window becomes a relation
    Relational,
    /// Names a thing or property; its window becomes a concept
    Conceptual,
}

/// Scanner for prime occurrences over a token sequence.
///
/// Scans left to right; at each position the longest multi-word phrase is
/// tried first (four words down to two), then the single-word table. A
/// phrase match advances the cursor past the whole phrase, so matches never
/// overlap.
pub struct PrimeMatcher {
    singles: HashSet<&'static str>,
    phrases: HashMap<String, usize>,
}

impl Default for PrimeMatcher {
    fn default() -> Self {
        let mut singles = HashSet::new();
        let mut phrases = HashMap::new();
        for prime in SEMANTIC_PRIMES {
            let words: Vec<&str> = prime.split_whitespace().collect();
            if words.len() == 1 {
                singles.insert(words[0]);
            } else {
                phrases.insert(words.join(" "), words.len());
            }
        }
        Self { singles, phrases }
    }
}

impl PrimeMatcher {
    /// Create a matcher over the full [`SEMANTIC_PRIMES`] vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find all prime occurrences in `tokens`, in surface order.
    pub fn find(&self, tokens: &[Token]) -> Vec<PrimeMatch> {
        let mut found = Vec::new();
        let lowered: Vec<String> = tokens.iter().map(Token::lower).collect();

        let mut i = 0;
        while i < lowered.len() {
            let remaining = lowered.len() - i;
            let mut matched_len = None;
            for phrase_len in (2..=MAX_PHRASE_WORDS.min(remaining)).rev() {
                let phrase = lowered[i..i + phrase_len].join(" ");
                if self.phrases.contains_key(&phrase) {
                    found.push(PrimeMatch {
                        position: i,
                        text: phrase,
                    });
                    matched_len = Some(phrase_len);
                    break;
                }
            }
            match matched_len {
                Some(len) => i += len,
                None => {
                    if self.singles.contains(lowered[i].as_str()) {
                        found.push(PrimeMatch {
                            position: i,
                            text: lowered[i].clone(),
                        });
                    }
                    i += 1;
                }
            }
        }

        found
    }
}
