//! Core annotation model.
//!
//! These types carry the output of the external text annotator: sentence
//! boundaries, per-token coarse part-of-speech tags, named-entity spans,
//! and noun-phrase chunks. The extraction layers consume them read-only.

/// Coarse part-of-speech tag for a single token.
///
/// This is the minimal tag set the extraction pipeline depends on. Anything
/// the annotator produces outside this set maps to [`PosTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun (capitalized names)
    ProperNoun,
    /// Verb
    Verb,
    /// Adjective
    Adjective,
    /// Determiner (the, a, an, this, ...)
    Determiner,
    /// Punctuation mark
    Punctuation,
    /// Whitespace token
    Whitespace,
    /// Any other tag
    Other,
}

impl PosTag {
    /// Tags that never contribute to concept windows or context phrases.
    pub fn is_filler(self) -> bool {
        matches!(self, PosTag::Punctuation | PosTag::Whitespace)
    }
}

/// Named-entity label for an entity span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    /// Person name
    Person,
    /// Organization, company, institution
    Organization,
    /// Geopolitical entity (country, city, state)
    Location,
    /// Product name
    Product,
    /// Named event (hurricanes, wars, sports events)
    Event,
    /// Named law or legal document
    Law,
    /// Monetary amount
    Money,
    /// Any other label
    Other,
}

impl EntityLabel {
    /// Labels whose spans are promoted to core subjects.
    pub fn is_core_subject(self) -> bool {
        !matches!(self, EntityLabel::Other)
    }
}

/// A single token with its surface text and coarse tag.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text as produced by the annotator
    pub text: String,
    /// Coarse part-of-speech tag
    pub tag: PosTag,
    /// True if the surface text is entirely alphabetic
    pub is_alpha: bool,
}

impl Token {
    /// Create a token, deriving the alphabetic flag from the surface text.
    pub fn new(text: impl Into<String>, tag: PosTag) -> Self {
        let text = text.into();
        let is_alpha = !text.is_empty() && text.chars().all(char::is_alphabetic);
        Self {
            text,
            tag,
            is_alpha,
        }
    }

    /// Lowercase surface form, used for vocabulary lookups.
    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

/// A named-entity span within one sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySpan {
    /// Surface text of the whole span
    pub text: String,
    /// Entity label assigned by the annotator
    pub label: EntityLabel,
}

impl EntitySpan {
    pub fn new(text: impl Into<String>, label: EntityLabel) -> Self {
        Self {
            text: text.into(),
            label,
        }
    }
}

/// One sentence as annotated by the external annotator.
///
/// Built through the chaining constructors in tests and by annotator
/// implementations in production:
///
/// ```
/// use prime_nlp::{AnnotatedSentence, EntityLabel, PosTag};
///
/// let sent = AnnotatedSentence::new("Apple reported growth.")
///     .with_token("Apple", PosTag::ProperNoun)
///     .with_token("reported", PosTag::Verb)
///     .with_token("growth", PosTag::Noun)
///     .with_token(".", PosTag::Punctuation)
///     .with_entity("Apple", EntityLabel::Organization);
/// assert_eq!(sent.tokens.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedSentence {
    /// Raw sentence text
    pub text: String,
    /// Token sequence in surface order
    pub tokens: Vec<Token>,
    /// Named-entity spans found in this sentence
    pub entities: Vec<EntitySpan>,
    /// Noun-phrase chunk surface texts in order of appearance
    pub noun_chunks: Vec<String>,
}

impl AnnotatedSentence {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Append a token.
    pub fn with_token(mut self, text: impl Into<String>, tag: PosTag) -> Self {
        self.tokens.push(Token::new(text, tag));
        self
    }

    /// Append a named-entity span.
    pub fn with_entity(mut self, text: impl Into<String>, label: EntityLabel) -> Self {
        self.entities.push(EntitySpan::new(text, label));
        self
    }

    /// Append a noun-phrase chunk.
    pub fn with_chunk(mut self, text: impl Into<String>) -> Self {
        self.noun_chunks.push(text.into());
        self
    }

    /// Sentence text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

/// A document as an ordered sequence of annotated sentences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotatedDocument {
    sentences: Vec<AnnotatedSentence>,
}

impl AnnotatedDocument {
    pub fn new(sentences: Vec<AnnotatedSentence>) -> Self {
        Self { sentences }
    }

    /// An empty document (the valid annotation of empty input).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn sentences(&self) -> &[AnnotatedSentence] {
        &self.sentences
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnnotatedSentence> {
        self.sentences.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_alpha_flag() {
        assert!(Token::new("growth", PosTag::Noun).is_alpha);
        assert!(!Token::new("COVID-19", PosTag::ProperNoun).is_alpha);
        assert!(!Token::new(".", PosTag::Punctuation).is_alpha);
        assert!(!Token::new("", PosTag::Other).is_alpha);
    }

    #[test]
    fn filler_tags() {
        assert!(PosTag::Punctuation.is_filler());
        assert!(PosTag::Whitespace.is_filler());
        assert!(!PosTag::Determiner.is_filler());
        assert!(!PosTag::Verb.is_filler());
    }

    #[test]
    fn core_subject_labels() {
        assert!(EntityLabel::Organization.is_core_subject());
        assert!(EntityLabel::Money.is_core_subject());
        assert!(!EntityLabel::Other.is_core_subject());
    }

    #[test]
    fn sentence_builder() {
        let sent = AnnotatedSentence::new(" Apple grew. ")
            .with_token("Apple", PosTag::ProperNoun)
            .with_token("grew", PosTag::Verb)
            .with_token(".", PosTag::Punctuation)
            .with_entity("Apple", EntityLabel::Organization)
            .with_chunk("Apple");

        assert_eq!(sent.trimmed_text(), "Apple grew.");
        assert_eq!(sent.tokens.len(), 3);
        assert_eq!(sent.entities[0].label, EntityLabel::Organization);
    }
}
