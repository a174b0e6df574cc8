//! Warm/cold sentence sentiment vectors.
//!
//! These are lexical-frequency proxies, not a trained model: fixed keyword
//! sets counted over the alphabetic tokens of one sentence. Denominators
//! floor at 1, so an empty sentence scores all zeros rather than NaN.

use crate::token::Token;

/// Three-component sentiment vector, each component in `[0, 1]`.
pub type Vector3 = [f64; 3];

/// Words counted toward positivity.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "strong",
    "growth",
    "increase",
    "positive",
    "benefit",
    "advantage",
];

/// Words counted toward negativity.
pub const NEGATIVE_WORDS: &[&str] = &[
    "risk", "adverse", "decrease", "decline", "negative", "loss", "threat", "danger",
];

/// Modals counted toward engagement (warm component 1).
pub const ENGAGEMENT_MODALS: &[&str] = &["will", "can", "may", "could"];

/// Modals and markers counted toward risk (cold component 1).
pub const RISK_MODALS: &[&str] = &["risk", "may", "could", "might"];

/// Both sentiment vectors for one sentence.
///
/// Warm components: positivity, engagement, optimism.
/// Cold components: negativity, risk, uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentenceSentiment {
    pub warm: Vector3,
    pub cold: Vector3,
}

impl SentenceSentiment {
    /// Score one sentence's tokens.
    pub fn of(tokens: &[Token]) -> Self {
        let words: Vec<String> = tokens
            .iter()
            .filter(|t| t.is_alpha)
            .map(Token::lower)
            .collect();

        let hits = |set: &[&str]| words.iter().filter(|w| set.contains(&w.as_str())).count();

        let pos = hits(POSITIVE_WORDS);
        let neg = hits(NEGATIVE_WORDS);
        let engagement = hits(ENGAGEMENT_MODALS);
        let risk = hits(RISK_MODALS);

        let total = words.len().max(1) as f64;
        let polar = (pos + neg).max(1) as f64;

        Self {
            warm: [
                pos as f64 / total,
                engagement as f64 / total,
                pos as f64 / polar,
            ],
            cold: [
                neg as f64 / total,
                risk as f64 / total,
                neg as f64 / polar,
            ],
        }
    }
}
