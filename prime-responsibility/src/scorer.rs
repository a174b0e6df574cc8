//! Responsibility scoring and the ranked report.
//!
//! Warm vectors proxy intention (positive, engaged, optimistic language);
//! cold vectors proxy negligence (negative, risky, uncertain language).
//! Each scored entity gets a responsibility ratio R = intention/negligence
//! and one of five risk tiers. Both scores floor at 0.1, so the ratio is
//! always finite and positive.

use std::cmp::Ordering;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use prime_nlp::Vector3;

use crate::aggregate::{EntityAccumulator, ResponsibilityAggregator};

/// Weights over the mean warm vector (positivity, engagement, optimism).
const INTENTION_WEIGHTS: Vector3 = [0.4, 0.4, 0.2];

/// Weights over the mean cold vector (negativity, risk, uncertainty).
const NEGLIGENCE_WEIGHTS: Vector3 = [0.5, 0.3, 0.2];

/// Floor applied to both scores so the ratio never divides by zero.
const SCORE_FLOOR: f64 = 0.1;

/// Discrete risk classification over the responsibility ratio.
///
/// The five bins partition `(0, inf)`: the first matching threshold wins,
/// scanning from the highest ratio down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskTier {
    /// Classify a responsibility ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio > 10.0 {
            RiskTier::VeryLow
        } else if ratio > 5.0 {
            RiskTier::Low
        } else if ratio > 2.0 {
            RiskTier::Moderate
        } else if ratio > 1.0 {
            RiskTier::High
        } else {
            RiskTier::VeryHigh
        }
    }

    /// Display label, as serialized into reports.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::VeryLow => "Very Low",
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
            RiskTier::VeryHigh => "Very High",
        }
    }
}

/// Scored view of one entity with at least one mention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibilityAssessment {
    /// Entity surface string
    pub entity: String,
    /// Sentences mentioning the entity
    pub mentions: usize,
    /// Intention score, floored at 0.1
    pub intention_score: f64,
    /// Negligence score, floored at 0.1
    pub negligence_score: f64,
    /// intention / negligence
    pub responsibility_ratio: f64,
    /// Risk tier derived from the ratio
    pub risk_level: RiskTier,
    /// Mean warm vector over mentioning sentences
    pub avg_warm_vector: Vector3,
    /// Mean cold vector over mentioning sentences
    pub avg_cold_vector: Vector3,
}

/// Intention score for an accumulator with at least one mention.
pub fn intention_score(acc: &EntityAccumulator) -> f64 {
    weighted_score(&acc.warm_sum, acc.mention_count, &INTENTION_WEIGHTS)
}

/// Negligence score for an accumulator with at least one mention.
pub fn negligence_score(acc: &EntityAccumulator) -> f64 {
    weighted_score(&acc.cold_sum, acc.mention_count, &NEGLIGENCE_WEIGHTS)
}

fn weighted_score(sum: &Vector3, mentions: usize, weights: &Vector3) -> f64 {
    let m = mentions as f64;
    let raw: f64 = (0..3).map(|i| (sum[i] / m) * weights[i]).sum::<f64>() * 100.0;
    raw.max(SCORE_FLOOR)
}

/// Score one accumulator. Returns `None` for zero-mention entities, which
/// never receive a ratio.
pub fn assess(acc: &EntityAccumulator) -> Option<ResponsibilityAssessment> {
    if acc.mention_count == 0 {
        return None;
    }

    let intention = intention_score(acc);
    let negligence = negligence_score(acc);
    let ratio = intention / negligence;
    let m = acc.mention_count as f64;

    Some(ResponsibilityAssessment {
        entity: acc.name.clone(),
        mentions: acc.mention_count,
        intention_score: round3(intention),
        negligence_score: round3(negligence),
        responsibility_ratio: round3(ratio),
        risk_level: RiskTier::from_ratio(ratio),
        avg_warm_vector: acc.warm_sum.map(|v| round3(v / m)),
        avg_cold_vector: acc.cold_sum.map(|v| round3(v / m)),
    })
}

/// Serialized values carry three decimal places.
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// The ranked responsibility report over all scored entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponsibilityReport {
    /// Report generation timestamp, caller-supplied
    pub timestamp: String,
    /// All entities considered, zero-mention ones included
    pub total_entities: usize,
    /// Total events, one per sentence
    pub total_events: usize,
    /// Assessments sorted by ratio descending; ties keep entity
    /// encounter order
    pub entity_assessments: Vec<ResponsibilityAssessment>,
}

impl ResponsibilityReport {
    /// Score every mentioned entity of an aggregation and rank the result.
    pub fn generate(aggregator: &ResponsibilityAggregator, timestamp: impl Into<String>) -> Self {
        let mut entity_assessments: Vec<ResponsibilityAssessment> = aggregator
            .accumulators()
            .iter()
            .filter_map(assess)
            .collect();

        entity_assessments.sort_by(|a, b| {
            b.responsibility_ratio
                .partial_cmp(&a.responsibility_ratio)
                .unwrap_or(Ordering::Equal)
        });

        Self {
            timestamp: timestamp.into(),
            total_entities: aggregator.entity_count(),
            total_events: aggregator.event_count(),
            entity_assessments,
        }
    }

    /// Convert to a JSON value for downstream consumers.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).expect("report always serializes")
    }

    /// Convert to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string_pretty(self).expect("report always serializes")
    }

    /// Parse a report back from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Plain-text ranked summary of the top `limit` assessments.
    pub fn summary(&self, limit: usize) -> String {
        let mut out = String::new();
        for (i, assessment) in self.entity_assessments.iter().take(limit).enumerate() {
            let _ = writeln!(
                out,
                "{:2}. {:<20} R={:6.2} ({}) [{} mentions]",
                i + 1,
                assessment.entity,
                assessment.responsibility_ratio,
                assessment.risk_level.label(),
                assessment.mentions,
            );
        }
        out
    }
}
