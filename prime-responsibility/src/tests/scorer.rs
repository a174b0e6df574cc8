use prime_nlp_document::{DocumentExtraction, SentenceRecord};

use crate::{
    assess, intention_score, negligence_score, EntityAccumulator, ResponsibilityAggregator,
    ResponsibilityReport, RiskTier,
};

fn record(sentence: &str, warm: [f64; 3], cold: [f64; 3]) -> SentenceRecord {
    SentenceRecord {
        sentence: sentence.to_string(),
        warm_vector: warm,
        cold_vector: cold,
    }
}

fn extraction(sentences: Vec<SentenceRecord>, subjects: &[&str]) -> DocumentExtraction {
    DocumentExtraction {
        doc_id: "doc-1".to_string(),
        timestamp: "2026-08-07T12:00:00".to_string(),
        tag: String::new(),
        sentences,
        subjects: subjects.iter().map(|s| s.to_string()).collect(),
        phenomena: Vec::new(),
        enrichment_candidates: Vec::new(),
        enrichments: Vec::new(),
    }
}

/// Acme mentioned in 2 of 4 sentences, accumulating warm sums
/// [0.4, 0.2, 0.6] and cold sums [0.1, 0.0, 0.2].
fn acme_extraction() -> DocumentExtraction {
    extraction(
        vec![
            record("Acme grew.", [0.2, 0.1, 0.3], [0.05, 0.0, 0.1]),
            record("Markets were flat.", [0.0; 3], [0.0; 3]),
            record("Acme kept growing.", [0.2, 0.1, 0.3], [0.05, 0.0, 0.1]),
            record("Nothing else happened.", [0.0; 3], [0.0; 3]),
        ],
        &["Acme"],
    )
}

#[test]
fn worked_example_scores() {
    let aggregator = ResponsibilityAggregator::from_extraction(&acme_extraction());
    let assessment = assess(&aggregator.accumulators()[0]).unwrap();

    assert_eq!(assessment.entity, "Acme");
    assert_eq!(assessment.mentions, 2);
    assert_eq!(assessment.avg_warm_vector, [0.2, 0.1, 0.3]);
    assert_eq!(assessment.avg_cold_vector, [0.05, 0.0, 0.1]);
    // intention = 100 * (0.4*0.2 + 0.4*0.1 + 0.2*0.3) = 18.0
    assert_eq!(assessment.intention_score, 18.0);
    // negligence = 100 * (0.5*0.05 + 0.3*0.0 + 0.2*0.1) = 4.5
    assert_eq!(assessment.negligence_score, 4.5);
    assert_eq!(assessment.responsibility_ratio, 4.0);
    assert_eq!(assessment.risk_level, RiskTier::Moderate);
}

#[test]
fn scores_floor_at_one_tenth() {
    let acc = EntityAccumulator {
        name: "Quiet".to_string(),
        mention_count: 3,
        warm_sum: [0.0; 3],
        cold_sum: [0.0; 3],
    };

    assert_eq!(intention_score(&acc), 0.1);
    assert_eq!(negligence_score(&acc), 0.1);

    let assessment = assess(&acc).unwrap();
    assert_eq!(assessment.responsibility_ratio, 1.0);
    assert_eq!(assessment.risk_level, RiskTier::VeryHigh);
}

#[test]
fn ratio_is_finite_and_positive_across_inputs() {
    let cases = [
        ([0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
        ([1.0, 1.0, 1.0], [0.0, 0.0, 0.0]),
        ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]),
        ([0.3, 0.7, 0.1], [0.9, 0.2, 0.4]),
    ];

    for (warm, cold) in cases {
        let acc = EntityAccumulator {
            name: "X".to_string(),
            mention_count: 1,
            warm_sum: warm,
            cold_sum: cold,
        };
        let assessment = assess(&acc).unwrap();
        assert!(assessment.intention_score >= 0.1);
        assert!(assessment.negligence_score >= 0.1);
        assert!(assessment.responsibility_ratio.is_finite());
        assert!(assessment.responsibility_ratio > 0.0);
    }
}

#[test]
fn zero_mention_entities_are_counted_but_not_assessed() {
    let mut ext = acme_extraction();
    ext.subjects.push("Ghost Corp".to_string());

    let aggregator = ResponsibilityAggregator::from_extraction(&ext);
    let report = ResponsibilityReport::generate(&aggregator, "2026-08-07T12:00:05");

    assert_eq!(report.total_entities, 2);
    assert_eq!(report.total_events, 4);
    assert_eq!(report.entity_assessments.len(), 1);
    assert_eq!(report.entity_assessments[0].entity, "Acme");
}

#[test]
fn risk_tiers_partition_the_ratio_line() {
    let labels: Vec<&str> = [0.4, 1.0, 1.5, 2.0, 3.0, 5.0, 7.0, 10.0, 25.0]
        .iter()
        .map(|r| RiskTier::from_ratio(*r).label())
        .collect();

    insta::assert_debug_snapshot!(labels, @r###"
    [
        "Very High",
        "Very High",
        "High",
        "High",
        "Moderate",
        "Moderate",
        "Low",
        "Low",
        "Very Low",
    ]
    "###);
}

#[test]
fn report_ranks_by_ratio_descending_with_stable_ties() {
    let ext = extraction(
        vec![
            // Calm and Risky tie exactly; Star scores far higher.
            record("Calm and Risky held steady.", [0.2, 0.0, 0.0], [0.1, 0.0, 0.0]),
            record("Star surged on strong growth.", [0.6, 0.2, 1.0], [0.0; 3]),
        ],
        &["Calm", "Risky", "Star"],
    );

    let aggregator = ResponsibilityAggregator::from_extraction(&ext);
    let report = ResponsibilityReport::generate(&aggregator, "2026-08-07T12:00:05");

    let names: Vec<&str> = report
        .entity_assessments
        .iter()
        .map(|a| a.entity.as_str())
        .collect();
    assert_eq!(names, vec!["Star", "Calm", "Risky"]);

    // Re-sorting an already sorted list changes nothing.
    let mut resorted = report.entity_assessments.clone();
    resorted.sort_by(|a, b| {
        b.responsibility_ratio
            .partial_cmp(&a.responsibility_ratio)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    assert_eq!(resorted, report.entity_assessments);
}

#[test]
fn report_serializes_with_expected_fields() {
    let aggregator = ResponsibilityAggregator::from_extraction(&acme_extraction());
    let report = ResponsibilityReport::generate(&aggregator, "2026-08-07T12:00:05");
    let value = report.to_value();

    assert_eq!(value["timestamp"], "2026-08-07T12:00:05");
    assert_eq!(value["total_entities"], 1);
    assert_eq!(value["total_events"], 4);
    let first = &value["entity_assessments"][0];
    assert_eq!(first["entity"], "Acme");
    assert_eq!(first["mentions"], 2);
    assert_eq!(first["intention_score"], 18.0);
    assert_eq!(first["negligence_score"], 4.5);
    assert_eq!(first["responsibility_ratio"], 4.0);
    assert_eq!(first["risk_level"], "Moderate");
}

#[test]
fn report_round_trips_through_json() {
    let aggregator = ResponsibilityAggregator::from_extraction(&acme_extraction());
    let report = ResponsibilityReport::generate(&aggregator, "2026-08-07T12:00:05");

    let reparsed = ResponsibilityReport::from_json(&report.to_json_string()).unwrap();
    assert_eq!(reparsed, report);
}

#[test]
fn serialized_values_are_rounded_to_three_decimals() {
    let acc = EntityAccumulator {
        name: "Rounded".to_string(),
        mention_count: 3,
        warm_sum: [1.0, 0.0, 0.0],
        cold_sum: [1.0, 0.0, 0.0],
    };

    let assessment = assess(&acc).unwrap();
    // Mean warm[0] = 1/3 -> 0.333; intention = 100 * 0.4 / 3 -> 13.333.
    assert_eq!(assessment.avg_warm_vector[0], 0.333);
    assert_eq!(assessment.intention_score, 13.333);
    assert_eq!(assessment.negligence_score, 16.667);
    assert_eq!(assessment.responsibility_ratio, 0.8);
}

#[test]
fn summary_lists_ranked_entities() {
    let aggregator = ResponsibilityAggregator::from_extraction(&acme_extraction());
    let report = ResponsibilityReport::generate(&aggregator, "2026-08-07T12:00:05");

    let summary = report.summary(10);
    assert!(summary.starts_with(" 1. Acme"));
    assert!(summary.contains("R=  4.00 (Moderate) [2 mentions]"));

    assert_eq!(report.summary(0), "");
}
