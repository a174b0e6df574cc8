//! Per-entity aggregation over a document extraction.
//!
//! Each sentence of the extraction is treated as one event. Entities are
//! detected by case-insensitive substring containment of the entity string
//! in the sentence text, and each mention folds that sentence's sentiment
//! vectors into the entity's running sums.

use std::collections::HashMap;

use prime_nlp::Vector3;
use prime_nlp_document::DocumentExtraction;

/// Running totals for one entity.
///
/// Created empty before the sentence scan starts and mutated only during
/// it; the scorer reads the final state.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityAccumulator {
    /// Entity surface string, as supplied
    pub name: String,
    /// Number of sentences mentioning this entity
    pub mention_count: usize,
    /// Element-wise sum of warm vectors over mentioning sentences
    pub warm_sum: Vector3,
    /// Element-wise sum of cold vectors over mentioning sentences
    pub cold_sum: Vector3,
}

impl EntityAccumulator {
    fn new(name: String) -> Self {
        Self {
            name,
            mention_count: 0,
            warm_sum: [0.0; 3],
            cold_sum: [0.0; 3],
        }
    }

    fn record_mention(&mut self, warm: &Vector3, cold: &Vector3) {
        self.mention_count += 1;
        for i in 0..3 {
            self.warm_sum[i] += warm[i];
            self.cold_sum[i] += cold[i];
        }
    }
}

/// One sentence viewed as a unit of evidence.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsibilityEvent {
    /// Sentence text
    pub sentence: String,
    /// Document-level timestamp, shared by all events
    pub timestamp: String,
    /// Known entities mentioned in this sentence
    pub entities: Vec<String>,
    /// The sentence's warm vector
    pub warm_vector: Vector3,
    /// The sentence's cold vector
    pub cold_vector: Vector3,
    /// Document phenomena matching this sentence
    pub phenomena: Vec<String>,
}

/// Scans an extraction once and holds the per-entity totals and events.
///
/// The entity set is fixed before the scan begins, so the mention pass
/// always sees the complete set. Mention detection is plain substring
/// containment on lowercased text, with no word-boundary check: an entity
/// like "Ford" also matches inside "Fordham".
#[derive(Debug)]
pub struct ResponsibilityAggregator {
    accumulators: Vec<EntityAccumulator>,
    events: Vec<ResponsibilityEvent>,
}

impl ResponsibilityAggregator {
    /// Aggregate using the extraction's own subject set as the entity list.
    pub fn from_extraction(extraction: &DocumentExtraction) -> Self {
        Self::with_entities(extraction, &extraction.subjects)
    }

    /// Aggregate over a caller-supplied entity list.
    ///
    /// Duplicate entries collapse into one accumulator; encounter order of
    /// first occurrences is preserved for downstream tie-breaking.
    pub fn with_entities(extraction: &DocumentExtraction, entities: &[String]) -> Self {
        let mut accumulators: Vec<EntityAccumulator> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for entity in entities {
            if !index.contains_key(entity) {
                index.insert(entity.clone(), accumulators.len());
                accumulators.push(EntityAccumulator::new(entity.clone()));
            }
        }

        let mut events = Vec::with_capacity(extraction.sentences.len());
        for record in &extraction.sentences {
            let sentence_lower = record.sentence.to_lowercase();

            let mentioned: Vec<String> = accumulators
                .iter()
                .filter(|acc| sentence_lower.contains(&acc.name.to_lowercase()))
                .map(|acc| acc.name.clone())
                .collect();

            for name in &mentioned {
                let acc = &mut accumulators[index[name]];
                acc.record_mention(&record.warm_vector, &record.cold_vector);
            }

            let phenomena: Vec<String> = extraction
                .phenomena
                .iter()
                .filter(|p| sentence_lower.contains(&p.to_lowercase()))
                .cloned()
                .collect();

            events.push(ResponsibilityEvent {
                sentence: record.sentence.clone(),
                timestamp: extraction.timestamp.clone(),
                entities: mentioned,
                warm_vector: record.warm_vector,
                cold_vector: record.cold_vector,
                phenomena,
            });
        }

        Self {
            accumulators,
            events,
        }
    }

    /// Whether `entity` counts as mentioned in `sentence`.
    pub fn mentioned_in(entity: &str, sentence: &str) -> bool {
        sentence.to_lowercase().contains(&entity.to_lowercase())
    }

    /// All accumulators in entity encounter order, zero-mention ones
    /// included.
    pub fn accumulators(&self) -> &[EntityAccumulator] {
        &self.accumulators
    }

    /// One event per sentence, in source order.
    pub fn events(&self) -> &[ResponsibilityEvent] {
        &self.events
    }

    /// Total entities considered, including those never mentioned.
    pub fn entity_count(&self) -> usize {
        self.accumulators.len()
    }

    /// Total events, equal to the extraction's sentence count.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
