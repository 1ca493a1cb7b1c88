use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use extract::{Entity, Relation, Triple};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub text_length: usize,
    pub total_entities: usize,
    pub entity_types: BTreeMap<String, usize>,
    pub total_relations: usize,
    pub relation_types: BTreeMap<String, usize>,
    pub total_triples: usize,
    pub focus_triples: usize,
}

impl Statistics {
    pub fn compute(
        text: &str,
        entities: &[Entity],
        relations: &[Relation],
        triples: &[Triple],
        focus: &[Triple],
    ) -> Self {
        Self {
            text_length: text.chars().count(),
            total_entities: entities.len(),
            entity_types: count_by(entities.iter().map(|e| e.category.as_str())),
            total_relations: relations.len(),
            relation_types: count_by(relations.iter().map(|r| r.predicate.as_str())),
            total_triples: triples.len(),
            focus_triples: focus.len(),
        }
    }
}

fn count_by<'a>(labels: impl Iterator<Item = &'a str>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Label counts ordered for display: descending count, then label.
pub fn sorted_desc(counts: &BTreeMap<String, usize>) -> Vec<(&str, usize)> {
    let mut sorted: Vec<(&str, usize)> = counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    sorted
}
