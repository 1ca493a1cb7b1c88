use std::collections::HashSet;
use tracing::debug;

use crate::schema::{Entity, Relation, Triple, TripleKind};

/// Predicate used for entity type assertions.
pub const TYPE_PREDICATE: &str = "类型";

/// The triples of one run: relation triples first, then one type assertion
/// per matched entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripleStore {
    triples: Vec<Triple>,
}

impl TripleStore {
    pub fn assemble(relations: &[Relation], entities: &[Entity]) -> Self {
        Self::assemble_with(relations, entities, TYPE_PREDICATE)
    }

    pub fn assemble_with(
        relations: &[Relation],
        entities: &[Entity],
        type_predicate: &str,
    ) -> Self {
        let mut seen = HashSet::new();
        let mut triples = Vec::with_capacity(relations.len() + entities.len());

        let candidates = relations
            .iter()
            .map(Triple::relation)
            .chain(entities.iter().map(|e| Triple::entity_type(e, type_predicate)));

        for triple in candidates {
            if seen.insert(triple.key()) {
                triples.push(triple);
            } else {
                debug!(
                    subject = %triple.subject,
                    predicate = %triple.predicate,
                    "Dropped duplicate triple"
                );
            }
        }

        Self { triples }
    }

    /// Rebuild a store from previously written triples.
    pub fn from_triples(triples: Vec<Triple>) -> Self {
        Self { triples }
    }

    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    pub fn relations(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter().filter(|t| t.kind == TripleKind::Relation)
    }

    /// Triples whose subject or object is exactly `focus`.
    pub fn focus_subset(&self, focus: &str) -> Vec<Triple> {
        self.triples
            .iter()
            .filter(|t| t.touches(focus))
            .cloned()
            .collect()
    }

    pub fn contains(&self, subject: &str, predicate: &str, object: &str) -> bool {
        self.triples.iter().any(|t| t.matches(subject, predicate, object))
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }
}
