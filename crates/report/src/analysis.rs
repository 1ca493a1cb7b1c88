use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use extract::{Entity, Relation, Triple, TripleKind, TripleStore};

use crate::checklist::{ChecklistItem, ChecklistReport, ChecklistScope, evaluate};
use crate::stats::Statistics;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub statistics: Statistics,
    pub top_entities: Vec<Entity>,
    pub focus: FocusSummary,
    pub checklist: ChecklistReport,
    pub findings: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocusSummary {
    pub entity: String,
    pub triple_count: usize,
    /// predicate -> (subject, object) pairs, relation triples only
    pub by_predicate: BTreeMap<String, Vec<(String, String)>>,
    pub connected_entities: Vec<String>,
}

impl FocusSummary {
    pub fn from_triples(entity: &str, focus_triples: &[Triple]) -> Self {
        let mut by_predicate: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
        let mut connected = BTreeSet::new();

        for triple in focus_triples.iter().filter(|t| t.kind == TripleKind::Relation) {
            by_predicate
                .entry(triple.predicate.clone())
                .or_default()
                .push((triple.subject.clone(), triple.object.clone()));

            if triple.subject == entity {
                connected.insert(triple.object.clone());
            } else if triple.object == entity {
                connected.insert(triple.subject.clone());
            }
        }

        Self {
            entity: entity.to_string(),
            triple_count: focus_triples.len(),
            by_predicate,
            connected_entities: connected.into_iter().collect(),
        }
    }
}

pub struct ReportGenerator {
    focus: String,
    checklist: Vec<ChecklistItem>,
    scope: ChecklistScope,
    top_n: usize,
}

impl ReportGenerator {
    pub fn new(focus: impl Into<String>, checklist: Vec<ChecklistItem>) -> Self {
        Self {
            focus: focus.into(),
            checklist,
            scope: ChecklistScope::Focus,
            top_n: 15,
        }
    }

    pub fn with_scope(mut self, scope: ChecklistScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn generate(
        &self,
        text: &str,
        entities: &[Entity],
        relations: &[Relation],
        store: &TripleStore,
    ) -> AnalysisReport {
        let focus_triples = store.focus_subset(&self.focus);
        let statistics =
            Statistics::compute(text, entities, relations, store.triples(), &focus_triples);

        let checklist = self.check(store);

        let findings = relations
            .iter()
            .filter(|r| r.subject == self.focus)
            .map(|r| format!("{} 的 {} 是 {}", r.subject, r.predicate, r.object))
            .collect();

        info!(
            focus = %self.focus,
            focus_triples = focus_triples.len(),
            checklist_found = checklist.found,
            checklist_total = checklist.total,
            "Report generated"
        );

        AnalysisReport {
            statistics,
            top_entities: entities.iter().take(self.top_n).cloned().collect(),
            focus: FocusSummary::from_triples(&self.focus, &focus_triples),
            checklist,
            findings,
        }
    }

    /// Score the checklist against a store, fresh or reloaded from an earlier run.
    pub fn check(&self, store: &TripleStore) -> ChecklistReport {
        match self.scope {
            ChecklistScope::Focus => {
                evaluate(&self.checklist, &store.focus_subset(&self.focus), self.scope)
            }
            ChecklistScope::All => evaluate(&self.checklist, store.triples(), self.scope),
        }
    }
}
