pub mod catalog;
pub mod defaults;
pub mod error;
pub mod matcher;
pub mod normalizer;
pub mod relations;
pub mod rules;
pub mod schema;
pub mod store;

pub use catalog::{CatalogCategory, EntityCatalog};
pub use error::{ExtractError, Result};
pub use matcher::EntityMatcher;
pub use normalizer::normalize_slot;
pub use relations::RelationExtractor;
pub use rules::{RelationRule, RelationRuleSet, RuleSpec};
pub use schema::{Entity, ExtractionResult, Relation, Triple, TripleKey, TripleKind};
pub use store::{TYPE_PREDICATE, TripleStore};

use tracing::info;

pub struct Extractor {
    catalog: EntityCatalog,
    rules: RelationRuleSet,
    type_predicate: String,
}

impl Extractor {
    pub fn new(catalog: EntityCatalog, rules: RelationRuleSet) -> Self {
        Self {
            catalog,
            rules,
            type_predicate: TYPE_PREDICATE.to_string(),
        }
    }

    pub fn with_type_predicate(mut self, predicate: impl Into<String>) -> Self {
        self.type_predicate = predicate.into();
        self
    }

    /// Built-in catalog, rules and known relations.
    pub fn builtin() -> Result<Self> {
        let rules =
            RelationRuleSet::from_specs(&defaults::rule_specs(), defaults::known_relations())?;
        Ok(Self::new(defaults::catalog(), rules))
    }

    /// Extract entities and relations from the full text of a run
    pub fn extract_from_text(&self, text: &str) -> ExtractionResult {
        let entities = EntityMatcher::new(&self.catalog).find_entities(text);
        let relations = RelationExtractor::new(&self.rules).extract(text, &entities);

        info!(
            entities = entities.len(),
            relations = relations.len(),
            "Extraction finished"
        );

        ExtractionResult {
            entities,
            relations,
        }
    }

    pub fn build_store(&self, result: &ExtractionResult) -> TripleStore {
        TripleStore::assemble_with(&result.relations, &result.entities, &self.type_predicate)
    }
}
