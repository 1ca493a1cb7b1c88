use std::collections::HashSet;
use tracing::debug;

use crate::normalizer::normalize_slot;
use crate::rules::RelationRuleSet;
use crate::schema::{Entity, Relation, TripleKey};

pub struct RelationExtractor<'a> {
    rules: &'a RelationRuleSet,
}

impl<'a> RelationExtractor<'a> {
    pub fn new(rules: &'a RelationRuleSet) -> Self {
        Self { rules }
    }

    /// Extract relations between matched entities.
    ///
    /// Rule matches are kept only when both trimmed slots equal a matched
    /// entity text. Known relations follow, under the same membership check.
    /// The first occurrence of a (subject, predicate, object) key wins; order
    /// is rule order, then match order, then known-relation order.
    pub fn extract(&self, text: &str, entities: &[Entity]) -> Vec<Relation> {
        let known: HashSet<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        let mut seen: HashSet<TripleKey> = HashSet::new();
        let mut relations = Vec::new();

        for rule in self.rules.rules() {
            for (subject, object) in rule.captures(text) {
                let subject = normalize_slot(subject);
                let object = normalize_slot(object);

                if !known.contains(subject) || !known.contains(object) {
                    continue;
                }

                let relation = Relation::new(subject, rule.predicate(), object);
                if seen.insert(relation.key()) {
                    debug!(
                        subject,
                        predicate = rule.predicate(),
                        object,
                        "Extracted relation"
                    );
                    relations.push(relation);
                }
            }
        }

        for relation in self.rules.known_relations() {
            if known.contains(relation.subject.as_str())
                && known.contains(relation.object.as_str())
                && seen.insert(relation.key())
            {
                debug!(
                    subject = %relation.subject,
                    predicate = %relation.predicate,
                    object = %relation.object,
                    "Asserted known relation"
                );
                relations.push(relation.clone());
            }
        }

        relations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EntityCatalog;
    use crate::matcher::EntityMatcher;
    use crate::rules::RuleSpec;

    fn kinship_rules(known: Vec<Relation>) -> RelationRuleSet {
        RelationRuleSet::from_specs(
            &[
                RuleSpec::new(r"([^，。]+?)是([^，。]+?)的父亲", "父亲"),
                RuleSpec::new(r"([^，。]+?)是([^，。]+?)的师父", "师父"),
            ],
            known,
        )
        .unwrap()
    }

    fn entities_in(text: &str) -> Vec<Entity> {
        let catalog = EntityCatalog::new().with_category("神话人物", ["哪吒", "李靖", "太乙真人"]);
        EntityMatcher::new(&catalog).find_entities(text)
    }

    #[test]
    fn test_father_and_master_scenario() {
        let text = "李靖是哪吒的父亲。太乙真人是哪吒的师父。";
        let entities = entities_in(text);
        assert_eq!(entities.len(), 3);
        assert!(entities.iter().all(|e| e.count == 1));

        let rules = kinship_rules(Vec::new());
        let relations = RelationExtractor::new(&rules).extract(text, &entities);

        assert_eq!(
            relations,
            vec![
                Relation::new("李靖", "父亲", "哪吒"),
                Relation::new("太乙真人", "师父", "哪吒"),
            ]
        );
    }

    #[test]
    fn test_unknown_endpoints_discarded() {
        let text = "殷夫人是哪吒的父亲。李靖是哪吒的父亲。";
        let entities = entities_in(text);
        let rules = kinship_rules(Vec::new());
        let relations = RelationExtractor::new(&rules).extract(text, &entities);

        assert_eq!(relations, vec![Relation::new("李靖", "父亲", "哪吒")]);
    }

    #[test]
    fn test_duplicates_dropped_first_wins() {
        let text = "李靖是哪吒的父亲。李靖是哪吒的父亲，李靖是哪吒的父亲。";
        let entities = entities_in(text);
        let rules = kinship_rules(vec![Relation::new("李靖", "父亲", "哪吒")]);
        let relations = RelationExtractor::new(&rules).extract(text, &entities);

        assert_eq!(relations.len(), 1);
    }

    #[test]
    fn test_known_relations_need_both_endpoints() {
        let text = "哪吒与李靖";
        let entities = entities_in(text);
        let rules = kinship_rules(vec![
            Relation::new("哪吒", "父亲", "李靖"),
            Relation::new("哪吒", "师父", "太乙真人"),
        ]);
        let relations = RelationExtractor::new(&rules).extract(text, &entities);

        assert_eq!(relations, vec![Relation::new("哪吒", "父亲", "李靖")]);
    }

    #[test]
    fn test_known_relations_appended_after_rules() {
        let text = "太乙真人是哪吒的师父。李靖";
        let entities = entities_in(text);
        let rules = kinship_rules(vec![Relation::new("哪吒", "父亲", "李靖")]);
        let relations = RelationExtractor::new(&rules).extract(text, &entities);

        assert_eq!(
            relations,
            vec![
                Relation::new("太乙真人", "师父", "哪吒"),
                Relation::new("哪吒", "父亲", "李靖"),
            ]
        );
    }

    #[test]
    fn test_empty_text() {
        let rules = kinship_rules(vec![Relation::new("哪吒", "父亲", "李靖")]);
        let relations = RelationExtractor::new(&rules).extract("", &entities_in(""));
        assert!(relations.is_empty());
    }

    #[test]
    fn test_every_relation_endpoint_is_an_entity() {
        let text = "李靖是哪吒的父亲，太乙真人是哪吒的师父。敖丙是哪吒的父亲。";
        let entities = entities_in(text);
        let rules = kinship_rules(vec![Relation::new("敖丙", "朋友", "哪吒")]);
        let relations = RelationExtractor::new(&rules).extract(text, &entities);

        let texts: HashSet<&str> = entities.iter().map(|e| e.text.as_str()).collect();
        assert!(!relations.is_empty());
        for relation in &relations {
            assert!(texts.contains(relation.subject.as_str()));
            assert!(texts.contains(relation.object.as_str()));
        }
    }
}
