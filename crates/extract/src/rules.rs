use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Result};
use crate::schema::Relation;

/// Configuration form of a rule: an uncompiled pattern plus its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub pattern: String,
    pub predicate: String,
}

impl RuleSpec {
    pub fn new(pattern: &str, predicate: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            predicate: predicate.to_string(),
        }
    }
}

/// A compiled pattern whose first and second groups capture subject and object.
#[derive(Debug, Clone)]
pub struct RelationRule {
    pattern: Regex,
    predicate: String,
}

impl RelationRule {
    pub fn new(pattern: &str, predicate: &str) -> Result<Self> {
        if predicate.trim().is_empty() {
            return Err(ExtractError::EmptyPredicate(pattern.to_string()));
        }

        let regex = Regex::new(pattern).map_err(|source| ExtractError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        // captures_len counts the implicit whole-match group
        let found = regex.captures_len() - 1;
        if found != 2 {
            return Err(ExtractError::WrongCaptureCount {
                pattern: pattern.to_string(),
                found,
            });
        }

        Ok(Self {
            pattern: regex,
            predicate: predicate.to_string(),
        })
    }

    pub fn predicate(&self) -> &str {
        &self.predicate
    }

    /// Raw (subject, object) slot pairs for every non-overlapping match.
    pub fn captures<'t>(&self, text: &'t str) -> impl Iterator<Item = (&'t str, &'t str)> {
        self.pattern.captures_iter(text).filter_map(|caps| {
            let subject = caps.get(1)?.as_str();
            let object = caps.get(2)?.as_str();
            Some((subject, object))
        })
    }

    pub fn to_spec(&self) -> RuleSpec {
        RuleSpec::new(self.pattern.as_str(), &self.predicate)
    }
}

/// Ordered rules plus the known relations asserted once both ends are matched.
#[derive(Debug, Clone, Default)]
pub struct RelationRuleSet {
    rules: Vec<RelationRule>,
    known_relations: Vec<Relation>,
}

impl RelationRuleSet {
    pub fn new(rules: Vec<RelationRule>, known_relations: Vec<Relation>) -> Self {
        Self {
            rules,
            known_relations,
        }
    }

    pub fn from_specs(specs: &[RuleSpec], known_relations: Vec<Relation>) -> Result<Self> {
        let rules = specs
            .iter()
            .map(|spec| RelationRule::new(&spec.pattern, &spec.predicate))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(rules, known_relations))
    }

    pub fn rules(&self) -> &[RelationRule] {
        &self.rules
    }

    pub fn known_relations(&self) -> &[Relation] {
        &self.known_relations
    }

    pub fn specs(&self) -> Vec<RuleSpec> {
        self.rules.iter().map(RelationRule::to_spec).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_group_count() {
        let err = RelationRule::new(r"([^，。]+?)的父亲", "父亲").unwrap_err();
        assert!(matches!(err, ExtractError::WrongCaptureCount { found: 1, .. }));

        let err = RelationRule::new(r"(a)(b)(c)", "x").unwrap_err();
        assert!(matches!(err, ExtractError::WrongCaptureCount { found: 3, .. }));
    }

    #[test]
    fn test_rejects_bad_regex_and_empty_predicate() {
        assert!(matches!(
            RelationRule::new(r"(a(b)", "x").unwrap_err(),
            ExtractError::InvalidPattern { .. }
        ));
        assert!(matches!(
            RelationRule::new(r"(a)(b)", "  ").unwrap_err(),
            ExtractError::EmptyPredicate(_)
        ));
    }

    #[test]
    fn test_captures_are_non_overlapping() {
        let rule = RelationRule::new(r"([^，。]+?)是([^，。]+?)的父亲", "父亲").unwrap();
        let pairs: Vec<_> = rule
            .captures("李靖是哪吒的父亲。李靖是金吒的父亲。")
            .collect();
        assert_eq!(pairs, vec![("李靖", "哪吒"), ("李靖", "金吒")]);
    }

    #[test]
    fn test_from_specs_keeps_order() {
        let specs = vec![RuleSpec::new(r"(.)是(.)", "是"), RuleSpec::new(r"(.)和(.)", "和")];
        let set = RelationRuleSet::from_specs(&specs, Vec::new()).unwrap();
        assert_eq!(set.specs(), specs);
    }
}
