use serde::{Deserialize, Serialize};

use extract::Triple;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub subject: String,
    pub predicate: String,
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ChecklistItem {
    pub fn new(subject: &str, predicate: &str, object: &str) -> Self {
        Self {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
            object: object.to_string(),
            description: None,
        }
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn is_found_in(&self, triples: &[Triple]) -> bool {
        triples
            .iter()
            .any(|t| t.matches(&self.subject, &self.predicate, &self.object))
    }
}

/// Which triples the checklist is scored against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChecklistScope {
    #[default]
    Focus,
    All,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistResult {
    #[serde(flatten)]
    pub item: ChecklistItem,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistReport {
    pub scope: ChecklistScope,
    pub results: Vec<ChecklistResult>,
    pub found: usize,
    pub total: usize,
    pub rate: f64,
}

/// Exact (subject, predicate, object) membership for every item. Direction is
/// not normalised: a swapped subject/object never counts as found.
pub fn evaluate(
    items: &[ChecklistItem],
    triples: &[Triple],
    scope: ChecklistScope,
) -> ChecklistReport {
    let results: Vec<ChecklistResult> = items
        .iter()
        .map(|item| ChecklistResult {
            item: item.clone(),
            found: item.is_found_in(triples),
        })
        .collect();

    let found = results.iter().filter(|r| r.found).count();
    let total = results.len();
    let rate = if total > 0 {
        found as f64 / total as f64
    } else {
        0.0
    };

    ChecklistReport {
        scope,
        results,
        found,
        total,
        rate,
    }
}

/// Key knowledge expected from the Nezha corpus.
pub fn default_checklist() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new("哪吒", "父亲", "李靖").described("家庭关系"),
        ChecklistItem::new("哪吒", "师父", "太乙真人").described("师徒关系"),
        ChecklistItem::new("哪吒", "出现于", "《封神演义》").described("作品归属"),
        ChecklistItem::new("吴承恩", "创作", "《西游记》").described("文学创作"),
        ChecklistItem::new("许仲琳", "创作", "《封神演义》").described("文学创作"),
        ChecklistItem::new("饺子", "导演", "《哪吒之魔童降世》").described("影视创作"),
        ChecklistItem::new("《哪吒之魔童降世》", "改编自", "《封神演义》").described("作品改编"),
        ChecklistItem::new("哪吒", "敌人", "敖丙").described("敌对关系"),
        ChecklistItem::new("哪吒", "朋友", "敖丙").described("朋友关系"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::{Relation, TripleStore};

    fn store(relations: &[Relation]) -> TripleStore {
        TripleStore::assemble(relations, &[])
    }

    #[test]
    fn test_direction_mismatch_not_found() {
        let store = store(&[
            Relation::new("李靖", "父亲", "哪吒"),
            Relation::new("太乙真人", "师父", "哪吒"),
        ]);
        let items = vec![ChecklistItem::new("哪吒", "父亲", "李靖")];

        let report = evaluate(&items, &store.focus_subset("哪吒"), ChecklistScope::Focus);
        assert_eq!(report.found, 0);
        assert_eq!(report.total, 1);
        assert!(!report.results[0].found);
    }

    #[test]
    fn test_adding_matching_triple_increments_by_one() {
        let items = default_checklist();
        let mut relations = vec![Relation::new("李靖", "父亲", "哪吒")];
        let before = evaluate(&items, store(&relations).triples(), ChecklistScope::All);

        relations.push(Relation::new("哪吒", "朋友", "敖丙"));
        let after = evaluate(&items, store(&relations).triples(), ChecklistScope::All);

        assert_eq!(after.found, before.found + 1);
    }

    #[test]
    fn test_empty_inputs() {
        let report = evaluate(&default_checklist(), &[], ChecklistScope::Focus);
        assert_eq!(report.found, 0);
        assert_eq!(report.total, 9);
        assert_eq!(report.rate, 0.0);

        let report = evaluate(&[], &[], ChecklistScope::Focus);
        assert_eq!(report.total, 0);
        assert_eq!(report.rate, 0.0);
    }

    #[test]
    fn test_rate() {
        let store = store(&[Relation::new("哪吒", "父亲", "李靖")]);
        let items = vec![
            ChecklistItem::new("哪吒", "父亲", "李靖"),
            ChecklistItem::new("哪吒", "母亲", "殷夫人"),
        ];
        let report = evaluate(&items, store.triples(), ChecklistScope::All);
        assert_eq!(report.found, 1);
        assert!((report.rate - 0.5).abs() < f64::EPSILON);
    }
}
