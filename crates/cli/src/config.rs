use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use extract::{
    EntityCatalog, Extractor, Relation, RelationRuleSet, RuleSpec, TYPE_PREDICATE, defaults,
};
use report::{ChecklistItem, ChecklistScope, ReportGenerator, default_checklist};
use visualize::RenderOptions;

/// Everything a run can be tuned with. Missing fields fall back to the
/// built-in Nezha vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub focus: String,
    pub type_predicate: String,
    pub catalog: EntityCatalog,
    pub rules: Vec<RuleSpec>,
    pub known_relations: Vec<Relation>,
    pub checklist: Vec<ChecklistItem>,
    pub checklist_scope: ChecklistScope,
    pub top_n: usize,
    pub render: RenderOptions,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            focus: defaults::FOCUS_ENTITY.to_string(),
            type_predicate: TYPE_PREDICATE.to_string(),
            catalog: defaults::catalog(),
            rules: defaults::rule_specs(),
            known_relations: defaults::known_relations(),
            checklist: default_checklist(),
            checklist_scope: ChecklistScope::Focus,
            top_n: 15,
            render: RenderOptions::default(),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Compiles the rules; a bad pattern fails here, before any text is read.
    pub fn extractor(&self) -> Result<Extractor> {
        let rules = RelationRuleSet::from_specs(&self.rules, self.known_relations.clone())
            .context("compiling relation rules")?;

        Ok(Extractor::new(self.catalog.clone(), rules)
            .with_type_predicate(self.type_predicate.clone()))
    }

    pub fn report_generator(&self) -> ReportGenerator {
        ReportGenerator::new(self.focus.clone(), self.checklist.clone())
            .with_scope(self.checklist_scope)
            .with_top_n(self.top_n)
    }

    /// Category drawn in the primary colour: the first one in the catalog.
    pub fn primary_category(&self) -> Option<&str> {
        self.catalog.categories().first().map(|c| c.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_survives_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let back: AppConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(back.focus, "哪吒");
        assert_eq!(back.catalog, config.catalog);
        assert_eq!(back.rules, config.rules);
        assert_eq!(back.checklist.len(), 9);
        assert_eq!(back.primary_category(), Some("神话人物"));
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"focus": "敖丙", "checklist_scope": "all",
                "render": {{"plots": false, "html": true, "dot": false}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.focus, "敖丙");
        assert_eq!(config.checklist_scope, ChecklistScope::All);
        assert!(!config.render.plots);
        assert_eq!(config.type_predicate, "类型");
        assert_eq!(config.rules.len(), 10);
    }

    #[test]
    fn test_bad_rule_fails_before_extraction() {
        let config = AppConfig {
            rules: vec![RuleSpec::new("(只有一组)", "父亲")],
            ..AppConfig::default()
        };
        assert!(config.extractor().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        assert!(AppConfig::load(Path::new("/nonexistent/kgraph.json")).is_err());
    }
}
