pub mod cooccurrence;
pub mod graph_export;
pub mod html;
pub mod plots;

pub use cooccurrence::CooccurrenceGraph;
pub use graph_export::{GraphData, NodeRole, NodeStyle};
pub use html::{render_cooccurrence_html, render_relation_html};
pub use plots::generate_plots;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use extract::{Entity, TripleStore};
use report::AnalysisReport;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderOptions {
    pub plots: bool,
    pub html: bool,
    pub dot: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            plots: true,
            html: true,
            dot: true,
        }
    }
}

/// What a render pass draws from.
pub struct RenderInput<'a> {
    pub text: &'a str,
    pub entities: &'a [Entity],
    pub store: &'a TripleStore,
    pub report: &'a AnalysisReport,
    /// Category whose members get the primary node colour
    pub primary_category: Option<&'a str>,
}

pub struct Renderer {
    output_dir: PathBuf,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(output_dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self {
            output_dir: output_dir.into(),
            options,
        }
    }

    /// Writes every enabled figure and returns the paths in write order.
    pub fn render(&self, input: &RenderInput<'_>) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("creating {}", self.output_dir.display()))?;

        let focus = input.report.focus.entity.as_str();
        let style = NodeStyle::new(focus, input.entities, input.primary_category);
        let graph = GraphData::from_triples(input.store.triples());
        let mut written = Vec::new();

        if self.options.html {
            let title = format!("{} 关系图谱", focus);
            let path = self.output_dir.join("relation_graph.html");
            write_file(&path, &render_relation_html(&graph, &style, &title))?;
            written.push(path);

            let cooccurrence = CooccurrenceGraph::build(input.text, input.entities);
            let title = format!("{} 实体共现网络", focus);
            let path = self.output_dir.join("cooccurrence.html");
            write_file(&path, &render_cooccurrence_html(&cooccurrence, &style, &title))?;
            written.push(path);
        }

        if self.options.dot {
            let path = self.output_dir.join("relation_graph.dot");
            write_file(&path, &graph.to_dot())?;
            written.push(path);
        }

        if self.options.plots {
            written.extend(generate_plots(input.report, &self.output_dir)?);
        }

        info!(
            nodes = graph.entities.len(),
            edges = graph.edges.len(),
            files = written.len(),
            "Rendered graph views"
        );
        Ok(written)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::Relation;
    use report::ReportGenerator;

    #[test]
    fn test_render_html_and_dot() {
        let dir = tempfile::tempdir().unwrap();
        let text = "李靖是哪吒的父亲\n哪吒与敖丙是朋友";
        let entities = vec![
            Entity {
                text: "哪吒".to_string(),
                category: "神话人物".to_string(),
                count: 2,
            },
            Entity {
                text: "李靖".to_string(),
                category: "神话人物".to_string(),
                count: 1,
            },
            Entity {
                text: "敖丙".to_string(),
                category: "神话人物".to_string(),
                count: 1,
            },
        ];
        let relations = vec![
            Relation::new("李靖", "父亲", "哪吒"),
            Relation::new("哪吒", "朋友", "敖丙"),
        ];
        let store = TripleStore::assemble(&relations, &entities);
        let report =
            ReportGenerator::new("哪吒", Vec::new()).generate(text, &entities, &relations, &store);

        let options = RenderOptions {
            plots: false,
            ..RenderOptions::default()
        };
        let renderer = Renderer::new(dir.path(), options);
        let written = renderer
            .render(&RenderInput {
                text,
                entities: &entities,
                store: &store,
                report: &report,
                primary_category: Some("神话人物"),
            })
            .unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["relation_graph.html", "cooccurrence.html", "relation_graph.dot"]);

        let html = std::fs::read_to_string(dir.path().join("relation_graph.html")).unwrap();
        assert!(html.contains("哪吒 关系图谱"));
        assert!(html.contains(r#""color":"skyblue""#));

        let dot = std::fs::read_to_string(dir.path().join("relation_graph.dot")).unwrap();
        assert!(dot.contains("label = \"朋友\""));
        assert!(!dot.contains("神话人物"));
    }

    #[test]
    fn test_render_nothing_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let store = TripleStore::assemble(&[], &[]);
        let report = ReportGenerator::new("哪吒", Vec::new()).generate("", &[], &[], &store);
        let options = RenderOptions {
            plots: false,
            html: false,
            dot: false,
        };

        let written = Renderer::new(dir.path(), options)
            .render(&RenderInput {
                text: "",
                entities: &[],
                store: &store,
                report: &report,
                primary_category: None,
            })
            .unwrap();
        assert!(written.is_empty());
    }
}
