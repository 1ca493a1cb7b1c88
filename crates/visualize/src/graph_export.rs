use petgraph::dot::Dot;
use petgraph::graph::DiGraph;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

use extract::{Entity, Triple, TripleKind};

#[derive(Debug, Clone)]
pub struct GraphData {
    pub entities: Vec<String>,
    pub edges: Vec<(usize, usize, String)>, // (source_idx, target_idx, predicate)
    pub entity_to_idx: HashMap<String, usize>,
}

impl GraphData {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
            edges: Vec::new(),
            entity_to_idx: HashMap::new(),
        }
    }

    /// Relation triples only; type assertions would link every node to its category.
    pub fn from_triples(triples: &[Triple]) -> Self {
        let mut graph_data = Self::new();

        for triple in triples.iter().filter(|t| t.kind == TripleKind::Relation) {
            let source_idx = graph_data.add_entity(triple.subject.clone());
            let target_idx = graph_data.add_entity(triple.object.clone());
            graph_data.add_edge(source_idx, target_idx, triple.predicate.clone());
        }

        graph_data
    }

    pub fn add_entity(&mut self, entity_id: String) -> usize {
        if let Some(&idx) = self.entity_to_idx.get(&entity_id) {
            return idx;
        }

        let idx = self.entities.len();
        self.entities.push(entity_id.clone());
        self.entity_to_idx.insert(entity_id, idx);
        idx
    }

    pub fn add_edge(&mut self, source: usize, target: usize, predicate: String) {
        self.edges.push((source, target, predicate));
    }

    /// In-degree plus out-degree.
    pub fn degree(&self, idx: usize) -> usize {
        self.edges
            .iter()
            .filter(|(s, t, _)| *s == idx || *t == idx)
            .count()
    }

    /// Entities sharing an edge with `name`, either direction, sorted.
    pub fn neighbors(&self, name: &str) -> Vec<&str> {
        let Some(&idx) = self.entity_to_idx.get(name) else {
            return Vec::new();
        };

        let mut neighbors = BTreeSet::new();
        for (s, t, _) in &self.edges {
            if *s == idx {
                neighbors.insert(self.entities[*t].as_str());
            } else if *t == idx {
                neighbors.insert(self.entities[*s].as_str());
            }
        }
        neighbors.into_iter().collect()
    }

    pub fn to_petgraph(&self) -> DiGraph<String, String> {
        let mut graph = DiGraph::with_capacity(self.entities.len(), self.edges.len());
        let nodes: Vec<_> = self
            .entities
            .iter()
            .map(|e| graph.add_node(e.clone()))
            .collect();

        for (s, t, predicate) in &self.edges {
            graph.add_edge(nodes[*s], nodes[*t], predicate.clone());
        }
        graph
    }

    /// Graphviz DOT with predicates as edge labels.
    pub fn to_dot(&self) -> String {
        format!("{}", Dot::new(&self.to_petgraph()))
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for GraphData {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Focus,
    Primary,
    Other,
}

impl NodeRole {
    pub fn color(&self) -> &'static str {
        match self {
            NodeRole::Focus => "#ff6b6b",
            NodeRole::Primary => "skyblue",
            NodeRole::Other => "lightgreen",
        }
    }
}

/// Decides how a node is drawn: the focus entity, entities of the primary
/// category (characters in the built-in catalog), and everything else.
pub struct NodeStyle<'a> {
    focus: &'a str,
    primary: HashSet<&'a str>,
}

impl<'a> NodeStyle<'a> {
    pub fn new(focus: &'a str, entities: &'a [Entity], primary_category: Option<&str>) -> Self {
        let primary = match primary_category {
            Some(category) => entities
                .iter()
                .filter(|e| e.category == category)
                .map(|e| e.text.as_str())
                .collect(),
            None => HashSet::new(),
        };

        Self { focus, primary }
    }

    pub fn role(&self, name: &str) -> NodeRole {
        if name == self.focus {
            NodeRole::Focus
        } else if self.primary.contains(name) {
            NodeRole::Primary
        } else {
            NodeRole::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extract::{Relation, TripleStore};

    fn sample_store() -> TripleStore {
        let relations = vec![
            Relation::new("李靖", "父亲", "哪吒"),
            Relation::new("哪吒", "师父", "太乙真人"),
            Relation::new("哪吒", "朋友", "敖丙"),
        ];
        let entities = vec![Entity {
            text: "哪吒".to_string(),
            category: "神话人物".to_string(),
            count: 3,
        }];
        TripleStore::assemble(&relations, &entities)
    }

    #[test]
    fn test_from_triples_skips_type_assertions() {
        let graph = GraphData::from_triples(sample_store().triples());

        assert_eq!(graph.entities.len(), 4);
        assert_eq!(graph.edges.len(), 3);
        assert!(!graph.entity_to_idx.contains_key("神话人物"));
        assert_eq!(graph.degree(graph.entity_to_idx["哪吒"]), 3);
        assert_eq!(graph.neighbors("哪吒"), vec!["太乙真人", "敖丙", "李靖"]);
        assert!(graph.neighbors("不存在").is_empty());
    }

    #[test]
    fn test_dot_export() {
        let dot = GraphData::from_triples(sample_store().triples()).to_dot();
        assert!(dot.starts_with("digraph {"));
        assert!(dot.contains("label = \"哪吒\""));
        assert!(dot.contains("label = \"师父\""));
    }

    #[test]
    fn test_node_roles() {
        let entities = vec![
            Entity {
                text: "李靖".to_string(),
                category: "神话人物".to_string(),
                count: 1,
            },
            Entity {
                text: "乾坤圈".to_string(),
                category: "概念".to_string(),
                count: 1,
            },
        ];
        let style = NodeStyle::new("哪吒", &entities, Some("神话人物"));
        assert_eq!(style.role("哪吒"), NodeRole::Focus);
        assert_eq!(style.role("李靖"), NodeRole::Primary);
        assert_eq!(style.role("乾坤圈"), NodeRole::Other);
    }
}
