use std::collections::BTreeMap;

use extract::Entity;

/// Undirected entity network weighted by how many lines mention both ends.
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<(usize, usize, usize)>, // (a_idx, b_idx, weight), a_idx < b_idx
}

impl CooccurrenceGraph {
    pub fn build(text: &str, entities: &[Entity]) -> Self {
        // one node per distinct text, in entity order
        let mut nodes: Vec<String> = Vec::new();
        for entity in entities {
            if !nodes.contains(&entity.text) {
                nodes.push(entity.text.clone());
            }
        }

        let mut weights: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        for line in text.lines() {
            let present: Vec<usize> = nodes
                .iter()
                .enumerate()
                .filter(|(_, name)| line.contains(name.as_str()))
                .map(|(idx, _)| idx)
                .collect();

            for (i, &a) in present.iter().enumerate() {
                for &b in &present[i + 1..] {
                    *weights.entry((a, b)).or_insert(0) += 1;
                }
            }
        }

        let edges = weights
            .into_iter()
            .map(|((a, b), weight)| (a, b, weight))
            .collect();

        Self { nodes, edges }
    }

    pub fn weight(&self, a: &str, b: &str) -> usize {
        let position = |name: &str| self.nodes.iter().position(|n| n == name);
        let (Some(a), Some(b)) = (position(a), position(b)) else {
            return 0;
        };
        let key = (a.min(b), a.max(b));

        self.edges
            .iter()
            .find(|(x, y, _)| (*x, *y) == key)
            .map(|(_, _, w)| *w)
            .unwrap_or(0)
    }

    /// Sum of edge weights touching a node.
    pub fn strength(&self, idx: usize) -> usize {
        self.edges
            .iter()
            .filter(|(a, b, _)| *a == idx || *b == idx)
            .map(|(_, _, w)| w)
            .sum()
    }
}
