use crate::{constants::Weight, graph::Graph, graph::NodeIndex};

/// Result of a single-pair query: the node sequence from source to target
/// (inclusive) and the total weight along it. Immutable once returned.
#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    pub nodes: Vec<NodeIndex>,
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<NodeIndex>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }

    /// Resolves the path back to node labels for display.
    pub fn labels<'a>(&self, graph: &'a Graph) -> Vec<&'a str> {
        self.nodes.iter().map(|n| graph.label(*n)).collect()
    }
}
