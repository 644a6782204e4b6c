use crate::constants::Weight;
use anyhow::Context;
use log::info;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Node identifier. Indexes into the graph's node table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash, Deserialize, Serialize,
)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A graph vertex. Carries nothing but its opaque label; all adjacency
/// lives in the graph's edge lists.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Node {
    pub label: String,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Node {
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
    #[serde(default = "Default::default")]
    pub is_bidir: bool,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
            is_bidir: false,
        }
    }

    pub fn new_bidir(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
            is_bidir: true,
        }
    }

    pub(crate) fn reverse(&self) -> Self {
        Edge {
            source: self.target,
            target: self.source,
            weight: self.weight,
            is_bidir: self.is_bidir,
        }
    }
}

/// Raw record of the edge list CSV format: `source,target,weight` with
/// string labels. Declaring both directions yields an undirected edge.
#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: String,
    target: String,
    weight: Weight,
}

/// Weighted graph with string-labeled nodes and a directed adjacency list.
///
/// Labels are interned: every label maps to a compact [`NodeIndex`], and all
/// edges are stored in terms of indices. Undirected semantics are opt-in per
/// edge (`is_bidir`); the graph itself never assumes symmetry.
#[derive(Debug, Clone)]
pub struct Graph {
    pub edges_out: Vec<Vec<EdgeIndex>>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    labels: FxHashMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            edges_out: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            labels: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            edges_out: Vec::with_capacity(num_nodes),
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            labels: FxHashMap::default(),
        }
    }

    /// Adds a node with the given label and returns its index.
    ///
    /// Labels are unique: adding a label that already exists returns the
    /// existing index instead of creating a second node.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeIndex {
        let label = label.into();
        if let Some(node_idx) = self.labels.get(&label) {
            return *node_idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());

        self.labels.insert(label.clone(), node_idx);
        self.nodes.push(Node::new(label));

        node_idx
    }

    /// Add a new `edge` to the graph.
    ///
    /// **Panics** if the source or target node does not exist, or if the
    /// weight is negative or NaN.
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            edge.source.index() < self.nodes.len(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.nodes.len(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.weight >= 0.0,
            "Edge weight must be non-negative, got {}",
            edge.weight
        );

        // If an edge already exists between source and target but the new edge
        // has a lower weight, replace the old edge with the new one (update the weight)
        for edge_idx in self.edges_out[edge.source.index()].iter() {
            let old_edge = &self.edges[edge_idx.index()];
            if edge.source == old_edge.source
                && edge.target == old_edge.target
                && edge.weight < old_edge.weight
            {
                self.edges[edge_idx.index()].weight = edge.weight;
                return *edge_idx;
            }
        }

        self.edges_out[edge.source.index()].push(edge_idx);

        if edge.is_bidir {
            self.edges_out[edge.target.index()].push(edge_idx);
        }

        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Resolves a label to its node index, if the label is known.
    pub fn node_index(&self, label: &str) -> Option<NodeIndex> {
        self.labels.get(label).copied()
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&Node> {
        self.nodes.get(node_idx.index())
    }

    /// Label of the node at `node_idx`.
    ///
    /// **Panics** if the index is out of bounds.
    pub fn label(&self, node_idx: NodeIndex) -> &str {
        &self.nodes[node_idx.index()].label
    }

    /// Returns an iterator over all nodes of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Returns an iterator over all edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Iterates over the outgoing edges of `node_idx`. Bidirectional edges
    /// stored in the opposite orientation are reversed on the fly, so every
    /// yielded edge has `node_idx` as its source.
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, Edge)> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| {
                let edge = self.edges[edge_idx.index()];
                if edge.source == node_idx {
                    (*edge_idx, edge)
                } else {
                    (*edge_idx, edge.reverse())
                }
            })
    }

    /// Builds a graph from an edge list CSV with header `source,target,weight`.
    ///
    /// Source and target are node labels; unknown labels are added on first
    /// use. Each record is a directed edge, so undirected graphs declare both
    /// directions.
    pub fn from_csv(path_to_edges: &Path) -> anyhow::Result<Self> {
        info!("Parsing edge list: {:?}", path_to_edges);

        let mut g = Graph::new();

        let mut reader = csv::Reader::from_path(path_to_edges)?;
        for result in reader.deserialize() {
            let record: EdgeRecord = result.context("Failed to parse edge record")?;
            let source = g.add_node(record.source);
            let target = g.add_node(record.target);
            g.add_edge(Edge::new(source, target, record.weight));
        }

        info!(
            "Graph has {} nodes and {} edges",
            g.nodes.len(),
            g.edges.len()
        );
        Ok(g)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create an edge between two node indices with a weight
///
/// edge!(a, b, 3.0) Returns an edge traversable in both directions
///
/// edge!(a => b, 3.0) Returns a directed edge
#[macro_export]
macro_rules! edge {
    ($source:expr => $target:expr, $weight:expr) => {
        $crate::graph::Edge::new($source, $target, $weight)
    };
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new_bidir($source, $target, $weight)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_interned() {
        let mut g = Graph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");

        assert_ne!(a, b);
        assert_eq!(a, g.add_node("A"));
        assert_eq!(Some(b), g.node_index("B"));
        assert_eq!(None, g.node_index("Z"));
        assert_eq!("A", g.label(a));
        assert_eq!(2, g.nodes.len());
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = Graph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");

        let edge1 = g.add_edge(edge!(a => b, 2.0));
        let _edge2 = g.add_edge(edge!(a => b, 1.0));

        assert_eq!(g.edges.len(), 1);
        assert_eq!(g.edges[edge1.index()].weight, 1.0);
    }

    #[test]
    fn bidir_edge_is_visible_from_both_endpoints() {
        let mut g = Graph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");

        g.add_edge(edge!(a, b, 4.0));

        let (_, from_a) = g.neighbors_outgoing(a).next().unwrap();
        assert_eq!(b, from_a.target);

        let (_, from_b) = g.neighbors_outgoing(b).next().unwrap();
        assert_eq!(a, from_b.target);
        assert_eq!(4.0, from_b.weight);

        assert_eq!(1, g.edges.len());
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_weights_are_rejected() {
        let mut g = Graph::new();
        let a = g.add_node("A");
        let b = g.add_node("B");

        g.add_edge(edge!(a => b, -1.0));
    }

    #[test]
    fn read_from_csv() {
        let graph = Graph::from_csv(
            &Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data/edges.csv"),
        )
        .unwrap();

        assert_eq!(graph.nodes.len(), 7);
        // Both directions are declared explicitly in the file
        assert_eq!(graph.edges.len(), 20);

        let a = graph.node_index("A").unwrap();
        let g_node = graph.node_index("G").unwrap();
        assert_eq!(2, graph.edges_out[a.index()].len());
        assert_eq!(1, graph.edges_out[g_node.index()].len());
    }
}
