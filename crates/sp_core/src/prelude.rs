//! Re-exports of the most commonly used items in `sp_core`.
pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPath;

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::util::test_graphs::generate_demo_graph;
