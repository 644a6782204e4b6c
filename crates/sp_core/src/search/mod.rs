use rustc_hash::FxHashMap;

use crate::constants::Weight;
use crate::graph::NodeIndex;

use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Walks predecessor links backward from `target` to `source` and returns
/// the path in forward order. `None` if `target` was never reached.
pub fn reconstruct_path(
    target: NodeIndex,
    source: NodeIndex,
    node_data: &FxHashMap<NodeIndex, (Weight, Option<NodeIndex>)>,
) -> Option<ShortestPath> {
    let mut path = vec![target];
    let weight = node_data.get(&target)?.0;

    let mut previous_node = node_data.get(&target)?.1?;

    while let Some(prev_node) = node_data.get(&previous_node)?.1 {
        path.push(previous_node);
        previous_node = prev_node;
    }
    path.push(source);
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_labels: Vec<&str>,
    expected_weight: Weight,
    graph: &crate::graph::Graph,
    sp: Option<ShortestPath>,
) {
    let sp = sp.expect("Expected a path");
    assert_eq!(expected_labels, sp.labels(graph));
    approx::assert_abs_diff_eq!(expected_weight, sp.weight, epsilon = 1e-9);
}

#[cfg(test)]
pub(crate) fn assert_no_path(sp: Option<ShortestPath>) {
    assert_eq!(None, sp);
}
