use crate::{edge, graph::Graph};

/// The seven node demo graph. All edges are undirected:
///
/// A-B=4, A-C=2, B-C=1, B-D=5, C-D=8, C-E=10, D-E=2, D-F=6, E-F=3, F-G=4
pub fn generate_demo_graph() -> Graph {
    let mut graph = Graph::new();

    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    let d = graph.add_node("D");
    let e = graph.add_node("E");
    let f = graph.add_node("F");
    let g = graph.add_node("G");

    graph.add_edge(edge!(a, b, 4.0)); // A <=> B
    graph.add_edge(edge!(a, c, 2.0)); // A <=> C
    graph.add_edge(edge!(b, c, 1.0)); // B <=> C
    graph.add_edge(edge!(b, d, 5.0)); // B <=> D
    graph.add_edge(edge!(c, d, 8.0)); // C <=> D
    graph.add_edge(edge!(c, e, 10.0)); // C <=> E
    graph.add_edge(edge!(d, e, 2.0)); // D <=> E
    graph.add_edge(edge!(d, f, 6.0)); // D <=> F
    graph.add_edge(edge!(e, f, 3.0)); // E <=> F
    graph.add_edge(edge!(f, g, 4.0)); // F <=> G

    graph
}

/// Two components:
///
/// A - B - C     X - Y
pub fn generate_disconnected_graph() -> Graph {
    let mut graph = Graph::new();

    let a = graph.add_node("A");
    let b = graph.add_node("B");
    let c = graph.add_node("C");
    let x = graph.add_node("X");
    let y = graph.add_node("Y");

    graph.add_edge(edge!(a, b, 1.0));
    graph.add_edge(edge!(b, c, 2.0));
    graph.add_edge(edge!(x, y, 3.0));

    graph
}
