//! Single-pair shortest paths over small, label-keyed weighted graphs.
//!
//! # Basic usage
//! ```
//! use sp_core::prelude::*;
//!
//! // Build the seven node demo graph (A..G)
//! let g = generate_demo_graph();
//!
//! let mut dijkstra = Dijkstra::new(&g);
//!
//! let sp = dijkstra.search_labels("A", "G").expect("No path found");
//! assert_eq!("A -> C -> B -> D -> E -> F -> G", sp.labels(&g).join(" -> "));
//! assert_eq!(17.0, sp.weight);
//! ```
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
