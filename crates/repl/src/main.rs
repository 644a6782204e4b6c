//! Interactive front end for the shortest path core.
//!
//! Starts with the built-in demo graph, or a graph loaded from an edge list
//! CSV (`source,target,weight`) given as the first argument.
use std::path::Path;

use reedline_repl_rs::clap::{Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use sp_core::prelude::*;

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "Graph has {} nodes and {} edges",
        context.graph.nodes.len(),
        context.graph.edges.len()
    )))
}

/// List all node labels
fn nodes(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let labels: Vec<&str> = context.graph.nodes().map(|n| n.label.as_str()).collect();
    Ok(Some(labels.join(", ")))
}

fn route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let from = args.get_one::<String>("from").unwrap().trim();
    let to = args.get_one::<String>("to").unwrap().trim();

    // Query validation happens here, the core never sees these cases
    if from.is_empty() || to.is_empty() {
        return Ok(Some("Please give both from and to nodes".to_string()));
    }
    if from == to {
        return Ok(Some("From and to nodes cannot be the same".to_string()));
    }

    let mut dijkstra = Dijkstra::new(&context.graph);
    let sp = dijkstra.search_labels(from, to);

    if let Some(sp) = sp {
        Ok(Some(format!(
            "{}\nTotal distance: {}\nTook: {:?}",
            sp.labels(&context.graph).join(" -> "),
            sp.weight,
            dijkstra.stats.duration
        )))
    } else {
        Ok(Some(format!("No path found between {} and {}", from, to)))
    }
}

struct Context {
    graph: Graph,
}

impl Context {
    fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Init Graph
    let graph = match std::env::args().nth(1) {
        Some(path) => Graph::from_csv(Path::new(&path)).expect("Failed to load edge list"),
        None => generate_demo_graph(),
    };
    let context = Context::new(graph);

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query shortest paths")
        .with_banner("Welcome to Pathfinder")
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(Command::new("nodes").about("List all node labels"), nodes)
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("from")
                        .required(true)
                        .help("Label of the start node"),
                )
                .arg(
                    Arg::new("to")
                        .required(true)
                        .help("Label of the destination node"),
                )
                .about("Calculate shortest path using Dijkstra's algorithm"),
            route,
        );

    repl.run()
}
