use std::fs;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use ordered_float::OrderedFloat;

use gridpath::graph::Graph;
use gridpath::{
    input, reconstruct_path, BestFirstSearch, GridHeuristic, SquareGrid, Strategy, UndirectedGraph,
};

#[derive(Parser, Debug)]
#[command(name = "find_path")]
#[command(about = "Find the cheapest route between two vertices of a grid-mapped graph.", long_about = None)]
struct Cli {
    /// Path to the route-query input file
    #[arg(short, long)]
    input: String,

    /// Height of the coordinate grid
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Width of the coordinate grid
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Search strategies to run, in order ("ucs", "a-star")
    #[arg(short, long, default_values_t = [String::from("ucs"), String::from("a-star")])]
    strategy: Vec<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let text = fs::read_to_string(&cli.input).with_context(|| format!("reading {}", &cli.input))?;
    let document =
        input::parse_document(&text).with_context(|| format!("parsing {}", &cli.input))?;

    let edges: Vec<(usize, usize, OrderedFloat<f64>)> = document
        .edges
        .iter()
        .map(|&(src, dest, raw)| (src, dest, OrderedFloat(raw as f64)))
        .collect();
    let graph = UndirectedGraph::from_edges(&edges);

    let grid = SquareGrid::generate(cli.height, cli.width);
    let heuristic = GridHeuristic::new(grid, document.squares.clone());

    println!(
        "Graph: {} vertices, {} edges; routing {} -> {}",
        graph.vertex_count(),
        graph.edge_count(),
        document.source,
        document.destination
    );

    for selector in &cli.strategy {
        let strategy: Strategy = selector.parse()?;
        let engine = BestFirstSearch::new(strategy);

        println!("\nPerforming {} ...", strategy);

        let started = Instant::now();
        let outcome = engine.compute_shortest_path(
            &graph,
            &heuristic,
            document.source,
            document.destination,
        )?;
        let elapsed = started.elapsed();

        let path = reconstruct_path(&outcome.parents, document.source, document.destination)?;

        println!("Expanded {} vertices.", outcome.expanded);
        println!("{} found this as the shortest path cost: {}", strategy, outcome.cost);
        println!("{} found this shortest path, in order:\n{:?}", strategy, path);
        println!("{} elapsed time: {:.6} s", strategy, elapsed.as_secs_f64());
    }

    Ok(())
}
