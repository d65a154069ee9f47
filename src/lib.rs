//! gridpath - uniform-cost and A* route search
//!
//! This library computes shortest paths between two vertices of an
//! undirected, positively-weighted graph using two best-first strategies:
//! uninformed uniform-cost search and heuristic-guided A*. Raw edge
//! distances are normalized by a fixed grid scale at insertion, and the A*
//! heuristic derives remaining-cost estimates from approximate square
//! coordinates on a grid.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod heuristic;
pub mod input;

pub use algorithm::{reconstruct_path, BestFirstSearch, SearchOutcome, Strategy};
/// Re-export main types for convenient use
pub use graph::undirected::UndirectedGraph;
pub use heuristic::{GridHeuristic, Heuristic, SquareGrid};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Unknown search strategy: {0}")]
    UnknownStrategy(String),

    #[error("No path from {src} to {dest}")]
    Unreachable { src: usize, dest: usize },

    #[error("Vertex {0} has no square assignment")]
    UnknownVertex(usize),

    #[error("Square id {0} lies outside the coordinate grid")]
    UnknownSquare(usize),

    #[error("Predecessor map does not connect {dest} back to {src}")]
    DisconnectedPath { src: usize, dest: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
