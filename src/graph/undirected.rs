use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// Raw input distances are expressed in grid units; dividing by this scale
/// once at insertion normalizes them.
pub const GRID_SCALE: f64 = 10.0;

/// An undirected weighted graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Neighbors of each vertex: vertex_id -> [(neighbor_vertex, weight)]
    adjacency: HashMap<usize, Vec<(usize, W)>>,

    /// The grid scale expressed in the weight type, fixed at construction
    grid_scale: W,
}

impl<W> UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            adjacency: HashMap::new(),
            grid_scale: W::from(GRID_SCALE)
                .expect("grid scale must be representable in the weight type"),
        }
    }

    /// Builds a graph from raw edge triples (src, dest, raw distance)
    pub fn from_edges(edges: &[(usize, usize, W)]) -> Self {
        let mut graph = Self::new();
        for &(src, dest, raw_weight) in edges {
            graph.add_edge(src, dest, raw_weight);
        }
        graph
    }

    /// Adds an undirected edge between `src` and `dest`.
    ///
    /// The raw weight is divided by [`GRID_SCALE`] exactly once, here. Both
    /// directions are recorded together, so the neighbor lists of the two
    /// endpoints stay symmetric. Callers must only supply non-negative
    /// weights; negative weights void the optimality guarantees of the
    /// search algorithms.
    pub fn add_edge(&mut self, src: usize, dest: usize, raw_weight: W) {
        let weight = raw_weight / self.grid_scale;

        self.adjacency.entry(src).or_default().push((dest, weight));
        self.adjacency.entry(dest).or_default().push((src, weight));
    }
}

impl<W> Default for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> Graph<W> for UndirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        // Every undirected edge contributes one entry to each endpoint
        self.adjacency.values().map(|edges| edges.len()).sum::<usize>() / 2
    }

    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(&vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn has_edge(&self, a: usize, b: usize) -> bool {
        if let Some(edges) = self.adjacency.get(&a) {
            edges.iter().any(|(neighbor, _)| *neighbor == b)
        } else {
            false
        }
    }

    fn edge_weight(&self, a: usize, b: usize) -> Option<W> {
        if let Some(edges) = self.adjacency.get(&a) {
            edges
                .iter()
                .find(|(neighbor, _)| *neighbor == b)
                .map(|&(_, weight)| weight)
        } else {
            None
        }
    }
}
