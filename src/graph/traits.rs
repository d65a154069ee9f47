use std::fmt::Debug;
use num_traits::{Float, Zero};

/// Trait representing a weighted undirected graph
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices with at least one recorded edge
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the neighbors of a vertex together with the
    /// edge weights, in insertion order. Empty for a vertex with no recorded
    /// edges; absent vertices are valid, just isolated.
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if the vertex has at least one recorded edge
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, a: usize, b: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: usize, b: usize) -> Option<W>;
}
