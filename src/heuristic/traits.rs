use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::Result;

/// Trait for estimating the remaining cost from a vertex to a goal
pub trait Heuristic<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Estimated remaining cost from `vertex` to `goal`.
    ///
    /// Fails when the provider has no spatial information for either vertex.
    fn estimate(&self, vertex: usize, goal: usize) -> Result<W>;
}
