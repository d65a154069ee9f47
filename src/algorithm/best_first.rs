use std::collections::HashMap;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::Strategy;
use crate::data_structures::Frontier;
use crate::graph::Graph;
use crate::heuristic::Heuristic;
use crate::{Error, Result};

/// Result of a single search invocation
#[derive(Debug, Clone)]
pub struct SearchOutcome<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Cost of the cheapest path found from source to destination
    pub cost: W,

    /// Predecessor of each discovered vertex on its best known path. Owned
    /// by this outcome; a later search cannot observe or overwrite it.
    pub parents: HashMap<usize, usize>,

    /// Number of frontier pops before termination, stale entries included
    pub expanded: usize,
}

/// Best-first point-to-point search over a weighted graph.
///
/// Runs uniform-cost search or A* depending on the configured strategy. The
/// heuristic provider is consulted only under [`Strategy::Informed`].
#[derive(Debug, Clone, Copy)]
pub struct BestFirstSearch {
    strategy: Strategy,
}

impl BestFirstSearch {
    /// Creates a new engine for the given strategy
    pub fn new(strategy: Strategy) -> Self {
        BestFirstSearch { strategy }
    }

    /// The strategy this engine expands with
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Computes the cheapest path from `src` to `dest`.
    ///
    /// Returns the cost together with the predecessor map accumulated during
    /// the search; feed the map to [`crate::reconstruct_path`] for the
    /// ordered vertex sequence. The search terminates on the first pop of
    /// `dest` and fails with [`Error::Unreachable`] if the frontier drains
    /// first. Neither the graph nor the heuristic provider is mutated.
    pub fn compute_shortest_path<W, G, H>(
        &self,
        graph: &G,
        heuristic: &H,
        src: usize,
        dest: usize,
    ) -> Result<SearchOutcome<W>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        H: Heuristic<W>,
    {
        // Fresh per-call state: best known cost from src, predecessor on the
        // best known path, and the priority-ordered frontier.
        let mut g_score: HashMap<usize, W> = HashMap::new();
        let mut parents: HashMap<usize, usize> = HashMap::new();
        let mut frontier: Frontier<usize, W> = Frontier::new();

        g_score.insert(src, W::zero());
        frontier.push(src, W::zero());

        let mut expanded = 0;

        while let Some((vertex, _)) = frontier.pop() {
            expanded += 1;

            // Every pushed vertex has a recorded score; a stale duplicate
            // entry simply re-reads the latest one.
            let Some(&known) = g_score.get(&vertex) else {
                continue;
            };

            if vertex == dest {
                debug!(
                    "{} reached {} at cost {:?} after {} expansions ({} entries still queued)",
                    self.strategy,
                    dest,
                    known,
                    expanded,
                    frontier.len()
                );
                return Ok(SearchOutcome {
                    cost: known,
                    parents,
                    expanded,
                });
            }

            for (neighbor, weight) in graph.neighbors(vertex) {
                let tentative = known + weight;

                // Relax only on strict improvement over the recorded cost
                let improved = match g_score.get(&neighbor) {
                    None => true,
                    Some(&best) => tentative < best,
                };
                if !improved {
                    continue;
                }

                g_score.insert(neighbor, tentative);
                parents.insert(neighbor, vertex);

                let priority = match self.strategy {
                    Strategy::Uniform => tentative,
                    Strategy::Informed => tentative + heuristic.estimate(neighbor, dest)?,
                };

                trace!(
                    "relaxed {} -> {}: cost {:?}, priority {:?}",
                    vertex,
                    neighbor,
                    tentative,
                    priority
                );
                frontier.push(neighbor, priority);
            }
        }

        Err(Error::Unreachable { src, dest })
    }
}
