pub mod grid;
pub mod traits;

pub use grid::{GridHeuristic, SquareGrid};
pub use traits::Heuristic;
