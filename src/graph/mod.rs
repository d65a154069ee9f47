pub mod traits;
pub mod undirected;

pub use traits::Graph;
pub use undirected::{UndirectedGraph, GRID_SCALE};
