pub mod best_first;
pub mod path;
pub mod strategy;

pub use best_first::{BestFirstSearch, SearchOutcome};
pub use path::reconstruct_path;
pub use strategy::Strategy;
