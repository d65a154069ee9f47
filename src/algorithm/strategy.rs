use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Selects how the frontier is prioritized during search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Uniform-cost search: expand by cumulative path cost only
    Uniform,
    /// A*: expand by cumulative cost plus a heuristic estimate of the
    /// remaining cost to the goal
    Informed,
}

impl FromStr for Strategy {
    type Err = Error;

    /// Accepts the textual selectors case-insensitively. Anything else is
    /// rejected with [`Error::UnknownStrategy`], never defaulted.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_ascii_lowercase().as_str() {
            "ucs" | "uniform" => Ok(Strategy::Uniform),
            "a-star" | "informed" => Ok(Strategy::Informed),
            _ => Err(Error::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Uniform => write!(f, "UCS"),
            Strategy::Informed => write!(f, "A*"),
        }
    }
}
