use std::collections::HashMap;

use crate::{Error, Result};

/// Walks a predecessor map from `dest` back to `src` and returns the ordered
/// path from `src` to `dest`.
///
/// Fails with [`Error::DisconnectedPath`] if the walk leaves the map before
/// reaching `src`; only a map produced by a successful search over the same
/// endpoints is guaranteed to connect.
pub fn reconstruct_path(
    parents: &HashMap<usize, usize>,
    src: usize,
    dest: usize,
) -> Result<Vec<usize>> {
    let mut path = vec![dest];
    let mut current = dest;

    while current != src {
        match parents.get(&current) {
            Some(&parent) => {
                path.push(parent);
                current = parent;
            }
            None => return Err(Error::DisconnectedPath { src, dest }),
        }

        // A well-formed predecessor map never revisits a vertex
        if path.len() > parents.len() + 1 {
            return Err(Error::DisconnectedPath { src, dest });
        }
    }

    path.reverse();

    Ok(path)
}
