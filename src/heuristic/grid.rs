use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::heuristic::traits::Heuristic;
use crate::{Error, Result};

/// Corner coordinates of each square on a height x width grid,
/// index-addressed by square id. Built once, immutable thereafter.
#[derive(Debug, Clone)]
pub struct SquareGrid<W>
where
    W: Float + Zero + Debug + Copy,
{
    coordinates: Vec<(W, W)>,
}

impl<W> SquareGrid<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds a grid from an externally supplied coordinate table
    pub fn from_coordinates(coordinates: Vec<(W, W)>) -> Self {
        SquareGrid { coordinates }
    }

    /// Computes the corner coordinate of every square on the grid.
    ///
    /// The walk starts at the origin and visits squares row by row: x drops
    /// by the grid height once per row, y grows by the grid width once per
    /// square. The y offset accumulates over the whole walk rather than
    /// resetting at each row; the resulting table is what downstream
    /// estimates are calibrated against.
    pub fn generate(height: usize, width: usize) -> Self {
        let row_step = W::from(height).expect("grid height must be representable in the weight type");
        let col_step = W::from(width).expect("grid width must be representable in the weight type");

        let mut coordinates = Vec::with_capacity(height * width);
        let mut x = W::zero();
        let mut y = W::zero();

        for _ in 0..height {
            x = x - row_step;
            for _ in 0..width {
                y = y + col_step;
                coordinates.push((x, y));
            }
        }

        SquareGrid { coordinates }
    }

    /// Returns the number of squares on the grid
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns true if the grid has no squares
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate of a square id, if it lies on the grid
    pub fn coordinate(&self, square: usize) -> Result<(W, W)> {
        self.coordinates
            .get(square)
            .copied()
            .ok_or(Error::UnknownSquare(square))
    }
}

/// Maps vertices to approximate spatial positions and derives estimated
/// remaining costs from them.
///
/// Each vertex is assigned a square id; the square's corner coordinate
/// stands in for the vertex's position.
#[derive(Debug, Clone)]
pub struct GridHeuristic<W>
where
    W: Float + Zero + Debug + Copy,
{
    grid: SquareGrid<W>,

    /// Vertex id -> square id, supplied externally and immutable
    squares: HashMap<usize, usize>,
}

impl<W> GridHeuristic<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a provider over a coordinate grid and a vertex-to-square map
    pub fn new(grid: SquareGrid<W>, squares: HashMap<usize, usize>) -> Self {
        GridHeuristic { grid, squares }
    }

    /// Corner coordinate of the square the vertex stands on.
    ///
    /// Fails with [`Error::UnknownVertex`] if the vertex has no square
    /// assignment, or [`Error::UnknownSquare`] if the assigned square id is
    /// outside the coordinate table.
    pub fn coordinate_of(&self, vertex: usize) -> Result<(W, W)> {
        let square = self
            .squares
            .get(&vertex)
            .copied()
            .ok_or(Error::UnknownVertex(vertex))?;
        self.grid.coordinate(square)
    }
}

impl<W> Heuristic<W> for GridHeuristic<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Fourth root of the squared Euclidean distance between the two
    /// squares' corners - equivalently, the square root of the straight-line
    /// distance. Deliberately dampened; not plain Euclidean distance.
    fn estimate(&self, vertex: usize, goal: usize) -> Result<W> {
        let (x1, y1) = self.coordinate_of(vertex)?;
        let (x2, y2) = self.coordinate_of(goal)?;

        let squared = (x1 - x2).powi(2) + (y1 - y2).powi(2);

        Ok(squared.sqrt().sqrt())
    }
}
