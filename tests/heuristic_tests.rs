use std::collections::HashMap;

use gridpath::{Error, GridHeuristic, Heuristic, SquareGrid};
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

fn grid_10x10() -> SquareGrid<W> {
    SquareGrid::generate(10, 10)
}

#[test]
fn test_generated_walk_matches_the_reference_grid() {
    let grid = grid_10x10();
    assert_eq!(grid.len(), 100);

    // First row: x sits one row height below the origin
    assert_eq!(grid.coordinate(0).unwrap(), (OrderedFloat(-10.0), OrderedFloat(10.0)));
    assert_eq!(grid.coordinate(9).unwrap(), (OrderedFloat(-10.0), OrderedFloat(100.0)));

    // The y offset carries over into the second row instead of resetting
    assert_eq!(grid.coordinate(10).unwrap(), (OrderedFloat(-20.0), OrderedFloat(110.0)));
    assert_eq!(grid.coordinate(99).unwrap(), (OrderedFloat(-100.0), OrderedFloat(1000.0)));
}

#[test]
fn test_square_outside_the_grid_is_rejected() {
    let grid = grid_10x10();
    assert!(matches!(grid.coordinate(100), Err(Error::UnknownSquare(100))));
}

#[test]
fn test_estimate_is_the_root_of_straight_line_distance() {
    // Squares at (0, 0) and (3, 4) are 5 apart in straight line
    let grid = SquareGrid::from_coordinates(vec![
        (OrderedFloat(0.0), OrderedFloat(0.0)),
        (OrderedFloat(3.0), OrderedFloat(4.0)),
    ]);
    let squares = HashMap::from([(7, 0), (9, 1)]);
    let heuristic = GridHeuristic::new(grid, squares);

    let estimate = heuristic.estimate(7, 9).unwrap();

    // The estimate is the square root of the distance, not the distance
    assert!((estimate.into_inner() - 5.0_f64.sqrt()).abs() < 1e-12);
    assert!((estimate.into_inner() - 5.0).abs() > 1.0);
}

#[test]
fn test_estimate_of_a_vertex_against_itself_is_zero() {
    let squares = HashMap::from([(4, 17)]);
    let heuristic = GridHeuristic::new(grid_10x10(), squares);

    assert_eq!(heuristic.estimate(4, 4).unwrap(), OrderedFloat(0.0));
}

#[test]
fn test_unmapped_vertex_is_an_unknown_vertex() {
    let squares = HashMap::from([(0, 0)]);
    let heuristic = GridHeuristic::new(grid_10x10(), squares);

    assert!(matches!(heuristic.coordinate_of(3), Err(Error::UnknownVertex(3))));
    assert!(matches!(heuristic.estimate(0, 3), Err(Error::UnknownVertex(3))));
}

#[test]
fn test_vertex_mapped_off_grid_is_an_unknown_square() {
    let squares = HashMap::from([(0, 0), (1, 512)]);
    let heuristic = GridHeuristic::new(grid_10x10(), squares);

    assert!(matches!(heuristic.coordinate_of(1), Err(Error::UnknownSquare(512))));
    assert!(matches!(heuristic.estimate(0, 1), Err(Error::UnknownSquare(512))));
}

#[test]
fn test_coordinate_of_resolves_through_the_square_assignment() {
    let squares = HashMap::from([(21, 10)]);
    let heuristic = GridHeuristic::new(grid_10x10(), squares);

    assert_eq!(
        heuristic.coordinate_of(21).unwrap(),
        (OrderedFloat(-20.0), OrderedFloat(110.0))
    );
}
