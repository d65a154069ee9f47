use gridpath::graph::{Graph, UndirectedGraph};
use ordered_float::OrderedFloat;

type W = OrderedFloat<f64>;

#[test]
fn test_edge_insertion_is_symmetric() {
    let mut graph: UndirectedGraph<W> = UndirectedGraph::new();
    graph.add_edge(0, 1, OrderedFloat(10.0));

    let from_zero: Vec<_> = graph.neighbors(0).collect();
    let from_one: Vec<_> = graph.neighbors(1).collect();

    assert_eq!(from_zero, vec![(1, OrderedFloat(1.0))]);
    assert_eq!(from_one, vec![(0, OrderedFloat(1.0))]);
}

#[test]
fn test_insertion_does_not_touch_other_neighbor_lists() {
    let mut graph: UndirectedGraph<W> = UndirectedGraph::new();
    graph.add_edge(2, 3, OrderedFloat(10.0));

    let before: Vec<_> = graph.neighbors(2).collect();
    graph.add_edge(0, 1, OrderedFloat(20.0));
    let after: Vec<_> = graph.neighbors(2).collect();

    assert_eq!(before, after, "unrelated neighbor list should be unchanged");
}

#[test]
fn test_raw_weight_is_scaled_by_grid_size() {
    let mut graph: UndirectedGraph<W> = UndirectedGraph::new();
    graph.add_edge(0, 1, OrderedFloat(10.0));

    // Raw distance 10 divided by the grid scale 10 traverses at cost 1
    assert_eq!(graph.edge_weight(0, 1), Some(OrderedFloat(1.0)));
    assert_eq!(graph.edge_weight(1, 0), Some(OrderedFloat(1.0)));
}

#[test]
fn test_absent_vertex_is_isolated_not_an_error() {
    let mut graph: UndirectedGraph<W> = UndirectedGraph::new();
    graph.add_edge(0, 1, OrderedFloat(10.0));

    assert!(!graph.has_vertex(42));
    assert_eq!(graph.neighbors(42).count(), 0);
    assert_eq!(graph.edge_weight(42, 0), None);
}

#[test]
fn test_neighbor_insertion_order_is_preserved() {
    let mut graph: UndirectedGraph<W> = UndirectedGraph::new();
    graph.add_edge(0, 5, OrderedFloat(10.0));
    graph.add_edge(0, 3, OrderedFloat(20.0));
    graph.add_edge(0, 9, OrderedFloat(30.0));

    let order: Vec<usize> = graph.neighbors(0).map(|(neighbor, _)| neighbor).collect();
    assert_eq!(order, vec![5, 3, 9]);
}

#[test]
fn test_from_edges_builds_the_whole_graph() {
    let graph: UndirectedGraph<W> = UndirectedGraph::from_edges(&[
        (0, 1, OrderedFloat(10.0)),
        (1, 2, OrderedFloat(10.0)),
        (0, 2, OrderedFloat(30.0)),
    ]);

    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(0, 1));
    assert!(graph.has_edge(1, 0));
    assert!(graph.has_edge(2, 0));
    assert_eq!(graph.edge_weight(0, 2), Some(OrderedFloat(3.0)));
}
