//! Phase 2 tests: registration, edge insertion, adjacency queries and weights.

use directed_graph::types::error::GraphError;
use directed_graph::types::node::Node;
use directed_graph::{DirectedGraph, GraphConfig};

// ==================== Helper ====================

/// Graph with nodes A and B registered and the edge A -> B of weight 5.
fn two_node_graph() -> (DirectedGraph<&'static str, i32>, Node<&'static str>, Node<&'static str>) {
    let a = Node::new("A");
    let b = Node::new("B");
    let mut graph = DirectedGraph::new();
    graph.add_node(&a);
    graph.add_node(&b);
    graph.add_edge(&a, &b, 5).unwrap();
    (graph, a, b)
}

// ==================== Registration Tests ====================

#[test]
fn test_node_gets_added() {
    let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
    let first = Node::new("First node");

    assert!(graph.add_node(&first));

    let registered: Vec<_> = graph.nodes().collect();
    assert_eq!(registered, vec![&first]);
    assert_eq!(*registered[0].data(), "First node");
}

#[test]
fn test_contains() {
    let mut graph: DirectedGraph<&str, ()> = DirectedGraph::new();
    let node = Node::new("A node");
    assert!(!graph.contains(&node));
    graph.add_node(&node);
    assert!(graph.contains(&node));
    assert!(graph.contains(&node.clone()));
    assert!(!graph.contains(&Node::new("A node")));
}

#[test]
fn test_duplicate_registration_is_noop() {
    let (mut graph, a, b) = two_node_graph();
    assert!(!graph.add_node(&a));
    assert!(!graph.add_node(&a.clone()));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight(&a, &b).unwrap(), &5);
}

// ==================== Edge Insertion Tests ====================

#[test]
fn test_add_edge_is_directed() {
    let (graph, a, b) = two_node_graph();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.is_adjacent(&a, &b).unwrap());
    assert!(!graph.is_adjacent(&b, &a).unwrap());
    assert_eq!(*graph.edge_weight(&a, &b).unwrap(), 5);
}

#[test]
fn test_duplicate_edge_rejected() {
    let (mut graph, a, b) = two_node_graph();
    let err = graph.add_edge(&a, &b, 7).unwrap_err();
    assert_eq!(
        err,
        GraphError::DuplicateEdge {
            from: a.id(),
            to: b.id()
        }
    );
    assert_eq!(*graph.edge_weight(&a, &b).unwrap(), 5);
    assert_eq!(graph.edge_count(), 1);

    // The reverse direction is a different ordered pair.
    graph.add_edge(&b, &a, 7).unwrap();
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_add_edge_requires_registered_nodes() {
    let (mut graph, a, _) = two_node_graph();
    let c = Node::new("C");

    let err = graph.add_edge(&a, &c, 1).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound(c.id()));
    let err = graph.add_edge(&c, &a, 1).unwrap_err();
    assert_eq!(err, GraphError::NodeNotFound(c.id()));

    assert_eq!(graph.edge_count(), 1);
    assert!(!graph.contains(&c));
    graph.verify_integrity().unwrap();
}

#[test]
fn test_add_edge_on_fresh_graph_with_unregistered_end() {
    let a = Node::new("A");
    let c = Node::new("C");
    let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
    graph.add_node(&a);
    assert!(graph.add_edge(&a, &c, 1).unwrap_err().is_not_found());
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_connect_uses_default_weight() {
    let a = Node::new(1);
    let b = Node::new(2);
    let mut graph: DirectedGraph<i32, Option<f64>> = DirectedGraph::new();
    graph.add_node(&a);
    graph.add_node(&b);
    graph.connect(&a, &b).unwrap();
    assert_eq!(graph.edge_weight(&a, &b).unwrap(), &None);
}

#[test]
fn test_self_loop_allowed_by_default() {
    let a = Node::new("A");
    let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
    graph.add_node(&a);
    graph.add_edge(&a, &a, 3).unwrap();
    assert!(graph.is_adjacent(&a, &a).unwrap());
    assert_eq!(graph.in_degree(&a).unwrap(), 1);
    assert_eq!(graph.out_degree(&a).unwrap(), 1);
}

#[test]
fn test_self_loop_rejected_when_disabled() {
    let a = Node::new("A");
    let mut graph: DirectedGraph<&str, i32> =
        DirectedGraph::with_config(GraphConfig::default().allow_self_loops(false));
    graph.add_node(&a);
    assert_eq!(
        graph.add_edge(&a, &a, 3).unwrap_err(),
        GraphError::SelfLoop(a.id())
    );
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_max_out_degree() {
    let hub = Node::new(0);
    let spokes: Vec<_> = (1..=3).map(Node::new).collect();
    let mut graph: DirectedGraph<i32, ()> =
        DirectedGraph::with_config(GraphConfig::default().max_out_degree(2));
    graph.add_node(&hub);
    for spoke in &spokes {
        graph.add_node(spoke);
    }

    graph.connect(&hub, &spokes[0]).unwrap();
    graph.connect(&hub, &spokes[1]).unwrap();
    assert_eq!(
        graph.connect(&hub, &spokes[2]).unwrap_err(),
        GraphError::TooManyEdges {
            node: hub.id(),
            max: 2
        }
    );

    // Inbound edges are not limited.
    for spoke in &spokes {
        graph.connect(spoke, &hub).unwrap();
    }
    assert_eq!(graph.edge_count(), 5);
}

// ==================== Adjacency Query Tests ====================

#[test]
fn test_is_adjacent_requires_registered_start() {
    let (graph, a, _) = two_node_graph();
    let stranger = Node::new("stranger");

    assert_eq!(
        graph.is_adjacent(&stranger, &a).unwrap_err(),
        GraphError::NodeNotFound(stranger.id())
    );
    assert!(!graph.is_adjacent(&a, &stranger).unwrap());
}

#[test]
fn test_neighbors_in_creation_order() {
    let a = Node::new("A");
    let others: Vec<_> = ["B", "C", "D"].into_iter().map(Node::new).collect();
    let mut graph: DirectedGraph<&str, i32> = DirectedGraph::new();
    graph.add_node(&a);
    for node in &others {
        graph.add_node(node);
    }

    graph.add_edge(&a, &others[2], 30).unwrap();
    graph.add_edge(&a, &others[0], 10).unwrap();
    graph.add_edge(&a, &others[1], 20).unwrap();

    let neighbors: Vec<_> = graph
        .neighbors(&a)
        .unwrap()
        .map(|(node, weight)| (*node.data(), *weight))
        .collect();
    assert_eq!(neighbors, vec![("D", 30), ("B", 10), ("C", 20)]);
    assert_eq!(graph.neighbors(&others[0]).unwrap().len(), 0);
}

#[test]
fn test_neighbor_weights_pair_within_the_same_row() {
    // Rows of nodes registered after the first must report their own weights.
    let nodes: Vec<_> = (0..4).map(Node::new).collect();
    let mut graph: DirectedGraph<i32, i32> = DirectedGraph::new();
    for node in &nodes {
        graph.add_node(node);
    }
    graph.add_edge(&nodes[0], &nodes[1], 1).unwrap();
    graph.add_edge(&nodes[0], &nodes[2], 2).unwrap();
    graph.add_edge(&nodes[2], &nodes[3], 23).unwrap();
    graph.add_edge(&nodes[2], &nodes[0], 20).unwrap();
    graph.add_edge(&nodes[3], &nodes[1], 31).unwrap();

    let row: Vec<_> = graph
        .neighbors(&nodes[2])
        .unwrap()
        .map(|(node, weight)| (*node.data(), *weight))
        .collect();
    assert_eq!(row, vec![(3, 23), (0, 20)]);

    let row: Vec<_> = graph
        .neighbors(&nodes[3])
        .unwrap()
        .map(|(node, weight)| (*node.data(), *weight))
        .collect();
    assert_eq!(row, vec![(1, 31)]);

    let adjacency = graph.adjacency(&nodes[2]).unwrap();
    let targets: Vec<_> = adjacency.targets().map(|n| *n.data()).collect();
    let weights: Vec<_> = adjacency.weights().copied().collect();
    assert_eq!(targets, vec![3, 0]);
    assert_eq!(weights, vec![23, 20]);
}

#[test]
fn test_neighbors_of_unregistered_node() {
    let (graph, _, _) = two_node_graph();
    let stranger = Node::new("stranger");
    assert_eq!(
        graph.neighbors(&stranger).err(),
        Some(GraphError::NodeNotFound(stranger.id()))
    );
}

#[test]
fn test_edges_to_and_degrees() {
    let nodes: Vec<_> = ["hub", "x", "y", "z"].into_iter().map(Node::new).collect();
    let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
    for node in &nodes {
        graph.add_node(node);
    }
    graph.add_edge(&nodes[1], &nodes[0], 1).unwrap();
    graph.add_edge(&nodes[3], &nodes[0], 3).unwrap();
    graph.add_edge(&nodes[0], &nodes[2], 9).unwrap();

    let inbound: Vec<_> = graph
        .edges_to(&nodes[0])
        .unwrap()
        .into_iter()
        .map(|(node, weight)| (*node.data(), *weight))
        .collect();
    assert_eq!(inbound, vec![("x", 1), ("z", 3)]);
    assert_eq!(graph.in_degree(&nodes[0]).unwrap(), 2);
    assert_eq!(graph.out_degree(&nodes[0]).unwrap(), 1);
    assert_eq!(graph.in_degree(&nodes[2]).unwrap(), 1);
    assert_eq!(graph.out_degree(&nodes[2]).unwrap(), 0);

    let stranger = Node::new("stranger");
    assert!(graph.edges_to(&stranger).unwrap_err().is_not_found());
    assert!(graph.in_degree(&stranger).unwrap_err().is_not_found());
}

// ==================== Weight Tests ====================

#[test]
fn test_set_edge_weight_roundtrip() {
    let (mut graph, a, b) = two_node_graph();
    let previous = graph.set_edge_weight(&a, &b, 11).unwrap();
    assert_eq!(previous, 5);
    assert_eq!(*graph.edge_weight(&a, &b).unwrap(), 11);
}

#[test]
fn test_edge_weight_mut() {
    let (mut graph, a, b) = two_node_graph();
    *graph.edge_weight_mut(&a, &b).unwrap() += 1;
    assert_eq!(*graph.edge_weight(&a, &b).unwrap(), 6);
}

#[test]
fn test_weight_access_requires_edge() {
    let (mut graph, a, b) = two_node_graph();
    let missing = GraphError::EdgeNotFound {
        from: b.id(),
        to: a.id(),
    };
    assert_eq!(graph.edge_weight(&b, &a).unwrap_err(), missing);
    assert_eq!(graph.set_edge_weight(&b, &a, 1).unwrap_err(), missing);
    assert_eq!(graph.edge_count(), 1);

    let stranger = Node::new("stranger");
    assert_eq!(
        graph.edge_weight(&a, &stranger).unwrap_err(),
        GraphError::NodeNotFound(stranger.id())
    );
    assert_eq!(
        graph.set_edge_weight(&stranger, &b, 1).unwrap_err(),
        GraphError::NodeNotFound(stranger.id())
    );
    assert_eq!(*graph.edge_weight(&a, &b).unwrap(), 5);
}

#[test]
fn test_weights_may_be_arbitrary_payloads() {
    #[derive(Debug, Clone, PartialEq)]
    struct Route {
        label: String,
        cost: f64,
    }

    let a = Node::new("a");
    let b = Node::new("b");
    let mut graph: DirectedGraph<&str, Route> = DirectedGraph::new();
    graph.add_node(&a);
    graph.add_node(&b);
    graph
        .add_edge(
            &a,
            &b,
            Route {
                label: "toll".into(),
                cost: 2.5,
            },
        )
        .unwrap();

    let route = graph.edge_weight(&a, &b).unwrap();
    assert_eq!(route.label, "toll");
    assert!((route.cost - 2.5).abs() < f64::EPSILON);
}
