//! Unit tests for Graph construction, lookups and neighbor queries.

use causalgraph::{Direction, Edge, Graph, GraphError, Node};

fn supply_chain() -> Graph {
    let mut graph = Graph::new();
    graph.add_node("Supplier_A", "Entity");
    graph.add_node("Material_X", "Resource");
    graph.add_node("Product_Risk", "Risk");
    graph.add_edge("Supplier_A", "Material_X", "provides");
    graph.add_edge("Material_X", "Product_Risk", "affects");
    graph
}

#[test]
fn test_empty_graph() {
    let graph = Graph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.validate().is_ok());
}

#[test]
fn test_add_nodes_and_edges() {
    let graph = supply_chain();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.contains_node("Material_X"));
    assert!(!graph.contains_node("Storm_Z"));
    assert_eq!(graph.node_type("Product_Risk"), Some("Risk"));
    assert!(graph.contains_edge("Supplier_A", "Material_X"));
    assert!(!graph.contains_edge("Material_X", "Supplier_A"));
    assert_eq!(graph.edge_type_between("Supplier_A", "Material_X"), Some("provides"));
    assert_eq!(graph.edge_type_between("Material_X", "Supplier_A"), None);
}

#[test]
fn test_node_type_overwrite() {
    let mut graph = supply_chain();
    graph.add_node("Supplier_A", "Company");

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.node_type("Supplier_A"), Some("Company"));
    // Position in iteration order is kept
    assert_eq!(graph.node_ids().next(), Some("Supplier_A"));
}

#[test]
fn test_edge_overwrite_has_no_parallel_edges() {
    let mut graph = supply_chain();
    graph.add_edge("Supplier_A", "Material_X", "sells");

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge("Supplier_A", "Material_X").unwrap().edge_type, "sells");
}

#[test]
fn test_from_parts_matches_incremental_build() {
    let graph = Graph::from_parts(
        vec![
            Node::new("Supplier_A", "Entity"),
            Node::new("Material_X", "Resource"),
            Node::new("Product_Risk", "Risk"),
        ],
        vec![
            Edge::new("Supplier_A", "Material_X", "provides"),
            Edge::new("Material_X", "Product_Risk", "affects"),
        ],
    );
    let expected = supply_chain();

    let nodes: Vec<_> = graph.nodes().cloned().collect();
    let expected_nodes: Vec<_> = expected.nodes().cloned().collect();
    assert_eq!(nodes, expected_nodes);

    let edges: Vec<_> = graph.edges().cloned().collect();
    let expected_edges: Vec<_> = expected.edges().cloned().collect();
    assert_eq!(edges, expected_edges);
}

#[test]
fn test_neighbors_by_direction() {
    let graph = supply_chain();

    assert_eq!(graph.neighbors("Material_X", Direction::Outgoing), vec!["Product_Risk"]);
    assert_eq!(graph.neighbors("Material_X", Direction::Incoming), vec!["Supplier_A"]);
    assert_eq!(
        graph.neighbors("Material_X", Direction::Both),
        vec!["Product_Risk", "Supplier_A"]
    );
    assert!(graph.neighbors("Unknown", Direction::Both).is_empty());
}

#[test]
fn test_degrees() {
    let graph = supply_chain();
    assert_eq!(graph.in_degree("Supplier_A"), 0);
    assert_eq!(graph.out_degree("Supplier_A"), 1);
    assert_eq!(graph.in_degree("Product_Risk"), 1);
    assert_eq!(graph.out_degree("Product_Risk"), 0);
}

#[test]
fn test_edge_to_missing_node_is_not_traversable() {
    let mut graph = supply_chain();
    graph.add_edge("Product_Risk", "Ghost", "mentions");

    assert_eq!(graph.edge_count(), 3);
    assert!(graph.validate().is_ok());
    assert_eq!(graph.neighbors("Product_Risk", Direction::Both), vec!["Material_X"]);
    assert!(graph.neighbors("Ghost", Direction::Incoming).is_empty());
    assert!(graph
        .query()
        .adjacent_to("Ghost", Direction::Both)
        .execute()
        .is_empty());
}

#[test]
fn test_validate_reports_structural_errors() {
    let mut graph = supply_chain();
    graph.add_edge("Supplier_A", "Product_Risk", "");
    match graph.validate() {
        Err(GraphError::MalformedEdge {
            source_id,
            target_id,
            ..
        }) => {
            assert_eq!(source_id, "Supplier_A");
            assert_eq!(target_id, "Product_Risk");
        }
        other => panic!("expected MalformedEdge, got {other:?}"),
    }

    let mut graph = Graph::new();
    graph.add_node("", "Risk");
    assert!(matches!(graph.validate(), Err(GraphError::MalformedNode { .. })));
}

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Graph>();
}
