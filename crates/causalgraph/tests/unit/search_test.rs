//! Unit tests for causal path discovery.

use causalgraph::{
    discover, discover_report, discover_with_config, helpers, resolve_targets, DiscoveryStatus,
    Graph, GraphError, SearchConfig, TargetSelection,
};

const TARGET_TYPES: [&str; 8] = [
    "Risk",
    "RiskCondition",
    "FinancialCondition",
    "Obligation",
    "Penalty",
    "Condition",
    "Prohibition",
    "Product",
];

fn base_graph() -> Graph {
    let mut graph = Graph::new();
    helpers::add_typed_relation(
        &mut graph,
        ("Supplier_A", "Entity"),
        "provides",
        ("Material_X", "Resource"),
    );
    helpers::add_typed_relation(
        &mut graph,
        ("Material_X", "Resource"),
        "affects",
        ("Product_Risk", "Risk"),
    );
    graph
}

fn news_graph() -> Graph {
    let mut graph = Graph::new();
    helpers::add_typed_relation(&mut graph, ("Storm_Z", "Event"), "hits", ("Region_Y", "Location"));
    helpers::add_typed_relation(
        &mut graph,
        ("Region_Y", "Location"),
        "disrupts",
        ("Supplier_A", "Entity"),
    );
    graph
}

// Contract graph with several obligations at different distances plus a cycle.
fn contract_with_cycle() -> Graph {
    let mut graph = base_graph();
    helpers::add_typed_relation(
        &mut graph,
        ("Supplier_A", "Entity"),
        "bound_by",
        ("Delivery_Obligation", "Obligation"),
    );
    helpers::add_typed_relation(
        &mut graph,
        ("Material_X", "Resource"),
        "priced_in",
        ("Market_M", "Market"),
    );
    helpers::add_typed_relation(
        &mut graph,
        ("Market_M", "Market"),
        "feeds",
        ("Material_X", "Resource"),
    );
    helpers::add_typed_relation(
        &mut graph,
        ("Late_Fee", "Penalty"),
        "enforces",
        ("Market_M", "Market"),
    );
    graph
}

#[test]
fn test_discover_every_path_starts_at_start_and_ends_at_target() {
    let results = discover(&contract_with_cycle(), &news_graph(), "Storm_Z").unwrap();
    let composite = contract_with_cycle().compose(&news_graph());

    assert!(!results.is_empty());
    for result in &results {
        assert_eq!(result.path.start(), "Storm_Z");
        assert_eq!(result.path.end(), result.target);
        let target_type = composite.node_type(&result.target).unwrap();
        assert!(TARGET_TYPES.contains(&target_type));
        assert_eq!(result.length, result.path.len());
        assert!(result.length <= 11);
    }
}

#[test]
fn test_discover_results_sorted_by_length() {
    let results = discover(&contract_with_cycle(), &news_graph(), "Storm_Z").unwrap();
    let lengths: Vec<usize> = results.iter().map(|r| r.length).collect();
    let mut sorted = lengths.clone();
    sorted.sort_unstable();
    assert_eq!(lengths, sorted);

    let targets: Vec<&str> = results.iter().map(|r| r.target.as_str()).collect();
    assert_eq!(targets, vec!["Delivery_Obligation", "Product_Risk", "Late_Fee"]);
}

#[test]
fn test_discover_paths_have_no_repeated_nodes() {
    let results = discover(&contract_with_cycle(), &news_graph(), "Storm_Z").unwrap();
    for result in results {
        let mut seen = std::collections::HashSet::new();
        assert!(result.path.nodes().iter().all(|n| seen.insert(n.clone())));
    }
}

#[test]
fn test_discover_traverses_edges_backward() {
    // Late_Fee -> Market_M is stored forward; the search reaches it from Market_M.
    let results = discover(&contract_with_cycle(), &news_graph(), "Storm_Z").unwrap();
    let late_fee = results.iter().find(|r| r.target == "Late_Fee").unwrap();
    assert_eq!(
        late_fee.path.nodes(),
        &["Storm_Z", "Region_Y", "Supplier_A", "Material_X", "Market_M", "Late_Fee"]
    );
}

#[test]
fn test_discover_one_path_per_target() {
    let mut base = base_graph();
    // Second, longer route to the same risk
    helpers::add_typed_relation(
        &mut base,
        ("Supplier_A", "Entity"),
        "owns",
        ("Warehouse_W", "Site"),
    );
    helpers::add_typed_relation(
        &mut base,
        ("Warehouse_W", "Site"),
        "stores",
        ("Stock_S", "Resource"),
    );
    helpers::add_typed_relation(
        &mut base,
        ("Stock_S", "Resource"),
        "affects",
        ("Product_Risk", "Risk"),
    );

    let results = discover(&base, &news_graph(), "Storm_Z").unwrap();
    let risk_paths: Vec<_> = results.iter().filter(|r| r.target == "Product_Risk").collect();
    assert_eq!(risk_paths.len(), 1);
    assert_eq!(risk_paths[0].length, 5);
}

#[test]
fn test_discover_absent_start_is_empty_not_error() {
    let results = discover(&base_graph(), &news_graph(), "Volcano_V").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_discover_without_targets_is_empty() {
    let mut base = Graph::new();
    helpers::add_typed_relation(
        &mut base,
        ("Supplier_A", "Entity"),
        "provides",
        ("Material_X", "Resource"),
    );
    let results = discover(&base, &news_graph(), "Storm_Z").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_discover_falls_back_to_company() {
    let mut base = Graph::new();
    helpers::add_typed_relation(
        &mut base,
        ("Supplier_A", "Entity"),
        "supplies",
        ("Buyer_B", "Company"),
    );

    let results = discover(&base, &news_graph(), "Storm_Z").unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].target, "Buyer_B");
    assert_eq!(results[0].length, 4);

    let composite = base.compose(&news_graph());
    assert_eq!(
        resolve_targets(&composite, &SearchConfig::default()),
        Some(TargetSelection::Fallback)
    );
    assert!(discover_with_config(&base, &news_graph(), "Storm_Z", &SearchConfig::strict())
        .unwrap()
        .is_empty());
}

#[test]
fn test_primary_targets_suppress_fallback() {
    let mut base = base_graph();
    helpers::add_typed_relation(
        &mut base,
        ("Region_Y", "Location"),
        "hosts",
        ("Buyer_B", "Company"),
    );

    let results = discover(&base, &news_graph(), "Storm_Z").unwrap();
    assert!(results.iter().all(|r| r.target != "Buyer_B"));
    assert_eq!(results.len(), 1);
}

#[test]
fn test_discover_terminates_on_cycles() {
    let mut news = Graph::new();
    helpers::add_typed_relation(&mut news, ("a", "Event"), "r", ("b", "Event"));
    helpers::add_typed_relation(&mut news, ("b", "Event"), "r", ("c", "Event"));
    helpers::add_typed_relation(&mut news, ("c", "Event"), "r", ("a", "Event"));
    let mut base = Graph::new();
    base.add_node("Isolated_Risk", "Risk");

    let results = discover(&base, &news, "a").unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_custom_hop_bound() {
    let config = SearchConfig::default().with_max_path_len(4);
    let results = discover_with_config(&base_graph(), &news_graph(), "Storm_Z", &config).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].length, 5);

    let config = SearchConfig::default().with_max_path_len(3);
    let results = discover_with_config(&base_graph(), &news_graph(), "Storm_Z", &config).unwrap();
    assert!(results.is_empty());
}

#[test]
fn test_custom_target_types() {
    let config = SearchConfig::default().with_target_types(["Resource"]);
    let results = discover_with_config(&base_graph(), &news_graph(), "Storm_Z", &config).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].target, "Material_X");
}

#[test]
fn test_malformed_graph_is_an_error_not_an_empty_result() {
    let mut news = news_graph();
    news.add_edge("Storm_Z", "Supplier_A", "  ");

    let err = discover(&base_graph(), &news, "Storm_Z").unwrap_err();
    assert!(err.is_structural());
    assert!(matches!(err, GraphError::MalformedEdge { .. }));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SearchConfig::default().with_max_path_len(0);
    let err = discover_with_config(&base_graph(), &news_graph(), "Storm_Z", &config).unwrap_err();
    assert!(matches!(err, GraphError::InvalidConfig { .. }));
}

#[test]
fn test_report_distinguishes_outcomes() {
    let config = SearchConfig::default();

    let found = discover_report(&base_graph(), &news_graph(), "Storm_Z", &config).unwrap();
    assert_eq!(found.status, DiscoveryStatus::Found);
    assert_eq!(found.selection, Some(TargetSelection::Primary));
    assert!(found.bridges.contains("Supplier_A"));
    assert_eq!(found.results.len(), 1);

    let absent = discover_report(&base_graph(), &news_graph(), "Volcano_V", &config).unwrap();
    assert_eq!(absent.status, DiscoveryStatus::StartAbsent);
    assert!(absent.results.is_empty());

    let mut disconnected = news_graph();
    disconnected.add_node("Rumor_R", "Event");
    let no_path = discover_report(&base_graph(), &disconnected, "Rumor_R", &config).unwrap();
    assert_eq!(no_path.status, DiscoveryStatus::NoPath);

    let mut plain = Graph::new();
    plain.add_node("Supplier_A", "Entity");
    let no_targets = discover_report(&plain, &news_graph(), "Storm_Z", &config).unwrap();
    assert_eq!(no_targets.status, DiscoveryStatus::NoTargets);
    assert_eq!(no_targets.selection, None);
}
