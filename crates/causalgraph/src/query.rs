//! Query builder for fluent node lookups.
//!
//! Used to locate candidate targets and start nodes without walking the node
//! map by hand.

use crate::graph::{Direction, Graph, Node, NodeId};

/// A filter predicate that can be applied to nodes.
type FilterFn = Box<dyn Fn(&Node) -> bool>;

/// Fluent query builder over a [`Graph`].
///
/// # Examples
///
/// ```
/// use causalgraph::Graph;
///
/// let mut graph = Graph::new();
/// graph.add_node("Late_Delivery_Penalty", "Penalty");
/// graph.add_node("Supplier_A", "Company");
///
/// let penalties = graph.query().node_type("Penalty").execute();
/// assert_eq!(penalties, vec!["Late_Delivery_Penalty".to_string()]);
/// ```
pub struct QueryBuilder<'a> {
    graph: &'a Graph,
    filters: Vec<FilterFn>,
    neighborhood: Option<(String, Direction)>,
}

impl<'a> QueryBuilder<'a> {
    /// Create a new query builder for the given graph.
    pub fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            filters: Vec::new(),
            neighborhood: None,
        }
    }

    /// Filter nodes by type.
    pub fn node_type(mut self, node_type: &str) -> Self {
        let node_type = node_type.to_string();
        self.filters.push(Box::new(move |node| node.node_type == node_type));
        self
    }

    /// Filter nodes whose type is any of `types`.
    ///
    /// An empty list matches nothing.
    pub fn node_types<S: AsRef<str>>(mut self, types: &[S]) -> Self {
        let types: Vec<String> = types.iter().map(|t| t.as_ref().to_string()).collect();
        self.filters.push(Box::new(move |node| node.has_type(&types)));
        self
    }

    /// Only consider direct neighbors of `id` in the given direction.
    pub fn adjacent_to(mut self, id: &str, direction: Direction) -> Self {
        self.neighborhood = Some((id.to_string(), direction));
        self
    }

    /// Filter nodes with no incoming edges.
    pub fn roots(mut self) -> Self {
        let roots: Vec<NodeId> = self
            .graph
            .nodes()
            .filter(|n| self.graph.in_degree(&n.id) == 0)
            .map(|n| n.id.clone())
            .collect();
        self.filters.push(Box::new(move |node| roots.contains(&node.id)));
        self
    }

    /// Execute the query and return matching node IDs in graph order.
    pub fn execute(&self) -> Vec<NodeId> {
        self.candidates()
            .filter(|node| self.matches_filters(node))
            .map(|node| node.id.clone())
            .collect()
    }

    /// Check if any nodes match the query (short-circuits on first match).
    pub fn exists(&self) -> bool {
        self.candidates().any(|node| self.matches_filters(node))
    }

    fn candidates(&self) -> Box<dyn Iterator<Item = &'a Node> + '_> {
        match &self.neighborhood {
            Some((id, direction)) => {
                let graph = self.graph;
                Box::new(
                    graph
                        .neighbors(id, *direction)
                        .into_iter()
                        .filter_map(move |n| graph.node(n)),
                )
            }
            None => Box::new(self.graph.nodes()),
        }
    }

    /// Check if a node matches all filters.
    fn matches_filters(&self, node: &Node) -> bool {
        self.filters.iter().all(|filter| filter(node))
    }
}
