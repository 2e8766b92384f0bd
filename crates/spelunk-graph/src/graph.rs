//! Adjacency-list graph: [`NodeId`] and [`Graph`].
//!
//! Edges are undirected and carry a `u32` weight, so weights are
//! non-negative by construction. Each edge is recorded in the adjacency
//! list of both endpoints.

use std::fmt;

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Stable identifier of a node in a [`Graph`].
///
/// Ids are dense indices handed out sequentially by [`Graph::add_node`].
/// Identity is by value: two `NodeId`s are the same node exactly when they
/// compare equal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    /// Create a node id from a raw index.
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The raw index of this id.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// An undirected graph with `u32`-weighted edges, stored as adjacency lists.
///
/// Parallel edges are allowed; self-loops are not. The graph is append-only:
/// nodes and edges can be added but not removed.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    /// `adjacency[n]` holds the `(weight, other_endpoint)` pairs of every
    /// edge incident to node `n`.
    adjacency: Vec<Vec<(u32, NodeId)>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            adjacency: Vec::with_capacity(nodes),
        }
    }

    /// Add a node and return its id.
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.adjacency.len());
        self.adjacency.push(Vec::new());
        id
    }

    /// Add `count` nodes and return their ids in order.
    pub fn add_nodes(&mut self, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.add_node()).collect()
    }

    /// Add an undirected edge between `a` and `b` with the given weight.
    ///
    /// The edge becomes visible from both endpoints.
    ///
    /// # Panics
    /// Panics if `a` or `b` is not a node of this graph, or if `a == b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: u32) {
        assert!(
            self.contains(a) && self.contains(b),
            "add_edge: both endpoints must be nodes of this graph"
        );
        assert!(a != b, "add_edge: self-loops are not allowed");
        self.adjacency[a.0].push((weight, b));
        self.adjacency[b.0].push((weight, a));
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Whether the graph has no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `n` is a node of this graph.
    #[inline]
    pub fn contains(&self, n: NodeId) -> bool {
        n.0 < self.adjacency.len()
    }

    /// Iterator over all node ids, in increasing order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.adjacency.len()).map(NodeId)
    }

    /// The `(weight, other_endpoint)` pairs of every edge at `n`, in
    /// insertion order.
    ///
    /// Unknown ids have no edges, so they yield an empty slice.
    pub fn edges(&self, n: NodeId) -> &[(u32, NodeId)] {
        self.adjacency.get(n.0).map_or(&[], Vec::as_slice)
    }

    /// The weight of the edge between `a` and `b`, or `None` if they are
    /// not adjacent. Parallel edges resolve to the smallest weight.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<u32> {
        self.edges(a)
            .iter()
            .filter(|&&(_, other)| other == b)
            .map(|&(w, _)| w)
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_nodes_and_edges() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_edge(a, b, 3);
        g.add_edge(b, c, 5);

        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edges(a), &[(3, b)]);
        assert_eq!(g.edges(c), &[(5, b)]);
        // b sees both edges.
        assert_eq!(g.edges(b), &[(3, a), (5, c)]);
    }

    #[test]
    fn edges_visible_from_both_endpoints() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        g.add_edge(a, b, 7);

        assert_eq!(g.edges(a), &[(7, b)]);
        assert_eq!(g.edges(b), &[(7, a)]);
    }

    #[test]
    fn edge_weight_lookup() {
        let mut g = Graph::new();
        let ids = g.add_nodes(3);
        g.add_edge(ids[0], ids[1], 4);

        assert_eq!(g.edge_weight(ids[0], ids[1]), Some(4));
        assert_eq!(g.edge_weight(ids[1], ids[0]), Some(4));
        assert_eq!(g.edge_weight(ids[0], ids[2]), None);
    }

    #[test]
    fn edge_weight_parallel_edges_take_minimum() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        g.add_edge(a, b, 9);
        g.add_edge(a, b, 2);
        g.add_edge(a, b, 5);

        assert_eq!(g.edge_weight(a, b), Some(2));
        assert_eq!(g.edge_weight(b, a), Some(2));
    }

    #[test]
    fn unknown_id_has_no_edges() {
        let mut g = Graph::new();
        let a = g.add_node();
        let stranger = NodeId::new(42);

        assert!(!g.contains(stranger));
        assert!(g.edges(stranger).is_empty());
        assert_eq!(g.edge_weight(a, stranger), None);
    }

    #[test]
    fn nodes_iterator_in_order() {
        let mut g = Graph::new();
        let ids = g.add_nodes(4);
        let seen: Vec<NodeId> = g.nodes().collect();
        assert_eq!(seen, ids);
    }

    #[test]
    #[should_panic]
    fn self_loop_panics() {
        let mut g = Graph::new();
        let a = g.add_node();
        g.add_edge(a, a, 1);
    }

    #[test]
    #[should_panic]
    fn unknown_endpoint_panics() {
        let mut g = Graph::new();
        let a = g.add_node();
        g.add_edge(a, NodeId::new(99), 1);
    }

    #[test]
    fn node_id_display() {
        assert_eq!(NodeId::new(12).to_string(), "n12");
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn node_id_round_trip() {
        let id = NodeId::new(7);
        let json = serde_json::to_string(&id).unwrap();
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn graph_round_trip() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_edge(a, b, 3);
        g.add_edge(b, c, 5);

        let json = serde_json::to_string(&g).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.node_count(), 3);
        assert_eq!(back.edges(b), g.edges(b));
        assert_eq!(back.edge_weight(a, b), Some(3));
    }
}
