use std::hash::Hash;

use spelunk_graph::{Graph, NodeId};

/// A weighted undirected graph, as seen by the search algorithms.
///
/// Nodes are compared by value identity, never by proximity. Every
/// undirected edge must be reported from both of its endpoints.
pub trait WeightedGraph {
    /// The node handle type.
    type Node: Copy + Eq + Hash;

    /// Append the `(weight, other_endpoint)` pair of every edge at `n`
    /// into `buf`. The caller clears `buf` before calling. Order is
    /// unspecified.
    fn edges(&self, n: Self::Node, buf: &mut Vec<(u32, Self::Node)>);
}

impl WeightedGraph for Graph {
    type Node = NodeId;

    fn edges(&self, n: NodeId, buf: &mut Vec<(u32, NodeId)>) {
        buf.extend_from_slice(Graph::edges(self, n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_reports_edges_through_trait() {
        let mut g = Graph::new();
        let a = g.add_node();
        let b = g.add_node();
        g.add_edge(a, b, 6);

        let mut buf = Vec::new();
        WeightedGraph::edges(&g, a, &mut buf);
        assert_eq!(buf, vec![(6, b)]);

        buf.clear();
        WeightedGraph::edges(&g, b, &mut buf);
        assert_eq!(buf, vec![(6, a)]);
    }
}
