//! In-memory social graph storage
//!
//! A simple, undirected, unweighted graph keyed by `NodeId`. Nodes enter the
//! graph through edge insertion; edge insertion is idempotent and self-loops
//! are rejected.

use super::types::{Edge, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Undirected simple graph
///
/// Uses hash maps for O(1) lookup performance:
/// - adjacency: NodeId -> set of neighbor NodeIds (both directions stored)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialGraph {
    /// Neighbor sets for every node, including isolated ones
    adjacency: FxHashMap<NodeId, FxHashSet<NodeId>>,

    /// Number of undirected edges
    edge_count: usize,
}

impl SocialGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        SocialGraph::default()
    }

    /// Add a node without edges. Returns true if the node was new.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, FxHashSet::default());
        true
    }

    /// Insert the undirected edge `{u, v}`, creating missing endpoints.
    ///
    /// Returns true if the edge was new. Inserting an existing edge or a
    /// self-loop leaves the graph unchanged and returns false.
    pub fn add_edge(&mut self, u: impl Into<NodeId>, v: impl Into<NodeId>) -> bool {
        let (u, v) = (u.into(), v.into());
        if u == v {
            return false;
        }

        let inserted = self.adjacency.entry(u).or_default().insert(v);
        self.adjacency.entry(v).or_default().insert(u);
        if inserted {
            self.edge_count += 1;
        }
        inserted
    }

    pub fn has_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adjacency
            .get(&u)
            .map_or(false, |neighbors| neighbors.contains(&v))
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of neighbors of `id` (0 for unknown nodes)
    pub fn degree(&self, id: NodeId) -> usize {
        self.adjacency.get(&id).map_or(0, |neighbors| neighbors.len())
    }

    /// Neighbors of `id` in ascending order
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = self
            .adjacency
            .get(&id)
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default();
        neighbors.sort_unstable();
        neighbors
    }

    /// All nodes in ascending order
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// All edges in ascending order, each reported once
    pub fn edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .adjacency
            .iter()
            .flat_map(|(&u, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&v| u < v)
                    .map(move |&v| Edge::new(u, v))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Fold another graph into this one (node and edge set union)
    pub fn union(&mut self, other: &SocialGraph) {
        for (&u, neighbors) in &other.adjacency {
            self.add_node(u);
            for &v in neighbors {
                if u < v {
                    self.add_edge(u, v);
                }
            }
        }
    }

    /// Induced subgraph over `nodes`: exactly those nodes (unknown ids are
    /// ignored) and every edge whose endpoints are both among them.
    pub fn induced_subgraph(&self, nodes: &[NodeId]) -> SocialGraph {
        let keep: FxHashSet<NodeId> = nodes
            .iter()
            .copied()
            .filter(|id| self.has_node(*id))
            .collect();

        let mut subgraph = SocialGraph::new();
        for &u in &keep {
            subgraph.add_node(u);
            for &v in &self.adjacency[&u] {
                if u < v && keep.contains(&v) {
                    subgraph.add_edge(u, v);
                }
            }
        }
        subgraph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_creates_nodes() {
        let mut graph = SocialGraph::new();
        assert!(graph.add_edge(1u64, 2u64));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge(NodeId(1), NodeId(2)));
        assert!(graph.has_edge(NodeId(2), NodeId(1)));
    }

    #[test]
    fn test_add_edge_is_idempotent() {
        let mut graph = SocialGraph::new();
        assert!(graph.add_edge(1u64, 2u64));
        assert!(!graph.add_edge(1u64, 2u64));
        assert!(!graph.add_edge(2u64, 1u64));

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(NodeId(1)), 1);
    }

    #[test]
    fn test_self_loops_are_rejected() {
        let mut graph = SocialGraph::new();
        assert!(!graph.add_edge(7u64, 7u64));

        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_nodes_and_edges_are_sorted() {
        let mut graph = SocialGraph::new();
        graph.add_edge(3u64, 1u64);
        graph.add_edge(2u64, 3u64);
        graph.add_node(9u64);

        assert_eq!(graph.nodes(), vec![NodeId(1), NodeId(2), NodeId(3), NodeId(9)]);
        assert_eq!(graph.edges(), vec![Edge::new(1u64, 3u64), Edge::new(2u64, 3u64)]);
        assert_eq!(graph.neighbors(NodeId(3)), vec![NodeId(1), NodeId(2)]);
        assert!(graph.neighbors(NodeId(42)).is_empty());
    }

    #[test]
    fn test_union() {
        let mut left = SocialGraph::new();
        left.add_edge(1u64, 2u64);

        let mut right = SocialGraph::new();
        right.add_edge(2u64, 1u64);
        right.add_edge(2u64, 3u64);
        right.add_node(4u64);

        left.union(&right);

        assert_eq!(left.node_count(), 4);
        assert_eq!(left.edge_count(), 2);
    }

    #[test]
    fn test_induced_subgraph() {
        let mut graph = SocialGraph::new();
        graph.add_edge(1u64, 2u64);
        graph.add_edge(2u64, 3u64);
        graph.add_edge(3u64, 4u64);

        let sub = graph.induced_subgraph(&[NodeId(1), NodeId(2), NodeId(4), NodeId(99)]);

        assert_eq!(sub.nodes(), vec![NodeId(1), NodeId(2), NodeId(4)]);
        assert_eq!(sub.edges(), vec![Edge::new(1u64, 2u64)]);
        assert_eq!(sub.degree(NodeId(4)), 0);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut a = SocialGraph::new();
        a.add_edge(1u64, 2u64);
        a.add_edge(2u64, 3u64);

        let mut b = SocialGraph::new();
        b.add_edge(3u64, 2u64);
        b.add_edge(2u64, 1u64);

        assert_eq!(a, b);
    }
}
