//! Shared utilities for graph algorithms
//!
//! Provides a read-only, optimized view of an undirected graph for algorithm execution.

use std::collections::{BTreeSet, HashMap};

/// Node Identifier type (u64)
pub type NodeId = u64;

/// A dense, integer-indexed view of an undirected graph using Compressed Sparse Row (CSR) format.
///
/// Every undirected edge `{u, v}` is stored twice, once in the row of `u` and once in the
/// row of `v`. Rows are sorted and free of duplicates and self-loops.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,
    /// Mapping from dense index (0..N) back to NodeId
    pub index_to_node: Vec<NodeId>,
    /// Mapping from NodeId to dense index
    pub node_to_index: HashMap<NodeId, usize>,

    /// Offsets into `targets`. Size = node_count + 1
    pub offsets: Vec<usize>,
    /// Contiguous array of neighbor indices
    pub targets: Vec<usize>,
}

impl GraphView {
    /// Get the degree of a node (by index)
    pub fn degree(&self, idx: usize) -> usize {
        self.offsets[idx + 1] - self.offsets[idx]
    }

    /// Get the neighbors of a node (by index)
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.targets[start..end]
    }

    /// Check adjacency of two nodes (by index)
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.neighbors(u).binary_search(&v).is_ok()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.targets.len() / 2
    }

    /// Build a view from per-node adjacency lists over dense indices.
    ///
    /// Lists are sorted and deduplicated; self-loops and out-of-range indices are dropped.
    /// The lists are expected to be symmetric.
    pub fn from_adjacency_list(index_to_node: Vec<NodeId>, adjacency: Vec<Vec<usize>>) -> Self {
        let node_count = index_to_node.len();
        let mut node_to_index = HashMap::with_capacity(node_count);
        for (idx, &node_id) in index_to_node.iter().enumerate() {
            node_to_index.insert(node_id, idx);
        }

        let mut offsets = Vec::with_capacity(node_count + 1);
        let mut targets = Vec::new();

        offsets.push(0);
        for (u, mut neighbors) in adjacency.into_iter().enumerate().take(node_count) {
            neighbors.retain(|&v| v != u && v < node_count);
            neighbors.sort_unstable();
            neighbors.dedup();
            targets.extend(neighbors);
            offsets.push(targets.len());
        }
        // Pad rows for nodes that had no adjacency entry
        while offsets.len() < node_count + 1 {
            offsets.push(targets.len());
        }

        GraphView {
            node_count,
            index_to_node,
            node_to_index,
            offsets,
            targets,
        }
    }

    /// Build a view from an undirected edge list. Nodes are indexed in ascending id order.
    pub fn from_edges(edges: &[(NodeId, NodeId)]) -> Self {
        let nodes: BTreeSet<NodeId> = edges.iter().flat_map(|&(u, v)| [u, v]).collect();
        Self::from_nodes_and_edges(nodes, edges)
    }

    /// Build a view over an explicit node set (allowing isolated nodes) and an edge list.
    /// Edges touching unknown nodes are ignored.
    pub fn from_nodes_and_edges(
        nodes: impl IntoIterator<Item = NodeId>,
        edges: &[(NodeId, NodeId)],
    ) -> Self {
        let index_to_node: Vec<NodeId> = nodes
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let lookup: HashMap<NodeId, usize> = index_to_node
            .iter()
            .enumerate()
            .map(|(idx, &id)| (id, idx))
            .collect();

        let mut adjacency = vec![Vec::new(); index_to_node.len()];
        for &(u, v) in edges {
            if let (Some(&ui), Some(&vi)) = (lookup.get(&u), lookup.get(&v)) {
                adjacency[ui].push(vi);
                adjacency[vi].push(ui);
            }
        }

        Self::from_adjacency_list(index_to_node, adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_edges() {
        // 1 - 2 - 3, duplicate and reversed edge collapse
        let view = GraphView::from_edges(&[(1, 2), (2, 3), (2, 1)]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 2);

        let n1 = view.node_to_index[&1];
        let n2 = view.node_to_index[&2];
        let n3 = view.node_to_index[&3];

        assert_eq!(view.degree(n2), 2);
        assert_eq!(view.neighbors(n2), &[n1, n3]);
        assert!(view.has_edge(n1, n2));
        assert!(view.has_edge(n2, n1));
        assert!(!view.has_edge(n1, n3));
    }

    #[test]
    fn test_isolated_nodes_and_self_loops() {
        let view = GraphView::from_nodes_and_edges(vec![5, 7, 9], &[(5, 5), (5, 7), (7, 42)]);

        assert_eq!(view.node_count, 3);
        assert_eq!(view.edge_count(), 1);
        assert_eq!(view.degree(view.node_to_index[&9]), 0);
        assert_eq!(view.index_to_node, vec![5, 7, 9]);
    }
}
