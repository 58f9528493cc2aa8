//! Core type definitions for the social graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a person in the social graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    pub fn new(id: u64) -> Self {
        NodeId(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        NodeId(id)
    }
}

/// An undirected edge, stored with its endpoints in ascending order
/// so that `Edge::new(a, b) == Edge::new(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct Edge {
    a: NodeId,
    b: NodeId,
}

impl Edge {
    pub fn new(u: impl Into<NodeId>, v: impl Into<NodeId>) -> Self {
        let (u, v) = (u.into(), v.into());
        if u <= v {
            Edge { a: u, b: v }
        } else {
            Edge { a: v, b: u }
        }
    }

    /// Endpoints, smaller id first
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.a, self.b)
    }

    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_serializes_as_plain_number() {
        let id: NodeId = 107u64.into();
        assert_eq!(id.to_string(), "107");
        assert_eq!(serde_json::to_string(&id).unwrap(), "107");
        assert_eq!(serde_json::from_str::<NodeId>("348").unwrap(), NodeId(348));
    }

    #[test]
    fn test_edge_is_unordered() {
        let e1 = Edge::new(3u64, 1u64);
        let e2 = Edge::new(1u64, 3u64);
        assert_eq!(e1, e2);
        assert_eq!(e1.endpoints(), (NodeId(1), NodeId(3)));
        assert_eq!(format!("{}", e1), "(1, 3)");
        assert!(!e1.is_self_loop());
        assert!(Edge::new(5u64, 5u64).is_self_loop());
    }

    #[test]
    fn test_edges_sort_by_smaller_endpoint() {
        let mut edges = vec![Edge::new(4u64, 2u64), Edge::new(9u64, 1u64), Edge::new(2u64, 3u64)];
        edges.sort();
        let pairs: Vec<(u64, u64)> = edges
            .iter()
            .map(|e| (e.endpoints().0.as_u64(), e.endpoints().1.as_u64()))
            .collect();
        assert_eq!(pairs, vec![(1, 9), (2, 3), (2, 4)]);
    }
}
