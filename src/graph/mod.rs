//! Core social graph implementation
//!
//! This module implements the undirected, unweighted data model:
//! - Nodes are plain integer identifiers
//! - Edges are unordered pairs; duplicates collapse and self-loops are rejected
//! - In-memory storage with hash-based adjacency sets

pub mod store;
pub mod types;

// Re-export main types
pub use store::SocialGraph;
pub use types::{Edge, NodeId};
