//! Egonet: social graph construction and analysis from ego networks
//!
//! Builds one undirected social graph out of per-user "ego-network" edge
//! lists (files named `<ego_id>.edges`), draws a uniform random induced
//! subgraph, and runs community detection and centrality analytics on it.
//!
//! # Pipeline
//!
//! - [`io`]: discover and parse ego-network files (strict or lenient parsing)
//! - [`merge`]: fold all files into the global graph; every ego is linked to
//!   each friend mentioned in its file, duplicates collapse
//! - [`sample`]: uniform sampling without replacement, optionally seeded
//! - [`algo`]: communities (Louvain, label propagation) and degree,
//!   betweenness, closeness and eigenvector centrality
//! - [`export`]: Graphviz rendering and JSON reports
//! - [`pipeline`]: all of the above driven by an [`EgonetConfig`]
//!
//! ## Example Usage
//!
//! ```rust
//! use egonet::graph::{Edge, NodeId};
//! use egonet::io::EgoNetwork;
//! use egonet::merge::build_global_graph;
//! use egonet::sample::Sampler;
//!
//! // 1.edges holds "2 3", 2.edges holds "3 4"
//! let files = vec![
//!     EgoNetwork::from_edges(1u64, "1.edges", vec![Edge::new(2u64, 3u64)]),
//!     EgoNetwork::from_edges(2u64, "2.edges", vec![Edge::new(3u64, 4u64)]),
//! ];
//!
//! let (graph, _stats) = build_global_graph(&files);
//! assert_eq!(graph.node_count(), 4);
//! assert_eq!(graph.edge_count(), 5);
//! assert!(graph.has_edge(NodeId(1), NodeId(3)));
//!
//! // Reproducible sample of two nodes
//! let subgraph = Sampler::new(Some(7)).sample(&graph, 2).unwrap();
//! assert_eq!(subgraph.node_count(), 2);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod io;
pub mod merge;
pub mod pipeline;
pub mod sample;

// Re-export main types for convenience
pub use graph::{Edge, NodeId, SocialGraph};

pub use io::{EgoNetwork, ParsePolicy};

pub use merge::{build_global_graph, load_ego_networks, merge_ego_network, MergeStats};

pub use sample::{Sampler, Subgraph};

pub use config::{
    AnalysisConfig, CommunityAlgorithm, EgonetConfig, InputConfig, OutputConfig, SamplingConfig,
};

pub use error::{EgonetError, EgonetResult};

pub use pipeline::{build_from_directory, run, InputStats, RunReport};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
