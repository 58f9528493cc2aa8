//! Graph algorithms module
//!
//! Algorithms are implemented in the `egonet-algorithms` crate.
//! This module provides the integration/adapter layer.

pub mod analysis;

use crate::graph::SocialGraph;
use egonet_algorithms::GraphView;

// Re-export algorithms
pub use egonet_algorithms::{
    betweenness_centrality, closeness_centrality, connected_components, count_triangles,
    degree_centrality, eigenvector_centrality, label_propagation, louvain, modularity,
    CommunityResult, ComponentResult, EigenvectorConfig, LabelPropagationConfig, LouvainConfig,
};

pub use analysis::{
    analyze, summarize, AnalysisReport, CentralityMeasure, CentralityReport, CommunitySummary,
    GraphSummary, RankedNode,
};

/// Build a dense CSR view of the graph for algorithm execution.
///
/// Nodes are indexed in ascending id order, so index assignment does not
/// depend on hash iteration order.
pub fn build_view(graph: &SocialGraph) -> GraphView {
    let index_to_node: Vec<u64> = graph.nodes().iter().map(|n| n.as_u64()).collect();

    let node_to_index: std::collections::HashMap<u64, usize> = index_to_node
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();

    let adjacency: Vec<Vec<usize>> = index_to_node
        .iter()
        .map(|&id| {
            graph
                .neighbors(id.into())
                .iter()
                .filter_map(|n| node_to_index.get(&n.as_u64()).copied())
                .collect()
        })
        .collect();

    GraphView::from_adjacency_list(index_to_node, adjacency)
}
