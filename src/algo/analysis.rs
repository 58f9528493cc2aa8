//! Analytics over a (sub)graph: structure summary, communities and centralities

use super::build_view;
use crate::config::{AnalysisConfig, CommunityAlgorithm};
use crate::graph::{NodeId, SocialGraph};
use egonet_algorithms::{
    average_degree, betweenness_centrality, closeness_centrality, connected_components,
    count_triangles, degree_centrality, density, eigenvector_centrality, label_propagation,
    louvain, CommunityResult, EigenvectorConfig, GraphView, LabelPropagationConfig,
    LouvainConfig,
};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Structural statistics of a graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub density: f64,
    pub average_degree: f64,
    pub components: usize,
    pub largest_component: usize,
    pub triangles: usize,
}

/// A node and its score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedNode {
    pub node: u64,
    pub score: f64,
}

/// Scores of one centrality measure plus its top-ranked nodes
#[derive(Debug, Clone, Serialize)]
pub struct CentralityMeasure {
    /// Highest scores first; ties go to the smaller node id
    pub top: Vec<RankedNode>,
    pub scores: BTreeMap<u64, f64>,
}

impl CentralityMeasure {
    fn from_scores(scores: HashMap<u64, f64>, top_k: usize) -> Self {
        let scores: BTreeMap<u64, f64> = scores.into_iter().collect();

        let mut ranked: Vec<RankedNode> = scores
            .iter()
            .map(|(&node, &score)| RankedNode { node, score })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.node.cmp(&b.node)));
        ranked.truncate(top_k);

        CentralityMeasure {
            top: ranked,
            scores,
        }
    }

    pub fn score(&self, node: NodeId) -> Option<f64> {
        self.scores.get(&node.as_u64()).copied()
    }
}

/// The four centrality measures of a graph
#[derive(Debug, Clone, Serialize)]
pub struct CentralityReport {
    pub degree: CentralityMeasure,
    pub betweenness: CentralityMeasure,
    pub closeness: CentralityMeasure,
    pub eigenvector: CentralityMeasure,
    pub eigenvector_iterations: usize,
    pub eigenvector_converged: bool,
}

/// Community detection outcome
#[derive(Debug, Clone, Serialize)]
pub struct CommunitySummary {
    pub algorithm: String,
    pub count: usize,
    /// Community sizes; community `i` has `sizes[i]` members, largest first
    pub sizes: Vec<usize>,
    pub modularity: f64,
    /// Node -> community id
    pub assignments: BTreeMap<u64, usize>,
}

impl CommunitySummary {
    /// Renumber communities so that id 0 is the largest one
    fn from_result(algorithm: CommunityAlgorithm, result: CommunityResult) -> Self {
        let mut order: Vec<usize> = (0..result.communities.len()).collect();
        order.sort_by(|&a, &b| {
            let (ca, cb) = (&result.communities[a], &result.communities[b]);
            cb.len().cmp(&ca.len()).then(ca.first().cmp(&cb.first()))
        });

        let mut new_id = vec![0; order.len()];
        for (rank, &old) in order.iter().enumerate() {
            new_id[old] = rank;
        }

        let sizes = order.iter().map(|&old| result.communities[old].len()).collect();
        let assignments = result
            .node_community
            .iter()
            .map(|(&node, &c)| (node, new_id[c]))
            .collect();

        CommunitySummary {
            algorithm: algorithm.as_str().to_string(),
            count: order.len(),
            sizes,
            modularity: result.modularity,
            assignments,
        }
    }

    pub fn community_of(&self, node: NodeId) -> Option<usize> {
        self.assignments.get(&node.as_u64()).copied()
    }
}

/// Full analytics report of one graph
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub summary: GraphSummary,
    pub communities: CommunitySummary,
    pub centrality: CentralityReport,
}

fn summarize_view(view: &GraphView) -> GraphSummary {
    let components = connected_components(view);
    GraphSummary {
        nodes: view.node_count,
        edges: view.edge_count(),
        density: density(view),
        average_degree: average_degree(view),
        components: components.count(),
        largest_component: components.largest(),
        triangles: count_triangles(view),
    }
}

/// Structural statistics of `graph`
pub fn summarize(graph: &SocialGraph) -> GraphSummary {
    summarize_view(&build_view(graph))
}

/// Run community detection and all centrality measures on `graph`
pub fn analyze(graph: &SocialGraph, config: &AnalysisConfig) -> AnalysisReport {
    let view = build_view(graph);
    let summary = summarize_view(&view);

    info!(
        "Analyzing graph with {} nodes and {} edges",
        summary.nodes, summary.edges
    );

    let result = match config.community {
        CommunityAlgorithm::Louvain => louvain(
            &view,
            &LouvainConfig {
                resolution: config.resolution,
                max_iterations: config.max_iterations,
                ..LouvainConfig::default()
            },
        ),
        CommunityAlgorithm::LabelPropagation => label_propagation(
            &view,
            &LabelPropagationConfig {
                max_iterations: config.max_iterations,
                seed: config.community_seed,
            },
        ),
    };
    let communities = CommunitySummary::from_result(config.community, result);
    info!(
        "Detected {} communities ({}), modularity {:.4}",
        communities.count, communities.algorithm, communities.modularity
    );

    let top_k = config.top_k;
    let degree = CentralityMeasure::from_scores(degree_centrality(&view), top_k);
    let betweenness = CentralityMeasure::from_scores(
        betweenness_centrality(&view, config.normalized_betweenness),
        top_k,
    );
    let closeness = CentralityMeasure::from_scores(closeness_centrality(&view), top_k);

    let eigen = eigenvector_centrality(
        &view,
        &EigenvectorConfig {
            max_iterations: config.eigenvector_max_iterations,
            tolerance: config.eigenvector_tolerance,
        },
    );
    if !eigen.converged {
        warn!(
            "Eigenvector centrality did not converge after {} iterations",
            eigen.iterations
        );
    }

    AnalysisReport {
        summary,
        communities,
        centrality: CentralityReport {
            degree,
            betweenness,
            closeness,
            eigenvector: CentralityMeasure::from_scores(eigen.scores, top_k),
            eigenvector_iterations: eigen.iterations,
            eigenvector_converged: eigen.converged,
        },
    }
}
