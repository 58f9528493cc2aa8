//! Node centrality measures
//!
//! Degree, betweenness, closeness and eigenvector centrality for undirected,
//! unweighted graph views. Scores follow the usual normalizations so they can be
//! compared across graphs of different sizes.

use super::common::{GraphView, NodeId};
use super::traversal::bfs_distances;
use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};

fn to_node_map(view: &GraphView, scores: Vec<f64>) -> HashMap<NodeId, f64> {
    let mut result = HashMap::with_capacity(view.node_count);
    for (idx, score) in scores.into_iter().enumerate() {
        result.insert(view.index_to_node[idx], score);
    }
    result
}

/// Degree centrality: fraction of the other nodes each node is adjacent to.
///
/// A graph with a single node gives that node a score of 1.0.
pub fn degree_centrality(view: &GraphView) -> HashMap<NodeId, f64> {
    let n = view.node_count;
    if n == 1 {
        return to_node_map(view, vec![1.0]);
    }

    let scale = if n > 1 { 1.0 / (n - 1) as f64 } else { 0.0 };
    let scores = (0..n).map(|i| view.degree(i) as f64 * scale).collect();
    to_node_map(view, scores)
}

/// Single-source dependency accumulation of Brandes' algorithm
fn source_dependencies(view: &GraphView, s: usize) -> Vec<f64> {
    let n = view.node_count;
    let mut stack = Vec::with_capacity(n);
    let mut pred: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0f64; n];
    let mut dist: Vec<i64> = vec![-1; n];

    sigma[s] = 1.0;
    dist[s] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        for &w in view.neighbors(v) {
            if dist[w] < 0 {
                dist[w] = dist[v] + 1;
                queue.push_back(w);
            }
            if dist[w] == dist[v] + 1 {
                sigma[w] += sigma[v];
                pred[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0f64; n];
    while let Some(w) = stack.pop() {
        for &v in &pred[w] {
            delta[v] += (sigma[v] / sigma[w]) * (1.0 + delta[w]);
        }
    }
    delta[s] = 0.0;
    delta
}

/// Betweenness centrality (Brandes, 2001).
///
/// Every undirected pair is discovered from both endpoints, so raw scores are halved.
/// With `normalized`, scores are divided by the number of pairs not containing the node,
/// `(n - 1)(n - 2) / 2`. Sources are processed in parallel.
pub fn betweenness_centrality(view: &GraphView, normalized: bool) -> HashMap<NodeId, f64> {
    let n = view.node_count;

    let totals = (0..n)
        .into_par_iter()
        .map(|s| source_dependencies(view, s))
        .reduce(
            || vec![0.0; n],
            |mut acc, delta| {
                for (a, d) in acc.iter_mut().zip(delta) {
                    *a += d;
                }
                acc
            },
        );

    let scale = if normalized {
        if n <= 2 {
            1.0
        } else {
            1.0 / ((n - 1) * (n - 2)) as f64
        }
    } else {
        0.5
    };

    let scores = totals.into_iter().map(|b| b * scale).collect();
    to_node_map(view, scores)
}

/// Closeness centrality with the Wasserman-Faust correction.
///
/// For a node reaching `r - 1` other nodes at total distance `d`:
/// `closeness = ((r - 1) / d) * ((r - 1) / (n - 1))`. Nodes that reach nothing score 0.0.
pub fn closeness_centrality(view: &GraphView) -> HashMap<NodeId, f64> {
    let n = view.node_count;

    let scores: Vec<f64> = (0..n)
        .into_par_iter()
        .map(|u| {
            let (reached, total) = bfs_distances(view, u)
                .into_iter()
                .flatten()
                .fold((0usize, 0usize), |(r, t), d| (r + 1, t + d));

            if total == 0 || n <= 1 {
                return 0.0;
            }
            let others = (reached - 1) as f64;
            (others / total as f64) * (others / (n - 1) as f64)
        })
        .collect();

    to_node_map(view, scores)
}

/// Eigenvector centrality configuration
#[derive(Debug, Clone)]
pub struct EigenvectorConfig {
    /// Maximum number of power iterations
    pub max_iterations: usize,
    /// Per-node convergence tolerance
    pub tolerance: f64,
}

impl Default for EigenvectorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-6,
        }
    }
}

/// Result of eigenvector centrality
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EigenvectorResult {
    pub scores: HashMap<NodeId, f64>,
    pub iterations: usize,
    pub converged: bool,
}

/// Eigenvector centrality via power iteration.
///
/// Iterates `x <- (A + I) x` with L2 normalization; the identity shift keeps
/// bipartite graphs from oscillating. Converged once the L1 change drops below
/// `n * tolerance`. The last iterate is returned even without convergence.
pub fn eigenvector_centrality(view: &GraphView, config: &EigenvectorConfig) -> EigenvectorResult {
    let n = view.node_count;
    if n == 0 {
        return EigenvectorResult {
            scores: HashMap::new(),
            iterations: 0,
            converged: true,
        };
    }

    let mut x = vec![1.0 / n as f64; n];
    let mut iterations = 0;
    let mut converged = false;

    for iter in 0..config.max_iterations {
        iterations = iter + 1;
        let last = x.clone();

        for (u, &x_u) in last.iter().enumerate() {
            for &v in view.neighbors(u) {
                x[v] += x_u;
            }
        }

        let norm = x.iter().map(|v| v * v).sum::<f64>().sqrt();
        let norm = if norm == 0.0 { 1.0 } else { norm };
        for v in x.iter_mut() {
            *v /= norm;
        }

        let diff: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
        if diff < n as f64 * config.tolerance {
            converged = true;
            break;
        }
    }

    EigenvectorResult {
        scores: to_node_map(view, x),
        iterations,
        converged,
    }
}
