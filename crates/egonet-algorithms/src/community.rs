//! Community detection algorithms
//!
//! Connected components, Louvain modularity optimization and label propagation
//! over undirected graph views.

use super::common::{GraphView, NodeId};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::collections::{BTreeMap, HashMap};

/// Result of the connected components algorithm
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComponentResult {
    /// Map of Component ID -> List of NodeIds
    pub components: HashMap<usize, Vec<NodeId>>,
    /// Map of NodeId -> Component ID
    pub node_component: HashMap<NodeId, usize>,
}

impl ComponentResult {
    /// Number of components
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Size of the largest component (0 for an empty graph)
    pub fn largest(&self) -> usize {
        self.components.values().map(Vec::len).max().unwrap_or(0)
    }
}

/// Result of a community detection run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CommunityResult {
    /// Map of NodeId -> community ID (contiguous, 0..communities.len())
    pub node_community: HashMap<NodeId, usize>,
    /// Members per community, indexed by community ID, each sorted by NodeId
    pub communities: Vec<Vec<NodeId>>,
    /// Modularity of the partition
    pub modularity: f64,
}

/// Union-Find data structure
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            self.parent[i] = self.find(self.parent[i]); // Path compression
        }
        self.parent[i]
    }

    fn union(&mut self, i: usize, j: usize) {
        let root_i = self.find(i);
        let root_j = self.find(j);

        if root_i != root_j {
            if self.rank[root_i] < self.rank[root_j] {
                self.parent[root_i] = root_j;
            } else if self.rank[root_i] > self.rank[root_j] {
                self.parent[root_j] = root_i;
            } else {
                self.parent[root_j] = root_i;
                self.rank[root_i] += 1;
            }
        }
    }
}

/// Connected Components
///
/// Finds all disjoint subgraphs in the graph. Component IDs are contiguous and
/// assigned in order of each component's smallest node index.
pub fn connected_components(view: &GraphView) -> ComponentResult {
    let n = view.node_count;
    let mut uf = UnionFind::new(n);

    for u_idx in 0..n {
        for &v_idx in view.neighbors(u_idx) {
            uf.union(u_idx, v_idx);
        }
    }

    let mut root_to_component = HashMap::new();
    let mut components: HashMap<usize, Vec<NodeId>> = HashMap::new();
    let mut node_component = HashMap::with_capacity(n);

    for i in 0..n {
        let root = uf.find(i);
        let next_id = root_to_component.len();
        let component = *root_to_component.entry(root).or_insert(next_id);
        let node_id = view.index_to_node[i];

        components.entry(component).or_default().push(node_id);
        node_component.insert(node_id, component);
    }

    ComponentResult {
        components,
        node_component,
    }
}

/// Louvain configuration
#[derive(Debug, Clone)]
pub struct LouvainConfig {
    /// Resolution parameter; values above 1.0 favour smaller communities
    pub resolution: f64,
    /// Maximum local-moving passes per level
    pub max_iterations: usize,
    /// Maximum number of aggregation levels
    pub max_levels: usize,
}

impl Default for LouvainConfig {
    fn default() -> Self {
        Self {
            resolution: 1.0,
            max_iterations: 100,
            max_levels: 32,
        }
    }
}

/// Weighted adjacency of one Louvain level. Self-loops carry intra-community weight.
type LevelGraph = Vec<Vec<(usize, f64)>>;

/// Louvain community detection (Blondel et al., 2008).
///
/// Alternates local node moves that increase modularity with aggregation of
/// communities into super-nodes, until no move improves the partition.
/// Nodes are visited in index order, so the result is deterministic.
pub fn louvain(view: &GraphView, config: &LouvainConfig) -> CommunityResult {
    let n = view.node_count;
    let mut membership: Vec<usize> = (0..n).collect();

    let mut level: LevelGraph = (0..n)
        .map(|u| view.neighbors(u).iter().map(|&v| (v, 1.0)).collect())
        .collect();
    let two_m: f64 = level.iter().flatten().map(|&(_, w)| w).sum();

    if two_m > 0.0 {
        for _ in 0..config.max_levels {
            let (community, moved) =
                local_moving(&level, two_m, config.resolution, config.max_iterations);
            if !moved {
                break;
            }

            let (community, k) = renumber(&community);
            for m in membership.iter_mut() {
                *m = community[*m];
            }

            let level_size = level.len();
            level = aggregate(&level, &community, k);
            if k == level_size {
                break;
            }
        }
    }

    build_result(view, membership, config.resolution)
}

fn local_moving(
    graph: &LevelGraph,
    two_m: f64,
    resolution: f64,
    max_iterations: usize,
) -> (Vec<usize>, bool) {
    let n = graph.len();
    let mut community: Vec<usize> = (0..n).collect();
    let degree: Vec<f64> = graph
        .iter()
        .map(|row| row.iter().map(|&(_, w)| w).sum())
        .collect();
    let mut sigma_tot = degree.clone();
    let mut moved = false;

    for _ in 0..max_iterations {
        let mut improved = false;

        for u in 0..n {
            let current = community[u];
            let k_u = degree[u];
            sigma_tot[current] -= k_u;

            // Weight from u to each neighbouring community, self-loop excluded
            let mut links: BTreeMap<usize, f64> = BTreeMap::new();
            for &(v, w) in &graph[u] {
                if v != u {
                    *links.entry(community[v]).or_insert(0.0) += w;
                }
            }

            let gain = |c: usize, k_in: f64| k_in - resolution * sigma_tot[c] * k_u / two_m;

            let mut best = current;
            let mut best_gain = gain(current, links.get(&current).copied().unwrap_or(0.0));
            for (&c, &k_in) in &links {
                let g = gain(c, k_in);
                if g > best_gain + 1e-12 {
                    best = c;
                    best_gain = g;
                }
            }

            sigma_tot[best] += k_u;
            if best != current {
                community[u] = best;
                improved = true;
                moved = true;
            }
        }

        if !improved {
            break;
        }
    }

    (community, moved)
}

fn aggregate(graph: &LevelGraph, community: &[usize], k: usize) -> LevelGraph {
    let mut merged: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); k];
    for (u, row) in graph.iter().enumerate() {
        let cu = community[u];
        for &(v, w) in row {
            *merged[cu].entry(community[v]).or_insert(0.0) += w;
        }
    }
    merged
        .into_iter()
        .map(|row| row.into_iter().collect())
        .collect()
}

/// Renumber labels to be contiguous in order of first appearance
fn renumber(labels: &[usize]) -> (Vec<usize>, usize) {
    let mut id_map: HashMap<usize, usize> = HashMap::new();
    let renumbered = labels
        .iter()
        .map(|&l| {
            let next_id = id_map.len();
            *id_map.entry(l).or_insert(next_id)
        })
        .collect();
    (renumbered, id_map.len())
}

fn build_result(view: &GraphView, labels: Vec<usize>, resolution: f64) -> CommunityResult {
    let (labels, k) = renumber(&labels);
    let modularity = modularity(view, &labels, resolution);

    let mut communities = vec![Vec::new(); k];
    let mut node_community = HashMap::with_capacity(view.node_count);
    for (idx, &c) in labels.iter().enumerate() {
        let node_id = view.index_to_node[idx];
        communities[c].push(node_id);
        node_community.insert(node_id, c);
    }
    for members in communities.iter_mut() {
        members.sort_unstable();
    }

    CommunityResult {
        node_community,
        communities,
        modularity,
    }
}

/// Label propagation configuration
#[derive(Debug, Clone)]
pub struct LabelPropagationConfig {
    /// Maximum number of sweeps over all nodes
    pub max_iterations: usize,
    /// Seed for the per-sweep node order shuffle
    pub seed: u64,
}

impl Default for LabelPropagationConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            seed: 42,
        }
    }
}

/// Label propagation community detection (Raghavan et al., 2007).
///
/// Each node repeatedly adopts the most frequent label among its neighbors.
/// Ties break towards the smallest label; isolated nodes keep their own label.
pub fn label_propagation(view: &GraphView, config: &LabelPropagationConfig) -> CommunityResult {
    let n = view.node_count;
    let mut labels: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut order: Vec<usize> = (0..n).collect();

    for _ in 0..config.max_iterations {
        order.shuffle(&mut rng);
        let mut changed = false;

        for &u in &order {
            let neighbors = view.neighbors(u);
            if neighbors.is_empty() {
                continue;
            }

            let mut counts: HashMap<usize, usize> = HashMap::new();
            for &v in neighbors {
                *counts.entry(labels[v]).or_insert(0) += 1;
            }

            let mut best_label = labels[u];
            let mut best_count = counts.get(&best_label).copied().unwrap_or(0);
            for (&label, &count) in &counts {
                if count > best_count || (count == best_count && label < best_label) {
                    best_label = label;
                    best_count = count;
                }
            }

            if best_label != labels[u] {
                labels[u] = best_label;
                changed = true;
            }
        }

        if !changed {
            break;
        }
    }

    build_result(view, labels, 1.0)
}

/// Modularity of a partition given as one label per node index.
///
/// `Q = sum_c [ L_c / m - resolution * (d_c / 2m)^2 ]` where `L_c` is the number of
/// intra-community edges and `d_c` the total degree of community `c`.
/// Returns 0.0 for graphs without edges.
pub fn modularity(view: &GraphView, labels: &[usize], resolution: f64) -> f64 {
    let m = view.edge_count() as f64;
    if m == 0.0 {
        return 0.0;
    }

    let mut internal: HashMap<usize, f64> = HashMap::new();
    let mut degree_sum: HashMap<usize, f64> = HashMap::new();

    for u in 0..view.node_count {
        let cu = labels[u];
        *degree_sum.entry(cu).or_insert(0.0) += view.degree(u) as f64;
        for &v in view.neighbors(u) {
            if u < v && labels[v] == cu {
                *internal.entry(cu).or_insert(0.0) += 1.0;
            }
        }
    }

    degree_sum
        .iter()
        .map(|(c, &d)| {
            let l = internal.get(c).copied().unwrap_or(0.0);
            l / m - resolution * (d / (2.0 * m)).powi(2)
        })
        .sum()
}
