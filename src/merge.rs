//! Graph merger: fold ego-network files into one global social graph
//!
//! Each file contributes its friend-to-friend edges plus one synthetic edge
//! from the ego to every friend. Since insertion is idempotent set union,
//! the result does not depend on file order.

use crate::error::EgonetResult;
use crate::graph::SocialGraph;
use crate::io::{read_ego_network, EgoNetwork, ParsePolicy};
use rayon::prelude::*;
use std::path::PathBuf;
use tracing::{debug, info};

/// Counters collected while merging one or more ego networks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    /// Friend-to-friend edges that were new to the graph
    pub edges_added: usize,
    /// Ego-to-friend edges that were new to the graph
    pub ego_links_added: usize,
    /// Self-loops dropped (edge lines `u u`, or an ego listing itself)
    pub self_loops_dropped: usize,
}

impl MergeStats {
    fn absorb(&mut self, other: MergeStats) {
        self.edges_added += other.edges_added;
        self.ego_links_added += other.ego_links_added;
        self.self_loops_dropped += other.self_loops_dropped;
    }
}

/// Fold one ego network into `graph`
pub fn merge_ego_network(graph: &mut SocialGraph, network: &EgoNetwork) -> MergeStats {
    let mut stats = MergeStats::default();

    for edge in &network.edges {
        if edge.is_self_loop() {
            debug!("Dropping self-loop {} in {}", edge, network.path.display());
            stats.self_loops_dropped += 1;
            continue;
        }
        let (u, v) = edge.endpoints();
        if graph.add_edge(u, v) {
            stats.edges_added += 1;
        }
    }

    for &friend in &network.friends {
        if friend == network.ego {
            stats.self_loops_dropped += 1;
            continue;
        }
        if graph.add_edge(network.ego, friend) {
            stats.ego_links_added += 1;
        }
    }

    stats
}

/// Build the global graph from a collection of ego networks
pub fn build_global_graph<'a, I>(networks: I) -> (SocialGraph, MergeStats)
where
    I: IntoIterator<Item = &'a EgoNetwork>,
{
    let mut graph = SocialGraph::new();
    let mut stats = MergeStats::default();

    for network in networks {
        stats.absorb(merge_ego_network(&mut graph, network));
    }

    (graph, stats)
}

/// Parse every path, skipping files whose name is not an ego id.
///
/// With `parallel`, files are parsed on the rayon pool; results keep input
/// order either way, so merging them afterwards yields the same graph.
pub fn load_ego_networks(
    paths: &[PathBuf],
    policy: ParsePolicy,
    parallel: bool,
) -> EgonetResult<Vec<EgoNetwork>> {
    let parsed: Vec<Option<EgoNetwork>> = if parallel {
        paths
            .par_iter()
            .map(|path| read_ego_network(path, policy))
            .collect::<EgonetResult<_>>()?
    } else {
        paths
            .iter()
            .map(|path| read_ego_network(path, policy))
            .collect::<EgonetResult<_>>()?
    };

    let networks: Vec<EgoNetwork> = parsed.into_iter().flatten().collect();
    info!(
        "Parsed {} ego networks ({} files skipped)",
        networks.len(),
        paths.len() - networks.len()
    );
    Ok(networks)
}
