//! Property-based tests for graph construction and sampling
//!
//! Merging is a set union, so file order and repeated files must not change
//! the result; sampling must return exactly `k` distinct nodes of the graph.

use egonet::graph::{Edge, NodeId, SocialGraph};
use egonet::io::EgoNetwork;
use egonet::merge::build_global_graph;
use egonet::sample::Sampler;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A single ego network over a small id space so files overlap
fn ego_network_strategy() -> impl Strategy<Value = EgoNetwork> {
    (0u64..30, prop::collection::vec((0u64..30, 0u64..30), 0..20)).prop_map(|(ego, pairs)| {
        let edges = pairs.into_iter().map(|(u, v)| Edge::new(u, v)).collect();
        EgoNetwork::from_edges(ego, format!("{ego}.edges"), edges)
    })
}

fn ego_networks_strategy() -> impl Strategy<Value = Vec<EgoNetwork>> {
    prop::collection::vec(ego_network_strategy(), 1..8)
}

fn graph_strategy() -> impl Strategy<Value = SocialGraph> {
    ego_networks_strategy().prop_map(|networks| build_global_graph(&networks).0)
}

// ============================================================================
// Merge properties
// ============================================================================

proptest! {
    #[test]
    fn prop_merge_order_does_not_matter(networks in ego_networks_strategy()) {
        let (forward, _) = build_global_graph(&networks);
        let (backward, _) = build_global_graph(networks.iter().rev());

        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_merging_twice_is_idempotent(networks in ego_networks_strategy()) {
        let (once, _) = build_global_graph(&networks);
        let (twice, stats) = build_global_graph(networks.iter().chain(networks.iter()));

        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(stats.edges_added + stats.ego_links_added, once.edge_count());
    }

    #[test]
    fn prop_merged_graph_is_simple_and_links_egos(networks in ego_networks_strategy()) {
        let (graph, _) = build_global_graph(&networks);

        for edge in graph.edges() {
            prop_assert!(!edge.is_self_loop());
        }
        let degree_sum: usize = graph.nodes().iter().map(|&n| graph.degree(n)).sum();
        prop_assert_eq!(degree_sum, 2 * graph.edge_count());

        for network in &networks {
            for &friend in &network.friends {
                if friend != network.ego {
                    prop_assert!(graph.has_edge(network.ego, friend));
                }
            }
        }
    }
}

// ============================================================================
// Sampling properties
// ============================================================================

proptest! {
    #[test]
    fn prop_sample_is_induced_subset(graph in graph_strategy(), seed in any::<u64>(), frac in 0.0..=1.0_f64) {
        let k = (graph.node_count() as f64 * frac).floor() as usize;
        let subgraph = Sampler::new(Some(seed)).sample(&graph, k).unwrap();

        prop_assert_eq!(subgraph.nodes.len(), k);
        prop_assert_eq!(subgraph.node_count(), k);
        prop_assert!(subgraph.nodes.windows(2).all(|w| w[0] < w[1]));

        for &node in &subgraph.nodes {
            prop_assert!(graph.has_node(node));
        }
        for edge in subgraph.graph.edges() {
            let (u, v) = edge.endpoints();
            prop_assert!(graph.has_edge(u, v));
        }
        // Every global edge between sampled nodes survives
        for (i, &u) in subgraph.nodes.iter().enumerate() {
            for &v in &subgraph.nodes[i + 1..] {
                prop_assert_eq!(graph.has_edge(u, v), subgraph.graph.has_edge(u, v));
            }
        }
    }

    #[test]
    fn prop_same_seed_same_sample(graph in graph_strategy(), seed in any::<u64>()) {
        let k = graph.node_count() / 2;
        let first = Sampler::new(Some(seed)).sample_nodes(&graph, k).unwrap();
        let second = Sampler::new(Some(seed)).sample_nodes(&graph, k).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_oversized_sample_fails(graph in graph_strategy(), extra in 1usize..5) {
        let k = graph.node_count() + extra;
        prop_assert!(Sampler::new(Some(0)).sample(&graph, k).is_err());
    }
}

#[test]
fn test_unseeded_sampler_draws_valid_sample() {
    let mut graph = SocialGraph::new();
    for i in 0..50u64 {
        graph.add_edge(i, (i + 1) % 50);
    }

    let mut sampler = Sampler::new(None);
    assert_eq!(sampler.seed(), None);

    let nodes = sampler.sample_nodes(&graph, 10).unwrap();
    assert_eq!(nodes.len(), 10);
    assert!(nodes.windows(2).all(|w| w[0] < w[1]));
    assert!(nodes.iter().all(|&n| graph.has_node(n)));
    assert!(!graph.has_node(NodeId(50)));
}
