//! Uniform node sampling and induced subgraph extraction

use crate::error::{EgonetError, EgonetResult};
use crate::graph::{NodeId, SocialGraph};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// A sampled node set and the subgraph it induces
#[derive(Debug, Clone)]
pub struct Subgraph {
    /// Sampled nodes in ascending order
    pub nodes: Vec<NodeId>,
    /// Induced graph; sampled nodes without edges are present as isolated nodes
    pub graph: SocialGraph,
}

impl Subgraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

/// Draws uniform random node samples without replacement.
///
/// Without a seed the generator is initialised from OS entropy and runs are
/// not reproducible; with a seed the same graph always yields the same sample.
pub struct Sampler {
    rng: StdRng,
    seed: Option<u64>,
}

impl Sampler {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Sampler { rng, seed }
    }

    /// Seed this sampler was created with, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Choose `k` distinct nodes uniformly at random.
    ///
    /// Fails with [`EgonetError::SampleTooLarge`] when `k` exceeds the node count.
    pub fn sample_nodes(&mut self, graph: &SocialGraph, k: usize) -> EgonetResult<Vec<NodeId>> {
        // Sorted population keeps seeded draws independent of hash order
        let population = graph.nodes();
        if k > population.len() {
            return Err(EgonetError::SampleTooLarge {
                requested: k,
                available: population.len(),
            });
        }

        let mut chosen: Vec<NodeId> = population.choose_multiple(&mut self.rng, k).copied().collect();
        chosen.sort_unstable();
        debug!("Sampled {} of {} nodes", k, population.len());
        Ok(chosen)
    }

    /// Sample `k` nodes and extract the subgraph they induce
    pub fn sample(&mut self, graph: &SocialGraph, k: usize) -> EgonetResult<Subgraph> {
        let nodes = self.sample_nodes(graph, k)?;
        let induced = graph.induced_subgraph(&nodes);
        Ok(Subgraph {
            nodes,
            graph: induced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Global graph built from `1.edges` = "2 3" and `2.edges` = "3 4"
    fn two_file_graph() -> SocialGraph {
        let mut graph = SocialGraph::new();
        for (u, v) in [(2u64, 3u64), (1, 2), (1, 3), (3, 4), (2, 4)] {
            graph.add_edge(u, v);
        }
        graph
    }

    #[test]
    fn test_sample_two_of_four() {
        let graph = two_file_graph();
        let mut sampler = Sampler::new(Some(7));

        let sub = sampler.sample(&graph, 2).unwrap();

        assert_eq!(sub.nodes.len(), 2);
        assert_eq!(sub.node_count(), 2);
        for edge in sub.graph.edges() {
            let (u, v) = edge.endpoints();
            assert!(graph.has_edge(u, v));
            assert!(sub.nodes.contains(&u) && sub.nodes.contains(&v));
        }
        // Every global edge between the chosen pair must be kept
        let (a, b) = (sub.nodes[0], sub.nodes[1]);
        assert_eq!(sub.graph.has_edge(a, b), graph.has_edge(a, b));
    }

    #[test]
    fn test_sample_too_large_fails() {
        let graph = two_file_graph();
        let err = Sampler::new(None).sample(&graph, 5).unwrap_err();

        match err {
            EgonetError::SampleTooLarge { requested, available } => {
                assert_eq!(requested, 5);
                assert_eq!(available, 4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_sample_everything_and_nothing() {
        let graph = two_file_graph();
        let mut sampler = Sampler::new(Some(1));

        let all = sampler.sample(&graph, 4).unwrap();
        assert_eq!(all.graph, graph);

        let none = sampler.sample(&graph, 0).unwrap();
        assert!(none.nodes.is_empty());
        assert!(none.graph.is_empty());
    }

    #[test]
    fn test_seeded_sampling_is_reproducible() {
        let mut graph = SocialGraph::new();
        for i in 0..200u64 {
            graph.add_edge(i, (i * 7 + 3) % 200);
        }

        let a = Sampler::new(Some(42)).sample_nodes(&graph, 25).unwrap();
        let b = Sampler::new(Some(42)).sample_nodes(&graph, 25).unwrap();
        assert_eq!(a, b);
        assert_eq!(Sampler::new(Some(42)).seed(), Some(42));

        let mut dedup = a.clone();
        dedup.dedup();
        assert_eq!(dedup.len(), 25);
    }
}
