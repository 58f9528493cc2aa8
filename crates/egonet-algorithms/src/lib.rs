pub mod common;
pub mod centrality;
pub mod community;
pub mod topology;
pub mod traversal;

pub use common::{GraphView, NodeId};
pub use centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, eigenvector_centrality,
    EigenvectorConfig, EigenvectorResult,
};
pub use community::{
    connected_components, label_propagation, louvain, modularity, ComponentResult,
    CommunityResult, LabelPropagationConfig, LouvainConfig,
};
pub use topology::{average_degree, count_triangles, density};
pub use traversal::bfs_distances;
