//! Reading ego-network input files

pub mod discover;
pub mod edge_file;

pub use discover::discover_edge_files;
pub use edge_file::{ego_id_from_path, parse_edges, read_ego_network, EgoNetwork, ParsePolicy};
