//! Run configuration
//!
//! Every field has a default so a YAML file only needs to name what it changes:
//!
//! ```yaml
//! input:
//!   data_dir: facebook
//!   parse_policy: lenient
//! sampling:
//!   sample_size: 500
//!   seed: 7
//! analysis:
//!   community: label_propagation
//! output:
//!   dot_path: subgraph.dot
//! ```

use crate::error::{EgonetError, EgonetResult};
use crate::io::ParsePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level configuration of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EgonetConfig {
    pub input: InputConfig,
    pub sampling: SamplingConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

/// Where and how ego-network files are read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Directory holding `<ego_id>.edges` files
    pub data_dir: PathBuf,
    /// File extension of edge files, without the dot
    pub extension: String,
    /// Malformed edge line handling
    pub parse_policy: ParsePolicy,
    /// Parse files on the rayon thread pool
    pub parallel: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("facebook"),
            extension: "edges".to_string(),
            parse_policy: ParsePolicy::Strict,
            parallel: true,
        }
    }
}

/// Subgraph sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Number of nodes to sample
    pub sample_size: usize,
    /// Seed for reproducible samples (None = OS entropy)
    pub seed: Option<u64>,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            sample_size: 2000,
            seed: None,
        }
    }
}

/// Community detection algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunityAlgorithm {
    #[default]
    Louvain,
    LabelPropagation,
}

impl CommunityAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityAlgorithm::Louvain => "louvain",
            CommunityAlgorithm::LabelPropagation => "label_propagation",
        }
    }
}

/// Analytics run on the sampled subgraph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Skip analytics entirely when false
    pub enabled: bool,
    pub community: CommunityAlgorithm,
    /// Louvain resolution
    pub resolution: f64,
    /// Iteration cap for the community algorithms
    pub max_iterations: usize,
    /// Seed for label propagation node order
    pub community_seed: u64,
    /// Normalize betweenness to [0, 1]
    pub normalized_betweenness: bool,
    pub eigenvector_max_iterations: usize,
    pub eigenvector_tolerance: f64,
    /// Number of top-ranked nodes reported per centrality
    pub top_k: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            community: CommunityAlgorithm::Louvain,
            resolution: 1.0,
            max_iterations: 100,
            community_seed: 42,
            normalized_betweenness: true,
            eigenvector_max_iterations: 100,
            eigenvector_tolerance: 1e-6,
            top_k: 10,
        }
    }
}

/// Files written at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Graphviz rendering of the sampled subgraph
    pub dot_path: Option<PathBuf>,
    /// JSON run report
    pub report_path: Option<PathBuf>,
    /// Draw node ids in the DOT output
    pub show_labels: bool,
}

impl EgonetConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> EgonetResult<Self> {
        let config: EgonetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML configuration file
    pub fn load(path: &Path) -> EgonetResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| EgonetError::io(path, e))?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> EgonetResult<()> {
        if self.input.extension.is_empty() || self.input.extension.starts_with('.') {
            return Err(EgonetError::Config(format!(
                "input.extension must be non-empty and given without a leading dot, got {:?}",
                self.input.extension
            )));
        }
        if !(self.analysis.resolution > 0.0) {
            return Err(EgonetError::Config(format!(
                "analysis.resolution must be positive, got {}",
                self.analysis.resolution
            )));
        }
        if !(self.analysis.eigenvector_tolerance > 0.0) {
            return Err(EgonetError::Config(format!(
                "analysis.eigenvector_tolerance must be positive, got {}",
                self.analysis.eigenvector_tolerance
            )));
        }
        if self.analysis.max_iterations == 0 || self.analysis.eigenvector_max_iterations == 0 {
            return Err(EgonetError::Config(
                "iteration limits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_facebook_run() {
        let config = EgonetConfig::default();
        assert_eq!(config.input.data_dir, PathBuf::from("facebook"));
        assert_eq!(config.input.extension, "edges");
        assert_eq!(config.input.parse_policy, ParsePolicy::Strict);
        assert_eq!(config.sampling.sample_size, 2000);
        assert_eq!(config.sampling.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
input:
  data_dir: /data/ego
  parse_policy: lenient
sampling:
  sample_size: 500
  seed: 7
analysis:
  community: label_propagation
output:
  dot_path: out/subgraph.dot
"#;
        let config = EgonetConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.input.data_dir, PathBuf::from("/data/ego"));
        assert_eq!(config.input.parse_policy, ParsePolicy::Lenient);
        assert!(config.input.parallel);
        assert_eq!(config.sampling.sample_size, 500);
        assert_eq!(config.sampling.seed, Some(7));
        assert_eq!(config.analysis.community, CommunityAlgorithm::LabelPropagation);
        assert_eq!(config.analysis.top_k, 10);
        assert_eq!(config.output.dot_path, Some(PathBuf::from("out/subgraph.dot")));
        assert_eq!(config.output.report_path, None);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = EgonetConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, EgonetConfig::default());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = EgonetConfig::from_yaml_str("analysis:\n  resolution: 0.0\n").unwrap_err();
        assert!(matches!(err, EgonetError::Config(_)));

        let err = EgonetConfig::from_yaml_str("input:\n  extension: .edges\n").unwrap_err();
        assert!(matches!(err, EgonetError::Config(_)));

        let err = EgonetConfig::from_yaml_str("input:\n  parse_policy: sloppy\n").unwrap_err();
        assert!(matches!(err, EgonetError::Yaml(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("egonet.yaml");
        std::fs::write(&path, "sampling:\n  sample_size: 12\n").unwrap();

        let config = EgonetConfig::load(&path).unwrap();
        assert_eq!(config.sampling.sample_size, 12);

        let missing = EgonetConfig::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(matches!(missing, EgonetError::Io { .. }));
    }
}
