//! End-to-end run: discover, load, merge, sample, analyze, export

use crate::algo::{analyze, AnalysisReport};
use crate::config::{EgonetConfig, InputConfig};
use crate::error::{EgonetError, EgonetResult};
use crate::export::{write_report_json, DotWriter};
use crate::graph::SocialGraph;
use crate::io::discover_edge_files;
use crate::merge::{build_global_graph, load_ego_networks, MergeStats};
use crate::sample::Sampler;
use serde::Serialize;
use tracing::info;

/// What was read to build the global graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputStats {
    /// Edge files found in the data directory
    pub files_found: usize,
    /// Files parsed as ego networks
    pub files_read: usize,
    /// Malformed lines skipped under lenient parsing
    pub skipped_lines: usize,
    /// Self-loops dropped while merging
    pub self_loops_dropped: usize,
    /// Nodes of the global graph
    pub nodes: usize,
    /// Edges of the global graph
    pub edges: usize,
}

/// Outcome of a full run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub input: InputStats,
    pub sample_size: usize,
    pub subgraph_edges: usize,
    /// Seed used for sampling, if one was configured
    pub seed: Option<u64>,
    pub analysis: Option<AnalysisReport>,
}

/// Build the global graph from every edge file in the configured directory
pub fn build_from_directory(input: &InputConfig) -> EgonetResult<(SocialGraph, InputStats)> {
    let paths = discover_edge_files(&input.data_dir, &input.extension)?;
    if paths.is_empty() {
        return Err(EgonetError::NoInputFiles(input.data_dir.clone()));
    }

    info!(
        "Building the global graph from {} ego-network files in {}",
        paths.len(),
        input.data_dir.display()
    );

    let networks = load_ego_networks(&paths, input.parse_policy, input.parallel)?;
    let (graph, merge): (SocialGraph, MergeStats) = build_global_graph(&networks);

    let stats = InputStats {
        files_found: paths.len(),
        files_read: networks.len(),
        skipped_lines: networks.iter().map(|n| n.skipped_lines).sum(),
        self_loops_dropped: merge.self_loops_dropped,
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    };

    info!(
        "Global graph built: {} nodes, {} edges",
        stats.nodes, stats.edges
    );
    Ok((graph, stats))
}

/// Run the whole pipeline and write the configured outputs
pub fn run(config: &EgonetConfig) -> EgonetResult<RunReport> {
    config.validate()?;

    let (graph, input) = build_from_directory(&config.input)?;

    let mut sampler = Sampler::new(config.sampling.seed);
    let subgraph = sampler.sample(&graph, config.sampling.sample_size)?;
    info!(
        "Random subgraph created: {} nodes, {} edges",
        subgraph.node_count(),
        subgraph.edge_count()
    );
    // The global graph is no longer needed once the sample is drawn
    drop(graph);

    let analysis = if config.analysis.enabled {
        Some(analyze(&subgraph.graph, &config.analysis))
    } else {
        None
    };

    let report = RunReport {
        input,
        sample_size: subgraph.node_count(),
        subgraph_edges: subgraph.edge_count(),
        seed: sampler.seed(),
        analysis,
    };

    if let Some(path) = &config.output.dot_path {
        info!("Writing subgraph rendering to {}", path.display());
        DotWriter::new()
            .title(format!(
                "Random subgraph of {} sampled nodes",
                report.sample_size
            ))
            .show_labels(config.output.show_labels)
            .write_file(path, &subgraph.graph, report.analysis.as_ref())?;
    }

    if let Some(path) = &config.output.report_path {
        info!("Writing run report to {}", path.display());
        write_report_json(path, &report)?;
    }

    Ok(report)
}
