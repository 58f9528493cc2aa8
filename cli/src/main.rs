//! Egonet CLI: build the global social graph from ego-network files,
//! sample it and print analytics
//!
//! Log output goes to stderr and is controlled with `RUST_LOG` (default `info`).

use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use egonet::algo::{summarize, AnalysisReport, CentralityMeasure, GraphSummary};
use egonet::{
    build_from_directory, CommunityAlgorithm, EgonetConfig, InputConfig, InputStats, ParsePolicy,
    RunReport,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "egonet", version, about = "Ego-network social graph analysis")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum CommunityArg {
    Louvain,
    LabelPropagation,
}

impl From<CommunityArg> for CommunityAlgorithm {
    fn from(arg: CommunityArg) -> Self {
        match arg {
            CommunityArg::Louvain => CommunityAlgorithm::Louvain,
            CommunityArg::LabelPropagation => CommunityAlgorithm::LabelPropagation,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build, sample and analyze the social graph
    Run {
        /// YAML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory of `<ego_id>.edges` files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Number of nodes to sample
        #[arg(long)]
        sample_size: Option<usize>,

        /// Seed for reproducible sampling
        #[arg(long)]
        seed: Option<u64>,

        /// Skip malformed edge lines instead of failing
        #[arg(long)]
        lenient: bool,

        /// Community detection algorithm
        #[arg(long)]
        community: Option<CommunityArg>,

        /// Write a Graphviz rendering of the subgraph
        #[arg(long)]
        dot: Option<PathBuf>,

        /// Write the JSON run report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Number of top-ranked nodes shown per centrality
        #[arg(long)]
        top: Option<usize>,
    },
    /// Build the global graph and print its summary
    Stats {
        /// YAML configuration file; only its `input` section is used
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory of `<ego_id>.edges` files
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Skip malformed edge lines instead of failing
        #[arg(long)]
        lenient: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    info!("egonet library {}", egonet::version());

    let result = match cli.command {
        Commands::Run {
            config,
            data_dir,
            sample_size,
            seed,
            lenient,
            community,
            dot,
            report,
            top,
        } => load_config(config)
            .map(|mut cfg| {
                if let Some(dir) = data_dir {
                    cfg.input.data_dir = dir;
                }
                if lenient {
                    cfg.input.parse_policy = ParsePolicy::Lenient;
                }
                if let Some(k) = sample_size {
                    cfg.sampling.sample_size = k;
                }
                if seed.is_some() {
                    cfg.sampling.seed = seed;
                }
                if let Some(algorithm) = community {
                    cfg.analysis.community = algorithm.into();
                }
                if dot.is_some() {
                    cfg.output.dot_path = dot;
                }
                if report.is_some() {
                    cfg.output.report_path = report;
                }
                if let Some(k) = top {
                    cfg.analysis.top_k = k;
                }
                cfg
            })
            .and_then(|cfg| run_pipeline(&cfg, &cli.format)),
        Commands::Stats {
            config,
            data_dir,
            lenient,
        } => stats_input(config, data_dir, lenient)
            .and_then(|input| run_stats(&input, &cli.format)),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<EgonetConfig> {
    match path {
        Some(path) => EgonetConfig::load(&path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(EgonetConfig::default()),
    }
}

/// Input settings for `stats`: the config file's `input` section with flag overrides
fn stats_input(
    config: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    lenient: bool,
) -> anyhow::Result<InputConfig> {
    let mut input = load_config(config)?.input;
    if let Some(dir) = data_dir {
        input.data_dir = dir;
    }
    if lenient {
        input.parse_policy = ParsePolicy::Lenient;
    }
    Ok(input)
}

fn run_pipeline(config: &EgonetConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let report = egonet::run(config)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_run_report(&report),
    }
    Ok(())
}

fn run_stats(input: &InputConfig, format: &OutputFormat) -> anyhow::Result<()> {
    let (graph, stats) = build_from_directory(input)?;
    let summary = summarize(&graph);

    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({ "input": stats, "summary": summary });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Table => {
            println!("{}", input_table(&stats));
            println!("{}", summary_table("Global graph", &summary));
        }
    }
    Ok(())
}

fn print_run_report(report: &RunReport) {
    println!("{}", input_table(&report.input));

    let mut sample = new_table(vec!["Subgraph", ""]);
    sample.add_row(vec!["Sampled nodes".to_string(), report.sample_size.to_string()]);
    sample.add_row(vec!["Edges".to_string(), report.subgraph_edges.to_string()]);
    sample.add_row(vec![
        "Seed".to_string(),
        report
            .seed
            .map_or_else(|| "random".to_string(), |s| s.to_string()),
    ]);
    println!("{}", sample);

    if let Some(analysis) = &report.analysis {
        print_analysis(analysis);
    }
}

fn print_analysis(analysis: &AnalysisReport) {
    println!("{}", summary_table("Subgraph structure", &analysis.summary));

    let communities = &analysis.communities;
    let mut table = new_table(vec!["Communities", ""]);
    table.add_row(vec!["Algorithm".to_string(), communities.algorithm.clone()]);
    table.add_row(vec!["Count".to_string(), communities.count.to_string()]);
    table.add_row(vec![
        "Modularity".to_string(),
        format!("{:.4}", communities.modularity),
    ]);
    let largest: Vec<String> = communities
        .sizes
        .iter()
        .take(10)
        .map(|s| s.to_string())
        .collect();
    table.add_row(vec!["Largest sizes".to_string(), largest.join(", ")]);
    println!("{}", table);

    let centrality = &analysis.centrality;
    println!("{}", ranking_table("Degree", &centrality.degree));
    println!("{}", ranking_table("Betweenness", &centrality.betweenness));
    println!("{}", ranking_table("Closeness", &centrality.closeness));
    println!("{}", ranking_table("Eigenvector", &centrality.eigenvector));
    if !centrality.eigenvector_converged {
        println!(
            "Eigenvector centrality did not converge after {} iterations",
            centrality.eigenvector_iterations
        );
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn input_table(stats: &InputStats) -> Table {
    let mut table = new_table(vec!["Input", ""]);
    table.add_row(vec!["Files found".to_string(), stats.files_found.to_string()]);
    table.add_row(vec!["Files read".to_string(), stats.files_read.to_string()]);
    table.add_row(vec![
        "Skipped lines".to_string(),
        stats.skipped_lines.to_string(),
    ]);
    table.add_row(vec![
        "Self-loops dropped".to_string(),
        stats.self_loops_dropped.to_string(),
    ]);
    table.add_row(vec!["Global nodes".to_string(), stats.nodes.to_string()]);
    table.add_row(vec!["Global edges".to_string(), stats.edges.to_string()]);
    table
}

fn summary_table(title: &str, summary: &GraphSummary) -> Table {
    let mut table = new_table(vec![title, ""]);
    table.add_row(vec!["Nodes".to_string(), summary.nodes.to_string()]);
    table.add_row(vec!["Edges".to_string(), summary.edges.to_string()]);
    table.add_row(vec!["Density".to_string(), format!("{:.6}", summary.density)]);
    table.add_row(vec![
        "Average degree".to_string(),
        format!("{:.3}", summary.average_degree),
    ]);
    table.add_row(vec![
        "Components".to_string(),
        summary.components.to_string(),
    ]);
    table.add_row(vec![
        "Largest component".to_string(),
        summary.largest_component.to_string(),
    ]);
    table.add_row(vec!["Triangles".to_string(), summary.triangles.to_string()]);
    table
}

fn ranking_table(name: &str, measure: &CentralityMeasure) -> Table {
    let mut table = new_table(vec!["Rank", "Node", name]);
    for (rank, ranked) in measure.top.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            ranked.node.to_string(),
            format!("{:.6}", ranked.score),
        ]);
    }
    table
}
