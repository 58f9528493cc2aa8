//! # Dot
//!
//! Renders a social graph in the [GraphViz](https://graphviz.org/) Dot format.
//! Nodes are colored by community and scaled by degree centrality when an
//! analysis report is supplied; otherwise every node is drawn the same way.
//!
//! ```ignore
//! let writer = DotWriter::new().title("Random subgraph of 2000 sampled nodes");
//! writer.write_graph(&mut file, &subgraph, Some(&report))?;
//! ```

use crate::algo::AnalysisReport;
use crate::error::{EgonetError, EgonetResult};
use crate::graph::SocialGraph;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Node fill colors, cycled by community id
const PALETTE: [&str; 12] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78",
];

/// Fill color when no communities are known
const DEFAULT_COLOR: &str = "skyblue";

/// Smallest node width in inches; degree centrality adds up to `WIDTH_SCALE`
const MIN_WIDTH: f64 = 0.05;
const WIDTH_SCALE: f64 = 0.4;

/// A writer for the Dot-Format
#[derive(Debug, Clone, Default)]
pub struct DotWriter {
    /// Graph label drawn above the layout
    title: Option<String>,
    /// Draw node ids inside nodes
    show_labels: bool,
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn show_labels(mut self, show_labels: bool) -> Self {
        self.show_labels = show_labels;
        self
    }

    /// Write `graph` to `writer`, styling nodes from `report` when present
    pub fn write_graph<W: Write>(
        &self,
        writer: &mut W,
        graph: &SocialGraph,
        report: Option<&AnalysisReport>,
    ) -> std::io::Result<()> {
        writeln!(writer, "graph egonet {{")?;
        if let Some(title) = &self.title {
            writeln!(writer, "  label={:?};", title)?;
            writeln!(writer, "  labelloc=t;")?;
        }
        writeln!(writer, "  layout=sfdp;")?;
        writeln!(
            writer,
            "  node [shape=circle, style=filled, fixedsize=true{}];",
            if self.show_labels { "" } else { ", label=\"\"" }
        )?;
        writeln!(writer, "  edge [penwidth=0.3];")?;

        for node in graph.nodes() {
            let (color, width) = match report {
                Some(report) => {
                    let color = report
                        .communities
                        .community_of(node)
                        .map_or(DEFAULT_COLOR, |c| PALETTE[c % PALETTE.len()]);
                    let centrality = report.centrality.degree.score(node).unwrap_or(0.0);
                    (color, MIN_WIDTH + WIDTH_SCALE * centrality)
                }
                None => (DEFAULT_COLOR, MIN_WIDTH),
            };
            writeln!(
                writer,
                "  n{} [fillcolor=\"{}\", width={:.3}];",
                node, color, width
            )?;
        }

        for edge in graph.edges() {
            let (u, v) = edge.endpoints();
            writeln!(writer, "  n{} -- n{};", u, v)?;
        }

        writeln!(writer, "}}")
    }

    /// Write the graph to a file at `path`
    pub fn write_file(
        &self,
        path: &Path,
        graph: &SocialGraph,
        report: Option<&AnalysisReport>,
    ) -> EgonetResult<()> {
        let file = File::create(path).map_err(|e| EgonetError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        self.write_graph(&mut writer, graph, report)
            .and_then(|_| writer.flush())
            .map_err(|e| EgonetError::io(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::analyze;
    use crate::config::AnalysisConfig;

    fn path_graph() -> SocialGraph {
        let mut graph = SocialGraph::new();
        graph.add_edge(1u64, 2u64);
        graph.add_edge(2u64, 3u64);
        graph.add_node(7u64);
        graph
    }

    fn render(writer: &DotWriter, graph: &SocialGraph, report: Option<&AnalysisReport>) -> String {
        let mut out = Vec::new();
        writer.write_graph(&mut out, graph, report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_rendering() {
        let dot = render(&DotWriter::new().title("Sample"), &path_graph(), None);

        assert!(dot.starts_with("graph egonet {\n"));
        assert!(dot.contains("  label=\"Sample\";"));
        assert!(dot.contains("label=\"\""));
        assert!(dot.contains("  n7 [fillcolor=\"skyblue\", width=0.050];"));
        assert!(dot.contains("  n1 -- n2;"));
        assert!(dot.contains("  n2 -- n3;"));
        assert!(dot.trim_end().ends_with('}'));
        assert_eq!(dot.matches(" -- ").count(), 2);
    }

    #[test]
    fn test_styled_rendering() {
        let graph = path_graph();
        let report = analyze(&graph, &AnalysisConfig::default());
        let dot = render(&DotWriter::new().show_labels(true), &graph, Some(&report));

        // Node 2 has degree centrality 2/3
        assert!(dot.contains("n2 [fillcolor=\"#"));
        assert!(dot.contains("width=0.317]"));
        assert!(!dot.contains("label=\"\""));
        assert!(!dot.contains("skyblue"));
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.dot");

        DotWriter::new().write_file(&path, &path_graph(), None).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("n1 -- n2"));
    }
}
