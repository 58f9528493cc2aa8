//! Ego-network edge file reader
//!
//! An ego-network file is named `<ego_id>.edges` and holds one undirected edge
//! per line as two whitespace-separated node ids. Every id in the file is a
//! friend of the ego.

use crate::error::{EgonetError, EgonetResult};
use crate::graph::{Edge, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// How malformed edge lines are handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Abort on the first malformed line
    #[default]
    Strict,
    /// Skip malformed lines with a warning
    Lenient,
}

/// One parsed ego-network file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EgoNetwork {
    /// Owner of the file
    pub ego: NodeId,
    /// Source file
    pub path: PathBuf,
    /// Edges among the ego's friends, in file order
    pub edges: Vec<Edge>,
    /// Every node id mentioned in the file
    pub friends: BTreeSet<NodeId>,
    /// Malformed lines skipped under the lenient policy
    pub skipped_lines: usize,
}

impl EgoNetwork {
    /// Build an ego network from already-parsed edges; friends are derived from the endpoints.
    pub fn from_edges(ego: impl Into<NodeId>, path: impl Into<PathBuf>, edges: Vec<Edge>) -> Self {
        let friends = edges
            .iter()
            .flat_map(|e| {
                let (a, b) = e.endpoints();
                [a, b]
            })
            .collect();

        EgoNetwork {
            ego: ego.into(),
            path: path.into(),
            edges,
            friends,
            skipped_lines: 0,
        }
    }
}

/// Extract the ego id from a file name such as `facebook/107.edges`.
///
/// The id is the part of the file name before the first `.`; returns `None`
/// when that part is not a non-negative integer.
pub fn ego_id_from_path(path: &Path) -> Option<NodeId> {
    let name = path.file_name()?.to_str()?;
    let stem = name.split('.').next()?;
    stem.parse::<u64>().ok().map(NodeId::new)
}

/// Parse one edge line. Returns `Ok(None)` for blank lines.
fn parse_line(line: &str) -> Result<Option<Edge>, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Ok(None),
        [u, v] => {
            let u = parse_node(u)?;
            let v = parse_node(v)?;
            Ok(Some(Edge::new(u, v)))
        }
        other => Err(format!("expected 2 columns, found {}", other.len())),
    }
}

fn parse_node(token: &str) -> Result<NodeId, String> {
    token
        .parse::<u64>()
        .map(NodeId::new)
        .map_err(|_| format!("invalid node id `{}`", token))
}

/// Parse edge lines from a reader. `path` is only used for error context.
pub fn parse_edges<R: BufRead>(
    reader: R,
    path: &Path,
    policy: ParsePolicy,
) -> EgonetResult<(Vec<Edge>, usize)> {
    let mut edges = Vec::new();
    let mut skipped = 0;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let mut raw = raw.map_err(|e| EgonetError::io(path, e))?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }

        let parsed = match std::str::from_utf8(&raw) {
            Ok(line) => parse_line(line),
            Err(_) => Err("invalid UTF-8".to_string()),
        };
        match parsed {
            Ok(Some(edge)) => edges.push(edge),
            Ok(None) => {}
            Err(reason) => match policy {
                ParsePolicy::Strict => {
                    return Err(EgonetError::MalformedLine {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        content: String::from_utf8_lossy(&raw).into_owned(),
                        reason,
                    });
                }
                ParsePolicy::Lenient => {
                    warn!(
                        "Skipping malformed line {} in {}: {}",
                        idx + 1,
                        path.display(),
                        reason
                    );
                    skipped += 1;
                }
            },
        }
    }

    Ok((edges, skipped))
}

/// Read one ego-network file.
///
/// Returns `Ok(None)` when the file name does not carry an integer ego id;
/// such files are skipped rather than treated as errors.
pub fn read_ego_network(path: &Path, policy: ParsePolicy) -> EgonetResult<Option<EgoNetwork>> {
    let Some(ego) = ego_id_from_path(path) else {
        debug!("Skipping {}: file name is not an ego id", path.display());
        return Ok(None);
    };

    let file = File::open(path).map_err(|e| EgonetError::io(path, e))?;
    let (edges, skipped_lines) = parse_edges(BufReader::new(file), path, policy)?;

    if edges.is_empty() {
        warn!("Ego network {} has no edges", path.display());
    }

    let mut network = EgoNetwork::from_edges(ego, path, edges);
    network.skipped_lines = skipped_lines;
    Ok(Some(network))
}
