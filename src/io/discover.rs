//! Input discovery: list the edge files of a data directory

use crate::error::{EgonetError, EgonetResult};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// All regular files in `dir` whose extension equals `extension`, sorted by path.
///
/// The listing is not recursive. An empty result is not an error here.
pub fn discover_edge_files(dir: &Path, extension: &str) -> EgonetResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| EgonetError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| EgonetError::io(dir, e))?;
        let path = entry.path();
        if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["348.edges", "0.edges", "0.feat", "readme.txt", "107.edges"] {
            fs::write(dir.path().join(name), "").unwrap();
        }
        fs::create_dir(dir.path().join("nested.edges")).unwrap();

        let files = discover_edge_files(dir.path(), "edges").unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["0.edges", "107.edges", "348.edges"]);
    }

    #[test]
    fn test_missing_directory() {
        let err = discover_edge_files(Path::new("/nonexistent/egonet"), "edges").unwrap_err();
        assert!(matches!(err, EgonetError::Io { .. }));
    }
}
