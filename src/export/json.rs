//! JSON export of run reports

use crate::error::{EgonetError, EgonetResult};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize `report` as pretty-printed JSON into `path`
pub fn write_report_json<T: Serialize>(path: &Path, report: &T) -> EgonetResult<()> {
    let file = File::create(path).map_err(|e| EgonetError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).map_err(|e| {
        if e.is_io() {
            EgonetError::io(path, e.into())
        } else {
            EgonetError::Json(e)
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| EgonetError::io(path, e))
}
