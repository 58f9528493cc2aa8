//! Writing subgraph renderings and analysis reports

pub mod dot;
pub mod json;

pub use dot::DotWriter;
pub use json::write_report_json;
