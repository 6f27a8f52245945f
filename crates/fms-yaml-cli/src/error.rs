use std::io;
use std::path::PathBuf;

use thiserror::Error;

use fms_yaml_core::ParseError;
use fms_yaml_datatable::DataTableError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{} not found", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("{}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("{}: {source}", .path.display())]
    DataTable {
        path: PathBuf,
        source: DataTableError,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("unknown output format \"{0}\" (expected yaml or json)")]
    UnknownFormat(String),

    #[error("no data_table files (.yaml, .yml) found at: {}", .0.display())]
    NoInputs(PathBuf),

    #[error("invalid glob pattern: {0}")]
    Glob(String),
}
