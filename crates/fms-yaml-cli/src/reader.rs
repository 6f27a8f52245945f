use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;

use fms_yaml_core::ParseOptions;

use crate::error::CliError;

/// Config file picked up from the input's directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "fms-yaml.config.yaml";

/// Tool configuration from fms-yaml.config.yaml.
#[derive(Debug, Default, Deserialize)]
pub struct ToolConfig {
    #[serde(default)]
    pub diag_table: ParseOptions,
}

/// Read a whole input file. A missing file is `SourceNotFound`.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    if !path.is_file() {
        return Err(CliError::SourceNotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(|source| CliError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

/// Load the explicit config, or the one sitting next to `input`, or defaults.
pub fn load_config(explicit: Option<&Path>, input: &Path) -> Result<ToolConfig, CliError> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = input
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                return Ok(ToolConfig::default());
            }
            candidate
        }
    };

    debug!(path:? = config_path; "loading config");
    let content = read_source(&config_path)?;
    if content.trim().is_empty() {
        return Ok(ToolConfig::default());
    }
    serde_yaml::from_str(&content).map_err(|source| CliError::Config {
        path: config_path,
        source,
    })
}

/// Data table files at a path (file or directory, scanned recursively).
pub fn find_data_tables(input_path: &Path) -> Result<Vec<PathBuf>, CliError> {
    if input_path.is_file() {
        return Ok(vec![input_path.to_path_buf()]);
    }
    if !input_path.is_dir() {
        return Err(CliError::SourceNotFound(input_path.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for pattern in ["**/*.yaml", "**/*.yml"] {
        let pattern_str = input_path
            .join(pattern)
            .to_string_lossy()
            .replace('\\', "/");
        let entries = glob::glob(&pattern_str).map_err(|e| CliError::Glob(e.to_string()))?;

        for entry in entries {
            let path = entry.map_err(|e| CliError::Glob(e.to_string()))?;
            // Our own config is not a data table
            if path.file_name().is_some_and(|n| n == CONFIG_FILE_NAME) {
                continue;
            }
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }

    paths.sort();
    Ok(paths)
}
