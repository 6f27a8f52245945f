use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use fms_yaml_core::{parse_string, DiagTable, KeyMode};

use crate::error::CliError;
use crate::reader::{load_config, read_source};

/// Arguments for one diag_table conversion.
#[derive(Debug)]
pub struct ConvertArgs<'a> {
    pub path: &'a Path,
    pub output: Option<&'a Path>,
    pub stdout: bool,
    pub format: &'a str,
    pub key_mode: Option<KeyMode>,
    pub tab_width: Option<usize>,
    pub config: Option<&'a Path>,
}

/// Convert a legacy diag_table. Returns the rendered document when writing to
/// stdout, otherwise a one-line report naming the written file.
pub fn run_convert(args: &ConvertArgs) -> Result<String, CliError> {
    // Reject the format before touching any files
    let extension = extension_for(args.format)?;

    let mut options = load_config(args.config, args.path)?.diag_table;
    if let Some(mode) = args.key_mode {
        options.key_mode = mode;
    }
    if let Some(width) = args.tab_width {
        options.tab_width = width;
    }

    let content = read_source(args.path)?;
    let table = parse_string(&content, &options).map_err(|source| CliError::Parse {
        path: args.path.to_path_buf(),
        source,
    })?;
    info!(
        path:? = args.path,
        files = table.files.len(),
        variables = table.variables().count(),
        key_mode:% = options.key_mode;
        "converted diag_table"
    );

    let rendered = render(&table, args.format)?;
    if args.stdout {
        return Ok(rendered);
    }

    let out_path = args
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output(args.path, extension));
    fs::write(&out_path, &rendered).map_err(|source| CliError::Io {
        action: "write",
        path: out_path.clone(),
        source,
    })?;
    Ok(format!("Written to {}", out_path.display()))
}

/// Serialize a table as "yaml" or "json".
pub fn render(table: &DiagTable, format: &str) -> Result<String, CliError> {
    match format {
        "yaml" => {
            serde_yaml::to_string(table).map_err(|e| CliError::Serialize(format!("YAML: {e}")))
        }
        "json" => serde_json::to_string_pretty(table)
            .map_err(|e| CliError::Serialize(format!("JSON: {e}"))),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

fn extension_for(format: &str) -> Result<&'static str, CliError> {
    match format {
        "yaml" => Ok("yaml"),
        "json" => Ok("json"),
        other => Err(CliError::UnknownFormat(other.to_string())),
    }
}

/// `diag_table` -> `diag_table.yaml`, keeping any existing extension.
fn default_output(input: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}
