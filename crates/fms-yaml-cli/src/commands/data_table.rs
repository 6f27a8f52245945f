use std::path::Path;

use log::{debug, info};

use fms_yaml_datatable::Validator;

use crate::error::CliError;
use crate::reader::{find_data_tables, read_source};

/// Validate one data_table file or every YAML file under a directory.
/// Stops at the first invalid file.
pub fn run_validate(input_path: &Path) -> Result<String, CliError> {
    let files = find_data_tables(input_path)?;
    if files.is_empty() {
        return Err(CliError::NoInputs(input_path.to_path_buf()));
    }

    let validator = Validator::new();
    debug!(rules = validator.rules().len(), files = files.len(); "validating data tables");

    let mut lines: Vec<String> = Vec::new();
    let mut total = 0;
    for file in &files {
        let content = read_source(file)?;
        let count = validator
            .validate_str(&content)
            .map_err(|source| CliError::DataTable {
                path: file.clone(),
                source,
            })?;
        info!(path:? = file, entries = count; "data_table valid");
        let entry_word = if count == 1 { "entry" } else { "entries" };
        lines.push(format!("{}: valid ({count} {entry_word})", file.display()));
        total += count;
    }

    if files.len() > 1 {
        lines.push(format!("{} files, {total} entries valid.", files.len()));
    }
    Ok(lines.join("\n"))
}

/// One line per built-in rule: id and description, in run order.
pub fn run_list_rules() -> String {
    Validator::new()
        .rules()
        .iter()
        .map(|rule| format!("{:<16}{}", rule.id(), rule.description()))
        .collect::<Vec<_>>()
        .join("\n")
}
