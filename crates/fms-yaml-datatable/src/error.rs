use thiserror::Error;

/// A single rule failure on one entry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Violation {
    #[error("{0} is a required key")]
    MissingKey(&'static str),

    #[error(r#"{0} is not a valid gridname. The only values allowed are "OCN", "LND", "ATM", "ICE""#)]
    InvalidGridname(String),

    #[error("Fieldname can't be empty")]
    EmptyFieldnameCode,

    #[error(r#"{0} is not a valid interpol_method. The only values allowed are "bilinear", "bicubic", and "none""#)]
    InvalidInterpMethod(String),

    #[error(r#"If "fieldname_file" is empty, interpol_method must be empty (found "{0}")"#)]
    InterpWithoutFile(String),

    #[error(r#"{0} is not a valid region_type. The only values allowed are "inside_region" and "outside_region""#)]
    InvalidRegionType(String),

    #[error("{0} must be present if region_type is set")]
    MissingBound(&'static str),

    #[error("{name} must be a number (found {value})")]
    NonNumericBound { name: &'static str, value: String },

    #[error("{axis}_start is greater than {axis}_end ({start} > {end})")]
    InvertedBounds {
        axis: &'static str,
        start: f64,
        end: f64,
    },
}

#[derive(Debug, Error)]
pub enum DataTableError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("data_table must be a mapping of section names to entry lists")]
    NotAMapping,

    #[error("section \"{section}\" is not a list of entries: {source}")]
    InvalidSection {
        section: String,
        source: serde_yaml::Error,
    },

    #[error("{section}[{index}]: {violation} (rule {rule})")]
    Entry {
        section: String,
        index: usize,
        rule: String,
        violation: Violation,
    },
}
