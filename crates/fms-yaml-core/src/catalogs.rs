/// Root key of the converted document.
pub const ROOT_KEY: &str = "diag_table";

/// Placeholder written for a `longname` the table never supplied.
pub const NULL_SENTINEL: &str = "fm_yaml_null";

/// Key prefix of numbered sub-parameter groups (`subparams0`, `subparams1`, ...).
pub const SUBPARAMS_PREFIX: &str = "subparams";

/// Bare token that ends the innermost open level.
pub const TERMINATOR: &str = "/";

/// Leading spaces worth one nesting level unless configured otherwise.
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Nesting depth of each header kind.
pub const FILE_DEPTH: usize = 0;
pub const MODEL_DEPTH: usize = 1;
pub const VARIABLE_DEPTH: usize = 2;

/// Most fields a header line at a given depth may carry when it inlines
/// its children (`field_type, model_type, variable, longname`).
pub fn max_header_fields(depth: usize) -> usize {
    match depth {
        FILE_DEPTH => 4,
        MODEL_DEPTH => 3,
        VARIABLE_DEPTH => 2,
        _ => 0,
    }
}
