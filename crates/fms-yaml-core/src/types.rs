use std::fmt;
use std::str::FromStr;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Serialize, Serializer};

use crate::catalogs::{DEFAULT_TAB_WIDTH, NULL_SENTINEL, ROOT_KEY, SUBPARAMS_PREFIX};

// ---------------------------------------------------------------------------
// Source lines (internal, not serialized)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    TopLevelStart,
    ModelStart,
    VariableStart,
    Continuation,
    Terminator,
    Blank,
}

/// One comma-delimited field. Holds every quoted string or bare word found
/// between the surrounding commas, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    pub fragments: Vec<String>,
}

impl Field {
    /// Field text with its fragments run together.
    pub fn text(&self) -> String {
        self.fragments.concat()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source table.
    pub number: usize,
    pub raw: String,
    pub depth: usize,
    pub fields: Vec<Field>,
    /// The line ended with a bare `/`.
    pub terminated: bool,
}

impl Line {
    /// Field texts, as used by header lines.
    pub fn texts(&self) -> Vec<String> {
        self.fields.iter().map(Field::text).collect()
    }

    /// Tokens of a continuation line under the given key mode.
    pub fn tokens(&self, mode: KeyMode) -> Vec<String> {
        match mode {
            KeyMode::Legacy => self.texts(),
            KeyMode::Paired => self
                .fields
                .iter()
                .flat_map(|f| {
                    if f.fragments.is_empty() {
                        vec![String::new()]
                    } else {
                        f.fragments.clone()
                    }
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// How continuation lines turn into sub-parameter mappings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    /// Last two tokens form the pair; adjacent quoted fragments are fused and
    /// single-token lines prefix the next key. Matches existing converted output.
    #[default]
    Legacy,
    /// Every line is a list of explicit `name, value` pairs.
    Paired,
}

impl FromStr for KeyMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(KeyMode::Legacy),
            "paired" => Ok(KeyMode::Paired),
            other => Err(format!(
                "unknown key mode \"{other}\" (expected \"legacy\" or \"paired\")"
            )),
        }
    }
}

impl fmt::Display for KeyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMode::Legacy => f.write_str("legacy"),
            KeyMode::Paired => f.write_str("paired"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub key_mode: KeyMode,
    pub tab_width: usize,
    pub null_sentinel: String,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            key_mode: KeyMode::default(),
            tab_width: DEFAULT_TAB_WIDTH,
            null_sentinel: NULL_SENTINEL.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output tree (serialized: key names and order are part of the format)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub field_type: String,
    pub modlist: Vec<ModelEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelEntry {
    pub model_type: String,
    pub varlist: Vec<VarEntry>,
}

/// Serialized as `variable`, `longname`, then one `subparamsN` key per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarEntry {
    pub variable: String,
    pub longname: String,
    pub subparams: Vec<SubParamGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubParamGroup {
    pub index: usize,
    pub params: Vec<SubParam>,
}

/// A single-key mapping inside a sub-parameter group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubParam {
    pub key: String,
    pub value: String,
}

/// The assembled table, serialized under the `diag_table` root key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagTable {
    pub files: Vec<FileEntry>,
}

impl DiagTable {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every variable in the table, in input order.
    pub fn variables(&self) -> impl Iterator<Item = &VarEntry> {
        self.files
            .iter()
            .flat_map(|f| f.modlist.iter())
            .flat_map(|m| m.varlist.iter())
    }
}

impl Serialize for DiagTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(ROOT_KEY, &self.files)?;
        map.end()
    }
}

impl Serialize for VarEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2 + self.subparams.len()))?;
        map.serialize_entry("variable", &self.variable)?;
        map.serialize_entry("longname", &self.longname)?;
        for group in &self.subparams {
            map.serialize_entry(&format!("{SUBPARAMS_PREFIX}{}", group.index), group)?;
        }
        map.end()
    }
}

impl Serialize for SubParamGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.params.len()))?;
        for param in &self.params {
            seq.serialize_element(param)?;
        }
        seq.end()
    }
}

impl Serialize for SubParam {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}
