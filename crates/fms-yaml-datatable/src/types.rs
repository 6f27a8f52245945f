use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::DataTableError;

/// One data-override entry, kept as the raw YAML mapping. Rules look keys up
/// by name, so presence and value checks stay separate and unknown keys are
/// ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct DataTableEntry {
    keys: Mapping,
}

impl DataTableEntry {
    /// Value of `key`, `Some(Value::Null)` when the key is present but empty.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.keys.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains_key(key)
    }
}

/// Render a YAML scalar the way it appears in the source, for messages.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

/// A data_table document: named sections, each an ordered list of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTable {
    pub sections: Vec<(String, Vec<DataTableEntry>)>,
}

impl DataTable {
    /// Parse YAML text, keeping section order.
    pub fn from_yaml_str(content: &str) -> Result<Self, DataTableError> {
        let doc: Value = serde_yaml::from_str(content)?;
        let Value::Mapping(map) = doc else {
            return Err(DataTableError::NotAMapping);
        };

        let mut sections = Vec::with_capacity(map.len());
        for (key, value) in map {
            let section = display_value(&key);
            let entries: Vec<DataTableEntry> =
                serde_yaml::from_value(value).map_err(|source| DataTableError::InvalidSection {
                    section: section.clone(),
                    source,
                })?;
            sections.push((section, entries));
        }

        Ok(Self { sections })
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|(_, entries)| entries.len()).sum()
    }
}
