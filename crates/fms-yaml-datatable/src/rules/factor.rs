//! Rule: factor
//!
//! Every entry carries a scaling factor. Only the key is checked.

use crate::{DataTableEntry, EntryRule, Violation};

pub struct FactorRule;

impl EntryRule for FactorRule {
    fn id(&self) -> &str {
        "factor"
    }

    fn description(&self) -> &str {
        "factor is required"
    }

    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation> {
        if !entry.contains("factor") {
            return Err(Violation::MissingKey("factor"));
        }
        Ok(())
    }
}
