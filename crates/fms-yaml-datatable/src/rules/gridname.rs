//! Rule: gridname
//!
//! Every entry names the component grid it overrides.

use crate::types::display_value;
use crate::{DataTableEntry, EntryRule, Violation};

pub const VALID_GRIDNAMES: &[&str] = &["OCN", "LND", "ATM", "ICE"];

pub struct GridnameRule;

impl EntryRule for GridnameRule {
    fn id(&self) -> &str {
        "gridname"
    }

    fn description(&self) -> &str {
        "gridname is required and must be one of OCN, LND, ATM, ICE"
    }

    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation> {
        let value = entry
            .get("gridname")
            .ok_or(Violation::MissingKey("gridname"))?;
        match value.as_str() {
            Some(grid) if VALID_GRIDNAMES.contains(&grid) => Ok(()),
            _ => Err(Violation::InvalidGridname(display_value(value))),
        }
    }
}
