//! Rule: region
//!
//! When an entry restricts the override to a region, the region type must
//! be known and all four bounds present, numeric and ordered.

use crate::types::display_value;
use crate::{DataTableEntry, EntryRule, Violation};

pub const VALID_REGION_TYPES: &[&str] = &["inside_region", "outside_region"];

const BOUND_KEYS: [&str; 4] = ["lat_start", "lat_end", "lon_start", "lon_end"];

pub struct RegionRule;

impl EntryRule for RegionRule {
    fn id(&self) -> &str {
        "region"
    }

    fn description(&self) -> &str {
        "region_type must be inside_region or outside_region with ordered lat/lon bounds"
    }

    fn check(&self, entry: &DataTableEntry) -> Result<(), Violation> {
        let Some(region_type) = entry.get("region_type") else {
            return Ok(());
        };
        match region_type.as_str() {
            Some(kind) if VALID_REGION_TYPES.contains(&kind) => {}
            _ => return Err(Violation::InvalidRegionType(display_value(region_type))),
        }

        if let Some(missing) = BOUND_KEYS.into_iter().find(|key| !entry.contains(key)) {
            return Err(Violation::MissingBound(missing));
        }

        check_order("lat", bound(entry, "lat_start")?, bound(entry, "lat_end")?)?;
        check_order("lon", bound(entry, "lon_start")?, bound(entry, "lon_end")?)
    }
}

fn bound(entry: &DataTableEntry, name: &'static str) -> Result<f64, Violation> {
    let value = entry.get(name).ok_or(Violation::MissingBound(name))?;
    value.as_f64().ok_or_else(|| Violation::NonNumericBound {
        name,
        value: display_value(value),
    })
}

fn check_order(axis: &'static str, start: f64, end: f64) -> Result<(), Violation> {
    if start > end {
        return Err(Violation::InvertedBounds { axis, start, end });
    }
    Ok(())
}
