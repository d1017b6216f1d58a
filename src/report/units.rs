//! Units parser: the active units table.

use regex::Regex;
use tracing::debug;

use super::models::Unit;
use super::table;
use crate::constants::{UNITS_TABLE_FIELDS, section_keys};
use crate::geodesy::{self, FlatEarthReference};
use crate::ordered_map::OrderedMap;
use crate::{Error, Result};

/// Parse the active units section into an ordered unit map.
///
/// The first unit in the table becomes the flat-Earth projection reference;
/// every unit's `location_meters` is relative to it.
pub fn parse_units(lines: &[String]) -> Result<OrderedMap<Unit>> {
    let rows = table::extract(lines, UNITS_TABLE_FIELDS)?;

    let mut units = OrderedMap::new();
    for row in &rows {
        let name = row.require("name")?.to_string();
        let location = row.require("location")?.to_string();
        let location_coords = geodesy::parse_location(&location)?;
        let elevation = parse_elevation(row.require("elevation")?)?;
        units.insert(
            name.clone(),
            Unit {
                name,
                location,
                location_coords,
                elevation,
                location_meters: (0, 0),
            },
        );
    }

    if let Some((_, first)) = units.first() {
        let reference = FlatEarthReference::new(first.location_coords);
        for unit in units.values_mut() {
            unit.location_meters = reference.project(unit.location_coords);
        }
    }

    debug!(units = units.len(), "parsed active units section");
    Ok(units)
}

/// Elevation cells read like "274,0m": the leading numeric prefix floored
/// to whole meters, trailing unit text discarded.
fn parse_elevation(cell: &str) -> Result<i32> {
    let prefix = Regex::new(r"^[\d.]+").expect("static pattern");
    let text = prefix
        .find(cell)
        .ok_or_else(|| {
            Error::format(
                section_keys::ACTIVE_UNITS_INFORMATION,
                format!("elevation '{cell}' has no numeric prefix"),
            )
        })?
        .as_str();
    let value: f64 = text.parse().map_err(|_| {
        Error::format(
            section_keys::ACTIVE_UNITS_INFORMATION,
            format!("elevation '{cell}' is not numeric"),
        )
    })?;
    Ok(value as i32)
}
