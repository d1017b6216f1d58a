//! Test modules for the report parsers.

mod parser_tests;

use crate::geodesy;
use crate::ordered_map::OrderedMap;
use crate::report::models::Unit;

/// Build a unit directly from a location string, bypassing table parsing.
pub(crate) fn unit(name: &str, location: &str, elevation: i32) -> Unit {
    let location_coords = geodesy::parse_location(location).unwrap();
    Unit {
        name: name.to_string(),
        location: location.to_string(),
        location_coords,
        elevation,
        location_meters: (0, 0),
    }
}

pub(crate) fn unit_map(units: Vec<Unit>) -> OrderedMap<Unit> {
    units.into_iter().map(|u| (u.name.clone(), u)).collect()
}

/// Format one fixed-width net member table line with the column layout
/// used across these tests.
pub(crate) fn member_line(
    name: &str,
    grid: &str,
    role: &str,
    system: &str,
    antenna: &str,
) -> String {
    format!("{name:<20}{grid:<14}{role:<11}{system:<11}{antenna}")
}

pub(crate) fn member_header(grid_field: &str) -> String {
    member_line("Net members:", grid_field, "Role:", "System:", "Antenna:")
}
