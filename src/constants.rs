//! Format literals and geodetic constants for Radio Mobile reports.
//!
//! The report layout is fixed by the producing tool; every literal the
//! parser matches against lives here.

// =============================================================================
// Report layout
// =============================================================================

/// Exact title literal required on the second header line
pub const REPORT_TITLE: &str = "Radio Mobile";

/// Prefix identifying a section separator rule line
pub const SECTION_SEPARATOR_PREFIX: &str = "---";

/// chrono format for the trailing tokens of the "generated on" header line
pub const GENERATED_ON_FORMAT: &str = "%H:%M:%S on %m-%d-%Y";

/// Normalized section lookup keys produced by [`crate::report::sections::keyify`]
pub mod section_keys {
    pub const GENERAL_INFORMATION: &str = "general_information";
    pub const ACTIVE_UNITS_INFORMATION: &str = "active_units_information";
    pub const SYSTEMS: &str = "systems";
    pub const ACTIVE_NETS_INFORMATION: &str = "active_nets_information";
}

// =============================================================================
// Table headers (left-to-right visual column order is load-bearing)
// =============================================================================

/// Column headers of the active units table
pub const UNITS_TABLE_FIELDS: &[&str] = &["Name", "Location", "Elevation"];

/// Column headers of the systems table
pub const SYSTEMS_TABLE_FIELDS: &[&str] = &[
    "Name",
    "Pwr Tx",
    "Loss",
    "Loss (+)",
    "Rx thr.",
    "Ant. G.",
    "Ant. Type",
];

/// Fixed column headers of a net member table; the grid column header
/// between "Net members:" and "Role:" varies per report
pub const NET_MEMBERS_FIELD: &str = "Net members:";
pub const NET_ROLE_FIELD: &str = "Role:";
pub const NET_SYSTEM_FIELD: &str = "System:";
pub const NET_ANTENNA_FIELD: &str = "Antenna:";

/// Width in characters of one link-quality grid cell
pub const GRID_CHUNK_WIDTH: usize = 3;

/// Member roles that identify the single primary station of a net
/// (compared case-insensitively)
pub const MASTER_ROLES: &[&str] = &["master", "node"];

// =============================================================================
// Geodetic constants
// =============================================================================

/// Mean Earth radius used by the Haversine distance, in kilometers
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// WGS84 semi-major axis, in meters
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS84 flattening
pub const WGS84_FLATTENING: f64 = 1.0 / 298.257223563;
