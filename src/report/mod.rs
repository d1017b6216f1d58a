//! Radio Mobile report parsing.
//!
//! A report is a fixed-layout plain-text file: a three-line header, then
//! dash-rule delimited sections holding whitespace-aligned tables and, for
//! nets, embedded link-quality grids. This module recovers the typed
//! topology model from that text.
//!
//! ## Architecture
//!
//! - [`sections`] - separator splitting, header validation, section keying
//! - [`table`] - fixed-width column extraction driven by header offsets
//! - [`units`], [`systems`], [`nets`] - entity parsers over the sections
//! - [`models`] - the immutable entities handed to consumers
//!
//! ## Usage
//!
//! ```no_run
//! # fn example() -> radiomobile_parser::Result<()> {
//! let report = radiomobile_parser::parse_report_file("report.txt".as_ref())?;
//! for (name, net) in report.nets.iter() {
//!     println!("{name}: {} links", net.links.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod models;
pub mod nets;
pub mod sections;
pub mod systems;
pub mod table;
pub mod units;

#[cfg(test)]
mod tests;

use std::path::Path;

use tracing::info;

pub use models::{Link, Net, NetMember, Report, System, Unit};

use crate::Result;
use crate::constants::section_keys;

/// Parse a complete report from its raw text.
pub fn parse_report(text: &str) -> Result<Report> {
    let split = sections::split_report(text)?;

    let units = units::parse_units(split.sections.required(section_keys::ACTIVE_UNITS_INFORMATION)?)?;
    let systems = systems::parse_systems(split.sections.required(section_keys::SYSTEMS)?)?;
    let nets = nets::parse_nets(
        split.sections.required(section_keys::ACTIVE_NETS_INFORMATION)?,
        &units,
    )?;
    let general_information = split
        .sections
        .get(section_keys::GENERAL_INFORMATION)
        .map(<[String]>::to_vec)
        .unwrap_or_default();

    info!(
        units = units.len(),
        systems = systems.len(),
        nets = nets.len(),
        "parsed report"
    );
    Ok(Report {
        generated_on: split.generated_on,
        general_information,
        units,
        systems,
        nets,
    })
}

/// Read and parse a report file.
pub fn parse_report_file(path: &Path) -> Result<Report> {
    info!("parsing report file: {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_report(&text)
}

/// Serialize a report to structured text (pretty JSON), preserving
/// insertion order of all entity maps and the integer-ness of elevation,
/// distance, quality and meter fields. Round-trips the entity data, not
/// the original report text.
pub fn render_report(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
