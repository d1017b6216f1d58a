//! Radio Mobile report parser.
//!
//! Converts the fixed-format plain-text propagation-planning report written
//! by the Radio Mobile link-planning tool into a structured topology model:
//! named sites ([`Unit`]) with position and elevation, radio hardware
//! profiles ([`System`]), and [`Net`]s of members connected by quality-rated
//! links with computed geodesic distances.
//!
//! This library provides:
//! - Section splitting and fixed-width table extraction for the report layout
//! - Sexagesimal coordinate parsing, Haversine distances and a flat-Earth
//!   local projection around the first unit of the report
//! - An insertion-ordered entity model whose iteration order mirrors the
//!   source text
//! - A structured-text dump of the parsed model for caching and inspection
//!
//! Parsing is a pure, synchronous computation: each call to [`parse_report`]
//! returns an independent, immutable [`Report`] and shares no state with
//! other parses.

pub mod cli;
pub mod constants;
pub mod error;
pub mod geodesy;
pub mod ordered_map;
pub mod report;

pub use error::{Error, Result};
pub use ordered_map::OrderedMap;
pub use report::models::{Link, Net, NetMember, Report, System, Unit};
pub use report::{parse_report, parse_report_file, render_report};
