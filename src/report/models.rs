//! Typed entities of the parsed topology model.
//!
//! Every entity is created once during parsing and never mutated after the
//! [`Report`] is returned; a new report requires re-parsing from scratch.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::geodesy::Coordinates;
use crate::ordered_map::OrderedMap;

/// A fully parsed Radio Mobile report.
///
/// The three entity maps preserve first-seen order from the source text;
/// net membership order in turn determines link enumeration order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Report {
    /// Timestamp from the "generated on" header line
    pub generated_on: NaiveDateTime,
    /// Raw lines of the general information section, passed through unparsed
    pub general_information: Vec<String>,
    pub units: OrderedMap<Unit>,
    pub systems: OrderedMap<System>,
    pub nets: OrderedMap<Net>,
}

/// A named site with geographic position and elevation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Unit {
    pub name: String,
    /// Original sexagesimal coordinate string, retained verbatim
    pub location: String,
    /// (latitude, longitude) in decimal degrees
    pub location_coords: Coordinates,
    /// Elevation in whole meters
    pub elevation: i32,
    /// Flat-Earth (x, y) meter offsets relative to the first unit of the
    /// report; always (0, 0) for that reference unit
    pub location_meters: (i32, i32),
}

/// A radio hardware/antenna profile.
///
/// Values keep the report's raw strings, units embedded (e.g. "10,000W");
/// no unit conversion is performed here.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct System {
    pub name: String,
    pub pwr_tx: String,
    pub loss: String,
    pub loss_plus: String,
    pub rx_threshold: String,
    pub antenna_gain: String,
    pub antenna_type: String,
}

/// A group of sites connected by point-to-point or point-to-multipoint
/// radio links.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Net {
    /// Net name, possibly carrying an operating-mode suffix in bracket
    /// notation; passed through verbatim
    pub name: String,
    pub net_members: OrderedMap<NetMember>,
    pub links: Vec<Link>,
    /// The net's reported ceiling quality value
    pub max_quality: u32,
}

impl Net {
    /// Member names in net order, optionally filtered by exact role.
    pub fn members_with_role(&self, role: Option<&str>) -> Vec<&str> {
        self.net_members
            .iter()
            .filter(|(_, member)| role.is_none_or(|r| r == member.role))
            .map(|(name, _)| name)
            .collect()
    }
}

/// One unit's membership in a net.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetMember {
    /// e.g. "Master", "Slave", "Node"
    pub role: String,
    /// System name, possibly bracket-annotated with a mode
    pub system: String,
    /// Raw antenna height/type descriptor
    pub antenna: String,
}

/// A radio link between two net members.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Link {
    /// Member names in row-encounter order: the member with the lower grid
    /// row index comes first
    pub peers: (String, String),
    /// Decoded quality (0-100); a blank grid cell yields no link at all,
    /// so this is present on every link the current format can express
    pub quality: Option<u32>,
    /// Great-circle distance between the two members' units, whole meters
    pub distance: i32,
}
