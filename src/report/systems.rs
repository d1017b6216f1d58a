//! Systems parser: the radio system profiles table.

use tracing::debug;

use super::models::System;
use super::table;
use crate::Result;
use crate::constants::SYSTEMS_TABLE_FIELDS;
use crate::ordered_map::OrderedMap;

/// Parse the systems section into an ordered system map. Values stay raw
/// report strings; unit conversion is a consumer concern.
pub fn parse_systems(lines: &[String]) -> Result<OrderedMap<System>> {
    let rows = table::extract(lines, SYSTEMS_TABLE_FIELDS)?;

    let mut systems = OrderedMap::new();
    for row in &rows {
        let name = row.require("name")?.to_string();
        systems.insert(
            name.clone(),
            System {
                name,
                pwr_tx: row.require("pwr_tx")?.to_string(),
                loss: row.require("loss")?.to_string(),
                loss_plus: row.require("loss_(+)")?.to_string(),
                rx_threshold: row.require("rx_thr")?.to_string(),
                antenna_gain: row.require("ant_g")?.to_string(),
                antenna_type: row.require("ant_type")?.to_string(),
            },
        );
    }

    debug!(systems = systems.len(), "parsed systems section");
    Ok(systems)
}
