//! Nets parser: per-net member tables and the link-quality grid.
//!
//! The active nets section is a sequence of net blocks separated by runs
//! of two or more blank lines; a single blank line belongs to the grid
//! layout inside a block. Each block holds the net name, a fixed-width
//! member table whose middle column doubles as a quality grid, and a
//! trailing "Quality = N" summary line.

use regex::Regex;
use tracing::debug;

use super::models::{Link, Net, NetMember, Unit};
use super::table;
use crate::constants::{
    GRID_CHUNK_WIDTH, MASTER_ROLES, NET_ANTENNA_FIELD, NET_MEMBERS_FIELD, NET_ROLE_FIELD,
    NET_SYSTEM_FIELD, section_keys,
};
use crate::geodesy;
use crate::ordered_map::OrderedMap;
use crate::{Error, Result};

const SECTION: &str = section_keys::ACTIVE_NETS_INFORMATION;

/// Parse the active nets section into an ordered net map. Link distances
/// are computed from the units map, so units must be parsed first.
pub fn parse_nets(lines: &[String], units: &OrderedMap<Unit>) -> Result<OrderedMap<Net>> {
    let mut nets = OrderedMap::new();
    for block in split_blocks(lines) {
        let net = parse_net_block(&block, units)?;
        debug!(
            net = %net.name,
            members = net.net_members.len(),
            links = net.links.len(),
            "parsed net block"
        );
        nets.insert(net.name.clone(), net);
    }
    Ok(nets)
}

/// Split section lines into net blocks on runs of >= 2 consecutive blank
/// lines. Blocks come back with blank edges trimmed; empty blocks (e.g.
/// leading whitespace before the first net) are dropped.
fn split_blocks(lines: &[String]) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut blank_run = 0usize;

    for line in lines {
        if line.trim().is_empty() {
            blank_run += 1;
            current.push(line.clone());
        } else {
            if blank_run >= 2 {
                current.truncate(current.len() - blank_run);
                push_block(&mut blocks, std::mem::take(&mut current));
            }
            current.push(line.clone());
            blank_run = 0;
        }
    }
    push_block(&mut blocks, current);
    blocks
}

fn push_block(blocks: &mut Vec<Vec<String>>, mut block: Vec<String>) {
    while block.first().is_some_and(|l| l.trim().is_empty()) {
        block.remove(0);
    }
    while block.last().is_some_and(|l| l.trim().is_empty()) {
        block.pop();
    }
    if !block.is_empty() {
        blocks.push(block);
    }
}

fn parse_net_block(block: &[String], units: &OrderedMap<Unit>) -> Result<Net> {
    let name = block[0].trim().to_string();

    // isolate the member table: from the "Net members:" header line through
    // the indented "... Quality = N" summary line
    let quality_line_re = Regex::new(r"^\s.*Quality =").expect("static pattern");
    let mut segment: Vec<&String> = Vec::new();
    for line in block
        .iter()
        .skip_while(|l| !l.starts_with(NET_MEMBERS_FIELD))
    {
        segment.push(line);
        if quality_line_re.is_match(line) {
            break;
        }
    }
    if segment.len() < 3 || !quality_line_re.is_match(segment[segment.len() - 1]) {
        return Err(Error::format(
            SECTION,
            format!("net '{name}': member table not found"),
        ));
    }

    let max_quality = parse_max_quality(&name, segment[segment.len() - 1])?;
    let table_lines: Vec<String> = segment[..segment.len() - 2]
        .iter()
        .map(|l| (*l).clone())
        .collect();

    // the grid column header varies per report; recover it from the table
    // header between the fixed "Net members:" and "Role:" columns
    let grid_field_re =
        Regex::new(r"Net members:\s*(.*?)\s*Role:").expect("static pattern");
    let grid_field = grid_field_re
        .captures(&table_lines[0])
        .map(|caps| caps[1].to_string())
        .ok_or_else(|| {
            Error::format(
                SECTION,
                format!("net '{name}': grid column header not found"),
            )
        })?;

    let fields = [
        NET_MEMBERS_FIELD,
        grid_field.as_str(),
        NET_ROLE_FIELD,
        NET_SYSTEM_FIELD,
        NET_ANTENNA_FIELD,
    ];
    // the grid header starts with '#' and stays a verbatim key
    let rows = table::extract_with(&table_lines, &fields, |f| !f.starts_with('#'))?;

    let mut net_members = OrderedMap::new();
    let mut grid_rows: Vec<(String, String)> = Vec::new();
    for row in &rows {
        let member = row.require("net_members")?;
        if member.starts_with('#') {
            // legend row, not a member
            continue;
        }
        net_members.insert(
            member.to_string(),
            NetMember {
                role: row.require("role")?.to_string(),
                system: row.require("system")?.to_string(),
                antenna: row.require("antenna")?.to_string(),
            },
        );
        grid_rows.push((member.to_string(), row.require(&grid_field)?.to_string()));
    }

    let masters = net_members
        .values()
        .filter(|m| MASTER_ROLES.contains(&m.role.to_lowercase().as_str()))
        .count();
    if masters != 1 {
        return Err(Error::format(
            SECTION,
            format!("net '{name}': expected exactly one master member, found {masters}"),
        ));
    }

    let links = decode_links(&name, &grid_rows, units)?;

    Ok(Net {
        name,
        net_members,
        links,
        max_quality,
    })
}

fn parse_max_quality(name: &str, line: &str) -> Result<u32> {
    let re = Regex::new(r"Quality = (\d+)").expect("static pattern");
    re.captures(line)
        .and_then(|caps| caps[1].parse().ok())
        .ok_or_else(|| {
            Error::format(
                SECTION,
                format!("net '{name}': missing max quality in '{}'", line.trim()),
            )
        })
}

/// Decode the link-quality grid.
///
/// In row `i`'s grid cell, the text after the first 3 characters (the
/// row's own index field) is cut into 3-character chunks, chunk `j`
/// holding the quality towards peer row `j`. Each pair is emitted once,
/// from the cell of the higher-indexed row (`j < i`), with peers in
/// row-encounter order. Blank or malformed chunks yield no link; the
/// format cannot distinguish "no link" from an absent measurement.
fn decode_links(
    net_name: &str,
    grid_rows: &[(String, String)],
    units: &OrderedMap<Unit>,
) -> Result<Vec<Link>> {
    let mut links = Vec::new();
    for (i, (name_i, cell)) in grid_rows.iter().enumerate() {
        let rest: Vec<char> = cell.chars().skip(GRID_CHUNK_WIDTH).collect();
        for (j, chunk) in rest.chunks(GRID_CHUNK_WIDTH).enumerate() {
            if j >= i {
                break;
            }
            let text: String = chunk.iter().collect();
            let Ok(quality) = text.trim().parse::<u32>() else {
                continue;
            };
            let name_j = &grid_rows[j].0;
            let distance = geodesy::haversine_distance(
                unit_coords(net_name, name_j, units)?,
                unit_coords(net_name, name_i, units)?,
            );
            links.push(Link {
                peers: (name_j.clone(), name_i.clone()),
                quality: Some(quality),
                distance,
            });
        }
    }
    Ok(links)
}

fn unit_coords(
    net_name: &str,
    member: &str,
    units: &OrderedMap<Unit>,
) -> Result<geodesy::Coordinates> {
    units
        .get(member)
        .map(|unit| unit.location_coords)
        .ok_or_else(|| {
            Error::format(
                SECTION,
                format!("net '{net_name}': member '{member}' is not a known unit"),
            )
        })
}
