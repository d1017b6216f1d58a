//! Coordinate parsing and distance/projection math.
//!
//! Radio Mobile prints unit positions as sexagesimal strings such as
//! `09°19'45"S 075°17'41"W FI20IQ`. This module converts those to signed
//! decimal degrees, computes great-circle distances between them, and
//! projects them onto a local flat-Earth plane around a reference unit.
//!
//! The numeric conventions (Earth radius 6371 km, distance truncated to
//! whole meters, WGS84 radii of curvature, rounded projection offsets) are
//! relied upon exactly by downstream consumers that reuse the results as
//! simulation positions.

use regex::Regex;

use crate::constants::{EARTH_RADIUS_KM, WGS84_FLATTENING, WGS84_SEMI_MAJOR_AXIS_M};
use crate::{Error, Result};

/// (latitude, longitude) in decimal degrees, south/west negative
pub type Coordinates = (f64, f64);

/// Parse one `DD°MM'SS"H` sexagesimal token into signed decimal degrees.
///
/// The separators between the numeric parts are not inspected, only the
/// three numbers and the trailing hemisphere letter matter.
pub fn parse_dms(token: &str) -> Result<f64> {
    let pattern = Regex::new(r#"(\d+)\D+(\d+)\D+(\d+)\D*([NSWE])"#).expect("static pattern");
    let caps = pattern.captures(token).ok_or_else(|| {
        Error::format(
            "coordinates",
            format!("unparsable sexagesimal token '{token}'"),
        )
    })?;

    let number = |i: usize| -> f64 { caps[i].parse().unwrap_or(0.0) };
    let value = number(1) + number(2) / 60.0 + number(3) / 3600.0;

    match &caps[4] {
        "N" | "E" => Ok(value),
        _ => Ok(-value),
    }
}

/// Parse the latitude/longitude pair from a unit location string.
///
/// Only the first two whitespace-separated tokens are coordinates; any
/// trailing text (such as a Maidenhead locator) is ignored.
pub fn parse_location(location: &str) -> Result<Coordinates> {
    let mut tokens = location.split_whitespace();
    let (Some(lat), Some(lon)) = (tokens.next(), tokens.next()) else {
        return Err(Error::format(
            "coordinates",
            format!("location '{location}' does not hold two coordinate tokens"),
        ));
    };
    Ok((parse_dms(lat)?, parse_dms(lon)?))
}

/// Great-circle distance between two WGS84 coordinates in whole meters
/// (Haversine formula, kilometre result truncated at the meter).
pub fn haversine_distance(origin: Coordinates, destination: Coordinates) -> i32 {
    let (lat1, lon1) = origin;
    let (lat2, lon2) = destination;
    let dlat = (lat2 - lat1).to_radians();
    let dlon = (lon2 - lon1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (1000.0 * EARTH_RADIUS_KM * c) as i32
}

/// Local flat-Earth projection plane anchored at a reference coordinate.
///
/// Holds the reference point in radians together with the WGS84 meridional
/// (`r1`) and normal (`r2`) radii of curvature at its latitude. See
/// <http://williams.best.vwh.net/avform.htm#flat>.
#[derive(Debug, Clone, Copy)]
pub struct FlatEarthReference {
    lat0: f64,
    lon0: f64,
    r1: f64,
    r2: f64,
}

impl FlatEarthReference {
    pub fn new(coordinates: Coordinates) -> Self {
        let lat0 = coordinates.0.to_radians();
        let lon0 = coordinates.1.to_radians();
        let f = WGS84_FLATTENING;
        let e2 = f * (2.0 - f);
        let sin_lat = lat0.sin();
        let r1 = (WGS84_SEMI_MAJOR_AXIS_M * (1.0 - e2)) / (1.0 - e2 * sin_lat.powi(2)).powf(1.5);
        let r2 = WGS84_SEMI_MAJOR_AXIS_M / (1.0 - e2 * sin_lat.powi(2)).sqrt();
        Self { lat0, lon0, r1, r2 }
    }

    /// Project a coordinate to (x, y) meter offsets from the reference.
    /// The reference coordinate itself projects to (0, 0).
    pub fn project(&self, coordinates: Coordinates) -> (i32, i32) {
        let lat = coordinates.0.to_radians();
        let lon = coordinates.1.to_radians();
        let x = (self.r2 * self.lat0.cos() * (lon - self.lon0)).round() as i32;
        let y = (self.r1 * (lat - self.lat0)).round() as i32;
        (x, y)
    }
}
