//! Orthographic flattening of galaxy coordinates onto the map plane.

use crate::models::Waypoint;

/// Meters per map degree. Chosen so routes across the whole galaxy stay
/// inside a plausible coordinate range for the map widget.
pub const PROJECTION_SCALE: f64 = 1e16;

/// A projected 2D point in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Project a route onto the map plane.
///
/// This is a plain orthographic flattening: the Y axis becomes latitude,
/// the X axis becomes longitude, and Z is dropped. One output point per
/// waypoint, in route order; an empty route projects to an empty list.
pub fn project(route: &[Waypoint]) -> Vec<MapPoint> {
    route
        .iter()
        .map(|wp| MapPoint {
            lat: wp.y / PROJECTION_SCALE,
            lon: wp.x / PROJECTION_SCALE,
        })
        .collect()
}
