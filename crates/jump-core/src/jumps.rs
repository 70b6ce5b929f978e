//! Per-hop distance and fuel figures for a computed route.

use crate::models::Waypoint;

/// Meters in one light-year.
pub const LY_IN_METERS: f64 = 9.4607e15;

/// Isotopes consumed per light-year jumped.
pub const FUEL_PER_LY: f64 = 1000.0;

/// One hop of a route: the system jumped to, how far, and what it costs.
#[derive(Debug, Clone, PartialEq)]
pub struct Jump {
    pub system: String,
    pub distance_ly: f64,
    pub fuel: f64,
}

/// The derived table data for a route.
///
/// `total_fuel` is the sum of the per-hop fuel figures; no rounding is
/// applied before summation. Display rounding belongs to the rendering
/// layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JumpPlan {
    pub jumps: Vec<Jump>,
    pub total_fuel: f64,
}

impl JumpPlan {
    pub fn is_empty(&self) -> bool {
        self.jumps.is_empty()
    }
}

/// Turn an ordered waypoint list into per-hop metrics plus a total.
///
/// Hops are formed from consecutive pairs in route order; a route with
/// fewer than two waypoints has no hops and a total of zero.
pub fn compute_jumps(route: &[Waypoint]) -> JumpPlan {
    let mut jumps = Vec::with_capacity(route.len().saturating_sub(1));
    let mut total_fuel = 0.0;

    for pair in route.windows(2) {
        let (prev, current) = (&pair[0], &pair[1]);
        let distance_ly = euclidean_distance_m(prev, current) / LY_IN_METERS;
        let fuel = distance_ly * FUEL_PER_LY;
        total_fuel += fuel;
        jumps.push(Jump {
            system: current.name.clone(),
            distance_ly,
            fuel,
        });
    }

    JumpPlan { jumps, total_fuel }
}

fn euclidean_distance_m(a: &Waypoint, b: &Waypoint) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}
