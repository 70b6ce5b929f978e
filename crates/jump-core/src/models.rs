//! Core data models for the jump planner.

use serde::{Deserialize, Serialize};

/// One star system on a computed route.
///
/// The id is assigned by the routing service; it is never generated
/// locally. Position components are meters in the galaxy frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: i64,
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Waypoint {
    /// True if all position components are finite.
    ///
    /// Routes with non-finite coordinates are rejected at the decode
    /// boundary rather than repaired.
    pub fn has_finite_position(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint(x: f64, y: f64, z: f64) -> Waypoint {
        Waypoint {
            id: 1,
            name: "Test".to_string(),
            x,
            y,
            z,
        }
    }

    #[test]
    fn finite_position_accepted() {
        assert!(waypoint(1.0, -2.0, 3.5e15).has_finite_position());
    }

    #[test]
    fn non_finite_components_rejected() {
        assert!(!waypoint(f64::NAN, 0.0, 0.0).has_finite_position());
        assert!(!waypoint(0.0, f64::INFINITY, 0.0).has_finite_position());
        assert!(!waypoint(0.0, 0.0, f64::NEG_INFINITY).has_finite_position());
    }

    #[test]
    fn wire_shape_round_trips() {
        let json = r#"{"id":2,"name":"End","x":1e16,"y":0.0,"z":0.0}"#;
        let wp: Waypoint = serde_json::from_str(json).unwrap();
        assert_eq!(wp.name, "End");
        assert_eq!(wp.x, 1e16);
        let back = serde_json::to_string(&wp).unwrap();
        let again: Waypoint = serde_json::from_str(&back).unwrap();
        assert_eq!(wp, again);
    }
}
