pub mod jumps;
pub mod map;
pub mod models;
pub mod projection;
pub mod state;
pub mod validate;

pub use jumps::{compute_jumps, Jump, JumpPlan, FUEL_PER_LY, LY_IN_METERS};
pub use map::{Bounds, MapSurface, RouteOverlay};
pub use models::Waypoint;
pub use projection::{project, MapPoint, PROJECTION_SCALE};
pub use state::{FetchOutcome, Phase, PlannerMessage, PresentationState, RequestTicket};
pub use validate::{validate_endpoints, ValidationError};
