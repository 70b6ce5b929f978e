//! Client for the capital route service.
//!
//! The service computes the route; this crate only fetches the ordered
//! waypoint list and hands it to `jump-core` for presentation.

pub mod client;

pub use client::{CapitalRouteResponse, FetchError, RouteClient};
