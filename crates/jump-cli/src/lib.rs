//! Jump CLI - terminal frontend for the capital jump planner.
//!
//! Wires the presentation state machine to the route client, renders
//! the jump table as text, and draws the route on a console map surface.

pub mod config;
pub mod console;
pub mod planner;
pub mod table;

pub use config::Config;
pub use console::ConsoleMap;
pub use planner::Planner;
