//! A map surface for the terminal.

use jump_core::{Bounds, MapPoint, MapSurface};
use std::collections::BTreeSet;

/// Stands in for the interactive map widget: reports draws, removals,
/// and viewport fits on stdout.
#[derive(Debug, Default)]
pub struct ConsoleMap {
    next_layer: u64,
    live: BTreeSet<u64>,
}

impl ConsoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of route lines currently on the map.
    pub fn lines_drawn(&self) -> usize {
        self.live.len()
    }
}

impl MapSurface for ConsoleMap {
    type LayerRef = u64;

    fn add_polyline(&mut self, points: &[MapPoint]) -> u64 {
        let layer = self.next_layer;
        self.next_layer += 1;
        self.live.insert(layer);
        println!("map: drew route line through {} points", points.len());
        layer
    }

    fn remove_layer(&mut self, layer: u64) {
        // Only layers this surface issued count against the line total.
        if self.live.remove(&layer) {
            println!("map: removed previous route line");
        }
    }

    fn fit_bounds(&mut self, bounds: Bounds) {
        println!(
            "map: viewport fitted to [{:.3}, {:.3}] x [{:.3}, {:.3}]",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
        );
    }
}
