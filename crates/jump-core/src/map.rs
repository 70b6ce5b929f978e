//! Idempotent route overlay management on top of a map widget.

use crate::projection::MapPoint;

/// Bounding extent of a set of projected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Bounds {
    /// Extent of the given points, or None if there are none.
    pub fn of(points: &[MapPoint]) -> Option<Bounds> {
        let first = points.first()?;
        let mut bounds = Bounds {
            min_lat: first.lat,
            min_lon: first.lon,
            max_lat: first.lat,
            max_lon: first.lon,
        };
        for p in &points[1..] {
            bounds.min_lat = bounds.min_lat.min(p.lat);
            bounds.min_lon = bounds.min_lon.min(p.lon);
            bounds.max_lat = bounds.max_lat.max(p.lat);
            bounds.max_lon = bounds.max_lon.max(p.lon);
        }
        Some(bounds)
    }
}

/// The map widget primitives the overlay needs.
///
/// The widget's tile loading, panning, and zoom mechanics stay behind
/// this trait; the overlay only ever adds a polyline, removes a layer it
/// previously added, and fits the viewport.
pub trait MapSurface {
    type LayerRef;

    fn add_polyline(&mut self, points: &[MapPoint]) -> Self::LayerRef;
    fn remove_layer(&mut self, layer: Self::LayerRef);
    fn fit_bounds(&mut self, bounds: Bounds);
}

/// Draws the current route as a polyline, replacing its own previous one.
///
/// The overlay removes exactly the layer it drew last time and never
/// touches any other layer on the surface. Fewer than two points draw
/// nothing and leave the viewport unchanged.
pub struct RouteOverlay<S: MapSurface> {
    layer: Option<S::LayerRef>,
}

impl<S: MapSurface> Default for RouteOverlay<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: MapSurface> RouteOverlay<S> {
    pub fn new() -> Self {
        Self { layer: None }
    }

    pub fn render(&mut self, surface: &mut S, points: &[MapPoint]) {
        if let Some(layer) = self.layer.take() {
            surface.remove_layer(layer);
        }
        if points.len() < 2 {
            return;
        }
        let Some(bounds) = Bounds::of(points) else {
            return;
        };
        self.layer = Some(surface.add_polyline(points));
        surface.fit_bounds(bounds);
    }

    /// True if a route line is currently drawn.
    pub fn is_drawn(&self) -> bool {
        self.layer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    /// Records layers and viewport fits like a real map widget would.
    #[derive(Default)]
    struct FakeSurface {
        next_id: u64,
        layers: BTreeMap<u64, Vec<MapPoint>>,
        fitted: Vec<Bounds>,
    }

    impl MapSurface for FakeSurface {
        type LayerRef = u64;

        fn add_polyline(&mut self, points: &[MapPoint]) -> u64 {
            let id = self.next_id;
            self.next_id += 1;
            self.layers.insert(id, points.to_vec());
            id
        }

        fn remove_layer(&mut self, layer: u64) {
            assert!(
                self.layers.remove(&layer).is_some(),
                "removed a layer it did not own"
            );
        }

        fn fit_bounds(&mut self, bounds: Bounds) {
            self.fitted.push(bounds);
        }
    }

    fn point(lat: f64, lon: f64) -> MapPoint {
        MapPoint { lat, lon }
    }

    #[test]
    fn bounds_of_empty_is_none() {
        assert_eq!(Bounds::of(&[]), None);
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = Bounds::of(&[point(1.0, -2.0), point(-0.5, 3.0), point(0.0, 0.0)]).unwrap();
        assert_eq!(bounds.min_lat, -0.5);
        assert_eq!(bounds.max_lat, 1.0);
        assert_eq!(bounds.min_lon, -2.0);
        assert_eq!(bounds.max_lon, 3.0);
    }

    #[test]
    fn no_line_for_fewer_than_two_points() {
        let mut surface = FakeSurface::default();
        let mut overlay = RouteOverlay::new();

        overlay.render(&mut surface, &[]);
        assert_eq!(surface.layers.len(), 0);
        assert!(surface.fitted.is_empty());

        overlay.render(&mut surface, &[point(0.0, 0.0)]);
        assert_eq!(surface.layers.len(), 0);
        assert!(surface.fitted.is_empty());
        assert!(!overlay.is_drawn());
    }

    #[test]
    fn draws_one_line_and_fits_viewport() {
        let mut surface = FakeSurface::default();
        let mut overlay = RouteOverlay::new();
        let points = [point(0.0, 0.0), point(0.0, 1.0)];

        overlay.render(&mut surface, &points);
        assert_eq!(surface.layers.len(), 1);
        assert!(overlay.is_drawn());
        assert_eq!(surface.fitted.len(), 1);
        assert_eq!(surface.fitted[0], Bounds::of(&points).unwrap());
    }

    #[test]
    fn rerender_replaces_only_its_own_layer() {
        let mut surface = FakeSurface::default();
        // A base layer the overlay must never touch.
        let base = surface.add_polyline(&[point(9.0, 9.0), point(9.0, 8.0)]);

        let mut overlay = RouteOverlay::new();
        overlay.render(&mut surface, &[point(0.0, 0.0), point(1.0, 1.0)]);
        overlay.render(&mut surface, &[point(2.0, 2.0), point(3.0, 3.0)]);

        assert_eq!(surface.layers.len(), 2);
        assert!(surface.layers.contains_key(&base));
    }

    #[test]
    fn rerender_with_same_points_is_idempotent() {
        let mut surface = FakeSurface::default();
        let mut overlay = RouteOverlay::new();
        let points = [point(0.0, 0.0), point(1.0, 1.0)];

        overlay.render(&mut surface, &points);
        overlay.render(&mut surface, &points);

        assert_eq!(surface.layers.len(), 1);
        assert_eq!(surface.layers.values().next().unwrap(), &points.to_vec());
    }

    #[test]
    fn shrinking_to_one_point_clears_the_line() {
        let mut surface = FakeSurface::default();
        let mut overlay = RouteOverlay::new();

        overlay.render(&mut surface, &[point(0.0, 0.0), point(1.0, 1.0)]);
        overlay.render(&mut surface, &[point(0.0, 0.0)]);

        assert_eq!(surface.layers.len(), 0);
        assert!(!overlay.is_drawn());
    }
}
