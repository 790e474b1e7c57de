//! Geographic-to-canvas projection.
//!
//! An equirectangular projection fitted to the input's bounding box: one
//! uniform zoom for both axes (the smaller of the two per-axis zooms that
//! still fit), plus a constant padding on every side.  Latitude is inverted
//! so north points up on the canvas.

use tc_core::GeoPoint;

use crate::svg::Point;

/// Axis spans below this many degrees are treated as degenerate and
/// contribute no zoom constraint.
const EPSILON: f64 = 1e-6;

/// Maps geographic coordinates into a `width × height` canvas with uniform
/// padding.  Built once per rendering from the set of drawable stops.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereProjector {
    padding: f64,
    min_lon: f64,
    max_lat: f64,
    zoom: f64,
}

impl SphereProjector {
    /// Fit the projector to `points`.  With no input (or a single point,
    /// or all points coincident) the zoom stays at zero and everything
    /// projects to `(padding, padding)`.
    pub fn new(
        points: impl IntoIterator<Item = GeoPoint>,
        width: f64,
        height: f64,
        padding: f64,
    ) -> Self {
        let mut projector = Self { padding, min_lon: 0.0, max_lat: 0.0, zoom: 0.0 };

        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return projector;
        };

        let (mut min_lon, mut max_lon) = (first.lon, first.lon);
        let (mut min_lat, mut max_lat) = (first.lat, first.lat);
        for p in points {
            min_lon = min_lon.min(p.lon);
            max_lon = max_lon.max(p.lon);
            min_lat = min_lat.min(p.lat);
            max_lat = max_lat.max(p.lat);
        }
        projector.min_lon = min_lon;
        projector.max_lat = max_lat;

        let width_zoom = (max_lon - min_lon > EPSILON)
            .then(|| (width - 2.0 * padding) / (max_lon - min_lon));
        let height_zoom = (max_lat - min_lat > EPSILON)
            .then(|| (height - 2.0 * padding) / (max_lat - min_lat));

        projector.zoom = match (width_zoom, height_zoom) {
            (Some(w), Some(h)) => w.min(h),
            (Some(w), None) => w,
            (None, Some(h)) => h,
            (None, None) => 0.0,
        };

        projector
    }

    /// Project one coordinate onto the canvas.
    pub fn project(&self, point: GeoPoint) -> Point {
        Point {
            x: (point.lon - self.min_lon) * self.zoom + self.padding,
            y: (self.max_lat - point.lat) * self.zoom + self.padding,
        }
    }
}
