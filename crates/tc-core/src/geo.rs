//! Geographic coordinate type and great-circle distance.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Bus-stop
//! coordinates arrive with six decimal places (~0.1 m), and curvature ratios
//! divide two distances of similar magnitude, so single precision would leak
//! into the reported statistics.

/// Mean Earth radius in metres, spherical model.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Coordinates closer than this (in degrees, per axis) are treated as the
/// same point.
const COINCIDENT_EPSILON: f64 = 1e-6;

/// A WGS-84 geographic coordinate in decimal degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance in metres (spherical law of cosines).
    ///
    /// Coincident points short-circuit to `0.0`: rounding can push the
    /// `acos` argument above 1 there, which would return NaN.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        if (self.lat - other.lat).abs() < COINCIDENT_EPSILON
            && (self.lon - other.lon).abs() < COINCIDENT_EPSILON
        {
            return 0.0;
        }

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (self.lon - other.lon).abs().to_radians();

        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos()).acos()
            * EARTH_RADIUS_M
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
