//! Per-bus statistics, derived on demand.

use rustc_hash::FxHashSet;

use crate::catalogue::TransportCatalogue;
use crate::error::{CatalogueError, CatalogueResult};

/// Geo lengths below this are treated as zero when computing curvature.
const ZERO_EPSILON: f64 = 1e-6;

/// Statistics for one bus line.
#[derive(Debug, Clone, PartialEq)]
pub struct BusStats {
    /// Logical stops ridden: `len(stops)` for a roundtrip, `2·len − 1` for a
    /// linear line ridden forward then back.
    pub stop_count: usize,
    /// Distinct stop names in the definition.
    pub unique_stop_count: usize,
    /// Road metres along the full traversal.
    pub route_length: u32,
    /// Road length divided by great-circle length; 0 when the geographic
    /// length degenerates.
    pub curvature: f64,
}

impl TransportCatalogue {
    /// Derive [`BusStats`] for `bus_name`.
    ///
    /// `Ok(None)` means the bus is unknown (a per-query miss).  A missing
    /// road distance is a data-integrity failure and comes back as `Err`.
    pub fn bus_stats(&self, bus_name: &str) -> CatalogueResult<Option<BusStats>> {
        let Some(bus) = self.bus(bus_name) else {
            return Ok(None);
        };

        let stop_count = if bus.is_roundtrip {
            bus.stops.len()
        } else {
            2 * bus.stops.len() - 1
        };

        let unique_stop_count = bus
            .stops
            .iter()
            .map(String::as_str)
            .collect::<FxHashSet<_>>()
            .len();

        let mut route_length: u32 = 0;
        let mut geo_length: f64 = 0.0;

        for pair in bus.stops.windows(2) {
            let prev = self
                .stop_id(&pair[0])
                .ok_or_else(|| CatalogueError::UnknownStop(pair[0].clone()))?;
            let next = self
                .stop_id(&pair[1])
                .ok_or_else(|| CatalogueError::UnknownStop(pair[1].clone()))?;

            route_length += self.distance(prev, next)?;
            if !bus.is_roundtrip {
                route_length += self.distance(next, prev)?;
            }

            geo_length += self
                .stop_by_id(prev)
                .position
                .distance_m(self.stop_by_id(next).position);
        }

        if !bus.is_roundtrip {
            geo_length *= 2.0;
        }

        let mut curvature = if geo_length.abs() < ZERO_EPSILON {
            0.0
        } else {
            f64::from(route_length) / geo_length
        };
        if curvature.is_nan() {
            curvature = 0.0;
        }

        Ok(Some(BusStats {
            stop_count,
            unique_stop_count,
            route_length,
            curvature,
        }))
    }
}
