//! Stop and bus records as they enter the catalogue.
//!
//! Records are plain owned data.  The catalogue takes ownership at insertion
//! and never mutates them afterwards, so every other subsystem works with
//! `&Stop` / `&Bus` borrows and `&str` views into the names.

use crate::GeoPoint;

/// A named geographic point that buses may serve.
///
/// `road_distances` holds the measured road metres from this stop to each
/// named neighbor.  Distances are directional: the reverse leg may carry a
/// different value, and when only one direction is declared the catalogue
/// falls back to it for both.
#[derive(Clone, Debug)]
pub struct Stop {
    pub name: String,
    pub position: GeoPoint,
    pub road_distances: Vec<(String, u32)>,
}

impl Stop {
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            position: GeoPoint::new(lat, lon),
            road_distances: Vec::new(),
        }
    }

    /// Builder-style helper for tests and hand-written fixtures.
    pub fn with_distance(mut self, to: impl Into<String>, meters: u32) -> Self {
        self.road_distances.push((to.into(), meters));
        self
    }
}

/// A named bus line: an ordered, non-empty stop sequence plus the traversal
/// shape.
///
/// When `is_roundtrip` is true the sequence is ridden once as given
/// (typically first == last).  When false the effective traversal is forward
/// then back, without duplicating the final stop — an `n`-stop definition
/// yields `2n − 1` logical stops.
#[derive(Clone, Debug)]
pub struct Bus {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

impl Bus {
    pub fn new(
        name: impl Into<String>,
        stops: impl IntoIterator<Item = impl Into<String>>,
        is_roundtrip: bool,
    ) -> Self {
        Self {
            name: name.into(),
            stops: stops.into_iter().map(Into::into).collect(),
            is_roundtrip,
        }
    }
}
