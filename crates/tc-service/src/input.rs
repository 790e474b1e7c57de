//! Input document model.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "base_requests":    [ {"type": "Stop", ...}, {"type": "Bus", ...} ],
//!   "render_settings":  { ... },
//!   "routing_settings": { "bus_wait_time": 6, "bus_velocity": 40 },
//!   "stat_requests":    [ {"id": 1, "type": "Bus", "name": "256"}, ... ]
//! }
//! ```
//!
//! Every section is optional; an absent section simply contributes nothing.
//! The wire records here are converted into `tc_core` domain records before
//! any other crate sees them.

use std::collections::BTreeMap;
use std::io::Read;

use serde::Deserialize;

use tc_core::{Bus, GeoPoint, Stop};
use tc_render::RenderSettings;

use crate::error::ServiceResult;

// ── Base requests ─────────────────────────────────────────────────────────────

/// One entry of the `base_requests` array.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopEntry),
    Bus(BusEntry),
}

#[derive(Debug, Deserialize)]
pub struct StopEntry {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Road metres to each named neighbor.  A `BTreeMap` keeps the build
    /// phase deterministic regardless of document key order.
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Debug, Deserialize)]
pub struct BusEntry {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

// ── Stat requests ─────────────────────────────────────────────────────────────

/// One entry of the `stat_requests` array, tagged with the query id that the
/// matching response echoes back.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

// ── Settings sections ─────────────────────────────────────────────────────────

/// The `routing_settings` section in input units: whole minutes and km/h.
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct RoutingSettingsEntry {
    pub bus_wait_time: f64,
    pub bus_velocity: f64,
}

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
    #[serde(default)]
    pub render_settings: Option<RenderSettings>,
    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsEntry>,
}

/// Parse a full input document from a reader.
pub fn read_input(reader: impl Read) -> ServiceResult<InputDocument> {
    Ok(serde_json::from_reader(reader)?)
}

/// Split the base requests into catalogue-ready stop and bus records,
/// preserving document order within each kind.
pub fn split_base(base_requests: Vec<BaseRequest>) -> (Vec<Stop>, Vec<Bus>) {
    let mut stops = Vec::new();
    let mut buses = Vec::new();

    for entry in base_requests {
        match entry {
            BaseRequest::Stop(stop) => stops.push(Stop {
                name: stop.name,
                position: GeoPoint::new(stop.latitude, stop.longitude),
                road_distances: stop.road_distances.into_iter().collect(),
            }),
            BaseRequest::Bus(bus) => buses.push(Bus {
                name: bus.name,
                stops: bus.stops,
                is_roundtrip: bus.is_roundtrip,
            }),
        }
    }

    (stops, buses)
}
