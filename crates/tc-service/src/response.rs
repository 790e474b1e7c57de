//! Response document model.
//!
//! Responses are a tagged variant per query kind rather than a stringly
//! bag of fields; the serializer pattern-matches on the variant.  The
//! output document is the JSON array of entries in request order.

use std::io::Write;

use serde::Serialize;

use crate::error::ServiceResult;

/// One step of an itinerary on the wire.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: u32,
        time: f64,
    },
}

/// One entry of the response array.  Serialized untagged: each variant
/// carries exactly the fields its query kind promises, plus `request_id`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseEntry {
    NotFound {
        request_id: i64,
        error_message: String,
    },
    BusStats {
        request_id: i64,
        curvature: f64,
        route_length: u32,
        stop_count: usize,
        unique_stop_count: usize,
    },
    StopBuses {
        request_id: i64,
        buses: Vec<String>,
    },
    Map {
        request_id: i64,
        map: String,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<RouteItem>,
    },
}

impl ResponseEntry {
    /// The uniform per-query miss.
    pub fn not_found(request_id: i64) -> Self {
        ResponseEntry::NotFound {
            request_id,
            error_message: "not found".to_string(),
        }
    }
}

/// Write the response array to a writer as one JSON document.
pub fn write_output(writer: impl Write, responses: &[ResponseEntry]) -> ServiceResult<()> {
    Ok(serde_json::to_writer(writer, responses)?)
}
