//! Graph construction and itinerary queries.
//!
//! # Construction
//!
//! Spans are accumulated incrementally: with the outer boarding position
//! fixed at `i`, the road distance to position `j` is the distance to
//! `j − 1` plus one consecutive leg, so each candidate edge costs O(1).
//! Linear (non-roundtrip) buses additionally produce reverse-direction
//! candidates from the reverse road distances.
//!
//! Candidates are collapsed per bus: when the same bus covers one ordered
//! vertex pair several times (stop sequences may repeat stops), only the
//! shortest candidate reaches the graph, first seen winning ties.
//! Candidates from *different* buses are never collapsed — they become
//! genuine parallel edges and the shortest-path index arbitrates.

use std::collections::hash_map::Entry;

use rustc_hash::FxHashMap;

use tc_catalogue::TransportCatalogue;
use tc_core::{Bus, EdgeId, StopId};
use tc_graph::{DiGraph, Edge, PathIndex};

use crate::error::{RouteError, RouteResult};
use crate::settings::RoutingSettings;

// ── Per-edge metadata ─────────────────────────────────────────────────────────

/// What the transport domain knows about one graph edge.  Indexed by
/// `EdgeId`; borrows the bus record and the boarding-stop name from the
/// catalogue.
#[derive(Clone, Debug)]
pub struct EdgeProps<'a> {
    pub bus: &'a Bus,
    /// Consecutive stop hops covered by this ride.
    pub span_count: u32,
    /// Road metres covered by this ride.
    pub distance: u32,
    /// Full edge weight in minutes: riding time plus one boarding wait.
    pub travel_time: f64,
    /// Stop where the passenger boards (and first waits).
    pub stop_from: &'a str,
}

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// One decoded step of an itinerary.  Legs strictly alternate
/// wait-then-ride, starting with a wait.
#[derive(Debug, Clone, PartialEq)]
pub enum Leg<'a> {
    Wait {
        stop_name: &'a str,
        minutes: f64,
    },
    Ride {
        bus_name: &'a str,
        span_count: u32,
        minutes: f64,
    },
}

/// A fastest itinerary between two stops.  `from == to` is a valid
/// itinerary with no legs and zero total time.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary<'a> {
    pub total_minutes: f64,
    pub legs: Vec<Leg<'a>>,
}

// ── Candidate accumulator ─────────────────────────────────────────────────────

struct Candidate<'a> {
    bus: &'a Bus,
    span_count: u32,
    distance: u32,
    stop_from: &'a str,
}

/// Per-bus collapse map plus first-seen key order, so the flush into the
/// graph is deterministic.
struct CandidateSet<'a> {
    best: FxHashMap<(StopId, StopId), Candidate<'a>>,
    order: Vec<(StopId, StopId)>,
}

impl<'a> CandidateSet<'a> {
    fn new() -> Self {
        Self { best: FxHashMap::default(), order: Vec::new() }
    }

    /// Keep the candidate with the strictly smaller distance; the first one
    /// seen wins ties.
    fn offer(&mut self, key: (StopId, StopId), candidate: Candidate<'a>) {
        match self.best.entry(key) {
            Entry::Vacant(slot) => {
                self.order.push(key);
                slot.insert(candidate);
            }
            Entry::Occupied(mut slot) => {
                if candidate.distance < slot.get().distance {
                    slot.insert(candidate);
                }
            }
        }
    }
}

// ── TransportRouter ───────────────────────────────────────────────────────────

/// Owner of the routing graph, the shortest-path index, and the per-edge
/// metadata.  Everything else is borrowed from the catalogue.
#[derive(Debug)]
pub struct TransportRouter<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RoutingSettings,
    graph: DiGraph,
    index: PathIndex,
    /// Indexed by `EdgeId` — ids are assigned in insertion order, so a
    /// plain `Vec` is the whole lookup table.
    edge_props: Vec<EdgeProps<'a>>,
}

impl<'a> TransportRouter<'a> {
    /// Materialize the routing graph from a finished catalogue and build
    /// the shortest-path index over it.
    ///
    /// Fails with `MissingDistance` when a bus rides a consecutive stop
    /// pair that has no road distance in either direction.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        settings: RoutingSettings,
    ) -> RouteResult<Self> {
        let mut graph = DiGraph::new(catalogue.stop_count());
        let mut edge_props: Vec<EdgeProps<'a>> = Vec::new();

        for bus in catalogue.buses() {
            let stop_ids: Vec<StopId> = bus
                .stops
                .iter()
                .map(|name| {
                    catalogue
                        .stop_id(name)
                        .ok_or_else(|| RouteError::UnknownStop(name.clone()))
                })
                .collect::<RouteResult<_>>()?;

            let mut candidates = CandidateSet::new();

            for i in 0..stop_ids.len().saturating_sub(1) {
                let mut forward_m: u32 = 0;
                let mut reverse_m: u32 = 0;

                for j in (i + 1)..stop_ids.len() {
                    let span_count = (j - i) as u32;

                    forward_m += catalogue.distance(stop_ids[j - 1], stop_ids[j])?;
                    candidates.offer(
                        (stop_ids[i], stop_ids[j]),
                        Candidate {
                            bus,
                            span_count,
                            distance: forward_m,
                            stop_from: &bus.stops[i],
                        },
                    );

                    if !bus.is_roundtrip {
                        reverse_m += catalogue.distance(stop_ids[j], stop_ids[j - 1])?;
                        candidates.offer(
                            (stop_ids[j], stop_ids[i]),
                            Candidate {
                                bus,
                                span_count,
                                distance: reverse_m,
                                stop_from: &bus.stops[j],
                            },
                        );
                    }
                }
            }

            // Flush this bus's surviving candidates in first-seen order.
            for key in candidates.order {
                let survivor = &candidates.best[&key];
                let travel_time =
                    f64::from(survivor.distance) / settings.bus_velocity
                        + settings.bus_wait_time;

                let id = graph.add_edge(Edge {
                    from: key.0,
                    to: key.1,
                    weight: travel_time,
                });
                debug_assert_eq!(id.index(), edge_props.len());

                edge_props.push(EdgeProps {
                    bus: survivor.bus,
                    span_count: survivor.span_count,
                    distance: survivor.distance,
                    travel_time,
                    stop_from: survivor.stop_from,
                });
            }
        }

        log::info!(
            "routing graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count(),
        );

        let index = PathIndex::new(&graph);

        Ok(Self { catalogue, settings, graph, index, edge_props })
    }

    /// Fastest itinerary from one named stop to another.
    ///
    /// Each traversed edge decodes into a wait leg at the boarding stop
    /// followed by a ride leg; the boarding wait is baked into every edge
    /// weight, so the total is simply the walk weight.
    pub fn route(&self, from: &str, to: &str) -> RouteResult<Itinerary<'_>> {
        let from_id = self
            .catalogue
            .stop_id(from)
            .ok_or_else(|| RouteError::UnknownStop(from.to_string()))?;
        let to_id = self
            .catalogue
            .stop_id(to)
            .ok_or_else(|| RouteError::UnknownStop(to.to_string()))?;

        let info = self.index.route(from_id, to_id).ok_or_else(|| {
            RouteError::NoRoute { from: from.to_string(), to: to.to_string() }
        })?;

        let mut legs = Vec::with_capacity(info.edges.len() * 2);
        for edge_id in &info.edges {
            let props = &self.edge_props[edge_id.index()];
            legs.push(Leg::Wait {
                stop_name: props.stop_from,
                minutes: self.settings.bus_wait_time,
            });
            legs.push(Leg::Ride {
                bus_name: &props.bus.name,
                span_count: props.span_count,
                minutes: props.travel_time - self.settings.bus_wait_time,
            });
        }

        Ok(Itinerary { total_minutes: info.weight, legs })
    }

    /// The underlying graph (one vertex per stop, insertion-ordered edges).
    pub fn graph(&self) -> &DiGraph {
        &self.graph
    }

    /// Metadata of one graph edge.
    pub fn edge_props(&self, edge_id: EdgeId) -> &EdgeProps<'a> {
        &self.edge_props[edge_id.index()]
    }
}
