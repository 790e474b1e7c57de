//! The transport catalogue proper.
//!
//! # Data layout
//!
//! Records live in insertion-order `Vec`s; every cross-reference is either a
//! dense id (`StopId`, `BusId`) or an owned name looked up through an
//! `FxHashMap` index.  Stop and bus records conceptually point at each other
//! (a bus lists stop names, a stop lists serving buses), and keeping the
//! links as names-plus-indexes instead of embedded records breaks that cycle
//! without reference counting.
//!
//! `StopId` is also the routing vertex id: ids are handed out sequentially
//! as stops are added, so they are contiguous on `[0, stop_count)` for the
//! lifetime of the catalogue.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use tc_core::{Bus, BusId, Stop, StopId};

use crate::error::{CatalogueError, CatalogueResult};

/// Owner of all stop and bus records plus the derived indexes.
#[derive(Default, Debug)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    buses: Vec<Bus>,

    stop_ids: FxHashMap<String, StopId>,
    bus_ids: FxHashMap<String, BusId>,

    /// Names of the buses serving each stop, indexed by `StopId`.  A
    /// `BTreeSet` because every consumer wants the lexicographic order.
    buses_by_stop: Vec<BTreeSet<String>>,

    /// Directional road distances in metres.  Append-only during the build
    /// phase; lookups fall back to the reverse pair.
    distances: FxHashMap<(StopId, StopId), u32>,
}

impl TransportCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Build phase ───────────────────────────────────────────────────────

    /// Insert a stop record and assign it the next vertex id.
    pub fn add_stop(&mut self, stop: Stop) -> StopId {
        let id = StopId(self.stops.len() as u32);
        self.stop_ids.insert(stop.name.clone(), id);
        self.buses_by_stop.push(BTreeSet::new());
        self.stops.push(stop);
        id
    }

    /// Register the road distances declared on `stop_name`'s record.
    ///
    /// Separate from [`add_stop`](Self::add_stop) because a distance may
    /// target a stop that appears later in the input — all stops must exist
    /// before any distance is resolved.
    pub fn add_distances(&mut self, stop_name: &str) -> CatalogueResult<()> {
        let from = *self
            .stop_ids
            .get(stop_name)
            .ok_or_else(|| CatalogueError::UnknownStop(stop_name.to_string()))?;

        for (neighbor, meters) in &self.stops[from.index()].road_distances {
            let to = *self
                .stop_ids
                .get(neighbor)
                .ok_or_else(|| CatalogueError::UnknownStop(neighbor.clone()))?;
            self.distances.insert((from, to), *meters);
        }

        Ok(())
    }

    /// Insert a bus record and index it on every stop it serves.
    pub fn add_bus(&mut self, bus: Bus) -> CatalogueResult<BusId> {
        // Validate before touching any index so a bad record leaves the
        // catalogue unchanged.
        let stop_ids: Vec<StopId> = bus
            .stops
            .iter()
            .map(|name| {
                self.stop_ids
                    .get(name)
                    .copied()
                    .ok_or_else(|| CatalogueError::UnknownStop(name.clone()))
            })
            .collect::<CatalogueResult<_>>()?;

        let id = BusId(self.buses.len() as u32);
        for stop_id in stop_ids {
            self.buses_by_stop[stop_id.index()].insert(bus.name.clone());
        }
        self.bus_ids.insert(bus.name.clone(), id);
        self.buses.push(bus);
        Ok(id)
    }

    /// The three-phase build in one call: all stops, then all distances,
    /// then all buses.
    pub fn populate(
        &mut self,
        stops: Vec<Stop>,
        buses: Vec<Bus>,
    ) -> CatalogueResult<()> {
        for stop in stops {
            self.add_stop(stop);
        }

        for i in 0..self.stops.len() {
            let name = self.stops[i].name.clone();
            self.add_distances(&name)?;
        }

        for bus in buses {
            self.add_bus(bus)?;
        }

        log::info!(
            "catalogue: {} stops, {} buses, {} distance pairs",
            self.stops.len(),
            self.buses.len(),
            self.distances.len(),
        );
        Ok(())
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_ids.get(name).map(|id| &self.stops[id.index()])
    }

    pub fn bus(&self, name: &str) -> Option<&Bus> {
        self.bus_ids.get(name).map(|id| &self.buses[id.index()])
    }

    /// Vertex id of a stop — dense, stable, insertion-ordered.
    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_ids.get(name).copied()
    }

    pub fn stop_by_id(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// Sorted names of the buses serving a stop; `None` when the stop itself
    /// is unknown (a known stop served by nothing yields an empty set).
    pub fn buses_of(&self, stop_name: &str) -> Option<&BTreeSet<String>> {
        self.stop_ids
            .get(stop_name)
            .map(|id| &self.buses_by_stop[id.index()])
    }

    /// Road metres from one stop to another, falling back to the reverse
    /// direction when the forward pair was never declared.
    pub fn distance(&self, from: StopId, to: StopId) -> CatalogueResult<u32> {
        self.distances
            .get(&(from, to))
            .or_else(|| self.distances.get(&(to, from)))
            .copied()
            .ok_or_else(|| CatalogueError::MissingDistance {
                from: self.stops[from.index()].name.clone(),
                to: self.stops[to.index()].name.clone(),
            })
    }

    // ── Enumeration ───────────────────────────────────────────────────────

    /// Stops in insertion (vertex id) order.
    pub fn stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    /// Buses in insertion order.
    pub fn buses(&self) -> impl Iterator<Item = &Bus> {
        self.buses.iter()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }
}
