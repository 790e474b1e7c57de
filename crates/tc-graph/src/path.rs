//! All-pairs shortest-path index.
//!
//! # Construction
//!
//! One Dijkstra relaxation per source vertex over a binary min-heap, with
//! the results stored in dense `V × V` weight and predecessor-edge tables.
//! V equals the stop count (hundreds to low thousands in realistic inputs),
//! so the dense representation costs a few megabytes and makes every
//! `route()` lookup an O(path length) walk with no search.
//!
//! The index is built once against a finished graph and never mutated, so
//! it can be shared freely between readers.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tc_core::{EdgeId, StopId};

use crate::graph::DiGraph;

// ── Query result ──────────────────────────────────────────────────────────────

/// A minimum-weight walk: total weight plus the edge ids to traverse in
/// order.  `from == to` yields weight `0.0` and no edges.
#[derive(Debug, Clone, PartialEq)]
pub struct PathInfo {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

// ── Heap entry ────────────────────────────────────────────────────────────────

/// `BinaryHeap` is a max-heap; ordering is reversed here so the smallest
/// weight pops first.  The secondary key makes equal-weight pops
/// deterministic.
#[derive(Copy, Clone, PartialEq)]
struct QueueEntry {
    weight: f64,
    vertex: StopId,
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ── PathIndex ─────────────────────────────────────────────────────────────────

/// Precomputed minimum-weight table over a [`DiGraph`].
///
/// Row-major `V × V` layout: the entry for `(from, to)` sits at
/// `from * V + to`.
#[derive(Debug)]
pub struct PathIndex {
    vertex_count: usize,
    /// Minimum total weight per pair; `f64::INFINITY` when unreachable.
    weights: Vec<f64>,
    /// Last edge of the optimal walk per pair; `EdgeId::INVALID` when
    /// unreachable or trivial.
    prev_edge: Vec<EdgeId>,
    /// Source vertex of each graph edge, copied at build time so that walk
    /// reconstruction needs no access to the graph.
    edge_sources: Vec<StopId>,
}

impl PathIndex {
    /// Run Dijkstra from every source vertex and freeze the result.
    pub fn new(graph: &DiGraph) -> Self {
        let v = graph.vertex_count();
        let mut index = Self {
            vertex_count: v,
            weights: vec![f64::INFINITY; v * v],
            prev_edge: vec![EdgeId::INVALID; v * v],
            edge_sources: (0..graph.edge_count())
                .map(|id| graph.edge(EdgeId(id as u32)).from)
                .collect(),
        };

        for source in 0..v {
            index.relax_from(graph, StopId(source as u32));
        }

        log::debug!(
            "path index: {} vertices, {} edges, {} reachable pairs",
            v,
            graph.edge_count(),
            index.weights.iter().filter(|w| w.is_finite()).count(),
        );

        index
    }

    /// Minimum total weight and edge sequence from `from` to `to`, or `None`
    /// when `to` is unreachable.
    pub fn route(&self, from: StopId, to: StopId) -> Option<PathInfo> {
        let weight = self.weights[self.cell(from, to)];
        if !weight.is_finite() {
            return None;
        }

        // Walk predecessor edges back from `to`; for `from == to` the loop
        // body never runs and the walk is empty.
        let mut edges = Vec::new();
        let mut cursor = to;
        while cursor != from {
            let edge_id = self.prev_edge[self.cell(from, cursor)];
            edges.push(edge_id);
            cursor = self.edge_sources[edge_id.index()];
        }
        edges.reverse();

        Some(PathInfo { weight, edges })
    }

    #[inline]
    fn cell(&self, from: StopId, to: StopId) -> usize {
        from.index() * self.vertex_count + to.index()
    }

    /// Single-source relaxation writing into this source's table row.
    fn relax_from(&mut self, graph: &DiGraph, source: StopId) {
        let row = source.index() * self.vertex_count;
        self.weights[row + source.index()] = 0.0;

        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry { weight: 0.0, vertex: source });

        while let Some(QueueEntry { weight, vertex }) = heap.pop() {
            // Skip stale heap entries.
            if weight > self.weights[row + vertex.index()] {
                continue;
            }

            for edge_id in graph.out_edges(vertex) {
                let edge = graph.edge(edge_id);
                let candidate = weight + edge.weight;

                if candidate < self.weights[row + edge.to.index()] {
                    self.weights[row + edge.to.index()] = candidate;
                    self.prev_edge[row + edge.to.index()] = edge_id;
                    heap.push(QueueEntry { weight: candidate, vertex: edge.to });
                }
            }
        }
    }
}
