//! Directed weighted multigraph.
//!
//! # Data layout
//!
//! Edges live in one `Vec<Edge>` indexed by `EdgeId`; a per-vertex incidence
//! list holds the ids of outgoing edges.  An adjacency representation that
//! re-sorts edges would renumber them, and `EdgeId` is the stable handle the
//! routing engine uses to attach bus/span metadata to each edge — so ids are
//! assigned strictly in insertion order and never move.
//!
//! Parallel edges are allowed: two buses covering the same ordered stop pair
//! contribute two distinct edges with independent weights.

use tc_core::{EdgeId, StopId};

/// A directed edge between two stop vertices, weighted in minutes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from: StopId,
    pub to: StopId,
    pub weight: f64,
}

/// Directed weighted multigraph over a fixed vertex set `[0, vertex_count)`.
///
/// # Example
///
/// ```
/// use tc_core::StopId;
/// use tc_graph::{DiGraph, Edge};
///
/// let mut g = DiGraph::new(2);
/// let id = g.add_edge(Edge { from: StopId(0), to: StopId(1), weight: 9.5 });
/// assert_eq!(g.edge(id).to, StopId(1));
/// assert_eq!(g.out_edges(StopId(0)).count(), 1);
/// ```
#[derive(Debug)]
pub struct DiGraph {
    edges: Vec<Edge>,
    /// Outgoing edge ids per vertex, in insertion order.
    incidence: Vec<Vec<EdgeId>>,
}

impl DiGraph {
    /// Construct a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence: vec![Vec::new(); vertex_count],
        }
    }

    /// Add a directed edge and return its id (sequential from 0).
    ///
    /// # Panics
    /// Panics if either endpoint is outside `[0, vertex_count)`.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.incidence[edge.from.index()].push(id);
        debug_assert!(edge.to.index() < self.incidence.len());
        self.edges.push(edge);
        id
    }

    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Iterator over the ids of all outgoing edges from `vertex`, in the
    /// order the edges were added.
    #[inline]
    pub fn out_edges(&self, vertex: StopId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence[vertex.index()].iter().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
