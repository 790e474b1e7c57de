//! `tc-graph` — directed weighted multigraph and shortest-path index.
//!
//! # Crate layout
//!
//! | Module    | Contents                                            |
//! |-----------|-----------------------------------------------------|
//! | [`graph`] | `DiGraph`, `Edge`                                   |
//! | [`path`]  | `PathIndex` (all-pairs minimum-weight table)        |
//!
//! The graph is deliberately dumb: vertices are pre-sized integers, edges
//! are `(from, to, weight)` triples with ids handed out in insertion order.
//! Everything the transport domain knows about an edge (which bus, how many
//! stop hops, the origin stop) lives with the caller, keyed by `EdgeId`.

pub mod graph;
pub mod path;

#[cfg(test)]
mod tests;

pub use graph::{DiGraph, Edge};
pub use path::{PathIndex, PathInfo};
