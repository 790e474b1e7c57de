//! Strongly typed identifiers for dense catalogue and graph storage.
//!
//! Stops, buses, and graph edges all live in insertion-order `Vec`s, so an
//! id is a `u32` position wrapped in its own type — a `StopId` can never
//! index the bus table by accident.  All three are `Copy + Ord + Hash` for
//! use as map keys and heap tie-breakers; `.index()` casts to `usize` for
//! direct `Vec` indexing.
//!
//! `StopId` doubles as the routing-graph vertex id: stops are numbered in
//! the order they enter the catalogue, so ids are contiguous on
//! `[0, stop_count)` for the lifetime of the catalogue.

use std::fmt;

/// Define one dense-index id type.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        $vis struct $name(pub u32);

        impl $name {
            /// Reserved "points at nothing" value for dense tables whose
            /// slots may hold no id, such as the unreached cells of the
            /// shortest-path predecessor-edge table.
            pub const INVALID: $name = $name(u32::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Position of a stop in catalogue insertion order.  Also the vertex id
    /// of that stop in the routing graph.
    pub struct StopId;
}

typed_id! {
    /// Position of a bus line in catalogue insertion order.
    pub struct BusId;
}

typed_id! {
    /// Position of a directed edge in graph insertion order.  The routing
    /// engine keys its per-edge metadata by this.
    pub struct EdgeId;
}
