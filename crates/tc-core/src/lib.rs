//! `tc-core` — foundational types for the `rust_tc` transport catalogue
//! toolkit.
//!
//! This crate is a dependency of every other `tc-*` crate.  It intentionally
//! has no `tc-*` dependencies and no external ones.
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `StopId`, `BusId`, `EdgeId`                           |
//! | [`geo`]    | `GeoPoint`, great-circle distance                     |
//! | [`domain`] | `Stop`, `Bus` records                                 |

pub mod domain;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use domain::{Bus, Stop};
pub use geo::GeoPoint;
pub use ids::{BusId, EdgeId, StopId};
