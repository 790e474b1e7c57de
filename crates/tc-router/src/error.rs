//! Routing error type.

use thiserror::Error;

use tc_catalogue::CatalogueError;

/// Errors produced while building the routing graph or answering queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("no route from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
}

impl RouteError {
    /// Per-query misses surface as a `not found` response; everything else
    /// (a missing road distance during graph construction) is fatal.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownStop(_) | Self::NoRoute { .. })
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
