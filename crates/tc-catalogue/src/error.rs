//! Catalogue error type.

use thiserror::Error;

/// Errors produced while building or querying the catalogue.
///
/// `MissingDistance` signals inconsistent input data — a bus rides a stop
/// pair no direction of which has a measured road distance — and is treated
/// as fatal by callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("no road distance between {from:?} and {to:?}")]
    MissingDistance { from: String, to: String },
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
