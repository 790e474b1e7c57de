//! Service error type.
//!
//! Per-query misses never reach this enum — they become `not found`
//! response entries.  Everything that does reach it aborts the run.

use thiserror::Error;

use tc_catalogue::CatalogueError;
use tc_render::RenderError;
use tc_router::RouteError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("malformed input document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
