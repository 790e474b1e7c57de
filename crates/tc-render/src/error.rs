//! Renderer error type.

use thiserror::Error;

/// Settings problems detected while building the renderer or drawing.
/// Both variants indicate inconsistent input and are fatal.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error("padding {padding} must satisfy 0 <= padding < min(width, height) / 2")]
    InvalidPadding { padding: f64 },

    #[error("color palette is empty but there are bus routes to draw")]
    EmptyPalette,
}

pub type RenderResult<T> = Result<T, RenderError>;
