//! `tc-service` — the batch query surface.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`input`]   | `InputDocument` and the typed base/stat requests      |
//! | [`response`]| `ResponseEntry`, `RouteItem`, the JSON writer         |
//! | [`handler`] | `RequestHandler` dispatcher                           |
//! | [`error`]   | `ServiceError`, `ServiceResult<T>`                    |
//!
//! The core subsystems never see JSON: this crate converts the wire records
//! into catalogue records and settings on the way in, and converts typed
//! answers into response records on the way out.

pub mod error;
pub mod handler;
pub mod input;
pub mod response;

#[cfg(test)]
mod tests;

pub use error::{ServiceError, ServiceResult};
pub use handler::RequestHandler;
pub use input::{BaseRequest, InputDocument, StatRequest, read_input, split_base};
pub use response::{ResponseEntry, RouteItem, write_output};
