//! transport-catalogue — batch transport-information service.
//!
//! Reads one JSON document from stdin (bus network plus queries), answers
//! every query, and writes the JSON response array to stdout.  Exit code 0
//! on success; data-integrity and settings errors abort with a non-zero
//! exit and the error chain on stderr.
//!
//! Diagnostics go through `log`/`env_logger` (set `RUST_LOG=debug` to see
//! build-phase summaries) and never touch stdout.

use std::io;

use anyhow::Result;

use tc_catalogue::TransportCatalogue;
use tc_render::MapRenderer;
use tc_router::{RoutingSettings, TransportRouter};
use tc_service::{RequestHandler, read_input, split_base, write_output};

fn main() -> Result<()> {
    env_logger::init();

    // 1. Parse the input document.
    let input = read_input(io::stdin().lock())?;

    // 2. Build the catalogue: stops, then distances, then buses.
    let (stops, buses) = split_base(input.base_requests);
    let mut catalogue = TransportCatalogue::new();
    catalogue.populate(stops, buses)?;

    // 3. Build the optional subsystems from their settings sections.  The
    //    renderer validates its settings against the catalogue here, before
    //    any query runs — an empty palette with buses to draw is fatal even
    //    when no map is requested.
    let renderer = input
        .render_settings
        .map(|settings| MapRenderer::new(&catalogue, settings))
        .transpose()?;
    let router = input
        .routing_settings
        .map(|settings| {
            TransportRouter::new(
                &catalogue,
                RoutingSettings::from_input(settings.bus_wait_time, settings.bus_velocity),
            )
        })
        .transpose()?;

    // 4. Serve every query in order and emit the response document.
    let handler = RequestHandler::new(&catalogue, renderer.as_ref(), router.as_ref());
    let responses = handler.dispatch(&input.stat_requests)?;
    write_output(io::stdout().lock(), &responses)?;

    Ok(())
}
