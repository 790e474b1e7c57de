//! Request dispatch.

use tc_catalogue::TransportCatalogue;
use tc_render::MapRenderer;
use tc_router::{Leg, TransportRouter};

use crate::error::ServiceResult;
use crate::input::StatRequest;
use crate::response::{ResponseEntry, RouteItem};

/// Answers stat requests against the built subsystems.
///
/// The renderer and the router are optional because their settings sections
/// may be absent from the input; queries that need a missing subsystem
/// answer `not found` instead of failing the run.
pub struct RequestHandler<'a> {
    catalogue: &'a TransportCatalogue,
    renderer: Option<&'a MapRenderer<'a>>,
    router: Option<&'a TransportRouter<'a>>,
}

impl<'a> RequestHandler<'a> {
    pub fn new(
        catalogue: &'a TransportCatalogue,
        renderer: Option<&'a MapRenderer<'a>>,
        router: Option<&'a TransportRouter<'a>>,
    ) -> Self {
        Self { catalogue, renderer, router }
    }

    /// Answer every request, in order.  Per-query misses become `not found`
    /// entries; data-integrity and settings errors abort.
    pub fn dispatch(&self, requests: &[StatRequest]) -> ServiceResult<Vec<ResponseEntry>> {
        requests.iter().map(|request| self.answer(request)).collect()
    }

    fn answer(&self, request: &StatRequest) -> ServiceResult<ResponseEntry> {
        match request {
            StatRequest::Bus { id, name } => match self.catalogue.bus_stats(name)? {
                Some(stats) => Ok(ResponseEntry::BusStats {
                    request_id: *id,
                    curvature: stats.curvature,
                    route_length: stats.route_length,
                    stop_count: stats.stop_count,
                    unique_stop_count: stats.unique_stop_count,
                }),
                None => {
                    log::trace!("bus {name:?} not found (request {id})");
                    Ok(ResponseEntry::not_found(*id))
                }
            },

            StatRequest::Stop { id, name } => match self.catalogue.buses_of(name) {
                Some(buses) => Ok(ResponseEntry::StopBuses {
                    request_id: *id,
                    buses: buses.iter().cloned().collect(),
                }),
                None => {
                    log::trace!("stop {name:?} not found (request {id})");
                    Ok(ResponseEntry::not_found(*id))
                }
            },

            StatRequest::Map { id } => match self.renderer {
                Some(renderer) => Ok(ResponseEntry::Map {
                    request_id: *id,
                    map: renderer.render().render(),
                }),
                None => Ok(ResponseEntry::not_found(*id)),
            },

            StatRequest::Route { id, from, to } => match self.router {
                Some(router) => match router.route(from, to) {
                    Ok(itinerary) => Ok(ResponseEntry::Route {
                        request_id: *id,
                        total_time: itinerary.total_minutes,
                        items: itinerary.legs.iter().map(leg_to_item).collect(),
                    }),
                    Err(err) if err.is_not_found() => {
                        log::trace!("route {from:?} → {to:?}: {err} (request {id})");
                        Ok(ResponseEntry::not_found(*id))
                    }
                    Err(err) => Err(err.into()),
                },
                None => Ok(ResponseEntry::not_found(*id)),
            },
        }
    }
}

fn leg_to_item(leg: &Leg<'_>) -> RouteItem {
    match leg {
        Leg::Wait { stop_name, minutes } => RouteItem::Wait {
            stop_name: (*stop_name).to_string(),
            time: *minutes,
        },
        Leg::Ride { bus_name, span_count, minutes } => RouteItem::Bus {
            bus: (*bus_name).to_string(),
            span_count: *span_count,
            time: *minutes,
        },
    }
}
