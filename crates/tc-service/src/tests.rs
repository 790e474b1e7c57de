//! End-to-end tests for tc-service: literal JSON documents in, typed
//! responses (and serialized JSON) out.

#[cfg(test)]
mod helpers {
    use tc_catalogue::TransportCatalogue;
    use tc_render::MapRenderer;
    use tc_router::{RoutingSettings, TransportRouter};

    use crate::input::read_input;
    use crate::{RequestHandler, ResponseEntry, ServiceError, split_base};

    /// The shared network: stops A/B 3 900 m apart each way plus busless C,
    /// roundtrip bus "256" over [A, B, A], linear bus "751" over [A, B],
    /// 6 min wait at 40 km/h.
    pub const NETWORK_SECTIONS: &str = r#"
        "base_requests": [
            {
                "type": "Stop",
                "name": "A",
                "latitude": 55.611087,
                "longitude": 37.20829,
                "road_distances": {"B": 3900}
            },
            {
                "type": "Stop",
                "name": "B",
                "latitude": 55.595884,
                "longitude": 37.209755,
                "road_distances": {"A": 3900}
            },
            {"type": "Stop", "name": "C", "latitude": 55.62, "longitude": 37.21},
            {"type": "Bus", "name": "256", "stops": ["A", "B", "A"], "is_roundtrip": true},
            {"type": "Bus", "name": "751", "stops": ["A", "B"], "is_roundtrip": false}
        ],
        "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
        "render_settings": {
            "width": 600,
            "height": 400,
            "padding": 50,
            "line_width": 14,
            "stop_radius": 5,
            "bus_label_font_size": 20,
            "bus_label_offset": [7, 15],
            "stop_label_font_size": 18,
            "stop_label_offset": [7, -3],
            "underlayer_color": [255, 255, 255, 0.85],
            "underlayer_width": 3,
            "color_palette": ["green", [255, 160, 0], "red"]
        }"#;

    /// Run the whole pipeline for a document consisting of the shared
    /// network sections plus the given `stat_requests` array.
    pub fn run(stat_requests: &str) -> Vec<ResponseEntry> {
        let document = format!("{{{NETWORK_SECTIONS}, \"stat_requests\": {stat_requests}}}");
        run_document(&document)
    }

    pub fn run_document(document: &str) -> Vec<ResponseEntry> {
        try_run_document(document).unwrap()
    }

    /// The full pipeline as the binary wires it: parse, populate, build the
    /// optional subsystems (the renderer validates against the catalogue
    /// here, whether or not a Map query follows), dispatch.
    pub fn try_run_document(document: &str) -> Result<Vec<ResponseEntry>, ServiceError> {
        let input = read_input(document.as_bytes())?;
        let (stops, buses) = split_base(input.base_requests);

        let mut catalogue = TransportCatalogue::new();
        catalogue.populate(stops, buses)?;

        let renderer = match input.render_settings {
            Some(settings) => Some(MapRenderer::new(&catalogue, settings)?),
            None => None,
        };
        let router = match input.routing_settings {
            Some(settings) => Some(TransportRouter::new(
                &catalogue,
                RoutingSettings::from_input(settings.bus_wait_time, settings.bus_velocity),
            )?),
            None => None,
        };

        let handler = RequestHandler::new(&catalogue, renderer.as_ref(), router.as_ref());
        handler.dispatch(&input.stat_requests)
    }
}

// ── Document parsing ──────────────────────────────────────────────────────────

#[cfg(test)]
mod parsing {
    use crate::input::read_input;
    use crate::{ServiceError, split_base};

    #[test]
    fn empty_document_yields_empty_inputs() {
        let input = read_input("{}".as_bytes()).unwrap();
        assert!(input.base_requests.is_empty());
        assert!(input.stat_requests.is_empty());
        assert!(input.render_settings.is_none());
        assert!(input.routing_settings.is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = read_input("{not json".as_bytes()).unwrap_err();
        assert!(matches!(err, ServiceError::Parse(_)));
    }

    #[test]
    fn base_requests_split_by_kind_in_order() {
        let input = read_input(
            format!("{{{}}}", super::helpers::NETWORK_SECTIONS).as_bytes(),
        )
        .unwrap();
        let (stops, buses) = split_base(input.base_requests);
        let stop_names: Vec<_> = stops.iter().map(|s| s.name.as_str()).collect();
        let bus_names: Vec<_> = buses.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(stop_names, vec!["A", "B", "C"]);
        assert_eq!(bus_names, vec!["256", "751"]);
        assert_eq!(stops[0].road_distances, vec![("B".to_string(), 3_900)]);
    }
}

// ── Query dispatch ────────────────────────────────────────────────────────────

#[cfg(test)]
mod dispatch {
    use float_eq::assert_float_eq;

    use super::helpers::run;
    use crate::{ResponseEntry, RouteItem};

    #[test]
    fn bus_statistics() {
        let responses = run(
            r#"[
                {"id": 1, "type": "Bus", "name": "256"},
                {"id": 2, "type": "Bus", "name": "751"},
                {"id": 3, "type": "Bus", "name": "13"}
            ]"#,
        );

        match &responses[0] {
            ResponseEntry::BusStats {
                request_id,
                curvature,
                route_length,
                stop_count,
                unique_stop_count,
            } => {
                assert_eq!(*request_id, 1);
                assert_eq!(*stop_count, 3);
                assert_eq!(*unique_stop_count, 2);
                assert_eq!(*route_length, 7_800);
                assert_float_eq!(*curvature, 2.30360, abs <= 1e-4);
            }
            other => panic!("expected bus stats, got {other:?}"),
        }

        match &responses[1] {
            ResponseEntry::BusStats { request_id, stop_count, route_length, .. } => {
                assert_eq!(*request_id, 2);
                assert_eq!(*stop_count, 3); // 2 definition stops ridden out and back
                assert_eq!(*route_length, 7_800);
            }
            other => panic!("expected bus stats, got {other:?}"),
        }

        assert_eq!(responses[2], ResponseEntry::not_found(3));
    }

    #[test]
    fn stop_lookups() {
        let responses = run(
            r#"[
                {"id": 10, "type": "Stop", "name": "A"},
                {"id": 11, "type": "Stop", "name": "C"},
                {"id": 12, "type": "Stop", "name": "D"}
            ]"#,
        );

        assert_eq!(
            responses[0],
            ResponseEntry::StopBuses {
                request_id: 10,
                buses: vec!["256".to_string(), "751".to_string()],
            }
        );
        assert_eq!(
            responses[1],
            ResponseEntry::StopBuses { request_id: 11, buses: vec![] }
        );
        assert_eq!(responses[2], ResponseEntry::not_found(12));
    }

    #[test]
    fn fastest_route_decomposes_wait_then_ride() {
        let responses = run(r#"[{"id": 20, "type": "Route", "from": "A", "to": "B"}]"#);

        match &responses[0] {
            ResponseEntry::Route { request_id, total_time, items } => {
                assert_eq!(*request_id, 20);
                assert_float_eq!(*total_time, 11.85, abs <= 1e-9);
                assert_eq!(items.len(), 2);
                assert_eq!(
                    items[0],
                    RouteItem::Wait { stop_name: "A".to_string(), time: 6.0 }
                );
                match &items[1] {
                    RouteItem::Bus { bus, span_count, time } => {
                        assert_eq!(bus, "256");
                        assert_eq!(*span_count, 1);
                        assert_float_eq!(*time, 5.85, abs <= 1e-9);
                    }
                    other => panic!("expected a bus item, got {other:?}"),
                }
            }
            other => panic!("expected a route, got {other:?}"),
        }
    }

    #[test]
    fn identity_route_is_empty() {
        let responses = run(r#"[{"id": 21, "type": "Route", "from": "A", "to": "A"}]"#);
        assert_eq!(
            responses[0],
            ResponseEntry::Route { request_id: 21, total_time: 0.0, items: vec![] }
        );
    }

    #[test]
    fn route_to_unknown_stop_is_not_found() {
        let responses = run(r#"[{"id": 22, "type": "Route", "from": "A", "to": "D"}]"#);
        assert_eq!(responses[0], ResponseEntry::not_found(22));
    }

    #[test]
    fn map_renders_the_network() {
        let responses = run(r#"[{"id": 30, "type": "Map"}]"#);
        match &responses[0] {
            ResponseEntry::Map { request_id, map } => {
                assert_eq!(*request_id, 30);
                assert!(map.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>"));
                assert!(map.contains("<polyline"));
                assert!(map.ends_with("</svg>"));
            }
            other => panic!("expected a map, got {other:?}"),
        }
    }

    #[test]
    fn responses_keep_request_order() {
        let responses = run(
            r#"[
                {"id": 3, "type": "Stop", "name": "A"},
                {"id": 1, "type": "Bus", "name": "256"},
                {"id": 2, "type": "Map"}
            ]"#,
        );
        let ids: Vec<i64> = responses
            .iter()
            .map(|r| match r {
                ResponseEntry::NotFound { request_id, .. }
                | ResponseEntry::BusStats { request_id, .. }
                | ResponseEntry::StopBuses { request_id, .. }
                | ResponseEntry::Map { request_id, .. }
                | ResponseEntry::Route { request_id, .. } => *request_id,
            })
            .collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn empty_palette_with_buses_fails_without_any_map_query() {
        use tc_render::RenderError;

        use crate::ServiceError;

        // The palette check is a build-phase validation: the run must abort
        // even though no request ever asks for the map.
        let err = super::helpers::try_run_document(
            r#"{
                "base_requests": [
                    {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2},
                    {"type": "Stop", "name": "B", "latitude": 55.61, "longitude": 37.21},
                    {"type": "Bus", "name": "1", "stops": ["A", "B"], "is_roundtrip": false}
                ],
                "render_settings": {
                    "width": 600,
                    "height": 400,
                    "padding": 50,
                    "line_width": 14,
                    "stop_radius": 5,
                    "bus_label_font_size": 20,
                    "bus_label_offset": [7, 15],
                    "stop_label_font_size": 18,
                    "stop_label_offset": [7, -3],
                    "underlayer_color": "white",
                    "underlayer_width": 3,
                    "color_palette": []
                },
                "stat_requests": [{"id": 1, "type": "Stop", "name": "A"}]
            }"#,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Render(RenderError::EmptyPalette)
        ));
    }

    #[test]
    fn queries_without_their_settings_section_miss() {
        let responses = super::helpers::run_document(
            r#"{
                "base_requests": [
                    {"type": "Stop", "name": "A", "latitude": 55.6, "longitude": 37.2}
                ],
                "stat_requests": [
                    {"id": 1, "type": "Route", "from": "A", "to": "A"},
                    {"id": 2, "type": "Map"}
                ]
            }"#,
        );
        assert_eq!(responses[0], ResponseEntry::not_found(1));
        assert_eq!(responses[1], ResponseEntry::not_found(2));
    }
}

// ── Serialization ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod serialization {
    use serde_json::{Value, json};

    use super::helpers::run;
    use crate::{ResponseEntry, write_output};

    #[test]
    fn not_found_shape() {
        let entry = ResponseEntry::not_found(12);
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({"request_id": 12, "error_message": "not found"})
        );
    }

    #[test]
    fn route_items_are_tagged() {
        let responses = run(r#"[{"id": 20, "type": "Route", "from": "A", "to": "B"}]"#);
        let value = serde_json::to_value(&responses[0]).unwrap();
        assert_eq!(value["items"][0]["type"], json!("Wait"));
        assert_eq!(value["items"][0]["stop_name"], json!("A"));
        assert_eq!(value["items"][1]["type"], json!("Bus"));
        assert_eq!(value["items"][1]["span_count"], json!(1));
    }

    #[test]
    fn output_document_is_an_array_in_request_order() {
        let responses = run(
            r#"[
                {"id": 1, "type": "Stop", "name": "A"},
                {"id": 2, "type": "Stop", "name": "D"}
            ]"#,
        );

        let mut buffer = Vec::new();
        write_output(&mut buffer, &responses).unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(
            value,
            json!([
                {"request_id": 1, "buses": ["256", "751"]},
                {"request_id": 2, "error_message": "not found"}
            ])
        );
    }
}
