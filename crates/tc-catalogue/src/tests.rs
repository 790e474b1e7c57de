//! Unit tests for tc-catalogue.
//!
//! The fixture is the canonical two-stop pair (Tolstopaltsevo/Marushkino
//! coordinates) with 3 900 m of road in each direction, extended with a
//! busless stop where a test needs one.

#[cfg(test)]
mod helpers {
    use tc_core::{Bus, Stop};

    use crate::TransportCatalogue;

    pub fn stop_a() -> Stop {
        Stop::new("A", 55.611087, 37.20829).with_distance("B", 3_900)
    }

    pub fn stop_b() -> Stop {
        Stop::new("B", 55.595884, 37.209755).with_distance("A", 3_900)
    }

    /// Stops A and B, roundtrip bus "256" over [A, B, A] and linear bus
    /// "751" over [A, B], plus busless stop "C".
    pub fn two_stop_network() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![stop_a(), stop_b(), Stop::new("C", 55.62, 37.21)],
                vec![
                    Bus::new("256", ["A", "B", "A"], true),
                    Bus::new("751", ["A", "B"], false),
                ],
            )
            .unwrap();
        catalogue
    }
}

// ── Build phase & lookups ─────────────────────────────────────────────────────

#[cfg(test)]
mod build {
    use tc_core::{Bus, Stop, StopId};

    use super::helpers::two_stop_network;
    use crate::{CatalogueError, TransportCatalogue};

    #[test]
    fn vertex_ids_are_dense_and_insertion_ordered() {
        let catalogue = two_stop_network();
        assert_eq!(catalogue.stop_count(), 3);
        for (expected, stop) in catalogue.stops().enumerate() {
            assert_eq!(catalogue.stop_id(&stop.name), Some(StopId(expected as u32)));
        }
    }

    #[test]
    fn lookups_hit_and_miss() {
        let catalogue = two_stop_network();
        assert_eq!(catalogue.stop("A").unwrap().name, "A");
        assert_eq!(catalogue.bus("256").unwrap().stops.len(), 3);
        assert!(catalogue.stop("D").is_none());
        assert!(catalogue.bus("13").is_none());
    }

    #[test]
    fn bus_with_unknown_stop_is_rejected() {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop(Stop::new("A", 55.6, 37.2));
        let err = catalogue
            .add_bus(Bus::new("9", ["A", "Nowhere"], true))
            .unwrap_err();
        assert_eq!(err, CatalogueError::UnknownStop("Nowhere".to_string()));
        // The failed insert left no trace.
        assert_eq!(catalogue.bus_count(), 0);
        assert!(catalogue.buses_of("A").unwrap().is_empty());
    }

    #[test]
    fn distances_may_target_later_stops() {
        // "First" declares a distance to "Second" before "Second" exists;
        // the phased populate resolves it.
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![
                    Stop::new("First", 55.60, 37.20).with_distance("Second", 500),
                    Stop::new("Second", 55.61, 37.21),
                ],
                vec![],
            )
            .unwrap();

        let first = catalogue.stop_id("First").unwrap();
        let second = catalogue.stop_id("Second").unwrap();
        assert_eq!(catalogue.distance(first, second), Ok(500));
    }
}

// ── Distance table ────────────────────────────────────────────────────────────

#[cfg(test)]
mod distances {
    use tc_core::Stop;

    use crate::{CatalogueError, TransportCatalogue};

    #[test]
    fn reverse_fallback() {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![
                    Stop::new("A", 55.60, 37.20).with_distance("B", 1_000),
                    Stop::new("B", 55.61, 37.21),
                ],
                vec![],
            )
            .unwrap();

        let a = catalogue.stop_id("A").unwrap();
        let b = catalogue.stop_id("B").unwrap();
        assert_eq!(catalogue.distance(a, b), Ok(1_000));
        // Only A→B was declared; B→A falls back to the same value.
        assert_eq!(catalogue.distance(b, a), Ok(1_000));
    }

    #[test]
    fn asymmetric_pairs_keep_both_values() {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![
                    Stop::new("A", 55.60, 37.20).with_distance("B", 1_000),
                    Stop::new("B", 55.61, 37.21).with_distance("A", 1_200),
                ],
                vec![],
            )
            .unwrap();

        let a = catalogue.stop_id("A").unwrap();
        let b = catalogue.stop_id("B").unwrap();
        assert_eq!(catalogue.distance(a, b), Ok(1_000));
        assert_eq!(catalogue.distance(b, a), Ok(1_200));
    }

    #[test]
    fn absent_pair_is_missing_distance() {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![Stop::new("A", 55.60, 37.20), Stop::new("B", 55.61, 37.21)],
                vec![],
            )
            .unwrap();

        let a = catalogue.stop_id("A").unwrap();
        let b = catalogue.stop_id("B").unwrap();
        assert_eq!(
            catalogue.distance(a, b),
            Err(CatalogueError::MissingDistance {
                from: "A".to_string(),
                to: "B".to_string(),
            })
        );
    }
}

// ── Stop → buses index ────────────────────────────────────────────────────────

#[cfg(test)]
mod buses_of {
    use super::helpers::two_stop_network;

    #[test]
    fn sorted_bus_names() {
        let catalogue = two_stop_network();
        let names: Vec<_> = catalogue.buses_of("A").unwrap().iter().collect();
        assert_eq!(names, vec!["256", "751"]);
    }

    #[test]
    fn known_stop_without_buses_is_empty() {
        let catalogue = two_stop_network();
        assert!(catalogue.buses_of("C").unwrap().is_empty());
    }

    #[test]
    fn unknown_stop_is_none() {
        let catalogue = two_stop_network();
        assert!(catalogue.buses_of("D").is_none());
    }
}

// ── Derived statistics ────────────────────────────────────────────────────────

#[cfg(test)]
mod stats {
    use float_eq::assert_float_eq;
    use tc_core::{Bus, Stop};

    use super::helpers::two_stop_network;
    use crate::{CatalogueError, TransportCatalogue};

    #[test]
    fn roundtrip_counts_and_length() {
        let catalogue = two_stop_network();
        let stats = catalogue.bus_stats("256").unwrap().unwrap();
        assert_eq!(stats.stop_count, 3);
        assert_eq!(stats.unique_stop_count, 2);
        assert_eq!(stats.route_length, 7_800);
        // Road 7 800 m over ~3 386 m of great circle (A→B→A).
        assert_float_eq!(stats.curvature, 2.30360, abs <= 1e-4);
    }

    #[test]
    fn linear_line_doubles_the_traversal() {
        let catalogue = two_stop_network();
        let stats = catalogue.bus_stats("751").unwrap().unwrap();
        // Two definition stops ridden forward then back.
        assert_eq!(stats.stop_count, 3);
        assert_eq!(stats.unique_stop_count, 2);
        assert_eq!(stats.route_length, 7_800);
        assert_float_eq!(stats.curvature, 2.30360, abs <= 1e-4);
    }

    #[test]
    fn unknown_bus_is_none() {
        let catalogue = two_stop_network();
        assert_eq!(catalogue.bus_stats("13"), Ok(None));
    }

    #[test]
    fn coincident_stops_sanitize_curvature_to_zero() {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![
                    Stop::new("Twin1", 55.60, 37.20).with_distance("Twin2", 50),
                    Stop::new("Twin2", 55.60, 37.20),
                ],
                vec![Bus::new("0", ["Twin1", "Twin2", "Twin1"], true)],
            )
            .unwrap();

        let stats = catalogue.bus_stats("0").unwrap().unwrap();
        assert_eq!(stats.route_length, 100);
        assert_eq!(stats.curvature, 0.0);
    }

    #[test]
    fn missing_distance_is_fatal() {
        let mut catalogue = TransportCatalogue::new();
        catalogue
            .populate(
                vec![Stop::new("A", 55.60, 37.20), Stop::new("B", 55.61, 37.21)],
                vec![Bus::new("1", ["A", "B"], false)],
            )
            .unwrap();

        assert!(matches!(
            catalogue.bus_stats("1"),
            Err(CatalogueError::MissingDistance { .. })
        ));
    }
}
