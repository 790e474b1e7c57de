//! Layered map rendering.

use serde::Deserialize;

use tc_catalogue::TransportCatalogue;
use tc_core::{Bus, Stop};

use crate::error::{RenderError, RenderResult};
use crate::projector::SphereProjector;
use crate::svg::{Circle, Color, Document, LineCap, LineJoin, Point, Polyline, Text};

// ── Settings ──────────────────────────────────────────────────────────────────

/// Canvas and styling parameters, deserialized from the input document's
/// `render_settings` section.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RenderSettings {
    pub width: f64,
    pub height: f64,
    pub padding: f64,

    /// Stroke width of route polylines.
    pub line_width: f64,
    /// Radius of stop circles.
    pub stop_radius: f64,

    pub bus_label_font_size: u32,
    /// `dx`/`dy` of bus-name labels relative to the terminal stop.
    pub bus_label_offset: [f64; 2],
    pub stop_label_font_size: u32,
    /// `dx`/`dy` of stop-name labels relative to the stop.
    pub stop_label_offset: [f64; 2],

    /// Color of the legibility underlayer behind every label.
    pub underlayer_color: Color,
    /// Stroke width of the underlayer.
    pub underlayer_width: f64,

    /// Route colors, cycled by bus index.  Must be non-empty whenever there
    /// is at least one bus to draw.
    pub color_palette: Vec<Color>,
}

// ── MapRenderer ───────────────────────────────────────────────────────────────

/// Draws the whole network as one SVG document.
///
/// Rendering is a pure function of the catalogue and the settings, so the
/// same input always produces byte-identical output.
pub struct MapRenderer<'a> {
    catalogue: &'a TransportCatalogue,
    settings: RenderSettings,
}

impl<'a> MapRenderer<'a> {
    /// Validate the settings against the finished catalogue and build the
    /// renderer.
    ///
    /// Both checks belong to the build phase: a bad padding, or an empty
    /// palette while the catalogue has buses to draw, aborts the run even
    /// if no map is ever requested.
    pub fn new(
        catalogue: &'a TransportCatalogue,
        settings: RenderSettings,
    ) -> RenderResult<Self> {
        let half_min_side = settings.width.min(settings.height) / 2.0;
        if settings.padding < 0.0 || settings.padding >= half_min_side {
            return Err(RenderError::InvalidPadding { padding: settings.padding });
        }
        if catalogue.bus_count() > 0 && settings.color_palette.is_empty() {
            return Err(RenderError::EmptyPalette);
        }
        Ok(Self { catalogue, settings })
    }

    /// Render the four layers in z-order: route polylines, bus-name labels,
    /// stop circles, stop-name labels.  Stops served by no bus are left out
    /// entirely, including from the projection fit.
    pub fn render(&self) -> Document {
        // Served stops in name order — the draw order of circle and label
        // layers, and the input to the projector fit.
        let mut served: Vec<&Stop> = self
            .catalogue
            .stops()
            .filter(|stop| {
                self.catalogue
                    .buses_of(&stop.name)
                    .is_some_and(|buses| !buses.is_empty())
            })
            .collect();
        served.sort_by(|a, b| a.name.cmp(&b.name));

        let mut buses: Vec<&Bus> = self.catalogue.buses().collect();
        buses.sort_by(|a, b| a.name.cmp(&b.name));

        let projector = SphereProjector::new(
            served.iter().map(|stop| stop.position),
            self.settings.width,
            self.settings.height,
            self.settings.padding,
        );

        log::debug!(
            "rendering {} buses over {} served stops",
            buses.len(),
            served.len(),
        );

        let mut doc = Document::new();
        self.draw_route_lines(&mut doc, &buses, &projector);
        self.draw_bus_labels(&mut doc, &buses, &projector);
        self.draw_stop_circles(&mut doc, &served, &projector);
        self.draw_stop_labels(&mut doc, &served, &projector);
        doc
    }

    // ── Layer 1: route polylines ──────────────────────────────────────────

    fn draw_route_lines(
        &self,
        doc: &mut Document,
        buses: &[&Bus],
        projector: &SphereProjector,
    ) {
        for (bus_idx, bus) in buses.iter().enumerate() {
            let mut line = Polyline::new()
                .fill(Color::None)
                .stroke(self.palette_color(bus_idx))
                .stroke_width(self.settings.line_width)
                .line_cap(LineCap::Round)
                .line_join(LineJoin::Round);

            for name in &bus.stops {
                line = line.point(self.stop_point(name, projector));
            }
            if !bus.is_roundtrip {
                // Ride back: same stops reversed, skipping the turnaround.
                for name in bus.stops.iter().rev().skip(1) {
                    line = line.point(self.stop_point(name, projector));
                }
            }

            doc.push(line);
        }
    }

    // ── Layer 2: bus-name labels ──────────────────────────────────────────

    fn draw_bus_labels(
        &self,
        doc: &mut Document,
        buses: &[&Bus],
        projector: &SphereProjector,
    ) {
        for (bus_idx, bus) in buses.iter().enumerate() {
            let Some(first) = bus.stops.first() else {
                continue;
            };
            let color = self.palette_color(bus_idx);

            self.push_bus_label(
                doc,
                self.stop_point(first, projector),
                &bus.name,
                color.clone(),
            );

            // A linear line gets a second terminal label, unless it loops
            // back onto its first stop anyway.
            let last = bus.stops.last().unwrap_or(first);
            if !bus.is_roundtrip && last != first {
                self.push_bus_label(
                    doc,
                    self.stop_point(last, projector),
                    &bus.name,
                    color,
                );
            }
        }
    }

    fn push_bus_label(&self, doc: &mut Document, at: Point, name: &str, color: Color) {
        let base = Text::new()
            .position(at)
            .offset(Point::new(
                self.settings.bus_label_offset[0],
                self.settings.bus_label_offset[1],
            ))
            .font_size(self.settings.bus_label_font_size)
            .font_family("Verdana")
            .font_weight("bold")
            .content(name);

        doc.push(self.underlay(base.clone()));
        doc.push(base.fill(color));
    }

    // ── Layer 3: stop circles ─────────────────────────────────────────────

    fn draw_stop_circles(
        &self,
        doc: &mut Document,
        served: &[&Stop],
        projector: &SphereProjector,
    ) {
        for stop in served {
            doc.push(
                Circle::new()
                    .center(projector.project(stop.position))
                    .radius(self.settings.stop_radius)
                    .fill(Color::from("white")),
            );
        }
    }

    // ── Layer 4: stop-name labels ─────────────────────────────────────────

    fn draw_stop_labels(
        &self,
        doc: &mut Document,
        served: &[&Stop],
        projector: &SphereProjector,
    ) {
        for stop in served {
            let base = Text::new()
                .position(projector.project(stop.position))
                .offset(Point::new(
                    self.settings.stop_label_offset[0],
                    self.settings.stop_label_offset[1],
                ))
                .font_size(self.settings.stop_label_font_size)
                .font_family("Verdana")
                .content(&stop.name);

            doc.push(self.underlay(base.clone()));
            doc.push(base.fill(Color::from("black")));
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn palette_color(&self, bus_idx: usize) -> Color {
        self.settings.color_palette[bus_idx % self.settings.color_palette.len()].clone()
    }

    fn stop_point(&self, stop_name: &str, projector: &SphereProjector) -> Point {
        match self.catalogue.stop(stop_name) {
            Some(stop) => projector.project(stop.position),
            // Bus stop names are validated at catalogue build time.
            None => Point::new(self.settings.padding, self.settings.padding),
        }
    }

    /// The thicker stroked copy drawn behind a label for legibility.
    fn underlay(&self, label: Text) -> Text {
        label
            .fill(self.settings.underlayer_color.clone())
            .stroke(self.settings.underlayer_color.clone())
            .stroke_width(self.settings.underlayer_width)
            .line_cap(LineCap::Round)
            .line_join(LineJoin::Round)
    }
}
