//! Minimal SVG document model.
//!
//! Only what the map needs: `<polyline>`, `<circle>`, `<text>`, stroke/fill
//! attributes, and deterministic serialization.  Shapes are built with
//! chained consuming setters and pushed into a [`Document`]; emission order
//! equals insertion order, which is how the renderer controls z-layering.

use std::fmt::{self, Write as _};

use serde::de::{self, Deserialize, Deserializer};

// ── Point ─────────────────────────────────────────────────────────────────────

/// A canvas coordinate in pixels.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

// ── Color ─────────────────────────────────────────────────────────────────────

/// An SVG paint value.
///
/// Deserializes from the settings encoding: a string is kept verbatim, a
/// 3-element array becomes `rgb(...)`, a 4-element array `rgba(...)`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Color {
    /// Renders as `none` (used to suppress polyline fill).
    #[default]
    None,
    Named(String),
    Rgb(u8, u8, u8),
    Rgba(u8, u8, u8, f64),
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({r},{g},{b},{a})"),
        }
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Channels(Vec<f64>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => Ok(Color::Named(name)),
            Repr::Channels(c) => match c.as_slice() {
                [r, g, b] => Ok(Color::Rgb(*r as u8, *g as u8, *b as u8)),
                [r, g, b, a] => Ok(Color::Rgba(*r as u8, *g as u8, *b as u8, *a)),
                _ => Err(de::Error::invalid_length(
                    c.len(),
                    &"3 (rgb) or 4 (rgba) color channels",
                )),
            },
        }
    }
}

// ── Line caps / joins ─────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

impl fmt::Display for LineCap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineCap::Butt => "butt",
            LineCap::Round => "round",
            LineCap::Square => "square",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

impl fmt::Display for LineJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LineJoin::Miter => "miter",
            LineJoin::Round => "round",
            LineJoin::Bevel => "bevel",
        })
    }
}

// ── Shared path attributes ────────────────────────────────────────────────────

/// Stroke/fill attributes common to all shapes.  Unset attributes are
/// simply not emitted.
#[derive(Clone, Debug, Default, PartialEq)]
struct PathAttrs {
    fill: Option<Color>,
    stroke: Option<Color>,
    stroke_width: Option<f64>,
    line_cap: Option<LineCap>,
    line_join: Option<LineJoin>,
}

impl PathAttrs {
    fn render(&self, out: &mut String) {
        if let Some(fill) = &self.fill {
            let _ = write!(out, " fill=\"{fill}\"");
        }
        if let Some(stroke) = &self.stroke {
            let _ = write!(out, " stroke=\"{stroke}\"");
        }
        if let Some(width) = self.stroke_width {
            let _ = write!(out, " stroke-width=\"{width}\"");
        }
        if let Some(cap) = self.line_cap {
            let _ = write!(out, " stroke-linecap=\"{cap}\"");
        }
        if let Some(join) = self.line_join {
            let _ = write!(out, " stroke-linejoin=\"{join}\"");
        }
    }
}

/// Generate the chained attribute setters shared by every shape.
macro_rules! path_attr_setters {
    () => {
        pub fn fill(mut self, color: Color) -> Self {
            self.attrs.fill = Some(color);
            self
        }

        pub fn stroke(mut self, color: Color) -> Self {
            self.attrs.stroke = Some(color);
            self
        }

        pub fn stroke_width(mut self, width: f64) -> Self {
            self.attrs.stroke_width = Some(width);
            self
        }

        pub fn line_cap(mut self, cap: LineCap) -> Self {
            self.attrs.line_cap = Some(cap);
            self
        }

        pub fn line_join(mut self, join: LineJoin) -> Self {
            self.attrs.line_join = Some(join);
            self
        }
    };
}

// ── Circle ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
    attrs: PathAttrs,
}

impl Circle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    path_attr_setters!();

    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"",
            self.center.x, self.center.y, self.radius
        );
        self.attrs.render(out);
        out.push_str("/>");
    }
}

// ── Polyline ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    attrs: PathAttrs,
}

impl Polyline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn point(mut self, point: Point) -> Self {
        self.points.push(point);
        self
    }

    fn render(&self, out: &mut String) {
        out.push_str("<polyline points=\"");
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", p.x, p.y);
        }
        out.push('"');
        self.attrs.render(out);
        out.push_str("/>");
    }

    path_attr_setters!();
}

// ── Text ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Text {
    position: Point,
    offset: Point,
    font_size: u32,
    font_family: Option<String>,
    font_weight: Option<String>,
    content: String,
    attrs: PathAttrs,
}

impl Text {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Label offset, emitted as the `dx`/`dy` attributes.
    pub fn offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    pub fn font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.font_weight = Some(weight.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    path_attr_setters!();

    fn render(&self, out: &mut String) {
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" dx=\"{}\" dy=\"{}\" font-size=\"{}\"",
            self.position.x, self.position.y, self.offset.x, self.offset.y, self.font_size
        );
        if let Some(family) = &self.font_family {
            let _ = write!(out, " font-family=\"{family}\"");
        }
        if let Some(weight) = &self.font_weight {
            let _ = write!(out, " font-weight=\"{weight}\"");
        }
        self.attrs.render(out);
        out.push('>');
        out.push_str(escape(&self.content).trim_matches(' '));
        out.push_str("</text>");
    }
}

/// Replace the characters that would break the XML text node with their
/// named entities.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => escaped.push_str("&quot;"),
            '\'' | '`' => escaped.push_str("&apos;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            other => escaped.push(other),
        }
    }
    escaped
}

// ── Document ──────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Polyline(Polyline),
    Text(Text),
}

impl From<Circle> for Shape {
    fn from(shape: Circle) -> Self {
        Shape::Circle(shape)
    }
}

impl From<Polyline> for Shape {
    fn from(shape: Polyline) -> Self {
        Shape::Polyline(shape)
    }
}

impl From<Text> for Shape {
    fn from(shape: Text) -> Self {
        Shape::Text(shape)
    }
}

/// An ordered collection of shapes with SVG serialization.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    shapes: Vec<Shape>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Serialize the whole document: XML header, `<svg>` root, one indented
    /// element per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n");
        out.push_str("<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\">\n");
        for shape in &self.shapes {
            out.push_str("  ");
            match shape {
                Shape::Circle(c) => c.render(&mut out),
                Shape::Polyline(p) => p.render(&mut out),
                Shape::Text(t) => t.render(&mut out),
            }
            out.push('\n');
        }
        out.push_str("</svg>");
        out
    }
}
