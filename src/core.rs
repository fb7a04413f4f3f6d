pub use kurbo::{Point, Vec2};

/// Straight-alpha RGBA8 color for strokes, fills and borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// The default guide-line color.
    pub const LIGHT_GRAY: Self = Self {
        r: 0xAA,
        g: 0xAA,
        b: 0xAA,
        a: 0xFF,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    Butt,
    Round,
}

/// Directed line segment. Direction matters: a stroke reveal runs from
/// `from` toward `to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    pub fn new(from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: impl Into<Point>, radius: f64) -> Self {
        Self {
            center: center.into(),
            radius,
        }
    }
}

/// Stroke styling shared by every guide drawable. `fill` is `None` for
/// transparent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementStyle {
    pub stroke: Rgba8,
    pub line_width: f64,
    pub fill: Option<Rgba8>,
    pub cap: LineCap,
}

impl ElementStyle {
    /// Hairline guide stroke: round caps, transparent fill.
    pub fn guide(stroke: Rgba8) -> Self {
        Self {
            stroke,
            line_width: 1.0,
            fill: None,
            cap: LineCap::Round,
        }
    }

    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }
}
