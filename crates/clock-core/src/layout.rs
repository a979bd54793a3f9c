// File: crates/clock-core/src/layout.rs
// Summary: Layout engine; derives dial geometry, styles and numeral anchors from the viewport.
// Notes:
// - Everything here is a pure function of (Viewport, ink, metrics). A resize builds a
//   fresh `ClockLayout` and the widget replaces the old one in a single assignment, so
//   a draw pass never sees geometry from one size and numerals from another.

use std::f64::consts::PI;

use skia_safe as skia;

use crate::geometry::Point;
use crate::style::DialStyles;
use crate::text::GlyphMeasure;
use crate::types::Viewport;

pub const RIM_STROKE_DIVISOR: f32 = 20.0;
pub const CENTER_DOT_DIVISOR: f32 = 40.0;
pub const MAJOR_TICK_DIVISOR: f32 = 100.0;
pub const MINOR_TICK_DIVISOR: f32 = 200.0;
pub const NUMERAL_FONT_DIVISOR: f32 = 8.0;
pub const HOUR_HAND_DIVISOR: f32 = 40.0;
pub const MINUTE_HAND_DIVISOR: f32 = 50.0;
pub const SECOND_HAND_DIVISOR: f32 = 100.0;

/// Numerals sit this many glyph heights inside the outer radius.
pub const NUMERAL_INSET: f32 = 1.2;
/// Tick dots sit on this fraction of the outer radius.
pub const TICK_RING: f32 = 0.8;
pub const TICK_COUNT: u32 = 60;

const NUMERAL_TEXT: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"];

/// Radii and sizes of the static dial, all linear in `min(width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DialGeometry {
    pub outer_radius: f32,
    pub rim_stroke: f32,
    /// Radius of the stroked rim circle (`outer_radius - rim_stroke`).
    pub rim_radius: f32,
    pub center_dot_radius: f32,
    pub major_tick_radius: f32,
    pub minor_tick_radius: f32,
    pub tick_ring_radius: f32,
    pub numeral_font_size: f32,
    pub numeral_radius: f32,
}

impl DialGeometry {
    pub fn for_viewport(viewport: &Viewport) -> Self {
        let min_dim = viewport.min_dim() as f32;
        let outer_radius = min_dim / 2.0;
        let rim_stroke = min_dim / RIM_STROKE_DIVISOR;
        let numeral_font_size = min_dim / NUMERAL_FONT_DIVISOR;
        Self {
            outer_radius,
            rim_stroke,
            rim_radius: outer_radius - rim_stroke,
            center_dot_radius: min_dim / CENTER_DOT_DIVISOR,
            major_tick_radius: min_dim / MAJOR_TICK_DIVISOR,
            minor_tick_radius: min_dim / MINOR_TICK_DIVISOR,
            tick_ring_radius: outer_radius * TICK_RING,
            numeral_font_size,
            numeral_radius: outer_radius - numeral_font_size * NUMERAL_INSET,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumeralLabel {
    pub text: &'static str,
    /// Horizontal center and baseline of the glyph run.
    pub anchor: Point,
}

/// Anchors for "1".."12" in clockwise order, "1" first.
///
/// The radial offset subtracts half the ink *width* along the angle, which only centers
/// exactly on the horizontal axis; the vertical term drops the baseline so the ink box
/// is centered on the placement circle.
pub fn numeral_labels<M: GlyphMeasure + ?Sized>(
    viewport: &Viewport,
    geometry: &DialGeometry,
    metrics: &M,
) -> [NumeralLabel; 12] {
    let (cx, cy) = viewport.center();
    std::array::from_fn(|i| {
        let text = NUMERAL_TEXT[i];
        let bounds = metrics.measure(text, geometry.numeral_font_size);
        let angle = PI / 6.0 * (i as f64 + 1.0 - 3.0);
        let reach = (geometry.numeral_radius - bounds.width / 2.0) as f64;
        let x = cx as f64 + angle.cos() * reach;
        let y = cy as f64 + angle.sin() * reach + (bounds.height / 2.0 - bounds.bottom) as f64;
        NumeralLabel { text, anchor: Point::new(x as f32, y as f32) }
    })
}

/// Everything a draw pass needs that depends only on the viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockLayout {
    pub viewport: Viewport,
    pub geometry: DialGeometry,
    pub styles: DialStyles,
    pub numerals: [NumeralLabel; 12],
}

impl ClockLayout {
    pub fn compute<M: GlyphMeasure + ?Sized>(viewport: Viewport, ink: skia::Color, metrics: &M) -> Self {
        let geometry = DialGeometry::for_viewport(&viewport);
        let styles = DialStyles::for_viewport(&viewport, ink);
        let numerals = numeral_labels(&viewport, &geometry, metrics);
        log::debug!(
            "layout {}x{}: outer radius {:.2}, numeral size {:.2}",
            viewport.width(),
            viewport.height(),
            geometry.outer_radius,
            geometry.numeral_font_size
        );
        Self { viewport, geometry, styles, numerals }
    }
}
