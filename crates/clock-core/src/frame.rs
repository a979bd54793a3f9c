// File: crates/clock-core/src/frame.rs
// Summary: Dial + hand renderer; builds an ordered display list per draw pass and replays it
// onto a Skia canvas or into an SVG document.

use std::f64::consts::PI;

use skia_safe as skia;

use crate::geometry::{polar, Point};
use crate::hands::Hand;
use crate::layout::{ClockLayout, TICK_COUNT};
use crate::style::{ElementKind, FillMode, PaintStyle};
use crate::text::TextShaper;
use crate::time::TimeSample;
use crate::types::Viewport;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Circle { kind: ElementKind, center: Point, radius: f32, style: PaintStyle },
    /// Horizontally centered on `anchor.x`, baseline at `anchor.y`.
    Text { text: &'static str, anchor: Point, size: f32, style: PaintStyle },
    Line { kind: ElementKind, from: Point, to: Point, style: PaintStyle },
}

impl DrawOp {
    pub fn kind(&self) -> ElementKind {
        match self {
            DrawOp::Circle { kind, .. } | DrawOp::Line { kind, .. } => *kind,
            DrawOp::Text { .. } => ElementKind::Numeral,
        }
    }
}

/// One draw pass: dial first, then hands. Later ops paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub time: TimeSample,
    pub ops: Vec<DrawOp>,
}

impl Frame {
    pub fn build(layout: &ClockLayout, time: TimeSample) -> Self {
        let mut ops = Vec::with_capacity(2 + TICK_COUNT as usize + 12 + 3);
        if !layout.viewport.is_empty() {
            push_dial(&mut ops, layout);
            push_hands(&mut ops, layout, &time);
        }
        Self { time, ops }
    }

    pub fn is_empty(&self) -> bool { self.ops.is_empty() }

    pub fn paint(&self, canvas: &skia::Canvas, shaper: &TextShaper) {
        for op in &self.ops {
            match op {
                DrawOp::Circle { center, radius, style, .. } => {
                    canvas.draw_circle(*center, *radius, &style.to_paint());
                }
                DrawOp::Line { from, to, style, .. } => {
                    canvas.draw_line(*from, *to, &style.to_paint());
                }
                DrawOp::Text { text, anchor, size, style } => {
                    shaper.draw_centered(canvas, text, anchor.x, anchor.y, *size, &style.to_paint());
                }
            }
        }
    }

    /// Standalone SVG document of this frame over a solid background.
    pub fn to_svg(&self, viewport: &Viewport, background: skia::Color) -> String {
        let (w, h) = (viewport.width(), viewport.height());
        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n"
        ));
        out.push_str(&format!("<rect width=\"{w}\" height=\"{h}\" fill=\"{}\"/>\n", hex(background)));
        for op in &self.ops {
            let line = match op {
                DrawOp::Circle { center, radius, style, .. } => match style.fill {
                    FillMode::Stroke => format!(
                        "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{:.3}\"/>",
                        center.x, center.y, radius, hex(style.color), style.stroke_width
                    ),
                    FillMode::Fill => format!(
                        "<circle cx=\"{:.3}\" cy=\"{:.3}\" r=\"{:.3}\" fill=\"{}\"/>",
                        center.x, center.y, radius, hex(style.color)
                    ),
                },
                DrawOp::Line { from, to, style, .. } => format!(
                    "<line x1=\"{:.3}\" y1=\"{:.3}\" x2=\"{:.3}\" y2=\"{:.3}\" stroke=\"{}\" stroke-width=\"{:.3}\"/>",
                    from.x, from.y, to.x, to.y, hex(style.color), style.stroke_width
                ),
                DrawOp::Text { text, anchor, size, style } => format!(
                    "<text x=\"{:.3}\" y=\"{:.3}\" font-size=\"{:.3}\" font-family=\"sans-serif\" text-anchor=\"middle\" fill=\"{}\">{}</text>",
                    anchor.x, anchor.y, size, hex(style.color), text
                ),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str("</svg>\n");
        out
    }
}

// ---- helpers ----------------------------------------------------------------

fn push_dial(ops: &mut Vec<DrawOp>, layout: &ClockLayout) {
    let g = &layout.geometry;
    let s = &layout.styles;
    let center = Point::from(layout.viewport.center());

    ops.push(DrawOp::Circle { kind: ElementKind::Rim, center, radius: g.rim_radius, style: s.rim });
    ops.push(DrawOp::Circle {
        kind: ElementKind::CenterDot,
        center,
        radius: g.center_dot_radius,
        style: s.center_dot,
    });

    // angle zero is due right; multiples of 5 fall on the hour positions
    for i in 1..=TICK_COUNT {
        let angle = 2.0 * PI / TICK_COUNT as f64 * i as f64;
        let at = polar(center, angle, g.tick_ring_radius);
        let op = if i % 5 == 0 {
            DrawOp::Circle { kind: ElementKind::MajorTick, center: at, radius: g.major_tick_radius, style: s.major_tick }
        } else {
            DrawOp::Circle { kind: ElementKind::MinorTick, center: at, radius: g.minor_tick_radius, style: s.minor_tick }
        };
        ops.push(op);
    }

    for label in &layout.numerals {
        ops.push(DrawOp::Text {
            text: label.text,
            anchor: label.anchor,
            size: g.numeral_font_size,
            style: s.numeral,
        });
    }
}

fn push_hands(ops: &mut Vec<DrawOp>, layout: &ClockLayout, time: &TimeSample) {
    for hand in Hand::ALL {
        let (from, to) = hand.segment(time, &layout.viewport);
        let kind = match hand {
            Hand::Hour => ElementKind::HourHand,
            Hand::Minute => ElementKind::MinuteHand,
            Hand::Second => ElementKind::SecondHand,
        };
        ops.push(DrawOp::Line { kind, from, to, style: *hand.style(&layout.styles) });
    }
}

fn hex(c: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r(), c.g(), c.b())
}
