// File: crates/clock-core/src/style.rs
// Summary: Per-element paint styles, rebuilt wholesale from the viewport on every resize.

use skia_safe as skia;

use crate::layout::{
    HOUR_HAND_DIVISOR, MINUTE_HAND_DIVISOR, RIM_STROKE_DIVISOR, SECOND_HAND_DIVISOR,
};
use crate::types::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillMode {
    Stroke,
    Fill,
}

/// Every visual element the dial and hands draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Rim,
    CenterDot,
    MajorTick,
    MinorTick,
    Numeral,
    HourHand,
    MinuteHand,
    SecondHand,
}

impl ElementKind {
    pub const ALL: [ElementKind; 8] = [
        ElementKind::Rim,
        ElementKind::CenterDot,
        ElementKind::MajorTick,
        ElementKind::MinorTick,
        ElementKind::Numeral,
        ElementKind::HourHand,
        ElementKind::MinuteHand,
        ElementKind::SecondHand,
    ];

    pub const fn fill_mode(self) -> FillMode {
        match self {
            ElementKind::Rim
            | ElementKind::HourHand
            | ElementKind::MinuteHand
            | ElementKind::SecondHand => FillMode::Stroke,
            ElementKind::CenterDot
            | ElementKind::MajorTick
            | ElementKind::MinorTick
            | ElementKind::Numeral => FillMode::Fill,
        }
    }

    /// Divisor of `min(width, height)` giving the stroke width, for stroked elements.
    const fn stroke_divisor(self) -> Option<f32> {
        match self {
            ElementKind::Rim => Some(RIM_STROKE_DIVISOR),
            ElementKind::HourHand => Some(HOUR_HAND_DIVISOR),
            ElementKind::MinuteHand => Some(MINUTE_HAND_DIVISOR),
            ElementKind::SecondHand => Some(SECOND_HAND_DIVISOR),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintStyle {
    pub color: skia::Color,
    /// Zero for filled elements; their extent lives in `DialGeometry`.
    pub stroke_width: f32,
    pub fill: FillMode,
    pub anti_alias: bool,
}

impl PaintStyle {
    pub fn to_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(self.color);
        paint.set_anti_alias(self.anti_alias);
        paint.set_stroke_width(self.stroke_width);
        paint.set_style(match self.fill {
            FillMode::Stroke => skia::paint::Style::Stroke,
            FillMode::Fill => skia::paint::Style::Fill,
        });
        paint
    }
}

/// One immutable style per element kind. Never patched in place: a resize builds a new set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialStyles {
    pub rim: PaintStyle,
    pub center_dot: PaintStyle,
    pub major_tick: PaintStyle,
    pub minor_tick: PaintStyle,
    pub numeral: PaintStyle,
    pub hour_hand: PaintStyle,
    pub minute_hand: PaintStyle,
    pub second_hand: PaintStyle,
}

impl DialStyles {
    pub fn for_viewport(viewport: &Viewport, ink: skia::Color) -> Self {
        let min_dim = viewport.min_dim() as f32;
        let style = |kind: ElementKind| PaintStyle {
            color: ink,
            stroke_width: kind.stroke_divisor().map_or(0.0, |d| min_dim / d),
            fill: kind.fill_mode(),
            anti_alias: true,
        };
        Self {
            rim: style(ElementKind::Rim),
            center_dot: style(ElementKind::CenterDot),
            major_tick: style(ElementKind::MajorTick),
            minor_tick: style(ElementKind::MinorTick),
            numeral: style(ElementKind::Numeral),
            hour_hand: style(ElementKind::HourHand),
            minute_hand: style(ElementKind::MinuteHand),
            second_hand: style(ElementKind::SecondHand),
        }
    }

    pub fn get(&self, kind: ElementKind) -> &PaintStyle {
        match kind {
            ElementKind::Rim => &self.rim,
            ElementKind::CenterDot => &self.center_dot,
            ElementKind::MajorTick => &self.major_tick,
            ElementKind::MinorTick => &self.minor_tick,
            ElementKind::Numeral => &self.numeral,
            ElementKind::HourHand => &self.hour_hand,
            ElementKind::MinuteHand => &self.minute_hand,
            ElementKind::SecondHand => &self.second_hand,
        }
    }
}
