// File: crates/clock-core/tests/frame.rs
// Purpose: Validate draw order and element counts of a frame, plus the SVG output.

use clock_core::{BoxMetrics, ClockLayout, DrawOp, ElementKind, Frame, TimeSample, Viewport};
use skia_safe::Color;

fn frame_at(side: u32, h: u32, m: u32, s: u32) -> Frame {
    let layout = ClockLayout::compute(Viewport::square(side), Color::BLACK, &BoxMetrics);
    Frame::build(&layout, TimeSample::new(h, m, s).unwrap())
}

#[test]
fn dial_then_hands_in_order() {
    let frame = frame_at(200, 10, 8, 30);
    let kinds: Vec<ElementKind> = frame.ops.iter().map(DrawOp::kind).collect();
    assert_eq!(kinds.len(), 2 + 60 + 12 + 3);

    assert_eq!(kinds[0], ElementKind::Rim);
    assert_eq!(kinds[1], ElementKind::CenterDot);
    assert!(kinds[2..62]
        .iter()
        .all(|k| matches!(k, ElementKind::MajorTick | ElementKind::MinorTick)));
    assert!(kinds[62..74].iter().all(|k| *k == ElementKind::Numeral));
    assert_eq!(&kinds[74..], &[ElementKind::HourHand, ElementKind::MinuteHand, ElementKind::SecondHand]);
}

#[test]
fn twelve_major_and_forty_eight_minor_ticks() {
    let frame = frame_at(200, 0, 0, 0);
    let major = frame.ops.iter().filter(|o| o.kind() == ElementKind::MajorTick).count();
    let minor = frame.ops.iter().filter(|o| o.kind() == ElementKind::MinorTick).count();
    assert_eq!((major, minor), (12, 48));

    // i = 15 sits straight below the center on the 0.8 ring
    match &frame.ops[2 + 14] {
        DrawOp::Circle { kind, center, radius, .. } => {
            assert_eq!(*kind, ElementKind::MajorTick);
            assert!((center.x - 100.0).abs() < 1e-3 && (center.y - 180.0).abs() < 1e-3, "{center:?}");
            assert_eq!(*radius, 2.0);
        }
        other => panic!("expected tick circle, got {other:?}"),
    }
    match &frame.ops[2] {
        DrawOp::Circle { radius, .. } => assert_eq!(*radius, 1.0),
        other => panic!("expected tick circle, got {other:?}"),
    }
}

#[test]
fn rim_and_center_geometry() {
    let frame = frame_at(200, 0, 0, 0);
    match &frame.ops[0] {
        DrawOp::Circle { center, radius, style, .. } => {
            assert_eq!((center.x, center.y), (100.0, 100.0));
            assert_eq!(*radius, 90.0);
            assert_eq!(style.stroke_width, 10.0);
        }
        other => panic!("expected rim, got {other:?}"),
    }
    match &frame.ops[1] {
        DrawOp::Circle { radius, .. } => assert_eq!(*radius, 5.0),
        other => panic!("expected center dot, got {other:?}"),
    }
}

#[test]
fn numerals_follow_layout() {
    let layout = ClockLayout::compute(Viewport::square(300), Color::BLACK, &BoxMetrics);
    let frame = Frame::build(&layout, TimeSample::MIDNIGHT);
    let texts: Vec<(&str, f32)> = frame
        .ops
        .iter()
        .filter_map(|o| match o {
            DrawOp::Text { text, anchor, size, .. } => {
                let label = layout.numerals.iter().find(|n| n.text == *text).unwrap();
                assert_eq!(*anchor, label.anchor);
                Some((*text, *size))
            }
            _ => None,
        })
        .collect();
    assert_eq!(texts.len(), 12);
    assert_eq!(texts[0].0, "1");
    assert_eq!(texts[11].0, "12");
    assert!(texts.iter().all(|(_, size)| *size == 37.5));
}

#[test]
fn hands_use_their_own_styles() {
    let frame = frame_at(400, 3, 30, 0);
    let widths: Vec<f32> = frame
        .ops
        .iter()
        .filter_map(|o| match o {
            DrawOp::Line { style, .. } => Some(style.stroke_width),
            _ => None,
        })
        .collect();
    assert_eq!(widths, [10.0f32, 8.0, 4.0]);
}

#[test]
fn empty_viewport_draws_nothing() {
    let frame = frame_at(0, 12, 0, 0);
    assert!(frame.is_empty());
}

#[test]
fn svg_mirrors_ops() {
    let vp = Viewport::square(200);
    let svg = frame_at(200, 10, 8, 30).to_svg(&vp, Color::WHITE);
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 62);
    assert_eq!(svg.matches("<text").count(), 12);
    assert_eq!(svg.matches("<line").count(), 3);
    assert!(svg.contains("fill=\"#ffffff\""));
    assert!(svg.contains(">12</text>"));
}
