// File: crates/clock-core/src/geometry.rs
// Summary: Lightweight geometry helpers for dial pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for skia_safe::Point {
    fn from(p: Point) -> Self {
        skia_safe::Point::new(p.x, p.y)
    }
}

/// Point at `radius` from `center` along `angle` (radians, zero = due right, y grows down).
#[inline]
pub fn polar(center: Point, angle: f64, radius: f32) -> Point {
    Point {
        x: (center.x as f64 + angle.cos() * radius as f64) as f32,
        y: (center.y as f64 + angle.sin() * radius as f64) as f32,
    }
}
