// File: crates/clock-core/src/types.rs
// Summary: Shared types and constants (viewport, size negotiation, redraw interval).

use std::time::Duration;

/// Side used when the host proposes no size at all.
pub const DEFAULT_SIDE: u32 = 400;
/// Delay between a completed draw pass and the redraw it requests.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(1000);

/// Committed pixel area of the widget.
/// Contract: always square; only one side is stored, so `width() == height()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Viewport {
    side: u32,
}

impl Viewport {
    /// Square viewport of the given side.
    pub const fn square(side: u32) -> Self {
        Self { side }
    }

    /// Commit a host-provided size, clamping both axes to the smaller one.
    pub fn committed(width: u32, height: u32) -> Self {
        Self::square(width.min(height))
    }

    pub const fn width(&self) -> u32 { self.side }

    pub const fn height(&self) -> u32 { self.side }

    pub const fn min_dim(&self) -> u32 { self.side }

    pub const fn is_empty(&self) -> bool { self.side == 0 }

    /// Center of the viewport in pixel coordinates.
    pub fn center(&self) -> (f32, f32) {
        let half = self.side as f32 / 2.0;
        (half, half)
    }
}

/// Size negotiation with the host layout pass.
///
/// Proposals of `None` mean "unconstrained" on that axis. With only a width the
/// widget is width-bound; with neither it falls back to `fallback`.
pub fn measure(proposed_width: Option<u32>, proposed_height: Option<u32>, fallback: u32) -> Viewport {
    match (proposed_width, proposed_height) {
        (Some(w), Some(h)) => Viewport::committed(w, h),
        (Some(w), None) => Viewport::square(w),
        (None, Some(h)) => Viewport::square(h),
        (None, None) => Viewport::square(fallback),
    }
}
