// File: crates/clock-core/src/hands.rs
// Summary: Hand renderer math; maps a time sample onto the 0..60 moment scale and into segments.

use std::f64::consts::PI;

use crate::geometry::{polar, Point};
use crate::style::{DialStyles, PaintStyle};
use crate::time::TimeSample;
use crate::types::Viewport;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hand {
    Hour,
    Minute,
    Second,
}

impl Hand {
    /// Draw order: hour under minute under second.
    pub const ALL: [Hand; 3] = [Hand::Hour, Hand::Minute, Hand::Second];

    /// Position on the shared 0..60 scale. The hour hand folds in the minutes so it
    /// creeps between hour marks.
    pub fn moment(self, t: &TimeSample) -> f64 {
        match self {
            Hand::Hour => (t.hour24() as f64 + t.minute() as f64 / 60.0) * 5.0,
            Hand::Minute => t.minute() as f64,
            Hand::Second => t.second() as f64,
        }
    }

    /// Length from the center; a fraction of the viewport width.
    pub fn reach(self, viewport: &Viewport) -> f32 {
        let w = viewport.width() as f32;
        match self {
            Hand::Hour => w / 5.0,
            Hand::Minute | Hand::Second => w / 4.0,
        }
    }

    pub fn style(self, styles: &DialStyles) -> &PaintStyle {
        match self {
            Hand::Hour => &styles.hour_hand,
            Hand::Minute => &styles.minute_hand,
            Hand::Second => &styles.second_hand,
        }
    }

    pub fn segment(self, t: &TimeSample, viewport: &Viewport) -> (Point, Point) {
        let center = Point::from(viewport.center());
        let tip = polar(center, angle_for_moment(self.moment(t)), self.reach(viewport));
        (center, tip)
    }
}

/// Radians for a 0..60 moment, measured from due right; moment 0 points straight up.
#[inline]
pub fn angle_for_moment(moment: f64) -> f64 {
    PI * moment / 30.0 - PI / 2.0
}
