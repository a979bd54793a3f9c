// File: crates/clock-core/src/lib.rs
// Summary: Core library entry point; exports the analog clock widget and its building blocks.

pub mod clock;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod hands;
pub mod layout;
pub mod schedule;
pub mod style;
pub mod text;
pub mod time;
pub mod types;

pub use clock::{AnalogClock, ClockOptions, Rgba8};
pub use error::ClockError;
pub use frame::{DrawOp, Frame};
pub use geometry::Point;
pub use hands::{angle_for_moment, Hand};
pub use layout::{ClockLayout, DialGeometry, NumeralLabel};
pub use schedule::{RedrawRequest, RedrawScheduler};
pub use style::{DialStyles, ElementKind, FillMode, PaintStyle};
pub use text::{BoxMetrics, GlyphMeasure, TextBounds, TextShaper};
pub use time::{FixedTime, LocalClock, TimeSample, TimeSampler, TimeSource};
pub use types::{measure, Viewport, DEFAULT_SIDE, REDRAW_INTERVAL};
