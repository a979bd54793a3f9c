// File: crates/clock-core/src/clock.rs
// Summary: AnalogClock widget; ties layout, time sampling, drawing and redraw scheduling
// together, plus headless RGBA/PNG rendering using Skia CPU raster surfaces.

use std::path::Path;
use std::time::{Duration, Instant};

use skia_safe as skia;

use crate::error::{ClockError, Result};
use crate::frame::Frame;
use crate::layout::ClockLayout;
use crate::schedule::{RedrawRequest, RedrawScheduler};
use crate::text::TextShaper;
use crate::time::{LocalClock, TimeSampler, TimeSource};
use crate::types::{measure, Viewport, DEFAULT_SIDE, REDRAW_INTERVAL};

/// Visual constants of the widget.
#[derive(Clone, Debug)]
pub struct ClockOptions {
    pub background: skia::Color,
    pub ink: skia::Color,
    pub font_families: &'static [&'static str],
    pub redraw_interval: Duration,
    /// Side reported when the host leaves both axes unconstrained.
    pub fallback_side: u32,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            background: skia::Color::WHITE,
            ink: skia::Color::BLACK,
            font_families: TextShaper::DEFAULT_FAMILIES,
            redraw_interval: REDRAW_INTERVAL,
            fallback_side: DEFAULT_SIDE,
        }
    }
}

/// `(pixels, width, height, row_bytes)` of an RGBA8 frame.
pub type Rgba8 = (Vec<u8>, u32, u32, usize);

pub struct AnalogClock<S: TimeSource = LocalClock> {
    options: ClockOptions,
    shaper: TextShaper,
    layout: ClockLayout,
    sampler: TimeSampler<S>,
    scheduler: RedrawScheduler,
}

impl AnalogClock<LocalClock> {
    pub fn local(options: ClockOptions) -> Self {
        Self::new(options, LocalClock)
    }
}

impl<S: TimeSource> AnalogClock<S> {
    /// A detached clock with an empty viewport; call `resize` and `attach` before drawing live.
    pub fn new(options: ClockOptions, source: S) -> Self {
        let shaper = TextShaper::with_families(options.font_families);
        let layout = ClockLayout::compute(Viewport::default(), options.ink, &shaper);
        let scheduler = RedrawScheduler::new(options.redraw_interval);
        Self { options, shaper, layout, sampler: TimeSampler::new(source), scheduler }
    }

    pub fn options(&self) -> &ClockOptions { &self.options }

    pub fn layout(&self) -> &ClockLayout { &self.layout }

    pub fn viewport(&self) -> Viewport { self.layout.viewport }

    /// Desired square size for the host's proposal.
    pub fn measure(&self, proposed_width: Option<u32>, proposed_height: Option<u32>) -> Viewport {
        measure(proposed_width, proposed_height, self.options.fallback_side)
    }

    /// Commit a new host size and rebuild the whole layout.
    pub fn resize(&mut self, width: u32, height: u32) -> Viewport {
        let viewport = Viewport::committed(width, height);
        if viewport != self.layout.viewport {
            self.layout = ClockLayout::compute(viewport, self.options.ink, &self.shaper);
        }
        viewport
    }

    /// Sample the time and build the display list for one pass.
    pub fn next_frame(&mut self) -> Frame {
        let time = self.sampler.sample();
        Frame::build(&self.layout, time)
    }

    /// Full draw pass onto `canvas`, then request the next one.
    pub fn draw(&mut self, canvas: &skia::Canvas, now: Instant) -> Option<RedrawRequest> {
        canvas.clear(self.options.background);
        let frame = self.next_frame();
        frame.paint(canvas, &self.shaper);
        log::trace!("drew {} ops at {}", frame.ops.len(), frame.time);
        self.scheduler.frame_drawn(now)
    }

    pub fn attach(&mut self) { self.scheduler.attach(); }

    pub fn detach(&mut self) { self.scheduler.detach(); }

    pub fn is_attached(&self) -> bool { self.scheduler.is_attached() }

    pub fn next_deadline(&self) -> Option<Instant> { self.scheduler.next_deadline() }

    pub fn take_due(&mut self, now: Instant) -> bool { self.scheduler.take_due(now) }

    pub fn redraws_issued(&self) -> u64 { self.scheduler.issued() }

    /// Draw one frame off-screen as RGBA8.
    /// Off-screen passes do not schedule redraws. An empty viewport yields an empty buffer.
    pub fn render_to_rgba8(&mut self) -> Result<Rgba8> {
        self.raster_pass(None).map(|(rgba, _)| rgba)
    }

    /// Live draw pass into an RGBA8 buffer for hosts that blit pixels; requests the next pass.
    pub fn draw_to_rgba8(&mut self, now: Instant) -> Result<(Rgba8, Option<RedrawRequest>)> {
        self.raster_pass(Some(now))
    }

    fn raster_pass(&mut self, live_at: Option<Instant>) -> Result<(Rgba8, Option<RedrawRequest>)> {
        let (width, height) = (self.layout.viewport.width(), self.layout.viewport.height());
        if self.layout.viewport.is_empty() {
            let next = live_at.and_then(|now| self.scheduler.frame_drawn(now));
            return Ok(((Vec::new(), 0, 0, 0), next));
        }
        let mut surface = skia::surfaces::raster_n32_premul((width as i32, height as i32))
            .ok_or(ClockError::Surface { width, height })?;
        let next = match live_at {
            Some(now) => self.draw(surface.canvas(), now),
            None => {
                let canvas = surface.canvas();
                canvas.clear(self.options.background);
                self.next_frame().paint(canvas, &self.shaper);
                None
            }
        };

        let info = skia::ImageInfo::new(
            (width as i32, height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None::<skia::ColorSpace>,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ClockError::Surface { width, height });
        }
        Ok(((pixels, width, height, stride), next))
    }

    /// PNG bytes of one off-screen frame; empty when the viewport is empty.
    pub fn render_to_png_bytes(&mut self) -> Result<Vec<u8>> {
        let (pixels, width, height, _) = self.render_to_rgba8()?;
        if pixels.is_empty() {
            return Ok(Vec::new());
        }
        let img = image::RgbaImage::from_raw(width, height, pixels)
            .ok_or(ClockError::Surface { width, height })?;
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render one frame to a PNG at `output_png_path`. Nothing is written for an empty viewport.
    pub fn render_to_png(&mut self, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        if bytes.is_empty() {
            log::warn!("empty viewport; not writing {}", output_png_path.as_ref().display());
            return Ok(());
        }
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
