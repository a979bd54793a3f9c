// File: crates/clock-window/src/main.rs
// Summary: Live analog clock window; renders clock-core to RGBA and blits it (CPU) using
// winit + softbuffer, redrawing once per second from the widget's own redraw requests.

use anyhow::{anyhow, Context, Result};
use clock_core::{AnalogClock, ClockOptions, Rgba8};
use std::num::NonZeroU32;
use std::time::Instant;
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = ClockOptions::default();
    let side = options.fallback_side as f64;

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Analog Clock")
        .with_inner_size(winit::dpi::LogicalSize::new(side, side))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let mut clock = AnalogClock::local(options);
    let mut size = window.inner_size();
    clock.resize(size.width, size.height);
    clock.attach();
    window.request_redraw();

    event_loop.run(move |event, _, control_flow| {
        match event {
            Event::NewEvents(_) => {
                if clock.take_due(Instant::now()) {
                    window.request_redraw();
                }
            }
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    clock.detach();
                    control_flow.set_exit();
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    let proposed = clock.measure(Some(size.width), Some(size.height));
                    let vp = clock.resize(proposed.width(), proposed.height());
                    log::debug!("window {}x{} -> clock {}x{}", size.width, size.height, vp.width(), vp.height());
                    window.request_redraw();
                }
                WindowEvent::Occluded(hidden) => {
                    if hidden {
                        clock.detach();
                    } else {
                        clock.attach();
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                // The clock pass runs before presenting, so a failed blit still leaves the next tick queued.
                match clock.draw_to_rgba8(Instant::now()) {
                    Ok((frame, _)) => {
                        let bg = clock.options().background;
                        let bg = pack(bg.r(), bg.g(), bg.b());
                        if let Err(e) = present(&mut surface, size, &frame, bg) {
                            log::error!("present failed: {e:#}");
                        }
                    }
                    Err(e) => log::error!("clock draw failed: {e}"),
                }
            }
            _ => {}
        }

        match clock.next_deadline() {
            Some(deadline) => control_flow.set_wait_until(deadline),
            None => control_flow.set_wait(),
        }
    });
}

/// Clear the window to `bg` and copy the square clock frame into its center.
fn present(surface: &mut softbuffer::Surface, size: PhysicalSize<u32>, frame: &Rgba8, bg: u32) -> Result<()> {
    let w = NonZeroU32::new(size.width.max(1)).context("zero width")?;
    let h = NonZeroU32::new(size.height.max(1)).context("zero height")?;
    surface.resize(w, h).map_err(|e| anyhow!("resize: {e}"))?;

    let (win_w, win_h) = (w.get() as usize, h.get() as usize);
    let (rgba, side_w, side_h, stride) = frame;
    let (side_w, side_h, stride) = (*side_w as usize, *side_h as usize, *stride);
    let ox = win_w.saturating_sub(side_w) / 2;
    let oy = win_h.saturating_sub(side_h) / 2;

    let mut buffer = surface.buffer_mut().map_err(|e| anyhow!("buffer: {e}"))?;
    buffer.fill(bg);
    for y in 0..side_h.min(win_h) {
        let row = &rgba[y * stride..y * stride + side_w * 4];
        for (x, px) in row.chunks_exact(4).take(win_w).enumerate() {
            buffer[(oy + y) * win_w + ox + x] = pack(px[0], px[1], px[2]);
        }
    }
    buffer.present().map_err(|e| anyhow!("present: {e}"))?;
    Ok(())
}

/// Softbuffer pixel: 0RGB in a u32.
fn pack(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}
