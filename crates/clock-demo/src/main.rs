// File: crates/clock-demo/src/main.rs
// Summary: Renders one clock frame for a given (or the current) time to PNG and SVG.

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clock_core::{AnalogClock, ClockOptions, FixedTime, LocalClock, TimeSample, TimeSource};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Args: [HH:MM:SS] [side]
    let mut args = std::env::args().skip(1);
    let time = match args.next() {
        Some(raw) => parse_time(&raw)?,
        None => LocalClock.now().context("reading local time")?,
    };
    let side = match args.next() {
        Some(raw) => raw.parse::<u32>().with_context(|| format!("invalid side '{raw}'"))?,
        None => ClockOptions::default().fallback_side,
    };
    if side == 0 {
        anyhow::bail!("side must be positive");
    }

    let mut clock = AnalogClock::new(ClockOptions::default(), FixedTime(time));
    let viewport = clock.resize(side, side);
    log::info!("rendering {time} at {}x{}", viewport.width(), viewport.height());

    let out_png = out_name(&time, "png");
    clock
        .render_to_png(&out_png)
        .with_context(|| format!("writing {}", out_png.display()))?;
    println!("Wrote {}", out_png.display());

    let svg = clock.next_frame().to_svg(&viewport, clock.options().background);
    let out_svg = out_png.with_extension("svg");
    std::fs::write(&out_svg, svg).with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    Ok(())
}

fn parse_time(raw: &str) -> Result<TimeSample> {
    let t = NaiveTime::parse_from_str(raw, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .with_context(|| format!("expected HH:MM[:SS], got '{raw}'"))?;
    Ok(TimeSample::from_time(&t)?)
}

/// Produce output file name like target/out/clock_<HHMMSS>.<ext>
fn out_name(time: &TimeSample, ext: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    out.push(format!(
        "clock_{:02}{:02}{:02}.{ext}",
        time.hour24(),
        time.minute(),
        time.second()
    ));
    out
}
