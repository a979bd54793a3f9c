// File: crates/clock-core/src/schedule.rs
// Summary: Self-rescheduling redraw loop for a single-threaded host event loop.

use std::time::{Duration, Instant};

use crate::types::REDRAW_INTERVAL;

/// A pending "draw again at `due`" request issued by a completed draw pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedrawRequest {
    pub seq: u64,
    pub due: Instant,
}

/// Each completed pass issues the next request; nothing ticks on its own.
/// While detached no request is issued and any pending one is dropped.
#[derive(Debug)]
pub struct RedrawScheduler {
    interval: Duration,
    attached: bool,
    pending: Option<RedrawRequest>,
    issued: u64,
}

impl RedrawScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, attached: false, pending: None, issued: 0 }
    }

    pub fn interval(&self) -> Duration { self.interval }

    pub fn is_attached(&self) -> bool { self.attached }

    pub fn attach(&mut self) {
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        if let Some(req) = self.pending.take() {
            log::debug!("dropping redraw request #{} on detach", req.seq);
        }
    }

    /// Record a completed draw pass at `now` and queue the next one.
    pub fn frame_drawn(&mut self, now: Instant) -> Option<RedrawRequest> {
        if !self.attached {
            return None;
        }
        self.issued += 1;
        let req = RedrawRequest { seq: self.issued, due: now + self.interval };
        self.pending = Some(req);
        Some(req)
    }

    /// Consume the pending request if it is due at `now`.
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(req) if self.attached && req.due <= now => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.filter(|_| self.attached).map(|r| r.due)
    }

    /// Requests issued since construction.
    pub fn issued(&self) -> u64 { self.issued }
}

impl Default for RedrawScheduler {
    fn default() -> Self { Self::new(REDRAW_INTERVAL) }
}
