// File: crates/clock-core/tests/schedule.rs
// Purpose: Validate the self-rescheduling redraw loop and stop-on-detach semantics.

use std::time::{Duration, Instant};

use clock_core::{RedrawScheduler, REDRAW_INTERVAL};

#[test]
fn one_request_per_completed_pass() {
    let mut s = RedrawScheduler::default();
    s.attach();
    let t0 = Instant::now();
    let mut prev_due = None;
    for i in 0..5u64 {
        let now = t0 + REDRAW_INTERVAL * i as u32;
        let req = s.frame_drawn(now).expect("attached scheduler issues a request");
        assert_eq!(req.seq, i + 1);
        assert_eq!(req.due, now + Duration::from_millis(1000));
        if let Some(prev) = prev_due {
            assert_eq!(req.due - prev, REDRAW_INTERVAL);
        }
        prev_due = Some(req.due);
        assert!(s.take_due(req.due));
    }
    assert_eq!(s.issued(), 5);
}

#[test]
fn not_due_until_interval_elapses() {
    let mut s = RedrawScheduler::new(Duration::from_millis(250));
    s.attach();
    let t0 = Instant::now();
    s.frame_drawn(t0);
    assert_eq!(s.next_deadline(), Some(t0 + Duration::from_millis(250)));
    assert!(!s.take_due(t0 + Duration::from_millis(249)));
    assert!(s.take_due(t0 + Duration::from_millis(250)));
    // consumed: the next tick only comes from the next draw pass
    assert!(!s.take_due(t0 + Duration::from_secs(10)));
    assert_eq!(s.next_deadline(), None);
}

#[test]
fn detached_scheduler_issues_nothing() {
    let mut s = RedrawScheduler::default();
    assert!(!s.is_attached());
    assert!(s.frame_drawn(Instant::now()).is_none());
    assert_eq!(s.issued(), 0);
}

#[test]
fn detach_drops_pending_request() {
    let mut s = RedrawScheduler::default();
    s.attach();
    let t0 = Instant::now();
    s.frame_drawn(t0);
    s.detach();
    assert_eq!(s.next_deadline(), None);
    assert!(!s.take_due(t0 + REDRAW_INTERVAL * 2));

    // re-attaching does not resurrect it; a new pass restarts the chain
    s.attach();
    assert_eq!(s.next_deadline(), None);
    assert!(s.frame_drawn(t0).is_some());
    assert_eq!(s.issued(), 2);
}
