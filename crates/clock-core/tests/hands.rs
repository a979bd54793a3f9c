// File: crates/clock-core/tests/hands.rs
// Purpose: Validate the moment scale, angle formula and hand segments.

use std::f64::consts::PI;

use clock_core::{angle_for_moment, Hand, TimeSample, Viewport};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn t(h: u32, m: u32, s: u32) -> TimeSample {
    TimeSample::new(h, m, s).unwrap()
}

#[test]
fn reference_moments() {
    assert!(close(angle_for_moment(0.0), -PI / 2.0));
    assert!(close(angle_for_moment(15.0), 0.0));
    assert!(close(angle_for_moment(30.0), PI / 2.0));
    assert!(close(angle_for_moment(45.0), PI));
}

#[test]
fn every_hand_hits_reference_angles() {
    let expected = [(0.0, -PI / 2.0), (15.0, 0.0), (30.0, PI / 2.0), (45.0, PI)];
    for (moment, angle) in expected {
        let step = (moment / 15.0) as u32;
        let cases = [
            (Hand::Hour, t(step * 3, 0, 0)),
            (Hand::Minute, t(0, moment as u32, 0)),
            (Hand::Second, t(0, 0, moment as u32)),
        ];
        for (hand, sample) in cases {
            let m = hand.moment(&sample);
            assert!(close(m, moment), "{hand:?} moment {m} != {moment}");
            assert!(close(angle_for_moment(m), angle), "{hand:?} angle at {sample}");
        }
    }
}

#[test]
fn hour_hand_is_continuous() {
    let half_past_three = t(3, 30, 0);
    assert!(close(Hand::Hour.moment(&half_past_three), 17.5));
    assert!(close(Hand::Minute.moment(&half_past_three), 30.0));
    assert!(close(Hand::Second.moment(&half_past_three), 0.0));
}

#[test]
fn afternoon_wraps_onto_the_same_dial() {
    let a = angle_for_moment(Hand::Hour.moment(&t(15, 0, 0)));
    let b = angle_for_moment(Hand::Hour.moment(&t(3, 0, 0)));
    assert!(close(a.cos(), b.cos()) && close(a.sin(), b.sin()));
}

#[test]
fn segments_start_at_center() {
    let vp = Viewport::square(200);
    let sample = t(9, 15, 45);

    let (from, to) = Hand::Minute.segment(&sample, &vp);
    assert_eq!((from.x, from.y), (100.0, 100.0));
    assert!((to.x - 150.0).abs() < 1e-3 && (to.y - 100.0).abs() < 1e-3, "minute tip {to:?}");

    let (_, to) = Hand::Second.segment(&sample, &vp);
    assert!((to.x - 50.0).abs() < 1e-3 && (to.y - 100.0).abs() < 1e-3, "second tip {to:?}");

    assert_eq!(Hand::Hour.reach(&vp), 40.0);
    assert_eq!(Hand::Minute.reach(&vp), 50.0);
    assert_eq!(Hand::Second.reach(&vp), 50.0);
}
