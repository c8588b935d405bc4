// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end gesture recognition scenarios.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Vec2};
use sweep_gestures::{GestureClassifier, GestureThresholds, SwipeEvent, TapEvent};
use sweep_pointer::PointerId;

const EPS: f64 = 1e-9;

/// Collects every emitted event for assertion.
struct Recording {
    pressed: Rc<RefCell<Vec<SwipeEvent>>>,
    candidates: Rc<RefCell<Vec<SwipeEvent>>>,
    swipes: Rc<RefCell<Vec<SwipeEvent>>>,
    taps: Rc<RefCell<Vec<TapEvent>>>,
}

fn record(classifier: &mut GestureClassifier) -> Recording {
    let recording = Recording {
        pressed: Rc::new(RefCell::new(Vec::new())),
        candidates: Rc::new(RefCell::new(Vec::new())),
        swipes: Rc::new(RefCell::new(Vec::new())),
        taps: Rc::new(RefCell::new(Vec::new())),
    };
    let sink = Rc::clone(&recording.pressed);
    classifier.subscribe_pressed(move |event| sink.borrow_mut().push(*event));
    let sink = Rc::clone(&recording.candidates);
    classifier.subscribe_swipe_candidate(move |event| sink.borrow_mut().push(*event));
    let sink = Rc::clone(&recording.swipes);
    classifier.subscribe_swiped(move |event| sink.borrow_mut().push(*event));
    let sink = Rc::clone(&recording.taps);
    classifier.subscribe_tapped(move |event| sink.borrow_mut().push(*event));
    recording
}

#[test]
fn straight_fast_drag_is_a_swipe_not_a_tap() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(0.0, 0.0), 0.00);
    classifier.on_move(finger, Point::new(10.0, 0.0), 0.05);
    classifier.on_move(finger, Point::new(20.0, 0.0), 0.10);
    classifier.on_move(finger, Point::new(30.0, 0.0), 0.15);
    classifier.on_release(finger, Point::new(40.0, 0.0), 0.20);

    let swipes = recording.swipes.borrow();
    assert_eq!(swipes.len(), 1);
    let swipe = &swipes[0];
    assert!((swipe.travel_distance - 40.0).abs() < EPS);
    assert!((swipe.duration - 0.20).abs() < EPS);
    assert!((swipe.sameness - 1.0).abs() < EPS);
    assert!((swipe.velocity - 200.0).abs() < 1e-6);
    assert_eq!(swipe.direction, Vec2::new(1.0, 0.0));
    assert_eq!(swipe.start_position, Point::new(0.0, 0.0));
    assert_eq!(swipe.previous_position, Point::new(30.0, 0.0));
    assert_eq!(swipe.end_position, Point::new(40.0, 0.0));

    // 40 units of drift disqualifies the tap.
    assert!(recording.taps.borrow().is_empty());
}

#[test]
fn short_press_with_small_drift_is_a_tap_not_a_swipe() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(0.0, 0.0), 0.00);
    classifier.on_release(finger, Point::new(3.0, 2.0), 0.10);

    let taps = recording.taps.borrow();
    assert_eq!(taps.len(), 1);
    let tap = &taps[0];
    assert!((tap.drift - 13.0_f64.sqrt()).abs() < EPS);
    assert!((tap.duration - 0.10).abs() < EPS);
    assert_eq!(tap.press_position, Point::new(0.0, 0.0));
    assert_eq!(tap.release_position, Point::new(3.0, 2.0));
    assert_eq!(tap.time, 0.10);

    // ~3.6 units of travel is short of the minimum swipe distance.
    assert!(recording.swipes.borrow().is_empty());
}

#[test]
fn overlapping_thresholds_emit_both_swipe_and_tap() {
    let mut classifier = GestureClassifier::with_thresholds(GestureThresholds {
        min_swipe_distance: 10.0,
        max_tap_drift: 12.0,
        ..GestureThresholds::default()
    });
    let recording = record(&mut classifier);

    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(0.0, 0.0), 0.00);
    classifier.on_release(finger, Point::new(11.0, 0.0), 0.05);

    assert_eq!(recording.swipes.borrow().len(), 1);
    assert_eq!(recording.taps.borrow().len(), 1);
    let swipe = recording.swipes.borrow()[0];
    let tap = recording.taps.borrow()[0];
    assert!((swipe.travel_distance - 11.0).abs() < EPS);
    assert!((tap.drift - 11.0).abs() < EPS);
}

#[test]
fn samples_for_unknown_pointers_emit_nothing() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    classifier.on_move(PointerId(3), Point::new(25.0, 0.0), 0.05);
    classifier.on_release(PointerId(3), Point::new(50.0, 0.0), 0.10);

    assert!(recording.pressed.borrow().is_empty());
    assert!(recording.candidates.borrow().is_empty());
    assert!(recording.swipes.borrow().is_empty());
    assert!(recording.taps.borrow().is_empty());
}

#[test]
fn candidate_fires_per_qualifying_move_not_once() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(0.0, 0.0), 0.00);
    // First move is below the distance threshold; the next three qualify.
    classifier.on_move(finger, Point::new(5.0, 0.0), 0.02);
    classifier.on_move(finger, Point::new(12.0, 0.0), 0.04);
    classifier.on_move(finger, Point::new(20.0, 0.0), 0.06);
    classifier.on_move(finger, Point::new(28.0, 0.0), 0.08);
    classifier.on_release(finger, Point::new(36.0, 0.0), 0.10);

    assert_eq!(recording.candidates.borrow().len(), 3);
    assert_eq!(recording.swipes.borrow().len(), 1);
    // Candidate travel distances grow monotonically across emissions.
    let candidates = recording.candidates.borrow();
    assert!((candidates[0].travel_distance - 12.0).abs() < EPS);
    assert!((candidates[2].travel_distance - 28.0).abs() < EPS);
}

#[test]
fn press_event_carries_a_degenerate_snapshot() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    classifier.on_press(PointerId(2), Point::new(7.0, 9.0), 1.25);

    let pressed = recording.pressed.borrow();
    assert_eq!(pressed.len(), 1);
    assert_eq!(pressed[0].pointer, PointerId(2));
    assert_eq!(pressed[0].start_position, Point::new(7.0, 9.0));
    assert_eq!(pressed[0].end_position, Point::new(7.0, 9.0));
    assert_eq!(pressed[0].travel_distance, 0.0);
    assert_eq!(pressed[0].duration, 0.0);
}

#[test]
fn zigzag_with_large_travel_is_not_a_swipe() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(0.0, 0.0), 0.00);
    for i in 1..=8 {
        let target = if i % 2 == 0 {
            Point::new(0.0, 0.0)
        } else {
            Point::new(15.0, 0.0)
        };
        classifier.on_move(finger, target, f64::from(i) * 0.02);
    }
    classifier.on_release(finger, Point::new(15.0, 0.0), 0.18);

    // Well over 100 units of travel, but the heading kept reversing.
    assert!(recording.swipes.borrow().is_empty());
    assert!(recording.taps.borrow().is_empty());
}

#[test]
fn slow_drag_is_neither_swipe_nor_tap() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(0.0, 0.0), 0.0);
    classifier.on_move(finger, Point::new(20.0, 0.0), 0.4);
    classifier.on_release(finger, Point::new(40.0, 0.0), 0.8);

    assert!(recording.swipes.borrow().is_empty());
    assert!(recording.taps.borrow().is_empty());
}

#[test]
fn stationary_hold_then_release_respects_tap_duration() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    // Duplicate samples advance time without polluting motion statistics, so
    // a long motionless hold still fails the tap duration bound.
    let finger = PointerId(0);
    classifier.on_press(finger, Point::new(50.0, 50.0), 0.0);
    for i in 1..=10 {
        classifier.on_move(finger, Point::new(50.0, 50.0), f64::from(i) * 0.05);
    }
    classifier.on_release(finger, Point::new(50.0, 50.0), 0.55);

    assert!(recording.taps.borrow().is_empty());
    assert!(recording.swipes.borrow().is_empty());
    assert!(recording.candidates.borrow().is_empty());
}

#[test]
fn interleaved_contacts_classify_independently() {
    let mut classifier = GestureClassifier::new();
    let recording = record(&mut classifier);

    let (swiper, tapper) = (PointerId(0), PointerId(1));
    classifier.on_press(swiper, Point::new(0.0, 100.0), 0.00);
    classifier.on_press(tapper, Point::new(300.0, 100.0), 0.01);
    classifier.on_move(swiper, Point::new(15.0, 100.0), 0.04);
    classifier.on_release(tapper, Point::new(301.0, 100.0), 0.08);
    classifier.on_move(swiper, Point::new(30.0, 100.0), 0.08);
    classifier.on_release(swiper, Point::new(45.0, 100.0), 0.12);

    let swipes = recording.swipes.borrow();
    let taps = recording.taps.borrow();
    assert_eq!(swipes.len(), 1);
    assert_eq!(swipes[0].pointer, swiper);
    assert_eq!(taps.len(), 1);
    assert_eq!(taps[0].press_position, Point::new(300.0, 100.0));
}
