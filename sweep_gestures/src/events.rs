// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Immutable gesture snapshots delivered to listeners.
//!
//! Events are plain value types copied out of a [`GestureTracker`] at the
//! moment of emission; holding onto one never observes later motion.

use kurbo::{Point, Vec2};
use sweep_pointer::PointerId;

use crate::tracker::GestureTracker;

/// Snapshot of a press or swipe gesture at one instant.
///
/// Emitted for presses (where most fields are still degenerate), for
/// candidate swipes on every qualifying move, and for confirmed swipes at
/// release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeEvent {
    /// The pointer performing the gesture.
    pub pointer: PointerId,
    /// Where the contact pressed.
    pub start_position: Point,
    /// The distinct position before the current one.
    pub previous_position: Point,
    /// The most recent distinct position.
    pub end_position: Point,
    /// Normalized net direction of the swipe, `start_position` toward
    /// `end_position`; zero while the net displacement is degenerate.
    pub direction: Vec2,
    /// Average speed over the whole gesture in input units per second, based
    /// on path length rather than net displacement; 0 when the duration is 0.
    pub velocity: f64,
    /// Total path length traveled, in input units. At least the distance
    /// between `start_position` and `end_position`.
    pub travel_distance: f64,
    /// Elapsed seconds from press to the latest sample.
    pub duration: f64,
    /// Direction-consistency measure in `[-1, 1]`; 1 is a straight line.
    pub sameness: f64,
}

impl SwipeEvent {
    pub(crate) fn from_tracker(tracker: &GestureTracker) -> Self {
        let duration = tracker.duration();
        let travel_distance = tracker.travel_distance();
        let velocity = if duration > 0.0 {
            travel_distance / duration
        } else {
            0.0
        };
        Self {
            pointer: tracker.pointer(),
            start_position: tracker.start_position(),
            previous_position: tracker.previous_position(),
            end_position: tracker.end_position(),
            direction: tracker.direction(),
            velocity,
            travel_distance,
            duration,
            sameness: tracker.sameness(),
        }
    }
}

/// Snapshot of a completed tap, emitted at release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TapEvent {
    /// Where the contact pressed.
    pub press_position: Point,
    /// Where the contact released.
    pub release_position: Point,
    /// Elapsed seconds the contact was held.
    pub duration: f64,
    /// Total path length traveled while held; the tap disqualifier.
    pub drift: f64,
    /// Timestamp of the release sample, in seconds.
    pub time: f64,
}

impl TapEvent {
    pub(crate) fn from_tracker(tracker: &GestureTracker) -> Self {
        Self {
            press_position: tracker.start_position(),
            release_position: tracker.end_position(),
            duration: tracker.duration(),
            drift: tracker.travel_distance(),
            time: tracker.end_time(),
        }
    }
}
