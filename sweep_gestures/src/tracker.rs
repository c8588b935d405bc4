// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-contact motion accumulator.
//!
//! A [`GestureTracker`] follows exactly one contact from press to release and
//! maintains running statistics over its motion: total travel distance, the
//! most recent distinct positions, and a direction-sameness measure. All of
//! it is computed incrementally, O(1) per sample, with no stored history.
//!
//! Duplicate samples (a contact that stays pressed without moving) advance
//! only the end time; they never dilute sameness or travel distance.
//!
//! ## Direction sameness
//!
//! After each distinct sample, sameness is recomputed as the dot product of
//! the normalized start→current vector with the average of all normalized
//! per-step motion vectors seen so far. A perfectly straight path keeps every
//! step aligned with the overall displacement, so the value stays at 1.
//! Back-and-forth motion leaves the per-step average pointing nowhere in
//! particular and the value decays toward 0 (or below, for motion that mostly
//! opposes the net displacement).

use kurbo::{Point, Vec2};
use sweep_pointer::PointerId;

/// Steps shorter than this are treated as stationary noise and discarded.
const MIN_STEP: f64 = 1e-9;

/// Running motion statistics for one in-progress contact.
///
/// Created on press, fed every subsequent sample for its pointer, and dropped
/// at release. Field invariants, upheld by [`submit`](Self::submit):
///
/// - `samples() >= 1`, counting only distinct positions;
/// - `end_time() >= start_time()`;
/// - `travel_distance()` is at least the straight-line distance from
///   `start_position()` to `end_position()`, with equality only for
///   perfectly straight monotonic motion;
/// - `sameness()` stays in `[-1, 1]` and is 1 until a second distinct
///   position arrives.
#[derive(Clone, Debug)]
pub struct GestureTracker {
    pointer: PointerId,
    start_time: f64,
    end_time: f64,
    start_position: Point,
    previous_position: Point,
    end_position: Point,
    samples: u32,
    sameness: f64,
    travel_distance: f64,
    /// Running sum of normalized per-step motion vectors.
    step_sum: Vec2,
}

impl GestureTracker {
    /// Starts tracking a contact that just pressed at `position`.
    #[must_use]
    pub fn new(pointer: PointerId, position: Point, time: f64) -> Self {
        Self {
            pointer,
            start_time: time,
            end_time: time,
            start_position: position,
            previous_position: position,
            end_position: position,
            samples: 1,
            sameness: 1.0,
            travel_distance: 0.0,
            step_sum: Vec2::ZERO,
        }
    }

    /// Feeds one sample into the accumulator.
    ///
    /// The end time advances unconditionally; a contact that stops moving but
    /// stays pressed still accrues duration. A sample at (approximately) the
    /// current end position changes nothing else.
    pub fn submit(&mut self, position: Point, time: f64) {
        let step = position - self.end_position;
        let step_length = step.hypot();

        self.end_time = time;

        if step_length < MIN_STEP {
            return;
        }

        self.samples += 1;
        self.step_sum += step / step_length;

        self.previous_position = self.end_position;
        self.end_position = position;
        self.travel_distance += step_length;

        let mean_step = self.step_sum / f64::from(self.samples - 1);
        // A path that returns exactly to its start has no overall direction;
        // the dot product against the zero vector reports sameness 0.
        self.sameness = self.direction().dot(mean_step);
    }

    /// The pointer that owns this gesture.
    #[must_use]
    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    /// Timestamp of the press sample.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Timestamp of the most recent sample, distinct or not.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Elapsed seconds from press to the most recent sample.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Position of the press sample.
    #[must_use]
    pub fn start_position(&self) -> Point {
        self.start_position
    }

    /// The distinct position before the current one.
    #[must_use]
    pub fn previous_position(&self) -> Point {
        self.previous_position
    }

    /// The most recent distinct position.
    #[must_use]
    pub fn end_position(&self) -> Point {
        self.end_position
    }

    /// Number of distinct positions observed, including the press.
    #[must_use]
    pub fn samples(&self) -> u32 {
        self.samples
    }

    /// Direction-consistency measure in `[-1, 1]`; 1 is a straight line.
    #[must_use]
    pub fn sameness(&self) -> f64 {
        self.sameness
    }

    /// Total path length traveled, in input units.
    #[must_use]
    pub fn travel_distance(&self) -> f64 {
        self.travel_distance
    }

    /// Normalized direction from start to current position, or zero when the
    /// net displacement is degenerate.
    #[must_use]
    pub fn direction(&self) -> Vec2 {
        let displacement = self.end_position - self.start_position;
        let length = displacement.hypot();
        if length < MIN_STEP {
            Vec2::ZERO
        } else {
            displacement / length
        }
    }
}
