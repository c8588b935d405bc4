// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification thresholds.

use crate::tracker::GestureTracker;

/// Thresholds separating swipes and taps from other motion.
///
/// The swipe and tap ranges are allowed to overlap: when
/// `min_swipe_distance <= max_tap_drift`, a single release can classify as
/// both, and both events fire. Callers that want the gestures to be mutually
/// exclusive should keep `min_swipe_distance` above `max_tap_drift`.
///
/// Changing thresholds affects only subsequent classification; events that
/// already fired are never reclassified.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureThresholds {
    /// Longest a contact may be held and still count as a tap, in seconds.
    pub max_tap_duration: f64,
    /// Farthest a contact may travel and still count as a tap, in input units.
    pub max_tap_drift: f64,
    /// Longest a gesture may take and still count as a swipe, in seconds.
    pub max_swipe_duration: f64,
    /// Shortest travel distance that counts as a swipe, in input units.
    pub min_swipe_distance: f64,
    /// Least direction sameness that counts as a swipe, in `[-1, 1]`.
    pub swipe_sameness_threshold: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            max_tap_duration: 0.2,
            max_tap_drift: 5.0,
            max_swipe_duration: 0.5,
            min_swipe_distance: 10.0,
            swipe_sameness_threshold: 0.6,
        }
    }
}

impl GestureThresholds {
    /// Returns `true` if the tracked motion currently qualifies as a swipe.
    #[must_use]
    pub fn matches_swipe(&self, tracker: &GestureTracker) -> bool {
        tracker.travel_distance() >= self.min_swipe_distance
            && tracker.duration() <= self.max_swipe_duration
            && tracker.sameness() >= self.swipe_sameness_threshold
    }

    /// Returns `true` if the tracked motion currently qualifies as a tap.
    #[must_use]
    pub fn matches_tap(&self, tracker: &GestureTracker) -> bool {
        tracker.travel_distance() <= self.max_tap_drift
            && tracker.duration() <= self.max_tap_duration
    }
}
