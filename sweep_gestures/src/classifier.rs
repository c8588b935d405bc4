// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture classification and listener fan-out.
//!
//! The [`GestureClassifier`] owns one [`GestureTracker`] per live contact,
//! routes incoming press/move/release samples to it, evaluates the swipe and
//! tap predicates, and delivers snapshots to registered listeners.
//!
//! Everything is synchronous and single-threaded: each call runs to
//! completion (including listener invocation) before returning. Callers must
//! deliver samples for a given pointer in non-decreasing timestamp order and
//! pair every press with a release; samples from different pointers may
//! interleave freely.
//!
//! ## Event kinds
//!
//! - **pressed** — once per contact, on press.
//! - **swipe candidate** — on every move that currently satisfies the swipe
//!   thresholds, zero or more times per contact. Not one-shot: a contact can
//!   qualify, drift out of qualification, and qualify again.
//! - **swiped** — at most once per contact, at release, if the thresholds
//!   hold at release time.
//! - **tapped** — at most once per contact, at release. A single release can
//!   emit both `swiped` and `tapped` when the configured ranges overlap.
//!
//! Listeners run in registration order and are never invoked after
//! [`GestureClassifier::unsubscribe`] removes them.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::Point;
use sweep_pointer::{ContactPhase, ContactRouter, PointerId, PointerSample};

use crate::config::GestureThresholds;
use crate::events::{SwipeEvent, TapEvent};
use crate::tracker::GestureTracker;

/// Token identifying one registered listener.
///
/// Returned by the `subscribe_*` methods; pass it to
/// [`GestureClassifier::unsubscribe`] to remove the listener.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type SwipeListener = Box<dyn FnMut(&SwipeEvent)>;
type TapListener = Box<dyn FnMut(&TapEvent)>;

/// Detects directional swipes and taps from per-pointer sample streams.
///
/// ## Minimal example
///
/// ```rust
/// use kurbo::Point;
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use sweep_gestures::GestureClassifier;
/// use sweep_pointer::PointerId;
///
/// let mut gestures = GestureClassifier::new();
///
/// let taps = Rc::new(Cell::new(0));
/// let sink = Rc::clone(&taps);
/// gestures.subscribe_tapped(move |_tap| sink.set(sink.get() + 1));
///
/// // A short press-and-release with little drift is a tap.
/// let finger = PointerId(0);
/// gestures.on_press(finger, Point::new(100.0, 100.0), 0.0);
/// gestures.on_release(finger, Point::new(102.0, 101.0), 0.08);
///
/// assert_eq!(taps.get(), 1);
/// ```
pub struct GestureClassifier {
    thresholds: GestureThresholds,
    /// One live tracker per pressed pointer; insert-on-press and
    /// remove-on-release are the only mutation points.
    active: HashMap<PointerId, GestureTracker>,
    next_subscription: u64,
    pressed: Vec<(Subscription, SwipeListener)>,
    swipe_candidates: Vec<(Subscription, SwipeListener)>,
    swiped: Vec<(Subscription, SwipeListener)>,
    tapped: Vec<(Subscription, TapListener)>,
}

impl Default for GestureClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClassifier {
    /// Creates a classifier with [default](GestureThresholds::default)
    /// thresholds and no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::with_thresholds(GestureThresholds::default())
    }

    /// Creates a classifier with the given thresholds and no listeners.
    #[must_use]
    pub fn with_thresholds(thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            active: HashMap::new(),
            next_subscription: 0,
            pressed: Vec::new(),
            swipe_candidates: Vec::new(),
            swiped: Vec::new(),
            tapped: Vec::new(),
        }
    }

    /// The current classification thresholds.
    #[must_use]
    pub fn thresholds(&self) -> GestureThresholds {
        self.thresholds
    }

    /// Replaces the classification thresholds.
    ///
    /// Takes effect for subsequent predicate evaluations only; gestures
    /// already emitted are not reclassified.
    pub fn set_thresholds(&mut self, thresholds: GestureThresholds) {
        self.thresholds = thresholds;
    }

    /// Registers a listener for press events.
    pub fn subscribe_pressed(&mut self, listener: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        let subscription = self.next_token();
        self.pressed.push((subscription, Box::new(listener)));
        subscription
    }

    /// Registers a listener for in-progress candidate swipes.
    pub fn subscribe_swipe_candidate(
        &mut self,
        listener: impl FnMut(&SwipeEvent) + 'static,
    ) -> Subscription {
        let subscription = self.next_token();
        self.swipe_candidates.push((subscription, Box::new(listener)));
        subscription
    }

    /// Registers a listener for confirmed swipes.
    pub fn subscribe_swiped(&mut self, listener: impl FnMut(&SwipeEvent) + 'static) -> Subscription {
        let subscription = self.next_token();
        self.swiped.push((subscription, Box::new(listener)));
        subscription
    }

    /// Registers a listener for taps.
    pub fn subscribe_tapped(&mut self, listener: impl FnMut(&TapEvent) + 'static) -> Subscription {
        let subscription = self.next_token();
        self.tapped.push((subscription, Box::new(listener)));
        subscription
    }

    /// Removes a previously registered listener.
    ///
    /// Returns `false` if the token was already removed (or never issued).
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listener_count();
        self.pressed.retain(|(token, _)| *token != subscription);
        self.swipe_candidates.retain(|(token, _)| *token != subscription);
        self.swiped.retain(|(token, _)| *token != subscription);
        self.tapped.retain(|(token, _)| *token != subscription);
        self.listener_count() != before
    }

    /// Begins tracking a newly pressed pointer and emits `pressed`.
    ///
    /// The caller must not press a pointer that is already down. That is a
    /// producer bug and trips a debug assertion; release builds recover by
    /// discarding the stale gesture and starting a fresh one, so the registry
    /// never holds two gestures for one pointer. No release-side events fire
    /// for the discarded gesture.
    pub fn on_press(&mut self, pointer: PointerId, position: Point, time: f64) {
        debug_assert!(
            !self.active.contains_key(&pointer),
            "pointer pressed while it already has a live gesture"
        );
        let tracker = GestureTracker::new(pointer, position, time);
        let event = SwipeEvent::from_tracker(&tracker);
        self.active.insert(pointer, tracker);
        emit_swipe(&mut self.pressed, &event);
    }

    /// Feeds a move sample for a pointer, emitting `swipe candidate` if the
    /// accumulated motion currently satisfies the swipe thresholds.
    ///
    /// Moves for unknown pointers are silently ignored; the contact may have
    /// been captured upstream (UI hit-testing) or its press lost.
    pub fn on_move(&mut self, pointer: PointerId, position: Point, time: f64) {
        let thresholds = self.thresholds;
        let Some(tracker) = self.active.get_mut(&pointer) else {
            return;
        };
        tracker.submit(position, time);
        if thresholds.matches_swipe(tracker) {
            let event = SwipeEvent::from_tracker(tracker);
            emit_swipe(&mut self.swipe_candidates, &event);
        }
    }

    /// Ends a pointer's gesture, emitting `swiped` and/or `tapped` as the
    /// final accumulated motion qualifies.
    ///
    /// Releases for unknown pointers are silently ignored, like moves.
    pub fn on_release(&mut self, pointer: PointerId, position: Point, time: f64) {
        let Some(mut tracker) = self.active.remove(&pointer) else {
            return;
        };
        tracker.submit(position, time);

        // Evaluated independently: overlapping threshold ranges make a single
        // release both a swipe and a tap, and both events fire.
        if self.thresholds.matches_swipe(&tracker) {
            let event = SwipeEvent::from_tracker(&tracker);
            emit_swipe(&mut self.swiped, &event);
        }
        if self.thresholds.matches_tap(&tracker) {
            let event = TapEvent::from_tracker(&tracker);
            for (_, listener) in &mut self.tapped {
                listener(&event);
            }
        }
    }

    /// Routes one raw sample through a [`ContactRouter`] and into the
    /// classifier.
    ///
    /// Convenience glue for producers that deliver flat
    /// [`PointerSample`] streams rather than explicit press/move/release
    /// calls.
    pub fn process(&mut self, router: &mut ContactRouter, sample: &PointerSample) {
        match router.route(sample) {
            Some(ContactPhase::Press) => self.on_press(sample.pointer, sample.position, sample.time),
            Some(ContactPhase::Move) => self.on_move(sample.pointer, sample.position, sample.time),
            Some(ContactPhase::Release) => {
                self.on_release(sample.pointer, sample.position, sample.time);
            }
            None => {}
        }
    }

    /// Returns `true` if the classifier currently evaluates the tracked
    /// motion as a valid swipe.
    #[must_use]
    pub fn is_valid_swipe(&self, tracker: &GestureTracker) -> bool {
        self.thresholds.matches_swipe(tracker)
    }

    /// Returns `true` if the classifier currently evaluates the tracked
    /// motion as a valid tap.
    #[must_use]
    pub fn is_valid_tap(&self, tracker: &GestureTracker) -> bool {
        self.thresholds.matches_tap(tracker)
    }

    /// Returns `true` if the pointer has a live gesture.
    #[must_use]
    pub fn is_tracking(&self, pointer: PointerId) -> bool {
        self.active.contains_key(&pointer)
    }

    /// Read access to a pointer's live gesture, for inspection overlays and
    /// tests.
    #[must_use]
    pub fn tracker(&self, pointer: PointerId) -> Option<&GestureTracker> {
        self.active.get(&pointer)
    }

    /// Number of live gestures.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    fn next_token(&mut self) -> Subscription {
        let token = Subscription(self.next_subscription);
        self.next_subscription += 1;
        token
    }

    fn listener_count(&self) -> usize {
        self.pressed.len() + self.swipe_candidates.len() + self.swiped.len() + self.tapped.len()
    }
}

fn emit_swipe(listeners: &mut [(Subscription, SwipeListener)], event: &SwipeEvent) {
    for (_, listener) in listeners {
        listener(event);
    }
}

impl fmt::Debug for GestureClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureClassifier")
            .field("thresholds", &self.thresholds)
            .field("active", &self.active)
            .field("pressed_listeners", &self.pressed.len())
            .field("swipe_candidate_listeners", &self.swipe_candidates.len())
            .field("swiped_listeners", &self.swiped.len())
            .field("tapped_listeners", &self.tapped.len())
            .finish_non_exhaustive()
    }
}
