// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep Gestures: directional swipe and tap recognition.
//!
//! This crate turns per-pointer streams of contact samples (press, move,
//! release, each with a position and timestamp) into discrete gesture events,
//! independent of whether the samples came from touch, pen, or mouse:
//!
//! - [`tracker::GestureTracker`]: the per-contact accumulator. Incrementally
//!   computes travel distance, duration, and a direction-sameness measure
//!   from an unbounded sample stream, O(1) per sample.
//! - [`classifier::GestureClassifier`]: owns one tracker per live contact,
//!   evaluates accumulated motion against configurable
//!   [`GestureThresholds`], and fans immutable [`SwipeEvent`] /
//!   [`TapEvent`] snapshots out to registered listeners.
//!
//! The crate performs no I/O and never blocks; every call is synchronous and
//! assumes a single logical caller thread (typically a per-frame input
//! dispatch). Producing samples from actual devices is the job of an input
//! binding layer; see `sweep_pointer` for the boundary types and the
//! contact-phase router that adapts flat sample streams.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use sweep_gestures::GestureClassifier;
//! use sweep_pointer::PointerId;
//!
//! let mut gestures = GestureClassifier::new();
//!
//! let swipes = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&swipes);
//! gestures.subscribe_swiped(move |swipe| sink.borrow_mut().push(swipe.direction));
//!
//! // A fast, straight, 40-unit drag to the right.
//! let finger = PointerId(0);
//! gestures.on_press(finger, Point::new(0.0, 0.0), 0.00);
//! gestures.on_move(finger, Point::new(10.0, 0.0), 0.05);
//! gestures.on_move(finger, Point::new(20.0, 0.0), 0.10);
//! gestures.on_move(finger, Point::new(30.0, 0.0), 0.15);
//! gestures.on_release(finger, Point::new(40.0, 0.0), 0.20);
//!
//! let swipes = swipes.borrow();
//! assert_eq!(swipes.len(), 1);
//! assert_eq!(swipes[0], kurbo::Vec2::new(1.0, 0.0));
//! ```
//!
//! ## Overlapping classifications
//!
//! Swipe and tap are evaluated independently at release. With the default
//! thresholds they are disjoint (`min_swipe_distance` exceeds
//! `max_tap_drift`), but nothing requires that; configure overlapping ranges
//! and a single release can emit both events. Callers distinguish by which
//! listener they registered.
//!
//! ## Feeding raw sample streams
//!
//! Producers that only have flat `{contact: bool}` readings can route them
//! through a `sweep_pointer::ContactRouter`:
//!
//! ```rust
//! use kurbo::Point;
//! use sweep_gestures::GestureClassifier;
//! use sweep_pointer::{ContactRouter, PointerId, PointerSample};
//!
//! let mut gestures = GestureClassifier::new();
//! let mut router = ContactRouter::new();
//!
//! let finger = PointerId(0);
//! gestures.process(&mut router, &PointerSample::new(finger, Point::ORIGIN, 0.0, true));
//! assert!(gestures.is_tracking(finger));
//! gestures.process(&mut router, &PointerSample::new(finger, Point::ORIGIN, 0.1, false));
//! assert!(!gestures.is_tracking(finger));
//! ```

#![no_std]

extern crate alloc;

pub mod classifier;
pub mod config;
pub mod events;
pub mod tracker;

pub use classifier::{GestureClassifier, Subscription};
pub use config::GestureThresholds;
pub use events::{SwipeEvent, TapEvent};
pub use tracker::GestureTracker;
