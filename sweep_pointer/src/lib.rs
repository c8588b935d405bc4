// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep Pointer: normalized pointer contact samples and contact-phase routing.
//!
//! This crate defines the boundary between a platform input binding (touch,
//! pen, mouse, window-system events) and source-independent gesture logic.
//! The binding layer translates device-specific signals into
//! [`PointerSample`] values; everything downstream only sees positions,
//! timestamps, and contact state keyed by a stable [`PointerId`].
//!
//! Two pieces live here:
//!
//! - [`PointerSample`]: one immutable reading of a pointer, with optional
//!   pen/touch metadata (tilt, pressure, radius, twist) that gesture logic
//!   never depends on.
//! - [`route::ContactRouter`]: a per-pointer contact state machine that turns
//!   a raw sample stream into press / move / release phases.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use sweep_pointer::{ContactPhase, ContactRouter, PointerId, PointerSample};
//!
//! let mut router = ContactRouter::new();
//! let finger = PointerId(3);
//!
//! // First contact=true sample for a pointer is a press.
//! let down = PointerSample::new(finger, Point::new(40.0, 80.0), 0.0, true);
//! assert_eq!(router.route(&down), Some(ContactPhase::Press));
//!
//! // Further contact=true samples are moves.
//! let drag = PointerSample::new(finger, Point::new(55.0, 80.0), 0.016, true);
//! assert_eq!(router.route(&drag), Some(ContactPhase::Move));
//!
//! // contact=false ends the contact.
//! let up = PointerSample::new(finger, Point::new(60.0, 80.0), 0.033, false);
//! assert_eq!(router.route(&up), Some(ContactPhase::Release));
//! assert!(!router.is_down(finger));
//! ```
//!
//! ## Pointer ids
//!
//! Producers own id assignment and must keep an id stable for the lifetime of
//! one contact. Touch bindings typically use the platform slot index;
//! mouse-button and pen bindings conventionally reserve ids outside the touch
//! range (negative values work well) so they never collide with touch slots.

#![no_std]

pub mod route;

pub use route::{ContactPhase, ContactRouter};

use kurbo::{Point, Vec2};

/// Stable identifier for one pointer (touch slot, pen, or mouse button).
///
/// The value is opaque to gesture logic; it only needs to be unique among
/// concurrently live contacts and stable from press to release.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub i32);

/// One immutable reading of a pointer, as produced by an input binding.
///
/// `position` and `time` are the only fields gesture recognition reads. The
/// optional pen/touch metadata rides along for consumers that want it (for
/// example a drawing surface varying stroke width with pressure) and is
/// `None` whenever the device does not report it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// The pointer this reading belongs to.
    pub pointer: PointerId,
    /// Position in the producer's coordinate space (typically screen units).
    pub position: Point,
    /// Timestamp in seconds. Must be non-decreasing per pointer.
    pub time: f64,
    /// Whether the pointer is currently in contact (pressed).
    pub contact: bool,
    /// Pen tilt, if the device reports one.
    pub tilt: Option<Vec2>,
    /// Contact pressure, if the device reports one.
    pub pressure: Option<f64>,
    /// Touch contact radius, if the device reports one.
    pub radius: Option<Vec2>,
    /// Pen barrel twist, if the device reports one.
    pub twist: Option<f64>,
}

impl PointerSample {
    /// Creates a sample with no optional metadata.
    #[must_use]
    pub fn new(pointer: PointerId, position: Point, time: f64, contact: bool) -> Self {
        Self {
            pointer,
            position,
            time,
            contact,
            tilt: None,
            pressure: None,
            radius: None,
            twist: None,
        }
    }

    /// Attaches pen tilt metadata.
    #[must_use]
    pub fn with_tilt(mut self, tilt: Vec2) -> Self {
        self.tilt = Some(tilt);
        self
    }

    /// Attaches contact pressure metadata.
    #[must_use]
    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }

    /// Attaches touch radius metadata.
    #[must_use]
    pub fn with_radius(mut self, radius: Vec2) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Attaches pen twist metadata.
    #[must_use]
    pub fn with_twist(mut self, twist: f64) -> Self {
        self.twist = Some(twist);
        self
    }
}
