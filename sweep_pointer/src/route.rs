// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contact-phase routing: turn a raw sample stream into press/move/release.
//!
//! Input bindings usually report a flat stream of [`PointerSample`] readings
//! where the only lifecycle information is the `contact` flag. The
//! [`ContactRouter`] tracks which pointers are currently down and classifies
//! each incoming sample as a [`ContactPhase`], so downstream consumers see a
//! well-formed `Press`, `Move`*, `Release` sequence per pointer.
//!
//! Samples from different pointers may interleave arbitrarily; the router
//! keeps independent state per [`PointerId`].

use hashbrown::HashSet;

use crate::{PointerId, PointerSample};

/// The lifecycle phase of one routed sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    /// The pointer just came into contact.
    Press,
    /// The pointer moved (or was re-reported) while in contact.
    Move,
    /// The pointer left contact.
    Release,
}

/// Per-pointer contact state machine.
///
/// `route` is the only mutation point. A `contact=false` sample for a pointer
/// that is not down is swallowed (returns `None`): producers can emit these
/// when a contact began before the router existed, or when a device repeats
/// its released state.
#[derive(Clone, Debug, Default)]
pub struct ContactRouter {
    down: HashSet<PointerId>,
}

impl ContactRouter {
    /// Creates a router with no pointers down.
    #[must_use]
    pub fn new() -> Self {
        Self {
            down: HashSet::new(),
        }
    }

    /// Classifies one sample, updating the per-pointer contact state.
    pub fn route(&mut self, sample: &PointerSample) -> Option<ContactPhase> {
        if sample.contact {
            if self.down.insert(sample.pointer) {
                Some(ContactPhase::Press)
            } else {
                Some(ContactPhase::Move)
            }
        } else if self.down.remove(&sample.pointer) {
            Some(ContactPhase::Release)
        } else {
            // Spurious release; see the type-level docs.
            None
        }
    }

    /// Returns `true` if the given pointer is currently in contact.
    #[must_use]
    pub fn is_down(&self, pointer: PointerId) -> bool {
        self.down.contains(&pointer)
    }

    /// Number of pointers currently in contact.
    #[must_use]
    pub fn down_count(&self) -> usize {
        self.down.len()
    }

    /// Forgets all contact state, without emitting releases.
    pub fn clear(&mut self) {
        self.down.clear();
    }
}
