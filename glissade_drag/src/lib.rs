// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glissade Drag: a boundary-clamped drag tracking state machine.
//!
//! This crate turns raw pointer positions into clamped element translations.
//! It is deliberately framework-free: nothing here subscribes to a window or
//! a DOM. Callers extract pointer events from whatever host they run in and
//! feed them to a [`DragTracker`], which owns the full interaction state:
//!
//! - [`Surface`]: converts screen coordinates into surface-local ones by
//!   inverting the surface's current transform, so dragging stays correct
//!   when the surface itself is scaled or translated.
//! - [`TargetRegistry`]: the draggable elements, each with local bounds, a
//!   current translation, [`TargetFlags`], and an optional group parent.
//! - [`DragTracker`]: the `Idle` ⇄ `Dragging` state machine. A pointer-down
//!   over a draggable target (or a child of a draggable group) captures it
//!   and opens a [`DragSession`]; moves clamp each axis independently
//!   against the [`Boundary`] minus the target's own bounding box; up or
//!   leave closes the session.
//!
//! Per-axis behavior is a small strategy enum, [`AxisRule`]: `Follow` tracks
//! the pointer with clamping, `Pinned` holds a fixed coordinate so a
//! one-dimensional control ignores drift on the orthogonal axis.
//!
//! ## Minimal example
//!
//! ```
//! use glissade_drag::{Boundary, DragTarget, DragTracker, Surface, TargetFlags};
//! use kurbo::{Point, Rect, Vec2};
//!
//! let mut tracker = DragTracker::new(Boundary::from_rect(Rect::new(0.0, 0.0, 50.0, 200.0)));
//! let handle = tracker.targets_mut().insert(
//!     DragTarget::new(Rect::new(-25.0, -25.0, 25.0, 25.0), TargetFlags::DRAGGABLE)
//!         .with_translation(Vec2::new(25.0, 25.0)),
//! );
//!
//! let surface = Surface::identity();
//!
//! // Grab the handle and drag it down the track.
//! let grabbed = tracker.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();
//! assert_eq!(grabbed, Some(handle));
//! let moved = tracker.pointer_move(&surface, Point::new(25.0, 90.0)).unwrap();
//! assert_eq!(moved, Some(Point::new(25.0, 90.0)));
//!
//! // Dragging past the boundary clamps: the handle box stays inside.
//! let moved = tracker.pointer_move(&surface, Point::new(25.0, 900.0)).unwrap();
//! assert_eq!(moved, Some(Point::new(25.0, 175.0)));
//!
//! tracker.pointer_up();
//! assert!(!tracker.is_dragging());
//! ```
//!
//! ## Event ordering
//!
//! Processing is synchronous and strictly sequential: a session is only ever
//! established by [`DragTracker::pointer_down`], moves are only honored
//! while a session exists, and [`DragTracker::pointer_up`] /
//! [`DragTracker::pointer_leave`] close it before any later down can open a
//! new one. There is no explicit cancel; leaving the surface is the implicit
//! cancellation.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod surface;
mod target;
mod tracker;

pub use surface::{Surface, SurfaceError};
pub use target::{DragTarget, TargetFlags, TargetId, TargetRegistry};
pub use tracker::{
    AxisRule, AxisRules, Boundary, DragError, DragSession, DragTracker, TrackerDebugInfo,
};
