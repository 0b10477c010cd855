// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag tracking state machine.

use core::fmt;

use kurbo::{Point, Rect, Vec2};

use crate::surface::Surface;
use crate::target::{TargetId, TargetRegistry};

/// Rectangular drag limits in surface-local coordinates.
///
/// Sessions subtract the captured target's own bounding box from these
/// limits, so the whole box stays inside, not just the grab point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    /// Left edge.
    pub x1: f64,
    /// Right edge.
    pub x2: f64,
    /// Top edge.
    pub y1: f64,
    /// Bottom edge.
    pub y2: f64,
}

impl Boundary {
    /// Creates a boundary from a rectangle.
    #[must_use]
    pub const fn from_rect(rect: Rect) -> Self {
        Self {
            x1: rect.x0,
            x2: rect.x1,
            y1: rect.y0,
            y2: rect.y1,
        }
    }
}

/// Per-axis drag behavior.
///
/// Evaluated uniformly for both axes on every move: `Follow` tracks the
/// pointer (grab-relative, clamped to the session limits for that axis),
/// `Pinned` holds a fixed coordinate regardless of pointer movement.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AxisRule {
    /// Track the pointer, clamped to the axis limits.
    #[default]
    Follow,
    /// Hold the axis at a fixed surface-local coordinate.
    Pinned(f64),
}

/// The rule pair for the x and y axes.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AxisRules {
    /// Behavior of the x axis.
    pub x: AxisRule,
    /// Behavior of the y axis.
    pub y: AxisRule,
}

impl AxisRules {
    /// Both axes follow the pointer.
    #[must_use]
    pub const fn follow() -> Self {
        Self {
            x: AxisRule::Follow,
            y: AxisRule::Follow,
        }
    }

    /// Pins the x axis at `x`; y follows.
    #[must_use]
    pub const fn pin_x(x: f64) -> Self {
        Self {
            x: AxisRule::Pinned(x),
            y: AxisRule::Follow,
        }
    }

    /// Pins the y axis at `y`; x follows.
    #[must_use]
    pub const fn pin_y(y: f64) -> Self {
        Self {
            x: AxisRule::Follow,
            y: AxisRule::Pinned(y),
        }
    }
}

/// Per-session translation limits: boundary minus the target's bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SessionLimits {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

/// An active drag: exists only while the tracker is in the dragging state.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    target: TargetId,
    grab_offset: Vec2,
    limits: SessionLimits,
}

impl DragSession {
    /// The captured target.
    #[must_use]
    pub const fn target(&self) -> TargetId {
        self.target
    }

    /// Pointer position at capture, in surface-local units, minus the
    /// target's translation at that moment.
    #[must_use]
    pub const fn grab_offset(&self) -> Vec2 {
        self.grab_offset
    }
}

/// Error raised by drag tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragError {
    /// Session initialisation ran with no captured target. This is a
    /// programming-contract violation, never a recoverable condition.
    NoCapturedTarget,
    /// The session's target was removed from the registry while captured.
    StaleTarget(TargetId),
}

impl fmt::Display for DragError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCapturedTarget => {
                write!(f, "drag initialisation requires a captured target")
            }
            Self::StaleTarget(id) => {
                write!(f, "captured drag target {id:?} was removed from the registry")
            }
        }
    }
}

impl core::error::Error for DragError {}

/// The `Idle` ⇄ `Dragging` pointer tracking state machine.
///
/// A tracker is long-lived: boundary and axis rules can be updated in place
/// with [`DragTracker::set_boundary`] / [`DragTracker::set_axis_rules`]
/// (taking effect for subsequent sessions) instead of tearing the tracker
/// down and re-creating it whenever the surrounding layout changes.
///
/// The tracker exclusively owns its [`DragSession`]; callers observe it via
/// [`DragTracker::session`] but never mutate it.
#[derive(Clone, Debug)]
pub struct DragTracker {
    targets: TargetRegistry,
    boundary: Boundary,
    rules: AxisRules,
    captured: Option<TargetId>,
    session: Option<DragSession>,
}

impl DragTracker {
    /// Creates a tracker clamping against `boundary`, with both axes
    /// following the pointer.
    #[must_use]
    pub fn new(boundary: Boundary) -> Self {
        Self {
            targets: TargetRegistry::new(),
            boundary,
            rules: AxisRules::follow(),
            captured: None,
            session: None,
        }
    }

    /// The target registry.
    #[must_use]
    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    /// The target registry, mutably.
    pub fn targets_mut(&mut self) -> &mut TargetRegistry {
        &mut self.targets
    }

    /// Replaces the boundary. Applies to sessions started afterwards; an
    /// active session keeps the limits captured at its pointer-down.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        self.boundary = boundary;
    }

    /// Replaces the axis rules. Unlike the boundary, rules are evaluated
    /// per move and therefore apply to an active session immediately.
    pub fn set_axis_rules(&mut self, rules: AxisRules) {
        self.rules = rules;
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active session, if any.
    #[must_use]
    pub const fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Handles a pointer-down at a screen-space position.
    ///
    /// Resolves the surface-local point against the registry. A draggable
    /// hit captures the target, opens a session, and returns its id; a miss
    /// returns `Ok(None)` and the tracker stays idle.
    pub fn pointer_down(
        &mut self,
        surface: &Surface,
        screen: Point,
    ) -> Result<Option<TargetId>, DragError> {
        let local = surface.screen_to_local(screen);
        self.captured = self.targets.hit(local);
        if self.captured.is_none() {
            return Ok(None);
        }
        self.initialise_session(local)?;
        Ok(self.captured)
    }

    /// Handles a pointer move at a screen-space position.
    ///
    /// Idle trackers ignore moves (`Ok(None)`). While dragging, each axis is
    /// evaluated independently under its [`AxisRule`], the resulting
    /// translation is written back to the captured target, and the new
    /// translation is returned so callers can mirror it into their visual
    /// transform without waiting for a re-render.
    pub fn pointer_move(
        &mut self,
        surface: &Surface,
        screen: Point,
    ) -> Result<Option<Point>, DragError> {
        let Some(session) = self.session else {
            return Ok(None);
        };
        let local = surface.screen_to_local(screen);
        let limits = session.limits;

        let new_x = match self.rules.x {
            AxisRule::Follow => clamp_axis(local.x - session.grab_offset.x, limits.min_x, limits.max_x),
            AxisRule::Pinned(x) => x,
        };
        let new_y = match self.rules.y {
            AxisRule::Follow => clamp_axis(local.y - session.grab_offset.y, limits.min_y, limits.max_y),
            AxisRule::Pinned(y) => y,
        };

        let target = self
            .targets
            .get_mut(session.target)
            .ok_or(DragError::StaleTarget(session.target))?;
        target.translation = Vec2::new(new_x, new_y);
        Ok(Some(Point::new(new_x, new_y)))
    }

    /// Ends the active session, returning to idle. Safe to call repeatedly.
    pub fn pointer_up(&mut self) {
        self.captured = None;
        self.session = None;
    }

    /// Pointer left the surface: implicit cancellation, identical to
    /// [`DragTracker::pointer_up`].
    pub fn pointer_leave(&mut self) {
        self.pointer_up();
    }

    /// Snapshot of the tracker state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> TrackerDebugInfo {
        TrackerDebugInfo {
            dragging: self.is_dragging(),
            session: self.session,
            boundary: self.boundary,
            rules: self.rules,
        }
    }

    /// Opens a session for the captured target at the given local position.
    ///
    /// Contract: a target must have been captured. Running without one is a
    /// bug in the caller's state handling and fails loudly.
    fn initialise_session(&mut self, local: Point) -> Result<(), DragError> {
        let id = self.captured.ok_or(DragError::NoCapturedTarget)?;
        let target = self.targets.get(id).ok_or(DragError::StaleTarget(id))?;

        let grab_offset = Vec2::new(
            local.x - target.translation.x,
            local.y - target.translation.y,
        );
        let boundary = self.boundary;
        let bounds = target.bounds;
        let limits = SessionLimits {
            min_x: boundary.x1 - bounds.x0,
            max_x: boundary.x2 - bounds.x0 - bounds.width(),
            min_y: boundary.y1 - bounds.y0,
            max_y: boundary.y2 - bounds.y0 - bounds.height(),
        };

        self.session = Some(DragSession {
            target: id,
            grab_offset,
            limits,
        });
        Ok(())
    }
}

/// Clamp a grab-relative delta to one axis's limits.
///
/// Branch form rather than `f64::clamp` so an over-large target (inverted
/// limits) saturates instead of panicking.
fn clamp_axis(delta: f64, min: f64, max: f64) -> f64 {
    if delta > max {
        max
    } else if delta < min {
        min
    } else {
        delta
    }
}

/// Debug snapshot of a [`DragTracker`].
#[derive(Clone, Copy, Debug)]
pub struct TrackerDebugInfo {
    /// Whether a session is active.
    pub dragging: bool,
    /// The active session, if any.
    pub session: Option<DragSession>,
    /// The current boundary.
    pub boundary: Boundary,
    /// The current axis rules.
    pub rules: AxisRules,
}
