// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag targets: the registry of elements a tracker can capture.

use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

/// Identifier for a target in a [`TargetRegistry`].
///
/// A small, copyable handle. Removing a target leaves any outstanding
/// `TargetId` for it stale; stale handles resolve to `None` and surface as
/// [`DragError::StaleTarget`](crate::DragError::StaleTarget) when a session
/// still refers to them. Slots are not reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TargetId(u32);

impl TargetId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Flags controlling how a target participates in drag capture.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct TargetFlags: u8 {
        /// The target itself can be captured by a pointer-down.
        const DRAGGABLE  = 0b0000_0001;
        /// The target is a group container: a pointer-down on one of its
        /// children captures the group.
        const DRAG_GROUP = 0b0000_0010;
    }
}

/// A draggable element: local bounds plus a mutable translation.
///
/// `bounds` are expressed in the element's own (untranslated) frame; the
/// current `translation` positions it on the surface. The tracker clamps so
/// that the whole translated `bounds` box stays inside the boundary, not
/// just a point.
#[derive(Clone, Debug)]
pub struct DragTarget {
    /// Local (untranslated) bounds.
    pub bounds: Rect,
    /// Current translation applied to the element.
    pub translation: Vec2,
    /// Capture behavior flags.
    pub flags: TargetFlags,
    /// Optional group container this element belongs to.
    pub parent: Option<TargetId>,
}

impl DragTarget {
    /// Creates a target with no translation and no parent.
    #[must_use]
    pub const fn new(bounds: Rect, flags: TargetFlags) -> Self {
        Self {
            bounds,
            translation: Vec2::ZERO,
            flags,
            parent: None,
        }
    }

    /// Sets the initial translation.
    #[must_use]
    pub const fn with_translation(mut self, translation: Vec2) -> Self {
        self.translation = translation;
        self
    }

    /// Assigns the target to a group container.
    #[must_use]
    pub const fn with_parent(mut self, parent: TargetId) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Registry of drag targets on one surface.
///
/// Insertion order doubles as stacking order: on overlap, the most recently
/// inserted target wins hit resolution.
#[derive(Clone, Debug, Default)]
pub struct TargetRegistry {
    slots: SmallVec<[Option<DragTarget>; 4]>,
}

impl TargetRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a target, returning its handle.
    pub fn insert(&mut self, target: DragTarget) -> TargetId {
        let id = TargetId(u32::try_from(self.slots.len()).unwrap_or(u32::MAX));
        self.slots.push(Some(target));
        id
    }

    /// Removes a target. Outstanding handles to it become stale.
    pub fn remove(&mut self, id: TargetId) -> Option<DragTarget> {
        self.slots.get_mut(id.idx()).and_then(Option::take)
    }

    /// Returns the target for a live handle.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&DragTarget> {
        self.slots.get(id.idx()).and_then(Option::as_ref)
    }

    /// Returns the target for a live handle, mutably.
    #[must_use]
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut DragTarget> {
        self.slots.get_mut(id.idx()).and_then(Option::as_mut)
    }

    /// The target's translation accumulated with all ancestor translations.
    #[must_use]
    pub fn world_translation(&self, id: TargetId) -> Option<Vec2> {
        let mut total = Vec2::ZERO;
        let mut current = Some(id);
        while let Some(id) = current {
            let target = self.get(id)?;
            total += target.translation;
            current = target.parent;
        }
        Some(total)
    }

    /// Resolves a surface-local point to the target a pointer-down captures.
    ///
    /// The top-most target whose translated bounds contain the point is
    /// examined: a `DRAGGABLE` target is captured directly; otherwise its
    /// parent is captured if that parent is a `DRAG_GROUP`. Anything else
    /// resolves to `None` and the pointer-down is silently ignored.
    #[must_use]
    pub fn hit(&self, p: Point) -> Option<TargetId> {
        let hit = self
            .slots
            .iter()
            .enumerate()
            .rev()
            .filter_map(|(idx, slot)| {
                slot.as_ref()
                    .map(|target| (TargetId(u32::try_from(idx).unwrap_or(u32::MAX)), target))
            })
            .find(|(id, target)| {
                let offset = self.world_translation(*id).unwrap_or(target.translation);
                (target.bounds + offset).contains(p)
            });

        let (id, target) = hit?;
        if target.flags.contains(TargetFlags::DRAGGABLE) {
            return Some(id);
        }
        let parent = target.parent?;
        self.get(parent)?
            .flags
            .contains(TargetFlags::DRAG_GROUP)
            .then_some(parent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn circle_box(radius: f64) -> Rect {
        Rect::new(-radius, -radius, radius, radius)
    }

    #[test]
    fn hit_resolves_direct_draggable() {
        let mut registry = TargetRegistry::new();
        let handle = registry.insert(
            DragTarget::new(circle_box(25.0), TargetFlags::DRAGGABLE)
                .with_translation(Vec2::new(25.0, 25.0)),
        );

        assert_eq!(registry.hit(Point::new(25.0, 25.0)), Some(handle));
        assert_eq!(registry.hit(Point::new(40.0, 40.0)), Some(handle));
    }

    #[test]
    fn hit_outside_all_targets_is_none() {
        let mut registry = TargetRegistry::new();
        registry.insert(
            DragTarget::new(circle_box(25.0), TargetFlags::DRAGGABLE)
                .with_translation(Vec2::new(25.0, 25.0)),
        );

        assert_eq!(registry.hit(Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn child_of_group_resolves_to_group() {
        let mut registry = TargetRegistry::new();
        let group = registry.insert(
            DragTarget::new(circle_box(25.0), TargetFlags::DRAG_GROUP)
                .with_translation(Vec2::new(25.0, 25.0)),
        );
        let inner = registry
            .insert(DragTarget::new(circle_box(20.0), TargetFlags::empty()).with_parent(group));

        // The inner circle is on top; a hit on it captures the group.
        assert_ne!(inner, group);
        assert_eq!(registry.hit(Point::new(25.0, 25.0)), Some(group));
    }

    #[test]
    fn child_without_group_parent_is_ignored() {
        let mut registry = TargetRegistry::new();
        let plain = registry.insert(DragTarget::new(circle_box(25.0), TargetFlags::empty()));
        let _child = registry
            .insert(DragTarget::new(circle_box(20.0), TargetFlags::empty()).with_parent(plain));

        assert_eq!(registry.hit(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn children_follow_group_translation() {
        let mut registry = TargetRegistry::new();
        let group = registry.insert(
            DragTarget::new(circle_box(25.0), TargetFlags::DRAG_GROUP)
                .with_translation(Vec2::new(100.0, 100.0)),
        );
        registry.insert(DragTarget::new(circle_box(20.0), TargetFlags::empty()).with_parent(group));

        // A hit at the group's translated position resolves through the child.
        assert_eq!(registry.hit(Point::new(100.0, 100.0)), Some(group));
        // The untranslated origin is empty.
        assert_eq!(registry.hit(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn removed_target_is_stale() {
        let mut registry = TargetRegistry::new();
        let handle = registry.insert(DragTarget::new(circle_box(25.0), TargetFlags::DRAGGABLE));

        assert!(registry.remove(handle).is_some());
        assert!(registry.get(handle).is_none());
        assert!(registry.remove(handle).is_none());
        assert_eq!(registry.hit(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn topmost_target_wins_on_overlap() {
        let mut registry = TargetRegistry::new();
        let below = registry.insert(DragTarget::new(circle_box(25.0), TargetFlags::DRAGGABLE));
        let above = registry.insert(DragTarget::new(circle_box(25.0), TargetFlags::DRAGGABLE));

        assert_ne!(below, above);
        assert_eq!(registry.hit(Point::new(0.0, 0.0)), Some(above));
    }
}
