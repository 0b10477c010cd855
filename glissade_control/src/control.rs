// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{Point, Rect, Vec2};

use glissade_drag::{
    AxisRules, Boundary, DragError, DragTarget, DragTracker, Surface, TargetFlags, TargetId,
};
use glissade_layout::{Layout, Orientation, SliderConfig};

use crate::readout::{format_readout, round_to_tenth};

/// A live slider control.
///
/// Owns the configuration, the derived [`Layout`], the [`DragTracker`] with
/// its single handle target, and the current domain value. The tracker is
/// long-lived: [`SliderControl::set_config`] updates boundary, axis rules,
/// and handle geometry in place rather than rebuilding the wiring.
#[derive(Clone, Debug)]
pub struct SliderControl {
    config: SliderConfig,
    layout: Layout,
    tracker: DragTracker,
    handle: TargetId,
    value: f64,
    attached: bool,
}

impl SliderControl {
    /// Builds a control for a configuration.
    ///
    /// The handle starts parked at the guide start, so the initial value is
    /// the domain minimum (rounded to one decimal).
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let layout = Layout::compute(&config);
        let mut tracker = DragTracker::new(Boundary::from_rect(layout.area));
        tracker.set_axis_rules(axis_rules_for(&layout, config.orientation));

        let radius = layout.handle_radius;
        let handle = tracker.targets_mut().insert(
            DragTarget::new(
                Rect::new(-radius, -radius, radius, radius),
                TargetFlags::DRAGGABLE | TargetFlags::DRAG_GROUP,
            )
            .with_translation(layout.slide_guide.p0.to_vec2()),
        );

        let value = round_to_tenth(layout.scale.eval(active_coordinate(
            config.orientation,
            layout.slide_guide.p0,
        )));

        Self {
            config,
            layout,
            tracker,
            handle,
            value,
            attached: true,
        }
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The layout derived from the current configuration.
    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The handle's drag-target handle.
    #[must_use]
    pub const fn handle_id(&self) -> TargetId {
        self.handle
    }

    /// The handle's current translation on the surface.
    #[must_use]
    pub fn handle_translation(&self) -> Vec2 {
        self.tracker
            .targets()
            .get(self.handle)
            .map(|target| target.translation)
            .unwrap_or(Vec2::ZERO)
    }

    /// The current domain value, rounded to one decimal.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The current readout text.
    #[must_use]
    pub fn readout_text(&self) -> String {
        format_readout(self.value)
    }

    /// Replaces the configuration, recomputing layout, boundary, axis
    /// rules, and handle geometry on the existing tracker.
    ///
    /// Any active drag is ended first; its captured geometry is stale.
    pub fn set_config(&mut self, config: SliderConfig) {
        self.tracker.pointer_up();

        let layout = Layout::compute(&config);
        self.tracker.set_boundary(Boundary::from_rect(layout.area));
        self.tracker
            .set_axis_rules(axis_rules_for(&layout, config.orientation));
        if let Some(handle) = self.tracker.targets_mut().get_mut(self.handle) {
            let radius = layout.handle_radius;
            handle.bounds = Rect::new(-radius, -radius, radius, radius);
            handle.translation = layout.slide_guide.p0.to_vec2();
        }

        self.value = round_to_tenth(layout.scale.eval(active_coordinate(
            config.orientation,
            layout.slide_guide.p0,
        )));
        self.layout = layout;
        self.config = config;
    }

    /// Whether pointer events are currently honored.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Disconnects the control from pointer input.
    ///
    /// Idempotent: repeated calls are no-ops. Any active drag ends; later
    /// pointer events are ignored until re-attachment.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.tracker.pointer_up();
        }
    }

    /// Reconnects the control to pointer input after [`SliderControl::detach`].
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Forwards a pointer-down. A hit on the handle opens a drag session;
    /// anything else is silently ignored.
    pub fn pointer_down(
        &mut self,
        surface: &Surface,
        screen: Point,
    ) -> Result<Option<TargetId>, DragError> {
        if !self.attached {
            return Ok(None);
        }
        self.tracker.pointer_down(surface, screen)
    }

    /// Forwards a pointer move.
    ///
    /// On an accepted movement the active-axis coordinate runs through the
    /// layout scale, the rounded value is stored, and `sink` receives the
    /// value and its readout text. The accepted translation is returned so
    /// callers can update their visual transform without a re-render.
    pub fn pointer_move(
        &mut self,
        surface: &Surface,
        screen: Point,
        sink: &mut impl FnMut(f64, &str),
    ) -> Result<Option<Point>, DragError> {
        if !self.attached {
            return Ok(None);
        }
        let moved = self.tracker.pointer_move(surface, screen)?;
        if let Some(translation) = moved {
            let coordinate = active_coordinate(self.config.orientation, translation);
            self.value = round_to_tenth(self.layout.scale.eval(coordinate));
            sink(self.value, &format_readout(self.value));
        }
        Ok(moved)
    }

    /// Forwards a pointer-up, ending any active drag.
    pub fn pointer_up(&mut self) {
        self.tracker.pointer_up();
    }

    /// Forwards a pointer-leave: implicit cancellation of the drag.
    pub fn pointer_leave(&mut self) {
        self.tracker.pointer_leave();
    }

    /// Whether a drag session is active.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }
}

/// The coordinate along the slide axis for an orientation.
fn active_coordinate(orientation: Orientation, p: Point) -> f64 {
    match orientation {
        Orientation::Horizontal => p.x,
        Orientation::Vertical => p.y,
    }
}

/// A one-dimensional slider pins the orthogonal axis at the guide line.
fn axis_rules_for(layout: &Layout, orientation: Orientation) -> AxisRules {
    match orientation {
        Orientation::Horizontal => AxisRules::pin_y(layout.slide_guide.p0.y),
        Orientation::Vertical => AxisRules::pin_x(layout.slide_guide.p0.x),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use glissade_layout::Range;

    fn vertical_with_center() -> SliderControl {
        SliderControl::new(SliderConfig::new(
            Range::with_center(0.1, 0.0, 10.0),
            Orientation::Vertical,
            200.0,
        ))
    }

    fn horizontal_percent() -> SliderControl {
        SliderControl::new(SliderConfig::new(
            Range::span(0.0, 100.0),
            Orientation::Horizontal,
            300.0,
        ))
    }

    fn drag_to(slider: &mut SliderControl, screen: Point) -> (f64, String) {
        let surface = Surface::identity();
        let mut published = (f64::NAN, String::new());
        slider
            .pointer_move(&surface, screen, &mut |value, text| {
                published = (value, text.to_string());
            })
            .unwrap();
        (published.0, published.1)
    }

    #[test]
    fn starts_at_domain_minimum() {
        let slider = vertical_with_center();
        assert_eq!(slider.value(), 0.1);
        assert_eq!(slider.readout_text(), "0.1");
        assert_eq!(slider.handle_translation(), Vec2::new(25.0, 25.0));
    }

    #[test]
    fn vertical_guide_endpoints_read_out_the_domain_endpoints() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        let (value, text) = drag_to(&mut slider, Point::new(25.0, 175.0));
        assert_eq!(value, 10.0);
        assert_eq!(text, "10");

        let (value, text) = drag_to(&mut slider, Point::new(25.0, 25.0));
        assert_eq!(value, 0.1);
        assert_eq!(text, "0.1");
    }

    #[test]
    fn vertical_midpoint_reads_out_the_domain_midpoint() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        // eval(100) is 5.05 up to float noise; one-decimal rounding lands
        // on 5.1.
        let (value, text) = drag_to(&mut slider, Point::new(25.0, 100.0));
        assert!((value - 5.1).abs() < 1e-9, "midpoint value was {value}");
        assert_eq!(text, "5.1");
    }

    #[test]
    fn pointer_down_off_the_handle_produces_no_updates() {
        let mut slider = horizontal_percent();
        let surface = Surface::identity();
        let mut updates = 0;

        let captured = slider.pointer_down(&surface, Point::new(200.0, 40.0)).unwrap();
        assert_eq!(captured, None);

        for x in [100.0, 150.0, 275.0] {
            slider
                .pointer_move(&surface, Point::new(x, 25.0), &mut |_, _| updates += 1)
                .unwrap();
        }
        assert_eq!(updates, 0, "misses must not publish values");
        assert_eq!(slider.value(), 0.0);
    }

    #[test]
    fn dragging_past_the_end_clamps_at_the_maximum() {
        let mut slider = horizontal_percent();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        for x in [276.0, 400.0, 10_000.0] {
            let (value, text) = drag_to(&mut slider, Point::new(x, 25.0));
            assert_eq!(value, 100.0);
            assert_eq!(text, "100");
        }
        assert_eq!(slider.handle_translation().x, 275.0);
    }

    #[test]
    fn dragging_past_the_start_clamps_at_the_minimum() {
        let mut slider = horizontal_percent();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        let (value, text) = drag_to(&mut slider, Point::new(-500.0, 25.0));
        assert_eq!(value, 0.0);
        assert_eq!(text, "0");
    }

    #[test]
    fn vertical_slider_ignores_horizontal_drift() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        let (reference, _) = drag_to(&mut slider, Point::new(25.0, 120.0));
        for drift in [-300.0, 0.0, 48.0, 900.0] {
            let (value, _) = drag_to(&mut slider, Point::new(drift, 120.0));
            assert_eq!(value, reference);
            assert_eq!(slider.handle_translation().x, 25.0);
        }
    }

    #[test]
    fn horizontal_slider_ignores_vertical_drift() {
        let mut slider = horizontal_percent();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        drag_to(&mut slider, Point::new(150.0, -80.0));
        assert_eq!(slider.handle_translation().y, 25.0);
    }

    #[test]
    fn value_persists_after_the_drag_ends() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();
        drag_to(&mut slider, Point::new(25.0, 175.0));

        slider.pointer_up();

        assert_eq!(slider.value(), 10.0);
        assert_eq!(slider.readout_text(), "10");
    }

    #[test]
    fn leave_cancels_the_drag() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        slider.pointer_leave();

        assert!(!slider.is_dragging());
        let mut updates = 0;
        slider
            .pointer_move(&surface, Point::new(25.0, 100.0), &mut |_, _| updates += 1)
            .unwrap();
        assert_eq!(updates, 0);
    }

    #[test]
    fn detach_is_idempotent_and_silences_events() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();

        slider.detach();
        slider.detach();
        assert!(!slider.is_attached());

        let captured = slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();
        assert_eq!(captured, None);
        let mut updates = 0;
        slider
            .pointer_move(&surface, Point::new(25.0, 100.0), &mut |_, _| updates += 1)
            .unwrap();
        assert_eq!(updates, 0);
    }

    #[test]
    fn detach_mid_drag_ends_the_session() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();

        slider.detach();
        assert!(!slider.is_dragging());

        slider.attach();
        // A fresh session is required after re-attachment.
        let mut updates = 0;
        slider
            .pointer_move(&surface, Point::new(25.0, 100.0), &mut |_, _| updates += 1)
            .unwrap();
        assert_eq!(updates, 0);
    }

    #[test]
    fn set_config_reparks_the_handle_and_resets_the_value() {
        let mut slider = vertical_with_center();
        let surface = Surface::identity();
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();
        drag_to(&mut slider, Point::new(25.0, 175.0));

        slider.set_config(SliderConfig::new(
            Range::span(0.0, 100.0),
            Orientation::Horizontal,
            300.0,
        ));

        assert!(!slider.is_dragging());
        assert_eq!(slider.handle_translation(), Vec2::new(25.0, 25.0));
        assert_eq!(slider.value(), 0.0);

        // The updated geometry governs the next session.
        slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();
        let (value, _) = drag_to(&mut slider, Point::new(10_000.0, 25.0));
        assert_eq!(value, 100.0);
    }

    #[test]
    fn scaled_surface_still_reaches_the_extremes() {
        let mut slider = vertical_with_center();
        let surface = Surface::new(kurbo::Affine::scale(2.0)).unwrap();

        // Screen coordinates are doubled; locals land on the same guide.
        slider.pointer_down(&surface, Point::new(50.0, 50.0)).unwrap();
        let mut published = Vec::new();
        slider
            .pointer_move(&surface, Point::new(50.0, 350.0), &mut |value, _| {
                published.push(value);
            })
            .unwrap();

        assert_eq!(published, [10.0]);
    }
}
