// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// Slider orientation.
///
/// The two branches produce mirrored geometry in [`crate::Layout::compute`]:
/// `Vertical` runs the guide along the y axis, `Horizontal` along x.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Guide runs along the x axis; the y axis is pinned during dragging.
    #[default]
    Horizontal,
    /// Guide runs along the y axis; the x axis is pinned during dragging.
    Vertical,
}

/// A slider domain range: a span with an optional center marker.
///
/// The three-point form `[min, center, max]` splits into the domain span
/// `[min, max]` plus a `center` value. The center only requests a visual
/// marker at the midpoint of the track; its numeric value never affects
/// clamping or the scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    min: f64,
    max: f64,
    center: Option<f64>,
}

impl Range {
    /// A plain two-point range `[min, max]`.
    #[must_use]
    pub const fn span(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            center: None,
        }
    }

    /// A three-point range `[min, center, max]`.
    ///
    /// Assumed (not enforced): `min <= center <= max`.
    #[must_use]
    pub const fn with_center(min: f64, center: f64, max: f64) -> Self {
        Self {
            min,
            max,
            center: Some(center),
        }
    }

    /// The domain minimum.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// The domain maximum.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// The center marker value, if this is a three-point range.
    #[must_use]
    pub const fn center(&self) -> Option<f64> {
        self.center
    }
}

/// Slider configuration.
///
/// `step` and `class_name` are pass-through metadata: `step` is a hint for
/// consumers that want stepped presentation, `class_name` is styling
/// metadata carried into exported markup. Neither is interpreted by the
/// layout or drag core.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderConfig {
    /// The domain range the slider reports values in.
    pub range: Range,
    /// Step hint; positive. Not interpreted by the core.
    pub step: f64,
    /// Track orientation.
    pub orientation: Orientation,
    /// Track length along the slide axis, in pixels. Must exceed
    /// `2 * handle_radius` for the guide span to be non-degenerate.
    pub size: f64,
    /// Pass-through styling class.
    pub class_name: String,
}

impl SliderConfig {
    /// Creates a configuration with a step of `1.0` and no class name.
    #[must_use]
    pub fn new(range: Range, orientation: Orientation, size: f64) -> Self {
        Self {
            range,
            step: 1.0,
            orientation,
            size,
            class_name: String::new(),
        }
    }

    /// Sets the step hint.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets the pass-through styling class.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_has_no_center() {
        let range = Range::span(0.0, 10.0);
        assert_eq!(range.min(), 0.0);
        assert_eq!(range.max(), 10.0);
        assert_eq!(range.center(), None);
    }

    #[test]
    fn with_center_splits_domain_and_marker() {
        let range = Range::with_center(0.1, 0.0, 10.0);
        assert_eq!(range.min(), 0.1);
        assert_eq!(range.max(), 10.0);
        assert_eq!(range.center(), Some(0.0));
    }

    #[test]
    fn config_builders() {
        let config = SliderConfig::new(Range::span(0.0, 1.0), Orientation::Vertical, 200.0)
            .with_step(0.5)
            .with_class_name("content");
        assert_eq!(config.step, 0.5);
        assert_eq!(config.class_name, "content");
        assert_eq!(config.orientation, Orientation::Vertical);
    }
}
