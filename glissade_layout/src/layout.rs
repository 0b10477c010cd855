// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Line, Point, Rect};

use crate::config::{Orientation, SliderConfig};

/// Track thickness across the slide axis, in pixels.
pub const TRACK_THICKNESS: f64 = 50.0;

/// Handle radius, in pixels. Half the track thickness.
pub const HANDLE_RADIUS: f64 = TRACK_THICKNESS / 2.0;

/// Linear map from a pixel span along the slide guide onto a domain range.
///
/// `eval` is the anchored form: the guide start maps to the domain minimum
/// and the guide end to the domain maximum, linearly in between. For a
/// domain anchored at zero this coincides with the offset form
/// `(px - view_start) * |domain| / view_len`.
///
/// A degenerate span (`view_end == view_start`) makes the divisor zero; the
/// constructor does not guard it. Callers guarantee a positive guide span
/// (`size > 2 * handle_radius`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    view_start: f64,
    view_end: f64,
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    /// Creates a scale mapping `view_start..view_end` onto
    /// `domain_start..domain_end`.
    #[must_use]
    pub const fn new(view_start: f64, view_end: f64, domain_start: f64, domain_end: f64) -> Self {
        Self {
            view_start,
            view_end,
            domain_start,
            domain_end,
        }
    }

    /// Maps a pixel coordinate along the guide into the domain.
    #[must_use]
    pub fn eval(&self, px: f64) -> f64 {
        self.domain_start
            + (px - self.view_start) * (self.domain_end - self.domain_start)
                / (self.view_end - self.view_start)
    }

    /// The pixel span this scale maps from.
    #[must_use]
    pub const fn view_span(&self) -> (f64, f64) {
        (self.view_start, self.view_end)
    }

    /// The domain span this scale maps onto.
    #[must_use]
    pub const fn domain_span(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }
}

/// Derived slider geometry, read-only per configuration.
///
/// Computed once per configuration by [`Layout::compute`]; recompute
/// whenever the configuration changes. All fields are plain values with no
/// interior mutability.
#[derive(Clone, Debug)]
pub struct Layout {
    /// The track's bounding area, with origin at (0, 0).
    pub area: Rect,
    /// The line through the middle of the track, end to end.
    pub middle_line: Line,
    /// The guide the handle center travels along: the middle line inset by
    /// [`Layout::handle_radius`] at both ends, so the handle's circular
    /// extent stays inside [`Layout::area`].
    pub slide_guide: Line,
    /// Radius of the circular handle.
    pub handle_radius: f64,
    /// Pixel-to-domain scale along the guide's slide axis.
    pub scale: LinearScale,
    /// Center marker position, present iff the range is three-point. Placed
    /// at the midpoint of the area along the slide axis regardless of the
    /// marker's numeric value.
    pub center: Option<Point>,
}

impl Layout {
    /// Computes the layout for a configuration.
    ///
    /// Pure function of its input; safe to call on every configuration
    /// change.
    #[must_use]
    pub fn compute(config: &SliderConfig) -> Self {
        let size = config.size;
        let radius = HANDLE_RADIUS;
        let mid = TRACK_THICKNESS / 2.0;
        let (min, max) = (config.range.min(), config.range.max());

        match config.orientation {
            Orientation::Vertical => {
                let middle_line = Line::new((mid, 0.0), (mid, size));
                let slide_guide = Line::new(
                    (middle_line.p0.x, middle_line.p0.y + radius),
                    (middle_line.p1.x, middle_line.p1.y - radius),
                );
                Self {
                    area: Rect::new(0.0, 0.0, TRACK_THICKNESS, size),
                    middle_line,
                    slide_guide,
                    handle_radius: radius,
                    scale: LinearScale::new(slide_guide.p0.y, slide_guide.p1.y, min, max),
                    center: config.range.center().map(|_| Point::new(mid, size / 2.0)),
                }
            }
            Orientation::Horizontal => {
                let middle_line = Line::new((0.0, mid), (size, mid));
                let slide_guide = Line::new(
                    (middle_line.p0.x + radius, middle_line.p0.y),
                    (middle_line.p1.x - radius, middle_line.p1.y),
                );
                Self {
                    area: Rect::new(0.0, 0.0, size, TRACK_THICKNESS),
                    middle_line,
                    slide_guide,
                    handle_radius: radius,
                    scale: LinearScale::new(slide_guide.p0.x, slide_guide.p1.x, min, max),
                    center: config.range.center().map(|_| Point::new(size / 2.0, mid)),
                }
            }
        }
    }
}
