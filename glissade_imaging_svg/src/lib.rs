// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! SVG export of the slider scene.
//!
//! Renders a computed [`Layout`] plus the handle's current translation into
//! an SVG document string: the track background, the slide-guide line, an
//! optional center marker, and the draggable handle group (border circle,
//! inner circle, and the centered readout text).
//!
//! This is intended for debugging/inspection and for hosts that present
//! vector markup directly; it is not a pixel-perfect renderer. Visual
//! styling beyond the background fill is left to the `slide-guide`,
//! `draggable-group`, `handle-border`, and `handle` classes plus the
//! pass-through class name.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use core::fmt::Write as _;

use glissade_layout::Layout;
use kurbo::Vec2;

/// Exports the slider scene as an SVG document.
///
/// `handle_translation` positions the draggable group (typically
/// `SliderControl::handle_translation`), `readout` is the current readout
/// text, and `class_name` is the configuration's pass-through styling
/// class, emitted on the root element when non-empty.
#[must_use]
pub fn export_svg(
    layout: &Layout,
    handle_translation: Vec2,
    readout: &str,
    class_name: &str,
) -> String {
    let width = fmt_f64(layout.area.width());
    let height = fmt_f64(layout.area.height());
    let radius = layout.handle_radius;

    let mut svg = String::new();
    let _ = write!(svg, "<svg width=\"{width}\" height=\"{height}\"");
    if !class_name.is_empty() {
        let _ = write!(svg, " class=\"{class_name}\"");
    }
    svg.push_str(" xmlns=\"http://www.w3.org/2000/svg\">");

    let _ = write!(
        svg,
        "<rect x=\"0\" y=\"0\" width=\"{width}\" height=\"{height}\" fill=\"#fafafa\"/>"
    );
    let _ = write!(
        svg,
        "<line class=\"slide-guide\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"/>",
        fmt_f64(layout.slide_guide.p0.x),
        fmt_f64(layout.slide_guide.p0.y),
        fmt_f64(layout.slide_guide.p1.x),
        fmt_f64(layout.slide_guide.p1.y),
    );
    if let Some(center) = layout.center {
        let _ = write!(
            svg,
            "<circle class=\"center-marker\" cx=\"{}\" cy=\"{}\" r=\"{}\"/>",
            fmt_f64(center.x),
            fmt_f64(center.y),
            fmt_f64(radius * 0.1),
        );
    }

    let _ = write!(
        svg,
        "<g class=\"draggable-group\" transform=\"translate({},{})\">",
        fmt_f64(handle_translation.x),
        fmt_f64(handle_translation.y),
    );
    let _ = write!(
        svg,
        "<circle class=\"handle-border\" cx=\"0\" cy=\"0\" r=\"{}\"/>",
        fmt_f64(radius),
    );
    let _ = write!(
        svg,
        "<circle class=\"handle\" cx=\"0\" cy=\"0\" r=\"{}\"/>",
        fmt_f64(radius * 0.8),
    );
    let _ = write!(
        svg,
        "<text dx=\"0\" dy=\"{}\" text-anchor=\"middle\" font-size=\"{}em\">{readout}</text>",
        fmt_f64(radius * 2.0 * 0.2),
        fmt_f64(radius * 0.05),
    );
    svg.push_str("</g></svg>");
    svg
}

/// Best-effort pretty formatting: whole values print without a fraction.
fn fmt_f64(v: f64) -> String {
    if v.is_finite() {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "best-effort pretty formatting"
        )]
        let i = v as i64;
        #[allow(
            clippy::cast_precision_loss,
            reason = "best-effort pretty formatting"
        )]
        let diff = (i as f64) - v;
        if diff > -1e-6 && diff < 1e-6 {
            return format!("{i}");
        }
    }
    format!("{v}")
}
