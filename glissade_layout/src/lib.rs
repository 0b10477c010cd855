// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glissade Layout: slider layout geometry and value scale.
//!
//! This crate is the pure half of the slider control. Given a
//! [`SliderConfig`] it computes a [`Layout`]: the track area, the middle
//! line, the inset slide-guide line the handle travels along, the handle
//! radius, and a [`LinearScale`] mapping pixel offsets along the guide back
//! into the configured domain range.
//!
//! [`Layout::compute`] has no side effects and owns no mutable state; it is
//! safe (and intended) to call on every configuration change. Interaction
//! state lives elsewhere (see `glissade_drag`).
//!
//! ## Minimal example
//!
//! ```
//! use glissade_layout::{Layout, Orientation, Range, SliderConfig};
//!
//! let config = SliderConfig::new(Range::span(0.0, 100.0), Orientation::Horizontal, 300.0);
//! let layout = Layout::compute(&config);
//!
//! // The guide is inset by the handle radius at both ends.
//! assert_eq!(layout.handle_radius, 25.0);
//! assert_eq!(layout.slide_guide.p0.x, 25.0);
//! assert_eq!(layout.slide_guide.p1.x, 275.0);
//!
//! // The scale maps guide pixels onto the domain.
//! assert_eq!(layout.scale.eval(25.0), 0.0);
//! assert_eq!(layout.scale.eval(275.0), 100.0);
//! ```
//!
//! ## Degenerate configurations
//!
//! A slider whose `size` does not exceed `2 * handle_radius` produces a
//! zero- or negative-length guide span, and the scale's divisor collapses.
//! This is a documented caller contract, not a checked error: configuration
//! is developer-supplied, and callers must keep `size > 2 * handle_radius`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod layout;

pub use config::{Orientation, Range, SliderConfig};
pub use layout::{HANDLE_RADIUS, Layout, LinearScale, TRACK_THICKNESS};
