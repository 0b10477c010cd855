// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glissade Control: the live slider controller.
//!
//! [`SliderControl`] composes the two halves of the slider: the pure
//! geometry from `glissade_layout` and the drag state machine from
//! `glissade_drag`. It registers the handle as a drag target on the guide
//! start, derives the pinned axis from the orientation (a vertical slider
//! pins x, a horizontal one pins y), forwards pointer events to the
//! tracker, and maps every accepted movement through the layout's scale
//! into a domain value rounded to one decimal.
//!
//! Output goes two ways, both explicit: the accepted translation is
//! returned from [`SliderControl::pointer_move`] so callers can mirror it
//! into their visual transform immediately, and the rounded value plus its
//! readout text are handed to a per-call sink closure. The controller
//! stores no callback; like a dispatch handler, the sink is a parameter of
//! the call that needs it.
//!
//! ## Minimal example
//!
//! ```
//! use glissade_control::SliderControl;
//! use glissade_drag::Surface;
//! use glissade_layout::{Orientation, Range, SliderConfig};
//! use kurbo::Point;
//!
//! let config = SliderConfig::new(
//!     Range::with_center(0.1, 0.0, 10.0),
//!     Orientation::Vertical,
//!     200.0,
//! );
//! let mut slider = SliderControl::new(config);
//! let surface = Surface::identity();
//!
//! // Grab the handle at the guide start and drag it to the guide end.
//! slider.pointer_down(&surface, Point::new(25.0, 25.0)).unwrap();
//! let mut readout = String::new();
//! slider
//!     .pointer_move(&surface, Point::new(25.0, 175.0), &mut |_, text| {
//!         readout = text.into();
//!     })
//!     .unwrap();
//! slider.pointer_up();
//!
//! assert_eq!(readout, "10");
//! assert_eq!(slider.value(), 10.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod control;
mod readout;

pub use control::SliderControl;
pub use readout::{format_readout, round_to_tenth};
