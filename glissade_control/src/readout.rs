// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Rounds a domain value to one decimal.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a domain value for the on-screen readout.
///
/// One decimal at most; whole numbers drop the fraction, so `10.0` reads
/// `"10"` and `9.9` reads `"9.9"`.
#[must_use]
pub fn format_readout(value: f64) -> String {
    format!("{}", round_to_tenth(value))
}
