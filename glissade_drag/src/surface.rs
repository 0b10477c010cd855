// Copyright 2025 the Glissade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point};

/// The abstract graphical surface a tracker operates against.
///
/// A `Surface` carries the surface's current local→screen transform (its
/// transform matrix under any host scaling or layout translation) and its
/// precomputed inverse. Pointer events arrive in screen coordinates;
/// [`Surface::screen_to_local`] brings them into the surface's own frame so
/// clamping and grab offsets are computed in stable units.
#[derive(Clone, Copy, Debug)]
pub struct Surface {
    to_screen: Affine,
    to_local: Affine,
}

impl Surface {
    /// Creates a surface from its local→screen transform.
    ///
    /// Fails when the transform is singular or non-finite, since pointer
    /// conversion needs the inverse.
    pub fn new(to_screen: Affine) -> Result<Self, SurfaceError> {
        let det = to_screen.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(SurfaceError::NonInvertibleTransform);
        }
        Ok(Self {
            to_screen,
            to_local: to_screen.inverse(),
        })
    }

    /// A surface whose local frame coincides with screen coordinates.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            to_screen: Affine::IDENTITY,
            to_local: Affine::IDENTITY,
        }
    }

    /// Converts a screen-space point into surface-local coordinates.
    #[must_use]
    pub fn screen_to_local(&self, p: Point) -> Point {
        self.to_local * p
    }

    /// Converts a surface-local point into screen coordinates.
    #[must_use]
    pub fn local_to_screen(&self, p: Point) -> Point {
        self.to_screen * p
    }

    /// The surface's local→screen transform.
    #[must_use]
    pub const fn transform(&self) -> Affine {
        self.to_screen
    }
}

/// Error constructing a [`Surface`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The local→screen transform has no inverse.
    NonInvertibleTransform,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonInvertibleTransform => {
                write!(f, "surface transform is singular and cannot be inverted")
            }
        }
    }
}

impl core::error::Error for SurfaceError {}
