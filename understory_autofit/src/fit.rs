// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fit calculator: the largest centered, aspect-preserving placement of a
//! logical size inside a physical size.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Affine, Rect, Size, Vec2};

/// The dimension whose ratio determines the uniform scale of a [`Fit`].
///
/// The other axis has slack after scaling and the fitted content is centered
/// along it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingAxis {
    /// The physical surface is relatively wider (or exactly as wide) as the
    /// logical area; the fit fills the full height and is padded left/right.
    Height,
    /// The physical surface is relatively taller; the fit fills the full
    /// width and is padded top/bottom.
    Width,
}

/// Translate + uniform scale applied to a rendering surface for one frame.
///
/// The translation is absolute: it replaces whatever transform the surface
/// had before. The scale is then composed on top of that translation, so the
/// resulting mapping from local to physical coordinates is
/// `translate(translate) * scale(scale)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransform {
    /// Offset of the fitted area in physical coordinates (unrounded).
    pub translate: Vec2,
    /// Uniform scale from local units to physical units (unrounded).
    pub scale: f64,
}

impl FitTransform {
    /// The identity transform: no offset, unit scale.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns the composed local → physical affine transform.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl Default for FitTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Result of [`compute_fit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fit {
    /// Exact transform to hand to the rendering surface.
    pub transform: FitTransform,
    /// Where local space lands on the physical surface, snapped to whole units.
    pub global_rect: Rect,
    /// Which axis determined the scale.
    pub binding: BindingAxis,
}

/// Computes the best centered, aspect-ratio-preserving fit of `local` inside
/// `physical`.
///
/// When `physical` is relatively wider than `local` (or has exactly the same
/// aspect ratio) the height binds: `scale = physical.height / local.height`
/// and the slack is split evenly left and right. Otherwise the width binds and
/// the slack is split top and bottom.
///
/// The transform keeps the exact, unrounded scale and offset. The reported
/// [`Fit::global_rect`] rounds its offset and both extents half away from
/// zero, so it stays on whole units even for fractional physical sizes.
///
/// `local` must have non-zero dimensions. A zero-area `physical` is not
/// special-cased and yields a zero-area fit.
///
/// ```
/// use kurbo::{Rect, Size};
/// use understory_autofit::{BindingAxis, compute_fit};
///
/// let fit = compute_fit(Size::new(1600.0, 900.0), Size::new(800.0, 600.0));
/// assert_eq!(fit.binding, BindingAxis::Height);
/// assert_eq!(fit.transform.scale, 1.5);
/// assert_eq!(fit.global_rect, Rect::new(200.0, 0.0, 1400.0, 900.0));
/// ```
#[must_use]
pub fn compute_fit(physical: Size, local: Size) -> Fit {
    let (cw, ch) = (physical.width, physical.height);
    let (vw, vh) = (local.width, local.height);

    if cw / ch >= vw / vh {
        let scale = ch / vh;
        let offset = (cw - vw * scale) * 0.5;
        Fit {
            transform: FitTransform {
                translate: Vec2::new(offset, 0.0),
                scale,
            },
            global_rect: Rect::from_origin_size(
                (offset.round(), 0.0),
                ((scale * vw).round(), ch.round()),
            ),
            binding: BindingAxis::Height,
        }
    } else {
        let scale = cw / vw;
        let offset = (ch - vh * scale) * 0.5;
        Fit {
            transform: FitTransform {
                translate: Vec2::new(0.0, offset),
                scale,
            },
            global_rect: Rect::from_origin_size(
                (0.0, offset.round()),
                (cw.round(), (scale * vh).round()),
            ),
            binding: BindingAxis::Width,
        }
    }
}
