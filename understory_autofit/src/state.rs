// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size};

use crate::fit::Fit;

/// Local and global rectangles of an auto-fitting viewport.
///
/// The local rect is the fixed logical drawing area and never changes after
/// construction. The global rect is where that area currently sits on the
/// physical surface; it starts out equal to the local rect and is replaced
/// each time a fit is applied.
///
/// Both rectangles hold whole-unit coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    local_rect: Rect,
    global_rect: Rect,
}

impl ViewportState {
    /// Creates a state whose local and global rects both cover `size` at the origin.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let local_rect = Rect::from_origin_size(Point::ZERO, size);
        Self {
            local_rect,
            global_rect: local_rect,
        }
    }

    /// Returns the fixed logical rectangle.
    #[must_use]
    pub fn local_rect(&self) -> Rect {
        self.local_rect
    }

    /// Returns the current on-screen placement of the logical rectangle.
    ///
    /// This reflects the most recently applied fit; a resize that has been
    /// reported but not yet consumed by a recalculation is not visible here.
    #[must_use]
    pub fn global_rect(&self) -> Rect {
        self.global_rect
    }

    /// Returns the ratio of global to local width.
    ///
    /// Derived from the snapped rectangles, so it can differ slightly from the
    /// exact [`FitTransform::scale`](crate::FitTransform::scale) last applied.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.global_rect.width() / self.local_rect.width()
    }

    pub(crate) fn apply(&mut self, fit: &Fit) {
        self.global_rect = fit.global_rect;
    }

    /// Maps a point in global (physical) space into local space.
    ///
    /// Each axis is mapped and rounded independently, half away from zero.
    /// Points outside the global rect map outside the local rect. While the
    /// global rect has zero area the result is not finite.
    ///
    /// ```
    /// use kurbo::{Point, Size};
    /// use understory_autofit::ViewportState;
    ///
    /// let state = ViewportState::new(Size::new(800.0, 600.0));
    /// assert_eq!(state.to_local(Point::new(10.4, 20.6)), Point::new(10.0, 21.0));
    /// ```
    #[must_use]
    pub fn to_local(&self, global: Point) -> Point {
        map_point(global, self.global_rect, self.local_rect)
    }

    /// Maps a point in local space into global (physical) space.
    ///
    /// This mirrors [`ViewportState::to_local`]. The two are inverses only up
    /// to rounding: a round trip lands within one unit per axis of the start,
    /// measured in the coarser of the two spaces.
    #[must_use]
    pub fn to_global(&self, local: Point) -> Point {
        map_point(local, self.local_rect, self.global_rect)
    }
}

fn map_point(pt: Point, from: Rect, to: Rect) -> Point {
    let tx = (pt.x - from.x0) / from.width();
    let ty = (pt.y - from.y0) / from.height();
    Point::new(
        (tx * to.width()).round() + to.x0,
        (ty * to.height()).round() + to.y0,
    )
}

/// Static clip region matching the local rectangle.
///
/// Built once per viewport and handed to the surface with every applied fit,
/// so nothing is drawn outside the logical area. The rect is expressed in
/// local coordinates, i.e. before the fit transform.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRegion {
    rect: Rect,
}

impl ClipRegion {
    /// Creates a clip region covering `rect`.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Returns the clipped rectangle in local coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }
}
