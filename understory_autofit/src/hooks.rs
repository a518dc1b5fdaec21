// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::fit::Fit;
use crate::state::ViewportState;
use crate::surface::Surface;

/// Extension points around an [`AutoFitViewport`](crate::AutoFitViewport)'s lifecycle.
///
/// Every method defaults to doing nothing. The viewport calls each `pre_*`
/// hook before its own work and each `post_*` hook after it, so hooks can
/// layer behavior around setup, recalculation and teardown without being
/// able to skip the core steps.
///
/// The `()` implementation is the "no hooks" strategy.
pub trait ViewportHooks {
    /// Called at the start of setup, before subscribing to resizes.
    fn pre_setup(
        &mut self,
        _state: &ViewportState,
        _physical_size: Size,
        _surface: &mut dyn Surface,
    ) {
    }

    /// Called at the end of setup, once the initial size has been latched.
    fn post_setup(
        &mut self,
        _state: &ViewportState,
        _physical_size: Size,
        _surface: &mut dyn Surface,
    ) {
    }

    /// Called every frame before any pending resize is consumed.
    fn pre_calculate(&mut self, _state: &ViewportState, _surface: &mut dyn Surface) {}

    /// Called every frame after recalculation, whether or not a fit was applied.
    ///
    /// `fit` is the fit applied this frame, if any.
    fn post_calculate(
        &mut self,
        _state: &ViewportState,
        _fit: Option<&Fit>,
        _surface: &mut dyn Surface,
    ) {
    }

    /// Called at the start of teardown, while still subscribed.
    fn pre_teardown(&mut self, _state: &ViewportState) {}

    /// Called at the end of teardown, after unsubscribing.
    fn post_teardown(&mut self, _state: &ViewportState) {}
}

impl ViewportHooks for () {}
