// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size};

use crate::error::ViewportError;
use crate::fit::{Fit, compute_fit};
use crate::hooks::ViewportHooks;
use crate::resize::{ListenerId, ResizeMailbox, ResizeSource, WeakResizeMailbox};
use crate::state::{ClipRegion, ViewportState};
use crate::surface::Surface;

const DEFAULT_NAME: &str = "auto_fit_viewport";

/// Fixed-aspect logical viewport that keeps itself fitted to a resizable surface.
///
/// The host drives three lifecycle calls:
/// 1) [`AutoFitViewport::setup`] once, which subscribes to resize
///    notifications and latches the initial physical size.
/// 2) [`AutoFitViewport::recalculate`] once per frame, which consumes the
///    pending size (if any), resizes the surface and applies the fit.
/// 3) [`AutoFitViewport::teardown`] once, which unsubscribes.
///
/// Resizes reported between frames are coalesced: only the latest one is
/// applied. Between fits, [`AutoFitViewport::global_rect`] keeps describing
/// the last applied fit.
///
/// Resize sources only hold a weak handle to the viewport's mailbox, so
/// dropping the viewport without a teardown leaves no live listener behind.
#[derive(Debug)]
pub struct AutoFitViewport<H = ()> {
    name: Cow<'static, str>,
    state: ViewportState,
    clip: ClipRegion,
    mailbox: ResizeMailbox,
    subscription: Option<ListenerId>,
    hooks: H,
}

impl AutoFitViewport {
    /// Creates a viewport with a logical area of `size` and no hooks.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidLocalSize`] if either dimension of
    /// `size` is zero, negative, fractional or not finite.
    pub fn new(size: Size) -> Result<Self, ViewportError> {
        Self::with_hooks(size, ())
    }
}

impl<H> AutoFitViewport<H> {
    /// Creates a viewport with a logical area of `size` and the given hooks.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidLocalSize`] if either dimension of
    /// `size` is zero, negative, fractional or not finite.
    pub fn with_hooks(size: Size, hooks: H) -> Result<Self, ViewportError> {
        let whole = size.width == size.width.round() && size.height == size.height.round();
        if !(size.width > 0.0 && size.height > 0.0 && size.is_finite() && whole) {
            return Err(ViewportError::InvalidLocalSize {
                width: size.width,
                height: size.height,
            });
        }
        let state = ViewportState::new(size);
        Ok(Self {
            name: Cow::Borrowed(DEFAULT_NAME),
            clip: ClipRegion::new(state.local_rect()),
            state,
            mailbox: ResizeMailbox::new(),
            subscription: None,
            hooks,
        })
    }

    /// Sets the name used to identify this viewport in logs.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the viewport's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fixed logical rectangle.
    #[must_use]
    pub fn local_rect(&self) -> Rect {
        self.state.local_rect()
    }

    /// Returns where the logical rectangle currently sits on the surface.
    #[must_use]
    pub fn global_rect(&self) -> Rect {
        self.state.global_rect()
    }

    /// Returns the local/global rectangle pair.
    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Returns the clip region handed to the surface with every fit.
    #[must_use]
    pub fn clip_region(&self) -> &ClipRegion {
        &self.clip
    }

    /// Returns the physical size waiting to be applied by the next recalculation.
    #[must_use]
    pub fn pending_resize(&self) -> Option<Size> {
        self.mailbox.pending()
    }

    /// Returns `true` between setup and teardown.
    #[must_use]
    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns the installed hooks.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Returns the installed hooks mutably.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Returns a listener handle that feeds this viewport's pending size.
    ///
    /// The handle does not keep the viewport's mailbox alive.
    #[must_use]
    pub fn resize_listener(&self) -> WeakResizeMailbox {
        self.mailbox.downgrade()
    }

    /// Records a new physical size to apply on the next recalculation.
    ///
    /// Any size reported earlier and not yet applied is discarded.
    pub fn on_resize(&self, size: Size) {
        if let Some(dropped) = self.mailbox.post(size) {
            tracing::trace!(viewport = %self.name, ?dropped, ?size, "coalesced resize");
        }
    }

    /// Maps a point in global (physical) space into local space.
    ///
    /// See [`ViewportState::to_local`].
    #[must_use]
    pub fn to_local(&self, global: Point) -> Point {
        self.state.to_local(global)
    }

    /// Maps a point in local space into global (physical) space.
    ///
    /// See [`ViewportState::to_global`].
    #[must_use]
    pub fn to_global(&self, local: Point) -> Point {
        self.state.to_global(local)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> AutoFitDebugInfo<'_> {
        AutoFitDebugInfo {
            name: &self.name,
            local_rect: self.state.local_rect(),
            global_rect: self.state.global_rect(),
            pending_resize: self.mailbox.pending(),
            subscription: self.subscription,
        }
    }
}

impl<H: ViewportHooks> AutoFitViewport<H> {
    /// Subscribes to `source` and latches `physical_size` for the first fit.
    ///
    /// Hosts call this exactly once, before the first
    /// [`AutoFitViewport::recalculate`]. Calling it again replaces the
    /// earlier subscription.
    pub fn setup<R: ResizeSource + ?Sized>(
        &mut self,
        physical_size: Size,
        surface: &mut dyn Surface,
        source: &mut R,
    ) {
        self.hooks.pre_setup(&self.state, physical_size, surface);
        if let Some(previous) = self.subscription.take() {
            source.unsubscribe(previous);
        }
        let id = source.subscribe(self.mailbox.downgrade());
        self.subscription = Some(id);
        self.mailbox.post(physical_size);
        tracing::debug!(viewport = %self.name, ?physical_size, listener = id.0, "viewport setup");
        self.hooks.post_setup(&self.state, physical_size, surface);
    }

    /// Like [`AutoFitViewport::setup`], latching the size the surface reports.
    pub fn setup_from_surface<R: ResizeSource + ?Sized>(
        &mut self,
        surface: &mut dyn Surface,
        source: &mut R,
    ) {
        let physical_size = surface.physical_size();
        self.setup(physical_size, surface, source);
    }

    /// Per-frame step: applies the pending physical size, if there is one.
    ///
    /// With a pending size this resizes the surface, submits the fit transform
    /// and clip, and updates [`AutoFitViewport::global_rect`]; the applied
    /// [`Fit`] is returned. Without one the surface is left untouched and
    /// `None` is returned. The hooks run either way.
    pub fn recalculate(&mut self, surface: &mut dyn Surface) -> Option<Fit> {
        self.hooks.pre_calculate(&self.state, surface);
        let fit = self.mailbox.take().map(|physical| {
            surface.set_physical_size(physical);
            let fit = compute_fit(physical, self.state.local_rect().size());
            surface.apply_fit(fit.transform, &self.clip);
            self.state.apply(&fit);
            if fit.global_rect.area() == 0.0 {
                tracing::debug!(viewport = %self.name, ?physical, "fitted a zero-area surface");
            }
            tracing::trace!(
                viewport = %self.name,
                ?physical,
                scale = fit.transform.scale,
                binding = ?fit.binding,
                global_rect = ?fit.global_rect,
                "applied fit"
            );
            fit
        });
        self.hooks.post_calculate(&self.state, fit.as_ref(), surface);
        fit
    }

    /// Unsubscribes from `source`.
    pub fn teardown<R: ResizeSource + ?Sized>(&mut self, source: &mut R) {
        self.hooks.pre_teardown(&self.state);
        if let Some(id) = self.subscription.take() {
            source.unsubscribe(id);
            tracing::debug!(viewport = %self.name, listener = id.0, "viewport teardown");
        }
        self.hooks.post_teardown(&self.state);
    }
}

/// Debug snapshot of an [`AutoFitViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct AutoFitDebugInfo<'a> {
    /// Viewport name.
    pub name: &'a str,
    /// Fixed logical rectangle.
    pub local_rect: Rect,
    /// Current on-screen placement of the logical rectangle.
    pub global_rect: Rect,
    /// Physical size waiting for the next recalculation.
    pub pending_resize: Option<Size>,
    /// Active resize subscription, if set up.
    pub subscription: Option<ListenerId>,
}
