// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_autofit --heading-base-level=0

//! Understory Autofit: a fixed-aspect logical viewport that fits itself to a
//! resizable surface.
//!
//! Content is authored in **local** space: a fixed logical rectangle chosen at
//! construction. The physical surface (**global** space) is sized by a host
//! window and may change at any moment. This crate keeps the largest centered
//! rectangle of the local aspect ratio that fits the surface, and provides:
//! - Resize coalescing: notifications land in a one-slot mailbox, the latest
//!   one wins, and it is consumed once per frame.
//! - The fit calculator ([`compute_fit`]): uniform scale plus a centering
//!   offset along the axis with slack.
//! - A lifecycle controller ([`AutoFitViewport`]) that applies the fit to a
//!   [`Surface`] and exposes [`ViewportHooks`] around setup, per-frame
//!   recalculation and teardown.
//! - Point mapping between local and global space.
//!
//! It does **not** own a window, an event loop or a renderer. Callers are
//! expected to:
//! - Implement [`Surface`] for their renderer (or use [`RecordingSurface`]).
//! - Feed window resize events into a [`ResizeSource`], such as
//!   [`ResizeDispatcher`].
//! - Call setup, recalculate and teardown in order.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use understory_autofit::{AutoFitViewport, RecordingSurface, ResizeDispatcher};
//!
//! let mut viewport = AutoFitViewport::new(Size::new(800.0, 600.0)).unwrap();
//! let mut surface = RecordingSurface::new(Size::new(1600.0, 900.0));
//! let mut resizes = ResizeDispatcher::new();
//!
//! viewport.setup_from_surface(&mut surface, &mut resizes);
//! viewport.recalculate(&mut surface);
//! // Pillarboxed: 200px bars left and right, scaled by 1.5.
//! assert_eq!(viewport.global_rect(), Rect::new(200.0, 0.0, 1400.0, 900.0));
//!
//! // Map a pointer position on the surface back into local space.
//! assert_eq!(viewport.to_local(Point::new(800.0, 450.0)), Point::new(400.0, 300.0));
//!
//! // The window becomes taller; the next frame letterboxes instead.
//! resizes.dispatch(Size::new(800.0, 1000.0));
//! viewport.recalculate(&mut surface);
//! assert_eq!(viewport.global_rect(), Rect::new(0.0, 200.0, 800.0, 800.0));
//!
//! viewport.teardown(&mut resizes);
//! ```
//!
//! ## Design notes
//!
//! - Scaling is always uniform; the aspect ratio of local space is preserved.
//! - When the surface and local space have exactly the same aspect ratio the
//!   height is treated as the binding axis.
//! - Rectangle coordinates and mapped points are rounded half away from zero.
//!   The transform handed to the surface keeps the exact scale.
//! - Everything runs on one thread. Resize sources hold weak handles, so a
//!   dropped viewport stops listening even if teardown never ran.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod fit;
mod hooks;
mod resize;
mod state;
mod surface;
mod viewport;

pub use error::ViewportError;
pub use fit::{BindingAxis, Fit, FitTransform, compute_fit};
pub use hooks::ViewportHooks;
pub use resize::{ListenerId, ResizeDispatcher, ResizeMailbox, ResizeSource, WeakResizeMailbox};
pub use state::{ClipRegion, ViewportState};
pub use surface::{RecordingSurface, Surface, SurfaceCommand};
pub use viewport::{AutoFitDebugInfo, AutoFitViewport};
