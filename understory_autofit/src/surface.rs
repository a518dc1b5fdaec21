// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering surface boundary.
//!
//! The viewport never draws. It resizes the surface and submits one
//! translate + scale transform together with the clip region whenever a fit
//! is applied. [`RecordingSurface`] implements [`Surface`] without a backend,
//! which is handy for headless hosts and tests.

use alloc::vec::Vec;
use core::mem;

use kurbo::{Affine, Rect, Size};

use crate::fit::FitTransform;
use crate::state::ClipRegion;

/// A rendering surface whose physical size is owned by the host.
pub trait Surface {
    /// Returns the current physical size.
    fn physical_size(&self) -> Size;

    /// Resizes the surface's backing store.
    fn set_physical_size(&mut self, size: Size);

    /// Submits the frame's local → physical transform and clip.
    ///
    /// The translation replaces any existing transform; the scale composes on
    /// top of it. `clip` is expressed in local coordinates.
    fn apply_fit(&mut self, transform: FitTransform, clip: &ClipRegion);
}

/// A surface mutation captured by [`RecordingSurface`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceCommand {
    /// [`Surface::set_physical_size`] was called.
    SetPhysicalSize(Size),
    /// [`Surface::apply_fit`] was called.
    ApplyFit {
        /// Submitted transform.
        transform: FitTransform,
        /// Submitted clip rectangle (local coordinates).
        clip: Rect,
    },
}

/// Backend-less [`Surface`] that records every mutation.
///
/// It also tracks the state a real surface would end up in: the physical
/// size, the composed transform and the active clip.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    clip: Option<Rect>,
    commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Creates a surface reporting `size`, with an identity transform and no clip.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            transform: Affine::IDENTITY,
            clip: None,
            commands: Vec::new(),
        }
    }

    /// Changes the reported physical size without recording a command.
    ///
    /// This models the host window changing size underneath the surface.
    pub fn host_resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns the commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[SurfaceCommand] {
        &self.commands
    }

    /// Returns and clears the recorded commands.
    pub fn take_commands(&mut self) -> Vec<SurfaceCommand> {
        mem::take(&mut self.commands)
    }

    /// Returns the currently active local → physical transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }

    /// Returns the active clip in local coordinates, if any fit has been applied.
    #[must_use]
    pub fn clip(&self) -> Option<Rect> {
        self.clip
    }
}

impl Surface for RecordingSurface {
    fn physical_size(&self) -> Size {
        self.size
    }

    fn set_physical_size(&mut self, size: Size) {
        self.size = size;
        self.commands.push(SurfaceCommand::SetPhysicalSize(size));
    }

    fn apply_fit(&mut self, transform: FitTransform, clip: &ClipRegion) {
        self.transform = transform.to_affine();
        self.clip = Some(clip.rect());
        self.commands.push(SurfaceCommand::ApplyFit {
            transform,
            clip: clip.rect(),
        });
    }
}
