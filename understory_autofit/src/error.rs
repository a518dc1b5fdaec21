// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Errors reported while configuring an [`AutoFitViewport`](crate::AutoFitViewport).
///
/// Only construction can fail. Once a viewport exists, every lifecycle and
/// mapping operation is total.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ViewportError {
    /// The logical (local) size has a zero, negative, fractional or
    /// non-finite dimension.
    ///
    /// Local coordinates are whole units, and no aspect ratio can be derived
    /// from an empty size.
    #[error("local viewport size must be positive whole units, got {width}x{height}")]
    InvalidLocalSize {
        /// Requested logical width.
        width: f64,
        /// Requested logical height.
        height: f64,
    },
}
