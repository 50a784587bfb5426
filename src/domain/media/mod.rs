// SPDX-License-Identifier: MPL-2.0
//! Media domain types.
//!
//! This module contains image file handles that are independent of any
//! presentation or infrastructure concerns.

pub mod types;

// Re-export commonly used types
pub use types::{can_accept_extension, Dimensions, FileEntry, ImageExtension, ImageRef};
