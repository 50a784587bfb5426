// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the interfaces the embedding application implements.
//! They use domain types only, so the gallery engine stays independent of any
//! concrete host.
//!
//! # Available Ports
//!
//! - [`host`]: Folder listing, resource resolution, decoding, tab labels
//! - [`registry`]: Extension-to-view routing table
//!
//! Ready-made adapters live in [`crate::infrastructure`].

pub mod host;
pub mod registry;

pub use host::GalleryHost;
pub use registry::ViewRegistry;
