// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`fs_host`]: Local filesystem host (implements [`GalleryHost`])
//! - [`memory_registry`]: In-memory extension routing (implements [`ViewRegistry`])
//!
//! [`GalleryHost`]: crate::application::port::GalleryHost
//! [`ViewRegistry`]: crate::application::port::ViewRegistry

pub mod fs_host;
pub mod memory_registry;

pub use fs_host::{probe_dimensions, FsGalleryHost};
pub use memory_registry::InMemoryViewRegistry;
