// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is an in-place image gallery engine for `iced` hosts.
//!
//! Given one image file it derives the navigable sibling list, keeps a
//! zoom/pan transform for the shown image, classifies wheel, pointer, touch
//! and keyboard input into zoom, pan and navigation intents, and projects the
//! siblings into a thumbnail strip. The host supplies file listing, resource
//! resolution and decoding through [`application::port::GalleryHost`].

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod application;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod plugin;

#[cfg(test)]
pub(crate) mod test_utils;

pub use gallery::ImageGalleryView;
