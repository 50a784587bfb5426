// SPDX-License-Identifier: MPL-2.0
//! Host application port definition.
//!
//! The gallery never touches the file system, tabs or the renderer directly.
//! Everything it needs from the embedding application goes through
//! [`GalleryHost`].
//!
//! # Design Notes
//!
//! - Listing is synchronous; the host answers from its own file index
//! - Decoding is the only asynchronous step and is best effort
//! - Load requests are fire-and-forget: the host later calls back into
//!   `ImageGalleryView::load_file` (or `begin_load`/`finish_load`)

use crate::domain::media::{Dimensions, FileEntry, ImageRef};
use crate::error::Result;
use std::future::Future;
use std::path::Path;

/// Port for the embedding host application.
///
/// # Example
///
/// ```ignore
/// use iced_gallery::application::port::GalleryHost;
///
/// async fn natural_size<H: GalleryHost>(host: &H, image: &ImageRef) -> Option<Dimensions> {
///     let resource = host.resolve_display_resource(image).ok()?;
///     host.await_decode(&resource).await.ok()
/// }
/// ```
pub trait GalleryHost {
    /// Opaque handle the renderer can display (URL, texture id, file path...).
    type Resource: Clone;

    /// Lists every file currently known in `folder`.
    ///
    /// Entries may include unsupported files and files of other folders; the
    /// sibling index filters them.
    fn list_sibling_candidates(&self, folder: &Path) -> Vec<FileEntry>;

    /// Resolves an image to something the renderer can display.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be served.
    fn resolve_display_resource(&self, image: &ImageRef) -> Result<Self::Resource>;

    /// Waits for the renderer to report the natural size of a resource.
    ///
    /// The future owns everything it needs so the caller may drop the host
    /// borrow while it is pending.
    fn await_decode(
        &self,
        resource: &Self::Resource,
    ) -> impl Future<Output = Result<Dimensions>> + Send + 'static;

    /// Asks the host to open `image` in the current view.
    fn request_load(&mut self, image: &ImageRef);

    /// Sets the title of the tab hosting the view.
    ///
    /// # Errors
    ///
    /// Returns an error if the host has no tab to label; callers ignore it.
    fn set_tab_label(&mut self, label: &str) -> Result<()>;
}
