// SPDX-License-Identifier: MPL-2.0
//! Test utilities: float assertions and an in-memory host.
//!
//! Float comparisons go through `approx`, since `assert_eq!` cannot absorb
//! rounding error.

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

use crate::application::port::GalleryHost;
use crate::domain::media::{Dimensions, FileEntry, ImageRef};
use crate::error::{Error, Result};
use std::future::Future;
use std::path::{Path, PathBuf};

/// In-memory host that records what the gallery asks of it.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    /// Every file the host "knows", across all folders.
    pub files: Vec<FileEntry>,
    /// Paths `resolve_display_resource` refuses.
    pub missing: Vec<PathBuf>,
    /// Decoded size reported for every resource; `None` fails the decode.
    pub dimensions: Option<Dimensions>,
    pub fail_tab_label: bool,
    pub requested: Vec<ImageRef>,
    pub tab_label: Option<String>,
}

impl RecordingHost {
    /// Host over the given paths, decoding everything at 640x480.
    pub fn with_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: paths.into_iter().map(FileEntry::from_path).collect(),
            dimensions: Some(Dimensions::new(640, 480)),
            ..Self::default()
        }
    }
}

impl GalleryHost for RecordingHost {
    type Resource = PathBuf;

    fn list_sibling_candidates(&self, _folder: &Path) -> Vec<FileEntry> {
        // Unfiltered on purpose: the sibling index drops other folders.
        self.files.clone()
    }

    fn resolve_display_resource(&self, image: &ImageRef) -> Result<PathBuf> {
        if self.missing.iter().any(|p| p == image.path()) {
            return Err(Error::Io(format!("{} not found", image.path().display())));
        }
        Ok(image.path().to_path_buf())
    }

    fn await_decode(
        &self,
        resource: &PathBuf,
    ) -> impl Future<Output = Result<Dimensions>> + Send + 'static {
        let result = self
            .dimensions
            .ok_or_else(|| Error::Decode(format!("cannot decode {}", resource.display())));
        std::future::ready(result)
    }

    fn request_load(&mut self, image: &ImageRef) {
        self.requested.push(image.clone());
    }

    fn set_tab_label(&mut self, label: &str) -> Result<()> {
        if self.fail_tab_label {
            return Err(Error::Host("no tab".into()));
        }
        self.tab_label = Some(label.to_string());
        Ok(())
    }
}
