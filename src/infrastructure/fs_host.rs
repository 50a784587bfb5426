// SPDX-License-Identifier: MPL-2.0
//! [`GalleryHost`] over the local filesystem.
//!
//! Dimensions are probed on tokio's blocking pool: raster formats through
//! `image` (header only), SVG through `usvg`. Results are memoized in a
//! small LRU cache shared with in-flight probes.

use crate::application::port::GalleryHost;
use crate::config::DEFAULT_DIMENSION_CACHE_ENTRIES;
use crate::domain::media::{Dimensions, FileEntry, ImageExtension, ImageRef};
use crate::error::{Error, Result};
use lru::LruCache;
use resvg::usvg;
use std::collections::VecDeque;
use std::fs;
use std::future::Future;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

type DimensionCache = Arc<Mutex<LruCache<PathBuf, Dimensions>>>;

/// Filesystem-backed host for embedders that show local folders.
///
/// Load requests are queued; the embedding loop drains them with
/// [`FsGalleryHost::take_requested_load`] and feeds them back to the view.
#[derive(Debug)]
pub struct FsGalleryHost {
    dimensions: DimensionCache,
    requested: VecDeque<ImageRef>,
    tab_label: Option<String>,
}

impl Default for FsGalleryHost {
    fn default() -> Self {
        Self::new(DEFAULT_DIMENSION_CACHE_ENTRIES)
    }
}

impl FsGalleryHost {
    /// Creates a host caching up to `cache_entries` decoded sizes.
    #[must_use]
    pub fn new(cache_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(cache_entries).unwrap_or(NonZeroUsize::MIN);
        Self {
            dimensions: Arc::new(Mutex::new(LruCache::new(capacity))),
            requested: VecDeque::new(),
            tab_label: None,
        }
    }

    /// Oldest queued load request.
    pub fn take_requested_load(&mut self) -> Option<ImageRef> {
        self.requested.pop_front()
    }

    #[must_use]
    pub fn pending_loads(&self) -> usize {
        self.requested.len()
    }

    #[must_use]
    pub fn tab_label(&self) -> Option<&str> {
        self.tab_label.as_deref()
    }

    /// Cached size for `path`, without touching the disk.
    pub async fn cached_dimensions(&self, path: &Path) -> Option<Dimensions> {
        self.dimensions.lock().await.peek(path).copied()
    }
}

impl GalleryHost for FsGalleryHost {
    type Resource = PathBuf;

    fn list_sibling_candidates(&self, folder: &Path) -> Vec<FileEntry> {
        let entries = match fs::read_dir(folder) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("Cannot list {}: {err}", folder.display());
                return Vec::new();
            }
        };
        entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .map(|entry| FileEntry::from_path(entry.path()))
            .collect()
    }

    fn resolve_display_resource(&self, image: &ImageRef) -> Result<PathBuf> {
        let path = image.path();
        if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(Error::Io(format!("{} is not a readable file", path.display())))
        }
    }

    fn await_decode(
        &self,
        resource: &PathBuf,
    ) -> impl Future<Output = Result<Dimensions>> + Send + 'static {
        let cache = Arc::clone(&self.dimensions);
        let path = resource.clone();
        async move {
            if let Some(dimensions) = cache.lock().await.get(&path).copied() {
                return Ok(dimensions);
            }
            let probe_path = path.clone();
            let dimensions = tokio::task::spawn_blocking(move || probe_dimensions(&probe_path))
                .await
                .map_err(|e| Error::Decode(e.to_string()))??;
            cache.lock().await.put(path, dimensions);
            Ok(dimensions)
        }
    }

    fn request_load(&mut self, image: &ImageRef) {
        self.requested.push_back(image.clone());
    }

    fn set_tab_label(&mut self, label: &str) -> Result<()> {
        self.tab_label = Some(label.to_string());
        Ok(())
    }
}

/// Reads the natural size of an image file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its header is invalid or describes an empty image.
pub fn probe_dimensions(path: &Path) -> Result<Dimensions> {
    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImageExtension::parse)
        .is_some_and(ImageExtension::is_vector);

    let dimensions = if is_svg {
        let svg_data = fs::read(path)?;
        let tree = usvg::Tree::from_data(&svg_data, &usvg::Options::default())
            .map_err(|e| Error::Decode(e.to_string()))?;
        let size = tree.size().to_int_size();
        Dimensions::new(size.width(), size.height())
    } else {
        let (width, height) = image_rs::image_dimensions(path)?;
        Dimensions::new(width, height)
    };

    if dimensions.is_empty() {
        return Err(Error::Decode(format!("{} has empty dimensions", path.display())));
    }
    Ok(dimensions)
}
