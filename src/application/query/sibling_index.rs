// SPDX-License-Identifier: MPL-2.0
//! Sibling index: the navigable, name-sorted list of images sharing the
//! loaded image's folder.
//!
//! The list is rebuilt in full on every image load from whatever the host
//! currently reports for the folder; there is no incremental diffing.

use super::collation::compare_names;
use crate::domain::media::{FileEntry, ImageRef};

/// Ordered images of one folder plus the position of the loaded image.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiblingIndex {
    siblings: Vec<ImageRef>,
    current_index: Option<usize>,
}

impl SiblingIndex {
    /// Creates an empty index (no list, no current image).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the sibling list for `loaded` from a folder listing.
    ///
    /// Keeps supported images living in the same folder as `loaded`, sorts
    /// them by display name and locates `loaded` by path. If the loaded file
    /// is missing from the listing (deleted meanwhile, or an empty folder) the
    /// list is still built but `current_index` is `None`.
    #[must_use]
    pub fn rebuild(loaded: &ImageRef, candidates: &[FileEntry]) -> Self {
        let folder = loaded.parent();

        let mut siblings: Vec<ImageRef> = candidates
            .iter()
            .filter(|entry| entry.parent() == folder)
            .filter_map(|entry| ImageRef::from_entry(entry.clone()))
            .collect();

        // Stable: equal names keep their listing order.
        siblings.sort_by(|a, b| compare_names(a.name(), b.name()));

        let current_index = siblings.iter().position(|s| s.path() == loaded.path());

        Self {
            siblings,
            current_index,
        }
    }

    #[must_use]
    pub fn siblings(&self) -> &[ImageRef] {
        &self.siblings
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Returns the loaded image if it is part of the list.
    #[must_use]
    pub fn current(&self) -> Option<&ImageRef> {
        self.current_index.and_then(|idx| self.siblings.get(idx))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ImageRef> {
        self.siblings.get(index)
    }

    /// Position of an image in the list, by path.
    #[must_use]
    pub fn position_of(&self, image: &ImageRef) -> Option<usize> {
        self.siblings.iter().position(|s| s == image)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.siblings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.siblings.is_empty()
    }
}
