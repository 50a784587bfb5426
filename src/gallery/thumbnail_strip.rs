// SPDX-License-Identifier: MPL-2.0
//! Thumbnail strip: a horizontal, scrollable projection of the sibling list.
//!
//! The strip owns no navigation state. It mirrors the [`SiblingIndex`] it was
//! last updated with, marks the loaded image active and computes where the
//! viewport should scroll so the active entry sits in the middle.

use crate::application::query::SiblingIndex;
use crate::config::Config;
use crate::domain::media::ImageRef;

/// Entry geometry along the strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    pub thumbnail_width: f32,
    pub spacing: f32,
}

impl StripLayout {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            thumbnail_width: config.thumbnail_width(),
            spacing: config.thumbnail_spacing(),
        }
    }

    fn pitch(self) -> f32 {
        self.thumbnail_width + self.spacing
    }

    #[allow(clippy::cast_precision_loss)]
    fn entry_start(self, index: usize) -> f32 {
        index as f32 * self.pitch()
    }

    #[allow(clippy::cast_precision_loss)]
    fn content_width(self, count: usize) -> f32 {
        if count == 0 {
            0.0
        } else {
            count as f32 * self.pitch() - self.spacing
        }
    }
}

impl Default for StripLayout {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// One thumbnail.
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailEntry {
    pub index: usize,
    pub image: ImageRef,
    /// File stem shown under the thumbnail.
    pub label: String,
    pub is_active: bool,
}

impl ThumbnailEntry {
    /// Accessible description of the thumbnail image.
    #[must_use]
    pub fn alt_text(&self) -> &str {
        self.image.name()
    }
}

/// Where the strip viewport should scroll to reveal the active entry.
///
/// The renderer animates there smoothly; vertically it scrolls to the
/// nearest edge only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRequest {
    pub offset_x: f32,
    pub smooth: bool,
}

#[derive(Debug, Clone)]
pub struct ThumbnailStrip {
    layout: StripLayout,
    entries: Vec<ThumbnailEntry>,
    active: Option<usize>,
    scroll_offset: f32,
    viewport_width: f32,
}

impl Default for ThumbnailStrip {
    fn default() -> Self {
        Self::new(StripLayout::default())
    }
}

impl ThumbnailStrip {
    #[must_use]
    pub fn new(layout: StripLayout) -> Self {
        Self {
            layout,
            entries: Vec::new(),
            active: None,
            scroll_offset: 0.0,
            viewport_width: 0.0,
        }
    }

    /// Re-projects the sibling list.
    ///
    /// Returns the scroll request bringing the active entry into view, or
    /// `None` when no entry is active.
    pub fn update(&mut self, siblings: &SiblingIndex) -> Option<ScrollRequest> {
        let active = siblings.current_index();
        self.entries = siblings
            .siblings()
            .iter()
            .enumerate()
            .map(|(index, image)| ThumbnailEntry {
                index,
                image: image.clone(),
                label: image.basename().to_string(),
                is_active: Some(index) == active,
            })
            .collect();
        self.active = active;
        self.scroll_offset = self.clamp_offset(self.scroll_offset);

        let request = self.scroll_to_active()?;
        self.scroll_offset = request.offset_x;
        Some(request)
    }

    /// Scroll request centering the active entry, clamped to the content.
    #[must_use]
    pub fn scroll_to_active(&self) -> Option<ScrollRequest> {
        let index = self.active?;
        let center =
            self.layout.entry_start(index) + self.layout.thumbnail_width / 2.0;
        Some(ScrollRequest {
            offset_x: self.clamp_offset(center - self.viewport_width / 2.0),
            smooth: true,
        })
    }

    /// Applies a wheel scroll and returns the new offset.
    pub fn scroll_by(&mut self, dx: f32) -> f32 {
        if dx.is_finite() {
            self.scroll_offset = self.clamp_offset(self.scroll_offset + dx);
        }
        self.scroll_offset
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.scroll_offset = self.clamp_offset(self.scroll_offset);
    }

    /// Index of the entry under a strip-local horizontal position.
    #[must_use]
    pub fn entry_at(&self, x: f32) -> Option<usize> {
        let content_x = x + self.scroll_offset;
        if !content_x.is_finite() || content_x < 0.0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let index = (content_x / self.layout.pitch()).floor() as usize;
        let within = content_x - self.layout.entry_start(index);
        (index < self.entries.len() && within <= self.layout.thumbnail_width).then_some(index)
    }

    /// Image to navigate to when `index` is clicked; `None` for the active
    /// entry or an unknown index.
    #[must_use]
    pub fn click(&self, index: usize) -> Option<&ImageRef> {
        self.entries
            .get(index)
            .filter(|entry| !entry.is_active)
            .map(|entry| &entry.image)
    }

    #[must_use]
    pub fn entries(&self) -> &[ThumbnailEntry] {
        &self.entries
    }

    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    #[must_use]
    pub fn content_width(&self) -> f32 {
        self.layout.content_width(self.entries.len())
    }

    #[must_use]
    pub fn max_scroll(&self) -> f32 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    fn clamp_offset(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll())
    }
}
