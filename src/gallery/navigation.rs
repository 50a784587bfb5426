// SPDX-License-Identifier: MPL-2.0
//! Navigation across the sibling list.
//!
//! The controller never loads anything itself: it picks the target sibling
//! and asks the host to open it. Relative steps always start from the loaded
//! image. While a request is in flight its target is remembered as pending,
//! and a repeated step towards the same neighbour is coalesced into it, so a
//! burst of wheel events moves one image, not one image per event.

use crate::application::port::GalleryHost;
use crate::application::query::SiblingIndex;
use crate::domain::media::ImageRef;

/// Direction of a relative navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Navigate to previous image.
    Previous,
    /// Navigate to next image.
    Next,
}

impl Direction {
    /// Maps a signed delta to a direction; zero and NaN have none.
    #[must_use]
    pub fn from_delta(delta: f32) -> Option<Self> {
        if delta > 0.0 {
            Some(Self::Next)
        } else if delta < 0.0 {
            Some(Self::Previous)
        } else {
            None
        }
    }

    #[must_use]
    pub fn offset(self) -> isize {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

/// Why a navigation request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    EmptyList,
    /// The loaded image is not part of the list.
    NoCurrent,
    AtBoundary,
    AlreadyShown,
    /// The same target is already on its way.
    AlreadyRequested,
    NotASibling,
}

/// Result of a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Requested { index: usize, image: ImageRef },
    Ignored(Ignored),
}

impl Outcome {
    #[must_use]
    pub fn is_requested(&self) -> bool {
        matches!(self, Self::Requested { .. })
    }
}

/// Tracks the in-flight navigation target.
#[derive(Debug, Clone, Default)]
pub struct NavigationController {
    pending: Option<(usize, ImageRef)>,
}

impl NavigationController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index requested but not loaded yet.
    #[must_use]
    pub fn pending(&self) -> Option<usize> {
        self.pending.as_ref().map(|(index, _)| *index)
    }

    #[must_use]
    pub fn pending_image(&self) -> Option<&ImageRef> {
        self.pending.as_ref().map(|(_, image)| image)
    }

    /// Forgets the pending target, once a load completed and the list was
    /// rebuilt around it.
    pub fn settle(&mut self) {
        self.pending = None;
    }

    /// Moves one step from the loaded image.
    ///
    /// Does not wrap around; requests beyond either end are ignored. A step
    /// whose target is already pending is dropped; a step in the other
    /// direction supersedes the pending target.
    pub fn go_to<H: GalleryHost>(
        &mut self,
        siblings: &SiblingIndex,
        direction: Direction,
        host: &mut H,
    ) -> Outcome {
        if siblings.is_empty() {
            return Outcome::Ignored(Ignored::EmptyList);
        }
        let Some(origin) = siblings.current_index() else {
            return Outcome::Ignored(Ignored::NoCurrent);
        };
        let Some(target) = origin
            .checked_add_signed(direction.offset())
            .filter(|&target| target < siblings.len())
        else {
            return Outcome::Ignored(Ignored::AtBoundary);
        };
        if self.pending() == Some(target) {
            return Outcome::Ignored(Ignored::AlreadyRequested);
        }
        self.request(siblings, target, host)
    }

    /// Opens a specific sibling (thumbnail click).
    pub fn go_to_image<H: GalleryHost>(
        &mut self,
        siblings: &SiblingIndex,
        image: &ImageRef,
        host: &mut H,
    ) -> Outcome {
        let Some(target) = siblings.position_of(image) else {
            return Outcome::Ignored(Ignored::NotASibling);
        };
        if Some(target) == siblings.current_index() {
            return Outcome::Ignored(Ignored::AlreadyShown);
        }
        if Some(target) == self.pending() {
            return Outcome::Ignored(Ignored::AlreadyRequested);
        }
        self.request(siblings, target, host)
    }

    pub fn show_next<H: GalleryHost>(&mut self, siblings: &SiblingIndex, host: &mut H) -> Outcome {
        self.go_to(siblings, Direction::Next, host)
    }

    pub fn show_previous<H: GalleryHost>(
        &mut self,
        siblings: &SiblingIndex,
        host: &mut H,
    ) -> Outcome {
        self.go_to(siblings, Direction::Previous, host)
    }

    fn request<H: GalleryHost>(
        &mut self,
        siblings: &SiblingIndex,
        target: usize,
        host: &mut H,
    ) -> Outcome {
        let Some(image) = siblings.get(target).cloned() else {
            return Outcome::Ignored(Ignored::AtBoundary);
        };
        log::debug!("Requesting load of {}", image.path().display());
        self.pending = Some((target, image.clone()));
        host.request_load(&image);
        Outcome::Requested {
            index: target,
            image,
        }
    }
}
