// SPDX-License-Identifier: MPL-2.0
//! View transform value type.

use iced_core::Vector;

/// Scale and pan applied to the displayed image, relative to the viewport
/// center.
///
/// Panning is only meaningful above the 1.0 baseline; [`ViewTransform::normalized`]
/// enforces that an unzoomed or zoomed-out transform carries no offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    #[must_use]
    pub fn new(scale: f32, translate_x: f32, translate_y: f32) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    #[must_use]
    pub fn translation(&self) -> Vector {
        Vector::new(self.translate_x, self.translate_y)
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns whether the image is magnified past the baseline.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.scale > 1.0
    }

    /// Drops any offset when the scale is at or below the baseline.
    #[must_use]
    pub fn normalized(self) -> Self {
        if self.scale <= 1.0 {
            Self {
                scale: self.scale,
                translate_x: 0.0,
                translate_y: 0.0,
            }
        } else {
            self
        }
    }

    /// Cursor affordance for this transform outside of an active drag.
    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        if self.is_zoomed_in() {
            CursorHint::Grab
        } else {
            CursorHint::Default
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Pointer affordance exposed to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorHint {
    #[default]
    Default,
    /// Zoomed in, the image can be grabbed.
    Grab,
    /// A pan drag is in progress.
    Grabbing,
}

impl From<CursorHint> for iced_core::mouse::Interaction {
    fn from(hint: CursorHint) -> Self {
        match hint {
            CursorHint::Default => iced_core::mouse::Interaction::Idle,
            CursorHint::Grab => iced_core::mouse::Interaction::Grab,
            CursorHint::Grabbing => iced_core::mouse::Interaction::Grabbing,
        }
    }
}
