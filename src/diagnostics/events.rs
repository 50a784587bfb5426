// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.

use serde::{Deserialize, Serialize};
use std::time::Instant;

/// User-initiated gallery actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation Actions
    // ==========================================================================
    /// Navigate to the next sibling image.
    NavigateNext,

    /// Navigate to the previous sibling image.
    NavigatePrevious,

    /// Open a sibling from the thumbnail strip.
    OpenThumbnail { index: usize },

    /// Load an image into the view.
    LoadImage {
        #[serde(skip_serializing_if = "Option::is_none")]
        name: Option<String>,
    },

    // ==========================================================================
    // View Actions
    // ==========================================================================
    ZoomIn { scale: f32 },

    ZoomOut { scale: f32 },

    /// Reset zoom and pan to identity.
    ResetZoom,

    /// Finish a pan drag.
    Pan,

    /// Scroll the thumbnail strip.
    ScrollStrip { offset: f32 },
}

/// Categories of non-fatal issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// The display resource could not be resolved.
    ResolveFailed,
    /// Natural dimensions could not be decoded.
    DecodeFailed,
    /// The tab label could not be set.
    TabLabel,
    /// A completed load was superseded by a newer one.
    StaleLoad,
    /// The loaded image is missing from its folder listing.
    NotInListing,
    /// The host refused a view registration change.
    Registry,
}

/// A non-fatal issue with a short message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    Warning { warning: WarningEvent },
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// Monotonic time of the event.
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}
