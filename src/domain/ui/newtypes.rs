// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for interaction tuning values,
//! ensuring they are always within valid ranges.

use crate::config::defaults::{
    DEFAULT_DOUBLE_CLICK_MS, DEFAULT_MAX_SCALE, DEFAULT_MIN_SCALE, DEFAULT_SNAP_EPSILON,
    DEFAULT_SWIPE_MAX_DURATION_MS, DEFAULT_SWIPE_MIN_DISTANCE_PX, DEFAULT_ZOOM_STEP,
    MAX_DOUBLE_CLICK_MS, MAX_SNAP_EPSILON, MAX_SWIPE_DISTANCE_PX, MAX_SWIPE_DURATION_MS,
    MAX_ZOOM_STEP, MIN_DOUBLE_CLICK_MS, MIN_SWIPE_DISTANCE_PX, MIN_SWIPE_DURATION_MS,
    MIN_ZOOM_STEP,
};
use std::time::Duration;

/// Upper bound accepted for a configured maximum scale.
const SCALE_CEILING: f32 = 64.0;

/// Lower bound accepted for a configured minimum scale.
const SCALE_FLOOR: f32 = 0.01;

// =============================================================================
// ScaleBounds
// =============================================================================

/// Inclusive scale range, guaranteed to contain the 1.0 baseline.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::ui::ScaleBounds;
///
/// let bounds = ScaleBounds::new(0.2, 5.0);
/// assert_eq!(bounds.clamp(9.0), 5.0);
///
/// // A minimum above the baseline is pulled back to 1.0
/// assert_eq!(ScaleBounds::new(2.0, 5.0).min(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBounds {
    min: f32,
    max: f32,
}

impl ScaleBounds {
    /// Creates a new scale range, clamping both ends around 1.0.
    #[must_use]
    pub fn new(min: f32, max: f32) -> Self {
        let min = if min.is_finite() { min } else { DEFAULT_MIN_SCALE };
        let max = if max.is_finite() { max } else { DEFAULT_MAX_SCALE };
        Self {
            min: min.clamp(SCALE_FLOOR, 1.0),
            max: max.clamp(1.0, SCALE_CEILING),
        }
    }

    #[must_use]
    pub fn min(self) -> f32 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f32 {
        self.max
    }

    /// Clamps a scale into the range.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        scale.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(self, scale: f32) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

impl Default for ScaleBounds {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Scale increment per zoom step, guaranteed to be within 0.01–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(step: f32) -> Self {
        if !step.is_finite() {
            return Self::default();
        }
        Self(step.clamp(MIN_ZOOM_STEP, MAX_ZOOM_STEP))
    }

    /// Returns the raw step value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_STEP)
    }
}

// =============================================================================
// SnapEpsilon
// =============================================================================

/// Tolerance around 1.0 within which a zoom result snaps back to identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapEpsilon(f32);

impl SnapEpsilon {
    #[must_use]
    pub fn new(epsilon: f32) -> Self {
        if !epsilon.is_finite() {
            return Self::default();
        }
        Self(epsilon.clamp(0.0, MAX_SNAP_EPSILON))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether `scale` is close enough to the baseline to snap.
    #[must_use]
    pub fn is_baseline(self, scale: f32) -> bool {
        (scale - 1.0).abs() <= self.0
    }
}

impl Default for SnapEpsilon {
    fn default() -> Self {
        Self(DEFAULT_SNAP_EPSILON)
    }
}

// =============================================================================
// SwipeThresholds
// =============================================================================

/// Distance and time limits separating an intentional flick from a slow drag
/// or an accidental touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    min_distance: f32,
    max_duration: Duration,
}

impl SwipeThresholds {
    /// Creates thresholds from pixel and millisecond values, clamping both.
    #[must_use]
    pub fn new(min_distance_px: f32, max_duration_ms: u64) -> Self {
        let min_distance = if min_distance_px.is_finite() {
            min_distance_px.clamp(MIN_SWIPE_DISTANCE_PX, MAX_SWIPE_DISTANCE_PX)
        } else {
            DEFAULT_SWIPE_MIN_DISTANCE_PX
        };
        let max_duration_ms = max_duration_ms.clamp(MIN_SWIPE_DURATION_MS, MAX_SWIPE_DURATION_MS);
        Self {
            min_distance,
            max_duration: Duration::from_millis(max_duration_ms),
        }
    }

    #[must_use]
    pub fn min_distance(self) -> f32 {
        self.min_distance
    }

    #[must_use]
    pub fn max_duration(self) -> Duration {
        self.max_duration
    }

    /// Returns whether a horizontal displacement completed in `elapsed`
    /// qualifies as a swipe.
    #[must_use]
    pub fn accepts(self, displacement_x: f32, elapsed: Duration) -> bool {
        elapsed < self.max_duration && displacement_x.abs() > self.min_distance
    }
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_MIN_DISTANCE_PX, DEFAULT_SWIPE_MAX_DURATION_MS)
    }
}

// =============================================================================
// DoubleClickWindow
// =============================================================================

/// Maximum delay between two presses forming a double-click or double-tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleClickWindow(Duration);

impl DoubleClickWindow {
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(
            ms.clamp(MIN_DOUBLE_CLICK_MS, MAX_DOUBLE_CLICK_MS),
        ))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for DoubleClickWindow {
    fn default() -> Self {
        Self::from_millis(DEFAULT_DOUBLE_CLICK_MS)
    }
}
