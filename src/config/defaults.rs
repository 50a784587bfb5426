// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the gallery. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Scale bounds, step and snap tolerance
//! - **Gestures**: Swipe, double-click and wheel thresholds
//! - **Thumbnails**: Strip layout metrics
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Smallest allowed scale factor.
pub const DEFAULT_MIN_SCALE: f32 = 0.2;

/// Largest allowed scale factor.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Scale added or removed per zoom step.
pub const DEFAULT_ZOOM_STEP: f32 = 0.1;

/// Minimum allowed zoom step.
pub const MIN_ZOOM_STEP: f32 = 0.01;

/// Maximum allowed zoom step.
pub const MAX_ZOOM_STEP: f32 = 1.0;

/// Distance from 1.0 under which a zoom result snaps back to identity.
pub const DEFAULT_SNAP_EPSILON: f32 = 0.01;

/// Upper bound for the snap tolerance.
pub const MAX_SNAP_EPSILON: f32 = 0.1;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel (logical px) for a touch to count as a swipe.
pub const DEFAULT_SWIPE_MIN_DISTANCE_PX: f32 = 50.0;

/// Minimum configurable swipe distance.
pub const MIN_SWIPE_DISTANCE_PX: f32 = 10.0;

/// Maximum configurable swipe distance.
pub const MAX_SWIPE_DISTANCE_PX: f32 = 400.0;

/// Longest touch (ms) that still counts as a swipe.
pub const DEFAULT_SWIPE_MAX_DURATION_MS: u64 = 300;

/// Minimum configurable swipe duration.
pub const MIN_SWIPE_DURATION_MS: u64 = 50;

/// Maximum configurable swipe duration.
pub const MAX_SWIPE_DURATION_MS: u64 = 2000;

/// Window (ms) in which two presses form a double-click or double-tap.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 350;

/// Minimum configurable double-click window.
pub const MIN_DOUBLE_CLICK_MS: u64 = 100;

/// Maximum configurable double-click window.
pub const MAX_DOUBLE_CLICK_MS: u64 = 1000;

/// Pixels per wheel "line" when normalizing wheel deltas into steps.
pub const WHEEL_PIXELS_PER_STEP: f32 = 120.0;

/// Farthest a contact may travel (logical px) and still count as a tap.
pub const TAP_SLOP_PX: f32 = 8.0;

/// Pixels scrolled on the thumbnail strip per wheel line.
pub const DEFAULT_STRIP_LINE_HEIGHT_PX: f32 = 40.0;

// ==========================================================================
// Thumbnail Strip Defaults
// ==========================================================================

/// Width of one thumbnail entry.
pub const DEFAULT_THUMBNAIL_WIDTH_PX: f32 = 80.0;

/// Horizontal gap between thumbnail entries.
pub const DEFAULT_THUMBNAIL_SPACING_PX: f32 = 6.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

// ==========================================================================
// Filesystem Host Defaults
// ==========================================================================

/// Decoded dimensions kept by the filesystem host.
pub const DEFAULT_DIMENSION_CACHE_ENTRIES: usize = 64;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(DEFAULT_MIN_SCALE > 0.0);
    assert!(DEFAULT_MIN_SCALE <= 1.0);
    assert!(DEFAULT_MAX_SCALE >= 1.0);
    assert!(MIN_ZOOM_STEP > 0.0);
    assert!(DEFAULT_ZOOM_STEP >= MIN_ZOOM_STEP);
    assert!(DEFAULT_ZOOM_STEP <= MAX_ZOOM_STEP);
    assert!(DEFAULT_SNAP_EPSILON >= 0.0);
    assert!(DEFAULT_SNAP_EPSILON <= MAX_SNAP_EPSILON);

    // Gesture validation
    assert!(DEFAULT_SWIPE_MIN_DISTANCE_PX >= MIN_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_SWIPE_MIN_DISTANCE_PX <= MAX_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_SWIPE_MAX_DURATION_MS >= MIN_SWIPE_DURATION_MS);
    assert!(DEFAULT_SWIPE_MAX_DURATION_MS <= MAX_SWIPE_DURATION_MS);
    assert!(DEFAULT_DOUBLE_CLICK_MS >= MIN_DOUBLE_CLICK_MS);
    assert!(DEFAULT_DOUBLE_CLICK_MS <= MAX_DOUBLE_CLICK_MS);
    assert!(WHEEL_PIXELS_PER_STEP > 0.0);
    assert!(TAP_SLOP_PX > 0.0);
    assert!(TAP_SLOP_PX < MIN_SWIPE_DISTANCE_PX);
    assert!(DEFAULT_STRIP_LINE_HEIGHT_PX > 0.0);

    // Thumbnail validation
    assert!(DEFAULT_THUMBNAIL_WIDTH_PX > 0.0);
    assert!(DEFAULT_THUMBNAIL_SPACING_PX >= 0.0);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIMENSION_CACHE_ENTRIES > 0);
};
