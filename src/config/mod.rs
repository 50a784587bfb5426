// SPDX-License-Identifier: MPL-2.0
//! Gallery configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[zoom]` - Scale bounds, step size and snap-back tolerance
//! - `[gestures]` - Swipe, double-click and wheel tuning
//! - `[thumbnails]` - Thumbnail strip geometry
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass an override directory to `load_with_override()`
//! 3. Set `ICED_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! Raw values are stored as written; the accessor methods clamp them through
//! the UI newtypes, so an out-of-range file never reaches the engine.
//!
//! # Examples
//!
//! ```no_run
//! use iced_gallery::config;
//!
//! let (mut config, _warning) = config::load();
//! config.zoom.max_scale = Some(8.0);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::ui::{DoubleClickWindow, ScaleBounds, SnapEpsilon, SwipeThresholds, ZoomStep};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGallery";

/// Environment variable overriding the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_GALLERY_CONFIG_DIR";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const WARNING_CONFIG_LOAD_ERROR: &str = "warning-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Zoom behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ZoomConfig {
    #[serde(default = "default_min_scale")]
    pub min_scale: Option<f32>,

    #[serde(default = "default_max_scale")]
    pub max_scale: Option<f32>,

    /// Scale added or removed per wheel notch.
    #[serde(default = "default_zoom_step")]
    pub step: Option<f32>,

    /// Distance from 1.0 below which a zoom result snaps back to identity.
    #[serde(default = "default_snap_epsilon")]
    pub snap_epsilon: Option<f32>,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
            step: default_zoom_step(),
            snap_epsilon: default_snap_epsilon(),
        }
    }
}

/// Gesture classification thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GesturesConfig {
    #[serde(default = "default_swipe_min_distance_px")]
    pub swipe_min_distance_px: Option<f32>,

    #[serde(default = "default_swipe_max_duration_ms")]
    pub swipe_max_duration_ms: Option<u64>,

    #[serde(default = "default_double_click_ms")]
    pub double_click_ms: Option<u64>,

    /// Pixels scrolled on the thumbnail strip per wheel line.
    #[serde(default = "default_strip_line_height_px")]
    pub strip_line_height_px: Option<f32>,
}

impl Default for GesturesConfig {
    fn default() -> Self {
        Self {
            swipe_min_distance_px: default_swipe_min_distance_px(),
            swipe_max_duration_ms: default_swipe_max_duration_ms(),
            double_click_ms: default_double_click_ms(),
            strip_line_height_px: default_strip_line_height_px(),
        }
    }
}

/// Thumbnail strip layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThumbnailsConfig {
    #[serde(default = "default_thumbnail_width_px")]
    pub width_px: Option<f32>,

    #[serde(default = "default_thumbnail_spacing_px")]
    pub spacing_px: Option<f32>,
}

impl Default for ThumbnailsConfig {
    fn default() -> Self {
        Self {
            width_px: default_thumbnail_width_px(),
            spacing_px: default_thumbnail_spacing_px(),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub zoom: ZoomConfig,

    #[serde(default)]
    pub gestures: GesturesConfig,

    #[serde(default)]
    pub thumbnails: ThumbnailsConfig,
}

impl Config {
    #[must_use]
    pub fn scale_bounds(&self) -> ScaleBounds {
        ScaleBounds::new(
            self.zoom.min_scale.unwrap_or(DEFAULT_MIN_SCALE),
            self.zoom.max_scale.unwrap_or(DEFAULT_MAX_SCALE),
        )
    }

    #[must_use]
    pub fn zoom_step(&self) -> ZoomStep {
        ZoomStep::new(self.zoom.step.unwrap_or(DEFAULT_ZOOM_STEP))
    }

    #[must_use]
    pub fn snap_epsilon(&self) -> SnapEpsilon {
        SnapEpsilon::new(self.zoom.snap_epsilon.unwrap_or(DEFAULT_SNAP_EPSILON))
    }

    #[must_use]
    pub fn swipe_thresholds(&self) -> SwipeThresholds {
        SwipeThresholds::new(
            self.gestures
                .swipe_min_distance_px
                .unwrap_or(DEFAULT_SWIPE_MIN_DISTANCE_PX),
            self.gestures
                .swipe_max_duration_ms
                .unwrap_or(DEFAULT_SWIPE_MAX_DURATION_MS),
        )
    }

    #[must_use]
    pub fn double_click_window(&self) -> DoubleClickWindow {
        DoubleClickWindow::from_millis(
            self.gestures
                .double_click_ms
                .unwrap_or(DEFAULT_DOUBLE_CLICK_MS),
        )
    }

    /// Strip scroll per wheel line; non-positive values fall back to default.
    #[must_use]
    pub fn strip_line_height(&self) -> f32 {
        positive_or(
            self.gestures.strip_line_height_px,
            DEFAULT_STRIP_LINE_HEIGHT_PX,
        )
    }

    #[must_use]
    pub fn thumbnail_width(&self) -> f32 {
        positive_or(self.thumbnails.width_px, DEFAULT_THUMBNAIL_WIDTH_PX)
    }

    #[must_use]
    pub fn thumbnail_spacing(&self) -> f32 {
        match self.thumbnails.spacing_px {
            Some(v) if v.is_finite() && v >= 0.0 => v,
            _ => DEFAULT_THUMBNAIL_SPACING_PX,
        }
    }
}

fn positive_or(value: Option<f32>, fallback: f32) -> f32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => fallback,
    }
}

// =============================================================================
// Default Value Functions (for serde)
// =============================================================================

#[allow(clippy::unnecessary_wraps)]
fn default_min_scale() -> Option<f32> {
    Some(DEFAULT_MIN_SCALE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_max_scale() -> Option<f32> {
    Some(DEFAULT_MAX_SCALE)
}

#[allow(clippy::unnecessary_wraps)]
fn default_zoom_step() -> Option<f32> {
    Some(DEFAULT_ZOOM_STEP)
}

#[allow(clippy::unnecessary_wraps)]
fn default_snap_epsilon() -> Option<f32> {
    Some(DEFAULT_SNAP_EPSILON)
}

#[allow(clippy::unnecessary_wraps)]
fn default_swipe_min_distance_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_MIN_DISTANCE_PX)
}

#[allow(clippy::unnecessary_wraps)]
fn default_swipe_max_duration_ms() -> Option<u64> {
    Some(DEFAULT_SWIPE_MAX_DURATION_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_double_click_ms() -> Option<u64> {
    Some(DEFAULT_DOUBLE_CLICK_MS)
}

#[allow(clippy::unnecessary_wraps)]
fn default_strip_line_height_px() -> Option<f32> {
    Some(DEFAULT_STRIP_LINE_HEIGHT_PX)
}

#[allow(clippy::unnecessary_wraps)]
fn default_thumbnail_width_px() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_WIDTH_PX)
}

#[allow(clippy::unnecessary_wraps)]
fn default_thumbnail_spacing_px() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_SPACING_PX)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory.
///
/// # Resolution Order
///
/// 1. `override_path` parameter (if `Some`)
/// 2. `ICED_GALLERY_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory with the app name appended
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If an existing file cannot
/// be read or parsed, returns the default config with a warning key.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("Ignoring config at {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some(WARNING_CONFIG_LOAD_ERROR.to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
