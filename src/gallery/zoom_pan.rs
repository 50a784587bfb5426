// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan state for the displayed image.
//!
//! Two interchangeable controllers implement [`ZoomPan`]:
//!
//! - [`HandRolledZoomPan`] owns the [`ViewTransform`] and does the math itself.
//! - [`DelegatedZoomPan`] drives an external [`GestureEngine`] (a binding to a
//!   native pan/zoom library) and normalizes whatever it reports back.
//!
//! Both enforce the same rules: the scale stays inside the configured
//! bounds, a result within the snap tolerance of 1.0 becomes the identity,
//! and a transform at or below 1.0 carries no translation.

use crate::config::Config;
use crate::domain::ui::{ScaleBounds, SnapEpsilon, ViewTransform, ZoomStep};
use iced_core::{Point, Size, Vector};

/// Bundled zoom tuning.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomSettings {
    pub bounds: ScaleBounds,
    pub step: ZoomStep,
    pub snap: SnapEpsilon,
}

impl ZoomSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            bounds: config.scale_bounds(),
            step: config.zoom_step(),
            snap: config.snap_epsilon(),
        }
    }

    /// Applies the snap-back rule and the no-pan-below-baseline rule.
    #[must_use]
    pub fn settle(&self, transform: ViewTransform) -> ViewTransform {
        if self.snap.is_baseline(transform.scale) {
            ViewTransform::IDENTITY
        } else {
            transform.normalized()
        }
    }
}

/// Rescales `transform` to `scale` keeping the content under `anchor` fixed.
///
/// `anchor` is in viewport coordinates; the transform translates relative to
/// the viewport center.
#[must_use]
pub fn rescale_about(
    transform: ViewTransform,
    scale: f32,
    anchor: Point,
    viewport: Size,
) -> ViewTransform {
    let ratio = scale / transform.scale;
    let dx = (viewport.width / 2.0 + transform.translate_x) - anchor.x;
    let dy = (viewport.height / 2.0 + transform.translate_y) - anchor.y;
    ViewTransform::new(
        scale,
        transform.translate_x + dx * (ratio - 1.0),
        transform.translate_y + dy * (ratio - 1.0),
    )
}

fn viewport_center(viewport: Size) -> Point {
    Point::new(viewport.width / 2.0, viewport.height / 2.0)
}

// =============================================================================
// ZoomPan Trait
// =============================================================================

/// Capability set shared by both controllers.
pub trait ZoomPan {
    /// Current transform.
    fn transform(&self) -> ViewTransform;

    fn scale(&self) -> f32 {
        self.transform().scale
    }

    /// Zooms by `steps` (positive zooms in), anchored at `anchor` or at the
    /// viewport center.
    fn zoom_by(&mut self, steps: f32, anchor: Option<Point>) -> ViewTransform;

    /// Moves the image; a no-op that clears the offset at or below 1.0.
    fn pan_by(&mut self, delta: Vector) -> ViewTransform;

    /// Returns to the identity transform.
    fn reset(&mut self) -> ViewTransform;

    fn set_viewport(&mut self, size: Size);

    fn viewport(&self) -> Size;

    /// Whether two-finger pinches should be forwarded to [`ZoomPan::pinch`].
    fn handles_pinch(&self) -> bool {
        false
    }

    /// Applies a pinch update between two contact snapshots.
    fn pinch(&mut self, _previous: [Point; 2], _current: [Point; 2]) -> ViewTransform {
        self.transform()
    }
}

// =============================================================================
// Hand-rolled Controller
// =============================================================================

/// Controller that owns the transform.
#[derive(Debug, Clone)]
pub struct HandRolledZoomPan {
    transform: ViewTransform,
    settings: ZoomSettings,
    viewport: Size,
}

impl HandRolledZoomPan {
    #[must_use]
    pub fn new(settings: ZoomSettings) -> Self {
        Self {
            transform: ViewTransform::IDENTITY,
            settings,
            viewport: Size::ZERO,
        }
    }

    #[must_use]
    pub fn settings(&self) -> ZoomSettings {
        self.settings
    }
}

impl Default for HandRolledZoomPan {
    fn default() -> Self {
        Self::new(ZoomSettings::default())
    }
}

impl ZoomPan for HandRolledZoomPan {
    fn transform(&self) -> ViewTransform {
        self.transform
    }

    fn zoom_by(&mut self, steps: f32, anchor: Option<Point>) -> ViewTransform {
        if !steps.is_finite() || steps == 0.0 {
            return self.transform;
        }
        let target = self
            .settings
            .bounds
            .clamp(self.transform.scale + steps * self.settings.step.value());
        let anchor = anchor.unwrap_or_else(|| viewport_center(self.viewport));
        let rescaled = rescale_about(self.transform, target, anchor, self.viewport);
        self.transform = self.settings.settle(rescaled);
        self.transform
    }

    fn pan_by(&mut self, delta: Vector) -> ViewTransform {
        let moved = ViewTransform::new(
            self.transform.scale,
            self.transform.translate_x + delta.x,
            self.transform.translate_y + delta.y,
        );
        self.transform = moved.normalized();
        self.transform
    }

    fn reset(&mut self) -> ViewTransform {
        self.transform = ViewTransform::IDENTITY;
        self.transform
    }

    fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

// =============================================================================
// Delegated Controller
// =============================================================================

/// Binding to an external pan/zoom library that owns its own state.
///
/// Scales are absolute. `zoom` keeps the content under `focal` fixed, or the
/// center when `focal` is `None`.
pub trait GestureEngine {
    fn zoom(&mut self, scale: f32, focal: Option<Point>);

    /// Sets the absolute translation.
    fn pan(&mut self, translate: Vector);

    fn reset(&mut self);

    fn get_scale(&self) -> f32;

    fn get_pan(&self) -> Vector;

    fn set_viewport(&mut self, _size: Size) {}

    fn supports_pinch(&self) -> bool {
        false
    }

    /// Native pinch handling between two contact snapshots.
    fn pinch(&mut self, _previous: [Point; 2], _current: [Point; 2]) {}
}

/// Controller that delegates to a [`GestureEngine`].
pub struct DelegatedZoomPan {
    engine: Box<dyn GestureEngine>,
    settings: ZoomSettings,
    viewport: Size,
}

impl std::fmt::Debug for DelegatedZoomPan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DelegatedZoomPan")
            .field("transform", &self.transform())
            .field("settings", &self.settings)
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

impl DelegatedZoomPan {
    #[must_use]
    pub fn new(engine: Box<dyn GestureEngine>, settings: ZoomSettings) -> Self {
        let mut controller = Self {
            engine,
            settings,
            viewport: Size::ZERO,
        };
        controller.engine.reset();
        controller
    }

    /// Reads the engine back and corrects it until it satisfies the bounds,
    /// snap-back and no-pan-below-baseline rules.
    fn reconcile(&mut self) -> ViewTransform {
        let reported = self.transform();
        let clamped = self.settings.bounds.clamp(reported.scale);
        if (clamped - reported.scale).abs() > f32::EPSILON {
            self.engine.zoom(clamped, None);
        }

        let settled = self.settings.settle(self.transform());
        if settled.is_identity() {
            if !self.transform().is_identity() {
                self.engine.reset();
            }
        } else if settled.translation() != self.engine.get_pan() {
            self.engine.pan(settled.translation());
        }
        self.transform()
    }
}

impl ZoomPan for DelegatedZoomPan {
    fn transform(&self) -> ViewTransform {
        let pan = self.engine.get_pan();
        ViewTransform::new(self.engine.get_scale(), pan.x, pan.y)
    }

    fn zoom_by(&mut self, steps: f32, anchor: Option<Point>) -> ViewTransform {
        if !steps.is_finite() || steps == 0.0 {
            return self.transform();
        }
        let target = self
            .settings
            .bounds
            .clamp(self.engine.get_scale() + steps * self.settings.step.value());
        self.engine.zoom(target, anchor);
        self.reconcile()
    }

    fn pan_by(&mut self, delta: Vector) -> ViewTransform {
        let current = self.transform();
        if current.scale <= 1.0 {
            return self.reconcile();
        }
        self.engine.pan(current.translation() + delta);
        self.reconcile()
    }

    fn reset(&mut self) -> ViewTransform {
        self.engine.reset();
        self.transform()
    }

    fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
        self.engine.set_viewport(size);
    }

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn handles_pinch(&self) -> bool {
        self.engine.supports_pinch()
    }

    fn pinch(&mut self, previous: [Point; 2], current: [Point; 2]) -> ViewTransform {
        if !self.engine.supports_pinch() {
            return self.transform();
        }
        self.engine.pinch(previous, current);
        self.reconcile()
    }
}

// =============================================================================
// Controller Selection
// =============================================================================

/// The zoom/pan implementation chosen when the view is built.
#[derive(Debug)]
pub enum ZoomPanController {
    HandRolled(HandRolledZoomPan),
    Delegated(DelegatedZoomPan),
}

impl ZoomPanController {
    #[must_use]
    pub fn hand_rolled(settings: ZoomSettings) -> Self {
        Self::HandRolled(HandRolledZoomPan::new(settings))
    }

    #[must_use]
    pub fn delegated(engine: Box<dyn GestureEngine>, settings: ZoomSettings) -> Self {
        Self::Delegated(DelegatedZoomPan::new(engine, settings))
    }

    fn inner(&self) -> &dyn ZoomPan {
        match self {
            Self::HandRolled(c) => c,
            Self::Delegated(c) => c,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ZoomPan {
        match self {
            Self::HandRolled(c) => c,
            Self::Delegated(c) => c,
        }
    }
}

impl Default for ZoomPanController {
    fn default() -> Self {
        Self::hand_rolled(ZoomSettings::default())
    }
}

impl ZoomPan for ZoomPanController {
    fn transform(&self) -> ViewTransform {
        self.inner().transform()
    }

    fn zoom_by(&mut self, steps: f32, anchor: Option<Point>) -> ViewTransform {
        self.inner_mut().zoom_by(steps, anchor)
    }

    fn pan_by(&mut self, delta: Vector) -> ViewTransform {
        self.inner_mut().pan_by(delta)
    }

    fn reset(&mut self) -> ViewTransform {
        self.inner_mut().reset()
    }

    fn set_viewport(&mut self, size: Size) {
        self.inner_mut().set_viewport(size);
    }

    fn viewport(&self) -> Size {
        self.inner().viewport()
    }

    fn handles_pinch(&self) -> bool {
        self.inner().handles_pinch()
    }

    fn pinch(&mut self, previous: [Point; 2], current: [Point; 2]) -> ViewTransform {
        self.inner_mut().pinch(previous, current)
    }
}
