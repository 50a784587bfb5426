// SPDX-License-Identifier: MPL-2.0
//! Gesture classification.
//!
//! The [`GestureRouter`] turns wheel, pointer, touch and keyboard input into
//! one [`Intent`] per event. Intra-image intents (zoom, pan, reset) are
//! applied to the [`ZoomPan`] controller right away; inter-image intents
//! (navigate, thumbnail pick, strip scroll) are returned for the view to
//! dispatch.
//!
//! At most one gesture is active at a time:
//!
//! ```text
//! Idle ──press (zoomed)──▶ Dragging ──release──▶ Idle
//! Idle ──1 touch (unzoomed)──▶ Swiping ──lift──▶ Idle (maybe Navigate)
//! Idle ──touch on strip──▶ StripTouch ──lift──▶ Idle (tap: PickThumbnail)
//! any ──2nd touch──▶ Pinching ──all lifted──▶ Idle
//! ```
//!
//! A touch is a tap only once it lifts, short and within [`TAP_SLOP_PX`] of
//! where it went down; two taps inside the double-click window reset the
//! view. Swipes and drags never count as taps.
//!
//! Wheel and keyboard events are stateless.

pub mod input;
pub mod session;

pub use input::{ArrowKey, DeltaUnit, EventTranslator, InputEvent, Surface, WheelInput};
pub use session::{
    DragSession, DragSource, GestureSession, PinchSession, StripTouchSession, SwipeSession,
    TouchStart,
};

use super::navigation::Direction;
use super::zoom_pan::ZoomPan;
use crate::config::{Config, TAP_SLOP_PX, WHEEL_PIXELS_PER_STEP};
use crate::domain::ui::{CursorHint, DoubleClickWindow, SnapEpsilon, SwipeThresholds, ViewTransform};
use iced_core::{Point, Vector};
use session::Contacts;
use std::time::Instant;

/// Classification of one input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    Idle,
    Zoom(ViewTransform),
    Pan(ViewTransform),
    Reset(ViewTransform),
    Navigate(Direction),
    /// Click on the strip at a strip-local horizontal position.
    PickThumbnail { x: f32 },
    /// Horizontal strip scroll in pixels.
    ScrollStrip { dx: f32 },
}

/// Router tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    pub swipe: SwipeThresholds,
    pub double_click: DoubleClickWindow,
    pub snap: SnapEpsilon,
    pub strip_line_height: f32,
}

impl GestureSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            swipe: config.swipe_thresholds(),
            double_click: config.double_click_window(),
            snap: config.snap_epsilon(),
            strip_line_height: config.strip_line_height(),
        }
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Input state machine.
#[derive(Debug, Clone)]
pub struct GestureRouter {
    settings: GestureSettings,
    session: GestureSession,
    contacts: Contacts,
    last_press: Option<Instant>,
    /// Current single contact on the display, while it may still be a tap.
    touch_start: Option<TouchStart>,
    /// Lift time of the last completed tap.
    last_tap: Option<Instant>,
    visible: bool,
}

impl Default for GestureRouter {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl GestureRouter {
    #[must_use]
    pub fn new(settings: GestureSettings) -> Self {
        Self {
            settings,
            session: GestureSession::Idle,
            contacts: Contacts::default(),
            last_press: None,
            touch_start: None,
            last_tap: None,
            visible: true,
        }
    }

    #[must_use]
    pub fn session(&self) -> &GestureSession {
        &self.session
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_dragging()
    }

    /// Keyboard navigation only applies while the view is visible.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Drops any gesture in progress (image switch, view hidden).
    pub fn cancel(&mut self) {
        self.session = GestureSession::Idle;
        self.contacts.clear();
        self.last_press = None;
        self.touch_start = None;
        self.last_tap = None;
    }

    /// Pointer affordance for the current state.
    #[must_use]
    pub fn cursor_hint(&self, transform: ViewTransform) -> CursorHint {
        if self.session.is_dragging() {
            CursorHint::Grabbing
        } else {
            transform.cursor_hint()
        }
    }

    /// Classifies one event, applying zoom/pan/reset to `zoom_pan`.
    pub fn handle(&mut self, event: &InputEvent, now: Instant, zoom_pan: &mut dyn ZoomPan) -> Intent {
        match *event {
            InputEvent::Wheel(wheel) => self.on_wheel(&wheel, zoom_pan),
            InputEvent::PointerPressed { surface, position } => {
                self.on_pointer_pressed(surface, position, now, zoom_pan)
            }
            InputEvent::PointerMoved { position } => {
                self.on_drag_moved(DragSource::Mouse, position, zoom_pan)
            }
            InputEvent::PointerReleased => {
                self.end_drag(DragSource::Mouse);
                Intent::Idle
            }
            InputEvent::TouchStarted {
                id,
                surface,
                position,
            } => self.on_touch_started(id, surface, position, now, zoom_pan),
            InputEvent::TouchMoved { id, position } => self.on_touch_moved(id, position, zoom_pan),
            InputEvent::TouchEnded { id, position } => {
                self.on_touch_ended(id, Some(position), now, zoom_pan)
            }
            InputEvent::TouchCancelled { id } => self.on_touch_ended(id, None, now, zoom_pan),
            InputEvent::Key(key) => {
                if !self.visible {
                    return Intent::Idle;
                }
                match key {
                    ArrowKey::Left => Intent::Navigate(Direction::Previous),
                    ArrowKey::Right => Intent::Navigate(Direction::Next),
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Wheel
    // -------------------------------------------------------------------------

    fn on_wheel(&mut self, wheel: &WheelInput, zoom_pan: &mut dyn ZoomPan) -> Intent {
        match wheel.surface {
            Surface::ThumbnailStrip => {
                let dx = match wheel.unit {
                    DeltaUnit::Pixels => wheel.delta.y,
                    DeltaUnit::Lines => wheel.delta.y * self.settings.strip_line_height,
                };
                if dx == 0.0 {
                    Intent::Idle
                } else {
                    Intent::ScrollStrip { dx }
                }
            }
            Surface::Display => {
                let steps = wheel_steps(wheel);
                let Some(direction) = Direction::from_delta(steps) else {
                    return Intent::Idle;
                };
                if wheel.zoom_modifier {
                    // Scrolling down zooms out.
                    let transform = zoom_pan.zoom_by(-direction.offset() as f32, Some(wheel.position));
                    if transform.scale <= 1.0 && self.session.is_dragging() {
                        self.session = GestureSession::Idle;
                    }
                    Intent::Zoom(transform)
                } else {
                    Intent::Navigate(direction)
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Pointer
    // -------------------------------------------------------------------------

    /// Returns `true` when this press completes a double-click.
    fn register_press(&mut self, now: Instant) -> bool {
        let window = self.settings.double_click.as_duration();
        let is_double = self
            .last_press
            .is_some_and(|t| now.duration_since(t) <= window);
        // A completed double press does not chain into a triple.
        self.last_press = if is_double { None } else { Some(now) };
        is_double
    }

    fn on_pointer_pressed(
        &mut self,
        surface: Surface,
        position: Point,
        now: Instant,
        zoom_pan: &mut dyn ZoomPan,
    ) -> Intent {
        if surface == Surface::ThumbnailStrip {
            return Intent::PickThumbnail { x: position.x };
        }
        if self.register_press(now) {
            self.end_drag(DragSource::Mouse);
            return Intent::Reset(zoom_pan.reset());
        }
        let transform = zoom_pan.transform();
        if transform.scale > 1.0 && !self.session.is_dragging() {
            self.session = GestureSession::Dragging(DragSession::start(
                DragSource::Mouse,
                position,
                transform.translation(),
            ));
        }
        Intent::Idle
    }

    fn on_drag_moved(&mut self, source: DragSource, position: Point, zoom_pan: &mut dyn ZoomPan) -> Intent {
        let GestureSession::Dragging(drag) = self.session else {
            return Intent::Idle;
        };
        if drag.source != source {
            return Intent::Idle;
        }
        let current = zoom_pan.transform();
        if current.scale <= 1.0 {
            self.session = GestureSession::Idle;
            return Intent::Idle;
        }
        let target = drag.target_translation(position);
        let delta = Vector::new(
            target.x - current.translate_x,
            target.y - current.translate_y,
        );
        Intent::Pan(zoom_pan.pan_by(delta))
    }

    fn end_drag(&mut self, source: DragSource) {
        if let GestureSession::Dragging(drag) = self.session {
            if drag.source == source {
                self.session = GestureSession::Idle;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Touch
    // -------------------------------------------------------------------------

    fn on_touch_started(
        &mut self,
        id: u64,
        surface: Surface,
        position: Point,
        now: Instant,
        zoom_pan: &mut dyn ZoomPan,
    ) -> Intent {
        if surface == Surface::ThumbnailStrip {
            if self.session.is_idle() && self.contacts.is_empty() {
                self.last_tap = None;
                self.session = GestureSession::StripTouch(StripTouchSession {
                    start: TouchStart { id, position, at: now },
                    last_x: position.x,
                    scrolling: false,
                });
            }
            return Intent::Idle;
        }
        if matches!(self.session, GestureSession::StripTouch(_)) {
            self.session = GestureSession::Idle;
        }
        self.contacts.insert(id, position);

        if self.contacts.len() >= 2 {
            self.touch_start = None;
            self.last_tap = None;
            if !matches!(self.session, GestureSession::Pinching(_)) {
                log::debug!("Second contact, entering pinch");
                self.session = GestureSession::Pinching(PinchSession {
                    previous: self.contacts.pair(),
                });
            }
            return Intent::Idle;
        }

        self.touch_start = Some(TouchStart { id, position, at: now });
        let transform = zoom_pan.transform();
        self.session = if transform.scale <= 1.0 + self.settings.snap.value() {
            GestureSession::Swiping(SwipeSession {
                id,
                start: position,
                started_at: now,
            })
        } else {
            GestureSession::Dragging(DragSession::start(
                DragSource::Touch(id),
                position,
                transform.translation(),
            ))
        };
        Intent::Idle
    }

    fn on_touch_moved(&mut self, id: u64, position: Point, zoom_pan: &mut dyn ZoomPan) -> Intent {
        if let GestureSession::StripTouch(strip) = self.session {
            if strip.start.id == id {
                return self.on_strip_touch_moved(strip, position);
            }
        }
        if !self.contacts.update(id, position) {
            return Intent::Idle;
        }
        match self.session {
            GestureSession::Dragging(_) => self.on_drag_moved(DragSource::Touch(id), position, zoom_pan),
            GestureSession::Pinching(pinch) => {
                let Some(current) = self.contacts.pair() else {
                    return Intent::Idle;
                };
                self.session = GestureSession::Pinching(PinchSession {
                    previous: Some(current),
                });
                match pinch.previous {
                    Some(previous) if zoom_pan.handles_pinch() => {
                        Intent::Zoom(zoom_pan.pinch(previous, current))
                    }
                    _ => Intent::Idle,
                }
            }
            GestureSession::Idle | GestureSession::Swiping(_) | GestureSession::StripTouch(_) => {
                Intent::Idle
            }
        }
    }

    /// Handles a lifted (`Some(position)`) or lost (`None`) contact.
    fn on_touch_ended(
        &mut self,
        id: u64,
        position: Option<Point>,
        now: Instant,
        zoom_pan: &mut dyn ZoomPan,
    ) -> Intent {
        if let GestureSession::StripTouch(strip) = self.session {
            if strip.start.id == id {
                self.session = GestureSession::Idle;
                return match position {
                    Some(end) if !strip.scrolling && self.is_tap(&strip.start, end, now) => {
                        Intent::PickThumbnail {
                            x: strip.start.position.x,
                        }
                    }
                    _ => Intent::Idle,
                };
            }
        }
        if !self.contacts.remove(id) {
            return Intent::Idle;
        }
        let started = self.touch_start.filter(|start| start.id == id);
        if started.is_some() {
            self.touch_start = None;
        }
        let tap = match (started, position) {
            (Some(start), Some(end)) if self.contacts.is_empty() && self.is_tap(&start, end, now) => {
                Some(start)
            }
            _ => None,
        };

        match self.session {
            GestureSession::Swiping(swipe) if swipe.id == id => {
                self.session = GestureSession::Idle;
                if let Some(start) = tap {
                    return self.register_tap(start.at, now, zoom_pan);
                }
                self.last_tap = None;
                let Some(end) = position else {
                    return Intent::Idle;
                };
                if !self.contacts.is_empty() {
                    return Intent::Idle;
                }
                let dx = swipe.displacement_x(end);
                if self.settings.swipe.accepts(dx, swipe.elapsed(now)) {
                    // Finger moving left reveals the next image.
                    let direction = if dx < 0.0 {
                        Direction::Next
                    } else {
                        Direction::Previous
                    };
                    Intent::Navigate(direction)
                } else {
                    Intent::Idle
                }
            }
            GestureSession::Dragging(_) => {
                self.end_drag(DragSource::Touch(id));
                match tap {
                    Some(start) => self.register_tap(start.at, now, zoom_pan),
                    None => {
                        self.last_tap = None;
                        Intent::Idle
                    }
                }
            }
            GestureSession::Pinching(_) => {
                if self.contacts.is_empty() {
                    self.session = GestureSession::Idle;
                }
                Intent::Idle
            }
            GestureSession::Idle | GestureSession::Swiping(_) | GestureSession::StripTouch(_) => {
                Intent::Idle
            }
        }
    }

    fn is_tap(&self, start: &TouchStart, end: Point, now: Instant) -> bool {
        start.is_tap(end, now, TAP_SLOP_PX, self.settings.swipe.max_duration())
    }

    /// Records a completed tap; a tap that went down within the window of
    /// the previous one's lift is a double-tap.
    fn register_tap(&mut self, started_at: Instant, now: Instant, zoom_pan: &mut dyn ZoomPan) -> Intent {
        let window = self.settings.double_click.as_duration();
        let is_double = self
            .last_tap
            .is_some_and(|lifted| started_at.saturating_duration_since(lifted) <= window);
        if is_double {
            self.last_tap = None;
            Intent::Reset(zoom_pan.reset())
        } else {
            self.last_tap = Some(now);
            Intent::Idle
        }
    }

    fn on_strip_touch_moved(&mut self, mut strip: StripTouchSession, position: Point) -> Intent {
        if !strip.scrolling && (position.x - strip.start.position.x).abs() <= TAP_SLOP_PX {
            return Intent::Idle;
        }
        // Dragging the finger left reveals entries further right.
        let dx = strip.last_x - position.x;
        strip.scrolling = true;
        strip.last_x = position.x;
        self.session = GestureSession::StripTouch(strip);
        if dx == 0.0 {
            Intent::Idle
        } else {
            Intent::ScrollStrip { dx }
        }
    }
}

/// Wheel displacement in notches; pixel deltas use the usual 120 px notch.
fn wheel_steps(wheel: &WheelInput) -> f32 {
    match wheel.unit {
        DeltaUnit::Lines => wheel.delta.y,
        DeltaUnit::Pixels => wheel.delta.y / WHEEL_PIXELS_PER_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::zoom_pan::tests::ScriptedEngine;
    use crate::gallery::zoom_pan::{ZoomPanController, ZoomSettings};
    use crate::test_utils::assert_abs_diff_eq;
    use iced_core::Size;
    use std::time::Duration;

    fn controller() -> ZoomPanController {
        let mut controller = ZoomPanController::default();
        controller.set_viewport(Size::new(800.0, 600.0));
        controller
    }

    fn zoomed_to_two() -> ZoomPanController {
        let mut controller = controller();
        controller.zoom_by(10.0, None);
        controller
    }

    fn wheel(surface: Surface, dy: f32, zoom_modifier: bool) -> InputEvent {
        InputEvent::Wheel(WheelInput {
            surface,
            position: Point::new(400.0, 300.0),
            delta: Vector::new(0.0, dy),
            unit: DeltaUnit::Pixels,
            zoom_modifier,
        })
    }

    fn touch(router: &mut GestureRouter, zp: &mut ZoomPanController, from: f32, to: f32, ms: u64) -> Intent {
        let t0 = Instant::now();
        router.handle(
            &InputEvent::TouchStarted {
                id: 1,
                surface: Surface::Display,
                position: Point::new(from, 200.0),
            },
            t0,
            zp,
        );
        router.handle(
            &InputEvent::TouchMoved {
                id: 1,
                position: Point::new(to, 200.0),
            },
            t0 + Duration::from_millis(ms / 2),
            zp,
        );
        router.handle(
            &InputEvent::TouchEnded {
                id: 1,
                position: Point::new(to, 200.0),
            },
            t0 + Duration::from_millis(ms),
            zp,
        )
    }

    #[test]
    fn quick_swipe_left_navigates_next() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        assert_eq!(
            touch(&mut router, &mut zp, 300.0, 220.0, 120),
            Intent::Navigate(Direction::Next)
        );
        assert!(router.session().is_idle());
    }

    #[test]
    fn quick_swipe_right_navigates_previous() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        assert_eq!(
            touch(&mut router, &mut zp, 220.0, 300.0, 120),
            Intent::Navigate(Direction::Previous)
        );
    }

    #[test]
    fn slow_swipe_is_discarded() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        assert_eq!(touch(&mut router, &mut zp, 300.0, 220.0, 500), Intent::Idle);
    }

    #[test]
    fn short_swipe_is_discarded() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        assert_eq!(touch(&mut router, &mut zp, 300.0, 270.0, 100), Intent::Idle);
    }

    #[test]
    fn swipe_while_zoomed_pans_instead() {
        let mut router = GestureRouter::default();
        let mut zp = zoomed_to_two();
        let t0 = Instant::now();
        router.handle(
            &InputEvent::TouchStarted {
                id: 1,
                surface: Surface::Display,
                position: Point::new(300.0, 200.0),
            },
            t0,
            &mut zp,
        );
        assert!(router.is_dragging());

        let moved = router.handle(
            &InputEvent::TouchMoved {
                id: 1,
                position: Point::new(220.0, 200.0),
            },
            t0 + Duration::from_millis(60),
            &mut zp,
        );
        let Intent::Pan(t) = moved else {
            panic!("expected pan, got {moved:?}");
        };
        assert_abs_diff_eq!(t.translate_x, -80.0, epsilon = 1e-4);

        let lifted = router.handle(
            &InputEvent::TouchEnded {
                id: 1,
                position: Point::new(220.0, 200.0),
            },
            t0 + Duration::from_millis(120),
            &mut zp,
        );
        assert_eq!(lifted, Intent::Idle);
    }

    #[test]
    fn second_contact_cancels_swipe() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();
        let start = |id, x| InputEvent::TouchStarted {
            id,
            surface: Surface::Display,
            position: Point::new(x, 200.0),
        };
        router.handle(&start(1, 300.0), t0, &mut zp);
        router.handle(&start(2, 500.0), t0 + Duration::from_millis(400), &mut zp);
        assert!(matches!(router.session(), GestureSession::Pinching(_)));

        let first_up = router.handle(
            &InputEvent::TouchEnded {
                id: 1,
                position: Point::new(200.0, 200.0),
            },
            t0 + Duration::from_millis(450),
            &mut zp,
        );
        assert_eq!(first_up, Intent::Idle);
        assert!(matches!(router.session(), GestureSession::Pinching(_)));

        router.handle(
            &InputEvent::TouchEnded {
                id: 2,
                position: Point::new(500.0, 200.0),
            },
            t0 + Duration::from_millis(460),
            &mut zp,
        );
        assert!(router.session().is_idle());
        assert_eq!(zp.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn pinch_is_forwarded_to_capable_engine() {
        let mut router = GestureRouter::default();
        let mut zp = ZoomPanController::delegated(Box::new(ScriptedEngine::new(true)), ZoomSettings::default());
        let t0 = Instant::now();
        for (id, x) in [(1, 300.0), (2, 400.0)] {
            router.handle(
                &InputEvent::TouchStarted {
                    id,
                    surface: Surface::Display,
                    position: Point::new(x, 200.0),
                },
                t0,
                &mut zp,
            );
        }

        let intent = router.handle(
            &InputEvent::TouchMoved {
                id: 2,
                position: Point::new(500.0, 200.0),
            },
            t0 + Duration::from_millis(16),
            &mut zp,
        );

        let Intent::Zoom(t) = intent else {
            panic!("expected zoom, got {intent:?}");
        };
        assert_abs_diff_eq!(t.scale, 2.0, epsilon = 1e-4);
    }

    #[test]
    fn ctrl_wheel_zooms_and_plain_wheel_navigates() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let now = Instant::now();

        let zoom_in = router.handle(&wheel(Surface::Display, -120.0, true), now, &mut zp);
        let Intent::Zoom(t) = zoom_in else {
            panic!("expected zoom, got {zoom_in:?}");
        };
        assert_abs_diff_eq!(t.scale, 1.1, epsilon = 1e-4);

        let zoom_out = router.handle(&wheel(Surface::Display, 3.0, true), now, &mut zp);
        assert_eq!(zoom_out, Intent::Zoom(ViewTransform::IDENTITY));

        assert_eq!(
            router.handle(&wheel(Surface::Display, 40.0, false), now, &mut zp),
            Intent::Navigate(Direction::Next)
        );
        assert_eq!(
            router.handle(&wheel(Surface::Display, -1.0, false), now, &mut zp),
            Intent::Navigate(Direction::Previous)
        );
        assert_eq!(
            router.handle(&wheel(Surface::Display, 0.0, false), now, &mut zp),
            Intent::Idle
        );
    }

    #[test]
    fn wheel_on_strip_only_scrolls() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let now = Instant::now();

        assert_eq!(
            router.handle(&wheel(Surface::ThumbnailStrip, 35.0, true), now, &mut zp),
            Intent::ScrollStrip { dx: 35.0 }
        );

        let lines = InputEvent::Wheel(WheelInput {
            surface: Surface::ThumbnailStrip,
            position: Point::ORIGIN,
            delta: Vector::new(0.0, -2.0),
            unit: DeltaUnit::Lines,
            zoom_modifier: false,
        });
        assert_eq!(
            router.handle(&lines, now, &mut zp),
            Intent::ScrollStrip { dx: -80.0 }
        );
        assert_eq!(zp.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn drag_only_starts_when_zoomed() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();
        let press = InputEvent::PointerPressed {
            surface: Surface::Display,
            position: Point::new(100.0, 100.0),
        };

        router.handle(&press, t0, &mut zp);
        assert!(!router.is_dragging());
        assert_eq!(router.cursor_hint(zp.transform()), CursorHint::Default);

        let mut zp = zoomed_to_two();
        let mut router = GestureRouter::default();
        router.handle(&press, t0, &mut zp);
        assert!(router.is_dragging());
        assert_eq!(router.cursor_hint(zp.transform()), CursorHint::Grabbing);

        let moved = router.handle(
            &InputEvent::PointerMoved {
                position: Point::new(130.0, 90.0),
            },
            t0,
            &mut zp,
        );
        assert_eq!(moved, Intent::Pan(ViewTransform::new(2.0, 30.0, -10.0)));

        router.handle(&InputEvent::PointerReleased, t0, &mut zp);
        assert!(!router.is_dragging());
        assert_eq!(router.cursor_hint(zp.transform()), CursorHint::Grab);
    }

    #[test]
    fn zooming_out_mid_drag_ends_the_drag() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        zp.zoom_by(1.0, None);
        let now = Instant::now();
        router.handle(
            &InputEvent::PointerPressed {
                surface: Surface::Display,
                position: Point::new(10.0, 10.0),
            },
            now,
            &mut zp,
        );
        assert!(router.is_dragging());

        router.handle(&wheel(Surface::Display, 120.0, true), now, &mut zp);

        assert!(!router.is_dragging());
        assert_eq!(zp.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn double_click_resets_and_does_not_start_drag() {
        let mut router = GestureRouter::default();
        let mut zp = zoomed_to_two();
        let t0 = Instant::now();
        let press = InputEvent::PointerPressed {
            surface: Surface::Display,
            position: Point::new(100.0, 100.0),
        };

        router.handle(&press, t0, &mut zp);
        router.handle(&InputEvent::PointerReleased, t0, &mut zp);
        let second = router.handle(&press, t0 + Duration::from_millis(200), &mut zp);

        assert_eq!(second, Intent::Reset(ViewTransform::IDENTITY));
        assert!(!router.is_dragging());
    }

    #[test]
    fn presses_outside_window_are_not_double_clicks() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();
        let press = InputEvent::PointerPressed {
            surface: Surface::Display,
            position: Point::new(100.0, 100.0),
        };

        router.handle(&press, t0, &mut zp);
        let second = router.handle(&press, t0 + Duration::from_millis(600), &mut zp);
        assert_eq!(second, Intent::Idle);
    }

    #[test]
    fn double_tap_resets() {
        let mut router = GestureRouter::default();
        let mut zp = zoomed_to_two();
        let t0 = Instant::now();
        let tap = |id| InputEvent::TouchStarted {
            id,
            surface: Surface::Display,
            position: Point::new(50.0, 50.0),
        };
        let lift = |id| InputEvent::TouchEnded {
            id,
            position: Point::new(50.0, 50.0),
        };

        router.handle(&tap(1), t0, &mut zp);
        let first = router.handle(&lift(1), t0 + Duration::from_millis(40), &mut zp);
        assert_eq!(first, Intent::Idle);

        let second_down = router.handle(&tap(2), t0 + Duration::from_millis(150), &mut zp);
        assert_eq!(second_down, Intent::Idle);
        let second = router.handle(&lift(2), t0 + Duration::from_millis(190), &mut zp);

        assert_eq!(second, Intent::Reset(ViewTransform::IDENTITY));
        assert!(router.session().is_idle());
    }

    #[test]
    fn quick_successive_swipes_both_navigate() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();
        let swipe = |router: &mut GestureRouter, zp: &mut ZoomPanController, at: Instant| {
            router.handle(
                &InputEvent::TouchStarted {
                    id: 1,
                    surface: Surface::Display,
                    position: Point::new(300.0, 200.0),
                },
                at,
                zp,
            );
            router.handle(
                &InputEvent::TouchEnded {
                    id: 1,
                    position: Point::new(220.0, 200.0),
                },
                at + Duration::from_millis(120),
                zp,
            )
        };

        let first = swipe(&mut router, &mut zp, t0);
        let second = swipe(&mut router, &mut zp, t0 + Duration::from_millis(250));

        assert_eq!(first, Intent::Navigate(Direction::Next));
        assert_eq!(second, Intent::Navigate(Direction::Next));
    }

    #[test]
    fn swipe_between_taps_breaks_double_tap() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();
        let ms = |n| t0 + Duration::from_millis(n);
        let down = |id, x| InputEvent::TouchStarted {
            id,
            surface: Surface::Display,
            position: Point::new(x, 50.0),
        };
        let up = |id, x| InputEvent::TouchEnded {
            id,
            position: Point::new(x, 50.0),
        };

        router.handle(&down(1, 300.0), ms(0), &mut zp);
        assert_eq!(router.handle(&up(1, 300.0), ms(30), &mut zp), Intent::Idle);
        router.handle(&down(2, 300.0), ms(100), &mut zp);
        assert_eq!(
            router.handle(&up(2, 220.0), ms(200), &mut zp),
            Intent::Navigate(Direction::Next)
        );
        router.handle(&down(3, 300.0), ms(260), &mut zp);

        assert_eq!(router.handle(&up(3, 300.0), ms(290), &mut zp), Intent::Idle);
    }

    fn strip_touch(id: u64, x: f32) -> InputEvent {
        InputEvent::TouchStarted {
            id,
            surface: Surface::ThumbnailStrip,
            position: Point::new(x, 20.0),
        }
    }

    #[test]
    fn strip_tap_picks_thumbnail() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();

        let down = router.handle(&strip_touch(4, 130.0), t0, &mut zp);
        let up = router.handle(
            &InputEvent::TouchEnded {
                id: 4,
                position: Point::new(133.0, 22.0),
            },
            t0 + Duration::from_millis(90),
            &mut zp,
        );

        assert_eq!(down, Intent::Idle);
        assert_eq!(up, Intent::PickThumbnail { x: 130.0 });
        assert!(router.session().is_idle());
    }

    #[test]
    fn strip_drag_scrolls_and_does_not_pick() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let t0 = Instant::now();
        let moved = |x| InputEvent::TouchMoved {
            id: 4,
            position: Point::new(x, 20.0),
        };

        router.handle(&strip_touch(4, 200.0), t0, &mut zp);
        let jitter = router.handle(&moved(196.0), t0 + Duration::from_millis(16), &mut zp);
        let first = router.handle(&moved(170.0), t0 + Duration::from_millis(32), &mut zp);
        let second = router.handle(&moved(190.0), t0 + Duration::from_millis(48), &mut zp);
        let up = router.handle(
            &InputEvent::TouchEnded {
                id: 4,
                position: Point::new(190.0, 20.0),
            },
            t0 + Duration::from_millis(60),
            &mut zp,
        );

        assert_eq!(jitter, Intent::Idle);
        assert_eq!(first, Intent::ScrollStrip { dx: 30.0 });
        assert_eq!(second, Intent::ScrollStrip { dx: -20.0 });
        assert_eq!(up, Intent::Idle);
        assert_eq!(zp.transform(), ViewTransform::IDENTITY);
    }

    #[test]
    fn strip_press_picks_thumbnail() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let intent = router.handle(
            &InputEvent::PointerPressed {
                surface: Surface::ThumbnailStrip,
                position: Point::new(130.0, 20.0),
            },
            Instant::now(),
            &mut zp,
        );
        assert_eq!(intent, Intent::PickThumbnail { x: 130.0 });
    }

    #[test]
    fn arrow_keys_require_visibility() {
        let mut router = GestureRouter::default();
        let mut zp = controller();
        let now = Instant::now();

        assert_eq!(
            router.handle(&InputEvent::Key(ArrowKey::Right), now, &mut zp),
            Intent::Navigate(Direction::Next)
        );
        router.set_visible(false);
        assert_eq!(
            router.handle(&InputEvent::Key(ArrowKey::Left), now, &mut zp),
            Intent::Idle
        );
    }

    #[test]
    fn cancel_clears_session() {
        let mut router = GestureRouter::default();
        let mut zp = zoomed_to_two();
        router.handle(
            &InputEvent::PointerPressed {
                surface: Surface::Display,
                position: Point::ORIGIN,
            },
            Instant::now(),
            &mut zp,
        );
        router.cancel();
        assert!(router.session().is_idle());
    }
}
