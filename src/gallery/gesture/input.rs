// SPDX-License-Identifier: MPL-2.0
//! Input model consumed by the gesture router, and the adapter that builds
//! it from `iced_core` events.
//!
//! Positions are local to the surface the event belongs to: display events
//! are relative to the display's top-left corner (the viewport the zoom
//! anchor is expressed in), strip events to the strip's. A finger keeps the
//! surface it went down on until it lifts.
//!
//! Wheel deltas follow the "positive y scrolls down" convention. `iced`
//! reports the opposite sign, so the adapter flips it.

use iced_core::keyboard::{self, key::Named, Key, Modifiers};
use iced_core::{mouse, touch, Event, Point, Rectangle, Vector};

/// Interactive regions of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// The main image area.
    Display,
    /// The horizontal thumbnail list.
    ThumbnailStrip,
}

/// Unit of a wheel delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeltaUnit {
    Pixels,
    Lines,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelInput {
    pub surface: Surface,
    pub position: Point,
    /// Positive `y` scrolls down.
    pub delta: Vector,
    pub unit: DeltaUnit,
    /// Ctrl or Cmd held.
    pub zoom_modifier: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// One input event, already hit-tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Wheel(WheelInput),
    PointerPressed { surface: Surface, position: Point },
    /// Pointer moved anywhere; position relative to the display.
    PointerMoved { position: Point },
    /// Primary button released anywhere.
    PointerReleased,
    TouchStarted { id: u64, surface: Surface, position: Point },
    /// Position local to the surface the finger went down on.
    TouchMoved { id: u64, position: Point },
    TouchEnded { id: u64, position: Point },
    TouchCancelled { id: u64 },
    Key(ArrowKey),
}

// =============================================================================
// iced_core adapter
// =============================================================================

/// Converts native events into [`InputEvent`]s.
///
/// Keeps the last cursor position and modifier state, since `iced` reports
/// button and wheel events without either.
#[derive(Debug, Clone, Default)]
pub struct EventTranslator {
    cursor: Option<Point>,
    modifiers: Modifiers,
    display: Rectangle,
    strip: Option<Rectangle>,
    fingers: Vec<(u64, Surface)>,
}

impl EventTranslator {
    #[must_use]
    pub fn new(display: Rectangle, strip: Option<Rectangle>) -> Self {
        Self {
            display,
            strip,
            ..Self::default()
        }
    }

    /// Updates the surface bounds after a layout change.
    pub fn set_layout(&mut self, display: Rectangle, strip: Option<Rectangle>) {
        self.display = display;
        self.strip = strip;
    }

    #[must_use]
    pub fn display_bounds(&self) -> Rectangle {
        self.display
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Surface under a window position; the strip wins where they overlap.
    #[must_use]
    pub fn surface_at(&self, position: Point) -> Option<Surface> {
        if self.strip.is_some_and(|strip| strip.contains(position)) {
            Some(Surface::ThumbnailStrip)
        } else if self.display.contains(position) {
            Some(Surface::Display)
        } else {
            None
        }
    }

    fn local(&self, surface: Surface, position: Point) -> Point {
        let origin = match (surface, self.strip) {
            (Surface::ThumbnailStrip, Some(strip)) => strip.position(),
            _ => self.display.position(),
        };
        Point::new(position.x - origin.x, position.y - origin.y)
    }

    fn zoom_modifier(&self) -> bool {
        self.modifiers.control() || self.modifiers.logo()
    }

    /// Translates one native event. Returns `None` for events the gallery
    /// does not react to.
    pub fn translate(&mut self, event: &Event) -> Option<InputEvent> {
        match event {
            Event::Mouse(mouse_event) => self.translate_mouse(mouse_event),
            Event::Touch(touch_event) => self.translate_touch(touch_event),
            Event::Keyboard(keyboard_event) => self.translate_keyboard(keyboard_event),
            _ => None,
        }
    }

    fn translate_mouse(&mut self, event: &mouse::Event) -> Option<InputEvent> {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor = Some(*position);
                Some(InputEvent::PointerMoved {
                    position: self.local(Surface::Display, *position),
                })
            }
            mouse::Event::CursorLeft => {
                self.cursor = None;
                None
            }
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let cursor = self.cursor?;
                let surface = self.surface_at(cursor)?;
                Some(InputEvent::PointerPressed {
                    surface,
                    position: self.local(surface, cursor),
                })
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => Some(InputEvent::PointerReleased),
            mouse::Event::WheelScrolled { delta } => {
                let cursor = self.cursor?;
                let surface = self.surface_at(cursor)?;
                let (delta, unit) = match *delta {
                    mouse::ScrollDelta::Lines { x, y } => (Vector::new(-x, -y), DeltaUnit::Lines),
                    mouse::ScrollDelta::Pixels { x, y } => (Vector::new(-x, -y), DeltaUnit::Pixels),
                };
                Some(InputEvent::Wheel(WheelInput {
                    surface,
                    position: self.local(surface, cursor),
                    delta,
                    unit,
                    zoom_modifier: self.zoom_modifier(),
                }))
            }
            _ => None,
        }
    }

    fn translate_touch(&mut self, event: &touch::Event) -> Option<InputEvent> {
        match *event {
            touch::Event::FingerPressed { id, position } => {
                let surface = self.surface_at(position)?;
                self.fingers.retain(|(finger, _)| *finger != id.0);
                self.fingers.push((id.0, surface));
                Some(InputEvent::TouchStarted {
                    id: id.0,
                    surface,
                    position: self.local(surface, position),
                })
            }
            touch::Event::FingerMoved { id, position } => Some(InputEvent::TouchMoved {
                id: id.0,
                position: self.local(self.finger_surface(id.0), position),
            }),
            touch::Event::FingerLifted { id, position } => {
                let position = self.local(self.finger_surface(id.0), position);
                self.fingers.retain(|(finger, _)| *finger != id.0);
                Some(InputEvent::TouchEnded { id: id.0, position })
            }
            touch::Event::FingerLost { id, .. } => {
                self.fingers.retain(|(finger, _)| *finger != id.0);
                Some(InputEvent::TouchCancelled { id: id.0 })
            }
        }
    }

    fn finger_surface(&self, id: u64) -> Surface {
        self.fingers
            .iter()
            .find(|(finger, _)| *finger == id)
            .map_or(Surface::Display, |(_, surface)| *surface)
    }

    fn translate_keyboard(&mut self, event: &keyboard::Event) -> Option<InputEvent> {
        match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                self.modifiers = *modifiers;
                match key {
                    Key::Named(Named::ArrowLeft) => Some(InputEvent::Key(ArrowKey::Left)),
                    Key::Named(Named::ArrowRight) => Some(InputEvent::Key(ArrowKey::Right)),
                    _ => None,
                }
            }
            keyboard::Event::ModifiersChanged(modifiers) => {
                self.modifiers = *modifiers;
                None
            }
            _ => None,
        }
    }
}
