// SPDX-License-Identifier: MPL-2.0
//! Transient per-gesture state.

use iced_core::{Point, Vector};
use std::time::{Duration, Instant};

/// What is driving an active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSource {
    Mouse,
    Touch(u64),
}

/// Grab-and-drag pan in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub source: DragSource,
    /// Pointer position minus the translation at drag start.
    pub anchor: Vector,
}

impl DragSession {
    #[must_use]
    pub fn start(source: DragSource, position: Point, translation: Vector) -> Self {
        Self {
            source,
            anchor: Vector::new(position.x - translation.x, position.y - translation.y),
        }
    }

    /// Translation that keeps the grabbed point under `position`.
    #[must_use]
    pub fn target_translation(&self, position: Point) -> Vector {
        Vector::new(position.x - self.anchor.x, position.y - self.anchor.y)
    }
}

/// Single-finger flick candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeSession {
    pub id: u64,
    pub start: Point,
    pub started_at: Instant,
}

impl SwipeSession {
    #[must_use]
    pub fn displacement_x(&self, end: Point) -> f32 {
        end.x - self.start.x
    }

    #[must_use]
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.duration_since(self.started_at)
    }
}

/// Where and when a single contact went down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchStart {
    pub id: u64,
    pub position: Point,
    pub at: Instant,
}

impl TouchStart {
    /// Short contact that stayed within `slop` of where it went down.
    #[must_use]
    pub fn is_tap(&self, end: Point, now: Instant, slop: f32, max_duration: Duration) -> bool {
        let travel = (end.x - self.position.x).hypot(end.y - self.position.y);
        travel <= slop && now.duration_since(self.at) <= max_duration
    }
}

/// Finger on the thumbnail strip: a tap picks, a horizontal drag scrolls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripTouchSession {
    /// Start position is strip-local.
    pub start: TouchStart,
    /// Last horizontal position seen, in the coordinates of move events.
    pub last_x: f32,
    pub scrolling: bool,
}

/// Two-finger pinch; holds the last contact snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchSession {
    pub previous: Option<[Point; 2]>,
}

/// The router's state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureSession {
    #[default]
    Idle,
    Dragging(DragSession),
    Pinching(PinchSession),
    Swiping(SwipeSession),
    StripTouch(StripTouchSession),
}

impl GestureSession {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }
}

/// Active touch contacts in arrival order.
#[derive(Debug, Clone, Default)]
pub struct Contacts {
    points: Vec<(u64, Point)>,
}

impl Contacts {
    pub fn insert(&mut self, id: u64, position: Point) {
        if let Some(entry) = self.points.iter_mut().find(|(existing, _)| *existing == id) {
            entry.1 = position;
        } else {
            self.points.push((id, position));
        }
    }

    /// Updates a known contact; returns `false` for unknown ids.
    pub fn update(&mut self, id: u64, position: Point) -> bool {
        match self.points.iter_mut().find(|(existing, _)| *existing == id) {
            Some(entry) => {
                entry.1 = position;
                true
            }
            None => false,
        }
    }

    /// Removes a contact; returns `false` for unknown ids.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.points.len();
        self.points.retain(|(existing, _)| *existing != id);
        self.points.len() != before
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The two oldest contacts, if at least two are down.
    #[must_use]
    pub fn pair(&self) -> Option<[Point; 2]> {
        match self.points.as_slice() {
            [(_, a), (_, b), ..] => Some([*a, *b]),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
