// SPDX-License-Identifier: MPL-2.0
//! Event collector owned by the gallery view.

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType};

/// Records user actions and warnings into a bounded buffer.
///
/// Warnings are also forwarded to the `log` facade.
#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        self.buffer.push(DiagnosticEvent::new(DiagnosticEventKind::UserAction {
            action,
            details,
        }));
    }

    pub fn log_warning(&mut self, warning: WarningEvent) {
        log::warn!("{:?}: {}", warning.warning_type, warning.message);
        self.buffer
            .push(DiagnosticEvent::new(DiagnosticEventKind::Warning { warning }));
    }

    pub fn log_warning_simple(&mut self, warning_type: WarningType, message: impl Into<String>) {
        self.log_warning(WarningEvent::new(warning_type, message));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Warnings of one type, oldest first.
    pub fn warnings(&self, warning_type: WarningType) -> impl Iterator<Item = &WarningEvent> {
        self.buffer.iter().filter_map(move |event| match &event.kind {
            DiagnosticEventKind::Warning { warning } if warning.warning_type == warning_type => {
                Some(warning)
            }
            _ => None,
        })
    }

    /// Recorded user actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &UserAction> {
        self.buffer.iter().filter_map(|event| match &event.kind {
            DiagnosticEventKind::UserAction { action, .. } => Some(action),
            DiagnosticEventKind::Warning { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }
}
