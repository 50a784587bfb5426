// SPDX-License-Identifier: MPL-2.0
//! In-memory activity log for the gallery.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped user action or warning
//! - [`DiagnosticsCollector`]: The view's recorder; warnings also go to `log`

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, UserAction, WarningEvent, WarningType};
