// SPDX-License-Identifier: MPL-2.0
//! UI domain types: validated tuning values and the view transform.

mod newtypes;
mod transform;

pub use newtypes::{DoubleClickWindow, ScaleBounds, SnapEpsilon, SwipeThresholds, ZoomStep};
pub use transform::{CursorHint, ViewTransform};
