// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure value types shared by the gallery engine.
//!
//! # Modules
//!
//! - [`media`]: Image file handles ([`ImageRef`](media::ImageRef),
//!   [`FileEntry`](media::FileEntry), [`ImageExtension`](media::ImageExtension))
//! - [`ui`]: UI value objects ([`ViewTransform`](ui::ViewTransform),
//!   [`ScaleBounds`](ui::ScaleBounds), [`SwipeThresholds`](ui::SwipeThresholds))

pub mod media;
pub mod ui;
