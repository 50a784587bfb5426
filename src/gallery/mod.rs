// SPDX-License-Identifier: MPL-2.0
//! The interaction and navigation engine.
//!
//! - [`zoom_pan`]: intra-image transform state
//! - [`gesture`]: input classification
//! - [`navigation`]: moving across siblings
//! - [`thumbnail_strip`]: the sibling strip projection
//! - [`view`]: the orchestrating [`ImageGalleryView`]

pub mod gesture;
pub mod navigation;
pub mod thumbnail_strip;
pub mod view;
pub mod zoom_pan;

pub use gesture::{GestureRouter, GestureSettings, Intent};
pub use navigation::{Direction, NavigationController, Outcome};
pub use thumbnail_strip::{ScrollRequest, StripLayout, ThumbnailEntry, ThumbnailStrip};
pub use view::{ImageGalleryView, LoadOutcome, LoadTicket, Presentation, Surfaces};
pub use zoom_pan::{
    DelegatedZoomPan, GestureEngine, HandRolledZoomPan, ZoomPan, ZoomPanController, ZoomSettings,
};
