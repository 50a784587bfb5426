// SPDX-License-Identifier: MPL-2.0
//! The gallery view: one loaded image, its siblings and the input loop.
//!
//! [`ImageGalleryView`] is the only entry point for showing a file. A load
//! runs in three steps so embedders without an async runtime can drive it by
//! hand:
//!
//! 1. [`ImageGalleryView::begin_load`] labels the tab, resolves the display
//!    resource and hands out a [`LoadTicket`].
//! 2. The host decodes [`LoadTicket::resource`] via
//!    [`GalleryHost::await_decode`].
//! 3. [`ImageGalleryView::finish_load`] applies the result, unless a newer
//!    load started in the meantime.
//!
//! [`ImageGalleryView::load_file`] chains the three.

use super::gesture::{EventTranslator, GestureRouter, GestureSettings, InputEvent, Intent};
use super::navigation::{Direction, NavigationController, Outcome};
use super::thumbnail_strip::{ScrollRequest, StripLayout, ThumbnailStrip};
use super::zoom_pan::{ZoomPan, ZoomPanController, ZoomSettings};
use crate::application::port::GalleryHost;
use crate::application::query::SiblingIndex;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsCollector, UserAction, WarningType};
use crate::domain::media::{Dimensions, ImageRef};
use crate::domain::ui::{CursorHint, ViewTransform};
use crate::error::Result;
use iced_core::{Event, Rectangle, Size};
use std::time::Instant;

/// Surfaces created by the first load.
#[derive(Debug, Clone)]
pub struct Surfaces<R> {
    /// What the renderer currently shows; kept when a resolve fails.
    pub resource: Option<R>,
    /// Natural size of the shown image, or the viewport when unknown.
    pub content_size: Size,
    pub image: Option<ImageRef>,
}

/// Lazily constructed presentation.
#[derive(Debug, Clone, Default)]
pub enum Presentation<R> {
    #[default]
    Unbuilt,
    Built(Surfaces<R>),
}

impl<R> Presentation<R> {
    #[must_use]
    pub fn is_built(&self) -> bool {
        matches!(self, Self::Built(_))
    }

    #[must_use]
    pub fn surfaces(&self) -> Option<&Surfaces<R>> {
        match self {
            Self::Built(surfaces) => Some(surfaces),
            Self::Unbuilt => None,
        }
    }
}

/// Proof that a load was started; carries what the decode step needs.
#[derive(Debug, Clone)]
pub struct LoadTicket<R> {
    generation: u64,
    image: ImageRef,
    resource: Option<R>,
}

impl<R> LoadTicket<R> {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    /// `None` when the resource could not be resolved.
    #[must_use]
    pub fn resource(&self) -> Option<&R> {
        self.resource.as_ref()
    }
}

/// What a completed load changed.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Shown {
        current_index: Option<usize>,
        scroll: Option<ScrollRequest>,
        dimensions: Option<Dimensions>,
    },
    /// A newer load started before this one finished.
    Superseded,
}

impl LoadOutcome {
    #[must_use]
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown { .. })
    }
}

pub struct ImageGalleryView<H: GalleryHost> {
    host: H,
    presentation: Presentation<H::Resource>,
    generation: u64,
    siblings: SiblingIndex,
    zoom_pan: ZoomPanController,
    router: GestureRouter,
    translator: EventTranslator,
    navigation: NavigationController,
    strip: ThumbnailStrip,
    diagnostics: DiagnosticsCollector,
}

impl<H: GalleryHost> std::fmt::Debug for ImageGalleryView<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageGalleryView")
            .field("built", &self.presentation.is_built())
            .field("generation", &self.generation)
            .field("siblings", &self.siblings.len())
            .field("current_index", &self.siblings.current_index())
            .field("transform", &self.zoom_pan.transform())
            .finish_non_exhaustive()
    }
}

impl<H: GalleryHost> ImageGalleryView<H> {
    /// Creates a view with the hand-rolled zoom controller.
    pub fn new(host: H, config: &Config) -> Self {
        Self::with_zoom_pan(
            host,
            config,
            ZoomPanController::hand_rolled(ZoomSettings::from_config(config)),
        )
    }

    /// Creates a view around an already chosen zoom controller.
    pub fn with_zoom_pan(host: H, config: &Config, zoom_pan: ZoomPanController) -> Self {
        Self {
            host,
            presentation: Presentation::Unbuilt,
            generation: 0,
            siblings: SiblingIndex::new(),
            zoom_pan,
            router: GestureRouter::new(GestureSettings::from_config(config)),
            translator: EventTranslator::default(),
            navigation: NavigationController::new(),
            strip: ThumbnailStrip::new(StripLayout::from_config(config)),
            diagnostics: DiagnosticsCollector::default(),
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Loads `image`, awaiting the host's decode.
    pub async fn load_file(&mut self, image: ImageRef) -> LoadOutcome {
        let ticket = self.begin_load(image);
        let decoded = match ticket.resource() {
            Some(resource) => Some(self.host.await_decode(resource).await),
            None => None,
        };
        self.finish_load(ticket, decoded)
    }

    /// Starts a load cycle. Every call supersedes the previous ones.
    pub fn begin_load(&mut self, image: ImageRef) -> LoadTicket<H::Resource> {
        if !self.presentation.is_built() {
            log::debug!("Building gallery surfaces");
            self.presentation = Presentation::Built(Surfaces {
                resource: None,
                content_size: self.zoom_pan.viewport(),
                image: None,
            });
        }

        self.generation += 1;
        if self.navigation.pending_image() != Some(&image) {
            self.navigation.settle();
        }
        self.diagnostics.log_action(UserAction::LoadImage {
            name: Some(image.name().to_string()),
        });

        if let Err(err) = self.host.set_tab_label(image.basename()) {
            self.diagnostics
                .log_warning_simple(WarningType::TabLabel, err.to_string());
        }

        let resource = match self.host.resolve_display_resource(&image) {
            Ok(resource) => Some(resource),
            Err(err) => {
                self.diagnostics.log_warning_simple(
                    WarningType::ResolveFailed,
                    format!("{}: {err}", image.name()),
                );
                None
            }
        };

        LoadTicket {
            generation: self.generation,
            image,
            resource,
        }
    }

    /// Completes a load cycle.
    ///
    /// `decoded` is `None` when no decode ran. Stale tickets change nothing.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket<H::Resource>,
        decoded: Option<Result<Dimensions>>,
    ) -> LoadOutcome {
        if ticket.generation != self.generation {
            self.diagnostics.log_warning_simple(
                WarningType::StaleLoad,
                format!(
                    "{} superseded (generation {} < {})",
                    ticket.image.name(),
                    ticket.generation,
                    self.generation
                ),
            );
            return LoadOutcome::Superseded;
        }

        let dimensions = match decoded {
            Some(Ok(dimensions)) if !dimensions.is_empty() => Some(dimensions),
            Some(Ok(_)) => {
                self.diagnostics.log_warning_simple(
                    WarningType::DecodeFailed,
                    format!("{} has no pixels", ticket.image.name()),
                );
                None
            }
            Some(Err(err)) => {
                self.diagnostics.log_warning_simple(
                    WarningType::DecodeFailed,
                    format!("{}: {err}", ticket.image.name()),
                );
                None
            }
            None => None,
        };

        // Siblings first, then the transform, then the strip.
        let candidates = ticket
            .image
            .parent()
            .map(|folder| self.host.list_sibling_candidates(folder))
            .unwrap_or_default();
        self.siblings = SiblingIndex::rebuild(&ticket.image, &candidates);
        if self.siblings.current_index().is_none() {
            self.diagnostics.log_warning_simple(
                WarningType::NotInListing,
                format!("{} is not in its folder listing", ticket.image.name()),
            );
        }

        self.router.cancel();
        self.zoom_pan.reset();
        let viewport = self.zoom_pan.viewport();
        if let Presentation::Built(surfaces) = &mut self.presentation {
            if ticket.resource.is_some() {
                surfaces.resource = ticket.resource;
            }
            surfaces.content_size = dimensions.map_or(viewport, Dimensions::to_size);
            surfaces.image = Some(ticket.image.clone());
        }

        let scroll = self.strip.update(&self.siblings);
        if self.navigation.pending_image().is_none_or(|pending| *pending == ticket.image) {
            self.navigation.settle();
        }

        LoadOutcome::Shown {
            current_index: self.siblings.current_index(),
            scroll,
            dimensions,
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Feeds one native event through the translator and router.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Intent {
        match self.translator.translate(event) {
            Some(input) => self.handle_input(&input, now),
            None => Intent::Idle,
        }
    }

    /// Routes one input event and dispatches the resulting intent.
    ///
    /// Input is ignored until the first load built the presentation.
    pub fn handle_input(&mut self, input: &InputEvent, now: Instant) -> Intent {
        if !self.presentation.is_built() {
            return Intent::Idle;
        }
        let was_dragging = self.router.is_dragging();
        let before = self.zoom_pan.scale();
        let intent = self.router.handle(input, now, &mut self.zoom_pan);
        if was_dragging && !self.router.is_dragging() {
            self.diagnostics.log_action(UserAction::Pan);
        }

        match intent {
            Intent::Zoom(transform) => {
                if transform.scale > before {
                    self.diagnostics.log_action(UserAction::ZoomIn {
                        scale: transform.scale,
                    });
                } else if transform.scale < before {
                    self.diagnostics.log_action(UserAction::ZoomOut {
                        scale: transform.scale,
                    });
                }
            }
            Intent::Reset(_) => self.diagnostics.log_action(UserAction::ResetZoom),
            Intent::Navigate(direction) => {
                self.navigate(direction);
            }
            Intent::PickThumbnail { x } => {
                if let Some(index) = self.strip.entry_at(x) {
                    self.open_thumbnail(index);
                }
            }
            Intent::ScrollStrip { dx } => {
                let offset = self.strip.scroll_by(dx);
                self.diagnostics
                    .log_action(UserAction::ScrollStrip { offset });
            }
            Intent::Idle | Intent::Pan(_) => {}
        }
        intent
    }

    /// Requests the neighbouring sibling.
    pub fn navigate(&mut self, direction: Direction) -> Outcome {
        let outcome = self
            .navigation
            .go_to(&self.siblings, direction, &mut self.host);
        if outcome.is_requested() {
            self.diagnostics.log_action(match direction {
                Direction::Next => UserAction::NavigateNext,
                Direction::Previous => UserAction::NavigatePrevious,
            });
        } else {
            log::debug!("Navigation {direction:?} ignored: {outcome:?}");
        }
        outcome
    }

    pub fn show_next(&mut self) -> Outcome {
        self.navigate(Direction::Next)
    }

    pub fn show_previous(&mut self) -> Outcome {
        self.navigate(Direction::Previous)
    }

    /// Acts on a click on the thumbnail at `index`.
    pub fn open_thumbnail(&mut self, index: usize) -> Option<Outcome> {
        let image = self.strip.click(index)?.clone();
        let outcome = self
            .navigation
            .go_to_image(&self.siblings, &image, &mut self.host);
        if outcome.is_requested() {
            self.diagnostics
                .log_action(UserAction::OpenThumbnail { index });
        }
        Some(outcome)
    }

    // =========================================================================
    // Layout & visibility
    // =========================================================================

    /// Updates surface bounds, in window coordinates.
    pub fn set_layout(&mut self, display: Rectangle, strip: Option<Rectangle>) {
        self.translator.set_layout(display, strip);
        self.zoom_pan.set_viewport(display.size());
        self.strip
            .set_viewport_width(strip.map_or(0.0, |bounds| bounds.width));
    }

    /// Hidden views drop gestures in progress and ignore arrow keys.
    pub fn set_visible(&mut self, visible: bool) {
        if !visible {
            self.router.cancel();
        }
        self.router.set_visible(visible);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.zoom_pan.transform()
    }

    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        self.router.cursor_hint(self.zoom_pan.transform())
    }

    #[must_use]
    pub fn presentation(&self) -> &Presentation<H::Resource> {
        &self.presentation
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&ImageRef> {
        self.presentation
            .surfaces()
            .and_then(|surfaces| surfaces.image.as_ref())
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn siblings(&self) -> &SiblingIndex {
        &self.siblings
    }

    #[must_use]
    pub fn thumbnail_strip(&self) -> &ThumbnailStrip {
        &self.strip
    }

    #[must_use]
    pub fn router(&self) -> &GestureRouter {
        &self.router
    }

    #[must_use]
    pub fn zoom_pan(&self) -> &ZoomPanController {
        &self.zoom_pan
    }

    pub fn zoom_pan_mut(&mut self) -> &mut ZoomPanController {
        &mut self.zoom_pan
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
