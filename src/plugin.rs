// SPDX-License-Identifier: MPL-2.0
//! View identity and the extension claim lifecycle.
//!
//! While a [`GalleryPlugin`] is loaded, every supported image extension opens
//! in [`VIEW_TYPE_IMAGE`]. Unloading gives each extension back to whichever
//! view type owned it before, or to the host's built-in image view.

use crate::application::port::ViewRegistry;
use crate::diagnostics::{DiagnosticsCollector, WarningType};
use crate::domain::media::ImageExtension;
use crate::error::{Error, Result};
use std::collections::BTreeMap;

/// View type the gallery registers under.
pub const VIEW_TYPE_IMAGE: &str = "image-viewer";

/// Human-readable view name.
pub const DISPLAY_TEXT: &str = "Image Viewer";

/// Icon identifier shown on the view's tab.
pub const ICON: &str = "images";

/// The host's built-in image view, used when an extension had no prior owner.
pub const FALLBACK_VIEW_TYPE: &str = "image";

fn supported_extensions() -> Vec<&'static str> {
    ImageExtension::ALL.iter().map(|ext| ext.as_str()).collect()
}

/// Record of the routes taken over by the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionClaim {
    /// Extension to prior view type; extensions without an owner are absent.
    previous: BTreeMap<&'static str, String>,
}

impl ExtensionClaim {
    /// Routes every supported extension to [`VIEW_TYPE_IMAGE`], remembering
    /// the previous owners.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry refuses the change. Routes removed
    /// before the refusal are restored first, as far as the registry allows.
    pub fn claim<R: ViewRegistry + ?Sized>(registry: &mut R) -> Result<Self> {
        let extensions = supported_extensions();
        let previous = extensions
            .iter()
            .filter_map(|&ext| {
                registry
                    .view_type_for(ext)
                    .filter(|view_type| !view_type.is_empty())
                    .map(|view_type| (ext, view_type))
            })
            .collect();
        let claim = Self { previous };

        registry.unregister_extensions(&extensions)?;
        if let Err(err) = registry.register_extensions(&extensions, VIEW_TYPE_IMAGE) {
            for failure in claim.reregister_previous(registry) {
                log::warn!("Failed to roll back extension claim: {failure}");
            }
            return Err(err);
        }
        log::debug!("Claimed {} image extensions", extensions.len());
        Ok(claim)
    }

    /// Prior owner of `extension`, if it had one.
    #[must_use]
    pub fn previous_owner(&self, extension: &str) -> Option<&str> {
        self.previous.get(extension).map(String::as_str)
    }

    /// Extensions grouped by the view type they return to.
    #[must_use]
    pub fn restore_plan(&self) -> BTreeMap<String, Vec<&'static str>> {
        let mut groups: BTreeMap<String, Vec<&'static str>> = BTreeMap::new();
        for ext in supported_extensions() {
            let owner = self
                .previous
                .get(ext)
                .map_or(FALLBACK_VIEW_TYPE, String::as_str);
            groups.entry(owner.to_string()).or_default().push(ext);
        }
        groups
    }

    /// Gives the extensions back. A refused change does not stop the rest;
    /// the refusals are returned.
    pub fn release<R: ViewRegistry + ?Sized>(self, registry: &mut R) -> Vec<Error> {
        let mut failures = Vec::new();
        if let Err(err) = registry.unregister_extensions(&supported_extensions()) {
            failures.push(err);
        }
        failures.extend(self.reregister_previous(registry));
        failures
    }

    fn reregister_previous<R: ViewRegistry + ?Sized>(&self, registry: &mut R) -> Vec<Error> {
        self.restore_plan()
            .into_iter()
            .filter_map(|(view_type, extensions)| {
                registry
                    .register_extensions(&extensions, &view_type)
                    .err()
            })
            .collect()
    }
}

/// Load/unload lifecycle owner.
#[derive(Debug, Default)]
pub struct GalleryPlugin {
    claim: Option<ExtensionClaim>,
    diagnostics: DiagnosticsCollector,
}

impl GalleryPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.claim.is_some()
    }

    #[must_use]
    pub fn claim(&self) -> Option<&ExtensionClaim> {
        self.claim.as_ref()
    }

    /// Registry refusals seen while loading or unloading.
    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Claims the image extensions. Loading twice is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry refuses the claim.
    pub fn load<R: ViewRegistry + ?Sized>(&mut self, registry: &mut R) -> Result<()> {
        if self.claim.is_none() {
            match ExtensionClaim::claim(registry) {
                Ok(claim) => self.claim = Some(claim),
                Err(err) => {
                    self.diagnostics
                        .log_warning_simple(WarningType::Registry, format!("claim refused: {err}"));
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    /// Restores the previous routes. Unloading twice is a no-op.
    pub fn unload<R: ViewRegistry + ?Sized>(&mut self, registry: &mut R) {
        if let Some(claim) = self.claim.take() {
            for failure in claim.release(registry) {
                self.diagnostics
                    .log_warning_simple(WarningType::Registry, format!("restore refused: {failure}"));
            }
        }
    }
}
