// SPDX-License-Identifier: MPL-2.0
//! View registry port definition.
//!
//! Hosts map file extensions to the view type that opens them. The gallery
//! claims the image extensions while it is loaded and gives them back on
//! unload through this port.

use crate::error::Result;

/// Port for the host's extension-to-view routing table.
pub trait ViewRegistry {
    /// Returns the view type currently registered for `extension`, if any.
    fn view_type_for(&self, extension: &str) -> Option<String>;

    /// Routes every extension in `extensions` to `view_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the registration.
    fn register_extensions(&mut self, extensions: &[&str], view_type: &str) -> Result<()>;

    /// Removes any routing for `extensions`.
    ///
    /// # Errors
    ///
    /// Returns an error if the host refuses the change.
    fn unregister_extensions(&mut self, extensions: &[&str]) -> Result<()>;
}
