// SPDX-License-Identifier: MPL-2.0
//! Map-backed [`ViewRegistry`].

use crate::application::port::ViewRegistry;
use crate::error::Result;
use std::collections::HashMap;

/// Extension routing table kept in memory. Extensions are stored lower-case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryViewRegistry {
    routes: HashMap<String, String>,
}

impl InMemoryViewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with `(extension, view_type)` routes.
    pub fn with_routes<'a>(routes: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            routes: routes
                .into_iter()
                .map(|(ext, view_type)| (ext.to_ascii_lowercase(), view_type.to_string()))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl ViewRegistry for InMemoryViewRegistry {
    fn view_type_for(&self, extension: &str) -> Option<String> {
        self.routes.get(&extension.to_ascii_lowercase()).cloned()
    }

    fn register_extensions(&mut self, extensions: &[&str], view_type: &str) -> Result<()> {
        for ext in extensions {
            self.routes
                .insert(ext.to_ascii_lowercase(), view_type.to_string());
        }
        Ok(())
    }

    fn unregister_extensions(&mut self, extensions: &[&str]) -> Result<()> {
        for ext in extensions {
            self.routes.remove(&ext.to_ascii_lowercase());
        }
        Ok(())
    }
}
