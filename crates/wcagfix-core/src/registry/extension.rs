//! Extension registry for installed extensions.

use std::sync::Arc;

use tracing::debug;
use wcagfix_protocols::error::ExtensionError;
use wcagfix_protocols::extension::{Extension, ExtensionManifest};

use super::base::{OrderedRegistry, Registerable};
use super::rule::RuleRegistry;

impl Registerable for dyn Extension {
    fn registry_id(&self) -> &str {
        &self.manifest().id
    }
}

/// Installed extensions, in installation order.
pub struct ExtensionRegistry {
    extensions: OrderedRegistry<dyn Extension>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self {
            extensions: OrderedRegistry::new(),
        }
    }

    /// Install an extension: let it register its rules and checks, then record it.
    ///
    /// Fails without touching `rules` if the extension is already installed.
    pub fn install(
        &mut self,
        extension: Arc<dyn Extension>,
        rules: &mut RuleRegistry,
    ) -> Result<(), ExtensionError> {
        let id = extension.manifest().id.clone();
        if self.extensions.contains(&id) {
            return Err(ExtensionError::AlreadyRegistered(id));
        }

        extension.register(rules)?;
        debug!(extension = %id, "Installed extension");
        self.extensions.register(extension)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Extension>> {
        self.extensions.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.extensions.contains(id)
    }

    /// Manifests of all installed extensions.
    pub fn list(&self) -> Vec<ExtensionManifest> {
        self.extensions.iter().map(|e| e.manifest().clone()).collect()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
