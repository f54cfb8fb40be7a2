//! WCAG rules extension definition.

use wcagfix_protocols::error::ExtensionError;
use wcagfix_protocols::extension::{Extension, ExtensionManifest, Provides, RuleRegistryAccess};
use wcagfix_protocols::types::Version;

use crate::rules::default_rules;

/// Extension registering every markup rule in run order.
pub struct WcagRulesExtension {
    manifest: ExtensionManifest,
}

impl WcagRulesExtension {
    pub fn new() -> Self {
        let mut manifest = ExtensionManifest::new("rules-wcag", "WCAG Rules", Version::new(0, 1, 0))
            .with_description("Markup remediation rules for WCAG 2.1 success criteria");
        manifest.provides = Provides {
            rules: default_rules().iter().map(|r| r.id().to_string()).collect(),
            ..Default::default()
        };

        Self { manifest }
    }
}

impl Default for WcagRulesExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for WcagRulesExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    fn register(&self, registry: &mut dyn RuleRegistryAccess) -> Result<(), ExtensionError> {
        for rule in default_rules() {
            registry.register_rule(rule)?;
        }
        Ok(())
    }
}
