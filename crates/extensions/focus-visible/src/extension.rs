//! Focus-visible extension definition.

use std::sync::Arc;

use wcagfix_protocols::error::ExtensionError;
use wcagfix_protocols::extension::{Extension, ExtensionManifest, Provides, RuleRegistryAccess};
use wcagfix_protocols::types::Version;

use crate::detector::FocusVisibleDetector;
use crate::remediator::FocusVisibleRemediator;

pub(crate) const EXTENSION_ID: &str = "focus-visible";

/// Extension registering the focus-visible detector and its remediator.
pub struct FocusVisibleExtension {
    manifest: ExtensionManifest,
}

impl FocusVisibleExtension {
    pub fn new() -> Self {
        let mut manifest = ExtensionManifest::new(EXTENSION_ID, "Focus Visible", Version::new(0, 1, 0))
            .with_description("Detects and fixes interactive elements without a visible focus outline");
        manifest.provides = Provides {
            checks: vec!["focus-visible".to_string()],
            ..Default::default()
        };

        Self { manifest }
    }
}

impl Default for FocusVisibleExtension {
    fn default() -> Self {
        Self::new()
    }
}

impl Extension for FocusVisibleExtension {
    fn manifest(&self) -> &ExtensionManifest {
        &self.manifest
    }

    fn register(&self, registry: &mut dyn RuleRegistryAccess) -> Result<(), ExtensionError> {
        registry.register_check(
            Arc::new(FocusVisibleDetector::new()),
            Arc::new(FocusVisibleRemediator::new()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcagfix_protocols::check::{IssueDetector, IssueRemediator};
    use wcagfix_protocols::rule::Rule;

    #[derive(Default)]
    struct Recorder {
        checks: Vec<(String, String)>,
    }

    impl RuleRegistryAccess for Recorder {
        fn register_rule(&mut self, rule: Arc<dyn Rule>) -> Result<(), ExtensionError> {
            Err(ExtensionError::RegistrationFailed(format!("unexpected rule {}", rule.id())))
        }

        fn register_check(
            &mut self,
            detector: Arc<dyn IssueDetector>,
            remediator: Arc<dyn IssueRemediator>,
        ) -> Result<(), ExtensionError> {
            self.checks.push((
                detector.definition().id.clone(),
                remediator.definition().id.clone(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_extension_manifest() {
        let ext = FocusVisibleExtension::new();
        assert_eq!(ext.manifest().id, "focus-visible");
        assert_eq!(ext.manifest().provides.checks, vec!["focus-visible"]);
        assert!(ext.manifest().provides.rules.is_empty());
    }

    #[test]
    fn test_register_check_pair() {
        let mut recorder = Recorder::default();
        FocusVisibleExtension::new().register(&mut recorder).unwrap();
        assert_eq!(
            recorder.checks,
            vec![("focus-visible".to_string(), "focus-visible-fix".to_string())]
        );
    }
}
