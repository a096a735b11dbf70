//! Sensitive binding overrides in application contexts

use std::sync::Arc;

use plinth_browser::constants::BROWSER_MODULE_NAME;
use plinth_browser::platforms::{application_builder, create_browser_platform};
use plinth_browser::security::DomSanitizationServiceImpl;
use plinth_browser::tokens::DOM_SANITIZATION_SERVICE;
use plinth_domain::error::Error;
use plinth_infrastructure::config::CompositionConfig;
use plinth_infrastructure::di::{ContextBuilder, RecordingOverrideAudit};

use super::test_config;

#[test]
fn test_untrusted_sanitizer_override_is_reported() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();
    let audit = Arc::new(RecordingOverrideAudit::new());

    let app = application_builder(&platform, &CompositionConfig::default())
        .with_audit(audit.clone())
        .with_binding(DOM_SANITIZATION_SERVICE.use_class::<DomSanitizationServiceImpl>(|s| s))
        .build()
        .unwrap();

    let untrusted = audit.untrusted();
    assert_eq!(untrusted.len(), 1);
    assert_eq!(untrusted[0].identity, DOM_SANITIZATION_SERVICE.identity().name());
    assert!(app.get(&*DOM_SANITIZATION_SERVICE).is_ok());
}

#[test]
fn test_untrusted_sanitizer_override_can_be_denied() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();
    let policy = CompositionConfig {
        deny_untrusted_overrides: true,
        ..Default::default()
    };

    let err = application_builder(&platform, &policy)
        .with_binding(DOM_SANITIZATION_SERVICE.use_class::<DomSanitizationServiceImpl>(|s| s))
        .build()
        .unwrap_err();
    assert!(matches!(err, Error::UntrustedOverride { .. }));
}

#[test]
fn test_trusted_sanitizer_override_passes_deny_policy() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();
    let audit = Arc::new(RecordingOverrideAudit::new());
    let policy = CompositionConfig {
        deny_untrusted_overrides: true,
        ..Default::default()
    };

    application_builder(&platform, &policy)
        .with_audit(audit.clone())
        .with_trusted_override(
            DOM_SANITIZATION_SERVICE.use_class::<DomSanitizationServiceImpl>(|s| s),
        )
        .build()
        .unwrap();

    assert_eq!(audit.records().len(), 1);
    assert!(audit.untrusted().is_empty());
}

#[test]
fn test_sanitizer_replaced_below_the_application_is_denied() {
    let platform = create_browser_platform(&test_config(&[])).unwrap();
    let app = Arc::new(
        application_builder(&platform, &CompositionConfig::default())
            .build()
            .unwrap(),
    );
    let audit = Arc::new(RecordingOverrideAudit::new());

    let err = ContextBuilder::new("component")
        .with_parent(app)
        .with_audit(audit.clone())
        .deny_untrusted_overrides(true)
        .with_binding(DOM_SANITIZATION_SERVICE.use_class::<DomSanitizationServiceImpl>(|s| s))
        .build()
        .unwrap_err();

    assert!(matches!(err, Error::UntrustedOverride { .. }));
    assert_eq!(audit.untrusted().len(), 1);
    assert_eq!(audit.untrusted()[0].replaced_origin, BROWSER_MODULE_NAME);
}
