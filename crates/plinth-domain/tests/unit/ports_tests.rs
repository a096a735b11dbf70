//! Port helper tests

use plinth_domain::error::Error;
use plinth_domain::ports::{
    CapabilityProbe, FeatureProbe, FnInitializer, FnProbe, InitializerAction, OverrideRecord,
};
use plinth_domain::value_objects::{EnvironmentSnapshot, ProbeOutcome};

#[test]
fn test_feature_probe() {
    let probe = FeatureProbe::new("animation", "web-animations", "web-animations".into());
    let with = EnvironmentSnapshot::default().with_feature("web-animations");
    let without = EnvironmentSnapshot::default();

    assert_eq!(probe.capability(), "animation");
    assert!(probe.probe(&with).unwrap().is_supported());
    assert_eq!(probe.probe(&without).unwrap(), ProbeOutcome::Unsupported);
}

#[test]
fn test_fn_probe_errors_pass_through() {
    let probe = FnProbe::new("clock", |_| Err(Error::infrastructure("no clock")));
    assert!(probe.probe(&EnvironmentSnapshot::default()).is_err());
}

#[test]
fn test_fn_initializer() {
    let ok = FnInitializer::new("ok", || Ok(()));
    let failing = FnInitializer::new("failing", || Err(Error::infrastructure("nope")));

    assert_eq!(ok.name(), "ok");
    assert!(ok.run().is_ok());
    assert!(failing.run().is_err());
}

#[test]
fn test_override_record_trust() {
    let mut record = OverrideRecord {
        identity: "Sanitizer".to_string(),
        replaced_origin: "browser-module".to_string(),
        origin: "plugin".to_string(),
        sensitive: true,
        trusted: false,
    };
    assert!(record.is_untrusted());

    record.trusted = true;
    assert!(!record.is_untrusted());

    record.sensitive = false;
    record.trusted = false;
    assert!(!record.is_untrusted());
}
