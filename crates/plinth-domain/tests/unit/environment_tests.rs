//! Environment snapshot and capability value tests

use plinth_domain::value_objects::{CapabilityTag, EnvironmentSnapshot, PlatformState, ProbeOutcome};

#[test]
fn test_snapshot_builder() {
    let env = EnvironmentSnapshot::new("browser")
        .with_url("https://example.test/")
        .with_title("Example")
        .with_feature("web-animations");

    assert_eq!(env.platform, "browser");
    assert_eq!(env.url, "https://example.test/");
    assert_eq!(env.title, "Example");
    assert!(env.supports("web-animations"));
    assert!(!env.supports("touch"));
}

#[test]
fn test_snapshot_deserializes_with_defaults() {
    let env: EnvironmentSnapshot =
        serde_json::from_str(r#"{"features": ["touch"]}"#).unwrap();
    assert_eq!(env.platform, "browser");
    assert_eq!(env.url, "about:blank");
    assert!(env.supports("touch"));
}

#[test]
fn test_capability_tag_equality() {
    let owned: CapabilityTag = String::from("web-animations").into();
    let borrowed = CapabilityTag::from_static("web-animations");
    assert_eq!(owned, borrowed);
    assert_eq!(borrowed.to_string(), "web-animations");
    assert!(ProbeOutcome::Supported(owned).is_supported());
    assert!(!ProbeOutcome::Unsupported.is_supported());
}

#[test]
fn test_state_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&PlatformState::Ready).unwrap(), "\"ready\"");
    assert!(PlatformState::Failed.is_terminal());
    assert!(!PlatformState::Initializing.is_terminal());
}
