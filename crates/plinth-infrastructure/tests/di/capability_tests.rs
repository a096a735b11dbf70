//! Capability selection through a context

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plinth_domain::error::Error;
use plinth_domain::ports::{FeatureProbe, FnProbe};
use plinth_domain::tokens::ENVIRONMENT;
use plinth_domain::value_objects::{EnvironmentSnapshot, ProbeOutcome, Token};
use plinth_infrastructure::di::{CapabilitySelector, ContextBuilder, PlatformContext};

trait Animator: Send + Sync {
    fn kind(&self) -> &'static str;
    fn animate(&self, frames: usize) -> usize;
}

struct NativeAnimator;

impl Animator for NativeAnimator {
    fn kind(&self) -> &'static str {
        "native"
    }

    fn animate(&self, frames: usize) -> usize {
        frames
    }
}

struct NoOpAnimator;

impl Animator for NoOpAnimator {
    fn kind(&self) -> &'static str {
        "noop"
    }

    fn animate(&self, _frames: usize) -> usize {
        0
    }
}

fn selector() -> CapabilitySelector<dyn Animator> {
    CapabilitySelector::<dyn Animator>::new(
        FeatureProbe::new("animation", "web-animations", "web-animations".into()),
        || Arc::new(NoOpAnimator),
    )
    .with_implementation("web-animations", || Arc::new(NativeAnimator))
}

fn context_for(env: EnvironmentSnapshot, token: &Token<dyn Animator>) -> PlatformContext {
    ContextBuilder::new("capability")
        .with_binding(ENVIRONMENT.use_value(Arc::new(env)))
        .with_binding(selector().bind(token))
        .build()
        .unwrap()
}

#[test]
fn test_supported_environment_selects_native() {
    let token: Token<dyn Animator> = Token::new("Animator");
    let context = context_for(
        EnvironmentSnapshot::new("browser").with_feature("web-animations"),
        &token,
    );

    let animator = context.get(&token).unwrap();
    assert_eq!(animator.kind(), "native");
    assert_eq!(animator.animate(12), 12);
}

#[test]
fn test_unsupported_environment_selects_inert_fallback() {
    let token: Token<dyn Animator> = Token::new("Animator");
    let context = context_for(EnvironmentSnapshot::new("server"), &token);

    let animator = context.get(&token).unwrap();
    assert_eq!(animator.kind(), "noop");
    assert_eq!(animator.animate(12), 0);
}

#[test]
fn test_probe_runs_once_per_context() {
    let probes = Arc::new(AtomicUsize::new(0));
    let counter = probes.clone();
    let token: Token<dyn Animator> = Token::new("Animator");
    let selector = CapabilitySelector::<dyn Animator>::new(
        FnProbe::new("animation", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(ProbeOutcome::Unsupported)
        }),
        || Arc::new(NoOpAnimator),
    );

    let context = ContextBuilder::new("once")
        .with_binding(ENVIRONMENT.use_value(Arc::new(EnvironmentSnapshot::default())))
        .with_binding(selector.bind(&token))
        .build()
        .unwrap();

    let first = context.get(&token).unwrap();
    let second = context.get(&token).unwrap();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(probes.load(Ordering::SeqCst), 1);
}

#[test]
fn test_probe_failure_surfaces() {
    let token: Token<dyn Animator> = Token::new("Animator");
    let selector = CapabilitySelector::<dyn Animator>::new(
        FnProbe::new("animation", |_| Err(Error::infrastructure("environment unreadable"))),
        || Arc::new(NoOpAnimator),
    );

    let context = ContextBuilder::new("failing-probe")
        .with_binding(ENVIRONMENT.use_value(Arc::new(EnvironmentSnapshot::default())))
        .with_binding(selector.bind(&token))
        .build()
        .unwrap();

    let err = context.get(&token).err().unwrap();
    assert!(matches!(err, Error::ProbeFailure { ref capability, .. } if capability == "animation"));
}

#[test]
fn test_missing_environment_is_unknown_identity() {
    let token: Token<dyn Animator> = Token::new("Animator");
    let context = ContextBuilder::new("no-env")
        .with_binding(selector().bind(&token))
        .build()
        .unwrap();

    assert!(context.get(&token).err().unwrap().is_unknown_identity());
}
