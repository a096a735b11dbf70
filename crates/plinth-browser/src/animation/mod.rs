//! Animation drivers
//!
//! The driver is a capability: [`animation_selector`] picks
//! [`WebAnimationsDriver`] when the environment advertises web animations
//! and the inert [`NoOpAnimationDriver`] otherwise.
//!
//! Inside a platform the question is put to the installed DOM adapter
//! ([`animation_driver_binding`]), so the driver cannot be resolved before
//! the platform's `install-dom-adapter` initializer has run.

pub mod driver;
pub mod noop;
pub mod web_animations;

use std::sync::Arc;

use plinth_domain::ports::FeatureProbe;
use plinth_domain::value_objects::{Binding, EnvironmentSnapshot};
use plinth_infrastructure::di::CapabilitySelector;

pub use driver::{AnimationDriver, AnimationPlayer, Keyframe};
pub use noop::{NoOpAnimationDriver, NoOpPlayer};
pub use web_animations::{WebAnimationsDriver, WebAnimationsPlayer};

use crate::constants::{ANIMATION_CAPABILITY, WEB_ANIMATIONS_FEATURE, WEB_ANIMATIONS_TAG};
use crate::dom::{AdapterSlot, DomAdapter};
use crate::tokens::{ADAPTER_SLOT, ANIMATION_DRIVER};

/// Capability selector for the animation driver
pub fn animation_selector() -> CapabilitySelector<dyn AnimationDriver> {
    CapabilitySelector::<dyn AnimationDriver>::new(
        FeatureProbe::new(
            ANIMATION_CAPABILITY,
            WEB_ANIMATIONS_FEATURE,
            WEB_ANIMATIONS_TAG.into(),
        ),
        || Arc::new(NoOpAnimationDriver),
    )
    .with_implementation(WEB_ANIMATIONS_TAG, || Arc::new(WebAnimationsDriver))
}

/// Animation features as reported by a DOM adapter
pub fn adapter_capabilities(adapter: &dyn DomAdapter) -> EnvironmentSnapshot {
    let snapshot = EnvironmentSnapshot::new(adapter.name());
    if adapter.supports_web_animation() {
        snapshot.with_feature(WEB_ANIMATIONS_FEATURE)
    } else {
        snapshot
    }
}

/// [`ANIMATION_DRIVER`] selected by asking the installed adapter
pub fn animation_driver_binding() -> Binding {
    animation_selector().bind_with(&ANIMATION_DRIVER, &*ADAPTER_SLOT, |slot: &AdapterSlot| {
        Ok(adapter_capabilities(slot.current()?.as_ref()))
    })
}
