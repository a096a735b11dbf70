//! No-op animation driver
//!
//! Selected when the environment cannot animate. Players are finished the
//! moment they are created, so callers waiting on completion proceed at once.

use std::sync::Arc;

use plinth_domain::constants::NOOP_CAPABILITY_TAG;

use super::driver::{AnimationDriver, AnimationPlayer, Keyframe};
use crate::dom::Element;

/// Driver that never animates
#[derive(Debug, Default)]
pub struct NoOpAnimationDriver;

impl AnimationDriver for NoOpAnimationDriver {
    fn name(&self) -> &'static str {
        NOOP_CAPABILITY_TAG
    }

    fn animate(
        &self,
        _element: &Element,
        _keyframes: &[Keyframe],
        _duration_ms: u64,
    ) -> Arc<dyn AnimationPlayer> {
        Arc::new(NoOpPlayer)
    }
}

/// Player that is already finished
#[derive(Debug, Default)]
pub struct NoOpPlayer;

impl AnimationPlayer for NoOpPlayer {
    fn play(&self) {}

    fn finish(&self) {}

    fn has_started(&self) -> bool {
        true
    }

    fn is_finished(&self) -> bool {
        true
    }

    fn duration_ms(&self) -> u64 {
        0
    }
}
