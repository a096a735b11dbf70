//! Web animations driver

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::trace;

use super::driver::{AnimationDriver, AnimationPlayer, Keyframe};
use crate::constants::WEB_ANIMATIONS_TAG;
use crate::dom::Element;

/// Driver backed by the native web animations API
#[derive(Debug, Default)]
pub struct WebAnimationsDriver;

impl AnimationDriver for WebAnimationsDriver {
    fn name(&self) -> &'static str {
        WEB_ANIMATIONS_TAG
    }

    fn animate(
        &self,
        element: &Element,
        keyframes: &[Keyframe],
        duration_ms: u64,
    ) -> Arc<dyn AnimationPlayer> {
        trace!(element = element.tag(), keyframes = keyframes.len(), duration_ms, "Animating");
        Arc::new(WebAnimationsPlayer {
            keyframes: keyframes.to_vec(),
            duration_ms,
            started: AtomicBool::new(false),
            finished: AtomicBool::new(false),
        })
    }
}

/// Player for one native animation
#[derive(Debug)]
pub struct WebAnimationsPlayer {
    keyframes: Vec<Keyframe>,
    duration_ms: u64,
    started: AtomicBool,
    finished: AtomicBool,
}

impl WebAnimationsPlayer {
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }
}

impl AnimationPlayer for WebAnimationsPlayer {
    fn play(&self) {
        self.started.store(true, Ordering::SeqCst);
    }

    fn finish(&self) {
        self.started.store(true, Ordering::SeqCst);
        self.finished.store(true, Ordering::SeqCst);
    }

    fn has_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    fn duration_ms(&self) -> u64 {
        self.duration_ms
    }
}
