//! Animation driver port

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::dom::Element;

/// One step of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct Keyframe {
    /// Position in the animation, from 0.0 to 1.0
    pub offset: f64,
    /// Style properties at this offset
    pub styles: BTreeMap<String, String>,
}

impl Keyframe {
    pub fn new(offset: f64) -> Self {
        Self {
            offset,
            styles: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }
}

/// Handle to a running animation
pub trait AnimationPlayer: Send + Sync {
    fn play(&self);

    /// Jump to the end state
    fn finish(&self);

    fn has_started(&self) -> bool;

    fn is_finished(&self) -> bool;

    /// Total duration in milliseconds
    fn duration_ms(&self) -> u64;
}

/// Runs keyframe animations on elements
pub trait AnimationDriver: Send + Sync {
    /// Driver name, reported by capability selection
    fn name(&self) -> &'static str;

    fn animate(
        &self,
        element: &Element,
        keyframes: &[Keyframe],
        duration_ms: u64,
    ) -> Arc<dyn AnimationPlayer>;
}
