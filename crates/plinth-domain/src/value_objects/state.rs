//! Composed context lifecycle state

use serde::Serialize;
use std::fmt;

/// Lifecycle of a composed context
///
/// `Uninitialized → Initializing → Ready`, or `Initializing → Failed`.
/// `Failed` is terminal: the context must be discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformState {
    /// Bindings may still be registered
    Uninitialized,
    /// Initializer actions are running
    Initializing,
    /// Every initializer succeeded; the context serves resolutions
    Ready,
    /// An initializer failed; nothing is resolved any more
    Failed,
}

impl PlatformState {
    /// Whether a transition to `next` is allowed
    pub fn can_transition_to(self, next: PlatformState) -> bool {
        matches!(
            (self, next),
            (Self::Uninitialized, Self::Initializing)
                | (Self::Initializing, Self::Ready)
                | (Self::Initializing, Self::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Ready | Self::Failed)
    }
}

impl fmt::Display for PlatformState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Uninitialized => "uninitialized",
            Self::Initializing => "initializing",
            Self::Ready => "ready",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}
