//! Environment snapshot
//!
//! What the hosting environment reports about itself at composition time.
//! Capability probes are pure functions of this snapshot.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Immutable view of the hosting environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentSnapshot {
    /// Platform name (e.g. "browser")
    pub platform: String,

    /// Location of the hosting document
    pub url: String,

    /// Title of the hosting document
    pub title: String,

    /// Feature flags the environment supports (e.g. "web-animations")
    pub features: BTreeSet<String>,
}

impl Default for EnvironmentSnapshot {
    fn default() -> Self {
        Self {
            platform: "browser".to_string(),
            url: "about:blank".to_string(),
            title: String::new(),
            features: BTreeSet::new(),
        }
    }
}

impl EnvironmentSnapshot {
    /// Snapshot for the given platform with no features
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            ..Default::default()
        }
    }

    /// Add a supported feature
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }

    /// Set the document location
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the document title
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Whether the environment reports the feature
    pub fn supports(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}
