//! Application configuration root

use super::{CompositionConfig, LoggingConfig};
use plinth_domain::value_objects::EnvironmentSnapshot;
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging settings
    pub logging: LoggingConfig,

    /// Environment snapshot handed to capability probes
    pub environment: EnvironmentSnapshot,

    /// Composition policy
    pub composition: CompositionConfig,
}
