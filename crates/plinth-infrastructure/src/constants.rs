//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `plinth_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "plinth.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "plinth";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "PLINTH";

/// Separator between nested keys in environment variables (e.g. `PLINTH_LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PLINTH_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "plinth";

// ============================================================================
// COMPOSITION CONSTANTS
// ============================================================================

/// Name of the application-level context composed on top of a platform
pub const APPLICATION_CONTEXT_NAME: &str = "application";
