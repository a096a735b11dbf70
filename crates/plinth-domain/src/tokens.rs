//! Reserved tokens
//!
//! Identities the composition engine itself understands. They are created
//! once per process; each context still owns its own bindings for them.

use once_cell::sync::Lazy;

use crate::ports::InitializerAction;
use crate::value_objects::{EnvironmentSnapshot, Token};

/// Multi-binding identity collecting platform initializer actions
pub static PLATFORM_INITIALIZER: Lazy<Token<dyn InitializerAction>> =
    Lazy::new(|| Token::new("PLATFORM_INITIALIZER"));

/// Name of the platform a context was composed for
pub static PLATFORM_NAME: Lazy<Token<String>> = Lazy::new(|| Token::new("PLATFORM_NAME"));

/// Environment snapshot consumed by capability probes
pub static ENVIRONMENT: Lazy<Token<EnvironmentSnapshot>> =
    Lazy::new(|| Token::new("ENVIRONMENT"));
