//! Configuration types

pub mod app;
pub mod composition;
pub mod logging;

pub use app::AppConfig;
pub use composition::CompositionConfig;
pub use logging::LoggingConfig;
