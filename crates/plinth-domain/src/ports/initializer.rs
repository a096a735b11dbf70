//! Platform initializer actions

use crate::error::Result;

/// Start-up action run exactly once, in registration order, before a context is ready
pub trait InitializerAction: Send + Sync {
    /// Name used in logs and failure reports
    fn name(&self) -> &str;

    /// Perform the action
    fn run(&self) -> Result<()>;
}

/// Initializer backed by a closure
pub struct FnInitializer<F> {
    name: &'static str,
    action: F,
}

impl<F> FnInitializer<F>
where
    F: Fn() -> Result<()> + Send + Sync,
{
    /// Wrap a closure as an initializer action
    pub fn new(name: &'static str, action: F) -> Self {
        Self { name, action }
    }
}

impl<F> InitializerAction for FnInitializer<F>
where
    F: Fn() -> Result<()> + Send + Sync,
{
    fn name(&self) -> &str {
        self.name
    }

    fn run(&self) -> Result<()> {
        (self.action)()
    }
}
