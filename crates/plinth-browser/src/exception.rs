//! Exception handler
//!
//! Reports errors to the installed DOM adapter's console and to tracing.

use std::error::Error as _;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use plinth_domain::error::Error;

use crate::dom::DomAdapter;

/// Application-wide error reporter
pub struct ExceptionHandler {
    adapter: Arc<dyn DomAdapter>,
    handled: AtomicUsize,
}

impl ExceptionHandler {
    pub fn new(adapter: Arc<dyn DomAdapter>) -> Self {
        Self {
            adapter,
            handled: AtomicUsize::new(0),
        }
    }

    /// Report an error, with an optional description of where it happened
    pub fn call(&self, error: &Error, context: Option<&str>) {
        self.handled.fetch_add(1, Ordering::Relaxed);
        self.adapter.log_error(&format!("EXCEPTION: {error}"));

        let mut source = error.source();
        while let Some(cause) = source {
            self.adapter.log_error(&format!("ORIGINAL EXCEPTION: {cause}"));
            source = cause.source();
        }
        if let Some(context) = context {
            self.adapter.log_error(&format!("ERROR CONTEXT: {context}"));
        }
    }

    /// Number of errors reported so far
    pub fn handled_count(&self) -> usize {
        self.handled.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for ExceptionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExceptionHandler")
            .field("adapter", &self.adapter.name())
            .field("handled", &self.handled_count())
            .finish()
    }
}
