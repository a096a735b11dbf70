//! Security services

pub mod sanitization;

pub use sanitization::{
    DomSanitizationService, DomSanitizationServiceImpl, SafeValue, SanitizationService,
    SecurityContext,
};
