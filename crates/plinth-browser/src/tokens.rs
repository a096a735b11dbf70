//! Browser service tokens
//!
//! Platform-level tokens are bound in the platform context; application-level
//! tokens are bound by [`BrowserModule`](crate::units::BrowserModule) in the
//! application context.

use once_cell::sync::Lazy;
use plinth_domain::value_objects::Token;

use crate::animation::AnimationDriver;
use crate::dom::{AdapterSlot, DebugRootRenderer, Document, DomSharedStylesHost, RootRenderer, SharedStylesHost};
use crate::events::{EventManager, EventManagerPlugin, GestureConfig};
use crate::exception::ExceptionHandler;
use crate::location::PlatformLocation;
use crate::security::{DomSanitizationService, SanitizationService};
use crate::testability::{Testability, TestabilityRegistry};

// ============================================================================
// PLATFORM LEVEL
// ============================================================================

/// Slot holding the DOM adapter installed at platform start-up
pub static ADAPTER_SLOT: Lazy<Token<AdapterSlot>> = Lazy::new(|| Token::new("AdapterSlot"));

pub static TESTABILITY_REGISTRY: Lazy<Token<TestabilityRegistry>> =
    Lazy::new(|| Token::new("TestabilityRegistry"));

pub static PLATFORM_LOCATION: Lazy<Token<dyn PlatformLocation>> =
    Lazy::new(|| Token::new("PlatformLocation"));

// ============================================================================
// APPLICATION LEVEL
// ============================================================================

pub static SANITIZATION_SERVICE: Lazy<Token<dyn SanitizationService>> =
    Lazy::new(|| Token::new("SanitizationService"));

pub static DOM_SANITIZATION_SERVICE: Lazy<Token<dyn DomSanitizationService>> =
    Lazy::new(|| Token::new("DomSanitizationService"));

pub static EXCEPTION_HANDLER: Lazy<Token<ExceptionHandler>> =
    Lazy::new(|| Token::new("ExceptionHandler"));

/// The document applications render into
pub static DOCUMENT: Lazy<Token<Document>> = Lazy::new(|| Token::new("DOCUMENT"));

/// Multi-binding: event plugins, asked in registration order
pub static EVENT_MANAGER_PLUGINS: Lazy<Token<dyn EventManagerPlugin>> =
    Lazy::new(|| Token::new("EVENT_MANAGER_PLUGINS"));

pub static GESTURE_CONFIG: Lazy<Token<GestureConfig>> =
    Lazy::new(|| Token::new("GESTURE_CONFIG"));

pub static EVENT_MANAGER: Lazy<Token<EventManager>> = Lazy::new(|| Token::new("EventManager"));

pub static DOM_ROOT_RENDERER: Lazy<Token<dyn RootRenderer>> =
    Lazy::new(|| Token::new("DomRootRenderer"));

pub static ROOT_RENDERER: Lazy<Token<dyn RootRenderer>> = Lazy::new(|| Token::new("RootRenderer"));

/// Debug root renderer installed by the element probe
pub static DEBUG_ROOT_RENDERER: Lazy<Token<DebugRootRenderer>> =
    Lazy::new(|| Token::new("DebugRootRenderer"));

pub static DOM_SHARED_STYLES_HOST: Lazy<Token<DomSharedStylesHost>> =
    Lazy::new(|| Token::new("DomSharedStylesHost"));

pub static SHARED_STYLES_HOST: Lazy<Token<dyn SharedStylesHost>> =
    Lazy::new(|| Token::new("SharedStylesHost"));

pub static ANIMATION_DRIVER: Lazy<Token<dyn AnimationDriver>> =
    Lazy::new(|| Token::new("AnimationDriver"));

pub static TESTABILITY: Lazy<Token<Testability>> = Lazy::new(|| Token::new("Testability"));
