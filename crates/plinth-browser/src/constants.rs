//! Browser platform constants

// ============================================================================
// PLATFORM AND UNIT NAMES
// ============================================================================

/// Name of the browser platform
pub const BROWSER_PLATFORM_NAME: &str = "browser";

/// Origin of the core platform bindings
pub const CORE_UNIT_NAME: &str = "platform-core";

/// Origin of the internal browser platform bindings
pub const BROWSER_PLATFORM_UNIT_NAME: &str = "browser-platform";

/// Origin of the application-level browser bindings
pub const BROWSER_MODULE_NAME: &str = "browser-module";

/// Origin of the element probe (debug renderer) bindings
pub const ELEMENT_PROBE_UNIT_NAME: &str = "element-probe";

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Environment feature advertising native web animations
pub const WEB_ANIMATIONS_FEATURE: &str = "web-animations";

/// Capability name of the animation driver selector
pub const ANIMATION_CAPABILITY: &str = "animation-driver";

/// Selection tag of the web animations driver
pub const WEB_ANIMATIONS_TAG: &str = "web-animations";

// ============================================================================
// INITIALIZERS
// ============================================================================

/// Initializer installing the browser DOM adapter
pub const INSTALL_DOM_ADAPTER: &str = "install-dom-adapter";

/// Initializer publishing the testability getter
pub const INIT_TESTABILITY: &str = "init-testability";

// ============================================================================
// EVENTS
// ============================================================================

/// Standard DOM events handled by the DOM events plugin
pub const DOM_EVENT_NAMES: &[&str] = &[
    "abort", "blur", "change", "click", "contextmenu", "dblclick", "drag", "dragend",
    "dragenter", "dragleave", "dragover", "dragstart", "drop", "error", "focus", "focusin",
    "focusout", "input", "keydown", "keypress", "keyup", "load", "mousedown", "mouseenter",
    "mouseleave", "mousemove", "mouseout", "mouseover", "mouseup", "resize", "scroll",
    "select", "submit", "touchcancel", "touchend", "touchmove", "touchstart", "unload",
    "wheel",
];

/// Modifier keys recognised in key event names, in canonical order
pub const KEY_MODIFIERS: &[&str] = &["alt", "control", "meta", "shift"];

/// Gesture events recognised by the default gesture configuration
pub const GESTURE_EVENT_NAMES: &[&str] = &[
    "pan", "panstart", "panmove", "panend", "pancancel", "panleft", "panright", "panup",
    "pandown", "pinch", "pinchstart", "pinchmove", "pinchend", "pinchcancel", "pinchin",
    "pinchout", "press", "pressup", "rotate", "rotatestart", "rotatemove", "rotateend",
    "rotatecancel", "swipe", "swipeleft", "swiperight", "swipeup", "swipedown", "tap",
];
