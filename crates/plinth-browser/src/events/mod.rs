//! Event handling
//!
//! | Plugin | Claims |
//! |--------|--------|
//! | [`DomEventsPlugin`] | Standard DOM event names |
//! | [`KeyEventsPlugin`] | `keydown.*` / `keyup.*` with modifiers and a key |
//! | [`GesturesPlugin`] | Gesture names from [`GestureConfig`] |

pub mod dom_events;
pub mod gestures;
pub mod key_events;
pub mod manager;
pub mod plugin;

pub use dom_events::DomEventsPlugin;
pub use gestures::{GestureConfig, GesturesPlugin};
pub use key_events::{KeyEventSpec, KeyEventsPlugin};
pub use manager::EventManager;
pub use plugin::EventManagerPlugin;
