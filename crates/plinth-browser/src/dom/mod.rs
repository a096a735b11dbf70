//! DOM services
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapter`] | DOM adapter, per-platform adapter slot and its initializer |
//! | [`document`] | Hosting document |
//! | [`element`] | Elements, events and listeners |
//! | [`renderer`] | Root renderers and component renderers |
//! | [`shared_styles`] | De-duplicated component styles |

pub mod adapter;
pub mod document;
pub mod element;
pub mod renderer;
pub mod shared_styles;

pub use adapter::{AdapterSlot, BrowserDomAdapter, DomAdapter, InstallDomAdapter};
pub use document::Document;
pub use element::{Element, Event, EventHandler, ListenerId};
pub use renderer::{ComponentType, DebugRootRenderer, DomRenderer, DomRootRendererImpl, RootRenderer};
pub use shared_styles::{DomSharedStylesHost, SharedStylesHost};
