//! Application-level browser unit

use std::sync::Arc;

use plinth_domain::ports::CompositionUnit;
use plinth_domain::value_objects::{Binding, Dependency};

use crate::animation::animation_driver_binding;
use crate::constants::BROWSER_MODULE_NAME;
use crate::dom::{DomRootRendererImpl, DomSharedStylesHost};
use crate::events::{DomEventsPlugin, EventManager, GestureConfig, GesturesPlugin, KeyEventsPlugin};
use crate::exception::ExceptionHandler;
use crate::security::DomSanitizationServiceImpl;
use crate::testability::Testability;
use crate::tokens::{
    ADAPTER_SLOT, DOCUMENT, DOM_ROOT_RENDERER, DOM_SANITIZATION_SERVICE,
    DOM_SHARED_STYLES_HOST, EVENT_MANAGER, EVENT_MANAGER_PLUGINS, EXCEPTION_HANDLER,
    GESTURE_CONFIG, ROOT_RENDERER, SANITIZATION_SERVICE, SHARED_STYLES_HOST, TESTABILITY,
};

/// Services an application running in the browser needs
///
/// Composed into a child of the browser platform context; the exception
/// handler, document and animation driver read the adapter the platform
/// installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserModule;

impl CompositionUnit for BrowserModule {
    fn name(&self) -> &'static str {
        BROWSER_MODULE_NAME
    }

    fn bindings(&self) -> Vec<Binding> {
        vec![
            // Sanitization
            SANITIZATION_SERVICE
                .use_existing_as(&*DOM_SANITIZATION_SERVICE, |service| service)
                .sensitive(),
            DOM_SANITIZATION_SERVICE
                .use_class::<DomSanitizationServiceImpl>(|service| service)
                .sensitive(),
            // Adapter-backed services
            EXCEPTION_HANDLER.use_factory(vec![Dependency::one(&*ADAPTER_SLOT)], |deps| {
                let adapter = deps.get(&*ADAPTER_SLOT)?.current()?;
                Ok(Arc::new(ExceptionHandler::new(adapter)))
            }),
            DOCUMENT.use_factory(vec![Dependency::one(&*ADAPTER_SLOT)], |deps| {
                Ok(deps.get(&*ADAPTER_SLOT)?.current()?.default_doc())
            }),
            // Event plugins, asked in this order
            EVENT_MANAGER_PLUGINS
                .use_class::<DomEventsPlugin>(|plugin| plugin)
                .multi(),
            EVENT_MANAGER_PLUGINS
                .use_class::<KeyEventsPlugin>(|plugin| plugin)
                .multi(),
            EVENT_MANAGER_PLUGINS
                .use_class::<GesturesPlugin>(|plugin| plugin)
                .multi(),
            GESTURE_CONFIG.use_class::<GestureConfig>(|config| config),
            // Rendering
            DOM_ROOT_RENDERER.use_class::<DomRootRendererImpl>(|renderer| renderer),
            ROOT_RENDERER.use_existing(&*DOM_ROOT_RENDERER),
            SHARED_STYLES_HOST.use_existing_as(&*DOM_SHARED_STYLES_HOST, |host| host),
            DOM_SHARED_STYLES_HOST.use_class::<DomSharedStylesHost>(|host| host),
            animation_driver_binding(),
            TESTABILITY.use_class::<Testability>(|testability| testability),
            EVENT_MANAGER.use_class::<EventManager>(|manager| manager),
        ]
    }
}
