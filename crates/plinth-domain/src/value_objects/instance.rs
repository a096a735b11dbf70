//! Type-erased service instances
//!
//! The resolver stores every produced value as an [`Instance`]: an
//! `Arc<dyn Any>` wrapping the typed `Arc<T>`. Cloning an `Instance` never
//! clones the service, so singleton identity survives the erasure.

use std::any::{Any, type_name};
use std::sync::Arc;

use super::identity::ServiceIdentity;
use crate::error::{Error, Result};

/// Type-erased, shareable service instance
pub type Instance = Arc<dyn Any + Send + Sync>;

/// Erase a typed service into an [`Instance`]
pub fn into_instance<T>(service: Arc<T>) -> Instance
where
    T: ?Sized + Send + Sync + 'static,
{
    Arc::new(service)
}

/// Recover the typed service from an [`Instance`]
///
/// Fails with [`Error::TypeMismatch`] when the instance was produced for a
/// different type than the caller expects.
pub fn downcast_instance<T>(instance: &Instance, identity: ServiceIdentity) -> Result<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    instance
        .downcast_ref::<Arc<T>>()
        .cloned()
        .ok_or_else(|| Error::type_mismatch(identity.name(), type_name::<T>()))
}

/// Address of the service behind an instance, for identity comparisons across types
pub fn service_address<T: ?Sized>(service: &Arc<T>) -> *const () {
    Arc::as_ptr(service).cast::<()>()
}
