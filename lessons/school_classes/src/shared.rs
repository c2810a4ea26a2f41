//! Shared handle for reference-type entities.
//!
//! `Shared<T>` wraps `Arc<RwLock<T>>`. Cloning a handle never clones the
//! entity: every clone points at the same allocation, and a write through one
//! handle is visible through all of them. The entity is dropped together with
//! its last handle.

use std::fmt;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entity::Entity;

/// A reference-counted, interior-mutable handle to one entity.
pub struct Shared<T: ?Sized>(Arc<RwLock<T>>);

impl<T> Shared<T> {
    /// Allocate `value` and return the first handle to it.
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Arc::new(RwLock::new(value)))
    }
}

impl<T: ?Sized> Shared<T> {
    /// Lock the entity for reading.
    #[inline]
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read()
    }

    /// Lock the entity for writing. The change is seen through every handle.
    #[inline]
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write()
    }

    /// Whether both handles denote the same allocation.
    ///
    /// Only the address is compared, so a `Shared<DerivedEntity>` and the
    /// `Shared<dyn Entity>` obtained from it by [`Shared::upcast`] are the
    /// same object.
    #[inline]
    pub fn same_object<U: ?Sized>(&self, other: &Shared<U>) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }

    /// Number of live handles to this entity.
    #[inline]
    pub fn handle_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl<T: Entity + 'static> Shared<T> {
    /// View this entity through a base-typed handle.
    ///
    /// The returned handle shares the allocation; calls through it dispatch
    /// to `T`'s overrides.
    pub fn upcast(&self) -> Shared<dyn Entity> {
        let inner: Arc<RwLock<dyn Entity>> = self.0.clone();
        Shared(inner)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    #[inline]
    fn clone(&self) -> Self {
        tracing::trace!(handles = Arc::strong_count(&self.0) + 1, "alias entity handle");
        Shared(Arc::clone(&self.0))
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&&*self.0.read()).finish()
    }
}
