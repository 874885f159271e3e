//! Shared, lock-guarded resources and their non-owning handles.

use std::sync::{Arc, Weak};

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A thread-safe, reference-counted resource container with read-write locking.
///
/// `MtResource` provides synchronized access to a value of type `T` that can be shared
/// across threads. It uses an `Arc<RwLock<T>>` internally to manage concurrent access.
/// The lock is a `parking_lot` lock, so guards are returned directly and a panicking
/// holder never poisons the resource.
///
/// # Examples
///
/// ```
/// use voxel_world::core::MtResource;
///
/// let counter = MtResource::new(0);
/// *counter.get_mut() += 1;
/// assert_eq!(*counter.get(), 1);
/// ```
///
/// ## Non-owning handles
/// ```
/// use voxel_world::core::MtResource;
///
/// let owner = MtResource::new(vec![1, 2, 3]);
/// let handle = owner.downgrade();
///
/// assert_eq!(handle.upgrade().map(|r| r.get().len()), Some(3));
///
/// drop(owner);
/// assert!(handle.upgrade().is_none());
/// ```
pub struct MtResource<T> {
    resource: Arc<RwLock<T>>,
}

impl<T> MtResource<T> {
    /// Creates a new `MtResource` containing the given value.
    pub fn new(resource: T) -> Self {
        Self {
            resource: Arc::new(RwLock::new(resource)),
        }
    }

    /// Returns a read-only guard that allows reading the contained value.
    ///
    /// Several readers may hold the resource at once.
    pub fn get(&self) -> RwLockReadGuard<'_, T> {
        self.resource.read()
    }

    /// Returns a mutable guard that allows modifying the contained value.
    ///
    /// Blocks until every other guard has been released.
    pub fn get_mut(&self) -> RwLockWriteGuard<'_, T> {
        self.resource.write()
    }

    /// Creates a non-owning handle to this resource.
    ///
    /// The handle does not keep the value alive; it has to be upgraded before use.
    pub fn downgrade(&self) -> WeakResource<T> {
        WeakResource {
            resource: Arc::downgrade(&self.resource),
        }
    }
}

impl<T> Clone for MtResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

/// A non-owning handle to an [`MtResource`].
///
/// Used where an object needs to reach back into the container that owns it without
/// forming a reference cycle.
pub struct WeakResource<T> {
    resource: Weak<RwLock<T>>,
}

impl<T> WeakResource<T> {
    /// Creates a handle that is not attached to any resource. Upgrading it always fails.
    pub fn detached() -> Self {
        Self {
            resource: Weak::new(),
        }
    }

    /// Attempts to regain shared ownership of the resource.
    ///
    /// # Returns
    /// `None` once the owning `MtResource` (and every clone of it) has been dropped.
    pub fn upgrade(&self) -> Option<MtResource<T>> {
        self.resource
            .upgrade()
            .map(|resource| MtResource { resource })
    }
}

impl<T> Clone for WeakResource<T> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn clones_share_the_same_value() {
        let resource = MtResource::new(vec![1, 2, 3]);
        let clone = resource.clone();

        clone.get_mut().push(4);

        assert_eq!(resource.get().len(), 4);
    }

    #[test]
    fn resource_can_be_written_from_another_thread() {
        let counter = MtResource::new(0);
        let counter_clone = counter.clone();

        let handle = thread::spawn(move || {
            *counter_clone.get_mut() += 1;
        });

        handle.join().unwrap();
        assert_eq!(*counter.get(), 1);
    }

    #[test]
    fn detached_handle_never_upgrades() {
        let handle: WeakResource<u32> = WeakResource::detached();
        assert!(handle.upgrade().is_none());
    }

    #[test]
    fn weak_handle_does_not_keep_value_alive() {
        let owner = MtResource::new(7u32);
        let handle = owner.downgrade();
        assert_eq!(handle.upgrade().map(|r| *r.get()), Some(7));

        drop(owner);
        assert!(handle.upgrade().is_none());
    }
}
