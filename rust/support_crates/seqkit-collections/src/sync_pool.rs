use std::{
    ops::{Deref, DerefMut},
    sync::Mutex,
};

/// A thread-safe cache of reusable objects.
///
/// [`SyncPool::get`] hands out an idle object if there is one and otherwise
/// builds a fresh one with the factory. [`SyncPool::put`] returns an object
/// for later reuse. Which idle object `get` returns is unspecified.
///
/// Objects come back in whatever state their last user left them; the pool
/// never resets them.
///
/// # Thread Safety
///
/// The pool can be shared across threads (`SyncPool<T>` is `Sync` when `T` is
/// `Send`). The idle list is protected by a mutex.
pub struct SyncPool<T> {
    idle: Mutex<Vec<T>>,
    factory: Box<dyn Fn() -> T + Send + Sync>,
    max_idle: usize,
}

impl<T> SyncPool<T> {
    /// Creates a pool that keeps every returned object.
    pub fn new(factory: impl Fn() -> T + Send + Sync + 'static) -> SyncPool<T> {
        SyncPool::with_max_idle(factory, usize::MAX)
    }

    /// Creates a pool that keeps at most `max_idle` returned objects and drops
    /// the rest.
    pub fn with_max_idle(
        factory: impl Fn() -> T + Send + Sync + 'static,
        max_idle: usize,
    ) -> SyncPool<T> {
        SyncPool {
            idle: Mutex::new(Vec::new()),
            factory: Box::new(factory),
            max_idle,
        }
    }

    /// Takes an idle object, or builds a new one if none is idle.
    pub fn get(&self) -> T {
        let reused = self.idle.lock().unwrap().pop();
        match reused {
            Some(value) => value,
            None => {
                log::trace!("sync pool: no idle object, creating one");
                (self.factory)()
            }
        }
    }

    /// Returns `value` to the pool.
    pub fn put(&self, value: T) {
        let mut idle = self.idle.lock().unwrap();
        if idle.len() >= self.max_idle {
            drop(idle);
            log::debug!(
                "sync pool: {} objects already idle, dropping returned object",
                self.max_idle
            );
            return;
        }
        idle.push(value);
    }

    /// Takes an object that goes back to the pool when the returned guard is
    /// dropped.
    pub fn checkout(&self) -> PooledRef<'_, T> {
        PooledRef {
            pool: self,
            value: Some(self.get()),
        }
    }

    /// Number of objects currently waiting for reuse.
    pub fn idle_len(&self) -> usize {
        self.idle.lock().unwrap().len()
    }
}

impl<T> std::fmt::Debug for SyncPool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncPool")
            .field("idle", &self.idle_len())
            .field("max_idle", &self.max_idle)
            .finish_non_exhaustive()
    }
}

/// An object checked out of a [`SyncPool`].
///
/// Dereferences to the object and puts it back into the pool on drop.
pub struct PooledRef<'a, T> {
    pool: &'a SyncPool<T>,
    value: Option<T>,
}

impl<T> PooledRef<'_, T> {
    /// Detaches the object from the pool. It will not be returned on drop.
    pub fn into_inner(mut self) -> T {
        self.value.take().expect("pooled value")
    }
}

impl<T> Deref for PooledRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value.as_ref().expect("pooled value")
    }
}

impl<T> DerefMut for PooledRef<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.value.as_mut().expect("pooled value")
    }
}

impl<T> Drop for PooledRef<'_, T> {
    fn drop(&mut self) {
        if let Some(value) = self.value.take() {
            self.pool.put(value);
        }
    }
}
