use std::sync::Arc;
use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

use atomic_wait::{wait, wake_one};

use crate::{Increment, SharedCounter};

/// Futex-based exclusive lock serializing the lock strategy's critical
/// section. Not poisoned by a panicking holder: the guard releases the lock
/// during unwinding and subsequent callers acquire it normally.
pub struct IncrementLock {
    /// 0: unlocked
    /// 1: locked, no other threads waiting
    /// 2: locked, other threads waiting
    state: AtomicU32,
}

pub struct LockGuard<'a> {
    lock: &'a IncrementLock,
}

impl IncrementLock {
    pub const fn new() -> Self {
        Self {
            state: AtomicU32::new(0),
        }
    }

    pub fn lock(&self) -> LockGuard<'_> {
        if self
            .state
            .compare_exchange(0, 1, Acquire, Relaxed)
            .is_err()
        {
            while self.state.swap(2, Acquire) != 0 {
                wait(&self.state, 2);
            }
        }
        LockGuard { lock: self }
    }
}

impl Default for IncrementLock {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        if self.lock.state.swap(0, Release) == 2 {
            wake_one(&self.lock.state);
        }
    }
}

/// Increments the counter with a plain read-modify-write inside an exclusive
/// critical section. The lock is injected at construction and shared across
/// every invocation of the strategy, so two counters driven by clones of one
/// `LockIncrement` serialize against each other.
#[derive(Clone)]
pub struct LockIncrement {
    lock: Arc<IncrementLock>,
}

impl LockIncrement {
    pub fn new(lock: Arc<IncrementLock>) -> Self {
        Self { lock }
    }
}

impl Increment for LockIncrement {
    fn increment(&self, counter: &SharedCounter) {
        let _guard = self.lock.lock();
        counter.set(counter.get().wrapping_add(1));
    }
}
