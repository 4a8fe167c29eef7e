use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering::{AcqRel, Acquire, Release};

/// The one shared mutable value every increment strategy operates on.
///
/// A fresh instance is created per benchmark run and discarded afterwards.
/// All access goes through the atomic with acquire/release orderings, so a
/// write by one thread is visible to every other thread. Arithmetic wraps
/// on overflow.
pub struct SharedCounter {
    value: AtomicI32,
}

impl SharedCounter {
    pub const fn new(value: i32) -> Self {
        Self {
            value: AtomicI32::new(value),
        }
    }

    pub fn get(&self) -> i32 {
        self.value.load(Acquire)
    }

    pub fn set(&self, value: i32) {
        self.value.store(value, Release);
    }

    /// Stores `new` only if the counter still holds `current`. Returns the
    /// previous value on success and the witnessed value on failure.
    pub fn compare_exchange(&self, current: i32, new: i32) -> Result<i32, i32> {
        self.value.compare_exchange(current, new, AcqRel, Acquire)
    }

    /// Atomically adds `delta` and returns the prior value.
    pub fn fetch_add(&self, delta: i32) -> i32 {
        self.value.fetch_add(delta, AcqRel)
    }

    pub fn into_inner(self) -> i32 {
        self.value.into_inner()
    }
}

impl Default for SharedCounter {
    fn default() -> Self {
        Self::new(0)
    }
}
