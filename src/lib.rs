//! Latency comparison of three ways to atomically increment a shared
//! integer: a CAS retry loop, an exclusive lock around a plain
//! read-modify-write, and the native fetch-and-add instruction.

mod cas;
mod config;
mod counter;
mod fetch_add;
mod lock;

pub use cas::CasIncrement;
pub use config::{BenchConfig, Mode, TimeUnit};
pub use counter::SharedCounter;
pub use fetch_add::FetchAddIncrement;
pub use lock::{IncrementLock, LockGuard, LockIncrement};

/// One linearizable, lost-update-free +1 on the shared counter. Strategies
/// are invoked from arbitrary concurrent callers, and cloned so the harness
/// can hand one out per worker thread.
pub trait Increment: Clone + Send + Sync {
    fn increment(&self, counter: &SharedCounter);
}
