use crate::{Increment, SharedCounter};

/// Wait-free increment using the platform's fetch-and-add instruction. No
/// retry loop, no lock; completes in a bounded number of steps regardless of
/// contention.
#[derive(Clone, Copy, Default)]
pub struct FetchAddIncrement;

impl FetchAddIncrement {
    /// Adds 1 and returns the value observed immediately before.
    pub fn fetch_increment(&self, counter: &SharedCounter) -> i32 {
        counter.fetch_add(1)
    }
}

impl Increment for FetchAddIncrement {
    fn increment(&self, counter: &SharedCounter) {
        self.fetch_increment(counter);
    }
}
