use crate::{Increment, SharedCounter};

/// Optimistic increment: read the current value, try to swap in value + 1,
/// and retry for as long as another writer got there first. Never blocks
/// the OS thread, but may spin under contention; there is no bound on the
/// number of retries.
#[derive(Clone, Copy, Default)]
pub struct CasIncrement;

impl Increment for CasIncrement {
    fn increment(&self, counter: &SharedCounter) {
        let mut current = counter.get();
        while let Err(witnessed) =
            counter.compare_exchange(current, current.wrapping_add(1))
        {
            current = witnessed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn single_call_adds_exactly_one() {
        let counter = SharedCounter::new(0);
        CasIncrement.increment(&counter);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn one_net_increment_per_call_despite_interference() {
        // An interfering writer keeps invalidating observed values, forcing
        // retries; each logical call must still land exactly one +1.
        let counter = SharedCounter::new(0);
        thread::scope(|s| {
            s.spawn(|| {
                for _ in 0..50_000 {
                    CasIncrement.increment(&counter);
                }
            });
            s.spawn(|| {
                for _ in 0..50_000 {
                    counter.fetch_add(1000);
                }
            });
        });
        assert_eq!(counter.get(), 50_000 + 50_000 * 1000);
    }

    #[test]
    fn no_lost_updates_under_contention() {
        let counter = SharedCounter::new(0);
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..10_000 {
                        CasIncrement.increment(&counter);
                    }
                });
            }
        });
        assert_eq!(counter.get(), 80_000);
    }
}
