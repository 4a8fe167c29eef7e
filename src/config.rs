use std::time::Duration;

/// What the harness reports per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Mean time per operation.
    AverageTime,
    /// Operations per unit of time.
    Throughput,
}

/// Preferred unit for reported figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Secs,
}

/// How the timing harness drives each strategy: a warmup phase whose samples
/// are discarded, then a measurement phase, each made of fixed-length
/// iterations, repeated across `forks` isolated runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub warmup_iterations: u32,
    pub warmup_seconds: u64,
    pub measurement_iterations: u32,
    pub measurement_seconds: u64,
    pub forks: u32,
    pub mode: Mode,
    pub time_unit: TimeUnit,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: 5,
            warmup_seconds: 1,
            measurement_iterations: 2,
            measurement_seconds: 1,
            forks: 100,
            mode: Mode::AverageTime,
            time_unit: TimeUnit::Nanos,
        }
    }
}

impl BenchConfig {
    /// Total length of the warmup phase.
    pub fn warmup_time(&self) -> Duration {
        Duration::from_secs(u64::from(self.warmup_iterations) * self.warmup_seconds)
    }

    /// Total length of the measurement phase.
    pub fn measurement_time(&self) -> Duration {
        Duration::from_secs(u64::from(self.measurement_iterations) * self.measurement_seconds)
    }
}
