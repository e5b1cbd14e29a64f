//! Random process set generation.
//!
//! Produces valid, reproducible workloads for experiments and tests.
//! Reproducibility comes from the caller's RNG: seed it
//! (`StdRng::seed_from_u64`) to get the same set every time.
//!
//! # Example
//!
//! ```
//! use cpu_sched::workload::{random_process_set, WorkloadConfig};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let config = WorkloadConfig::new(5).with_max_arrival(10).with_burst_range(1, 8);
//! let mut rng = StdRng::seed_from_u64(42);
//! let processes = random_process_set(&config, &mut rng).unwrap();
//! assert_eq!(processes.len(), 5);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::{Process, ProcessSet, Ticks};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parameters of a random workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Arrivals are drawn from `0..=max_arrival`.
    pub max_arrival: Ticks,
    /// Smallest burst.
    pub min_burst: Ticks,
    /// Largest burst.
    pub max_burst: Ticks,
    /// Priorities are drawn from `0..=max_priority`. `None` leaves
    /// processes without a priority.
    pub max_priority: Option<i32>,
}

impl WorkloadConfig {
    /// `count` processes arriving in `0..=10`, bursts in `1..=10`,
    /// priorities in `0..=5`.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            max_priority: Some(5),
        }
    }

    /// Sets the latest possible arrival.
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min_burst: Ticks, max_burst: Ticks) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Sets the largest priority value, or `None` for no priorities.
    pub fn with_max_priority(mut self, max_priority: Option<i32>) -> Self {
        self.max_priority = max_priority;
        self
    }

    fn validate(&self) -> Result<(), SchedulerError> {
        let mut errors = Vec::new();
        let mut invalid = |message: String| {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWorkload,
                message,
            ));
        };

        if self.count == 0 {
            invalid("Workload must contain at least one process".to_string());
        }
        if self.max_arrival < 0 {
            invalid(format!("max_arrival must be >= 0, got {}", self.max_arrival));
        }
        if self.min_burst <= 0 || self.max_burst < self.min_burst {
            invalid(format!(
                "Burst range {}..={} must be positive and non-empty",
                self.min_burst, self.max_burst
            ));
        }
        if matches!(self.max_priority, Some(p) if p < 0) {
            invalid("max_priority must be >= 0".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchedulerError::InvalidInput(errors))
        }
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self::new(5)
    }
}

/// Draws a random process set.
///
/// # Errors
/// `InvalidInput` (`InvalidWorkload`) if the configured ranges are empty.
pub fn random_process_set<R: Rng>(
    config: &WorkloadConfig,
    rng: &mut R,
) -> Result<ProcessSet, SchedulerError> {
    config.validate()?;

    let processes = (0..config.count)
        .map(|_| {
            let process = Process::new(
                rng.random_range(0..=config.max_arrival),
                rng.random_range(config.min_burst..=config.max_burst),
            );
            match config.max_priority {
                Some(max) => process.with_priority(rng.random_range(0..=max)),
                None => process,
            }
        })
        .collect();

    ProcessSet::new(processes)
}
