//! Non-preemptive selection: Shortest-Job-First and Priority.
//!
//! Both share one loop. At each decision point the eligible process with
//! the smallest key runs to completion as a single interval; ties go to the
//! earliest arrival, then input order. When nothing has arrived yet the
//! clock jumps to the next arrival.
//!
//! # Complexity
//! O(n²): one linear scan per dispatched process.

use tracing::debug;

use super::state::{SelectionKey, SimulationState};
use super::SchedulingAlgorithm;
use crate::error::SchedulerError;
use crate::models::{ProcessSet, Timeline};
use crate::validation::validate_priorities;

fn run_to_completion(
    name: &'static str,
    key: SelectionKey,
    processes: &ProcessSet,
) -> Result<Timeline, SchedulerError> {
    let mut state = SimulationState::new(name, processes);
    while !state.is_done() {
        state.advance_if_idle()?;
        let next = state.select(key, None)?;
        let burst = state.remaining(next);
        debug!(
            algorithm = name,
            process = next,
            start = state.clock(),
            burst,
            "dispatch"
        );
        state.run_slice(next, burst);
    }
    Ok(state.into_timeline())
}

/// Shortest-Job-First (non-preemptive).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingAlgorithm for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Job-First (non-preemptive)"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        run_to_completion(self.name(), SelectionKey::RemainingBurst, processes)
    }
}

/// Priority scheduling (non-preemptive). Lower value = higher priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct Priority;

impl SchedulingAlgorithm for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (non-preemptive)"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn requires_priority(&self) -> bool {
        true
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        validate_priorities(processes.as_slice())?;
        run_to_completion(self.name(), SelectionKey::Priority, processes)
    }
}
