//! Preemptive selection: Shortest-Remaining-Time-First and preemptive
//! Priority.
//!
//! # Algorithm
//!
//! 1. At a decision point, pick the eligible process with the smallest key
//!    (earliest arrival, then input order, on ties) and open an interval.
//! 2. Run it one tick at a time. After each tick, re-evaluate the eligible
//!    set with the running process's arrival as the tie anchor.
//! 3. If the process finished, or the re-evaluation names another process,
//!    close the interval and return to 1.
//!
//! The anchor in step 2 means an equal-key process preempts the running
//! one whenever it arrived strictly before the running process, even if
//! the regular rule in step 1 then hands the CPU straight back. This can
//! split one process's run into adjacent intervals; completion times and
//! executed durations are unaffected.
//!
//! # Complexity
//! O(n × T) where T is total simulated ticks.

use tracing::{debug, trace};

use super::state::{SelectionKey, SimulationState};
use super::SchedulingAlgorithm;
use crate::error::SchedulerError;
use crate::models::{ProcessSet, Timeline};
use crate::validation::validate_priorities;

fn run_preemptive(
    name: &'static str,
    key: SelectionKey,
    processes: &ProcessSet,
) -> Result<Timeline, SchedulerError> {
    let mut state = SimulationState::new(name, processes);
    while !state.is_done() {
        state.advance_if_idle()?;
        let running = state.select(key, None)?;
        let start = state.clock();
        debug!(
            algorithm = name,
            process = running,
            start,
            remaining = state.remaining(running),
            "dispatch"
        );

        loop {
            state.execute(running, 1);
            if state.remaining(running) == 0 {
                break;
            }
            let candidate = state.select(key, Some(state.arrival(running)))?;
            if candidate != running {
                trace!(
                    algorithm = name,
                    preempted = running,
                    by = candidate,
                    at = state.clock(),
                    "preempt"
                );
                break;
            }
        }
        state.record(running, start);
    }
    Ok(state.into_timeline())
}

/// Shortest-Remaining-Time-First (preemptive SJF).
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingAlgorithm for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn description(&self) -> &'static str {
        "Shortest-Remaining-Time-First"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        run_preemptive(self.name(), SelectionKey::RemainingBurst, processes)
    }
}

/// Priority scheduling (preemptive). Lower value = higher priority.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreemptivePriority;

impl SchedulingAlgorithm for PreemptivePriority {
    fn name(&self) -> &'static str {
        "PRIORITY-P"
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling (preemptive)"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn requires_priority(&self) -> bool {
        true
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        validate_priorities(processes.as_slice())?;
        run_preemptive(self.name(), SelectionKey::Priority, processes)
    }
}
