//! Round-Robin.
//!
//! The ready queue is not modelled explicitly. Instead each process carries
//! an effective arrival, reset to the current tick whenever its slice ends,
//! and a "has run" flag:
//!
//! 1. Among eligible processes pick the earliest effective arrival (input
//!    order on ties).
//! 2. If that process has already run, the first eligible process with the
//!    same effective arrival that has *not* run yet goes instead. This puts
//!    fresh arrivals ahead of a process re-entering at the same tick.
//! 3. Run the pick for `min(remaining, quantum)` ticks as one interval,
//!    then re-enter it at the new clock or retire it.

use tracing::debug;

use super::state::SimulationState;
use super::SchedulingAlgorithm;
use crate::error::SchedulerError;
use crate::models::{ProcessSet, Ticks, Timeline};
use crate::validation::validate_quantum;

/// Round-Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// Creates a Round-Robin scheduler.
    ///
    /// # Errors
    /// `InvalidInput` if `quantum <= 0`.
    pub fn new(quantum: Ticks) -> Result<Self, SchedulerError> {
        validate_quantum(quantum)?;
        Ok(Self { quantum })
    }

    /// Time slice granted per turn.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    fn select(&self, state: &SimulationState<'_>) -> Result<usize, SchedulerError> {
        let earliest = state
            .eligible()
            .min_by_key(|&i| state.arrival(i))
            .ok_or_else(|| {
                SchedulerError::inconsistency(
                    self.name(),
                    format!("no eligible process at tick {}", state.clock()),
                )
            })?;

        if !state.has_run(earliest) {
            return Ok(earliest);
        }
        let fresh = state
            .eligible()
            .find(|&i| state.arrival(i) == state.arrival(earliest) && !state.has_run(i));
        Ok(fresh.unwrap_or(earliest))
    }
}

impl SchedulingAlgorithm for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn description(&self) -> &'static str {
        "Round-Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        let mut state = SimulationState::new(self.name(), processes);
        while !state.is_done() {
            state.advance_if_idle()?;
            let next = self.select(&state)?;
            let slice = state.remaining(next).min(self.quantum);
            debug!(
                algorithm = self.name(),
                process = next,
                start = state.clock(),
                slice,
                "dispatch"
            );
            state.run_slice(next, slice);
            state.requeue(next);
        }
        Ok(state.into_timeline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, Process, ProcessId};
    use crate::validation::ValidationErrorKind;

    fn run(quantum: Ticks, processes: Vec<Process>) -> Timeline {
        RoundRobin::new(quantum)
            .unwrap()
            .run(&ProcessSet::new(processes).unwrap())
            .unwrap()
    }

    #[test]
    fn test_rr_alternates_with_remaining_bookkeeping() {
        let t = run(2, vec![Process::new(0, 5), Process::new(0, 3)]);
        assert_eq!(
            t.intervals,
            vec![
                ExecutionInterval::new(ProcessId(0), 0, 2),
                ExecutionInterval::new(ProcessId(1), 2, 4),
                ExecutionInterval::new(ProcessId(0), 4, 6),
                ExecutionInterval::new(ProcessId(1), 6, 7),
                ExecutionInterval::new(ProcessId(0), 7, 8),
            ]
        );
        assert_eq!(t.completion_time(ProcessId(0)), Some(8));
        assert_eq!(t.completion_time(ProcessId(1)), Some(7));
    }

    #[test]
    fn test_rr_prefers_fresh_arrival_on_same_tick() {
        // Process 0's slice ends at tick 2, exactly when process 1 arrives.
        // Both now have effective arrival 2; the one that has not run wins.
        let t = run(2, vec![Process::new(0, 4), Process::new(2, 2)]);
        assert_eq!(
            t.intervals,
            vec![
                ExecutionInterval::new(ProcessId(0), 0, 2),
                ExecutionInterval::new(ProcessId(1), 2, 4),
                ExecutionInterval::new(ProcessId(0), 4, 6),
            ]
        );
    }

    #[test]
    fn test_rr_earlier_waiting_process_goes_first() {
        // Process 1 arrived at 1 and has waited; process 0 re-enters at 3.
        let t = run(3, vec![Process::new(0, 5), Process::new(1, 2)]);
        assert_eq!(
            t.intervals,
            vec![
                ExecutionInterval::new(ProcessId(0), 0, 3),
                ExecutionInterval::new(ProcessId(1), 3, 5),
                ExecutionInterval::new(ProcessId(0), 5, 7),
            ]
        );
    }

    #[test]
    fn test_rr_quantum_larger_than_bursts() {
        let t = run(10, vec![Process::new(0, 3), Process::new(1, 4)]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.final_tick(), 7);
    }

    #[test]
    fn test_rr_idle_gap() {
        let t = run(2, vec![Process::new(0, 1), Process::new(4, 3)]);
        assert_eq!(
            t.intervals,
            vec![
                ExecutionInterval::new(ProcessId(0), 0, 1),
                ExecutionInterval::new(ProcessId(1), 4, 6),
                ExecutionInterval::new(ProcessId(1), 6, 7),
            ]
        );
    }

    #[test]
    fn test_rr_rejects_bad_quantum() {
        let err = RoundRobin::new(0).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveQuantum
        );
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::new(3).unwrap().quantum(), 3);
    }
}
