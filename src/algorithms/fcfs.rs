//! First-Come-First-Served.

use tracing::debug;

use super::state::SimulationState;
use super::SchedulingAlgorithm;
use crate::error::SchedulerError;
use crate::models::{ProcessSet, Timeline};

/// First-Come-First-Served (non-preemptive).
///
/// Processes run to completion in arrival order; equal arrivals keep their
/// input order (stable sort). One interval per process.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingAlgorithm for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }

    fn is_preemptive(&self) -> bool {
        false
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        let slice = processes.as_slice();
        let mut order: Vec<usize> = (0..slice.len()).collect();
        order.sort_by_key(|&i| slice[i].arrival);

        let mut state = SimulationState::new(self.name(), processes);
        for i in order {
            // Departs from a literal "no idle gaps after the first process":
            // running a late arrival early would give it negative waiting
            // time, so the CPU idles until it arrives.
            state.advance_to(slice[i].arrival);
            debug!(
                algorithm = self.name(),
                process = i,
                start = state.clock(),
                burst = slice[i].burst,
                "dispatch"
            );
            state.run_slice(i, slice[i].burst);
        }
        Ok(state.into_timeline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, Process, ProcessId, Ticks};
    use crate::validation::ValidationErrorKind;

    fn run(processes: Vec<Process>) -> Timeline {
        Fcfs.run(&ProcessSet::new(processes).unwrap()).unwrap()
    }

    #[test]
    fn test_fcfs_arrival_tie_keeps_input_order() {
        let t = run(vec![Process::new(0, 4), Process::new(0, 2)]);
        assert_eq!(t.completion_time(ProcessId(0)), Some(4));
        assert_eq!(t.completion_time(ProcessId(1)), Some(6));
    }

    #[test]
    fn test_fcfs_sorts_by_arrival() {
        let t = run(vec![
            Process::new(3, 2),
            Process::new(1, 4),
            Process::new(2, 1),
        ]);
        assert_eq!(
            t.intervals,
            vec![
                ExecutionInterval::new(ProcessId(1), 1, 5),
                ExecutionInterval::new(ProcessId(2), 5, 6),
                ExecutionInterval::new(ProcessId(0), 6, 8),
            ]
        );
    }

    #[test]
    fn test_fcfs_idle_before_first_and_between() {
        let t = run(vec![Process::new(2, 3), Process::new(10, 1)]);
        assert_eq!(
            t.intervals,
            vec![
                ExecutionInterval::new(ProcessId(0), 2, 5),
                ExecutionInterval::new(ProcessId(1), 10, 11),
            ]
        );
        assert_eq!(t.idle_ticks(), 7);
    }

    #[test]
    fn test_fcfs_large_ticks() {
        let late = Ticks::MAX / 2 - 10;
        let t = run(vec![Process::new(late, 5)]);
        assert_eq!(t.intervals, vec![ExecutionInterval::new(ProcessId(0), late, late + 5)]);

        // Sets whose clock would overflow never reach an algorithm
        let err = ProcessSet::new(vec![Process::new(Ticks::MAX - 1, 5)]).unwrap_err();
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::TickOverflow);
    }

    #[test]
    fn test_fcfs_one_interval_per_process() {
        let t = run(vec![
            Process::new(0, 5),
            Process::new(1, 1),
            Process::new(1, 7),
        ]);
        assert_eq!(t.len(), 3);
        assert!(t.is_well_formed());
    }
}
