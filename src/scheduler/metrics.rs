//! Simulation performance metrics.
//!
//! Reduces a timeline and its input process set to per-process and
//! aggregate statistics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion | End of the process's last interval |
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//! | CPU Utilization | Σ burst / final tick × 100 |

use serde::{Deserialize, Serialize};

use crate::error::SchedulerError;
use crate::models::{ProcessId, ProcessSet, Ticks, Timeline};

/// Statistics for a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identity.
    pub process: ProcessId,
    /// Original arrival time.
    pub arrival: Ticks,
    /// Original burst time.
    pub burst: Ticks,
    /// Priority, if the process had one.
    pub priority: Option<i32>,
    /// Tick at which the process finished.
    pub completion: Ticks,
    /// completion - arrival.
    pub turnaround: Ticks,
    /// turnaround - burst.
    pub waiting: Ticks,
    /// First time on the CPU minus arrival.
    pub response: Ticks,
}

/// Per-process records plus aggregates for one algorithm run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// One record per process, in input order.
    pub processes: Vec<ProcessMetrics>,
    /// Σ waiting.
    pub total_waiting: Ticks,
    /// Σ turnaround.
    pub total_turnaround: Ticks,
    /// Mean waiting time.
    pub average_waiting: f64,
    /// Mean turnaround time.
    pub average_turnaround: f64,
    /// Mean response time.
    pub average_response: f64,
    /// Σ burst.
    pub total_burst: Ticks,
    /// End of the final interval.
    pub elapsed: Ticks,
    /// Ticks in `[0, elapsed)` with no process running.
    pub idle: Ticks,
    /// Busy share of elapsed time, in percent (0.0..=100.0).
    pub cpu_utilization: f64,
}

impl SimulationMetrics {
    /// Computes metrics from a timeline and its input processes.
    ///
    /// Elapsed time is the end of the timeline's final interval. That is
    /// the true end of simulated time only because no algorithm leaves the
    /// CPU idle after the last completion.
    ///
    /// # Errors
    /// `InternalInconsistency` if a process never appears in the timeline.
    pub fn calculate(timeline: &Timeline, processes: &ProcessSet) -> Result<Self, SchedulerError> {
        let mut records = Vec::with_capacity(processes.len());
        let mut total_waiting: Ticks = 0;
        let mut total_turnaround: Ticks = 0;
        let mut total_response: Ticks = 0;

        for (id, process) in processes.iter() {
            let (completion, first_start) =
                match (timeline.completion_time(id), timeline.first_start(id)) {
                    (Some(c), Some(s)) => (c, s),
                    _ => {
                        return Err(SchedulerError::inconsistency(
                            "metrics",
                            format!("process {id} missing from timeline"),
                        ))
                    }
                };

            let turnaround = completion - process.arrival;
            let waiting = turnaround - process.burst;
            let response = first_start - process.arrival;

            total_waiting += waiting;
            total_turnaround += turnaround;
            total_response += response;

            records.push(ProcessMetrics {
                process: id,
                arrival: process.arrival,
                burst: process.burst,
                priority: process.priority,
                completion,
                turnaround,
                waiting,
                response,
            });
        }

        let count = records.len().max(1) as f64;
        let total_burst = processes.total_burst();
        let elapsed = timeline.final_tick();
        let cpu_utilization = if elapsed > 0 {
            total_burst as f64 / elapsed as f64 * 100.0
        } else {
            0.0
        };

        Ok(Self {
            processes: records,
            total_waiting,
            total_turnaround,
            average_waiting: total_waiting as f64 / count,
            average_turnaround: total_turnaround as f64 / count,
            average_response: total_response as f64 / count,
            total_burst,
            elapsed,
            idle: timeline.idle_ticks(),
            cpu_utilization,
        })
    }

    /// Record for one process.
    pub fn for_process(&self, id: ProcessId) -> Option<&ProcessMetrics> {
        self.processes.get(id.index())
    }

    /// Completion times in input order.
    pub fn completions(&self) -> Vec<Ticks> {
        self.processes.iter().map(|m| m.completion).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionInterval, Process};

    fn timeline(intervals: &[(usize, Ticks, Ticks)]) -> Timeline {
        let mut t = Timeline::new();
        for &(p, s, e) in intervals {
            t.push(ExecutionInterval::new(ProcessId(p), s, e));
        }
        t
    }

    #[test]
    fn test_metrics_basic() {
        let processes = ProcessSet::new(vec![Process::new(0, 4), Process::new(0, 2)]).unwrap();
        let t = timeline(&[(0, 0, 4), (1, 4, 6)]);

        let m = SimulationMetrics::calculate(&t, &processes).unwrap();
        assert_eq!(m.completions(), vec![4, 6]);
        assert_eq!(m.total_waiting, 4); // 0 + 4
        assert_eq!(m.total_turnaround, 10); // 4 + 6
        assert!((m.average_waiting - 2.0).abs() < 1e-10);
        assert!((m.average_turnaround - 5.0).abs() < 1e-10);
        assert!((m.cpu_utilization - 100.0).abs() < 1e-10);
        assert_eq!(m.idle, 0);
    }

    #[test]
    fn test_metrics_last_occurrence_is_completion() {
        let processes = ProcessSet::new(vec![Process::new(0, 5), Process::new(0, 3)]).unwrap();
        let t = timeline(&[(0, 0, 2), (1, 2, 4), (0, 4, 6), (1, 6, 7), (0, 7, 8)]);

        let m = SimulationMetrics::calculate(&t, &processes).unwrap();
        let p0 = m.for_process(ProcessId(0)).unwrap();
        assert_eq!(p0.completion, 8);
        assert_eq!(p0.turnaround, 8);
        assert_eq!(p0.waiting, 3);
        assert_eq!(p0.response, 0);

        let p1 = m.for_process(ProcessId(1)).unwrap();
        assert_eq!(p1.completion, 7);
        assert_eq!(p1.waiting, 4);
        assert_eq!(p1.response, 2);
    }

    #[test]
    fn test_metrics_initial_idle_lowers_utilization() {
        let processes = ProcessSet::new(vec![Process::new(2, 3), Process::new(3, 3)]).unwrap();
        let t = timeline(&[(0, 2, 5), (1, 5, 8)]);

        let m = SimulationMetrics::calculate(&t, &processes).unwrap();
        assert_eq!(m.elapsed, 8);
        assert_eq!(m.idle, 2);
        assert!((m.cpu_utilization - 75.0).abs() < 1e-10);
        // Process 1 waits from 3 to 5
        assert_eq!(m.processes[1].waiting, 2);
    }

    #[test]
    fn test_metrics_priority_carried() {
        let processes = ProcessSet::new(vec![Process::new(0, 1).with_priority(7)]).unwrap();
        let t = timeline(&[(0, 0, 1)]);
        let m = SimulationMetrics::calculate(&t, &processes).unwrap();
        assert_eq!(m.processes[0].priority, Some(7));
    }

    #[test]
    fn test_metrics_missing_process() {
        let processes = ProcessSet::new(vec![Process::new(0, 1), Process::new(0, 1)]).unwrap();
        let t = timeline(&[(0, 0, 1)]);
        let err = SimulationMetrics::calculate(&t, &processes).unwrap_err();
        assert!(matches!(err, SchedulerError::InternalInconsistency { .. }));
        assert!(err.to_string().contains("process B"));
    }
}
