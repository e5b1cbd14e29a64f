//! Simulation driver.
//!
//! # Algorithm
//!
//! 1. Validate the request (process set, quantum, priorities).
//! 2. Feed the same process set to each selected algorithm.
//! 3. Reduce each timeline to metrics.
//!
//! Every algorithm works on its own copy of the per-process state, so runs
//! never interfere and may execute on separate threads.

use std::thread;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::SimulationMetrics;
use crate::algorithms::{Algorithm, AlgorithmKind, SchedulingAlgorithm};
use crate::error::SchedulerError;
use crate::models::{ProcessSet, Ticks, Timeline};
use crate::validation::{validate_priorities, ValidationError, ValidationErrorKind};

/// Input container for a simulation.
///
/// Deserializes from JSON:
///
/// ```
/// use cpu_sched::scheduler::SimulationRequest;
///
/// let request = SimulationRequest::from_json(
///     r#"{
///         "processes": [{"arrival": 0, "burst": 5}, {"arrival": 0, "burst": 3}],
///         "algorithms": ["round_robin"],
///         "quantum": 2
///     }"#,
/// )
/// .unwrap();
/// assert_eq!(request.processes.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to simulate.
    pub processes: ProcessSet,
    /// Algorithms to run. Empty means all six.
    #[serde(default)]
    pub algorithms: Vec<AlgorithmKind>,
    /// Round-Robin quantum. Required only when Round-Robin is selected.
    #[serde(default)]
    pub quantum: Option<Ticks>,
}

impl SimulationRequest {
    /// Creates a request that runs every algorithm.
    pub fn new(processes: ProcessSet) -> Self {
        Self {
            processes,
            algorithms: Vec::new(),
            quantum: None,
        }
    }

    /// Restricts the run to the given algorithms.
    pub fn with_algorithms(mut self, algorithms: Vec<AlgorithmKind>) -> Self {
        self.algorithms = algorithms;
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = Some(quantum);
        self
    }

    /// Parses a JSON request. The process set is validated while parsing.
    ///
    /// # Errors
    /// `InvalidInput` if the JSON is malformed or the processes are invalid.
    pub fn from_json(json: &str) -> Result<Self, SchedulerError> {
        serde_json::from_str(json).map_err(|e| {
            SchedulerError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::InvalidRequest,
                format!("Malformed simulation request: {e}"),
            )])
        })
    }

    /// Selected algorithm kinds, expanding an empty list to all six.
    pub fn selected(&self) -> Vec<AlgorithmKind> {
        if self.algorithms.is_empty() {
            AlgorithmKind::ALL.to_vec()
        } else {
            self.algorithms.clone()
        }
    }

    /// Builds the configured algorithms.
    ///
    /// # Errors
    /// `InvalidInput` with every problem found: missing or non-positive
    /// quantum, missing priorities for a priority algorithm.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>, SchedulerError> {
        let mut errors = Vec::new();
        let mut algorithms = Vec::new();

        for kind in self.selected() {
            match Algorithm::from_kind(kind, self.quantum) {
                Ok(algorithm) => algorithms.push(algorithm),
                Err(e) => errors.extend(e.validation_errors().iter().cloned()),
            }
        }

        if self.selected().iter().any(|k| k.requires_priority()) {
            if let Err(e) = validate_priorities(self.processes.as_slice()) {
                errors.extend(e);
            }
        }

        if errors.is_empty() {
            Ok(algorithms)
        } else {
            Err(SchedulerError::InvalidInput(errors))
        }
    }
}

/// Outcome of one algorithm over one process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Short algorithm name.
    pub algorithm: String,
    /// Gantt timeline.
    pub timeline: Timeline,
    /// Per-process and aggregate statistics.
    pub metrics: SimulationMetrics,
}

/// Runs algorithms over a process set and collects reports.
///
/// # Example
///
/// ```
/// use cpu_sched::algorithms::Fcfs;
/// use cpu_sched::models::{Process, ProcessSet};
/// use cpu_sched::scheduler::Simulator;
///
/// let processes = ProcessSet::new(vec![Process::new(0, 4), Process::new(0, 2)]).unwrap();
/// let report = Simulator::new().run(&processes, &Fcfs).unwrap();
/// assert_eq!(report.metrics.completions(), vec![4, 6]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    parallel: bool,
}

impl Simulator {
    /// Creates a sequential simulator.
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Runs multi-algorithm requests on scoped threads, one per algorithm.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs one algorithm and computes its metrics.
    pub fn run(
        &self,
        processes: &ProcessSet,
        algorithm: &dyn SchedulingAlgorithm,
    ) -> Result<SimulationReport, SchedulerError> {
        info!(
            algorithm = algorithm.name(),
            processes = processes.len(),
            "running simulation"
        );
        let timeline = algorithm.run(processes)?;
        let metrics = SimulationMetrics::calculate(&timeline, processes)?;
        info!(
            algorithm = algorithm.name(),
            elapsed = metrics.elapsed,
            average_waiting = metrics.average_waiting,
            cpu_utilization = metrics.cpu_utilization,
            "simulation finished"
        );
        Ok(SimulationReport {
            algorithm: algorithm.name().to_string(),
            timeline,
            metrics,
        })
    }

    /// Runs several algorithms over the same process set.
    ///
    /// Reports are returned in the order of `algorithms`. The first
    /// failure aborts the whole batch.
    pub fn run_all(
        &self,
        processes: &ProcessSet,
        algorithms: &[Algorithm],
    ) -> Result<Vec<SimulationReport>, SchedulerError> {
        if !self.parallel || algorithms.len() < 2 {
            return algorithms
                .iter()
                .map(|algorithm| self.run(processes, algorithm))
                .collect();
        }

        thread::scope(|scope| {
            let handles: Vec<_> = algorithms
                .iter()
                .map(|algorithm| scope.spawn(move || self.run(processes, algorithm)))
                .collect();
            handles
                .into_iter()
                .zip(algorithms)
                .map(|(handle, algorithm)| {
                    handle.join().unwrap_or_else(|_| {
                        Err(SchedulerError::inconsistency(
                            algorithm.name(),
                            "simulation thread panicked",
                        ))
                    })
                })
                .collect()
        })
    }

    /// Validates and runs a request.
    pub fn run_request(
        &self,
        request: &SimulationRequest,
    ) -> Result<Vec<SimulationReport>, SchedulerError> {
        let algorithms = request.algorithms()?;
        self.run_all(&request.processes, &algorithms)
    }
}
