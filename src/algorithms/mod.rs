//! CPU scheduling algorithms.
//!
//! Six strategies share one contract: consume a validated [`ProcessSet`]
//! and return the resulting [`Timeline`]. Each run works on a private
//! copy of the per-process state, so the same set can be fed to any number
//! of algorithms, in any order or concurrently.
//!
//! | Algorithm | Preemptive | Selection | Tie-break |
//! |-----------|------------|-----------|-----------|
//! | [`Fcfs`] | no | arrival | input order |
//! | [`Sjf`] | no | burst | arrival |
//! | [`Srtf`] | every tick | remaining burst | arrival (running process anchors) |
//! | [`Priority`] | no | priority | arrival |
//! | [`PreemptivePriority`] | every tick | priority | arrival (running process anchors) |
//! | [`RoundRobin`] | per quantum | effective arrival | not-yet-run first |
//!
//! # Usage
//!
//! ```
//! use cpu_sched::algorithms::{SchedulingAlgorithm, Srtf};
//! use cpu_sched::models::{Process, ProcessSet};
//!
//! let processes = ProcessSet::new(vec![Process::new(0, 7), Process::new(2, 4)]).unwrap();
//! let timeline = Srtf.run(&processes).unwrap();
//! assert_eq!(timeline.len(), 3);
//! assert_eq!(timeline.final_tick(), 11);
//! ```

mod fcfs;
mod non_preemptive;
mod preemptive;
mod round_robin;
mod state;

pub use fcfs::Fcfs;
pub use non_preemptive::{Priority, Sjf};
pub use preemptive::{PreemptivePriority, Srtf};
pub use round_robin::RoundRobin;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SchedulerError;
use crate::models::{ProcessSet, Ticks, Timeline};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU scheduling algorithm.
///
/// Implementations must be deterministic: the same `ProcessSet` always
/// yields the same `Timeline`.
pub trait SchedulingAlgorithm: Send + Sync + fmt::Debug {
    /// Short name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Algorithm description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Whether a running process can lose the CPU before finishing.
    fn is_preemptive(&self) -> bool;

    /// Whether every process must carry a priority.
    fn requires_priority(&self) -> bool {
        false
    }

    /// Simulates the process set and returns its Gantt timeline.
    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError>;
}

/// Parameterless algorithm selector, as used in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Non-preemptive priority.
    Priority,
    /// Preemptive priority.
    PriorityPreemptive,
    /// Round-Robin (needs a quantum).
    RoundRobin,
}

impl AlgorithmKind {
    /// Every algorithm, in presentation order.
    pub const ALL: [AlgorithmKind; 6] = [
        AlgorithmKind::Fcfs,
        AlgorithmKind::Sjf,
        AlgorithmKind::Srtf,
        AlgorithmKind::Priority,
        AlgorithmKind::PriorityPreemptive,
        AlgorithmKind::RoundRobin,
    ];

    /// Whether this algorithm reads process priorities.
    pub fn requires_priority(self) -> bool {
        matches!(self, Self::Priority | Self::PriorityPreemptive)
    }
}

/// A configured algorithm, ready to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First.
    Sjf,
    /// Shortest-Remaining-Time-First.
    Srtf,
    /// Non-preemptive priority.
    Priority,
    /// Preemptive priority.
    PreemptivePriority,
    /// Round-Robin with its quantum.
    RoundRobin(RoundRobin),
}

impl Algorithm {
    /// Builds an algorithm from its kind.
    ///
    /// # Errors
    /// `InvalidInput` if Round-Robin is requested without a quantum or with
    /// a non-positive one.
    pub fn from_kind(kind: AlgorithmKind, quantum: Option<Ticks>) -> Result<Self, SchedulerError> {
        Ok(match kind {
            AlgorithmKind::Fcfs => Self::Fcfs,
            AlgorithmKind::Sjf => Self::Sjf,
            AlgorithmKind::Srtf => Self::Srtf,
            AlgorithmKind::Priority => Self::Priority,
            AlgorithmKind::PriorityPreemptive => Self::PreemptivePriority,
            AlgorithmKind::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    SchedulerError::InvalidInput(vec![ValidationError::new(
                        ValidationErrorKind::MissingQuantum,
                        "Round-Robin requires a time quantum",
                    )])
                })?;
                Self::RoundRobin(RoundRobin::new(quantum)?)
            }
        })
    }

    /// All six algorithms, in presentation order.
    pub fn all(quantum: Ticks) -> Result<Vec<Self>, SchedulerError> {
        AlgorithmKind::ALL
            .iter()
            .map(|&kind| Self::from_kind(kind, Some(quantum)))
            .collect()
    }

    /// The selector this algorithm was built from.
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Fcfs => AlgorithmKind::Fcfs,
            Self::Sjf => AlgorithmKind::Sjf,
            Self::Srtf => AlgorithmKind::Srtf,
            Self::Priority => AlgorithmKind::Priority,
            Self::PreemptivePriority => AlgorithmKind::PriorityPreemptive,
            Self::RoundRobin(_) => AlgorithmKind::RoundRobin,
        }
    }

    fn inner(&self) -> &dyn SchedulingAlgorithm {
        match self {
            Self::Fcfs => &Fcfs,
            Self::Sjf => &Sjf,
            Self::Srtf => &Srtf,
            Self::Priority => &Priority,
            Self::PreemptivePriority => &PreemptivePriority,
            Self::RoundRobin(rr) => rr,
        }
    }
}

impl SchedulingAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn is_preemptive(&self) -> bool {
        self.inner().is_preemptive()
    }

    fn requires_priority(&self) -> bool {
        self.inner().requires_priority()
    }

    fn run(&self, processes: &ProcessSet) -> Result<Timeline, SchedulerError> {
        self.inner().run(processes)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin(rr) => write!(f, "{} (q={})", self.description(), rr.quantum()),
            _ => f.write_str(self.description()),
        }
    }
}
