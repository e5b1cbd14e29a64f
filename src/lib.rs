//! Single-processor CPU scheduling simulator.
//!
//! Replays classical scheduling policies over a set of processes (arrival,
//! burst, optional priority) in integer millisecond ticks, producing a
//! Gantt timeline and waiting/turnaround/utilization metrics for each.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `ExecutionInterval`,
//!   `Timeline`
//! - **`algorithms`**: FCFS, SJF, SRTF, Priority (both variants) and
//!   Round-Robin behind the `SchedulingAlgorithm` trait
//! - **`scheduler`**: `Simulator`, request configuration and metrics
//! - **`validation`**: Input checks run before any simulation
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use cpu_sched::algorithms::Algorithm;
//! use cpu_sched::models::{Process, ProcessSet};
//! use cpu_sched::scheduler::Simulator;
//!
//! let processes = ProcessSet::new(vec![
//!     Process::new(0, 5).with_priority(2),
//!     Process::new(0, 3).with_priority(1),
//! ])
//! .unwrap();
//!
//! let reports = Simulator::new()
//!     .run_all(&processes, &Algorithm::all(2).unwrap())
//!     .unwrap();
//! assert_eq!(reports.len(), 6);
//! assert!(reports.iter().all(|r| r.metrics.cpu_utilization == 100.0));
//! ```
//!
//! Everything runs synchronously on the calling thread unless
//! `Simulator::with_parallel` is set. Logging goes through `tracing`; the
//! library installs no subscriber.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne, "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos, "Modern Operating Systems", Ch. 2.4

pub mod algorithms;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SchedulerError;
