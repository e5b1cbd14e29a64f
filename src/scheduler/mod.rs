//! Simulation driver and performance metrics.
//!
//! `Simulator` feeds one validated process set to one or more algorithms
//! and reduces each resulting timeline to metrics.
//!
//! # Metrics
//!
//! `SimulationMetrics` computes per-process completion, turnaround,
//! waiting and response times, their totals and averages, and CPU
//! utilization.

mod metrics;
mod simulator;

pub use metrics::{ProcessMetrics, SimulationMetrics};
pub use simulator::{SimulationReport, SimulationRequest, Simulator};
