//! Simulation domain models.
//!
//! Provides the input and output types of a CPU scheduling simulation.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Arrival, burst and optional priority of one job |
//! | `ProcessSet` | Validated, read-only input to every algorithm |
//! | `ExecutionInterval` | One span of a process on the CPU |
//! | `Timeline` | Gantt chart: ordered intervals of one run |

mod process;
mod timeline;

pub use process::{Process, ProcessId, ProcessSet, Ticks};
pub use timeline::{ExecutionInterval, Timeline};
