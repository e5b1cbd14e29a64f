//! Process model.
//!
//! A process is a unit of CPU work described by when it becomes eligible
//! to run, how long it needs the processor, and (for the priority
//! algorithms) its priority.
//!
//! # Time Representation
//! All times are integer ticks (milliseconds) relative to the start of the
//! simulation (t=0).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SchedulerError;
use crate::validation::validate_processes;

/// Simulated time, in integer milliseconds.
pub type Ticks = i64;

/// Stable identity of a process: its index in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(pub usize);

impl ProcessId {
    /// Position of the process in the input.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }

    /// Display label: `A`..`Z` for the first 26 processes, `P<index>` after.
    pub fn label(self) -> String {
        match u8::try_from(self.0) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => format!("P{}", self.0),
        }
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// A process to be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Tick at which the process becomes eligible to run.
    pub arrival: Ticks,
    /// Total CPU time required.
    pub burst: Ticks,
    /// Priority (lower value = more important). Only read by the
    /// priority algorithms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(arrival: Ticks, burst: Ticks) -> Self {
        Self {
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A validated, read-only set of processes.
///
/// Can only be constructed through validation, so every algorithm may
/// assume a non-empty set with `arrival >= 0` and `burst > 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Process>", into = "Vec<Process>")]
pub struct ProcessSet {
    processes: Vec<Process>,
}

impl ProcessSet {
    /// Validates and wraps a process list.
    ///
    /// # Errors
    /// `SchedulerError::InvalidInput` with every problem found.
    pub fn new(processes: Vec<Process>) -> Result<Self, SchedulerError> {
        validate_processes(&processes)?;
        Ok(Self { processes })
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Always `false` for a validated set.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Looks up a process by identity.
    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id.index())
    }

    /// Processes in input order.
    pub fn as_slice(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates `(id, process)` pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &Process)> + '_ {
        self.processes
            .iter()
            .enumerate()
            .map(|(i, p)| (ProcessId(i), p))
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> Ticks {
        self.processes.iter().map(|p| p.burst).sum()
    }

    /// Earliest arrival across the set.
    pub fn earliest_arrival(&self) -> Ticks {
        self.processes.iter().map(|p| p.arrival).min().unwrap_or(0)
    }
}

impl TryFrom<Vec<Process>> for ProcessSet {
    type Error = SchedulerError;

    fn try_from(processes: Vec<Process>) -> Result<Self, Self::Error> {
        Self::new(processes)
    }
}

impl From<ProcessSet> for Vec<Process> {
    fn from(set: ProcessSet) -> Self {
        set.processes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_process_builder() {
        let p = Process::new(3, 7).with_priority(2);
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, Some(2));
        assert_eq!(Process::new(0, 1).priority, None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ProcessId(0).label(), "A");
        assert_eq!(ProcessId(2).label(), "C");
        assert_eq!(ProcessId(25).label(), "Z");
        assert_eq!(ProcessId(26).label(), "P26");
        assert_eq!(ProcessId(1).to_string(), "B");
    }

    #[test]
    fn test_process_set_accessors() {
        let set = ProcessSet::new(vec![
            Process::new(2, 4),
            Process::new(1, 3),
            Process::new(5, 1),
        ])
        .unwrap();

        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
        assert_eq!(set.total_burst(), 8);
        assert_eq!(set.earliest_arrival(), 1);
        assert_eq!(set.get(ProcessId(1)).unwrap().burst, 3);
        assert!(set.get(ProcessId(3)).is_none());

        let ids: Vec<ProcessId> = set.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![ProcessId(0), ProcessId(1), ProcessId(2)]);
    }

    #[test]
    fn test_process_set_rejects_invalid() {
        let err = ProcessSet::new(vec![]).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyProcessSet
        );

        let err = ProcessSet::new(vec![Process::new(0, 0)]).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::NonPositiveBurst
        );
    }

    #[test]
    fn test_process_set_serde() {
        let json = r#"[{"arrival":0,"burst":4,"priority":1},{"arrival":2,"burst":3}]"#;
        let set: ProcessSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(ProcessId(0)).unwrap().priority, Some(1));
        assert_eq!(set.get(ProcessId(1)).unwrap().priority, None);

        let back = serde_json::to_string(&set).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_process_set_serde_validates() {
        let json = r#"[{"arrival":0,"burst":-4}]"#;
        let result: Result<ProcessSet, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("non-positive burst"));
    }
}
