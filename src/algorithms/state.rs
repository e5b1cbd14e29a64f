//! Private working copy used by every algorithm.
//!
//! Holds per-process remaining burst, effective arrival (Round-Robin
//! re-entry), a "has run" flag and a retirement flag in fixed-size arrays
//! indexed by `ProcessId`. The caller's `ProcessSet` is only read.

use tracing::trace;

use crate::error::SchedulerError;
use crate::models::{ExecutionInterval, ProcessId, ProcessSet, Ticks, Timeline};

/// Which per-process value a selection minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectionKey {
    /// Remaining burst (equals full burst for non-preemptive runs).
    RemainingBurst,
    /// Priority value; lower wins.
    Priority,
}

pub(crate) struct SimulationState<'a> {
    algorithm: &'static str,
    processes: &'a ProcessSet,
    remaining: Vec<Ticks>,
    arrival: Vec<Ticks>,
    has_run: Vec<bool>,
    retired: Vec<bool>,
    active: usize,
    clock: Ticks,
    timeline: Timeline,
}

impl<'a> SimulationState<'a> {
    pub(crate) fn new(algorithm: &'static str, processes: &'a ProcessSet) -> Self {
        let n = processes.len();
        Self {
            algorithm,
            processes,
            remaining: processes.as_slice().iter().map(|p| p.burst).collect(),
            arrival: processes.as_slice().iter().map(|p| p.arrival).collect(),
            has_run: vec![false; n],
            retired: vec![false; n],
            active: n,
            clock: 0,
            timeline: Timeline::new(),
        }
    }

    pub(crate) fn is_done(&self) -> bool {
        self.active == 0
    }

    pub(crate) fn clock(&self) -> Ticks {
        self.clock
    }

    pub(crate) fn remaining(&self, i: usize) -> Ticks {
        self.remaining[i]
    }

    /// Effective arrival: the original arrival, or the tick at which a
    /// Round-Robin process re-entered the ready set.
    pub(crate) fn arrival(&self, i: usize) -> Ticks {
        self.arrival[i]
    }

    pub(crate) fn has_run(&self, i: usize) -> bool {
        self.has_run[i]
    }

    /// Active processes with `arrival <= clock`, in input order.
    pub(crate) fn eligible(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.remaining.len()).filter(move |&i| !self.retired[i] && self.arrival[i] <= self.clock)
    }

    /// Moves the clock forward to the earliest pending arrival when nothing
    /// is eligible. Also used to position the clock at the first arrival.
    pub(crate) fn advance_if_idle(&mut self) -> Result<(), SchedulerError> {
        if self.eligible().next().is_some() {
            return Ok(());
        }
        let next = (0..self.arrival.len())
            .filter(|&i| !self.retired[i])
            .map(|i| self.arrival[i])
            .min()
            .ok_or_else(|| {
                SchedulerError::inconsistency(self.algorithm, "no active process left to wait for")
            })?;
        trace!(
            algorithm = self.algorithm,
            from = self.clock,
            to = next,
            "cpu idle until next arrival"
        );
        self.clock = next;
        Ok(())
    }

    /// Moves the clock forward to `tick` if it is in the future.
    pub(crate) fn advance_to(&mut self, tick: Ticks) {
        if tick > self.clock {
            trace!(
                algorithm = self.algorithm,
                from = self.clock,
                to = tick,
                "cpu idle until next arrival"
            );
            self.clock = tick;
        }
    }

    fn key(&self, key: SelectionKey, i: usize) -> i64 {
        match key {
            SelectionKey::RemainingBurst => self.remaining[i],
            SelectionKey::Priority => i64::from(self.processes.as_slice()[i].priority.unwrap_or(0)),
        }
    }

    /// Picks the eligible process with the smallest key.
    ///
    /// Scans eligible processes in input order. A later process replaces
    /// the current best when its key is smaller, or when the keys are equal
    /// and it arrived strictly before `anchor`. With no anchor, the current
    /// best's own arrival is used, giving "earliest arrival, then input
    /// order". Preemptive re-evaluation passes the running process's
    /// arrival as the anchor.
    pub(crate) fn select(
        &self,
        key: SelectionKey,
        anchor: Option<Ticks>,
    ) -> Result<usize, SchedulerError> {
        let mut best: Option<usize> = None;
        for i in self.eligible() {
            best = match best {
                None => Some(i),
                Some(b) => {
                    let (ki, kb) = (self.key(key, i), self.key(key, b));
                    let tie_anchor = anchor.unwrap_or(self.arrival[b]);
                    if ki < kb || (ki == kb && self.arrival[i] < tie_anchor) {
                        Some(i)
                    } else {
                        Some(b)
                    }
                }
            };
        }
        best.ok_or_else(|| {
            SchedulerError::inconsistency(
                self.algorithm,
                format!("no eligible process at tick {}", self.clock),
            )
        })
    }

    /// Runs process `i` for `ticks`, without recording an interval.
    pub(crate) fn execute(&mut self, i: usize, ticks: Ticks) {
        debug_assert!(ticks > 0 && ticks <= self.remaining[i]);
        self.remaining[i] -= ticks;
        self.clock += ticks;
        self.has_run[i] = true;
        if self.remaining[i] == 0 {
            self.retired[i] = true;
            self.active -= 1;
        }
    }

    /// Runs process `i` for `ticks` starting now and records the interval.
    pub(crate) fn run_slice(&mut self, i: usize, ticks: Ticks) {
        let start = self.clock;
        self.execute(i, ticks);
        self.record(i, start);
    }

    /// Records an interval for process `i` from `start` to the current clock.
    pub(crate) fn record(&mut self, i: usize, start: Ticks) {
        self.timeline
            .push(ExecutionInterval::new(ProcessId(i), start, self.clock));
    }

    /// Sets the effective arrival of process `i` to the current clock.
    pub(crate) fn requeue(&mut self, i: usize) {
        self.arrival[i] = self.clock;
    }

    pub(crate) fn into_timeline(self) -> Timeline {
        self.timeline
    }
}
