//! Gantt timeline model.
//!
//! A timeline is the ordered record of which process held the processor
//! during which tick range. It is the common output of every scheduling
//! algorithm and the sole input (besides the process set) of metrics.

use serde::{Deserialize, Serialize};

use super::{ProcessId, Ticks};

/// One contiguous span during which a single process occupies the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionInterval {
    /// Running process.
    pub process: ProcessId,
    /// First tick of the span.
    pub start: Ticks,
    /// Tick at which the span ends (exclusive).
    pub end: Ticks,
}

impl ExecutionInterval {
    /// Creates an interval.
    pub fn new(process: ProcessId, start: Ticks, end: Ticks) -> Self {
        Self {
            process,
            start,
            end,
        }
    }

    /// Length of the span in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Ordered sequence of execution intervals for one algorithm run.
///
/// A process may appear in several non-adjacent intervals (preemption,
/// Round-Robin). Its completion time is the end of its *last* interval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Intervals in non-decreasing start order.
    pub intervals: Vec<ExecutionInterval>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an interval.
    pub fn push(&mut self, interval: ExecutionInterval) {
        debug_assert!(interval.end > interval.start, "empty interval {interval:?}");
        debug_assert!(
            self.final_tick() <= interval.start,
            "interval {interval:?} overlaps previous end {}",
            self.final_tick()
        );
        self.intervals.push(interval);
    }

    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether no interval was recorded.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Iterates intervals in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExecutionInterval> {
        self.intervals.iter()
    }

    /// End of the final interval, i.e. total elapsed simulated time.
    ///
    /// Only equals the true end of simulated time because no algorithm
    /// schedules idle time after the last process finishes.
    pub fn final_tick(&self) -> Ticks {
        self.intervals.last().map(|i| i.end).unwrap_or(0)
    }

    /// Start of the first interval.
    pub fn first_tick(&self) -> Ticks {
        self.intervals.first().map(|i| i.start).unwrap_or(0)
    }

    /// Intervals belonging to one process, in order.
    pub fn intervals_for(
        &self,
        process: ProcessId,
    ) -> impl DoubleEndedIterator<Item = &ExecutionInterval> + '_ {
        self.intervals.iter().filter(move |i| i.process == process)
    }

    /// Completion time of a process: end of its last occurrence.
    pub fn completion_time(&self, process: ProcessId) -> Option<Ticks> {
        self.intervals_for(process).next_back().map(|i| i.end)
    }

    /// First tick at which a process ran.
    pub fn first_start(&self, process: ProcessId) -> Option<Ticks> {
        self.intervals_for(process).next().map(|i| i.start)
    }

    /// Total ticks a process spent on the CPU.
    pub fn executed_ticks(&self, process: ProcessId) -> Ticks {
        self.intervals_for(process)
            .map(ExecutionInterval::duration)
            .sum()
    }

    /// Ticks in `[0, final_tick)` during which no process ran.
    pub fn idle_ticks(&self) -> Ticks {
        let busy: Ticks = self.intervals.iter().map(ExecutionInterval::duration).sum();
        self.final_tick() - busy
    }

    /// Whether intervals are sorted by start, non-overlapping and non-empty.
    pub fn is_well_formed(&self) -> bool {
        self.intervals.iter().all(|i| i.end > i.start)
            && self
                .intervals
                .windows(2)
                .all(|pair| pair[0].end <= pair[1].start)
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionInterval;
    type IntoIter = std::slice::Iter<'a, ExecutionInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
