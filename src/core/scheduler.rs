//! Fire-and-forget fixed-delay timers.
//!
//! Time is a monotonic offset supplied by the caller, so the shell can feed
//! wall-clock elapsed time while tests drive it by hand. Scheduled entries
//! are never cancelled.

use std::time::Duration;

/// Work a timer hands back to the reducer when it fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerTask {
    HideToast,
    LeaveSubmitted { days: i64 },
    ReportGenerated,
    ReportExported,
    ClockTick,
}

#[derive(Debug, Clone)]
struct Entry {
    due: Duration,
    seq: u64,
    task: TimerTask,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now: Duration, delay: Duration, task: TimerTask) {
        self.entries.push(Entry {
            due: now + delay,
            seq: self.next_seq,
            task,
        });
        self.next_seq += 1;
    }

    /// Remove and return every task due at `now` with its deadline,
    /// earliest first. Tasks due at the same instant keep their
    /// scheduling order.
    pub fn take_due(&mut self, now: Duration) -> Vec<(Duration, TimerTask)> {
        let (mut ready, pending): (Vec<Entry>, Vec<Entry>) =
            self.entries.drain(..).partition(|e| e.due <= now);
        self.entries = pending;

        ready.sort_by_key(|e| (e.due, e.seq));
        ready.into_iter().map(|e| (e.due, e.task)).collect()
    }

    /// Like [`Scheduler::take_due`], without the deadlines.
    pub fn due(&mut self, now: Duration) -> Vec<TimerTask> {
        self.take_due(now).into_iter().map(|(_, task)| task).collect()
    }

    /// Deadline of the earliest pending task.
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}
