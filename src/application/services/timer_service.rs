//! TimerService - virtual clock and timer queue
//!
//! Timers fire in due-time order; timers due at the same instant fire in the
//! order they were scheduled. Nothing runs until the clock is advanced.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::application::ports::{Scheduler, TimerTask};

#[derive(Debug)]
struct ScheduledTimer {
    due_ms: u64,
    seq: u64,
    task: TimerTask,
}

impl PartialEq for ScheduledTimer {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl Eq for ScheduledTimer {}

impl PartialOrd for ScheduledTimer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTimer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

/// Centralized timer management service
#[derive(Debug, Default)]
pub struct TimerService {
    now_ms: u64,
    next_seq: u64,
    queue: BinaryHeap<Reverse<ScheduledTimer>>,
}

impl TimerService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of timers not yet fired
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Due time of the earliest pending timer
    pub fn next_due(&self) -> Option<u64> {
        self.queue.peek().map(|Reverse(t)| t.due_ms)
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock
    /// to its due time
    pub fn pop_due(&mut self, until_ms: u64) -> Option<TimerTask> {
        if self.next_due()? > until_ms {
            return None;
        }
        let Reverse(timer) = self.queue.pop()?;
        self.now_ms = self.now_ms.max(timer.due_ms);
        Some(timer.task)
    }

    /// Move the clock forward to `until_ms` after due timers have run
    pub fn settle(&mut self, until_ms: u64) {
        self.now_ms = self.now_ms.max(until_ms);
    }
}

impl Scheduler for TimerService {
    fn now(&self) -> u64 {
        self.now_ms
    }

    fn schedule(&mut self, delay_ms: u64, task: TimerTask) {
        let timer = ScheduledTimer {
            due_ms: self.now_ms + delay_ms,
            seq: self.next_seq,
            task,
        };
        self.next_seq += 1;
        self.queue.push(Reverse(timer));
    }
}
