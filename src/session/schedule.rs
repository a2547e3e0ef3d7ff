// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancelable delayed tasks on an injected clock.
//!
//! The session never reads a real clock or owns a real timer. Handlers pass
//! the current time in, tasks are scheduled for a due time, and whoever drives
//! the session (a `setTimeout` in the browser, a loop in a test) calls
//! [`Scheduler::take_due`] when time has moved. That keeps debounce behavior
//! deterministic under test.

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// Handle for cancelling a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

#[derive(Debug, Clone)]
struct Scheduled<T> {
    id: TaskId,
    due: Millis,
    task: T,
}

/// Pending tasks, fired in due-time order (ties in scheduling order).
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire once `now >= due`.
    pub fn schedule(&mut self, due: Millis, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(Scheduled { id, due, task });
        id
    }

    /// Drop a task that has not fired yet. Returns whether it was pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|s| s.id != id);
        self.pending.len() != before
    }

    pub fn is_pending(&self, id: TaskId) -> bool {
        self.pending.iter().any(|s| s.id == id)
    }

    /// Earliest due time, if anything is pending.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.pending.iter().map(|s| s.due).min()
    }

    /// Remove and return every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Millis) -> Vec<(TaskId, T)> {
        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.pending.len());
        for scheduled in self.pending.drain(..) {
            if scheduled.due <= now {
                due.push(scheduled);
            } else {
                remaining.push(scheduled);
            }
        }
        self.pending = remaining;
        // ids grow monotonically, so this is due time then scheduling order
        due.sort_by_key(|s| (s.due, s.id.0));
        due.into_iter().map(|s| (s.id, s.task)).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
