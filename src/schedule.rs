//! Deterministic timer queue.
//!
//! The browser host turns [`Action::Schedule`] and [`Action::Every`] into real
//! `gloo-timers` callbacks. `Timeline` does the same against a manual clock so
//! timer-driven behavior can be replayed step by step.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use crate::controller::{Action, PageCore, Task};

#[derive(Debug, Clone, PartialEq)]
struct Pending {
    due_ms: u64,
    seq: u64,
    task: Task,
    repeat_ms: Option<u64>,
}

/// Manual clock plus the timers registered against it.
#[derive(Debug, Default)]
pub struct Timeline {
    now_ms: u64,
    seq: u64,
    pending: Vec<Pending>,
    /// Every non-timer action applied so far, in order.
    pub applied: Vec<Action>,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of timers still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_pending(&self, task: &Task) -> bool {
        self.pending.iter().any(|p| &p.task == task)
    }

    /// Register timers from `actions` and record the rest in [`Timeline::applied`].
    pub fn apply(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::Schedule { delay_ms, task } => self.push(u64::from(delay_ms), task, None),
                Action::Every { interval_ms, task } => {
                    let every = u64::from(interval_ms.max(1));
                    self.push(every, task, Some(every));
                }
                Action::Cancel(task) => self.pending.retain(|p| p.task != task),
                other => self.applied.push(other),
            }
        }
    }

    /// Move the clock forward by `ms`, firing due timers on `core` in due-time
    /// order (ties fire in registration order).
    pub fn advance(&mut self, core: &mut PageCore, ms: u64) {
        let until = self.now_ms.saturating_add(ms);
        while let Some(pos) = self.next_due(until) {
            let fired = self.pending.remove(pos);
            self.now_ms = fired.due_ms;
            if let Some(every) = fired.repeat_ms {
                self.push(every, fired.task.clone(), Some(every));
            }
            let actions = core.on_timer(&fired.task);
            self.apply(actions);
        }
        self.now_ms = until;
    }

    fn push(&mut self, delay_ms: u64, task: Task, repeat_ms: Option<u64>) {
        self.seq += 1;
        self.pending.push(Pending { due_ms: self.now_ms.saturating_add(delay_ms), seq: self.seq, task, repeat_ms });
    }

    fn next_due(&self, until: u64) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until)
            .min_by_key(|(_, p)| (p.due_ms, p.seq))
            .map(|(i, _)| i)
    }
}
