//! Logical clock with epoch-tagged one-shot timers.
//!
//! Every entry carries the epoch that was current when it was scheduled.
//! The owner compares it against its own epoch when the entry comes due and
//! drops stale ones, which gives level reloads a systematic cancel path.

use std::collections::BTreeMap;

use arena_core::constants::Millis;

/// A timer that came due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheduled<C> {
    pub due_ms: Millis,
    pub epoch: u64,
    pub command: C,
}

#[derive(Debug, Clone)]
pub struct Scheduler<C> {
    now_ms: Millis,
    next_seq: u64,
    /// Keyed by (due, insertion order) so equal deadlines fire FIFO.
    pending: BTreeMap<(Millis, u64), Scheduled<C>>,
}

impl<C> Default for Scheduler<C> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            pending: BTreeMap::new(),
        }
    }
}

impl<C> Scheduler<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Millis {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest pending deadline.
    pub fn next_due(&self) -> Option<Millis> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Run `command` `after_ms` from now, tagged with `epoch`. Returns the deadline.
    pub fn schedule(&mut self, after_ms: Millis, epoch: u64, command: C) -> Millis {
        let due_ms = self.now_ms.saturating_add(after_ms);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert(
            (due_ms, seq),
            Scheduled {
                due_ms,
                epoch,
                command,
            },
        );
        due_ms
    }

    /// Pop the earliest entry due at or before `until`, moving the clock to
    /// its deadline so anything it schedules is timed from when it fired.
    pub fn pop_due(&mut self, until: Millis) -> Option<Scheduled<C>> {
        let (&key, _) = self.pending.first_key_value()?;
        if key.0 > until {
            return None;
        }
        let entry = self.pending.remove(&key)?;
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry)
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: Millis) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_deadline_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(300, 0, "c");
        scheduler.schedule(100, 0, "a");
        scheduler.schedule(200, 0, "b");

        let mut fired = Vec::new();
        while let Some(entry) = scheduler.pop_due(1000) {
            fired.push(entry.command);
        }
        assert_eq!(fired, vec!["a", "b", "c"]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_equal_deadlines_are_fifo() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(50, 0, 1);
        scheduler.schedule(50, 0, 2);
        scheduler.schedule(50, 0, 3);
        let fired: Vec<_> = std::iter::from_fn(|| scheduler.pop_due(50))
            .map(|e| e.command)
            .collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(750, 4, ());
        assert!(scheduler.pop_due(749).is_none());
        let entry = scheduler.pop_due(750).unwrap();
        assert_eq!(entry.due_ms, 750);
        assert_eq!(entry.epoch, 4);
        assert_eq!(scheduler.now(), 750);
    }

    #[test]
    fn test_nested_schedule_is_relative_to_firing_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(100, 0, "first");
        let first = scheduler.pop_due(10_000).unwrap();
        assert_eq!(first.command, "first");
        let due = scheduler.schedule(100, 0, "second");
        assert_eq!(due, 200);
        assert_eq!(scheduler.next_due(), Some(200));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.set_now(500);
        scheduler.set_now(100);
        assert_eq!(scheduler.now(), 500);
    }
}
