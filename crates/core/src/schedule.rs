//! Delayed clear renders for transient markers.
//!
//! Each entry remembers the render generation that created it. When it
//! comes due and a newer render has happened since, it is stale and
//! expires without rendering. Entries are never cancelled early.

use std::time::{Duration, Instant};

/// How long each marker stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub insert: Duration,
    pub delete_grace: Duration,
    pub search_highlight: Duration,
    pub update_highlight: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            insert: Duration::from_millis(300),
            delete_grace: Duration::from_millis(200),
            search_highlight: Duration::from_millis(1400),
            update_highlight: Duration::from_millis(700),
        }
    }
}

/// A pending clear render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledClear {
    pub due: Instant,
    pub generation: u64,
}

/// Pending clears, in no particular order.
#[derive(Debug, Default)]
pub struct Schedule {
    pending: Vec<ScheduledClear>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, due: Instant, generation: u64) {
        self.pending.push(ScheduledClear { due, generation });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Earliest due time, if anything is pending.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|c| c.due).min()
    }

    /// Remove and return every entry due at or before `now`, oldest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ScheduledClear> {
        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|c| c.due <= now);
        self.pending = rest;
        due.sort_by_key(|c| (c.due, c.generation));
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_timings() {
        let t = Timings::default();
        assert_eq!(t.delete_grace, Duration::from_millis(200));
        assert_eq!(t.search_highlight, Duration::from_millis(1400));
        assert_eq!(t.update_highlight, Duration::from_millis(700));
    }

    #[test]
    fn next_due_is_earliest() {
        let now = Instant::now();
        let mut s = Schedule::new();
        assert!(s.next_due().is_none());
        s.push(now + Duration::from_millis(500), 1);
        s.push(now + Duration::from_millis(100), 2);
        assert_eq!(s.next_due(), Some(now + Duration::from_millis(100)));
    }

    #[test]
    fn take_due_leaves_future_entries() {
        let now = Instant::now();
        let mut s = Schedule::new();
        s.push(now + Duration::from_millis(300), 2);
        s.push(now + Duration::from_millis(100), 1);
        s.push(now + Duration::from_secs(5), 3);

        let due = s.take_due(now + Duration::from_millis(300));
        let gens: Vec<_> = due.iter().map(|c| c.generation).collect();
        assert_eq!(gens, vec![1, 2]);
        assert_eq!(s.len(), 1);
        assert!(s.take_due(now).is_empty());
    }
}
