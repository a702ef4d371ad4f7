//! Virtual-time queue of one-shot timers.
//!
//! The queue never reads a real clock. Its owner moves time forward and
//! receives due events in deadline order, which makes countdown and feedback
//! logic testable with simulated time.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Cancellation handle returned by [`TimerQueue::schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

#[derive(Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, u64), E>,
    deadlines: HashMap<u64, Duration>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: BTreeMap::new(),
            deadlines: HashMap::new(),
        }
    }
}

impl<E> TimerQueue<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Arms `event` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        let deadline = self.now + delay;
        self.pending.insert((deadline, id), event);
        self.deadlines.insert(id, deadline);
        TimerHandle(id)
    }

    /// Disarms a timer. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.pending.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Removes the earliest timer due at or before `until`.
    ///
    /// Time moves to that timer's deadline, so anything scheduled while
    /// handling it is measured from the moment it fired. Equal deadlines fire
    /// in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, E)> {
        let (&(deadline, id), _) = self.pending.first_key_value()?;
        if deadline > until {
            return None;
        }
        let event = self.pending.remove(&(deadline, id))?;
        self.deadlines.remove(&id);
        self.now = self.now.max(deadline);
        Some((TimerHandle(id), event))
    }

    /// Moves time forward to `until` without firing anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
