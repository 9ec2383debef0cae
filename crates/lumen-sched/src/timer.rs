//! One-Shot Timers

use tracing::trace;

/// Timer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Queue of one-shot deadlines
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_id: u64,
    timers: Vec<(TimerId, f64)>,
}

impl TimerQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self { next_id: 1, timers: Vec::new() }
    }

    /// Schedule a timer for an absolute deadline
    pub fn schedule(&mut self, at_ms: f64) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push((id, at_ms));
        trace!(?id, at_ms, "timer scheduled");
        id
    }

    /// Cancel a timer, returning whether it was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|(t, _)| *t != id);
        self.timers.len() != before
    }

    /// Remove and return every timer whose deadline has passed,
    /// in deadline order
    pub fn fire(&mut self, now_ms: f64) -> Vec<TimerId> {
        let mut due: Vec<(TimerId, f64)> = Vec::new();
        self.timers.retain(|&(id, at)| {
            if at <= now_ms {
                due.push((id, at));
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.1.total_cmp(&b.1));
        due.into_iter().map(|(id, _)| id).collect()
    }

    /// Whether a timer is still pending
    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|(t, _)| *t == id)
    }

    /// Number of pending timers
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Whether no timers are pending
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_in_deadline_order() {
        let mut queue = TimerQueue::new();
        let late = queue.schedule(200.0);
        let early = queue.schedule(100.0);

        assert_eq!(queue.fire(50.0), Vec::new());
        assert_eq!(queue.fire(250.0), vec![early, late]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_cancel() {
        let mut queue = TimerQueue::new();
        let id = queue.schedule(100.0);
        assert!(queue.is_pending(id));
        assert!(queue.cancel(id));
        assert!(!queue.cancel(id));
        assert_eq!(queue.fire(150.0), Vec::new());
    }
}
