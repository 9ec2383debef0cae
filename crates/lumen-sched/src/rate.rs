//! Rate Limiting
//!
//! Debounce (trailing edge) and throttle (leading edge) as explicit
//! state machines over caller-supplied timestamps.

/// Trailing-edge debouncer
///
/// Holds at most one pending invocation. Each `call` replaces the
/// pending argument and pushes the fire time out to `wait_ms` past the
/// most recent call; `poll` releases it once the window has elapsed.
#[derive(Debug)]
pub struct Debouncer<T> {
    wait_ms: f64,
    pending: Option<Pending<T>>,
}

#[derive(Debug)]
struct Pending<T> {
    value: T,
    fire_at: f64,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet window
    pub fn new(wait_ms: f64) -> Self {
        Self { wait_ms, pending: None }
    }

    /// Record an invocation; the most recent argument wins
    pub fn call(&mut self, value: T, now_ms: f64) {
        self.pending = Some(Pending {
            value,
            fire_at: now_ms + self.wait_ms,
        });
    }

    /// Release the pending invocation once the window has elapsed
    pub fn poll(&mut self, now_ms: f64) -> Option<T> {
        match &self.pending {
            Some(p) if now_ms >= p.fire_at => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Whether an invocation is waiting to fire
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop the pending invocation without firing it
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Leading-edge throttler
///
/// Admits one call per window; calls landing inside the window are
/// dropped, not queued.
#[derive(Debug, Default)]
pub struct Throttler {
    limit_ms: f64,
    last_admitted: Option<f64>,
}

impl Throttler {
    /// Create a throttler with the given window
    pub fn new(limit_ms: f64) -> Self {
        Self { limit_ms, last_admitted: None }
    }

    /// Whether a call at `now_ms` is admitted
    pub fn allow(&mut self, now_ms: f64) -> bool {
        match self.last_admitted {
            Some(last) if now_ms - last < self.limit_ms => false,
            _ => {
                self.last_admitted = Some(now_ms);
                true
            }
        }
    }
}
