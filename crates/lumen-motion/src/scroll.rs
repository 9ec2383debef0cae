//! Smooth Scroll
//!
//! Animates the page scroll position toward a target with cubic
//! ease-in-out. A second call replaces the in-flight scroll; direct
//! user input cancels it.

use crate::{Easing, MotionConfig};

/// Default smooth-scroll duration
pub const DEFAULT_SCROLL_DURATION_MS: f64 = 800.0;

#[derive(Debug)]
struct Flight {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
}

/// Page scroll position with smooth animation
#[derive(Debug)]
pub struct SmoothScroll {
    position: f32,
    flight: Option<Flight>,
    reduced_motion: bool,
}

impl SmoothScroll {
    /// Create at scroll position zero
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            position: 0.0,
            flight: None,
            reduced_motion: config.reduced_motion,
        }
    }

    /// Current scroll position
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Direct scroll input; cancels any smooth flight
    pub fn set_position(&mut self, y: f32) {
        self.position = y.max(0.0);
        self.flight = None;
    }

    /// Animate toward `target_top - offset` over the default duration
    pub fn scroll_to(&mut self, target_top: f32, offset: f32, now_ms: f64) {
        self.scroll_to_with_duration(target_top, offset, now_ms, DEFAULT_SCROLL_DURATION_MS);
    }

    /// Animate with an explicit duration; replaces an in-flight scroll
    pub fn scroll_to_with_duration(
        &mut self,
        target_top: f32,
        offset: f32,
        now_ms: f64,
        duration_ms: f64,
    ) {
        let to = (target_top - offset).max(0.0);
        if self.reduced_motion || duration_ms <= 0.0 {
            self.position = to;
            self.flight = None;
            return;
        }
        self.flight = Some(Flight {
            from: self.position,
            to,
            start_ms: now_ms,
            duration_ms,
        });
    }

    /// Whether a smooth flight is in progress
    pub fn is_scrolling(&self) -> bool {
        self.flight.is_some()
    }

    /// Advance the flight; returns whether the position changed
    pub fn update(&mut self, now_ms: f64) -> bool {
        let Some(flight) = &self.flight else {
            return false;
        };
        let progress = ((now_ms - flight.start_ms) / flight.duration_ms).clamp(0.0, 1.0) as f32;
        let eased = Easing::CubicInOut.apply(progress);
        self.position = flight.from + (flight.to - flight.from) * eased;
        if progress >= 1.0 {
            self.position = flight.to;
            self.flight = None;
        }
        true
    }
}
