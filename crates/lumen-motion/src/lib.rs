//! Lumen Motion
//!
//! Motion coordination for the page: scroll reveals, visibility-triggered
//! counters, cursor trailing, smooth scroll, parallax layers, the terminal
//! typewriter and imperative one-shot effects. Every controller takes its
//! environment (reduced motion, pointer capability) as explicit
//! configuration captured once at construction and never re-polled.

mod config;
mod counter;
mod cursor;
mod easing;
mod parallax;
mod reveal;
mod scroll;
mod task;
mod typewriter;

pub use config::{MotionConfig, PointerCapability};
pub use counter::{CounterController, COUNTER_THRESHOLD, DEFAULT_COUNT_DURATION_MS};
pub use cursor::{CursorFollow, CURSOR_LERP};
pub use easing::Easing;
pub use parallax::ParallaxController;
pub use reveal::{RevealController, REVEAL_MARGIN_PX, REVEAL_THRESHOLD, STAGGER_STEP_MS};
pub use scroll::{SmoothScroll, DEFAULT_SCROLL_DURATION_MS};
pub use task::{
    Animator, CancelToken, Channel, Completion, CompletionAction, EffectKind,
    DEFAULT_EFFECT_DURATION_MS,
};
pub use typewriter::{Typewriter, DEFAULT_TYPE_CADENCE_MS};
