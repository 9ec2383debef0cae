//! Animation Tasks
//!
//! Imperative one-shot effects as explicit tasks: each carries a
//! cancellation token and a completion condition, and every update
//! checks both before continuing. Spawning a task on the same element
//! and channel replaces the in-flight task instead of racing it.

use std::cell::Cell;
use std::rc::Rc;

use lumen_dom::{DomTree, NodeId};
use tracing::trace;

use crate::{Easing, MotionConfig};

/// Default duration for the fade/slide/scale one-shots
pub const DEFAULT_EFFECT_DURATION_MS: f64 = 300.0;

/// Shared cancellation flag for one task
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Rc<Cell<bool>>,
}

impl CancelToken {
    fn new() -> Self {
        Self::default()
    }

    /// Cancel the task; it is dropped on the next update without
    /// touching the element further
    pub fn cancel(&self) {
        self.flag.set(true);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.get()
    }
}

/// Style channel a task writes to; one task per (element, channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Opacity,
    Transform,
    Text,
}

/// What a task animates
#[derive(Debug, Clone)]
pub enum EffectKind {
    /// Opacity from → to
    FadeTo { from: f32, to: f32 },
    /// Vertical offset from → to, in pixels
    TranslateY { from: f32, to: f32 },
    /// Uniform scale from → to
    ScaleTo { from: f32, to: f32 },
    /// Scale up to a peak and back
    Pulse { peak: f32 },
    /// Integer counter from 0 to `target`, suffix appended
    Count { target: i64, suffix: String },
}

impl EffectKind {
    fn channel(&self) -> Channel {
        match self {
            EffectKind::FadeTo { .. } => Channel::Opacity,
            EffectKind::TranslateY { .. } | EffectKind::ScaleTo { .. } | EffectKind::Pulse { .. } => {
                Channel::Transform
            }
            EffectKind::Count { .. } => Channel::Text,
        }
    }
}

/// What happens when a task completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompletionAction {
    #[default]
    None,
    /// Detach the element (fade-out then remove sequencing)
    RemoveNode,
}

/// A finished task, reported to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub node: NodeId,
    pub channel: Channel,
    pub action: CompletionAction,
}

#[derive(Debug)]
struct AnimationTask {
    node: NodeId,
    channel: Channel,
    kind: EffectKind,
    start_ms: f64,
    duration_ms: f64,
    easing: Easing,
    token: CancelToken,
    action: CompletionAction,
}

/// Drives all animation tasks from the frame tick
#[derive(Debug, Default)]
pub struct Animator {
    reduced_motion: bool,
    tasks: Vec<AnimationTask>,
}

impl Animator {
    /// Create an animator honoring the captured motion preference
    pub fn new(config: &MotionConfig) -> Self {
        Self {
            reduced_motion: config.reduced_motion,
            tasks: Vec::new(),
        }
    }

    /// Spawn a task, replacing any in-flight task on the same element
    /// and channel
    pub fn spawn(
        &mut self,
        node: NodeId,
        kind: EffectKind,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
        action: CompletionAction,
    ) -> CancelToken {
        let channel = kind.channel();
        for task in &self.tasks {
            if task.node == node && task.channel == channel {
                trace!(?node, ?channel, "replacing in-flight animation task");
                task.token.cancel();
            }
        }
        self.tasks
            .retain(|t| !(t.node == node && t.channel == channel));

        let token = CancelToken::new();
        self.tasks.push(AnimationTask {
            node,
            channel,
            kind,
            start_ms: now_ms,
            duration_ms,
            easing,
            token: token.clone(),
            action,
        });
        token
    }

    // === One-shot effect surface ===

    /// Fade an element in
    pub fn fade_in(&mut self, node: NodeId, now_ms: f64, duration_ms: f64) -> CancelToken {
        self.spawn(
            node,
            EffectKind::FadeTo { from: 0.0, to: 1.0 },
            now_ms,
            duration_ms,
            Easing::QuadOut,
            CompletionAction::None,
        )
    }

    /// Fade an element out; `action` sequences what follows completion
    pub fn fade_out(
        &mut self,
        node: NodeId,
        now_ms: f64,
        duration_ms: f64,
        action: CompletionAction,
    ) -> CancelToken {
        self.spawn(
            node,
            EffectKind::FadeTo { from: 1.0, to: 0.0 },
            now_ms,
            duration_ms,
            Easing::QuadOut,
            action,
        )
    }

    /// Slide an element up into place
    pub fn slide_up(
        &mut self,
        node: NodeId,
        distance_px: f32,
        now_ms: f64,
        duration_ms: f64,
    ) -> CancelToken {
        self.spawn(
            node,
            EffectKind::TranslateY { from: distance_px, to: 0.0 },
            now_ms,
            duration_ms,
            Easing::CubicOut,
            CompletionAction::None,
        )
    }

    /// Scale an element in from slightly shrunk
    pub fn scale_in(&mut self, node: NodeId, now_ms: f64, duration_ms: f64) -> CancelToken {
        self.spawn(
            node,
            EffectKind::ScaleTo { from: 0.9, to: 1.0 },
            now_ms,
            duration_ms,
            Easing::CubicOut,
            CompletionAction::None,
        )
    }

    /// Pulse an element once
    pub fn pulse(&mut self, node: NodeId, now_ms: f64, duration_ms: f64) -> CancelToken {
        self.spawn(
            node,
            EffectKind::Pulse { peak: 1.05 },
            now_ms,
            duration_ms,
            Easing::Linear,
            CompletionAction::None,
        )
    }

    /// Count a text slot from zero to `target`
    pub fn count_to(
        &mut self,
        node: NodeId,
        target: i64,
        suffix: &str,
        now_ms: f64,
        duration_ms: f64,
    ) -> CancelToken {
        self.spawn(
            node,
            EffectKind::Count { target, suffix: suffix.to_string() },
            now_ms,
            duration_ms,
            Easing::QuartOut,
            CompletionAction::None,
        )
    }

    /// Advance all tasks to `now_ms`, applying styles and retiring
    /// finished tasks. Under reduced motion every task completes on its
    /// first update with the end state.
    pub fn update(&mut self, tree: &mut DomTree, now_ms: f64) -> Vec<Completion> {
        let mut completions = Vec::new();
        let mut remaining = Vec::new();

        for task in std::mem::take(&mut self.tasks) {
            if task.token.is_cancelled() {
                continue;
            }
            let mut progress = if task.duration_ms <= 0.0 {
                1.0
            } else {
                (((now_ms - task.start_ms) / task.duration_ms).clamp(0.0, 1.0)) as f32
            };
            if self.reduced_motion {
                progress = 1.0;
            }
            Self::apply(tree, &task, progress);

            if progress >= 1.0 {
                if task.action == CompletionAction::RemoveNode {
                    tree.remove(task.node);
                }
                completions.push(Completion {
                    node: task.node,
                    channel: task.channel,
                    action: task.action,
                });
            } else {
                remaining.push(task);
            }
        }

        self.tasks = remaining;
        completions
    }

    fn apply(tree: &mut DomTree, task: &AnimationTask, progress: f32) {
        let eased = task.easing.apply(progress);
        match &task.kind {
            EffectKind::FadeTo { from, to } => {
                let value = from + (to - from) * eased;
                tree.set_style(task.node, "opacity", &format!("{value:.3}"));
            }
            EffectKind::TranslateY { from, to } => {
                let value = from + (to - from) * eased;
                tree.set_style(task.node, "transform", &format!("translateY({value:.1}px)"));
            }
            EffectKind::ScaleTo { from, to } => {
                let value = from + (to - from) * eased;
                tree.set_style(task.node, "transform", &format!("scale({value:.3})"));
            }
            EffectKind::Pulse { peak } => {
                // Triangle over raw progress: up to the peak, back to rest
                let lift = 1.0 - (2.0 * progress - 1.0).abs();
                let value = 1.0 + (peak - 1.0) * lift;
                tree.set_style(task.node, "transform", &format!("scale({value:.3})"));
            }
            EffectKind::Count { target, suffix } => {
                let text = if progress >= 1.0 {
                    format!("{target}{suffix}")
                } else {
                    let value = (*target as f64 * f64::from(eased)).round() as i64;
                    format!("{}{suffix}", value.min(*target))
                };
                tree.set_text(task.node, &text);
            }
        }
    }

    /// Cancel every task without applying further styles
    pub fn cancel_all(&mut self) {
        for task in &self.tasks {
            task.token.cancel();
        }
        self.tasks.clear();
    }

    /// Number of in-flight tasks
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (DomTree, NodeId) {
        let mut tree = DomTree::new();
        let node = tree.create_element("div");
        (tree, node)
    }

    #[test]
    fn test_fade_in_progresses_and_completes() {
        let (mut tree, node) = setup();
        let mut animator = Animator::new(&MotionConfig::default());
        animator.fade_in(node, 0.0, 100.0);

        assert!(animator.update(&mut tree, 50.0).is_empty());
        let mid: f32 = tree.style(node, "opacity").unwrap().parse().unwrap();
        assert!(mid > 0.0 && mid < 1.0);

        let done = animator.update(&mut tree, 100.0);
        assert_eq!(done.len(), 1);
        assert_eq!(tree.style(node, "opacity"), Some("1.000"));
        assert_eq!(animator.active_count(), 0);
    }

    #[test]
    fn test_fade_out_sequences_removal() {
        let (mut tree, node) = setup();
        let parent = tree.create_element("section");
        tree.append_child(parent, node).unwrap();

        let mut animator = Animator::new(&MotionConfig::default());
        animator.fade_out(node, 0.0, 100.0, CompletionAction::RemoveNode);

        animator.update(&mut tree, 50.0);
        assert_eq!(tree.children(parent).count(), 1);

        let done = animator.update(&mut tree, 100.0);
        assert_eq!(done[0].action, CompletionAction::RemoveNode);
        assert_eq!(tree.children(parent).count(), 0);
    }

    #[test]
    fn test_counter_bounds_and_final_literal() {
        let (mut tree, node) = setup();
        let mut animator = Animator::new(&MotionConfig::default());
        animator.count_to(node, 42, "%", 0.0, 2000.0);

        for now in [1.0, 500.0, 1000.0, 1500.0, 1999.0] {
            animator.update(&mut tree, now);
            let text = tree.text_content(node);
            let value: i64 = text.trim_end_matches('%').parse().unwrap();
            assert!((0..=42).contains(&value), "value {value} at {now}ms");
        }

        animator.update(&mut tree, 2000.0);
        assert_eq!(tree.text_content(node), "42%");
    }

    #[test]
    fn test_cancellation_stops_task() {
        let (mut tree, node) = setup();
        let mut animator = Animator::new(&MotionConfig::default());
        let token = animator.fade_in(node, 0.0, 100.0);

        token.cancel();
        assert!(animator.update(&mut tree, 50.0).is_empty());
        assert_eq!(animator.active_count(), 0);
        // No style was ever written
        assert_eq!(tree.style(node, "opacity"), None);
    }

    #[test]
    fn test_same_channel_replaces() {
        let (mut tree, node) = setup();
        let mut animator = Animator::new(&MotionConfig::default());
        let first = animator.fade_in(node, 0.0, 100.0);
        let second = animator.fade_out(node, 10.0, 100.0, CompletionAction::None);

        assert!(first.is_cancelled());
        assert!(!second.is_cancelled());
        assert_eq!(animator.active_count(), 1);
    }

    #[test]
    fn test_reduced_motion_jumps_to_end_state() {
        let (mut tree, node) = setup();
        let config = MotionConfig { reduced_motion: true, ..Default::default() };
        let mut animator = Animator::new(&config);
        animator.count_to(node, 42, "%", 0.0, 2000.0);
        animator.fade_in(node, 0.0, 300.0);

        // First update, far before either duration elapses
        let done = animator.update(&mut tree, 1.0);
        assert_eq!(done.len(), 2);
        assert_eq!(tree.text_content(node), "42%");
        assert_eq!(tree.style(node, "opacity"), Some("1.000"));
        assert_eq!(animator.active_count(), 0);
    }
}
