//! Terminal Typewriter
//!
//! Reveals the terminal-output text character by character on a fixed
//! cadence. Instant under reduced motion.

use lumen_dom::{DomTree, NodeId};

use crate::MotionConfig;

/// Default milliseconds per revealed character
pub const DEFAULT_TYPE_CADENCE_MS: f64 = 35.0;

/// Character-by-character text reveal
#[derive(Debug)]
pub struct Typewriter {
    node: NodeId,
    text: String,
    cadence_ms: f64,
    started_ms: Option<f64>,
    shown: usize,
    instant: bool,
}

impl Typewriter {
    /// Create a typewriter over the given lines
    pub fn new(config: &MotionConfig, node: NodeId, lines: &[&str]) -> Self {
        Self {
            node,
            text: lines.join("\n"),
            cadence_ms: DEFAULT_TYPE_CADENCE_MS,
            started_ms: None,
            shown: 0,
            instant: config.reduced_motion,
        }
    }

    /// Override the per-character cadence
    pub fn with_cadence(mut self, cadence_ms: f64) -> Self {
        self.cadence_ms = cadence_ms;
        self
    }

    /// Begin typing at the given time
    pub fn start(&mut self, now_ms: f64) {
        self.started_ms = Some(now_ms);
        self.shown = 0;
    }

    /// Whether all text has been revealed
    pub fn is_done(&self) -> bool {
        self.started_ms.is_some() && self.shown >= self.text.chars().count()
    }

    /// Reveal characters up to the current time; returns whether the
    /// text changed
    pub fn update(&mut self, tree: &mut DomTree, now_ms: f64) -> bool {
        let Some(started) = self.started_ms else {
            return false;
        };
        let total = self.text.chars().count();
        let target = if self.instant {
            total
        } else {
            (((now_ms - started) / self.cadence_ms).max(0.0) as usize).min(total)
        };
        if target == self.shown {
            return false;
        }
        self.shown = target;
        let visible: String = self.text.chars().take(self.shown).collect();
        tree.set_text(self.node, &visible);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_on_cadence() {
        let mut tree = DomTree::new();
        let node = tree.create_element("pre");
        let mut typer = Typewriter::new(&MotionConfig::default(), node, &["$ deploy", "done"])
            .with_cadence(10.0);
        typer.start(0.0);

        typer.update(&mut tree, 30.0);
        assert_eq!(tree.text_content(node), "$ d");
        assert!(!typer.is_done());

        typer.update(&mut tree, 10_000.0);
        assert_eq!(tree.text_content(node), "$ deploy\ndone");
        assert!(typer.is_done());
    }

    #[test]
    fn test_reduced_motion_instant() {
        let mut tree = DomTree::new();
        let node = tree.create_element("pre");
        let config = MotionConfig { reduced_motion: true, ..Default::default() };
        let mut typer = Typewriter::new(&config, node, &["hello"]);
        typer.start(0.0);

        typer.update(&mut tree, 1.0);
        assert_eq!(tree.text_content(node), "hello");
        assert!(typer.is_done());
    }

    #[test]
    fn test_inert_before_start() {
        let mut tree = DomTree::new();
        let node = tree.create_element("pre");
        let mut typer = Typewriter::new(&MotionConfig::default(), node, &["hello"]);
        assert!(!typer.update(&mut tree, 100.0));
        assert_eq!(tree.text_content(node), "");
    }
}
