//! Section Rendering
//!
//! Clone-and-bind: for each record, clone the section skeleton, fill
//! the labeled slots, stamp the stagger index and append. Rendering
//! into a missing container is a silent no-op; rendering twice appends
//! twice (callers clear the container first for a re-render).

use lumen_content::{ContactItem, EventItem, Feature, FooterSection, Stat};
use lumen_dom::{DomTree, ElementBuilder, NodeId};
use tracing::debug;

use crate::{format_event_date, SectionKind, SkeletonRegistry};

/// One slot assignment: slot class → text
type SlotFill = (&'static str, String);

/// Section renderer over the skeleton registry
#[derive(Debug)]
pub struct Renderer {
    skeletons: SkeletonRegistry,
}

impl Renderer {
    /// Build the renderer and its skeletons
    pub fn new(tree: &mut DomTree) -> Self {
        Self {
            skeletons: SkeletonRegistry::build(tree),
        }
    }

    /// Drop all skeletons (full teardown)
    pub fn clear(&mut self) {
        self.skeletons.clear();
    }

    /// Detach every child of a container
    pub fn clear_container(&self, tree: &mut DomTree, container: NodeId) {
        tree.clear_children(container);
    }

    /// Render stat cards. Number slots are seeded with the zero value
    /// plus suffix; the true value arrives via the visibility-triggered
    /// counter, which reads the stamped target and suffix.
    pub fn render_stats(&self, tree: &mut DomTree, records: &[Stat], container: NodeId) -> usize {
        let fills = records
            .iter()
            .map(|stat| vec![("stat-label", stat.label.clone())])
            .collect();
        let instances = self.render_cards(tree, SectionKind::Stats, fills, container);

        for (i, instance) in instances.iter().copied().enumerate() {
            let Some(stat) = records.get(i) else { break };
            let Some(number) = tree.query_selector(instance, ".stat-number") else {
                continue;
            };
            match stat.number.trim().parse::<i64>() {
                Ok(target) => {
                    tree.set_text(number, &format!("0{}", stat.suffix));
                    tree.set_data(number, "target", &target.to_string());
                    tree.set_data(number, "suffix", &stat.suffix);
                }
                // Non-numeric stats render as-is and never animate
                Err(_) => tree.set_text(number, &format!("{}{}", stat.number, stat.suffix)),
            }
        }
        instances.len()
    }

    /// Render feature cards
    pub fn render_features(
        &self,
        tree: &mut DomTree,
        records: &[Feature],
        container: NodeId,
    ) -> usize {
        let fills = records
            .iter()
            .map(|f| {
                vec![
                    ("feature-icon", f.icon.clone()),
                    ("feature-title", f.title.clone()),
                    ("feature-description", f.description.clone()),
                ]
            })
            .collect();
        self.render_cards(tree, SectionKind::Features, fills, container).len()
    }

    /// Render event cards; the date is split into day/month at render time
    pub fn render_events(
        &self,
        tree: &mut DomTree,
        records: &[EventItem],
        container: NodeId,
    ) -> usize {
        let fills = records
            .iter()
            .map(|e| {
                let date = format_event_date(&e.date);
                vec![
                    ("event-day", date.day),
                    ("event-month", date.month),
                    ("event-type", e.kind.clone()),
                    ("event-title", e.title.clone()),
                    ("event-description", e.description.clone()),
                ]
            })
            .collect();
        self.render_cards(tree, SectionKind::Events, fills, container).len()
    }

    /// Render contact cards
    pub fn render_contact(
        &self,
        tree: &mut DomTree,
        records: &[ContactItem],
        container: NodeId,
    ) -> usize {
        let fills = records
            .iter()
            .map(|c| {
                vec![
                    ("contact-icon", c.icon.clone()),
                    ("contact-title", c.title.clone()),
                    ("contact-value", c.value.clone()),
                    ("contact-description", c.description.clone()),
                ]
            })
            .collect();
        self.render_cards(tree, SectionKind::Contact, fills, container).len()
    }

    /// Render footer columns with their link lists
    pub fn render_footer(
        &self,
        tree: &mut DomTree,
        records: &[FooterSection],
        container: NodeId,
    ) -> usize {
        let fills = records
            .iter()
            .map(|s| vec![("footer-title", s.title.clone())])
            .collect();
        let instances = self.render_cards(tree, SectionKind::Footer, fills, container);

        for (i, instance) in instances.iter().copied().enumerate() {
            let Some(section) = records.get(i) else { break };
            let Some(list) = tree.query_selector(instance, ".footer-list") else {
                continue;
            };
            for link in &section.links {
                let item = ElementBuilder::new("li")
                    .child(
                        ElementBuilder::new("a")
                            .class("footer-link")
                            .attr("href", &link.url)
                            .text(&link.text),
                    )
                    .build(tree);
                let _ = tree.append_child(list, item);
            }
        }
        instances.len()
    }

    /// Shared clone-and-bind loop. Returns the rendered instances, in
    /// input order; empty (with a debug note) when the container is
    /// missing, the records are empty, or the skeleton is gone.
    fn render_cards(
        &self,
        tree: &mut DomTree,
        kind: SectionKind,
        fills: Vec<Vec<SlotFill>>,
        container: NodeId,
    ) -> Vec<NodeId> {
        if tree.element(container).is_none() {
            debug!(kind = kind.name(), "render skipped: container missing");
            return Vec::new();
        }
        if fills.is_empty() {
            return Vec::new();
        }
        let Some(skeleton) = self.skeletons.get(kind) else {
            debug!(kind = kind.name(), "render skipped: no skeleton registered");
            return Vec::new();
        };

        let mut rendered = Vec::new();
        for (index, slots) in fills.into_iter().enumerate() {
            let Ok(instance) = tree.clone_subtree(skeleton) else {
                continue;
            };
            for (slot, text) in slots {
                if let Some(node) = tree.query_selector(instance, &format!(".{slot}")) {
                    tree.set_text(node, &text);
                }
            }
            tree.set_data(instance, "index", &index.to_string());
            if tree.append_child(container, instance).is_ok() {
                rendered.push(instance);
            }
        }
        rendered
    }
}
