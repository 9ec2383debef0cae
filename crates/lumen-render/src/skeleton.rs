//! Template Skeletons
//!
//! One named, detached, slot-bearing subtree per section kind, created
//! at registry construction and only ever cloned. Slots are labeled by
//! class name and filled at render time.

use std::collections::HashMap;

use lumen_dom::{DomTree, ElementBuilder, NodeId};

/// Content section kinds with a registered skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Stats,
    Features,
    Events,
    Contact,
    Footer,
}

impl SectionKind {
    /// All kinds, in page order
    pub const ALL: [SectionKind; 5] = [
        SectionKind::Stats,
        SectionKind::Features,
        SectionKind::Events,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    /// Registry name of the skeleton
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Stats => "stat-card",
            SectionKind::Features => "feature-card",
            SectionKind::Events => "event-card",
            SectionKind::Contact => "contact-card",
            SectionKind::Footer => "footer-section",
        }
    }
}

/// Registry of reusable skeletons, keyed by section kind
#[derive(Debug, Default)]
pub struct SkeletonRegistry {
    skeletons: HashMap<SectionKind, NodeId>,
}

impl SkeletonRegistry {
    /// Build every skeleton once; the subtrees stay detached for the
    /// page session
    pub fn build(tree: &mut DomTree) -> Self {
        let mut skeletons = HashMap::new();
        for kind in SectionKind::ALL {
            skeletons.insert(kind, build_skeleton(tree, kind));
        }
        Self { skeletons }
    }

    /// Look up a skeleton by kind
    pub fn get(&self, kind: SectionKind) -> Option<NodeId> {
        self.skeletons.get(&kind).copied()
    }

    /// Number of registered skeletons
    pub fn len(&self) -> usize {
        self.skeletons.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.skeletons.is_empty()
    }

    /// Drop every skeleton (full teardown)
    pub fn clear(&mut self) {
        self.skeletons.clear();
    }
}

fn build_skeleton(tree: &mut DomTree, kind: SectionKind) -> NodeId {
    match kind {
        SectionKind::Stats => ElementBuilder::new("div")
            .classes(["stat-card", "reveal"])
            .child(ElementBuilder::new("span").class("stat-number"))
            .child(ElementBuilder::new("div").class("stat-label"))
            .build(tree),
        SectionKind::Features => ElementBuilder::new("div")
            .classes(["feature-card", "reveal"])
            .child(ElementBuilder::new("div").class("feature-icon"))
            .child(ElementBuilder::new("h3").class("feature-title"))
            .child(ElementBuilder::new("p").class("feature-description"))
            .build(tree),
        SectionKind::Events => ElementBuilder::new("article")
            .classes(["event-card", "reveal"])
            .child(
                ElementBuilder::new("div")
                    .class("event-date")
                    .child(ElementBuilder::new("span").class("event-day"))
                    .child(ElementBuilder::new("span").class("event-month")),
            )
            .child(
                ElementBuilder::new("div")
                    .class("event-body")
                    .child(ElementBuilder::new("span").class("event-type"))
                    .child(ElementBuilder::new("h3").class("event-title"))
                    .child(ElementBuilder::new("p").class("event-description")),
            )
            .build(tree),
        SectionKind::Contact => ElementBuilder::new("div")
            .classes(["contact-card", "reveal"])
            .child(ElementBuilder::new("div").class("contact-icon"))
            .child(ElementBuilder::new("h3").class("contact-title"))
            .child(ElementBuilder::new("div").class("contact-value"))
            .child(ElementBuilder::new("p").class("contact-description"))
            .build(tree),
        SectionKind::Footer => ElementBuilder::new("div")
            .class("footer-section")
            .child(ElementBuilder::new("h4").class("footer-title"))
            .child(ElementBuilder::new("ul").class("footer-list"))
            .build(tree),
    }
}
