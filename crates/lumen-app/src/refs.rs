//! Element Reference Cache
//!
//! The ids the controller depends on, resolved once after load. A
//! missing element stays `NodeId::NONE` and every consumer checks
//! before use, so absent markup silently skips its feature.

use lumen_dom::{Document, NodeId};

/// Cached references to the page's named elements
#[derive(Debug, Clone, Copy)]
pub struct ElementRefs {
    pub loading_screen: NodeId,
    pub navbar: NodeId,
    pub nav_menu: NodeId,
    pub mobile_menu_toggle: NodeId,
    pub stats_grid: NodeId,
    pub features_grid: NodeId,
    pub events_container: NodeId,
    pub contact_info: NodeId,
    pub footer_links: NodeId,
    pub contact_form: NodeId,
    pub cursor: NodeId,
    pub floating_elements: NodeId,
    pub hero_grid: NodeId,
    pub terminal_output: NodeId,
}

impl Default for ElementRefs {
    fn default() -> Self {
        Self::none()
    }
}

impl ElementRefs {
    /// All references absent
    pub fn none() -> Self {
        Self {
            loading_screen: NodeId::NONE,
            navbar: NodeId::NONE,
            nav_menu: NodeId::NONE,
            mobile_menu_toggle: NodeId::NONE,
            stats_grid: NodeId::NONE,
            features_grid: NodeId::NONE,
            events_container: NodeId::NONE,
            contact_info: NodeId::NONE,
            footer_links: NodeId::NONE,
            contact_form: NodeId::NONE,
            cursor: NodeId::NONE,
            floating_elements: NodeId::NONE,
            hero_grid: NodeId::NONE,
            terminal_output: NodeId::NONE,
        }
    }

    /// Resolve every reference from the document
    pub fn cache(doc: &Document) -> Self {
        let lookup = |id: &str| doc.element_by_id(id).unwrap_or(NodeId::NONE);
        Self {
            loading_screen: lookup("loading-screen"),
            navbar: lookup("navbar"),
            nav_menu: lookup("nav-menu"),
            mobile_menu_toggle: lookup("mobile-menu-toggle"),
            stats_grid: lookup("stats-grid"),
            features_grid: lookup("features-grid"),
            events_container: lookup("events-container"),
            contact_info: lookup("contact-info"),
            footer_links: lookup("footer-links"),
            contact_form: lookup("contact-form"),
            cursor: lookup("cursor"),
            floating_elements: lookup("floating-elements"),
            hero_grid: lookup("hero-grid"),
            terminal_output: lookup("terminal-output"),
        }
    }
}
