//! Navigation State
//!
//! Navbar scroll styling (throttled) and the mobile menu toggle with
//! its aria-expanded bookkeeping.

use lumen_dom::{DomTree, NodeId};
use lumen_sched::Throttler;

/// Scroll depth past which the navbar takes its scrolled styling
pub const NAVBAR_SCROLL_THRESHOLD: f32 = 50.0;
/// Navbar height compensated when smooth-scrolling to a section
pub const NAVBAR_OFFSET_PX: f32 = 80.0;

const SCROLL_THROTTLE_MS: f64 = 100.0;

/// Navbar and mobile-menu state
#[derive(Debug)]
pub struct NavController {
    menu_open: bool,
    scroll_throttle: Throttler,
}

impl Default for NavController {
    fn default() -> Self {
        Self::new()
    }
}

impl NavController {
    pub fn new() -> Self {
        Self {
            menu_open: false,
            scroll_throttle: Throttler::new(SCROLL_THROTTLE_MS),
        }
    }

    /// Whether the mobile menu is open
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Throttled scroll handler: toggles the navbar's scrolled class.
    /// Returns whether the sample was admitted.
    pub fn on_scroll(&mut self, tree: &mut DomTree, navbar: NodeId, y: f32, now_ms: f64) -> bool {
        if !self.scroll_throttle.allow(now_ms) {
            return false;
        }
        if y > NAVBAR_SCROLL_THRESHOLD {
            tree.add_class(navbar, "scrolled");
        } else {
            tree.remove_class(navbar, "scrolled");
        }
        true
    }

    /// Toggle the mobile menu, returning the new open state
    pub fn toggle_menu(&mut self, tree: &mut DomTree, menu: NodeId, toggle: NodeId) -> bool {
        if self.menu_open {
            self.close_menu(tree, menu, toggle);
        } else {
            self.open_menu(tree, menu, toggle);
        }
        self.menu_open
    }

    /// Open the mobile menu
    pub fn open_menu(&mut self, tree: &mut DomTree, menu: NodeId, toggle: NodeId) {
        self.menu_open = true;
        tree.add_class(menu, "active");
        tree.add_class(toggle, "menu-open");
        tree.set_attr(toggle, "aria-expanded", "true");
    }

    /// Close the mobile menu (also run after nav-link activation)
    pub fn close_menu(&mut self, tree: &mut DomTree, menu: NodeId, toggle: NodeId) {
        self.menu_open = false;
        tree.remove_class(menu, "active");
        tree.remove_class(toggle, "menu-open");
        tree.set_attr(toggle, "aria-expanded", "false");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (DomTree, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let navbar = tree.create_element("nav");
        let menu = tree.create_element("ul");
        let toggle = tree.create_element("button");
        (tree, navbar, menu, toggle)
    }

    #[test]
    fn test_scrolled_class_threshold() {
        let (mut tree, navbar, _, _) = setup();
        let mut nav = NavController::new();

        assert!(nav.on_scroll(&mut tree, navbar, 120.0, 0.0));
        assert!(tree.has_class(navbar, "scrolled"));

        // Inside the throttle window the sample is dropped
        assert!(!nav.on_scroll(&mut tree, navbar, 0.0, 50.0));
        assert!(tree.has_class(navbar, "scrolled"));

        assert!(nav.on_scroll(&mut tree, navbar, 0.0, 200.0));
        assert!(!tree.has_class(navbar, "scrolled"));
    }

    #[test]
    fn test_menu_toggle() {
        let (mut tree, _, menu, toggle) = setup();
        let mut nav = NavController::new();

        assert!(nav.toggle_menu(&mut tree, menu, toggle));
        assert!(tree.has_class(menu, "active"));
        assert_eq!(tree.attr(toggle, "aria-expanded"), Some("true"));

        assert!(!nav.toggle_menu(&mut tree, menu, toggle));
        assert!(!tree.has_class(menu, "active"));
        assert_eq!(tree.attr(toggle, "aria-expanded"), Some("false"));
    }

    #[test]
    fn test_missing_elements_no_panic() {
        let mut tree = DomTree::new();
        let mut nav = NavController::new();
        nav.on_scroll(&mut tree, NodeId::NONE, 100.0, 0.0);
        nav.toggle_menu(&mut tree, NodeId::NONE, NodeId::NONE);
        assert!(nav.is_menu_open());
    }
}
