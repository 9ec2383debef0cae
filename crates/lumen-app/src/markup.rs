//! Page Markup
//!
//! The static structure the controller depends on, built
//! programmatically, with host-assigned bounds standing in for layout.
//! Sections stack vertically at a fixed height.

use lumen_dom::{Document, DomTree, ElementBuilder, NodeId, Rect};

/// Height assigned to every page section
pub const SECTION_HEIGHT_PX: f32 = 800.0;
/// Page width assigned to section bounds
pub const PAGE_WIDTH_PX: f32 = 1280.0;

/// Build the page structure into the document body
pub fn build_markup(doc: &mut Document) {
    let body = doc.body();
    let tree = doc.tree_mut();

    let loading = ElementBuilder::new("div")
        .id("loading-screen")
        .child(ElementBuilder::new("div").class("loading-logo").text("lumen"))
        .build(tree);
    let spinner = lumen_render::build_spinner(tree);
    let _ = tree.append_child(loading, spinner);

    let cursor = ElementBuilder::new("div").id("cursor").build(tree);

    let navbar = ElementBuilder::new("nav")
        .id("navbar")
        .child(ElementBuilder::new("a").class("nav-logo").text("lumen"))
        .child(
            ElementBuilder::new("button")
                .id("mobile-menu-toggle")
                .attr("aria-expanded", "false"),
        )
        .child(
            ElementBuilder::new("ul")
                .id("nav-menu")
                .child(nav_link("Features", "#features"))
                .child(nav_link("Stats", "#stats"))
                .child(nav_link("Events", "#events"))
                .child(nav_link("Contact", "#contact")),
        )
        .build(tree);

    let hero = ElementBuilder::new("header")
        .id("hero")
        .child(ElementBuilder::new("div").id("hero-grid"))
        .child(
            ElementBuilder::new("div")
                .id("floating-elements")
                .child(ElementBuilder::new("span").class("floating-shape"))
                .child(ElementBuilder::new("span").class("floating-shape"))
                .child(ElementBuilder::new("span").class("floating-shape")),
        )
        .child(ElementBuilder::new("pre").id("terminal-output"))
        .child(ElementBuilder::new("a").class("cta-primary").text("Get started"))
        .child(ElementBuilder::new("a").class("cta-secondary").text("See it live"))
        .build(tree);

    let stats = section(tree, "stats", "stats-grid");
    let features = section(tree, "features", "features-grid");
    let events = section(tree, "events", "events-container");

    let contact = ElementBuilder::new("section")
        .id("contact")
        .child(ElementBuilder::new("div").id("contact-info"))
        .child(contact_form())
        .build(tree);

    let footer = ElementBuilder::new("footer")
        .child(ElementBuilder::new("div").id("footer-links"))
        .build(tree);

    let toast_container = ElementBuilder::new("div").class("toast-container").build(tree);

    let ordered = [
        loading, cursor, navbar, hero, stats, features, events, contact, footer, toast_container,
    ];
    for node in ordered {
        let _ = tree.append_child(body, node);
    }

    // Sections stack vertically; everything else floats above the flow
    for (i, node) in [hero, stats, features, events, contact, footer].into_iter().enumerate() {
        let y = i as f32 * SECTION_HEIGHT_PX;
        tree.set_bounds(node, Rect::new(0.0, y, PAGE_WIDTH_PX, SECTION_HEIGHT_PX));
    }
}

fn nav_link(label: &str, href: &str) -> ElementBuilder {
    ElementBuilder::new("li").child(
        ElementBuilder::new("a")
            .class("nav-link")
            .attr("href", href)
            .text(label),
    )
}

fn section(tree: &mut DomTree, id: &str, grid_id: &str) -> NodeId {
    ElementBuilder::new("section")
        .id(id)
        .child(ElementBuilder::new("div").id(grid_id))
        .build(tree)
}

fn contact_form() -> ElementBuilder {
    ElementBuilder::new("form")
        .id("contact-form")
        .child(form_group("name", "text", true))
        .child(form_group("email", "email", true))
        .child(form_group("message", "text", true))
        .child(ElementBuilder::new("button").classes(["form-submit", "cta-primary"]).text("Send"))
}

fn form_group(name: &str, input_type: &str, required: bool) -> ElementBuilder {
    let mut input = ElementBuilder::new("input")
        .class("form-input")
        .attr("name", name)
        .attr("type", input_type);
    if required {
        input = input.attr("required", "");
    }
    ElementBuilder::new("div").class("form-group").child(input)
}

/// Lay a container's children out as a grid inside the container's
/// bounds, so the observers have rectangles to test. Containers without
/// bounds inherit their section's placement via their parent.
pub fn layout_grid(tree: &mut DomTree, container: NodeId, columns: usize, card_height: f32) {
    let Some(origin) = container_origin(tree, container) else {
        return;
    };
    let columns = columns.max(1);
    let card_width = PAGE_WIDTH_PX / columns as f32;
    let children: Vec<NodeId> = tree.children(container).collect();
    for (i, child) in children.into_iter().enumerate() {
        let col = (i % columns) as f32;
        let row = (i / columns) as f32;
        tree.set_bounds(
            child,
            Rect::new(
                origin.x + col * card_width,
                origin.y + row * card_height,
                card_width,
                card_height,
            ),
        );
    }
}

fn container_origin(tree: &DomTree, container: NodeId) -> Option<Rect> {
    if let Some(bounds) = tree.bounds(container) {
        return Some(bounds);
    }
    let parent = tree.get(container)?.parent;
    tree.bounds(parent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_section_bounds_stack() {
        let mut doc = Document::new();
        build_markup(&mut doc);

        let stats = doc.element_by_id("stats").unwrap();
        let bounds = doc.tree().bounds(stats).unwrap();
        assert_eq!(bounds.y, SECTION_HEIGHT_PX);

        let contact = doc.element_by_id("contact").unwrap();
        assert_eq!(doc.tree().bounds(contact).unwrap().y, 4.0 * SECTION_HEIGHT_PX);
    }

    #[test]
    fn test_markup_consumed_classes_present() {
        let mut doc = Document::new();
        build_markup(&mut doc);

        assert_eq!(doc.query_all(".nav-link").len(), 4);
        assert_eq!(doc.query_all(".form-input").len(), 3);
        assert!(doc.query(".cta-primary").is_some());
        assert!(doc.query(".toast-container").is_some());
    }

    #[test]
    fn test_layout_grid_inherits_section_bounds() {
        let mut doc = Document::new();
        build_markup(&mut doc);
        let grid = doc.element_by_id("stats-grid").unwrap();

        let tree = doc.tree_mut();
        let a = tree.create_element("div");
        let b = tree.create_element("div");
        tree.append_child(grid, a).unwrap();
        tree.append_child(grid, b).unwrap();

        layout_grid(tree, grid, 2, 200.0);
        let rect_a = tree.bounds(a).unwrap();
        let rect_b = tree.bounds(b).unwrap();
        assert_eq!(rect_a.y, SECTION_HEIGHT_PX);
        assert_eq!(rect_b.x, PAGE_WIDTH_PX / 2.0);
    }
}
