//! End-to-end page flow: load, render, animate, submit, tear down.

use lumen_app::{PageController, PageOptions, PageState, SubmitOptions, SECTION_HEIGHT_PX};
use lumen_content::StaticSource;
use lumen_motion::{MotionConfig, DEFAULT_COUNT_DURATION_MS};
use lumen_render::TOAST_DURATION_MS;

const CONTENT: &str = r#"{
    "stats": [{"number": "42", "suffix": "%", "label": "Growth"}],
    "features": [
        {"icon": "zap", "title": "Fast", "description": "Quick everywhere."},
        {"icon": "shield", "title": "Safe", "description": "Secure by default."}
    ],
    "events": [
        {"type": "launch", "title": "v1 ships", "description": "General availability.", "date": "2026-03-14"}
    ],
    "contact": [
        {"icon": "mail", "title": "Email", "value": "hi@example.com", "description": "Write us."}
    ],
    "footer": [
        {"title": "Product", "links": [{"text": "Docs", "url": "/docs"}]}
    ]
}"#;

fn options(failure_rate: f64) -> PageOptions {
    PageOptions {
        submit: SubmitOptions {
            failure_rate,
            seed: Some(1),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn ready_page(config: MotionConfig, failure_rate: f64) -> PageController {
    let mut page = PageController::new(config, options(failure_rate));
    page.start(&StaticSource::new(CONTENT), 0.0);
    page.tick(1500.0);
    assert_eq!(page.state(), PageState::Ready);
    page
}

fn fill_form(page: &mut PageController) {
    page.set_field("name", "Ada");
    page.set_field("email", "ada@example.com");
    page.set_field("message", "Hello from the tests.");
}

#[test]
fn stat_card_shows_zero_then_counts_to_target() {
    let mut page = ready_page(MotionConfig::default(), 0.1);

    let grid = page.document().element_by_id("stats-grid").unwrap();
    let tree = page.document().tree();
    assert_eq!(tree.children(grid).count(), 1);

    let label = tree.query_selector(grid, ".stat-label").unwrap();
    assert_eq!(tree.text_content(label), "Growth");

    let number = tree.query_selector(grid, ".stat-number").unwrap();
    assert_eq!(tree.text_content(number), "0%");

    // Scroll the stats section into view; the counter arms and runs
    page.on_scroll(700.0, 1600.0);
    page.tick(1700.0);

    page.tick(2700.0);
    let mid_text = page.document().tree().text_content(number);
    let mid: i64 = mid_text.trim_end_matches('%').parse().unwrap();
    assert!((0..=42).contains(&mid));

    page.tick(1700.0 + DEFAULT_COUNT_DURATION_MS);
    assert_eq!(page.document().tree().text_content(number), "42%");
}

#[test]
fn sections_render_from_content() {
    let page = ready_page(MotionConfig::default(), 0.1);
    let doc = page.document();
    let tree = doc.tree();

    let features = doc.element_by_id("features-grid").unwrap();
    assert_eq!(tree.children(features).count(), 2);

    let events = doc.element_by_id("events-container").unwrap();
    let day = tree.query_selector(events, ".event-day").unwrap();
    let month = tree.query_selector(events, ".event-month").unwrap();
    assert_eq!(tree.text_content(day), "14");
    assert_eq!(tree.text_content(month), "MAR");

    let footer = doc.element_by_id("footer-links").unwrap();
    let links = tree.query_selector_all(footer, ".footer-link");
    assert_eq!(links.len(), 1);
    assert_eq!(tree.attr(links[0], "href"), Some("/docs"));
}

#[test]
fn reveal_marks_cards_active_with_stagger() {
    let mut page = ready_page(MotionConfig::default(), 0.1);

    // Feature cards sit in the third section
    page.on_scroll(2.0 * SECTION_HEIGHT_PX - 100.0, 1600.0);
    page.tick(1700.0);

    let tree = page.document().tree();
    let grid = page.document().element_by_id("features-grid").unwrap();
    let cards: Vec<_> = tree.children(grid).collect();
    assert!(tree.has_class(cards[0], "active"));
    assert!(tree.has_class(cards[1], "active"));
    assert_eq!(tree.style(cards[1], "transition-delay"), Some("100ms"));

    // Scrolling back up never un-marks
    page.on_scroll(0.0, 1800.0);
    page.tick(1900.0);
    let tree = page.document().tree();
    assert!(tree.has_class(cards[0], "active"));
}

#[test]
fn teardown_disconnects_every_observer() {
    let mut page = ready_page(MotionConfig::default(), 0.1);
    assert!(page.observer_count() > 0);

    page.teardown();
    assert_eq!(page.observer_count(), 0);
    assert_eq!(page.state(), PageState::Uninitialized);
}

#[test]
fn reduced_motion_applies_end_states_immediately() {
    let config = MotionConfig {
        reduced_motion: true,
        ..Default::default()
    };
    let mut page = ready_page(config, 0.1);

    let number = {
        let grid = page.document().element_by_id("stats-grid").unwrap();
        page.document().tree().query_selector(grid, ".stat-number").unwrap()
    };

    // One tick after the counter arms, the literal target is shown
    page.on_scroll(700.0, 1600.0);
    page.tick(1700.0);
    page.tick(1716.0);
    assert_eq!(page.document().tree().text_content(number), "42%");

    // Smooth scroll jumps straight to the target
    page.on_nav_link_click("#contact", 1800.0);
    assert_eq!(page.scroll_position(), 4.0 * SECTION_HEIGHT_PX - 80.0);
}

#[test]
fn failed_load_blocks_with_modal() {
    let mut page = PageController::new(MotionConfig::default(), options(0.1));
    page.start(&StaticSource::new("{ this is not json"), 0.0);
    page.tick(1500.0);

    assert_eq!(page.state(), PageState::Failed);
    let modal = page.modal().expect("failure surfaces a modal");
    assert!(modal.reload_button.is_valid());
    // The loading indicator is hidden only on the success path
    assert!(page.document().element_by_id("loading-screen").is_some());
}

#[test]
fn successful_submission_resets_form_and_toasts() {
    let mut page = ready_page(MotionConfig::default(), 0.0);
    fill_form(&mut page);

    assert!(page.submit_form(2000.0));
    assert!(page.is_submission_pending());

    // Simulated round trip resolves; success resets the form
    page.tick(3500.0);
    assert!(!page.is_submission_pending());
    assert_eq!(page.active_toasts(), 1);
    assert_eq!(page.field_value("name"), Some(""));

    // The toast auto-dismisses after its lifetime
    page.tick(3500.0 + TOAST_DURATION_MS);
    assert_eq!(page.active_toasts(), 0);
}

#[test]
fn rejected_submission_preserves_fields_for_retry() {
    let mut page = ready_page(MotionConfig::default(), 1.0);
    fill_form(&mut page);

    assert!(page.submit_form(2000.0));
    page.tick(3500.0);

    assert_eq!(page.active_toasts(), 1);
    assert_eq!(page.field_value("name"), Some("Ada"));

    // Resubmission is possible immediately
    assert!(page.submit_form(3600.0));
}

#[test]
fn invalid_form_marks_groups_and_blocks() {
    let mut page = ready_page(MotionConfig::default(), 0.1);
    page.set_field("name", "Ada");
    page.set_field("email", "not-an-email");
    page.set_field("message", "Hi");

    assert!(!page.submit_form(2000.0));
    assert!(!page.is_submission_pending());

    let form = page.document().element_by_id("contact-form").unwrap();
    let tree = page.document().tree();
    let groups = tree.query_selector_all(form, ".form-group");
    assert!(groups.iter().any(|g| tree.has_class(*g, "error")));
}
