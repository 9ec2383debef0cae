//! Demo driver: runs a scripted page session against embedded content
//! and logs what the runtime does.

use anyhow::Result;
use lumen_app::{PageController, PageOptions, SubmitOptions};
use lumen_content::StaticSource;
use lumen_motion::MotionConfig;
use lumen_sched::VirtualClock;
use tracing_subscriber::EnvFilter;

const FRAME_MS: f64 = 16.0;
const SESSION_MS: f64 = 12_000.0;

const DEMO_CONTENT: &str = r#"{
    "stats": [
        {"number": "42", "suffix": "%", "label": "Faster deploys"},
        {"number": "1200", "suffix": "+", "label": "Teams on board"},
        {"number": "99", "suffix": "%", "label": "Uptime"},
        {"number": "8", "suffix": "x", "label": "Edge regions"}
    ],
    "features": [
        {"icon": "zap", "title": "Instant rollouts", "description": "Ship to every region in one push."},
        {"icon": "shield", "title": "Zero-config TLS", "description": "Certificates issued and rotated for you."},
        {"icon": "globe", "title": "Edge rendering", "description": "Pages render where your users are."}
    ],
    "events": [
        {"type": "launch", "title": "Lumen 1.0", "description": "General availability.", "date": "2026-03-14"},
        {"type": "meetup", "title": "Edge Summit", "description": "Community meetup and workshops.", "date": "2026-06-02"}
    ],
    "contact": [
        {"icon": "mail", "title": "Email", "value": "hello@lumen.dev", "description": "We answer within a day."},
        {"icon": "chat", "title": "Chat", "value": "lumen.dev/chat", "description": "Live during business hours."}
    ],
    "footer": [
        {"title": "Product", "links": [{"text": "Docs", "url": "/docs"}, {"text": "Pricing", "url": "/pricing"}]},
        {"title": "Company", "links": [{"text": "About", "url": "/about"}, {"text": "Careers", "url": "/careers"}]}
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = PageOptions {
        submit: SubmitOptions {
            seed: Some(42),
            ..Default::default()
        },
        ..Default::default()
    };
    let mut page = PageController::new(MotionConfig::default(), options);
    let source = StaticSource::new(DEMO_CONTENT);
    let mut clock = VirtualClock::new();

    page.start(&source, clock.now());

    // Scripted session: let the page load, jump to the stats section,
    // scroll further down, then fill in and submit the contact form.
    while clock.now() < SESSION_MS {
        clock.advance(FRAME_MS);
        let now = clock.now();
        let prev = now - FRAME_MS;
        let crossed = |at: f64| prev < at && now >= at;

        if crossed(2_000.0) {
            page.on_nav_link_click("#stats", now);
        }
        if crossed(4_000.0) {
            page.on_scroll(2_400.0, now);
        }
        if crossed(5_000.0) {
            page.on_pointer_move(640.0, 420.0);
            page.set_field("name", "Ada Lovelace");
            page.set_field("email", "ada@example.com");
            page.set_field("message", "Tell me more about Lumen.");
        }
        if crossed(5_600.0) {
            let accepted = page.submit_form(now);
            tracing::info!(accepted, "contact form submitted");
        }

        page.tick(now);
    }

    tracing::info!(
        state = ?page.state(),
        frames = page.frame_stats().frame_count(),
        observers = page.observer_count(),
        scroll = page.scroll_position(),
        "session complete"
    );
    page.teardown();
    Ok(())
}
