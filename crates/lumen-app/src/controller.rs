//! Page Controller
//!
//! Lifecycle: uninitialized → loading → ready | failed. Loading runs
//! the content load and a minimum-duration timer in parallel and only
//! reaches ready once both are done, references are cached, sections
//! are rendered and behavior is bound. Teardown disconnects every
//! observer and clears the cached template state.

use lumen_content::{ContentDocument, ContentError, ContentSource};
use lumen_dom::{Document, NodeId};
use lumen_motion::{
    Animator, CompletionAction, CounterController, CursorFollow, MotionConfig,
    ParallaxController, RevealController, SmoothScroll, Typewriter,
};
use lumen_observe::{ObserverRegistry, Viewport};
use lumen_render::{build_error_modal, Modal, Renderer, ToastKind, ToastManager};
use lumen_sched::{Debouncer, FrameStats, TimerId, TimerQueue};
use tracing::{debug, info, warn};

use crate::{
    build_markup, layout_grid, ContactForm, ElementRefs, NavController, SimulatedTransport,
    SubmitOptions, NAVBAR_OFFSET_PX,
};

/// Classes whose hover swells the cursor proxy
const INTERACTIVE_CLASSES: [&str; 6] = [
    "nav-link",
    "cta-primary",
    "cta-secondary",
    "form-submit",
    "footer-link",
    "toast-close",
];

/// Lines typed into the hero terminal
const TERMINAL_LINES: [&str; 5] = [
    "$ lumen init",
    "created lumen.config.ts",
    "$ lumen deploy --prod",
    "build finished in 1.2s",
    "deployed to the edge",
];

const LOADING_FADE_MS: f64 = 500.0;
const TOAST_FADE_MS: f64 = 300.0;
const MODAL_SCALE_MS: f64 = 250.0;
const PULSE_MS: f64 = 400.0;
const RESIZE_DEBOUNCE_MS: f64 = 150.0;

/// Page lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageState {
    #[default]
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// Controller construction options
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// Minimum time the loading screen stays up
    pub min_loading_ms: f64,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub submit: SubmitOptions,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            min_loading_ms: 1500.0,
            viewport_width: 1280.0,
            viewport_height: 800.0,
            submit: SubmitOptions::default(),
        }
    }
}

/// Orchestrates the whole page session
pub struct PageController {
    config: MotionConfig,
    options: PageOptions,
    doc: Document,
    state: PageState,
    refs: ElementRefs,
    viewport: Viewport,

    registry: ObserverRegistry,
    timers: TimerQueue,
    frame_stats: FrameStats,
    resize_debounce: Debouncer<(f32, f32)>,

    animator: Animator,
    scroll: SmoothScroll,
    parallax: ParallaxController,
    nav: NavController,
    renderer: Renderer,
    toasts: ToastManager,
    transport: SimulatedTransport,

    reveal: Option<RevealController>,
    counters: Option<CounterController>,
    cursor: Option<CursorFollow>,
    typewriter: Option<Typewriter>,
    form: Option<ContactForm>,

    content: Option<ContentDocument>,
    load_error: Option<ContentError>,
    min_timer: Option<TimerId>,
    pending_submit: Option<TimerId>,
    modal: Option<Modal>,
}

impl PageController {
    /// Build the controller: markup, skeletons and the always-on
    /// managers. Content and behavior arrive via `start` + `tick`.
    pub fn new(config: MotionConfig, options: PageOptions) -> Self {
        let mut doc = Document::new();
        build_markup(&mut doc);
        let renderer = Renderer::new(doc.tree_mut());
        let toast_container = doc.query(".toast-container").unwrap_or(NodeId::NONE);

        Self {
            config,
            doc,
            state: PageState::Uninitialized,
            refs: ElementRefs::none(),
            viewport: Viewport::new(0.0, 0.0, options.viewport_width, options.viewport_height),
            registry: ObserverRegistry::new(),
            timers: TimerQueue::new(),
            frame_stats: FrameStats::new(),
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE_MS),
            animator: Animator::new(&config),
            scroll: SmoothScroll::new(&config),
            parallax: ParallaxController::new(&config),
            nav: NavController::new(),
            renderer,
            toasts: ToastManager::new(toast_container),
            transport: SimulatedTransport::new(&options.submit),
            reveal: None,
            counters: None,
            cursor: None,
            typewriter: None,
            form: None,
            content: None,
            load_error: None,
            min_timer: None,
            pending_submit: None,
            modal: None,
            options,
        }
    }

    // === Lifecycle ===

    /// Begin loading: starts the content load and the minimum-duration
    /// timer in parallel
    pub fn start(&mut self, source: &dyn ContentSource, now_ms: f64) {
        if self.state != PageState::Uninitialized {
            warn!(state = ?self.state, "start ignored: page already started");
            return;
        }
        info!("page loading");
        self.state = PageState::Loading;
        self.min_timer = Some(self.timers.schedule(now_ms + self.options.min_loading_ms));
        match source.load() {
            Ok(content) => self.content = Some(content),
            Err(err) => {
                warn!(%err, "content load failed");
                self.load_error = Some(err);
            }
        }
    }

    /// Advance one frame: timers, lifecycle, observers and animations
    pub fn tick(&mut self, now_ms: f64) {
        self.frame_stats.record(now_ms);
        let fired = self.timers.fire(now_ms);

        if let Some((width, height)) = self.resize_debounce.poll(now_ms) {
            self.viewport.width = width;
            self.viewport.height = height;
        }

        match self.state {
            PageState::Loading => {
                let min_done = self
                    .min_timer
                    .map(|t| !self.timers.is_pending(t))
                    .unwrap_or(true);
                if min_done {
                    if self.content.is_some() {
                        self.finish_init(now_ms);
                    } else {
                        self.fail(now_ms);
                    }
                }
            }
            PageState::Ready => self.run_frame(now_ms, &fired),
            PageState::Uninitialized | PageState::Failed => {}
        }
    }

    /// Render all sections, bind behavior and reveal the page
    fn finish_init(&mut self, now_ms: f64) {
        self.refs = ElementRefs::cache(&self.doc);
        let Some(content) = self.content.clone() else {
            return;
        };

        self.renderer
            .render_stats(self.doc.tree_mut(), &content.stats, self.refs.stats_grid);
        layout_grid(self.doc.tree_mut(), self.refs.stats_grid, 4, 220.0);

        self.renderer
            .render_features(self.doc.tree_mut(), &content.features, self.refs.features_grid);
        layout_grid(self.doc.tree_mut(), self.refs.features_grid, 3, 260.0);

        self.renderer
            .render_events(self.doc.tree_mut(), &content.events, self.refs.events_container);
        layout_grid(self.doc.tree_mut(), self.refs.events_container, 1, 200.0);

        self.renderer
            .render_contact(self.doc.tree_mut(), &content.contact, self.refs.contact_info);
        layout_grid(self.doc.tree_mut(), self.refs.contact_info, 2, 220.0);

        self.renderer
            .render_footer(self.doc.tree_mut(), &content.footer, self.refs.footer_links);

        let reveal = RevealController::new(&mut self.registry, &self.config);
        reveal.discover(self.doc.tree(), self.doc.body());
        self.reveal = Some(reveal);

        let mut counters = CounterController::new(&mut self.registry, &self.config);
        counters.discover(self.doc.tree(), self.doc.body());
        self.counters = Some(counters);

        self.cursor = Some(CursorFollow::new(
            &self.config,
            self.refs.cursor,
            &INTERACTIVE_CLASSES,
        ));

        self.parallax.register_children(
            self.doc.tree(),
            self.refs.floating_elements,
            &[0.15, 0.3, 0.45],
        );
        self.parallax.register(self.refs.hero_grid, 0.1);

        let mut typewriter = Typewriter::new(&self.config, self.refs.terminal_output, &TERMINAL_LINES);
        typewriter.start(now_ms);
        self.typewriter = Some(typewriter);

        self.form = Some(ContactForm::from_markup(self.doc.tree(), self.refs.contact_form));

        // Loading indicator goes away on the success path only
        self.animator.fade_out(
            self.refs.loading_screen,
            now_ms,
            LOADING_FADE_MS,
            CompletionAction::RemoveNode,
        );

        self.state = PageState::Ready;
        info!(
            stats = content.stats.len(),
            features = content.features.len(),
            events = content.events.len(),
            "page ready"
        );
    }

    /// Fatal initialization failure: blocking modal with a reload
    /// action; the loading indicator stays as it was
    fn fail(&mut self, now_ms: f64) {
        let detail = self
            .load_error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "content unavailable".to_string());
        let body = self.doc.body();
        let modal = build_error_modal(
            self.doc.tree_mut(),
            body,
            "Something went wrong",
            &format!("We could not load the page content ({detail})."),
        );
        self.animator.scale_in(modal.root, now_ms, MODAL_SCALE_MS);
        self.modal = Some(modal);
        self.state = PageState::Failed;
        warn!("page failed to initialize");
    }

    /// Reload action from the failure modal: drop the modal and run the
    /// loading sequence again
    pub fn reload(&mut self, source: &dyn ContentSource, now_ms: f64) {
        if self.state != PageState::Failed {
            return;
        }
        if let Some(modal) = self.modal.take() {
            self.doc.tree_mut().remove(modal.root);
        }
        self.load_error = None;
        self.min_timer = None;
        self.state = PageState::Uninitialized;
        self.start(source, now_ms);
    }

    /// Explicit teardown: disconnect all observers, clear template and
    /// cached element state, return to uninitialized
    pub fn teardown(&mut self) {
        info!("page teardown");
        self.registry.cleanup();
        self.animator.cancel_all();
        self.renderer.clear();
        self.reveal = None;
        self.counters = None;
        self.cursor = None;
        self.typewriter = None;
        self.form = None;
        self.content = None;
        self.load_error = None;
        self.modal = None;
        self.min_timer = None;
        self.pending_submit = None;
        self.refs = ElementRefs::none();
        self.state = PageState::Uninitialized;
    }

    // === Per-frame work while ready ===

    fn run_frame(&mut self, now_ms: f64, fired: &[TimerId]) {
        if self.scroll.update(now_ms) {
            let y = self.scroll.position();
            self.viewport.y = y;
            self.parallax.apply(self.doc.tree_mut(), y);
        }

        if let Some(reveal) = &self.reveal {
            reveal.update(self.doc.tree_mut(), self.viewport);
        }
        if let Some(counters) = self.counters.as_mut() {
            counters.update(self.doc.tree_mut(), self.viewport, &mut self.animator, now_ms);
        }
        let _ = self.animator.update(self.doc.tree_mut(), now_ms);
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.update(self.doc.tree_mut());
        }
        if let Some(typewriter) = self.typewriter.as_mut() {
            typewriter.update(self.doc.tree_mut(), now_ms);
        }

        let expired = self.toasts.collect_expired(fired);
        for toast in expired {
            self.animator
                .fade_out(toast, now_ms, TOAST_FADE_MS, CompletionAction::RemoveNode);
        }

        if let Some(timer) = self.pending_submit {
            if fired.contains(&timer) {
                self.pending_submit = None;
                self.resolve_submission(now_ms);
            }
        }
    }

    // === Input surface ===

    /// Direct scroll input
    pub fn on_scroll(&mut self, y: f32, now_ms: f64) {
        if self.state != PageState::Ready {
            return;
        }
        self.scroll.set_position(y);
        let y = self.scroll.position();
        self.viewport.y = y;
        self.nav
            .on_scroll(self.doc.tree_mut(), self.refs.navbar, y, now_ms);
        self.parallax.apply(self.doc.tree_mut(), y);
    }

    /// Viewport resize, debounced to the trailing edge
    pub fn on_resize(&mut self, width: f32, height: f32, now_ms: f64) {
        self.resize_debounce.call((width, height), now_ms);
    }

    /// Raw pointer sample
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.on_pointer_move(x, y);
        }
    }

    /// Pointer entered an element
    pub fn on_pointer_over(&mut self, target: NodeId) {
        if let Some(cursor) = self.cursor.as_mut() {
            cursor.on_pointer_over(self.doc.tree_mut(), target);
        }
    }

    /// Mobile menu toggle button
    pub fn toggle_menu(&mut self) {
        let menu = self.refs.nav_menu;
        let toggle = self.refs.mobile_menu_toggle;
        self.nav.toggle_menu(self.doc.tree_mut(), menu, toggle);
    }

    /// Nav-link activation: smooth scroll to the section, close the menu
    pub fn on_nav_link_click(&mut self, href: &str, now_ms: f64) {
        if self.state != PageState::Ready {
            return;
        }
        let id = href.trim_start_matches('#');
        let Some(section) = self.doc.element_by_id(id) else {
            debug!(href, "nav target missing");
            return;
        };
        let Some(bounds) = self.doc.tree().bounds(section) else {
            return;
        };
        self.scroll.scroll_to(bounds.y, NAVBAR_OFFSET_PX, now_ms);
        if self.nav.is_menu_open() {
            let menu = self.refs.nav_menu;
            let toggle = self.refs.mobile_menu_toggle;
            self.nav.close_menu(self.doc.tree_mut(), menu, toggle);
        }
    }

    /// Update a contact-form field
    pub fn set_field(&mut self, name: &str, value: &str) {
        if let Some(form) = self.form.as_mut() {
            form.set_value(name, value);
        }
    }

    /// Read a contact-form field
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.form.as_ref().and_then(|f| f.value(name))
    }

    /// Submit the contact form. Returns whether the submission was
    /// accepted for (simulated) transport; validation failures mark
    /// the offending groups and block it.
    pub fn submit_form(&mut self, now_ms: f64) -> bool {
        if self.state != PageState::Ready {
            return false;
        }
        let Some(form) = self.form.as_ref() else {
            return false;
        };
        if !form.validate(self.doc.tree_mut()) {
            debug!("submission blocked by validation");
            return false;
        }
        if self.pending_submit.is_some() {
            debug!("submission already in flight");
            return false;
        }
        self.pending_submit = Some(
            self.timers
                .schedule(now_ms + self.options.submit.delay_ms),
        );
        true
    }

    fn resolve_submission(&mut self, now_ms: f64) {
        match self.transport.roll() {
            Ok(()) => {
                info!("contact form submitted");
                if let Some(form) = self.form.as_mut() {
                    form.reset(self.doc.tree_mut());
                }
                let button = self
                    .doc
                    .tree()
                    .query_selector(self.refs.contact_form, ".form-submit")
                    .unwrap_or(NodeId::NONE);
                if button.is_valid() {
                    self.animator.pulse(button, now_ms, PULSE_MS);
                }
                self.show_toast(ToastKind::Success, "Message sent successfully!", now_ms);
            }
            Err(err) => {
                warn!(%err, "contact form submission rejected");
                // Field state is preserved for resubmission
                self.show_toast(
                    ToastKind::Error,
                    "Sending failed, please try again.",
                    now_ms,
                );
            }
        }
    }

    fn show_toast(&mut self, kind: ToastKind, message: &str, now_ms: f64) {
        let toast = self
            .toasts
            .show(self.doc.tree_mut(), &mut self.timers, kind, message, now_ms);
        if toast.is_valid() {
            self.animator.fade_in(toast, now_ms, TOAST_FADE_MS);
            self.animator.slide_up(toast, 16.0, now_ms, TOAST_FADE_MS);
        }
    }

    // === Accessors ===

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn refs(&self) -> &ElementRefs {
        &self.refs
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll.position()
    }

    pub fn observer_count(&self) -> usize {
        self.registry.len()
    }

    pub fn active_toasts(&self) -> usize {
        self.toasts.active_count()
    }

    pub fn is_submission_pending(&self) -> bool {
        self.pending_submit.is_some()
    }

    pub fn modal(&self) -> Option<Modal> {
        self.modal
    }

    pub fn frame_stats(&self) -> &FrameStats {
        &self.frame_stats
    }
}
