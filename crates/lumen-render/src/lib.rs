//! Lumen Render
//!
//! Templated section rendering: a registry of slot-bearing skeletons
//! built once, cloned and bound per content record, plus the ad-hoc
//! overlay widgets (toast, modal, spinner).

mod dates;
mod render;
mod skeleton;
mod widgets;

pub use dates::{format_event_date, EventDate};
pub use render::Renderer;
pub use skeleton::{SectionKind, SkeletonRegistry};
pub use widgets::{
    build_error_modal, build_spinner, Modal, ToastKind, ToastManager, TOAST_DURATION_MS,
};
