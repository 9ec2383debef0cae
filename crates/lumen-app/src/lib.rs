//! Lumen App
//!
//! The page controller: orchestrates startup (load content → cache
//! element references → render sections → bind behavior), owns the
//! navigation/menu/form state, drives every motion controller from the
//! frame tick, and tears everything down on unload.

mod controller;
mod form;
mod markup;
mod nav;
mod refs;

pub use controller::{PageController, PageOptions, PageState};
pub use form::{ContactForm, FieldKind, SimulatedTransport, SubmitError, SubmitOptions};
pub use markup::{build_markup, layout_grid, SECTION_HEIGHT_PX};
pub use nav::{NavController, NAVBAR_OFFSET_PX, NAVBAR_SCROLL_THRESHOLD};
pub use refs::ElementRefs;
