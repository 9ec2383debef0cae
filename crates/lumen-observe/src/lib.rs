//! Lumen Observe
//!
//! Viewport visibility testing, change-driven intersection observers
//! and the registry that lets a page tear every observer down at once.

mod intersection;
mod registry;
mod viewport;
mod wait;

pub use intersection::{IntersectionEntry, IntersectionObserver, ObserverConfig};
pub use registry::{ObserverHandle, ObserverId, ObserverRegistry};
pub use viewport::Viewport;
pub use wait::{ElementWaiter, WaitError, WaitPoll};
