//! Motion Configuration
//!
//! Environment signals captured once at startup. The preference is
//! assumed static for the page session; nothing re-polls it per frame.

/// Pointer capability of the environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerCapability {
    /// A fine pointer (mouse, trackpad) is present
    #[default]
    Fine,
    /// Touch-only environment
    CoarseOnly,
}

/// Motion environment configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct MotionConfig {
    /// Reduced-motion preference: transitions jump straight to their
    /// end state with zero intermediate frames
    pub reduced_motion: bool,
    /// Pointer capability; the cursor proxy only runs with a fine pointer
    pub pointer: PointerCapability,
}

impl MotionConfig {
    /// Whether a fine pointer is available
    pub fn has_fine_pointer(&self) -> bool {
        self.pointer == PointerCapability::Fine
    }
}
