//! Easing Functions
//!
//! Progress curves for the animation tasks. Input is clamped to [0, 1]
//! and every curve maps the endpoints exactly.

/// Easing function variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic ease-out: `1 - (1-t)^2`
    QuadOut,
    /// Cubic ease-out: `1 - (1-t)^3`
    CubicOut,
    /// Cubic ease-in-out (smooth scroll)
    CubicInOut,
    /// Quartic ease-out: `1 - (1-t)^4` (counters)
    QuartOut,
}

impl Easing {
    /// Evaluate the curve at progress `t`
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::CubicOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt
            }
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let omt = -2.0 * t + 2.0;
                    1.0 - omt * omt * omt / 2.0
                }
            }
            Easing::QuartOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt * omt * omt
            }
        }
    }
}
