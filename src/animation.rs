//! Animation system with bezier easing curves
//!
//! Animations run on the page's virtual clock: they hold a start time in
//! milliseconds and are sampled with the current time instead of reading a
//! wall clock.

/// Bezier easing function type
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    Linear,
    /// Ease in (slow start)
    EaseIn,
    /// Ease out (slow end)
    #[default]
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Custom cubic bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Standard easing presets (CSS-like)
    pub const EASE: Easing = Easing::CubicBezier(0.25, 0.1, 0.25, 1.0);
    pub const EASE_IN: Easing = Easing::CubicBezier(0.42, 0.0, 1.0, 1.0);
    pub const EASE_OUT: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);
    pub const EASE_IN_OUT: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

    /// Parse easing from a CSS-style name; unknown names get `ease-in-out`,
    /// which is what browsers use for smooth scrolling
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().replace('-', "_").as_str() {
            "linear" => Easing::Linear,
            "ease" => Easing::EASE,
            "ease_in" | "easein" => Easing::EASE_IN,
            "ease_out" | "easeout" => Easing::EASE_OUT,
            "ease_in_out" | "easeinout" => Easing::EASE_IN_OUT,
            _ => Easing::EASE_IN_OUT,
        }
    }

    /// Calculate the eased value for a given progress (0.0 to 1.0)
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
        }
    }
}

/// Cubic bezier interpolation
/// Based on WebKit's implementation
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Find s such that x(s) = t with Newton-Raphson, then return y(s)
    let mut s = t;

    for _ in 0..8 {
        let x = bezier_sample(s, x1, x2) - t;
        if x.abs() < 0.0001 {
            break;
        }
        let dx = bezier_derivative(s, x1, x2);
        if dx.abs() < 0.0001 {
            break;
        }
        s -= x / dx;
    }

    s = s.clamp(0.0, 1.0);
    bezier_sample(s, y1, y2)
}

/// Sample a 1D bezier curve at parameter s
#[inline]
fn bezier_sample(s: f32, p1: f32, p2: f32) -> f32 {
    // B(s) = 3(1-s)²s·p1 + 3(1-s)s²·p2 + s³
    let s2 = s * s;
    let s3 = s2 * s;
    let one_minus_s = 1.0 - s;
    let one_minus_s2 = one_minus_s * one_minus_s;

    3.0 * one_minus_s2 * s * p1 + 3.0 * one_minus_s * s2 * p2 + s3
}

/// Derivative of 1D bezier curve at parameter s
#[inline]
fn bezier_derivative(s: f32, p1: f32, p2: f32) -> f32 {
    // B'(s) = 3(1-s)²·p1 + 6(1-s)s·(p2-p1) + 3s²·(1-p2)
    let one_minus_s = 1.0 - s;
    3.0 * one_minus_s * one_minus_s * p1
        + 6.0 * one_minus_s * s * (p2 - p1)
        + 3.0 * s * s * (1.0 - p2)
}

/// A value animating between two points over virtual time
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    start_ms: u64,
    duration_ms: u64,
    from: f32,
    to: f32,
    easing: Easing,
}

impl Animation {
    pub fn new(from: f32, to: f32, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            start_ms,
            duration_ms,
            from,
            to,
            easing,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// Get the progress (0.0 to 1.0) at `now_ms`
    pub fn progress_at(&self, now_ms: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f32;
        (elapsed / self.duration_ms as f32).min(1.0)
    }

    /// Get the animated value at `now_ms`
    pub fn value_at(&self, now_ms: u64) -> f32 {
        if self.is_complete_at(now_ms) {
            return self.to;
        }
        let eased = self.easing.ease(self.progress_at(now_ms));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_complete_at(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_easing() {
        let easing = Easing::Linear;
        assert!((easing.ease(0.0) - 0.0).abs() < 0.001);
        assert!((easing.ease(0.5) - 0.5).abs() < 0.001);
        assert!((easing.ease(1.0) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_ease_out_and_in() {
        assert!(Easing::EaseOut.ease(0.5) > 0.5);
        assert!(Easing::EaseIn.ease(0.5) < 0.5);
    }

    #[test]
    fn test_cubic_bezier_endpoints() {
        let easing = Easing::EASE_IN_OUT;
        assert!((easing.ease(0.0) - 0.0).abs() < 0.01);
        assert!((easing.ease(0.5) - 0.5).abs() < 0.01);
        assert!((easing.ease(1.0) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Easing::from_name("linear"), Easing::Linear);
        assert_eq!(Easing::from_name("Ease-Out"), Easing::EASE_OUT);
        assert_eq!(Easing::from_name("bouncy"), Easing::EASE_IN_OUT);
    }

    #[test]
    fn test_animation_on_virtual_clock() {
        let anim = Animation::new(0.0, 400.0, 1000, 400, Easing::Linear);

        assert_eq!(anim.value_at(1000), 0.0);
        assert!((anim.value_at(1200) - 200.0).abs() < 0.01);
        assert!(!anim.is_complete_at(1399));
        assert!(anim.is_complete_at(1400));
        assert_eq!(anim.value_at(5000), 400.0);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let anim = Animation::new(10.0, 20.0, 50, 0, Easing::EASE);
        assert!(anim.is_complete_at(50));
        assert_eq!(anim.value_at(50), 20.0);
    }
}
