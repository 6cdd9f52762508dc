//! Viewport intersection geometry for scroll reveal

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Rect;

/// Intersection settings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealOptions {
    /// Fraction of the element that must be inside the root bounds
    pub threshold: f32,
    /// Amount the viewport is shrunk at the bottom
    pub bottom_margin: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 50.0,
        }
    }
}

impl RevealOptions {
    /// Root bounds for a viewport
    pub fn root_bounds(&self, viewport: Rect) -> Rect {
        viewport.inset(0.0, 0.0, 0.0, self.bottom_margin)
    }

    /// Whether `target` is far enough inside `viewport` to be revealed
    pub fn should_reveal(&self, target: Rect, viewport: Rect) -> bool {
        intersection_ratio(target, self.root_bounds(viewport)) >= self.threshold
    }
}

/// Fraction of `target`'s area inside `root`. Zero-area targets count as
/// fully visible when they touch the root.
pub fn intersection_ratio(target: Rect, root: Rect) -> f32 {
    let Some(overlap) = target.intersection(&root) else {
        return 0.0;
    };
    if target.is_empty() {
        return 1.0;
    }
    overlap.area() / target.area()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport_at(scroll_y: f32) -> Rect {
        Rect::from_pos_size(0.0, scroll_y, 1280.0, 720.0)
    }

    #[test]
    fn test_ratio() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let half_in = Rect::new(0.0, 50.0, 100.0, 150.0);
        assert!((intersection_ratio(half_in, root) - 0.5).abs() < 0.001);
        assert_eq!(intersection_ratio(Rect::new(0.0, 200.0, 100.0, 300.0), root), 0.0);
        assert_eq!(intersection_ratio(Rect::new(10.0, 10.0, 10.0, 10.0), root), 1.0);
    }

    #[test]
    fn test_bottom_margin_hides_elements_near_the_fold() {
        let options = RevealOptions::default();
        // 200 tall card whose top is 40 above the fold: 20% in the viewport
        // but entirely inside the 50 margin
        let card = Rect::from_pos_size(0.0, 680.0, 300.0, 200.0);
        assert!(!options.should_reveal(card, viewport_at(0.0)));

        // Scroll 100: 90 of 200 inside the root bounds
        assert!(options.should_reveal(card, viewport_at(100.0)));
    }

    #[test]
    fn test_threshold_boundary() {
        let options = RevealOptions::default();
        // root bottom at 670; 20 of 200 visible is exactly 10%
        let card = Rect::from_pos_size(0.0, 650.0, 300.0, 200.0);
        assert!(options.should_reveal(card, viewport_at(0.0)));

        let lower = Rect::from_pos_size(0.0, 652.0, 300.0, 200.0);
        assert!(!options.should_reveal(lower, viewport_at(0.0)));
    }
}
