//! Rect value object - layout bounds of a page element
//!
//! Rectangles are in document coordinates (y grows downwards from the top of
//! the page). They drive viewport intersection and scroll offsets.

use serde::Deserialize;

/// A rectangle defined by its bounds
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// `[x, y, width, height]` as written in page descriptions
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(from = "[f32; 4]")]
pub struct RectSpec(pub Rect);

impl From<[f32; 4]> for RectSpec {
    fn from([x, y, width, height]: [f32; 4]) -> Self {
        RectSpec(Rect::from_pos_size(x, y, width, height))
    }
}

impl Rect {
    /// Create a new rectangle from bounds
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from position and size
    pub fn from_pos_size(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Check if a point is inside this rectangle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Get intersection with another rectangle.
    ///
    /// Edge-adjacent rectangles intersect with zero area, which matters for
    /// zero-height elements sitting inside the viewport.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        if left <= right && top <= bottom {
            Some(Rect::new(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Inset rectangle by given amounts
    pub fn inset(&self, left: f32, top: f32, right: f32, bottom: f32) -> Rect {
        Rect::new(
            self.left + left,
            self.top + top,
            self.right - right,
            self.bottom - bottom,
        )
    }

    /// Translate rectangle by offset
    pub fn translate(&self, dx: f32, dy: f32) -> Rect {
        Rect::new(
            self.left + dx,
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
        )
    }

    /// Check if rectangle is empty (zero or negative area)
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_pos_size() {
        let r = Rect::from_pos_size(10.0, 20.0, 100.0, 50.0);

        assert_eq!(r.left, 10.0);
        assert_eq!(r.top, 20.0);
        assert_eq!(r.right, 110.0);
        assert_eq!(r.bottom, 70.0);
        assert_eq!(r.area(), 5000.0);
    }

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert!(r.contains(50.0, 50.0));
        assert!(!r.contains(100.0, 100.0)); // Exclusive bounds
    }

    #[test]
    fn test_rect_intersection() {
        let r1 = Rect::new(0.0, 0.0, 100.0, 100.0);
        let r2 = Rect::new(50.0, 50.0, 150.0, 150.0);
        let far = Rect::new(200.0, 200.0, 300.0, 300.0);

        let i = r1.intersection(&r2).unwrap();
        assert_eq!(i, Rect::new(50.0, 50.0, 100.0, 100.0));
        assert!(r1.intersection(&far).is_none());
    }

    #[test]
    fn test_zero_height_intersection() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        let line = Rect::new(0.0, 40.0, 100.0, 40.0);

        let i = viewport.intersection(&line).unwrap();
        assert!(i.is_empty());
        assert_eq!(i.area(), 0.0);
    }

    #[test]
    fn test_rect_inset_and_translate() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);

        assert_eq!(r.inset(0.0, 0.0, 0.0, 50.0).bottom, 50.0);
        assert_eq!(r.translate(0.0, 25.0).top, 25.0);
    }

    #[test]
    fn test_rect_spec_deserializes_from_array() {
        let spec: RectSpec = serde_json::from_str("[0, 100, 300, 50]").unwrap();
        assert_eq!(spec.0, Rect::new(0.0, 100.0, 300.0, 150.0));
    }
}
