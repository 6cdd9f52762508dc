//! Window entity - location, viewport and scroll position
//!
//! Smooth scrolls are animations on the virtual clock; the window is sampled
//! with [`Window::tick`] on each animation frame.

use crate::animation::{Animation, Easing};
use crate::domain::value_objects::{PagePath, Rect};

/// How a scroll request moves the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBehavior {
    Instant,
    Smooth,
}

/// Visible area size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Browser window state
#[derive(Clone, Debug)]
pub struct Window {
    location: String,
    viewport: Viewport,
    scroll_y: f32,
    scroll_animation: Option<Animation>,
    frame_pending: bool,
}

impl Window {
    pub fn new(location: impl Into<String>, viewport: Viewport) -> Self {
        Self {
            location: location.into(),
            viewport,
            scroll_y: 0.0,
            scroll_animation: None,
            frame_pending: false,
        }
    }

    /// Location pathname (`/booking.html`)
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn page(&self, default_page: &str) -> PagePath {
        PagePath::from_location(&self.location, default_page)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Visible area in document coordinates
    pub fn viewport_rect(&self) -> Rect {
        Rect::from_pos_size(0.0, self.scroll_y, self.viewport.width, self.viewport.height)
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll_animation.is_some()
    }

    /// Where a running smooth scroll will end
    pub fn scroll_target(&self) -> Option<f32> {
        self.scroll_animation.as_ref().map(Animation::target)
    }

    /// Scroll to `top` (clamped at the page start). A smooth scroll replaces
    /// any running one and starts from the current position.
    pub fn scroll_to(
        &mut self,
        top: f32,
        behavior: ScrollBehavior,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) {
        let top = top.max(0.0);
        match behavior {
            ScrollBehavior::Instant => {
                self.scroll_animation = None;
                self.scroll_y = top;
            }
            ScrollBehavior::Smooth => {
                self.scroll_animation =
                    Some(Animation::new(self.scroll_y, top, now_ms, duration_ms, easing));
            }
        }
    }

    /// User scroll: jumps and cancels any smooth scroll
    pub fn set_scroll_y(&mut self, y: f32) {
        self.scroll_animation = None;
        self.scroll_y = y.max(0.0);
    }

    /// Ask for an animation frame. Returns false when one is already pending,
    /// so callers schedule at most one frame at a time.
    pub fn request_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Sample the running smooth scroll. Returns true when the position moved.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.frame_pending = false;
        let Some(anim) = &self.scroll_animation else {
            return false;
        };
        let next = anim.value_at(now_ms);
        if anim.is_complete_at(now_ms) {
            self.scroll_animation = None;
        }
        let moved = (next - self.scroll_y).abs() > f32::EPSILON;
        self.scroll_y = next;
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window::new("/index.html", Viewport::default())
    }

    #[test]
    fn test_instant_scroll_clamps_at_zero() {
        let mut w = window();
        w.scroll_to(-80.0, ScrollBehavior::Instant, 0, 400, Easing::Linear);
        assert_eq!(w.scroll_y(), 0.0);
        assert!(!w.is_scrolling());
    }

    #[test]
    fn test_smooth_scroll_progresses_with_ticks() {
        let mut w = window();
        w.scroll_to(800.0, ScrollBehavior::Smooth, 100, 400, Easing::Linear);
        assert_eq!(w.scroll_target(), Some(800.0));
        assert_eq!(w.scroll_y(), 0.0);

        assert!(w.tick(300));
        assert!((w.scroll_y() - 400.0).abs() < 0.01);

        assert!(w.tick(500));
        assert_eq!(w.scroll_y(), 800.0);
        assert!(!w.is_scrolling());
        assert!(!w.tick(516));
    }

    #[test]
    fn test_user_scroll_cancels_animation() {
        let mut w = window();
        w.scroll_to(800.0, ScrollBehavior::Smooth, 0, 400, Easing::Linear);
        w.set_scroll_y(120.0);
        assert!(!w.is_scrolling());
        assert_eq!(w.viewport_rect().top, 120.0);
    }

    #[test]
    fn test_one_frame_pending_at_a_time() {
        let mut w = window();
        assert!(w.request_frame());
        assert!(!w.request_frame());
        w.tick(16);
        assert!(w.request_frame());
    }

    #[test]
    fn test_page_from_location() {
        let w = Window::new("/", Viewport::default());
        assert!(w.page("index.html").is("index.html"));
    }
}
