//! Pointer-driven radial gradient
//!
//! The gradient's focal point follows the pointer across the viewport.
//! Positions are percentages so the backdrop can be rendered at any size.

use std::fmt;

/// Gradient stops, inner to outer.
pub const GRADIENT_PALETTE: [&str; 4] = ["#E0EFED", "#867CAD", "#625B97", "#3A0D4D"];

/// Focal point of the gradient as viewport percentages in `[0, 100]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for PointerPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl PointerPosition {
    /// Convert viewport-relative client coordinates into percentages.
    pub fn from_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            x: axis_percent(client_x, viewport_w),
            y: axis_percent(client_y, viewport_h),
        }
    }
}

fn axis_percent(client: f64, extent: f64) -> f64 {
    if !extent.is_finite() || extent <= 0.0 || !client.is_finite() {
        return 50.0;
    }
    (client / extent * 100.0).clamp(0.0, 100.0)
}

impl fmt::Display for PointerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}% {:.2}%", self.x, self.y)
    }
}

/// CSS `background` value for the floating gradient.
pub fn radial_gradient_css(position: PointerPosition) -> String {
    format!(
        "radial-gradient(circle at {}, {})",
        position,
        GRADIENT_PALETTE.join(", ")
    )
}

/// Collapses bursts of pointer events into one update per animation frame.
///
/// Every event overwrites the pending position; only the first event after
/// a frame fires asks for a new frame.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: Option<PointerPosition>,
    frame_requested: bool,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position. Returns true when the caller must request a frame.
    pub fn push(&mut self, position: PointerPosition) -> bool {
        self.pending = Some(position);
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Called from the frame callback. Yields the latest position, if any.
    pub fn take(&mut self) -> Option<PointerPosition> {
        self.frame_requested = false;
        self.pending.take()
    }

    /// Drop any pending position, e.g. when the frame was cancelled.
    pub fn reset(&mut self) {
        self.pending = None;
        self.frame_requested = false;
    }

    pub fn frame_requested(&self) -> bool {
        self.frame_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client_center() {
        let pos = PointerPosition::from_client(640.0, 360.0, 1280.0, 720.0);
        assert_eq!(pos, PointerPosition { x: 50.0, y: 50.0 });
    }

    #[test]
    fn test_from_client_stays_in_range_inside_viewport() {
        let (w, h) = (1024.0, 768.0);
        for cx in [0.0, 1.0, 333.3, 1023.0, 1024.0] {
            for cy in [0.0, 12.5, 500.0, 768.0] {
                let pos = PointerPosition::from_client(cx, cy, w, h);
                assert!((0.0..=100.0).contains(&pos.x), "x out of range: {}", pos.x);
                assert!((0.0..=100.0).contains(&pos.y), "y out of range: {}", pos.y);
            }
        }
    }

    #[test]
    fn test_from_client_clamps_outside_viewport() {
        let pos = PointerPosition::from_client(-20.0, 900.0, 800.0, 600.0);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 100.0);
    }

    #[test]
    fn test_from_client_zero_viewport_falls_back_to_center() {
        let pos = PointerPosition::from_client(10.0, 10.0, 0.0, f64::NAN);
        assert_eq!(pos, PointerPosition::default());
    }

    #[test]
    fn test_radial_gradient_css() {
        let css = radial_gradient_css(PointerPosition { x: 25.0, y: 75.5 });
        assert_eq!(
            css,
            "radial-gradient(circle at 25.00% 75.50%, #E0EFED, #867CAD, #625B97, #3A0D4D)"
        );
    }

    #[test]
    fn test_coalescer_requests_one_frame_per_burst() {
        let mut c = FrameCoalescer::new();
        assert!(c.push(PointerPosition { x: 1.0, y: 1.0 }));
        assert!(!c.push(PointerPosition { x: 2.0, y: 2.0 }));
        assert!(!c.push(PointerPosition { x: 3.0, y: 3.0 }));
        assert!(c.frame_requested());

        assert_eq!(c.take(), Some(PointerPosition { x: 3.0, y: 3.0 }));
        assert!(!c.frame_requested());
        assert_eq!(c.take(), None);
    }

    #[test]
    fn test_coalescer_next_burst_requests_again() {
        let mut c = FrameCoalescer::new();
        c.push(PointerPosition { x: 1.0, y: 1.0 });
        c.take();
        assert!(c.push(PointerPosition { x: 4.0, y: 4.0 }));
    }

    #[test]
    fn test_coalescer_reset() {
        let mut c = FrameCoalescer::new();
        c.push(PointerPosition { x: 1.0, y: 1.0 });
        c.reset();
        assert_eq!(c.take(), None);
        assert!(c.push(PointerPosition { x: 2.0, y: 2.0 }));
    }
}
