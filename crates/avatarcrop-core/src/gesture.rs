//! Drag-gesture tracking for the preview viewport.
//!
//! A drag is a stateful gesture: pointer-down begins it, moves while
//! active produce pan deltas, pointer-up ends it. Moves arrive in
//! display pixels; the caller supplies the display scale
//! (`viewport_pixel_size / viewport_display_size`) so deltas come out
//! in viewport units even when CSS renders the surface at a different
//! size than its pixel buffer. A released drag leaves no residual
//! state.

/// Tracks one in-progress pointer drag.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragGesture {
    last: Option<(f64, f64)>,
}

impl DragGesture {
    /// Create an inactive gesture tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is currently active.
    pub fn is_active(&self) -> bool {
        self.last.is_some()
    }

    /// Begin a drag at a pointer position (display pixels).
    ///
    /// Beginning while already active restarts from the new position,
    /// which is what happens when a second pointer-down arrives without
    /// a matching release.
    pub fn begin(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    /// Advance the drag to a new pointer position.
    ///
    /// Returns the pan delta in viewport units, or `None` when no drag
    /// is active (a stray move event).
    pub fn move_to(&mut self, x: f64, y: f64, display_scale: f64) -> Option<(f64, f64)> {
        let (last_x, last_y) = self.last?;
        self.last = Some((x, y));
        Some(((x - last_x) * display_scale, (y - last_y) * display_scale))
    }

    /// End the drag. Safe to call when not active.
    pub fn end(&mut self) {
        self.last = None;
    }
}
