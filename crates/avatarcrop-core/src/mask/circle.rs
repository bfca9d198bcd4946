//! Circular clip mask.

use super::MaskShape;

/// A circular clip region.
///
/// The export variant uses the circle inscribed in the square output:
/// center `(S/2, S/2)`, radius `S/2`. Pixels outside become transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleMask {
    /// Center X coordinate, in pixels.
    pub center_x: f32,
    /// Center Y coordinate, in pixels.
    pub center_y: f32,
    /// Radius, in pixels.
    pub radius: f32,
}

impl CircleMask {
    /// Create a circle mask with an explicit center and radius.
    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self {
            center_x,
            center_y,
            radius: radius.max(0.0),
        }
    }

    /// The circle inscribed in a square of the given side.
    pub fn inscribed(side: u32) -> Self {
        let half = side as f32 / 2.0;
        Self::new(half, half, half)
    }
}

impl MaskShape for CircleMask {
    #[inline]
    fn signed_distance(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.center_x;
        let dy = y - self.center_y;
        (dx * dx + dy * dy).sqrt() - self.radius
    }
}
