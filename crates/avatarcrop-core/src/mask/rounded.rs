//! Rounded-rectangle clip mask.

use super::MaskShape;

/// A rounded-rectangle clip region anchored at the raster origin.
///
/// The corner radius is clamped to `min(radius, min(width, height) / 2)`
/// so the corner arcs never self-intersect; at the clamp limit on a
/// square the shape degenerates to the inscribed circle at the corners
/// while the edge midpoints stay on the rectangle boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRectMask {
    /// Rectangle width, in pixels.
    pub width: f32,
    /// Rectangle height, in pixels.
    pub height: f32,
    /// Corner radius after clamping, in pixels.
    pub radius: f32,
}

impl RoundedRectMask {
    /// Create a rounded-rectangle mask covering `width x height` with
    /// the requested corner radius (clamped to a valid range).
    pub fn new(width: f32, height: f32, radius: f32) -> Self {
        let max_radius = width.min(height) / 2.0;
        Self {
            width,
            height,
            radius: radius.clamp(0.0, max_radius.max(0.0)),
        }
    }
}

impl MaskShape for RoundedRectMask {
    #[inline]
    fn signed_distance(&self, x: f32, y: f32) -> f32 {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        // Distance from the shrunk inner rectangle, then pushed back
        // out by the radius: the standard rounded-box distance.
        let qx = (x - half_w).abs() - (half_w - self.radius);
        let qy = (y - half_h).abs() - (half_h - self.radius);

        let outside = (qx.max(0.0).powi(2) + qy.max(0.0).powi(2)).sqrt();
        let inside = qx.max(qy).min(0.0);
        outside + inside - self.radius
    }
}
