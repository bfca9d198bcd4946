//! Clip masks for the export variants.
//!
//! A mask is a closed region evaluated per pixel; pixels outside the
//! region have their alpha cleared, pixels inside keep it. The edge is
//! resolved as signed-distance coverage over a one-pixel ramp, which
//! matches the soft clip edge a 2D canvas rasterizer produces.
//!
//! ## Mask Types
//!
//! - **Circle**: the inscribed circle of a square output
//! - **Rounded rectangle**: corner radius clamped so the arcs never
//!   self-intersect

pub mod circle;
pub mod rounded;

pub use circle::CircleMask;
pub use rounded::RoundedRectMask;

/// A clip shape evaluated in raster pixel coordinates.
pub trait MaskShape {
    /// Signed distance from the point to the shape boundary, in pixels.
    /// Negative inside, positive outside.
    fn signed_distance(&self, x: f32, y: f32) -> f32;

    /// Coverage of the pixel centered at (x, y), from 0.0 (fully
    /// outside) to 1.0 (fully inside), with a one-pixel edge ramp.
    #[inline]
    fn coverage(&self, x: f32, y: f32) -> f32 {
        (0.5 - self.signed_distance(x, y)).clamp(0.0, 1.0)
    }
}

/// Clear the alpha of all pixels outside the mask.
///
/// Alpha is multiplied by the per-pixel coverage; color channels are
/// left untouched. Fully covered pixels are unchanged.
pub fn apply_mask<M: MaskShape>(raster: &mut crate::raster::Raster, mask: &M) {
    let width = raster.width;

    for (idx, chunk) in raster.pixels.chunks_exact_mut(4).enumerate() {
        let px = (idx as u32) % width;
        let py = (idx as u32) / width;

        // Evaluate at the pixel center
        let cov = mask.coverage(px as f32 + 0.5, py as f32 + 0.5);

        if cov >= 1.0 {
            continue;
        }
        chunk[3] = (chunk[3] as f32 * cov).round() as u8;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
