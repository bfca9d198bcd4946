//! The pan/zoom view transform.
//!
//! A `ViewTransform` maps source-image pixel coordinates to viewport
//! units: `viewport = image * scale + offset`. The viewport is a fixed
//! square; the same transform, uniformly rescaled, drives both the
//! interactive preview and the export resample.
//!
//! The transform is deliberately never clamped after a manual pan: the
//! user may drag the image out of full coverage, and that is accepted
//! behavior.

use serde::{Deserialize, Serialize};

/// Affine view transform: uniform scale plus translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Uniform scale factor (source pixels to viewport units). Always > 0.
    pub scale: f64,
    /// Horizontal offset of the image origin, in viewport units.
    pub offset_x: f64,
    /// Vertical offset of the image origin, in viewport units.
    pub offset_y: f64,
}

impl ViewTransform {
    /// Compute the scale-to-cover transform for an image in a square viewport.
    ///
    /// The image is scaled up just enough that it fully fills the
    /// viewport (`scale = max(V/w, V/h)`), then centered. Overflow on
    /// the longer axis is cropped by the viewport edge.
    pub fn fit_cover(image_width: u32, image_height: u32, viewport: u32) -> Self {
        let v = viewport as f64;
        let w = image_width as f64;
        let h = image_height as f64;
        let scale = (v / w).max(v / h);
        Self {
            scale,
            offset_x: (v - w * scale) / 2.0,
            offset_y: (v - h * scale) / 2.0,
        }
    }

    /// Change the scale while keeping the viewport-center point fixed.
    ///
    /// The source pixel currently under the viewport center stays under
    /// it after the zoom change. `new_scale` must be positive; callers
    /// validate before mutating (see `Compositor::set_zoom`).
    pub fn zoom_about_center(&mut self, new_scale: f64, viewport: u32) {
        let c = viewport as f64 / 2.0;
        let ratio = new_scale / self.scale;
        self.offset_x = c - (c - self.offset_x) * ratio;
        self.offset_y = c - (c - self.offset_y) * ratio;
        self.scale = new_scale;
    }

    /// Translate by a delta already expressed in viewport units.
    ///
    /// Unbounded: the image may be panned out of full coverage.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        self.offset_x += delta_x;
        self.offset_y += delta_y;
    }

    /// Rescale the whole transform by a uniform factor.
    ///
    /// Used to convert from viewport units to output-raster units
    /// (factor `S/V`), so an export reproduces exactly what the
    /// preview viewport shows.
    pub fn scaled_by(&self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            offset_x: self.offset_x * factor,
            offset_y: self.offset_y * factor,
        }
    }

    /// Map a viewport point back to source-image coordinates.
    pub fn image_point_at(&self, viewport_x: f64, viewport_y: f64) -> (f64, f64) {
        (
            (viewport_x - self.offset_x) / self.scale,
            (viewport_y - self.offset_y) / self.scale,
        )
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
