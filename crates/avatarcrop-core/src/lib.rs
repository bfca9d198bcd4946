//! Avatarcrop Core - profile-picture crop and export library
//!
//! This crate provides the processing core for Avatarcrop: image
//! decoding, the pan/zoom view transform, preview rendering, clip
//! masking, and PNG export. A user loads an image, pans and zooms it
//! within a fixed square viewport, and exports three fixed-size
//! variants: square, circle-masked, and rounded-corner-masked.
//!
//! The crate is platform-free; the `avatarcrop-wasm` crate binds it to
//! the browser.

pub mod compositor;
pub mod decode;
pub mod encode;
pub mod gesture;
pub mod mask;
pub mod naming;
pub mod preview;
pub mod raster;
pub mod resample;
pub mod transform;

pub use compositor::{Compositor, CompositorError, OutputSet};
pub use decode::{decode_image, DecodeError};
pub use encode::{encode_png, EncodeError};
pub use gesture::DragGesture;
pub use naming::{sanitize_filename, strip_extension, ExportVariant};
pub use raster::Raster;
pub use transform::ViewTransform;

/// Preview viewport side, in pixels.
pub const PREVIEW_SIZE: u32 = 800;

/// Export raster side, in pixels.
pub const OUTPUT_SIZE: u32 = 512;

/// Corner radius of the rounded variant, in output-raster units.
pub const CORNER_RADIUS: f32 = 10.0;

/// Upper end of the suggested zoom slider range, as a multiple of the
/// covering scale.
pub const MAX_ZOOM_FACTOR: f64 = 4.0;

/// Suggested zoom slider step.
pub const ZOOM_STEP: f64 = 0.01;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_configuration() {
        let comp = Compositor::new();
        assert_eq!(comp.preview_side(), PREVIEW_SIZE);
        assert_eq!(comp.output_side(), OUTPUT_SIZE);
    }

    #[test]
    fn test_zoom_constants_sane() {
        assert!(MAX_ZOOM_FACTOR > 1.0);
        assert!(ZOOM_STEP > 0.0);
    }
}
