//! The compositor: owned image + transform state and the render paths.
//!
//! Lifecycle: `Empty -> Ready` on a successful load; a failed decode
//! leaves the previous state untouched; a later load replaces image and
//! transform wholesale. In `Ready`, zoom/pan/reset/render are all
//! self-loops. Every mutation is atomic from the caller's point of
//! view: either the whole transform updates or nothing does.

use thiserror::Error;

use crate::decode::{decode_image, DecodeError};
use crate::mask::{apply_mask, CircleMask, RoundedRectMask};
use crate::naming::{strip_extension, ExportVariant};
use crate::preview::{render_image_preview, render_placeholder};
use crate::raster::Raster;
use crate::resample::draw_transformed;
use crate::transform::ViewTransform;
use crate::{CORNER_RADIUS, MAX_ZOOM_FACTOR, OUTPUT_SIZE, PREVIEW_SIZE};

/// Errors surfaced to the user by compositor operations. Non-fatal.
#[derive(Debug, Error)]
pub enum CompositorError {
    /// An export was requested with no image loaded.
    #[error("No image loaded")]
    NoImage,

    /// A zoom scale that is not a positive finite number.
    #[error("Invalid zoom scale: {0}")]
    InvalidZoom(f64),

    /// The supplied bytes could not be decoded as an image.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// The three fixed-size export variants.
#[derive(Debug, Clone)]
pub struct OutputSet {
    /// The unmasked resample of the visible region.
    pub square: Raster,
    /// Resample clipped to the inscribed circle.
    pub circle: Raster,
    /// Resample clipped to a rounded rectangle.
    pub rounded: Raster,
}

#[derive(Debug, Clone)]
struct LoadedImage {
    image: Raster,
    display_name: String,
    transform: ViewTransform,
}

/// Owns the image, its view transform, and the render/export paths.
#[derive(Debug, Clone)]
pub struct Compositor {
    preview_side: u32,
    output_side: u32,
    corner_radius: f32,
    loaded: Option<LoadedImage>,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Create an empty compositor with the standard viewport (800),
    /// output (512), and corner radius (10) configuration.
    pub fn new() -> Self {
        Self::with_dimensions(PREVIEW_SIZE, OUTPUT_SIZE, CORNER_RADIUS)
    }

    /// Create an empty compositor with explicit dimensions.
    pub fn with_dimensions(preview_side: u32, output_side: u32, corner_radius: f32) -> Self {
        Self {
            preview_side,
            output_side,
            corner_radius,
            loaded: None,
        }
    }

    /// Preview viewport side, in pixels.
    pub fn preview_side(&self) -> u32 {
        self.preview_side
    }

    /// Output raster side, in pixels.
    pub fn output_side(&self) -> u32 {
        self.output_side
    }

    /// Whether an image is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    /// Display name derived from the loaded file (extension stripped).
    pub fn display_name(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.display_name.as_str())
    }

    /// Intrinsic dimensions of the loaded source image.
    pub fn image_dimensions(&self) -> Option<(u32, u32)> {
        self.loaded.as_ref().map(|l| (l.image.width, l.image.height))
    }

    /// The current view transform, if an image is loaded.
    pub fn transform(&self) -> Option<ViewTransform> {
        self.loaded.as_ref().map(|l| l.transform)
    }

    /// Decode `bytes` and replace the current state on success.
    ///
    /// The initial transform is the centered fit-cover for the preview
    /// viewport. On decode failure nothing is mutated: a previously
    /// loaded image stays loaded.
    pub fn load_image(&mut self, bytes: &[u8], file_name: &str) -> Result<(), CompositorError> {
        let image = decode_image(bytes)?;

        let base = strip_extension(file_name);
        let display_name = if base.is_empty() {
            "image".to_string()
        } else {
            base.to_string()
        };

        let transform = ViewTransform::fit_cover(image.width, image.height, self.preview_side);
        self.loaded = Some(LoadedImage {
            image,
            display_name,
            transform,
        });
        Ok(())
    }

    /// Set the zoom scale, anchored at the viewport center.
    ///
    /// Accepts any positive finite scale; the UI clamps its slider to
    /// `zoom_range` but the compositor does not. A no-op when empty.
    pub fn set_zoom(&mut self, scale: f64) -> Result<(), CompositorError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(CompositorError::InvalidZoom(scale));
        }
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.transform.zoom_about_center(scale, self.preview_side);
        }
        Ok(())
    }

    /// Current zoom scale.
    pub fn zoom(&self) -> Option<f64> {
        self.loaded.as_ref().map(|l| l.transform.scale)
    }

    /// Zoom scale as a whole-number percentage, for the UI readout.
    pub fn zoom_percent(&self) -> Option<u32> {
        self.zoom().map(|s| (s * 100.0).round() as u32)
    }

    /// Suggested slider range: covering scale to four times it.
    pub fn zoom_range(&self) -> Option<(f64, f64)> {
        let loaded = self.loaded.as_ref()?;
        let cover =
            ViewTransform::fit_cover(loaded.image.width, loaded.image.height, self.preview_side)
                .scale;
        Some((cover, cover * MAX_ZOOM_FACTOR))
    }

    /// Translate the image by a delta in viewport units. Unbounded; a
    /// no-op when empty.
    pub fn pan(&mut self, delta_x: f64, delta_y: f64) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.transform.pan(delta_x, delta_y);
        }
    }

    /// Recompute the fit-cover transform, discarding pan and zoom.
    /// A no-op when empty.
    pub fn reset(&mut self) {
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.transform =
                ViewTransform::fit_cover(loaded.image.width, loaded.image.height, self.preview_side);
        }
    }

    /// Render the preview surface for the current state.
    ///
    /// Callers re-render after every visible mutation; this is the
    /// explicit redraw contract.
    pub fn render_preview(&self) -> Raster {
        match self.loaded.as_ref() {
            None => render_placeholder(self.preview_side),
            Some(loaded) => {
                render_image_preview(&loaded.image, &loaded.transform, self.preview_side)
            }
        }
    }

    /// Produce the three export rasters from the current state.
    ///
    /// The resample uses the preview transform rescaled by `S/V`, so
    /// the exports reproduce exactly the visible viewport region at
    /// output resolution.
    pub fn render_outputs(&self) -> Result<OutputSet, CompositorError> {
        let loaded = self.loaded.as_ref().ok_or(CompositorError::NoImage)?;

        let side = self.output_side;
        let ratio = side as f64 / self.preview_side as f64;
        let transform = loaded.transform.scaled_by(ratio);

        let mut base = Raster::new(side, side);
        draw_transformed(&mut base, &loaded.image, &transform);

        let square = base.clone();

        let mut circle = base.clone();
        apply_mask(&mut circle, &CircleMask::inscribed(side));

        let mut rounded = base;
        apply_mask(
            &mut rounded,
            &RoundedRectMask::new(side as f32, side as f32, self.corner_radius),
        );

        Ok(OutputSet {
            square,
            circle,
            rounded,
        })
    }

    /// Download filename for one export variant, e.g. `name-circle.png`.
    pub fn export_filename(&self, variant: ExportVariant) -> Result<String, CompositorError> {
        let loaded = self.loaded.as_ref().ok_or(CompositorError::NoImage)?;
        Ok(variant.filename(&loaded.display_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    /// PNG bytes for a gradient test image, encoded in memory.
    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_fn(width, height, |x, y| {
            Rgba([
                ((x * 255) / width.max(1)) as u8,
                ((y * 255) / height.max(1)) as u8,
                128,
                255,
            ])
        });
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn loaded_compositor() -> Compositor {
        let mut comp = Compositor::new();
        comp.load_image(&png_bytes(120, 80), "photo.jpg").unwrap();
        comp
    }

    #[test]
    fn test_starts_empty() {
        let comp = Compositor::new();
        assert!(!comp.is_loaded());
        assert!(comp.display_name().is_none());
        assert!(comp.transform().is_none());
        assert!(comp.zoom().is_none());
    }

    #[test]
    fn test_load_sets_fit_cover_transform() {
        let comp = loaded_compositor();
        assert!(comp.is_loaded());
        assert_eq!(comp.display_name(), Some("photo"));
        assert_eq!(comp.image_dimensions(), Some((120, 80)));

        // 120x80 in 800: height constrains, scale = 10
        let t = comp.transform().unwrap();
        assert!((t.scale - 10.0).abs() < 1e-9);
        assert!((t.offset_x - (800.0 - 1200.0) / 2.0).abs() < 1e-9);
        assert!((t.offset_y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_load_empty_filename_defaults() {
        let mut comp = Compositor::new();
        comp.load_image(&png_bytes(10, 10), "").unwrap();
        assert_eq!(comp.display_name(), Some("image"));
    }

    #[test]
    fn test_load_dotfile_name_defaults() {
        // Stripping ".hidden" leaves nothing, so the default kicks in
        let mut comp = Compositor::new();
        comp.load_image(&png_bytes(10, 10), ".hidden").unwrap();
        assert_eq!(comp.display_name(), Some("image"));
        assert_eq!(
            comp.export_filename(ExportVariant::Square).unwrap(),
            "image-square.png"
        );
    }

    #[test]
    fn test_decode_failure_stays_empty() {
        let mut comp = Compositor::new();
        let result = comp.load_image(&[0, 1, 2, 3], "garbage.bin");
        assert!(matches!(result, Err(CompositorError::Decode(_))));
        assert!(!comp.is_loaded());
    }

    #[test]
    fn test_decode_failure_preserves_previous_state() {
        let mut comp = loaded_compositor();
        comp.set_zoom(25.0).unwrap();
        comp.pan(13.0, -7.0);
        let before = comp.transform().unwrap();

        let result = comp.load_image(&[0xde, 0xad, 0xbe, 0xef], "bad.png");
        assert!(result.is_err());

        assert!(comp.is_loaded());
        assert_eq!(comp.display_name(), Some("photo"));
        assert_eq!(comp.image_dimensions(), Some((120, 80)));
        assert_eq!(comp.transform().unwrap(), before);
    }

    #[test]
    fn test_reload_replaces_state() {
        let mut comp = loaded_compositor();
        comp.pan(50.0, 50.0);

        comp.load_image(&png_bytes(40, 40), "other.png").unwrap();
        assert_eq!(comp.display_name(), Some("other"));
        assert_eq!(comp.image_dimensions(), Some((40, 40)));
        // Fresh fit-cover, pan discarded
        let t = comp.transform().unwrap();
        assert!((t.scale - 20.0).abs() < 1e-9);
        assert!((t.offset_x - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_set_zoom_rejects_bad_scales() {
        let mut comp = loaded_compositor();
        let before = comp.transform().unwrap();

        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = comp.set_zoom(bad);
            assert!(matches!(result, Err(CompositorError::InvalidZoom(_))));
        }
        // Transform untouched by rejected zooms
        assert_eq!(comp.transform().unwrap(), before);
    }

    #[test]
    fn test_set_zoom_when_empty_is_noop() {
        let mut comp = Compositor::new();
        assert!(comp.set_zoom(2.0).is_ok());
        assert!(!comp.is_loaded());
    }

    #[test]
    fn test_zoom_and_reset() {
        let mut comp = loaded_compositor();
        let initial = comp.transform().unwrap();

        comp.set_zoom(30.0).unwrap();
        comp.pan(-200.0, 90.0);
        assert_ne!(comp.transform().unwrap(), initial);

        comp.reset();
        assert_eq!(comp.transform().unwrap(), initial);
    }

    #[test]
    fn test_zoom_percent() {
        let mut comp = loaded_compositor();
        comp.set_zoom(10.0).unwrap();
        assert_eq!(comp.zoom_percent(), Some(1000));
        comp.set_zoom(0.333).unwrap();
        assert_eq!(comp.zoom_percent(), Some(33));
    }

    #[test]
    fn test_zoom_range_is_cover_to_4x() {
        let comp = loaded_compositor();
        let (min, max) = comp.zoom_range().unwrap();
        assert!((min - 10.0).abs() < 1e-9);
        assert!((max - 40.0).abs() < 1e-9);

        // Range stays anchored to fit-cover even after zooming
        let mut comp = comp;
        comp.set_zoom(35.0).unwrap();
        let (min2, max2) = comp.zoom_range().unwrap();
        assert!((min2 - min).abs() < 1e-9);
        assert!((max2 - max).abs() < 1e-9);
    }

    #[test]
    fn test_render_preview_empty_is_placeholder() {
        let comp = Compositor::new();
        let preview = comp.render_preview();
        assert_eq!(preview.width, 800);
        assert_eq!(preview.pixel(400, 400), [0xf0, 0xf0, 0xf0, 0xff]);
    }

    #[test]
    fn test_render_outputs_requires_image() {
        let comp = Compositor::new();
        let result = comp.render_outputs();
        assert!(matches!(result, Err(CompositorError::NoImage)));
    }

    #[test]
    fn test_render_outputs_dimensions() {
        let comp = loaded_compositor();
        let outputs = comp.render_outputs().unwrap();
        assert_eq!(outputs.square.width, 512);
        assert_eq!(outputs.square.height, 512);
        assert_eq!(outputs.circle.width, 512);
        assert_eq!(outputs.rounded.width, 512);
    }

    #[test]
    fn test_output_masks() {
        let comp = loaded_compositor();
        let outputs = comp.render_outputs().unwrap();

        // Square keeps its corners
        assert_eq!(outputs.square.pixel(0, 0)[3], 255);

        // Circle: corners transparent, center opaque
        assert_eq!(outputs.circle.pixel(0, 0)[3], 0);
        assert_eq!(outputs.circle.pixel(511, 511)[3], 0);
        assert_eq!(outputs.circle.pixel(256, 256)[3], 255);

        // Rounded: corners transparent, edge midpoints opaque
        assert_eq!(outputs.rounded.pixel(0, 0)[3], 0);
        assert_eq!(outputs.rounded.pixel(256, 0)[3], 255);
        assert_eq!(outputs.rounded.pixel(0, 256)[3], 255);
    }

    #[test]
    fn test_resample_equivalence_at_matching_sizes() {
        // With S = V the square export must match the preview inside
        // the viewport, except for the cosmetic dashed frame.
        let mut comp = Compositor::with_dimensions(64, 64, 10.0);
        comp.load_image(&png_bytes(96, 48), "x.png").unwrap();
        comp.set_zoom(2.0).unwrap();
        comp.pan(-11.0, 4.0);

        let preview = comp.render_preview();
        let outputs = comp.render_outputs().unwrap();

        for y in 3..61 {
            for x in 3..61 {
                assert_eq!(
                    preview.pixel(x, y),
                    outputs.square.pixel(x, y),
                    "mismatch at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_export_filenames() {
        let mut comp = Compositor::new();
        comp.load_image(&png_bytes(8, 8), "a/b:c*d.jpg").unwrap();

        assert_eq!(
            comp.export_filename(ExportVariant::Square).unwrap(),
            "a-b-c-d-square.png"
        );
        assert_eq!(
            comp.export_filename(ExportVariant::Circle).unwrap(),
            "a-b-c-d-circle.png"
        );
        assert_eq!(
            comp.export_filename(ExportVariant::Rounded).unwrap(),
            "a-b-c-d-rounded.png"
        );
    }

    #[test]
    fn test_export_filename_requires_image() {
        let comp = Compositor::new();
        assert!(matches!(
            comp.export_filename(ExportVariant::Square),
            Err(CompositorError::NoImage)
        ));
    }

    #[test]
    fn test_pan_when_empty_is_noop() {
        let mut comp = Compositor::new();
        comp.pan(10.0, 10.0);
        comp.reset();
        assert!(!comp.is_loaded());
    }
}
