//! Compositor WASM bindings.
//!
//! Exposes a stateful [`WasmCompositor`] to JavaScript: the host page
//! forwards file bytes, slider input, and pointer events, and pulls
//! pixel buffers back for its canvases. All geometry lives on the Rust
//! side; the page never computes a transform itself.
//!
//! # Usage
//!
//! ```typescript
//! import init, { WasmCompositor } from '@avatarcrop/wasm';
//!
//! await init();
//! const comp = new WasmCompositor();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! comp.load_image(bytes, file.name);
//!
//! const pixels = new Uint8ClampedArray(comp.preview_pixels());
//! ctx.putImageData(new ImageData(pixels, comp.preview_side(), comp.preview_side()), 0, 0);
//! ```

use avatarcrop_core::{
    encode_png, Compositor, DragGesture, ExportVariant, OutputSet, Raster, ZOOM_STEP,
};
use wasm_bindgen::prelude::*;

use crate::download::save_png;
use crate::types::{variant_from_u8, JsRaster};

/// Stateful compositor handle for the host page.
#[wasm_bindgen]
pub struct WasmCompositor {
    inner: Compositor,
    drag: DragGesture,
}

impl Default for WasmCompositor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmCompositor {
    /// Create an empty compositor with the standard 800/512/10
    /// viewport, output, and corner-radius configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCompositor {
        WasmCompositor {
            inner: Compositor::new(),
            drag: DragGesture::new(),
        }
    }

    /// Decode an image file and make it the current source.
    ///
    /// On success the transform resets to fit-cover. On failure the
    /// previous image (if any) stays loaded and an error is returned
    /// for the page to report.
    pub fn load_image(&mut self, bytes: &[u8], file_name: &str) -> Result<(), JsValue> {
        self.inner
            .load_image(bytes, file_name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Whether an image is currently loaded.
    pub fn is_loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Display name of the loaded image (filename without extension).
    pub fn display_name(&self) -> Option<String> {
        self.inner.display_name().map(str::to_string)
    }

    /// Preview viewport side, in pixels.
    pub fn preview_side(&self) -> u32 {
        self.inner.preview_side()
    }

    /// Output raster side, in pixels.
    pub fn output_side(&self) -> u32 {
        self.inner.output_side()
    }

    /// Set the zoom scale (anchored at the viewport center).
    pub fn set_zoom(&mut self, scale: f64) -> Result<(), JsValue> {
        self.inner
            .set_zoom(scale)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current zoom scale, if an image is loaded.
    pub fn zoom(&self) -> Option<f64> {
        self.inner.zoom()
    }

    /// Zoom as a whole percentage for the slider readout.
    pub fn zoom_percent(&self) -> Option<u32> {
        self.inner.zoom_percent()
    }

    /// Lower end of the suggested slider range (the covering scale).
    pub fn min_zoom(&self) -> Option<f64> {
        self.inner.zoom_range().map(|(min, _)| min)
    }

    /// Upper end of the suggested slider range.
    pub fn max_zoom(&self) -> Option<f64> {
        self.inner.zoom_range().map(|(_, max)| max)
    }

    /// Suggested slider step.
    pub fn zoom_step(&self) -> f64 {
        ZOOM_STEP
    }

    /// The current view transform as `{scale, offset_x, offset_y}`,
    /// or `null` when no image is loaded.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.transform())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Begin a drag at a pointer position (display pixels).
    pub fn begin_drag(&mut self, x: f64, y: f64) {
        if self.inner.is_loaded() {
            self.drag.begin(x, y);
        }
    }

    /// Advance an active drag; pans the image by the pointer delta.
    ///
    /// `display_scale` is `canvas.width / boundingRect.width`, the
    /// correction for CSS scaling of the rendered canvas.
    pub fn drag_to(&mut self, x: f64, y: f64, display_scale: f64) {
        if let Some((dx, dy)) = self.drag.move_to(x, y, display_scale) {
            self.inner.pan(dx, dy);
        }
    }

    /// End the drag (pointer-up or pointer-leave).
    pub fn end_drag(&mut self) {
        self.drag.end();
    }

    /// Whether a drag is in progress (for cursor styling).
    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Discard pan/zoom and recompute the fit-cover transform.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Render the preview and return its RGBA pixels.
    ///
    /// Call after every mutation that should become visible; rendering
    /// is pull-based, nothing redraws implicitly.
    pub fn preview_pixels(&self) -> Vec<u8> {
        self.inner.render_preview().pixels
    }

    /// Render one export variant at output resolution for on-page
    /// display (0 = square, 1 = circle, 2 = rounded).
    pub fn render_output(&self, variant: u8) -> Result<JsRaster, JsValue> {
        Ok(JsRaster::from_raster(self.output_raster(variant)?))
    }

    /// Encode one export variant to PNG bytes.
    pub fn export_png(&self, variant: u8) -> Result<Vec<u8>, JsValue> {
        let raster = self.output_raster(variant)?;
        encode_png(&raster).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Download filename for one export variant.
    pub fn export_filename(&self, variant: u8) -> Result<String, JsValue> {
        self.inner
            .export_filename(variant_from_u8(variant))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Encode one variant and save it through the browser download
    /// path, falling back to a new-tab presentation if the download
    /// is refused.
    pub fn save(&self, variant: u8) -> Result<(), JsValue> {
        let bytes = self.export_png(variant)?;
        let filename = self.export_filename(variant)?;
        save_png(&bytes, &filename)
    }
}

impl WasmCompositor {
    fn output_raster(&self, variant: u8) -> Result<Raster, JsValue> {
        let outputs: OutputSet = self
            .inner
            .render_outputs()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(match variant_from_u8(variant) {
            ExportVariant::Square => outputs.square,
            ExportVariant::Circle => outputs.circle,
            ExportVariant::Rounded => outputs.rounded,
        })
    }
}
