//! WASM-compatible wrapper types for raster data.
//!
//! These types wrap the core Avatarcrop rasters in a
//! JavaScript-friendly interface; pixel data crosses the boundary as
//! `Uint8Array` copies suitable for `ImageData`/`putImageData`.

use avatarcrop_core::{ExportVariant, Raster};
use wasm_bindgen::prelude::*;

/// An RGBA raster wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. The `free()`
/// method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a new JsRaster from dimensions and RGBA pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsRaster {
        JsRaster {
            width,
            height,
            pixels,
        }
    }

    /// Get the raster width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the raster height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4 for RGBA)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as a Uint8Array copy, laid out for
    /// `new ImageData(new Uint8ClampedArray(pixels), width, height)`.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    /// Create a JsRaster from a core Raster.
    pub(crate) fn from_raster(raster: Raster) -> Self {
        Self {
            width: raster.width,
            height: raster.height,
            pixels: raster.pixels,
        }
    }
}

/// Convert a u8 export-variant value to the core enum.
///
/// Values:
/// - 0 = Square (unmasked)
/// - 1 = Circle
/// - 2 = Rounded
///
/// Any other value defaults to Square.
pub(crate) fn variant_from_u8(value: u8) -> ExportVariant {
    match value {
        1 => ExportVariant::Circle,
        2 => ExportVariant::Rounded,
        _ => ExportVariant::Square, // Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_raster_creation() {
        let raster = JsRaster::new(10, 5, vec![0u8; 10 * 5 * 4]);
        assert_eq!(raster.width(), 10);
        assert_eq!(raster.height(), 5);
        assert_eq!(raster.byte_length(), 200);
    }

    #[test]
    fn test_js_raster_pixels() {
        let pixels = vec![255u8, 0, 0, 255, 0, 255, 0, 128]; // 2 RGBA pixels
        let raster = JsRaster::new(2, 1, pixels.clone());
        assert_eq!(raster.pixels(), pixels);
    }

    #[test]
    fn test_from_raster() {
        let mut core = Raster::new(3, 2);
        core.fill([1, 2, 3, 4]);
        let js = JsRaster::from_raster(core);
        assert_eq!(js.width(), 3);
        assert_eq!(js.height(), 2);
        assert_eq!(js.byte_length(), 24);
    }

    #[test]
    fn test_variant_from_u8() {
        assert_eq!(variant_from_u8(0), ExportVariant::Square);
        assert_eq!(variant_from_u8(1), ExportVariant::Circle);
        assert_eq!(variant_from_u8(2), ExportVariant::Rounded);
        // Unknown values default to Square
        assert_eq!(variant_from_u8(3), ExportVariant::Square);
        assert_eq!(variant_from_u8(255), ExportVariant::Square);
    }
}
