//! PNG encoding for the export variants.
//!
//! Uses the `image` crate's PNG encoder on raw RGBA data. PNG is
//! required (not negotiable) because the masked variants carry
//! transparency outside the clip region.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::raster::Raster;

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode an RGBA raster to PNG bytes.
///
/// # Errors
///
/// Returns an error if the raster has zero dimensions, a mismatched
/// pixel buffer, or the encoder fails internally.
pub fn encode_png(raster: &Raster) -> Result<Vec<u8>, EncodeError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: raster.width,
            height: raster.height,
        });
    }

    let expected_len = (raster.width as usize) * (raster.height as usize) * 4;
    if raster.pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: raster.pixels.len(),
        });
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);

    encoder
        .write_image(
            &raster.pixels,
            raster.width,
            raster.height,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let mut raster = Raster::new(32, 32);
        raster.fill([200, 100, 50, 255]);

        let bytes = encode_png(&raster).unwrap();
        assert_eq!(&bytes[0..8], PNG_MAGIC);
    }

    #[test]
    fn test_encode_preserves_transparency() {
        let mut raster = Raster::new(4, 4);
        raster.fill([255, 0, 0, 255]);
        raster.set_pixel(0, 0, [255, 0, 0, 0]);
        raster.set_pixel(3, 3, [0, 255, 0, 128]);

        let bytes = encode_png(&raster).unwrap();

        // Decode back and confirm the alpha channel survived
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0)[3], 0);
        assert_eq!(decoded.get_pixel(3, 3)[3], 128);
        assert_eq!(decoded.get_pixel(1, 1)[3], 255);
    }

    #[test]
    fn test_encode_zero_width() {
        let raster = Raster::from_pixels(0, 4, vec![]);
        let result = encode_png(&raster);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_zero_height() {
        let raster = Raster::from_pixels(4, 0, vec![]);
        let result = encode_png(&raster);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_mismatched_buffer() {
        let raster = Raster {
            width: 4,
            height: 4,
            pixels: vec![0u8; 10],
        };
        let result = encode_png(&raster);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_single_pixel() {
        let mut raster = Raster::new(1, 1);
        raster.set_pixel(0, 0, [12, 34, 56, 78]);

        let bytes = encode_png(&raster).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded.get_pixel(0, 0).0, [12, 34, 56, 78]);
    }

    #[test]
    fn test_encode_is_deterministic() {
        let mut raster = Raster::new(16, 16);
        for y in 0..16 {
            for x in 0..16 {
                raster.set_pixel(x, y, [x as u8 * 16, y as u8 * 16, 0, 255]);
            }
        }
        assert_eq!(encode_png(&raster).unwrap(), encode_png(&raster).unwrap());
    }
}
