//! Affine resampling of a source raster into a destination raster.
//!
//! Each destination pixel is inverse-mapped through the view transform
//! and bilinearly sampled from the source. Destination pixels whose
//! source point falls outside the image are left untouched (transparent
//! on a fresh surface).
//!
//! The preview render and the export resample both go through this one
//! routine, at viewport scale and output scale respectively, so an
//! export is a pixel-accurate reproduction of the visible preview.

use crate::raster::Raster;
use crate::transform::ViewTransform;

/// Draw `src` into `dst`, scaled and positioned by `transform`.
///
/// `transform` is interpreted in destination units: a source pixel at
/// `(ix, iy)` lands at `(ix * scale + offset_x, iy * scale + offset_y)`.
pub fn draw_transformed(dst: &mut Raster, src: &Raster, transform: &ViewTransform) {
    if src.is_empty() || dst.is_empty() {
        return;
    }

    let src_w = src.width as f64;
    let src_h = src.height as f64;
    let dst_w = dst.width;

    for (idx, chunk) in dst.pixels.chunks_exact_mut(4).enumerate() {
        let x = (idx as u32) % dst_w;
        let y = (idx as u32) / dst_w;

        // Sample at the pixel center.
        let (u, v) = transform.image_point_at(x as f64 + 0.5, y as f64 + 0.5);
        if u < 0.0 || v < 0.0 || u >= src_w || v >= src_h {
            continue;
        }

        chunk.copy_from_slice(&sample_bilinear(src, u, v));
    }
}

/// Bilinearly sample the source at continuous coordinates (u, v),
/// where integers fall on pixel edges and centers sit at +0.5.
fn sample_bilinear(src: &Raster, u: f64, v: f64) -> [u8; 4] {
    let sx = u - 0.5;
    let sy = v - 0.5;

    let x0f = sx.floor();
    let y0f = sy.floor();
    let fx = sx - x0f;
    let fy = sy - y0f;

    let max_x = (src.width - 1) as i64;
    let max_y = (src.height - 1) as i64;
    let x0 = (x0f as i64).clamp(0, max_x) as u32;
    let x1 = (x0f as i64 + 1).clamp(0, max_x) as u32;
    let y0 = (y0f as i64).clamp(0, max_y) as u32;
    let y1 = (y0f as i64 + 1).clamp(0, max_y) as u32;

    let p00 = src.pixel(x0, y0);
    let p10 = src.pixel(x1, y0);
    let p01 = src.pixel(x0, y1);
    let p11 = src.pixel(x1, y1);

    let w00 = (1.0 - fx) * (1.0 - fy);
    let w10 = fx * (1.0 - fy);
    let w01 = (1.0 - fx) * fy;
    let w11 = fx * fy;

    let mut out = [0u8; 4];
    for (c, slot) in out.iter_mut().enumerate() {
        let value = p00[c] as f64 * w00
            + p10[c] as f64 * w10
            + p01[c] as f64 * w01
            + p11[c] as f64 * w11;
        *slot = value.round().clamp(0.0, 255.0) as u8;
    }
    out
}
