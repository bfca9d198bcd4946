//! Preview-surface rendering.
//!
//! The preview is a pull-based render of the current compositor state:
//! callers re-render after every visible mutation (load, zoom, pan,
//! reset) rather than relying on hidden reactivity.
//!
//! With no image loaded the surface is a flat placeholder with a
//! "NO IMAGE SELECTED" label. With an image loaded it is the
//! transformed image plus a dashed cosmetic frame at the viewport edge;
//! the frame never appears in exports.

use crate::raster::Raster;
use crate::resample::draw_transformed;
use crate::transform::ViewTransform;

const PLACEHOLDER_FILL: [u8; 4] = [0xf0, 0xf0, 0xf0, 0xff];
const LABEL_COLOR: [u8; 4] = [0x99, 0x99, 0x99, 0xff];
// 25% black, blended over whatever is underneath
const FRAME_COLOR: [u8; 4] = [0, 0, 0, 64];

const FRAME_THICKNESS: u32 = 2;
const DASH_PERIOD: u32 = 6;

const LABEL_TEXT: &str = "NO IMAGE SELECTED";
const LABEL_ORIGIN: (u32, u32) = (20, 20);
const LABEL_SCALE: u32 = 3;

/// Render the empty-state placeholder at `side x side`.
pub fn render_placeholder(side: u32) -> Raster {
    let mut raster = Raster::new(side, side);
    raster.fill(PLACEHOLDER_FILL);
    draw_label(
        &mut raster,
        LABEL_TEXT,
        LABEL_ORIGIN.0,
        LABEL_ORIGIN.1,
        LABEL_SCALE,
        LABEL_COLOR,
    );
    raster
}

/// Render the loaded-state preview: the transformed image with the
/// dashed viewport frame on top.
pub fn render_image_preview(image: &Raster, transform: &ViewTransform, side: u32) -> Raster {
    let mut raster = Raster::new(side, side);
    draw_transformed(&mut raster, image, transform);
    draw_dashed_frame(&mut raster);
    raster
}

/// Source-over blend of a straight-alpha color onto one pixel.
fn blend_over(raster: &mut Raster, x: u32, y: u32, src: [u8; 4]) {
    let dst = raster.pixel(x, y);
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        raster.set_pixel(x, y, [0, 0, 0, 0]);
        return;
    }

    let mut out = [0u8; 4];
    for c in 0..3 {
        let sc = src[c] as f32 / 255.0;
        let dc = dst[c] as f32 / 255.0;
        let blended = (sc * sa + dc * da * (1.0 - sa)) / out_a;
        out[c] = (blended * 255.0).round() as u8;
    }
    out[3] = (out_a * 255.0).round() as u8;
    raster.set_pixel(x, y, out);
}

/// Draw the dashed 2px frame around the surface edge (6 on, 6 off).
fn draw_dashed_frame(raster: &mut Raster) {
    let side = raster.width.min(raster.height);
    if side < FRAME_THICKNESS * 2 {
        return;
    }

    let dash_on = |t: u32| (t / DASH_PERIOD) % 2 == 0;

    // Top and bottom bands
    for x in 0..side {
        if !dash_on(x) {
            continue;
        }
        for i in 0..FRAME_THICKNESS {
            blend_over(raster, x, i, FRAME_COLOR);
            blend_over(raster, x, side - 1 - i, FRAME_COLOR);
        }
    }
    // Left and right bands, skipping the rows the corners already own
    for y in FRAME_THICKNESS..side - FRAME_THICKNESS {
        if !dash_on(y) {
            continue;
        }
        for i in 0..FRAME_THICKNESS {
            blend_over(raster, i, y, FRAME_COLOR);
            blend_over(raster, side - 1 - i, y, FRAME_COLOR);
        }
    }
}

/// Render `text` with the built-in 5x7 font, scaled by `scale`.
/// Characters without a glyph advance the cursor silently.
fn draw_label(raster: &mut Raster, text: &str, x: u32, y: u32, scale: u32, color: [u8; 4]) {
    let advance = 6 * scale;
    let mut pen_x = x;

    for ch in text.chars() {
        if let Some(rows) = glyph(ch) {
            for (row, bits) in rows.iter().enumerate() {
                for col in 0..5u32 {
                    if bits & (0b10000 >> col) == 0 {
                        continue;
                    }
                    for dy in 0..scale {
                        for dx in 0..scale {
                            let px = pen_x + col * scale + dx;
                            let py = y + row as u32 * scale + dy;
                            if px < raster.width && py < raster.height {
                                raster.set_pixel(px, py, color);
                            }
                        }
                    }
                }
            }
        }
        pen_x += advance;
    }
}

/// 5x7 bitmap glyphs for the characters of the placeholder label.
fn glyph(ch: char) -> Option<[u8; 7]> {
    match ch.to_ascii_uppercase() {
        'A' => Some([0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'C' => Some([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => Some([0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110]),
        'E' => Some([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'G' => Some([0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110]),
        'I' => Some([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]),
        'L' => Some([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => Some([0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => Some([0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001]),
        'O' => Some([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'S' => Some([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => Some([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        _ => None,
    }
}
