//! Image decoding for Avatarcrop.
//!
//! Accepts whatever formats the `image` build supports (JPEG, PNG, GIF,
//! WebP) and produces an RGBA raster with EXIF orientation already
//! applied. Browsers orient images implicitly when decoding; here the
//! correction is explicit so a rotated phone photo crops the way the
//! user sees it.
//!
//! All operations are synchronous and single-threaded within WASM.

mod load;
mod types;

pub use load::decode_image;
pub use types::{DecodeError, Orientation};
