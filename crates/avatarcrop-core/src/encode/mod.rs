//! Image encoding for export.
//!
//! Exports are PNG only: lossless, with the full alpha channel the
//! circle/rounded variants depend on.
//!
//! All operations are synchronous and single-threaded within WASM.

mod png;

pub use png::{encode_png, EncodeError};
