//! Avatarcrop WASM - WebAssembly bindings for Avatarcrop
//!
//! This crate binds the avatarcrop-core compositor to the browser. The
//! host page owns the canvases and event listeners; this crate owns all
//! of the state and geometry.
//!
//! # Module Structure
//!
//! - `compositor` - The stateful [`WasmCompositor`] handle
//! - `download` - Blob/anchor download with a new-tab fallback
//! - `types` - WASM-compatible wrapper types for raster data
//!
//! # Usage
//!
//! ```typescript
//! import init, { WasmCompositor } from '@avatarcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const comp = new WasmCompositor();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! comp.load_image(bytes, file.name);
//! comp.save(1); // download the circle-masked PNG
//! ```

use wasm_bindgen::prelude::*;

mod compositor;
mod download;
mod types;

// Re-export public types
pub use compositor::WasmCompositor;
pub use types::JsRaster;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
