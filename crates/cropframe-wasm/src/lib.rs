//! Cropframe WASM - WebAssembly bindings for Cropframe
//!
//! This crate provides WASM bindings to expose the cropframe-core
//! engine to JavaScript/TypeScript applications. All gesture and crop
//! logic lives in the core crate; this layer only adapts types across
//! the boundary.
//!
//! # Module Structure
//!
//! - `session` - The exported crop session driven by pointer events
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { CropSessionHandle, JsSourceImage } from '@cropframe/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new CropSessionHandle(0.0, 2);
//! session.set_display_size(canvas.width, canvas.height);
//! session.set_image(new JsSourceImage(w, h, rgbaBytes));
//! ```

use wasm_bindgen::prelude::*;

mod session;
mod types;

// Re-export public types
pub use session::CropSessionHandle;
pub use types::JsSourceImage;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
