//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! Cropframe types, handling the conversion between Rust and JavaScript
//! data representations.

use cropframe_core::{OverlayShape, PixelFormat, SourceImage, TouchPhase};
use wasm_bindgen::prelude::*;

/// An image wrapper for JavaScript.
///
/// Pixel data is RGBA, 4 bytes per pixel, row-major - the same layout a
/// canvas `ImageData` uses, so buffers can move between the two without
/// repacking.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a
/// copy is made to JavaScript memory as a `Uint8Array`. The `free()`
/// method can be called to explicitly release WASM memory, but this is
/// optional as wasm-bindgen's finalizer will handle cleanup
/// automatically.
#[wasm_bindgen]
pub struct JsSourceImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsSourceImage {
    /// Create a new JsSourceImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> JsSourceImage {
        JsSourceImage {
            width,
            height,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsSourceImage {
    /// Create a JsSourceImage from a core SourceImage.
    ///
    /// RGB sources are widened to RGBA with an opaque alpha so the
    /// JavaScript side always sees the canvas layout.
    pub(crate) fn from_source(img: SourceImage) -> Self {
        match img.format {
            PixelFormat::Rgba8 => Self {
                width: img.width,
                height: img.height,
                pixels: img.pixels,
            },
            PixelFormat::Rgb8 => {
                let mut pixels = Vec::with_capacity(img.pixel_count() as usize * 4);
                for rgb in img.pixels.chunks_exact(3) {
                    pixels.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
                }
                Self {
                    width: img.width,
                    height: img.height,
                    pixels,
                }
            }
        }
    }

    /// Convert to a core SourceImage. Clones the pixel data.
    pub(crate) fn to_source(&self) -> SourceImage {
        SourceImage::new(
            self.width,
            self.height,
            PixelFormat::Rgba8,
            self.pixels.clone(),
        )
    }
}

/// Convert a u8 overlay shape value to the core OverlayShape enum.
///
/// Values:
/// - 0 = Rect (crop the full viewport)
/// - 1 = Square (centered square of the shorter viewport side)
/// - 2 = Circle (same crop as Square; the mask is a display concern)
///
/// Any other value defaults to Rect.
pub(crate) fn shape_from_u8(value: u8) -> OverlayShape {
    match value {
        1 => OverlayShape::Square,
        2 => OverlayShape::Circle,
        _ => OverlayShape::Rect, // Default
    }
}

/// Convert a u8 phase value to the core TouchPhase enum.
///
/// Values:
/// - 0 = Down
/// - 1 = Move
/// - 2 = Up
/// - 3 = Cancel
///
/// Any other value defaults to Move.
pub(crate) fn phase_from_u8(value: u8) -> TouchPhase {
    match value {
        0 => TouchPhase::Down,
        2 => TouchPhase::Up,
        3 => TouchPhase::Cancel,
        _ => TouchPhase::Move, // Default
    }
}
