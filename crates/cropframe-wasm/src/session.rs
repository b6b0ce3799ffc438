//! WASM bindings for the crop session.
//!
//! `CropSessionHandle` is the thin adapter a web host drives: it feeds
//! pointer events in as parallel primitive arrays (no per-event object
//! marshalling), reads the transform back as a structured value for
//! canvas rendering, and triggers crops.
//!
//! # Usage
//!
//! ```typescript
//! const session = new CropSessionHandle(1.0, 2);
//! session.set_display_size(canvas.width, canvas.height);
//! session.set_image(image);
//!
//! // inside the pointer handler
//! const dirty = session.handle_touch(PHASE_MOVE, ids, xs, ys);
//! if (dirty) {
//!   const { scale, translate_x, translate_y } = session.transform();
//!   ctx.setTransform(scale, 0, 0, scale, translate_x, translate_y);
//!   ctx.drawImage(bitmap, 0, 0);
//! }
//!
//! const cropped = session.crop();
//! ```

use cropframe_core::{CropConfig, CropSession, Extent, TouchPoint};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::types::{phase_from_u8, shape_from_u8, JsSourceImage};

/// The transform as JavaScript sees it.
#[derive(Serialize)]
struct TransformJs {
    scale: f32,
    translate_x: f32,
    translate_y: f32,
}

/// The viewport rectangle as JavaScript sees it.
#[derive(Serialize)]
struct ViewportJs {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

/// A crop session exported to JavaScript.
#[wasm_bindgen]
pub struct CropSessionHandle {
    inner: CropSession,
    /// Reused buffer for incoming touch snapshots.
    points: Vec<TouchPoint>,
}

#[wasm_bindgen]
impl CropSessionHandle {
    /// Create a session.
    ///
    /// # Arguments
    /// * `aspect_ratio` - Viewport aspect ratio; 0 derives it from the image
    /// * `max_touch_points` - Simultaneous contacts to track (usually 2)
    ///
    /// # Errors
    ///
    /// Throws for a negative or non-finite ratio, or a zero touch limit.
    #[wasm_bindgen(constructor)]
    pub fn new(aspect_ratio: f32, max_touch_points: usize) -> Result<CropSessionHandle, JsValue> {
        let config = CropConfig::new(aspect_ratio, max_touch_points)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(CropSessionHandle {
            inner: CropSession::new(config),
            points: Vec::new(),
        })
    }

    /// Declare the display surface size. Resets pan/zoom to fit-and-center.
    pub fn set_display_size(&mut self, width: u32, height: u32) {
        self.inner.set_display_extent(Extent::new(width, height));
    }

    /// Load an image into the session. Resets pan/zoom to fit-and-center.
    pub fn set_image(&mut self, image: &JsSourceImage) {
        self.inner.set_image(Some(image.to_source()));
    }

    /// Clear the loaded image; `crop()` returns undefined afterwards.
    pub fn clear_image(&mut self) {
        self.inner.set_image(None);
    }

    /// Feed one touch snapshot.
    ///
    /// `ids`, `xs`, and `ys` are parallel arrays of the currently active
    /// contacts; extra entries past the shortest array are ignored.
    /// `phase` uses the numeric mapping: 0 down, 1 move, 2 up, 3 cancel.
    ///
    /// Returns true when the transform changed and a redraw is needed.
    pub fn handle_touch(&mut self, phase: u8, ids: &[u32], xs: &[f32], ys: &[f32]) -> bool {
        let count = ids.len().min(xs.len()).min(ys.len());
        self.points.clear();
        for i in 0..count {
            self.points.push(TouchPoint::new(ids[i], xs[i], ys[i]));
        }
        self.inner.handle_touch(&self.points, phase_from_u8(phase))
    }

    /// The current source-to-display transform as
    /// `{ scale, translate_x, translate_y }`.
    pub fn transform(&self) -> Result<JsValue, JsValue> {
        let t = self.inner.transform();
        serde_wasm_bindgen::to_value(&TransformJs {
            scale: t.scale,
            translate_x: t.translate_x,
            translate_y: t.translate_y,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The viewport rectangle as `{ left, top, width, height }`.
    pub fn viewport(&self) -> Result<JsValue, JsValue> {
        let vp = self.inner.viewport_rect();
        serde_wasm_bindgen::to_value(&ViewportJs {
            left: vp.left,
            top: vp.top,
            width: vp.width,
            height: vp.height,
        })
        .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current viewport width. May be 0 before the first layout pass.
    #[wasm_bindgen(getter)]
    pub fn viewport_width(&self) -> u32 {
        self.inner.viewport_width()
    }

    /// Current viewport height. May be 0 before the first layout pass.
    #[wasm_bindgen(getter)]
    pub fn viewport_height(&self) -> u32 {
        self.inner.viewport_height()
    }

    /// Native aspect ratio of the loaded image, or 0 when none.
    #[wasm_bindgen(getter)]
    pub fn image_ratio(&self) -> f32 {
        self.inner.image_ratio()
    }

    /// Current viewport aspect ratio.
    #[wasm_bindgen(getter)]
    pub fn viewport_ratio(&self) -> f32 {
        self.inner.viewport_ratio()
    }

    /// Set the viewport aspect ratio; 0 re-derives it from the image.
    ///
    /// # Errors
    ///
    /// Throws for a negative or non-finite ratio.
    pub fn set_viewport_ratio(&mut self, ratio: f32) -> Result<(), JsValue> {
        self.inner
            .set_viewport_ratio(ratio)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Select the overlay shape: 0 rect, 1 square, 2 circle.
    pub fn set_overlay_shape(&mut self, shape: u8) {
        self.inner.set_overlay_shape(shape_from_u8(shape));
    }

    /// Crop the framed region out of the loaded image.
    ///
    /// Returns undefined when no image is loaded - an expected state,
    /// not an error.
    pub fn crop(&self) -> Option<JsSourceImage> {
        self.inner.crop().map(JsSourceImage::from_source)
    }
}
