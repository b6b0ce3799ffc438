//! The crop session: controller, image, and overlay shape composed.
//!
//! `CropSession` is what a platform adapter talks to. It owns the
//! gesture controller, the optional source image, and the overlay shape
//! selection, and wires resets through the lifecycle events: a new
//! image, a display resize, or an aspect-ratio change all snap the
//! transform back to fit-and-center.
//!
//! The session draws nothing and dispatches nothing; hosts feed it
//! touch snapshots and render with `transform()`.

use crate::bitmap::SourceImage;
use crate::config::{ConfigError, CropConfig};
use crate::extract::extract_crop;
use crate::geometry::{Extent, Rect, Transform};
use crate::gesture::{GestureController, TouchPhase, TouchPoint};
use crate::OverlayShape;

/// A complete crop interaction over one image and one display surface.
#[derive(Debug, Clone)]
pub struct CropSession {
    controller: GestureController,
    image: Option<SourceImage>,
    shape: OverlayShape,
    display: Extent,
}

impl CropSession {
    /// Create a session with the given configuration and no image.
    pub fn new(config: CropConfig) -> Self {
        Self {
            controller: GestureController::new(config),
            image: None,
            shape: OverlayShape::default(),
            display: Extent::default(),
        }
    }

    /// Create a session with the default configuration: source-derived
    /// aspect ratio, two touch points.
    pub fn with_defaults() -> Self {
        Self::new(CropConfig::default())
    }

    /// Declare the display surface size. Called on layout and resize;
    /// resets the transform to fit-and-center.
    pub fn set_display_extent(&mut self, display: Extent) {
        self.display = display;
        self.reset();
    }

    /// Load a new source image, or clear it with `None`. Resets the
    /// transform to fit-and-center.
    pub fn set_image(&mut self, image: Option<SourceImage>) {
        self.image = image;
        self.reset();
    }

    /// The currently loaded image, if any.
    pub fn image(&self) -> Option<&SourceImage> {
        self.image.as_ref()
    }

    /// Remove and return the loaded image, leaving the session empty.
    pub fn take_image(&mut self) -> Option<SourceImage> {
        let image = self.image.take();
        self.reset();
        image
    }

    /// The native aspect ratio of the loaded image, or 0.0 when none.
    pub fn image_ratio(&self) -> f32 {
        self.image
            .as_ref()
            .map(|image| image.extent().aspect_ratio())
            .unwrap_or(0.0)
    }

    /// The aspect ratio of the viewport and crop rect.
    pub fn viewport_ratio(&self) -> f32 {
        self.controller.aspect_ratio()
    }

    /// Set the aspect ratio of the viewport and crop rect.
    ///
    /// 0.0 resolves to the native aspect ratio of the loaded image; with
    /// no image loaded it stays source-derived until the next reset with
    /// one. The viewport is recomputed and the transform reset
    /// immediately.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAspectRatio` for a negative or
    /// non-finite ratio; the session state is unchanged in that case.
    pub fn set_viewport_ratio(&mut self, ratio: f32) -> Result<(), ConfigError> {
        let resolved = if ratio == 0.0 { self.image_ratio() } else { ratio };
        self.controller.set_aspect_ratio(resolved)?;
        self.reset();
        Ok(())
    }

    /// Select the overlay shape used for cropping.
    pub fn set_overlay_shape(&mut self, shape: OverlayShape) {
        self.shape = shape;
    }

    /// The currently selected overlay shape.
    pub fn overlay_shape(&self) -> OverlayShape {
        self.shape
    }

    /// Forward one touch snapshot to the controller.
    ///
    /// Returns true if the transform changed and a redraw is needed.
    pub fn handle_touch(&mut self, points: &[TouchPoint], phase: TouchPhase) -> bool {
        self.controller.handle_event(points, phase)
    }

    /// The current source-to-display transform.
    pub fn transform(&self) -> Transform {
        self.controller.transform()
    }

    /// The viewport rectangle, centered in the display.
    pub fn viewport_rect(&self) -> Rect {
        self.controller.viewport_rect()
    }

    /// Current viewport width. May be 0 before the first layout pass.
    pub fn viewport_width(&self) -> u32 {
        self.controller.viewport().width
    }

    /// Current viewport height. May be 0 before the first layout pass.
    pub fn viewport_height(&self) -> u32 {
        self.controller.viewport().height
    }

    /// Synchronously crop the framed region out of the source image.
    ///
    /// Returns `None` when no image is loaded or the geometry is still
    /// degenerate; this is the expected steady state before a selection,
    /// not an error.
    pub fn crop(&self) -> Option<SourceImage> {
        let image = self.image.as_ref()?;
        extract_crop(
            image,
            self.controller.transform(),
            self.controller.viewport_rect(),
            self.shape,
        )
    }

    fn reset(&mut self) {
        let source = self
            .image
            .as_ref()
            .map(|image| image.extent())
            .unwrap_or_default();
        self.controller.reset_for(source, self.display);
    }
}
