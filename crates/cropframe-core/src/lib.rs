//! Cropframe Core - pan/zoom crop engine
//!
//! This crate provides the core cropping functionality for Cropframe:
//! a gesture-driven pan/zoom controller for a fixed viewport, and the
//! extractor that copies the framed pixel window out of the source
//! image. It is renderer-agnostic and platform-free; hosts adapt their
//! own pointer events and drawing on top of it.
//!
//! # Architecture
//!
//! - [`config`] - viewport geometry policy and its validation
//! - [`geometry`] - extents, rectangles, and the pan/zoom transform
//! - [`bitmap`] - the pixel container and `image` crate conversions
//! - [`gesture`] - touch tracking and the transform controller
//! - [`extract`] - rendering the framed window into a new image
//! - [`session`] - the composition root a platform adapter talks to
//!
//! Everything is single-threaded and synchronous; `handle_touch` is
//! cheap enough for once-per-input-frame calls, and `crop` allocates
//! one buffer proportional to the viewport area.

pub mod bitmap;
pub mod config;
pub mod extract;
pub mod geometry;
pub mod gesture;
pub mod session;

pub use bitmap::{PixelFormat, SourceImage};
pub use config::{ConfigError, CropConfig};
pub use extract::{extract_crop, extraction_rect};
pub use geometry::{Extent, Rect, Transform};
pub use gesture::{GestureController, TouchPhase, TouchPoint, MAX_SCALE_MULTIPLIER};
pub use session::CropSession;

/// Shape of the dark overlay framing the viewport.
///
/// The shape only changes what `crop` copies for `Square` and `Circle`
/// (the centered square of the viewport's shorter side); a circle is
/// masked at display time, never cropped to a disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum OverlayShape {
    /// The full viewport rectangle. The default.
    #[default]
    Rect,
    /// A centered square of side `min(width, height)`.
    Square,
    /// Same crop region as `Square`; the round mask is drawn, not cut.
    Circle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_shape_default() {
        assert_eq!(OverlayShape::default(), OverlayShape::Rect);
    }

    /// Full flow: configure, lay out, load, pinch, pan, crop.
    #[test]
    fn test_end_to_end_crop() {
        let mut session = CropSession::new(CropConfig::new(1.0, 2).unwrap());
        session.set_display_extent(Extent::new(400, 200));
        session.set_image(Some(SourceImage::new(
            800,
            400,
            PixelFormat::Rgb8,
            vec![90u8; 800 * 400 * 3],
        )));

        session.handle_touch(
            &[TouchPoint::new(0, 150.0, 100.0), TouchPoint::new(1, 250.0, 100.0)],
            TouchPhase::Down,
        );
        session.handle_touch(
            &[TouchPoint::new(0, 100.0, 100.0), TouchPoint::new(1, 300.0, 100.0)],
            TouchPhase::Move,
        );
        session.handle_touch(&[], TouchPhase::Up);

        session.handle_touch(&[TouchPoint::new(2, 200.0, 100.0)], TouchPhase::Down);
        session.handle_touch(&[TouchPoint::new(2, 230.0, 90.0)], TouchPhase::Move);
        session.handle_touch(&[], TouchPhase::Up);

        let result = session.crop().unwrap();
        assert_eq!(result.width, 200);
        assert_eq!(result.height, 200);
        assert_eq!(result.pixels[0], 90);
    }
}
