//! Geometry primitives for the crop engine.
//!
//! All display-space values are in pixels with the origin at the top-left
//! corner. The transform is translation plus uniform scale only; there is
//! no rotation or skew anywhere in the engine.
//!
//! # Coordinate System
//!
//! - Source space: pixel coordinates of the loaded image
//! - Display space: pixel coordinates of the on-screen surface
//! - `display = source * scale + translate`

use serde::{Deserialize, Serialize};

/// Integer dimensions of an image or display surface.
///
/// A zero width or height marks the extent as empty: "no image loaded"
/// for sources, "layout has not happened yet" for displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Extent {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Extent {
    /// Create a new extent.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Width over height, or 0.0 for an empty extent.
    pub fn aspect_ratio(self) -> f32 {
        if self.is_empty() {
            0.0
        } else {
            self.width as f32 / self.height as f32
        }
    }
}

/// An axis-aligned rectangle in display space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle from its top-left corner and size.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A rectangle of the given size centered inside `outer`.
    ///
    /// Margins are halved in integer arithmetic, so an odd leftover pixel
    /// lands on the right/bottom edge. `size` is not clipped to `outer`;
    /// callers pass a size that already fits.
    pub fn centered_in(outer: Extent, size: Extent) -> Self {
        Self {
            left: (outer.width.saturating_sub(size.width) / 2) as f32,
            top: (outer.height.saturating_sub(size.height) / 2) as f32,
            width: size.width as f32,
            height: size.height as f32,
        }
    }

    /// The x coordinate of the right edge.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// The y coordinate of the bottom edge.
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// The center point of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Translation plus uniform scale mapping source space to display space.
///
/// This is the controller's entire mutable state. The scale is always
/// positive for a non-degenerate source; the identity transform doubles
/// as the neutral value when no image is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f32,
    /// Horizontal translation in display pixels.
    pub translate_x: f32,
    /// Vertical translation in display pixels.
    pub translate_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// The neutral transform: scale 1, no translation.
    pub const IDENTITY: Transform = Transform {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    /// Map a source-space point to display space.
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x * self.scale + self.translate_x,
            y * self.scale + self.translate_y,
        )
    }

    /// Map a display-space point back to source space.
    ///
    /// The scale must be non-zero; the controller never stores a zero
    /// scale.
    pub fn invert(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.translate_x) / self.scale,
            (y - self.translate_y) / self.scale,
        )
    }
}

/// Compute the viewport extent for a display and an aspect ratio.
///
/// The viewport is the largest rectangle of the requested ratio that fits
/// inside the display: width-constrained when the ratio is wider than the
/// display, height-constrained otherwise. Each side is at least 1 pixel
/// for a non-empty display.
///
/// Returns an empty extent for an empty display or a non-positive ratio.
///
/// # Example
///
/// ```ignore
/// // Square viewport inside a landscape display
/// let vp = fit_viewport(Extent::new(400, 200), 1.0);
/// assert_eq!((vp.width, vp.height), (200, 200));
/// ```
pub fn fit_viewport(display: Extent, aspect_ratio: f32) -> Extent {
    if display.is_empty() || !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
        return Extent::default();
    }

    let display_aspect = display.aspect_ratio();
    if aspect_ratio > display_aspect {
        let height = (display.width as f32 / aspect_ratio).round() as u32;
        Extent::new(display.width, height.clamp(1, display.height))
    } else {
        let width = (display.height as f32 * aspect_ratio).round() as u32;
        Extent::new(width.clamp(1, display.width), display.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extent_empty() {
        assert!(Extent::new(0, 100).is_empty());
        assert!(Extent::new(100, 0).is_empty());
        assert!(Extent::default().is_empty());
        assert!(!Extent::new(1, 1).is_empty());
    }

    #[test]
    fn test_extent_aspect_ratio() {
        assert_eq!(Extent::new(200, 100).aspect_ratio(), 2.0);
        assert_eq!(Extent::new(100, 200).aspect_ratio(), 0.5);
        assert_eq!(Extent::new(0, 100).aspect_ratio(), 0.0);
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
        assert_eq!(rect.center(), (60.0, 45.0));
    }

    #[test]
    fn test_rect_centered_in() {
        let rect = Rect::centered_in(Extent::new(400, 200), Extent::new(200, 100));
        assert_eq!(rect.left, 100.0);
        assert_eq!(rect.top, 50.0);
        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 100.0);
    }

    #[test]
    fn test_rect_centered_in_odd_margin() {
        // 401 - 200 = 201, halved in integer arithmetic
        let rect = Rect::centered_in(Extent::new(401, 200), Extent::new(200, 200));
        assert_eq!(rect.left, 100.0);
        assert_eq!(rect.top, 0.0);
    }

    #[test]
    fn test_transform_apply_invert_roundtrip() {
        let transform = Transform {
            scale: 2.5,
            translate_x: -40.0,
            translate_y: 12.0,
        };
        let (dx, dy) = transform.apply(100.0, 60.0);
        let (sx, sy) = transform.invert(dx, dy);
        assert!((sx - 100.0).abs() < 1e-4);
        assert!((sy - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_transform_identity() {
        let (x, y) = Transform::IDENTITY.apply(33.0, 44.0);
        assert_eq!((x, y), (33.0, 44.0));
        assert_eq!(Transform::default(), Transform::IDENTITY);
    }

    #[test]
    fn test_fit_viewport_square_in_landscape() {
        let vp = fit_viewport(Extent::new(400, 200), 1.0);
        assert_eq!((vp.width, vp.height), (200, 200));
    }

    #[test]
    fn test_fit_viewport_square_in_portrait() {
        let vp = fit_viewport(Extent::new(200, 400), 1.0);
        assert_eq!((vp.width, vp.height), (200, 200));
    }

    #[test]
    fn test_fit_viewport_wide_ratio() {
        // Ratio wider than the display: width-constrained
        let vp = fit_viewport(Extent::new(400, 400), 2.0);
        assert_eq!((vp.width, vp.height), (400, 200));
    }

    #[test]
    fn test_fit_viewport_matching_ratio_fills_display() {
        let vp = fit_viewport(Extent::new(400, 200), 2.0);
        assert_eq!((vp.width, vp.height), (400, 200));
    }

    #[test]
    fn test_fit_viewport_degenerate_inputs() {
        assert!(fit_viewport(Extent::default(), 1.0).is_empty());
        assert!(fit_viewport(Extent::new(400, 200), 0.0).is_empty());
        assert!(fit_viewport(Extent::new(400, 200), -1.0).is_empty());
        assert!(fit_viewport(Extent::new(400, 200), f32::NAN).is_empty());
    }

    #[test]
    fn test_fit_viewport_extreme_ratio_keeps_one_pixel() {
        let vp = fit_viewport(Extent::new(400, 200), 10_000.0);
        assert_eq!(vp.width, 400);
        assert_eq!(vp.height, 1);

        let vp = fit_viewport(Extent::new(400, 200), 0.0001);
        assert_eq!(vp.width, 1);
        assert_eq!(vp.height, 200);
    }

    #[test]
    fn test_fit_viewport_never_exceeds_display() {
        for ratio in [0.1, 0.5, 1.0, 1.5, 2.0, 8.0] {
            let vp = fit_viewport(Extent::new(317, 211), ratio);
            assert!(vp.width <= 317);
            assert!(vp.height <= 211);
        }
    }
}
