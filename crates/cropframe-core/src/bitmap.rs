//! Pixel containers for the crop engine.
//!
//! `SourceImage` is the engine's own image type: a tightly packed,
//! row-major byte buffer plus dimensions and a pixel format. Decoding
//! bytes into pixels is out of scope here; the conversions at the bottom
//! of this module are the boundary to the `image` crate for callers that
//! already hold a decoded image.

use image::{DynamicImage, RgbImage, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::geometry::Extent;

/// Pixel layout of a `SourceImage` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PixelFormat {
    /// 8-bit RGB, 3 bytes per pixel.
    Rgb8,
    /// 8-bit RGBA, 4 bytes per pixel. The fixed fallback format for
    /// sources whose own layout the engine does not keep.
    #[default]
    Rgba8,
}

impl PixelFormat {
    /// Bytes per pixel for this format.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Rgba8 => 4,
        }
    }
}

/// An image held in memory as raw pixel rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Pixel layout of `pixels`.
    pub format: PixelFormat,
    /// Pixel data in row-major order. Length is
    /// width * height * format.bytes_per_pixel().
    pub pixels: Vec<u8>,
}

impl SourceImage {
    /// Create a new image from dimensions, format, and pixel data.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * format.bytes_per_pixel(),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            format,
            pixels,
        }
    }

    /// The image dimensions as an `Extent`.
    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Create a SourceImage from an `image::RgbImage`.
    pub fn from_rgb_image(img: RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Rgb8,
            pixels: img.into_raw(),
        }
    }

    /// Create a SourceImage from an `image::RgbaImage`.
    pub fn from_rgba_image(img: RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            format: PixelFormat::Rgba8,
            pixels: img.into_raw(),
        }
    }

    /// Create a SourceImage from any `image::DynamicImage`.
    ///
    /// RGB input keeps its 3-byte layout; every other variant converts
    /// through the fixed 32-bit RGBA fallback.
    pub fn from_dynamic_image(img: DynamicImage) -> Self {
        match img {
            DynamicImage::ImageRgb8(rgb) => Self::from_rgb_image(rgb),
            other => Self::from_rgba_image(other.to_rgba8()),
        }
    }

    /// Convert to an `image::RgbImage` for further processing.
    ///
    /// Returns `None` unless the image is stored as `Rgb8`.
    pub fn to_rgb_image(&self) -> Option<RgbImage> {
        if self.format != PixelFormat::Rgb8 {
            return None;
        }
        RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Convert to an `image::RgbaImage` for further processing.
    ///
    /// Returns `None` unless the image is stored as `Rgba8`.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        if self.format != PixelFormat::Rgba8 {
            return None;
        }
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_per_pixel() {
        assert_eq!(PixelFormat::Rgb8.bytes_per_pixel(), 3);
        assert_eq!(PixelFormat::Rgba8.bytes_per_pixel(), 4);
    }

    #[test]
    fn test_source_image_creation() {
        let pixels = vec![0u8; 100 * 50 * 3];
        let img = SourceImage::new(100, 50, PixelFormat::Rgb8, pixels);

        assert_eq!(img.width, 100);
        assert_eq!(img.height, 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
        assert_eq!(img.extent(), Extent::new(100, 50));
        assert!(!img.is_empty());
    }

    #[test]
    fn test_source_image_empty() {
        let img = SourceImage::new(0, 0, PixelFormat::Rgba8, vec![]);
        assert!(img.is_empty());
    }

    #[test]
    fn test_rgb_image_roundtrip() {
        let rgb = RgbImage::from_raw(2, 2, vec![10u8; 2 * 2 * 3]).unwrap();
        let img = SourceImage::from_rgb_image(rgb);
        assert_eq!(img.format, PixelFormat::Rgb8);

        let back = img.to_rgb_image().unwrap();
        assert_eq!(back.dimensions(), (2, 2));
        assert!(img.to_rgba_image().is_none());
    }

    #[test]
    fn test_rgba_image_roundtrip() {
        let rgba = RgbaImage::from_raw(3, 1, vec![20u8; 3 * 4]).unwrap();
        let img = SourceImage::from_rgba_image(rgba);
        assert_eq!(img.format, PixelFormat::Rgba8);

        let back = img.to_rgba_image().unwrap();
        assert_eq!(back.dimensions(), (3, 1));
        assert!(img.to_rgb_image().is_none());
    }

    #[test]
    fn test_dynamic_image_keeps_rgb() {
        let rgb = RgbImage::from_raw(4, 4, vec![1u8; 4 * 4 * 3]).unwrap();
        let img = SourceImage::from_dynamic_image(DynamicImage::ImageRgb8(rgb));
        assert_eq!(img.format, PixelFormat::Rgb8);
    }

    #[test]
    fn test_dynamic_image_falls_back_to_rgba() {
        // Grayscale has no direct SourceImage layout; it lands on RGBA
        let gray = image::GrayImage::from_raw(4, 4, vec![128u8; 16]).unwrap();
        let img = SourceImage::from_dynamic_image(DynamicImage::ImageLuma8(gray));

        assert_eq!(img.format, PixelFormat::Rgba8);
        assert_eq!(img.byte_size(), 4 * 4 * 4);
        // Gray value replicated into RGB, alpha opaque
        assert_eq!(&img.pixels[0..4], &[128, 128, 128, 255]);
    }
}
