//! Crop extraction.
//!
//! Renders the pixel region framed by the viewport into a freshly
//! allocated image, using the same transform the controller reports for
//! display. Every output pixel is inverse-mapped to source space and
//! sampled bilinearly, so the result matches what was on screen inside
//! the viewport at the moment of the call, with no resampling beyond
//! what the transform's scale already implies.

use crate::bitmap::SourceImage;
use crate::geometry::{Rect, Transform};
use crate::OverlayShape;

/// The pixel rectangle a crop call copies out, in display space.
///
/// For `Rect` this is the viewport itself. `Square` and `Circle` force a
/// square of side `min(width, height)`, re-centered on the viewport
/// center; the circular mask is a display-time overlay concern, not a
/// pixel-level crop shape.
pub fn extraction_rect(viewport: Rect, shape: OverlayShape) -> Rect {
    match shape {
        OverlayShape::Rect => viewport,
        OverlayShape::Square | OverlayShape::Circle => {
            let side = viewport.width.min(viewport.height);
            let (center_x, center_y) = viewport.center();
            Rect {
                left: (center_x - side / 2.0).floor(),
                top: (center_y - side / 2.0).floor(),
                width: side,
                height: side,
            }
        }
    }
}

/// Extract the viewport's pixel window from the source image.
///
/// # Arguments
///
/// * `source` - Source image the transform maps into display space
/// * `transform` - The controller's current transform, unchanged
/// * `viewport` - The viewport rectangle, as the controller reports it
/// * `shape` - Overlay shape selecting the extraction rectangle
///
/// # Returns
///
/// A new image of exactly the extraction rectangle's dimensions in the
/// source's pixel format, or `None` when there is nothing to crop: an
/// empty source, a degenerate extraction rectangle, or a transform with
/// a non-positive scale.
///
/// The source image and the transform are never mutated.
pub fn extract_crop(
    source: &SourceImage,
    transform: Transform,
    viewport: Rect,
    shape: OverlayShape,
) -> Option<SourceImage> {
    if source.is_empty() {
        return None;
    }
    if !transform.scale.is_finite()
        || transform.scale <= 0.0
        || !transform.translate_x.is_finite()
        || !transform.translate_y.is_finite()
    {
        return None;
    }

    let rect = extraction_rect(viewport, shape);
    let out_width = rect.width.round() as u32;
    let out_height = rect.height.round() as u32;
    if out_width == 0 || out_height == 0 {
        return None;
    }

    let channels = source.format.bytes_per_pixel();
    let mut pixels = vec![0u8; out_width as usize * out_height as usize * channels];

    let scale = f64::from(transform.scale);
    let translate_x = f64::from(transform.translate_x);
    let translate_y = f64::from(transform.translate_y);

    for out_y in 0..out_height {
        let src_y = (f64::from(rect.top) + f64::from(out_y) - translate_y) / scale;
        let row_start = out_y as usize * out_width as usize * channels;

        for out_x in 0..out_width {
            let src_x = (f64::from(rect.left) + f64::from(out_x) - translate_x) / scale;
            let idx = row_start + out_x as usize * channels;
            sample_bilinear(source, src_x, src_y, &mut pixels[idx..idx + channels]);
        }
    }

    Some(SourceImage::new(out_width, out_height, source.format, pixels))
}

/// Sample a pixel using bilinear interpolation with edge clamping.
///
/// The viewport-coverage invariant keeps sample points inside the image;
/// clamping only absorbs the sub-pixel overshoot at the borders.
fn sample_bilinear(image: &SourceImage, x: f64, y: f64, out: &mut [u8]) {
    let max_x = (image.width - 1) as f64;
    let max_y = (image.height - 1) as f64;
    let x = x.clamp(0.0, max_x);
    let y = y.clamp(0.0, max_y);

    let x0 = x.floor() as usize;
    let y0 = y.floor() as usize;
    let x1 = (x0 + 1).min(image.width as usize - 1);
    let y1 = (y0 + 1).min(image.height as usize - 1);

    // Fractional distances
    let fx = x - x0 as f64;
    let fy = y - y0 as f64;

    let channels = out.len();
    let stride = image.width as usize * channels;
    let p00 = y0 * stride + x0 * channels;
    let p10 = y0 * stride + x1 * channels;
    let p01 = y1 * stride + x0 * channels;
    let p11 = y1 * stride + x1 * channels;

    // Bilinear interpolation formula
    for c in 0..channels {
        let v = f64::from(image.pixels[p00 + c]) * (1.0 - fx) * (1.0 - fy)
            + f64::from(image.pixels[p10 + c]) * fx * (1.0 - fy)
            + f64::from(image.pixels[p01 + c]) * (1.0 - fx) * fy
            + f64::from(image.pixels[p11 + c]) * fx * fy;
        out[c] = v.clamp(0.0, 255.0).round() as u8;
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
