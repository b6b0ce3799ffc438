//! The gesture-to-transform controller.
//!
//! `GestureController` owns the pan/zoom state for one viewport. It
//! consumes snapshots of active touch contacts and maintains a transform
//! from source-image space to display space, under two hard constraints:
//!
//! - the scaled image always fully covers the viewport rectangle
//! - the scale stays within `[min_scale, max_scale]`, where `min_scale`
//!   is the cover scale computed at reset and `max_scale` is a fixed
//!   multiple of it
//!
//! Clamping is scale-first: translation bounds depend on the scale that
//! is actually in effect.
//!
//! The controller has no notion of drawing or platform events. A host
//! feeds it `TouchPoint` snapshots and asks for `transform()` when it
//! renders; `handle_event` returns whether a redraw is needed.

use crate::config::{ConfigError, CropConfig};
use crate::geometry::{fit_viewport, Extent, Rect, Transform};
use crate::gesture::touch::{TouchPhase, TouchPoint};

/// The maximum scale as a multiple of the cover scale.
pub const MAX_SCALE_MULTIPLIER: f32 = 8.0;

/// Pair spans below this many pixels produce no scale change.
const MIN_PINCH_SPAN: f32 = 1e-3;

/// Stateful pan/zoom controller for a fixed viewport.
#[derive(Debug, Clone)]
pub struct GestureController {
    config: CropConfig,
    source: Extent,
    display: Extent,
    viewport: Extent,
    effective_ratio: f32,
    min_scale: f32,
    max_scale: f32,
    transform: Transform,
    /// Contacts from the previous event, ascending by id.
    tracked: Vec<TouchPoint>,
    /// Reused buffer for the incoming snapshot.
    snapshot: Vec<TouchPoint>,
}

impl GestureController {
    /// Create a controller with the given configuration.
    ///
    /// The controller starts in the degenerate state; call `reset_for`
    /// once source and display extents are known.
    pub fn new(config: CropConfig) -> Self {
        Self {
            config,
            source: Extent::default(),
            display: Extent::default(),
            viewport: Extent::default(),
            effective_ratio: 0.0,
            min_scale: 1.0,
            max_scale: 1.0,
            transform: Transform::IDENTITY,
            tracked: Vec::new(),
            snapshot: Vec::new(),
        }
    }

    /// Recompute the viewport and reset the transform to fit-and-center.
    ///
    /// Called whenever a new image is loaded or the display surface is
    /// laid out. The effective ratio is the configured one, falling back
    /// to the source aspect when unset, then to the display aspect when
    /// there is no source either. With a non-degenerate source the
    /// transform becomes the cover scale with the image centered on the
    /// display; otherwise it is the identity and gesture updates are
    /// no-ops until the next reset.
    ///
    /// Calling this twice with identical arguments yields an identical
    /// state. Any in-flight gesture tracking is dropped.
    pub fn reset_for(&mut self, source: Extent, display: Extent) {
        self.source = source;
        self.display = display;
        self.tracked.clear();
        self.snapshot.clear();

        self.effective_ratio = if self.config.aspect_ratio() > 0.0 {
            self.config.aspect_ratio()
        } else if !source.is_empty() {
            source.aspect_ratio()
        } else {
            // Nothing to derive a ratio from; let the viewport fill the
            // display so layout stays visible.
            display.aspect_ratio()
        };
        self.viewport = fit_viewport(display, self.effective_ratio);

        if source.is_empty() || self.viewport.is_empty() {
            self.transform = Transform::IDENTITY;
            self.min_scale = 1.0;
            self.max_scale = 1.0;
            return;
        }

        let cover = (self.viewport.width as f32 / source.width as f32)
            .max(self.viewport.height as f32 / source.height as f32);
        self.min_scale = cover;
        self.max_scale = cover * MAX_SCALE_MULTIPLIER;
        self.transform = Transform {
            scale: cover,
            translate_x: (display.width as f32 - source.width as f32 * cover) / 2.0,
            translate_y: (display.height as f32 - source.height as f32 * cover) / 2.0,
        };
    }

    /// Replace the configured aspect ratio.
    ///
    /// Does not touch the viewport or transform; callers invoke
    /// `reset_for` afterwards. The viewport is never resized mid-gesture.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAspectRatio` for a negative or
    /// non-finite ratio.
    pub fn set_aspect_ratio(&mut self, ratio: f32) -> Result<(), ConfigError> {
        self.config.set_aspect_ratio(ratio)
    }

    /// Consume one snapshot of active contacts.
    ///
    /// Returns true if the transform changed and the host should redraw.
    ///
    /// Contacts are matched to the previous snapshot by id. One contact
    /// pans; two or more pinch, with the two lowest ids as the reference
    /// pair and any contacts beyond the configured limit ignored. An
    /// empty snapshot ends the gesture; `Cancel` additionally discards
    /// tracking without looking at the points.
    pub fn handle_event(&mut self, points: &[TouchPoint], phase: TouchPhase) -> bool {
        if phase == TouchPhase::Cancel {
            self.tracked.clear();
            self.snapshot.clear();
            return false;
        }

        self.snapshot.clear();
        self.snapshot.extend_from_slice(points);
        self.snapshot.sort_unstable_by_key(|p| p.id);
        self.snapshot.dedup_by_key(|p| p.id);
        self.snapshot.truncate(self.config.max_touch_points());

        let before = self.transform;
        match self.snapshot.len() {
            0 => {}
            1 => self.apply_pan(),
            _ => self.apply_pinch(),
        }
        self.clamp_transform();

        std::mem::swap(&mut self.tracked, &mut self.snapshot);
        self.transform != before
    }

    /// The current source-to-display transform. Pure read.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The viewport extent computed at the last reset.
    pub fn viewport(&self) -> Extent {
        self.viewport
    }

    /// The viewport rectangle, centered in the display.
    pub fn viewport_rect(&self) -> Rect {
        Rect::centered_in(self.display, self.viewport)
    }

    /// The current effective aspect ratio.
    pub fn aspect_ratio(&self) -> f32 {
        self.effective_ratio
    }

    /// The cover scale computed at the last reset.
    pub fn min_scale(&self) -> f32 {
        self.min_scale
    }

    /// The zoom ceiling computed at the last reset.
    pub fn max_scale(&self) -> f32 {
        self.max_scale
    }

    /// Single-contact drag: translate by the contact's movement.
    fn apply_pan(&mut self) {
        if self.source.is_empty() {
            return;
        }
        let current = self.snapshot[0];
        if let Some(previous) = self.tracked.iter().find(|p| p.id == current.id) {
            self.transform.translate_x += current.x - previous.x;
            self.transform.translate_y += current.y - previous.y;
        }
    }

    /// Two-contact pinch: rescale by the span ratio and keep the source
    /// point under the pair midpoint anchored.
    fn apply_pinch(&mut self) {
        if self.source.is_empty() {
            return;
        }
        let a = self.snapshot[0];
        let b = self.snapshot[1];
        let previous_a = self.tracked.iter().find(|p| p.id == a.id).copied();
        let previous_b = self.tracked.iter().find(|p| p.id == b.id).copied();
        let (previous_a, previous_b) = match (previous_a, previous_b) {
            (Some(pa), Some(pb)) => (pa, pb),
            // The reference pair just formed; there is no motion yet.
            _ => return,
        };

        let previous_span = previous_a.distance_to(previous_b);
        let current_span = a.distance_to(b);
        let old = self.transform;

        // Coincident contacts give no usable ratio; keep the scale.
        let scale = if previous_span > MIN_PINCH_SPAN && current_span > MIN_PINCH_SPAN {
            (old.scale * current_span / previous_span).clamp(self.min_scale, self.max_scale)
        } else {
            old.scale
        };
        let factor = scale / old.scale;

        // Re-derive the translation so the source point that sat under
        // the previous pair midpoint sits under the current one. This
        // covers both the anchoring of a pure spread and the pan of a
        // two-finger drag in a single step.
        let (previous_mid_x, previous_mid_y) = previous_a.midpoint(previous_b);
        let (mid_x, mid_y) = a.midpoint(b);
        self.transform = Transform {
            scale,
            translate_x: mid_x - (previous_mid_x - old.translate_x) * factor,
            translate_y: mid_y - (previous_mid_y - old.translate_y) * factor,
        };
    }

    /// Clamp the scale to its bounds, then the translation so the scaled
    /// image still contains the viewport on both axes.
    fn clamp_transform(&mut self) {
        self.transform.scale = self.transform.scale.clamp(self.min_scale, self.max_scale);

        if self.source.is_empty() || self.viewport.is_empty() {
            return;
        }

        let vp = self.viewport_rect();
        let scaled_width = self.source.width as f32 * self.transform.scale;
        let scaled_height = self.source.height as f32 * self.transform.scale;

        // The image spans [translate, translate + scaled]; it must reach
        // both viewport edges. Rounding can leave the lower bound a hair
        // above the upper one at exactly the cover scale.
        let min_x = (vp.right() - scaled_width).min(vp.left);
        let min_y = (vp.bottom() - scaled_height).min(vp.top);
        self.transform.translate_x = self.transform.translate_x.clamp(min_x, vp.left);
        self.transform.translate_y = self.transform.translate_y.clamp(min_y, vp.top);
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
