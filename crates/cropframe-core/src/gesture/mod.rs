//! Touch input handling for the crop viewport.
//!
//! This module turns raw multi-touch snapshots into a pan/zoom transform:
//!
//! - One contact pans the image under the viewport
//! - Two contacts pinch-zoom around the pair midpoint
//! - Contacts beyond the configured limit are ignored, lowest ids first
//!
//! The controller is renderer-agnostic: it never touches a canvas or a
//! platform event type. Hosts adapt their own pointer events into
//! `TouchPoint` snapshots and render with the transform it reports.

mod controller;
mod touch;

pub use controller::{GestureController, MAX_SCALE_MULTIPLIER};
pub use touch::{TouchPhase, TouchPoint};
