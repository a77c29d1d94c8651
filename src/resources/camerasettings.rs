//! Behaviour toggles for the camera update.
//!
//! Missing resource means [`CameraSettings::default`].

use bevy_ecs::prelude::Resource;

pub const DEFAULT_ZOOM_SENSITIVITY: f64 = 0.1;
pub const DEFAULT_MIN_ZOOM: f64 = 0.01;

#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct CameraSettings {
    /// Move the camera pivot to the screen center when a
    /// [`ScreenSize`](super::screensize::ScreenSize) resource exists.
    pub recenter_origin: bool,
    /// Apply [`ZoomInput`](super::zoominput::ZoomInput) deltas to the zoom.
    pub interactive_zoom: bool,
    /// Multiplier applied to the raw zoom delta.
    pub zoom_sensitivity: f64,
    /// Interactive zoom never goes below this value. Must be positive.
    pub min_zoom: f64,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            recenter_origin: true,
            interactive_zoom: false,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            min_zoom: DEFAULT_MIN_ZOOM,
        }
    }
}

impl CameraSettings {
    /// Zoom after applying a raw input delta, clamped to `min_zoom`.
    pub fn apply_delta(&self, zoom: f64, delta: f64) -> f64 {
        (zoom + delta * self.zoom_sensitivity).max(self.min_zoom)
    }
}
