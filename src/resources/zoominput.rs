//! Per-tick zoom input.
//!
//! Input polling lives outside this crate. Whatever reads the mouse wheel (or
//! a pinch gesture) writes the raw delta here before the camera update runs;
//! the camera update consumes it when interactive zoom is enabled in
//! [`CameraSettings`](super::camerasettings::CameraSettings).

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct ZoomInput {
    /// Scroll delta for this tick. Positive zooms in.
    pub delta: f64,
}

impl ZoomInput {
    /// Read and clear the delta.
    pub fn take(&mut self) -> f64 {
        std::mem::take(&mut self.delta)
    }
}
