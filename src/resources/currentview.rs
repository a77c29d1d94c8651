//! Current view matrix resource.
//!
//! The camera update system overwrites this slot once per tick with the
//! inverse of the camera's world matrix. The render stage reads it to map
//! world-space geometry into screen space:
//! `screen = view · world · point`.

use bevy_ecs::prelude::Resource;
use glam::DAffine2;

/// Last published view matrix. `None` until a camera has been processed.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct CurrentView {
    view: Option<DAffine2>,
    /// Number of times a view has been published.
    pub writes: u64,
}

impl CurrentView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot with a new view matrix.
    pub fn set(&mut self, view: DAffine2) {
        self.view = Some(view);
        self.writes += 1;
    }

    pub fn get(&self) -> Option<DAffine2> {
        self.view
    }

    /// The published view, or identity when no camera has run yet.
    pub fn get_or_identity(&self) -> DAffine2 {
        self.view.unwrap_or(DAffine2::IDENTITY)
    }
}
