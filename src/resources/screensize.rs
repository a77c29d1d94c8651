//! Screen size resource.
//!
//! Stores the render resolution in pixels. When present, the camera update
//! recenters the camera pivot on the middle of the screen.

use bevy_ecs::prelude::Resource;
use glam::DVec2;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl ScreenSize {
    /// Center of the screen in pixels.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.w as f64 / 2.0, self.h as f64 / 2.0)
    }
}
