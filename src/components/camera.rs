//! Camera component.
//!
//! Holds the zoom factor and an optional viewport size for the single camera
//! entity. The entity must also carry a
//! [`Transform2D`](super::transform2d::Transform2D); the
//! [`camera_update`](crate::systems::camera::camera_update) system bakes the zoom
//! into that transform and publishes the inverted world matrix as the view.

use bevy_ecs::prelude::Component;
use glam::{DAffine2, DVec2};

use crate::error::CameraError;

/// Axis-aligned rectangle in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Component, Clone, Debug)]
pub struct Camera {
    size: DVec2,
    zoom: f64,
    /// Last view matrix published for this camera.
    view: Option<DAffine2>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            size: DVec2::ZERO,
            zoom: 1.0,
            view: None,
        }
    }
}

impl Camera {
    /// Camera with zoom 1 and an empty viewport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Camera with an explicit viewport size and zoom.
    pub fn new_with(size: DVec2, zoom: f64) -> Result<Self, CameraError> {
        let mut camera = Self {
            size,
            ..Self::default()
        };
        camera.set_zoom(zoom)?;
        Ok(camera)
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Set the zoom factor. Fails for zero, negative and NaN values.
    pub fn set_zoom(&mut self, zoom: f64) -> Result<(), CameraError> {
        // written so NaN is rejected too
        if !(zoom > 0.0) {
            return Err(CameraError::InvalidArgument {
                name: "zoom",
                value: zoom,
            });
        }
        self.zoom = zoom;
        Ok(())
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn set_size(&mut self, size: DVec2) {
        if self.size == size {
            return;
        }
        self.size = size;
    }

    /// Viewport rectangle of `size`, centered on the origin.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            x: -self.size.x / 2.0,
            y: -self.size.y / 2.0,
            width: self.size.x,
            height: self.size.y,
        }
    }

    pub fn view(&self) -> Option<DAffine2> {
        self.view
    }

    pub(crate) fn set_view(&mut self, view: DAffine2) {
        self.view = Some(view);
    }
}
