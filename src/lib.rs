//! Affine view library.
//!
//! 2D transforms with cached affine matrices, a singleton camera, and the
//! per-tick systems that turn the camera into the view matrix the render
//! stage consumes. Built on `bevy_ecs`.

pub mod components;
pub mod error;
pub mod resources;
pub mod systems;
