//! ECS components for entities.
//!
//! Submodules overview:
//! - [`camera`] – zoom and viewport size of the scene camera
//! - [`sprite`] – drawable quad with a normalized anchor
//! - [`transform2d`] – position/scale/origin/rotation with cached affine matrices
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod camera;
pub mod sprite;
pub mod transform2d;
pub mod zindex;
