//! Engine systems.
//!
//! Submodules overview
//! - [`camera`] – resolve the camera entity, apply zoom and publish the view matrix
//! - [`propagate_transforms`] – push parent world matrices down entity hierarchies
//! - [`render`] – compose view and world matrices into per-sprite draw commands
//!
//! Per-tick order: gameplay, `propagate_transforms`, `camera_update`,
//! `collect_draw_list`. [`tick_schedule`] builds exactly that chain.

use bevy_ecs::prelude::*;

pub mod camera;
pub mod propagate_transforms;
pub mod render;

/// Schedule running the transform, camera and render stages in order.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            propagate_transforms::propagate_transforms,
            camera::camera_update,
            render::collect_draw_list,
        )
            .chain(),
    );
    schedule
}
