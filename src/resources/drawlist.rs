//! Render-stage output.
//!
//! Filled by [`collect_draw_list`](crate::systems::render::collect_draw_list)
//! each tick. A backend walks the entries in order and draws each sprite with
//! its screen matrix.

use bevy_ecs::prelude::{Entity, Resource};
use glam::DAffine2;

#[derive(Clone, Debug)]
pub struct DrawCommand {
    pub entity: Entity,
    pub tex_key: String,
    pub z: i32,
    /// Maps sprite-local points (top-left at 0,0) to screen space.
    pub screen_matrix: DAffine2,
}

/// Draw commands sorted by z-index, back to front.
#[derive(Resource, Clone, Debug, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn get(&self, entity: Entity) -> Option<&DrawCommand> {
        self.commands.iter().find(|c| c.entity == entity)
    }
}
