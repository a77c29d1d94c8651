//! World matrix propagation for parent-child entity hierarchies.
//!
//! A [`Transform2D`] on an entity with a [`ChildOf`] parent is local to that
//! parent. This system pushes every parent's world matrix into its children,
//! walking each tree parent-before-child, so a later `world_matrix()` call on
//! any entity returns `parent_world · local`.
//!
//! An entity is treated as a root when it has no parent, or when its parent
//! carries no `Transform2D`. Roots get an identity parent matrix, which makes
//! their world matrix equal to their local matrix.
//!
//! Only entities whose parent matrix actually changed get their world cache
//! invalidated; untouched subtrees keep their cached matrices.
//!
//! # Schedule position
//!
//! Should run **after** all systems that mutate transforms and **before** the
//! [`camera_update`](super::camera::camera_update) and render stages.

use bevy_ecs::hierarchy::{ChildOf, Children};
use bevy_ecs::prelude::*;
use glam::DAffine2;

use crate::components::transform2d::Transform2D;

pub fn propagate_transforms(
    candidates: Query<(Entity, Option<&ChildOf>), With<Transform2D>>,
    children_query: Query<&Children>,
    mut transforms: Query<&mut Transform2D>,
) {
    let roots: Vec<Entity> = candidates
        .iter()
        .filter(|(_, child_of)| match child_of {
            Some(child_of) => !transforms.contains(child_of.parent()),
            None => true,
        })
        .map(|(entity, _)| entity)
        .collect();

    for root in roots {
        let Ok(mut transform) = transforms.get_mut(root) else {
            continue;
        };
        transform.set_parent_matrix(DAffine2::IDENTITY);
        let root_world = transform.world_matrix();

        propagate_children(root_world, root, &children_query, &mut transforms);
    }
}

fn propagate_children(
    parent_world: DAffine2,
    parent: Entity,
    children_query: &Query<&Children>,
    transforms: &mut Query<&mut Transform2D>,
) {
    let Ok(children) = children_query.get(parent) else {
        return;
    };

    for child in children.iter() {
        let Ok(mut transform) = transforms.get_mut(child) else {
            // Subtrees below a transform-less entity are handled as new roots.
            continue;
        };
        transform.set_parent_matrix(parent_world);
        let child_world = transform.world_matrix();

        propagate_children(child_world, child, children_query, transforms);
    }
}
