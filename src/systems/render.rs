use bevy_ecs::prelude::*;
use glam::DAffine2;

use crate::components::sprite::Sprite;
use crate::components::transform2d::Transform2D;
use crate::components::zindex::ZIndex;
use crate::resources::currentview::CurrentView;
use crate::resources::drawlist::{DrawCommand, DrawList};

/// Build the [`DrawList`] for this tick.
///
/// Every sprite gets `view · world · T(-anchor)`: the anchor is moved to the
/// entity's local origin, the entity's world matrix places it in the scene,
/// and the camera view maps the scene to the screen. Without a published view
/// the identity is used, so world and screen coordinates coincide.
///
/// Entries are ordered by [`ZIndex`] (missing counts as 0), ties broken by
/// entity so the order is stable across ticks.
///
/// A world without a `DrawList` gets one inserted through [`Commands`]; it is
/// visible once the schedule applies its deferred commands.
pub fn collect_draw_list(
    view: Option<Res<CurrentView>>,
    mut sprites: Query<(Entity, &mut Transform2D, &Sprite, Option<&ZIndex>)>,
    draw_list: Option<ResMut<DrawList>>,
    mut commands: Commands,
) {
    let view = view.map(|v| v.get_or_identity()).unwrap_or(DAffine2::IDENTITY);

    let mut draws: Vec<DrawCommand> = sprites
        .iter_mut()
        .map(|(entity, mut transform, sprite, z)| {
            let anchor = DAffine2::from_translation(-sprite.pixel_anchor());
            DrawCommand {
                entity,
                tex_key: sprite.tex_key.clone(),
                z: z.copied().unwrap_or_default().0,
                screen_matrix: view * transform.world_matrix() * anchor,
            }
        })
        .collect();
    draws.sort_by_key(|c| (c.z, c.entity));

    match draw_list {
        Some(mut draw_list) => draw_list.commands = draws,
        None => commands.insert_resource(DrawList { commands: draws }),
    }
}
