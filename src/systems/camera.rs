//! Camera update.
//!
//! Once per tick, after gameplay has moved things around and before the
//! render stage runs, the camera update:
//!
//! 1. finds the single entity carrying both [`Transform2D`] and [`Camera`];
//! 2. optionally applies the tick's [`ZoomInput`] to the camera zoom;
//! 3. bakes the zoom into the transform's scale and, when a [`ScreenSize`]
//!    exists, moves the pivot to the screen center;
//! 4. inverts the transform's world matrix and publishes it to
//!    [`CurrentView`] and to the camera itself.
//!
//! Zero cameras is not an error: the tick succeeds and nothing is written.
//! More than one camera fails with [`CameraError::AmbiguousEntity`].
//!
//! The update works on copies of the two components and writes them back only
//! after every step succeeded, so a failing tick changes nothing.
//!
//! # Schedule position
//!
//! Must run **after** every system that mutates transforms (including
//! [`propagate_transforms`](super::propagate_transforms::propagate_transforms))
//! and **before** [`collect_draw_list`](super::render::collect_draw_list).

use bevy_ecs::error::BevyError;
use bevy_ecs::prelude::*;
use glam::DVec2;
use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::components::camera::Camera;
use crate::components::transform2d::Transform2D;
use crate::error::CameraError;
use crate::resources::camerasettings::CameraSettings;
use crate::resources::currentview::CurrentView;
use crate::resources::screensize::ScreenSize;
use crate::resources::zoominput::ZoomInput;

/// State of the camera update between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CameraState {
    /// No camera resolved yet, or the last resolution failed.
    #[default]
    Uninitialized,
    /// `entity` was checked to carry both camera components.
    Active { entity: Entity },
}

/// Camera update with its cached camera entity.
///
/// The cache only remembers which entity was resolved last. Component data is
/// fetched by type from the world on every tick; the entity stays cached until
/// the query returns a different one.
#[derive(Debug, Default)]
pub struct CameraUpdate {
    state: CameraState,
}

impl CameraUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Cached camera entity, if any.
    pub fn cached_entity(&self) -> Option<Entity> {
        match self.state {
            CameraState::Active { entity } => Some(entity),
            CameraState::Uninitialized => None,
        }
    }

    /// Run one tick against `world`.
    pub fn update(&mut self, world: &mut World) -> Result<(), CameraError> {
        let mut query = world.query_filtered::<Entity, (With<Transform2D>, With<Camera>)>();
        let cameras: SmallVec<[Entity; 2]> = query.iter(world).collect();

        let entity = match cameras.as_slice() {
            [] => return Ok(()),
            [entity] => *entity,
            _ => {
                return Err(CameraError::AmbiguousEntity {
                    count: cameras.len(),
                });
            }
        };

        if self.cached_entity() != Some(entity) {
            self.cache_components(world, entity)?;
        }

        let settings = world
            .get_resource::<CameraSettings>()
            .copied()
            .unwrap_or_default();
        let screen = world.get_resource::<ScreenSize>().copied();

        let (Some(mut camera), Some(mut transform)) = (
            world.get::<Camera>(entity).cloned(),
            world.get::<Transform2D>(entity).cloned(),
        ) else {
            // components were removed after the entity was cached
            self.state = CameraState::Uninitialized;
            return Err(CameraError::NotFound {
                entity,
                component: "Camera/Transform2D",
            });
        };

        if settings.interactive_zoom {
            let delta = world
                .get_resource::<ZoomInput>()
                .map(|input| input.delta)
                .unwrap_or(0.0);
            if !delta.is_finite() {
                warn!("camera {entity}: ignoring non-finite zoom delta {delta}");
            } else if delta != 0.0 {
                camera.set_zoom(settings.apply_delta(camera.zoom(), delta))?;
            }
        }

        let zoom = camera.zoom();
        transform.set_scale(DVec2::splat(zoom));

        if settings.recenter_origin {
            if let Some(screen) = screen {
                transform.set_origin(screen.center());
            }
        }

        let world_matrix = transform.world_matrix();
        let det = world_matrix.matrix2.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(CameraError::DegenerateTransform { entity });
        }
        let view = world_matrix.inverse();
        camera.set_view(view);

        // Commit: nothing below can fail.
        if settings.interactive_zoom {
            if let Some(mut input) = world.get_resource_mut::<ZoomInput>() {
                input.take();
            }
        }
        if let Some(mut stored) = world.get_mut::<Transform2D>(entity) {
            *stored = transform;
        }
        if let Some(mut stored) = world.get_mut::<Camera>(entity) {
            *stored = camera;
        }
        world
            .get_resource_or_insert_with(CurrentView::default)
            .set(view);

        trace!("camera {entity}: zoom={zoom} view={view:?}");
        Ok(())
    }

    /// Resolve and cache `entity` as the camera.
    ///
    /// On failure the cache is cleared and the world is left untouched.
    pub fn cache_components(&mut self, world: &World, entity: Entity) -> Result<(), CameraError> {
        self.state = CameraState::Uninitialized;

        if entity == Entity::PLACEHOLDER {
            return Err(CameraError::NilEntity);
        }
        if world.get::<Camera>(entity).is_none() {
            return Err(CameraError::NotFound {
                entity,
                component: "Camera",
            });
        }
        if world.get::<Transform2D>(entity).is_none() {
            return Err(CameraError::NotFound {
                entity,
                component: "Transform2D",
            });
        }

        debug!("camera entity resolved: {entity}");
        self.state = CameraState::Active { entity };
        Ok(())
    }
}

/// Schedule entry point for [`CameraUpdate`].
pub fn camera_update(
    world: &mut World,
    mut updater: Local<CameraUpdate>,
) -> Result<(), BevyError> {
    updater.update(world)?;
    Ok(())
}
