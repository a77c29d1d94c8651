//! Z-index component for draw ordering.
//!
//! Entities with higher values end up later in the
//! [`DrawList`](crate::resources::drawlist::DrawList) and are drawn on top.

use bevy_ecs::prelude::Component;

/// Rendering order hint. Entities without one sort as `ZIndex(0)`.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
