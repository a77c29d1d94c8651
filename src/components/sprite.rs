use bevy_ecs::prelude::Component;
use glam::DVec2;

/// Drawable quad of `width` x `height` world units.
///
/// The anchor is normalized to the sprite size: `(0, 0)` is the top-left
/// corner, `(0.5, 0.5)` the center. The renderer translates by the negated
/// pixel anchor before applying the entity's world matrix.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f64,
    pub height: f64,
    pub anchor: DVec2,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            anchor: DVec2::ZERO,
        }
    }

    pub fn with_anchor(mut self, ax: f64, ay: f64) -> Self {
        self.anchor = DVec2::new(ax, ay);
        self
    }

    /// Anchor in sprite-local units.
    pub fn pixel_anchor(&self) -> DVec2 {
        DVec2::new(self.anchor.x * self.width, self.anchor.y * self.height)
    }
}
