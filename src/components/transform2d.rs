//! Affine 2D transform with lazily cached matrices.
//!
//! A [`Transform2D`] stores position, scale, origin (pivot) and rotation, and
//! derives two matrices from them:
//!
//! - the **local** matrix, mapping a point `p` in the entity's own space to
//!   `position + R(rotation) · S(scale) · (p - origin)`;
//! - the **world** matrix, the local matrix composed onto the parent's world
//!   matrix. Entities outside a hierarchy keep an identity parent, so their
//!   world matrix equals their local matrix.
//!
//! Both matrices are recomputed only when a setter actually changed a value.
//! Setters compare with exact equality; writing the current value again is a
//! no-op and leaves the caches valid.

use bevy_ecs::prelude::Component;
use glam::{DAffine2, DVec2};

/// Normalize an angle in degrees into `[0, 360)`. `None` for NaN and infinities.
pub fn normalize_degrees(degrees: f64) -> Option<f64> {
    if !degrees.is_finite() {
        return None;
    }
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    Some(if wrapped >= 360.0 { 0.0 } else { wrapped })
}

#[derive(Component, Clone, Debug)]
pub struct Transform2D {
    position: DVec2,
    scale: DVec2,
    origin: DVec2,
    degrees: f64,
    radians: f64,

    parent_matrix: DAffine2,
    local_matrix: DAffine2,
    world_matrix: DAffine2,

    local_dirty: bool,
    world_dirty: bool,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform2D {
    /// Transform at the origin with unit scale and no rotation.
    pub fn new() -> Self {
        Self::new_with(DVec2::ZERO, DVec2::ONE, DVec2::ZERO, 0.0)
    }

    /// Build a transform from explicit values. `degrees` is normalized; a
    /// non-finite angle becomes 0.
    pub fn new_with(position: DVec2, scale: DVec2, origin: DVec2, degrees: f64) -> Self {
        let degrees = normalize_degrees(degrees).unwrap_or(0.0);
        Self {
            position,
            scale,
            origin,
            degrees,
            radians: degrees.to_radians(),
            parent_matrix: DAffine2::IDENTITY,
            local_matrix: DAffine2::IDENTITY,
            world_matrix: DAffine2::IDENTITY,
            local_dirty: true,
            world_dirty: true,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn set_position(&mut self, position: DVec2) {
        if self.position == position {
            return;
        }
        self.position = position;
        self.mark_dirty();
    }

    pub fn scale(&self) -> DVec2 {
        self.scale
    }

    /// Set the scale. Components should be non-zero for the matrix to be invertible.
    pub fn set_scale(&mut self, scale: DVec2) {
        if self.scale == scale {
            return;
        }
        self.scale = scale;
        self.mark_dirty();
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: DVec2) {
        if self.origin == origin {
            return;
        }
        self.origin = origin;
        self.mark_dirty();
    }

    /// Rotation as `(degrees, radians)`, degrees in `[0, 360)`.
    pub fn rotation(&self) -> (f64, f64) {
        (self.degrees, self.radians)
    }

    /// Set the rotation in degrees. Any value is wrapped into `[0, 360)`
    /// before the no-op comparison, so 400 and 40 are the same rotation.
    /// NaN and infinite angles are ignored.
    pub fn set_rotation(&mut self, degrees: f64) {
        let Some(degrees) = normalize_degrees(degrees) else {
            return;
        };
        if self.degrees == degrees {
            return;
        }
        self.degrees = degrees;
        self.radians = degrees.to_radians();
        self.mark_dirty();
    }

    /// World matrix of the parent entity, identity for roots.
    pub fn parent_matrix(&self) -> DAffine2 {
        self.parent_matrix
    }

    /// Replace the parent's world matrix. Only the world cache is invalidated.
    pub fn set_parent_matrix(&mut self, parent: DAffine2) {
        if self.parent_matrix == parent {
            return;
        }
        self.parent_matrix = parent;
        self.world_dirty = true;
    }

    pub fn is_local_dirty(&self) -> bool {
        self.local_dirty
    }

    pub fn is_world_dirty(&self) -> bool {
        self.world_dirty
    }

    /// Local matrix, recomputed if any local value changed since the last call.
    pub fn local_matrix(&mut self) -> DAffine2 {
        if self.local_dirty {
            self.local_matrix = DAffine2::from_translation(self.position)
                * DAffine2::from_angle(self.radians)
                * DAffine2::from_scale(self.scale)
                * DAffine2::from_translation(-self.origin);
            self.local_dirty = false;
        }
        self.local_matrix
    }

    /// World matrix, recomputed if the local values or the parent changed.
    pub fn world_matrix(&mut self) -> DAffine2 {
        if self.world_dirty {
            self.world_matrix = self.parent_matrix * self.local_matrix();
            self.world_dirty = false;
        }
        self.world_matrix
    }

    fn mark_dirty(&mut self) {
        self.local_dirty = true;
        self.world_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: DVec2, b: DVec2) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    #[test]
    fn test_new_is_identity() {
        let mut t = Transform2D::new();
        assert!(t.is_local_dirty());
        assert!(t.is_world_dirty());
        assert_eq!(t.local_matrix(), DAffine2::IDENTITY);
        assert_eq!(t.world_matrix(), DAffine2::IDENTITY);
        assert!(!t.is_local_dirty());
        assert!(!t.is_world_dirty());
    }

    #[test]
    fn test_rotation_wraps_into_range() {
        let mut t = Transform2D::new();
        t.set_rotation(400.0);
        assert_eq!(t.rotation().0, 40.0);
        t.set_rotation(-10.0);
        assert_eq!(t.rotation().0, 350.0);
        t.set_rotation(360.0);
        assert_eq!(t.rotation().0, 0.0);
        t.set_rotation(-720.0);
        assert_eq!(t.rotation().0, 0.0);
    }

    #[test]
    fn test_non_finite_rotation_is_ignored() {
        let mut t = Transform2D::new();
        t.set_rotation(30.0);
        t.world_matrix();

        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            t.set_rotation(bad);
            assert_eq!(t.rotation().0, 30.0);
            assert!(!t.is_local_dirty());
            assert!(!t.is_world_dirty());
        }
        assert!(t.world_matrix().is_finite());

        let fresh = Transform2D::new_with(DVec2::ZERO, DVec2::ONE, DVec2::ZERO, f64::NAN);
        assert_eq!(fresh.rotation(), (0.0, 0.0));
    }

    #[test]
    fn test_rotation_radians_follow_degrees() {
        let mut t = Transform2D::new();
        t.set_rotation(90.0);
        let (deg, rad) = t.rotation();
        assert_eq!(deg, 90.0);
        assert!((rad - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
    }

    #[test]
    fn test_same_value_setters_keep_cache() {
        let mut t = Transform2D::new_with(
            DVec2::new(3.0, 4.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(1.0, 1.0),
            30.0,
        );
        let first = t.world_matrix();

        t.set_position(DVec2::new(3.0, 4.0));
        t.set_scale(DVec2::new(2.0, 2.0));
        t.set_origin(DVec2::new(1.0, 1.0));
        t.set_rotation(390.0);
        t.set_parent_matrix(DAffine2::IDENTITY);

        assert!(!t.is_local_dirty());
        assert!(!t.is_world_dirty());
        let second = t.world_matrix();
        assert_eq!(first.to_cols_array(), second.to_cols_array());
    }

    #[test]
    fn test_changed_value_marks_both_dirty() {
        let mut t = Transform2D::new();
        t.world_matrix();
        t.set_origin(DVec2::new(5.0, 0.0));
        assert!(t.is_local_dirty());
        assert!(t.is_world_dirty());
    }

    #[test]
    fn test_parent_change_only_dirties_world() {
        let mut t = Transform2D::new();
        t.world_matrix();
        t.set_parent_matrix(DAffine2::from_translation(DVec2::new(10.0, 0.0)));
        assert!(!t.is_local_dirty());
        assert!(t.is_world_dirty());
        let p = t.world_matrix().transform_point2(DVec2::ZERO);
        assert!(approx_eq(p, DVec2::new(10.0, 0.0)));
    }

    #[test]
    fn test_pivot_maps_to_position() {
        let cases = [
            (DVec2::new(100.0, 200.0), DVec2::new(1.0, 1.0), DVec2::ZERO, 0.0),
            (DVec2::new(-5.0, 7.5), DVec2::new(3.0, 0.5), DVec2::new(8.0, -2.0), 45.0),
            (DVec2::new(0.0, 0.0), DVec2::new(-1.0, 2.0), DVec2::new(16.0, 16.0), 270.0),
            (DVec2::new(12.0, -3.0), DVec2::new(0.25, 4.0), DVec2::new(-1.0, 1.0), 359.5),
        ];
        for (position, scale, origin, degrees) in cases {
            let mut t = Transform2D::new_with(position, scale, origin, degrees);
            let mapped = t.local_matrix().transform_point2(origin);
            assert!(
                approx_eq(mapped, position),
                "origin {origin:?} mapped to {mapped:?}, expected {position:?}"
            );
        }
    }

    #[test]
    fn test_local_matrix_composition_order() {
        // (1, 0) relative to the origin, scaled by 2, rotated 90 degrees, then moved
        let mut t = Transform2D::new_with(
            DVec2::new(10.0, 10.0),
            DVec2::new(2.0, 2.0),
            DVec2::new(1.0, 0.0),
            90.0,
        );
        let mapped = t.local_matrix().transform_point2(DVec2::new(2.0, 0.0));
        assert!(approx_eq(mapped, DVec2::new(10.0, 12.0)), "got {mapped:?}");
    }

    #[test]
    fn test_world_equals_local_without_parent() {
        let mut t = Transform2D::new_with(
            DVec2::new(4.0, -2.0),
            DVec2::new(1.5, 0.5),
            DVec2::new(2.0, 2.0),
            120.0,
        );
        let local = t.local_matrix();
        let world = t.world_matrix();
        assert!(local.abs_diff_eq(world, EPSILON));
    }

    #[test]
    fn test_double_inverse_round_trip() {
        let mut t = Transform2D::new_with(
            DVec2::new(-40.0, 13.0),
            DVec2::new(0.5, -3.0),
            DVec2::new(7.0, 9.0),
            215.0,
        );
        let world = t.world_matrix();
        let back = world.inverse().inverse();
        assert!(world.abs_diff_eq(back, EPSILON));
    }
}
