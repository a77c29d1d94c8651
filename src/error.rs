//! Error types for the camera and transform subsystem.
//!
//! [`CameraError`] is returned by the camera update and by component setters
//! that validate their input. Every variant is recoverable: a failing tick
//! leaves the camera transform untouched and the next tick starts fresh.

use bevy_ecs::entity::Entity;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CameraError {
    /// More than one entity carries both `Transform2D` and `Camera`.
    #[error("multiple camera entities found ({count}), expected only one")]
    AmbiguousEntity { count: usize },

    /// A matching entity is missing one of the required components.
    #[error("{component} component not found on camera entity {entity}")]
    NotFound {
        entity: Entity,
        component: &'static str,
    },

    /// The entity handed to the cache step was a placeholder.
    #[error("camera entity cannot be nil")]
    NilEntity,

    /// A setter received a value outside its domain.
    #[error("invalid {name}: {value} (must be greater than 0)")]
    InvalidArgument { name: &'static str, value: f64 },

    /// The camera world matrix has no inverse.
    #[error("camera entity {entity} has a non-invertible world matrix")]
    DegenerateTransform { entity: Entity },
}

/// Errors raised while loading or saving the INI configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    Load(String),

    #[error("failed to save config file: {0}")]
    Save(String),

    #[error("invalid value for [{section}] {key}: {reason}")]
    Invalid {
        section: &'static str,
        key: &'static str,
        reason: String,
    },
}
