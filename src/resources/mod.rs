//! ECS resources made available to systems.
//!
//! Overview
//! - `camerasettings` – behaviour toggles for the camera update
//! - `currentview` – the published view matrix read by the render stage
//! - `drawlist` – per-tick draw commands produced for a rendering backend
//! - `gameconfig` – INI-backed configuration
//! - `screensize` – current render resolution in pixels
//! - `zoominput` – per-tick zoom delta from input polling
pub mod camerasettings;
pub mod currentview;
pub mod drawlist;
pub mod gameconfig;
pub mod screensize;
pub mod zoominput;
