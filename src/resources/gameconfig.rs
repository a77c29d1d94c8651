//! Game configuration resource.
//!
//! Manages settings loaded from an INI configuration file. Provides defaults
//! for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [camera]
//! zoom = 1.0
//! recenter_origin = true
//! interactive_zoom = false
//! zoom_sensitivity = 0.1
//! min_zoom = 0.01
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::resources::camerasettings::{
    CameraSettings, DEFAULT_MIN_ZOOM, DEFAULT_ZOOM_SENSITIVITY,
};
use crate::resources::screensize::ScreenSize;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_ZOOM: f64 = 1.0;
const DEFAULT_RECENTER_ORIGIN: bool = true;
const DEFAULT_INTERACTIVE_ZOOM: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Settings read from the INI file. Converted into [`ScreenSize`] and
/// [`CameraSettings`] resources at startup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Initial camera zoom.
    pub zoom: f64,
    pub recenter_origin: bool,
    pub interactive_zoom: bool,
    pub zoom_sensitivity: f64,
    pub min_zoom: f64,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid(section: &'static str, key: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        section,
        key,
        reason: reason.into(),
    }
}

fn get_positive_float(
    config: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<Option<f64>, ConfigError> {
    match config.getfloat(section, key) {
        Ok(Some(value)) if value > 0.0 => Ok(Some(value)),
        Ok(Some(value)) => Err(invalid(section, key, format!("{value} is not positive"))),
        Ok(None) => Ok(None),
        Err(e) => Err(invalid(section, key, e)),
    }
}

fn get_u32(
    config: &Ini,
    section: &'static str,
    key: &'static str,
) -> Result<Option<u32>, ConfigError> {
    match config.getuint(section, key) {
        Ok(Some(value)) => u32::try_from(value)
            .map(Some)
            .map_err(|_| invalid(section, key, format!("{value} does not fit in 32 bits"))),
        Ok(None) => Ok(None),
        Err(e) => Err(invalid(section, key, e)),
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            zoom: DEFAULT_ZOOM,
            recenter_origin: DEFAULT_RECENTER_ORIGIN,
            interactive_zoom: DEFAULT_INTERACTIVE_ZOOM,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            min_zoom: DEFAULT_MIN_ZOOM,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values. Values that fail to parse
    /// or break an invariant (non-positive zoom) are reported as errors and
    /// leave the configuration unchanged.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| ConfigError::Load(format!("{}: {}", self.config_path.display(), e)))?;
        self.apply_ini(&config)
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config.read(text.to_string()).map_err(ConfigError::Load)?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), ConfigError> {
        let mut next = self.clone();

        // [render] section
        if let Some(width) = get_u32(config, "render", "width")? {
            next.render_width = width;
        }
        if let Some(height) = get_u32(config, "render", "height")? {
            next.render_height = height;
        }

        // [camera] section
        if let Some(zoom) = get_positive_float(config, "camera", "zoom")? {
            next.zoom = zoom;
        }
        if let Some(recenter) = config
            .getbool("camera", "recenter_origin")
            .map_err(|e| invalid("camera", "recenter_origin", e))?
        {
            next.recenter_origin = recenter;
        }
        if let Some(interactive) = config
            .getbool("camera", "interactive_zoom")
            .map_err(|e| invalid("camera", "interactive_zoom", e))?
        {
            next.interactive_zoom = interactive;
        }
        if let Some(sensitivity) = config
            .getfloat("camera", "zoom_sensitivity")
            .map_err(|e| invalid("camera", "zoom_sensitivity", e))?
        {
            next.zoom_sensitivity = sensitivity;
        }
        if let Some(min_zoom) = get_positive_float(config, "camera", "min_zoom")? {
            next.min_zoom = min_zoom;
        }

        *self = next;

        info!(
            "Loaded config: {}x{} render, zoom={}, recenter_origin={}, \
             interactive_zoom={}, sensitivity={}, min_zoom={}",
            self.render_width,
            self.render_height,
            self.zoom,
            self.recenter_origin,
            self.interactive_zoom,
            self.zoom_sensitivity,
            self.min_zoom
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), ConfigError> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        // [camera] section
        config.set("camera", "zoom", Some(self.zoom.to_string()));
        config.set("camera", "recenter_origin", Some(self.recenter_origin.to_string()));
        config.set("camera", "interactive_zoom", Some(self.interactive_zoom.to_string()));
        config.set("camera", "zoom_sensitivity", Some(self.zoom_sensitivity.to_string()));
        config.set("camera", "min_zoom", Some(self.min_zoom.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| ConfigError::Save(e.to_string()))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set render resolution.
    pub fn set_render_size(&mut self, width: u32, height: u32) {
        self.render_width = width;
        self.render_height = height;
    }

    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize {
            w: self.render_width,
            h: self.render_height,
        }
    }

    pub fn camera_settings(&self) -> CameraSettings {
        CameraSettings {
            recenter_origin: self.recenter_origin,
            interactive_zoom: self.interactive_zoom,
            zoom_sensitivity: self.zoom_sensitivity,
            min_zoom: self.min_zoom,
        }
    }
}
