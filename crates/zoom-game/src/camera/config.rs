//! Zoom configuration

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use crate::error::ConfigError;
use crate::input::PAUSE_KEY;

/// Zoom configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// FOV in degrees to zoom to
    pub zoom_amount: f32,
    /// Key that activates the zoom
    pub keybind: KeyCode,
    /// Press once to zoom, again to unzoom (false = zoom while held)
    pub toggle_mode: bool,
    /// Smoothing time in seconds for the zoom animation
    pub zoom_speed: f32,
    /// Animate FOV changes instead of snapping
    pub enable_animation: bool,
    /// Scroll sensitivity while zooming
    pub scroll_sensitivity: f32,
    /// Lowest FOV scroll zoom may reach
    pub min_fov_cap: f32,
    /// Highest FOV scroll zoom may reach
    pub max_fov_cap: f32,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            zoom_amount: 20.0,
            keybind: KeyCode::KeyC,
            toggle_mode: false,
            zoom_speed: 0.1,
            enable_animation: true,
            scroll_sensitivity: 0.25,
            min_fov_cap: 0.2,
            max_fov_cap: 130.0,
        }
    }
}

impl ZoomConfig {
    /// Check that the values can drive the controller without producing NaN or panicking
    pub fn validate(&self) -> Result<(), ConfigError> {
        let values = [
            ("zoom_amount", self.zoom_amount),
            ("zoom_speed", self.zoom_speed),
            ("scroll_sensitivity", self.scroll_sensitivity),
            ("min_fov_cap", self.min_fov_cap),
            ("max_fov_cap", self.max_fov_cap),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite(name));
            }
        }

        if self.zoom_speed < 0.0 {
            return Err(ConfigError::Negative("zoom_speed"));
        }
        if self.scroll_sensitivity < 0.0 {
            return Err(ConfigError::Negative("scroll_sensitivity"));
        }
        if self.min_fov_cap <= 0.0 {
            return Err(ConfigError::NonPositiveCap(self.min_fov_cap));
        }
        if self.keybind == PAUSE_KEY {
            return Err(ConfigError::ReservedKey(self.keybind));
        }
        if self.min_fov_cap > self.max_fov_cap {
            return Err(ConfigError::CapsOutOfOrder {
                min: self.min_fov_cap,
                max: self.max_fov_cap,
            });
        }
        Ok(())
    }

    /// Clamp a FOV value into the configured caps
    pub fn clamp_fov(&self, fov: f32) -> f32 {
        fov.clamp(self.min_fov_cap, self.max_fov_cap)
    }
}
