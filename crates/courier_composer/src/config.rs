//! Scroller tuning (courier.toml `[scroller]` table or a standalone file)
//!
//! Pixel and acceleration values are given at a UI scale of 1.0 and scaled
//! by [`ScrollerConfig::scale`] when read through the accessor methods.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use courier_animation::BringInParams;

use crate::error::{ConfigError, Result};

/// Tuning constants for the combined scroller
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ScrollerConfig {
    /// UI scale factor applied to every pixel-valued constant
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Bring-in phase-1 acceleration per pixel of displacement
    #[serde(default = "default_bring_in_accel")]
    pub bring_in_accel: f32,
    /// Bring-in phase-2 deceleration per pixel of displacement
    #[serde(default = "default_bring_in_decel")]
    pub bring_in_decel: f32,
    /// Seconds of in-flight velocity added to the acceleration scale when a
    /// bring-in interrupts another motion
    #[serde(default = "default_bring_in_adjust_time")]
    pub bring_in_adjust_time: f32,
    /// Fling deceleration in px/s²
    #[serde(default = "default_drag_decel")]
    pub drag_decel: f32,
    /// Slop before a slide becomes a drag
    #[serde(default = "default_padding_px")]
    pub drag_threshold_px: i32,
    /// Margin kept between the caret and the viewport edges
    #[serde(default = "default_padding_px")]
    pub caret_padding_px: i32,
    /// Seconds a backed-up position overrides resolves
    #[serde(default = "default_caret_backup_timeout")]
    pub caret_backup_timeout: f64,
    /// Debounce for body content resizes, seconds
    #[serde(default = "default_content_resize_delay")]
    pub content_resize_delay: f64,
    /// Delay before the first measurement, seconds
    #[serde(default = "default_initialize_delay")]
    pub initialize_delay: f64,
}

fn default_scale() -> f32 {
    1.0
}

fn default_bring_in_accel() -> f32 {
    20.0
}

fn default_bring_in_decel() -> f32 {
    10.0
}

fn default_bring_in_adjust_time() -> f32 {
    0.1
}

fn default_drag_decel() -> f32 {
    5000.0
}

fn default_padding_px() -> i32 {
    15
}

fn default_caret_backup_timeout() -> f64 {
    0.5
}

fn default_content_resize_delay() -> f64 {
    0.1
}

fn default_initialize_delay() -> f64 {
    0.8
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            bring_in_accel: default_bring_in_accel(),
            bring_in_decel: default_bring_in_decel(),
            bring_in_adjust_time: default_bring_in_adjust_time(),
            drag_decel: default_drag_decel(),
            drag_threshold_px: default_padding_px(),
            caret_padding_px: default_padding_px(),
            caret_backup_timeout: default_caret_backup_timeout(),
            content_resize_delay: default_content_resize_delay(),
            initialize_delay: default_initialize_delay(),
        }
    }
}

impl ScrollerConfig {
    /// Defaults at the given UI scale
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ScrollerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded scroller config");
        Ok(config)
    }

    /// Serialize to a TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the motion solvers cannot work with
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("scale", f64::from(self.scale)),
            ("bring_in_accel", f64::from(self.bring_in_accel)),
            ("bring_in_decel", f64::from(self.bring_in_decel)),
            ("drag_decel", f64::from(self.drag_decel)),
            ("content_resize_delay", self.content_resize_delay),
            ("initialize_delay", self.initialize_delay),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        let non_negative = [
            ("bring_in_adjust_time", f64::from(self.bring_in_adjust_time)),
            ("caret_backup_timeout", self.caret_backup_timeout),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }

        if self.drag_threshold_px < 0 {
            return Err(ConfigError::Invalid(format!(
                "drag_threshold_px must not be negative, got {}",
                self.drag_threshold_px
            )));
        }
        if self.caret_padding_px < 0 {
            return Err(ConfigError::Invalid(format!(
                "caret_padding_px must not be negative, got {}",
                self.caret_padding_px
            )));
        }

        Ok(())
    }

    /// Bring-in solver tuning at the configured scale
    pub fn bring_in_params(&self) -> BringInParams {
        BringInParams {
            accel: self.bring_in_accel * self.scale,
            decel: self.bring_in_decel * self.scale,
        }
    }

    /// Fling deceleration at the configured scale
    pub fn fling_decel(&self) -> f32 {
        self.drag_decel * self.scale
    }

    pub fn drag_threshold(&self) -> i32 {
        self.scale_px(self.drag_threshold_px)
    }

    pub fn caret_padding(&self) -> i32 {
        self.scale_px(self.caret_padding_px)
    }

    fn scale_px(&self, px: i32) -> i32 {
        (px as f32 * self.scale).round() as i32
    }
}
