use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    canvas::viewport::ScaleOp,
    config::color::Color,
    foundation::error::{ViewError, ViewResult},
};

/// Read-only canvas settings, consumed once by [`crate::Canvas::new`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Scale applied to a freshly loaded image when the caller has no better choice.
    pub initial_scale: ScaleOp,
    /// Backdrop painted by [`crate::Canvas::clear`].
    pub background: Background,
    /// Overlay text appearance.
    pub text: TextConfig,
    /// Zoom step and limits.
    pub zoom: ZoomConfig,
    /// Pan step, in percent of the window dimension along the move axis.
    pub move_step_percent: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_scale: ScaleOp::FitOr100,
            background: Background::default(),
            text: TextConfig::default(),
            zoom: ZoomConfig::default(),
            move_step_percent: 10,
        }
    }
}

/// Window backdrop policy.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// Fill with a single color.
    Solid(Color),
    /// Alternating square tiles, as commonly used to reveal transparency.
    Grid(GridConfig),
}

impl Default for Background {
    fn default() -> Self {
        Self::Grid(GridConfig::default())
    }
}

/// Checkerboard parameters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridConfig {
    /// Tile edge in logical pixels (multiplied by the window scale).
    pub size: u32,
    /// Color of tiles where `(col + row)` is even.
    pub even: Color,
    /// Color of the remaining tiles.
    pub odd: Color,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 10,
            even: Color::rgb(0x33, 0x33, 0x33),
            odd: Color::rgb(0x4c, 0x4c, 0x4c),
        }
    }
}

/// Overlay text appearance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Foreground color.
    pub color: Color,
    /// Shadow color, drawn one (scaled) pixel down-right of the text.
    pub shadow: Option<Color>,
    /// Font face and size.
    pub font: FontConfig,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: Color::rgb(0xcc, 0xcc, 0xcc),
            shadow: Some(Color::rgba(0, 0, 0, 0xa0)),
            font: FontConfig::default(),
        }
    }
}

/// Font selection for overlay text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontConfig {
    /// TrueType/OpenType file. `None` disables text overlays.
    pub path: Option<PathBuf>,
    /// Pixel size at window scale 1.
    pub size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: 14.0,
        }
    }
}

/// Zoom step and limits for [`ScaleOp::ZoomIn`] / [`ScaleOp::ZoomOut`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ZoomConfig {
    /// Multiplier per zoom step, must be > 1.
    pub step: f64,
    /// Smallest scale reachable by zooming out.
    pub min: f64,
    /// Largest scale reachable by zooming in.
    pub max: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: 1.1,
            min: 0.001,
            max: 100.0,
        }
    }
}

impl Config {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> ViewResult<Self> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ViewError::config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ViewResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check every setting against its allowed range.
    pub fn validate(&self) -> ViewResult<()> {
        if self.initial_scale.is_relative() {
            return Err(ViewError::validation(
                "initial_scale must be an absolute scale (not zoom_in/zoom_out)",
            ));
        }
        if let Background::Grid(grid) = self.background
            && grid.size == 0
        {
            return Err(ViewError::validation("background grid size must be > 0"));
        }
        if !(self.text.font.size.is_finite() && self.text.font.size > 0.0) {
            return Err(ViewError::validation("text font size must be > 0"));
        }
        let zoom = self.zoom;
        if !(zoom.step.is_finite() && zoom.step > 1.0) {
            return Err(ViewError::validation("zoom step must be > 1"));
        }
        if !(zoom.min.is_finite() && zoom.min > 0.0) {
            return Err(ViewError::validation("zoom min must be > 0"));
        }
        if !(zoom.max.is_finite() && zoom.max > zoom.min) {
            return Err(ViewError::validation("zoom max must be > zoom min"));
        }
        if !(1..=100).contains(&self.move_step_percent) {
            return Err(ViewError::validation(
                "move_step_percent must be within 1..=100",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
