//! Configuration structures and loading logic.

use std::path::{Path, PathBuf};

use glyph_layout_core::metrics::FontMetrics;
use serde::{Deserialize, Serialize};

/// Top-level configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub font: FontConfig,
    pub urls: UrlConfig,
}

/// Line breaking and alignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Line width budget in pixels.
    pub max_line_width: f32,
    /// Zoom on top of the font size (GUI scale).
    pub scale: f32,
    /// Distance between baselines in pixels, used for text extent and hit testing.
    pub height_per_line: f32,
    pub word_wrap: bool,
    pub h_center: bool,
    pub v_center: bool,
    /// Drop the oldest lines once the text grows taller than this (chat logs).
    pub max_height: Option<f32>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_line_width: 320.0,
            scale: 1.0,
            height_per_line: 20.0,
            word_wrap: true,
            h_center: false,
            v_center: false,
            max_height: None,
        }
    }
}

impl LayoutConfig {
    /// Returns `scale`, or 1.0 when it is not a positive number.
    pub fn effective_scale(&self) -> f32 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }

    /// Returns `max_line_width` clamped to at least one pixel.
    pub fn effective_max_line_width(&self) -> f32 {
        self.max_line_width.max(1.0)
    }
}

/// Font selection and metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// OpenType font file. Without one, text is laid out unshaped on a
    /// fixed cell grid.
    pub path: Option<PathBuf>,
    pub size: f32,
    /// OpenType features to enable/disable during text shaping.
    ///
    /// Each string is a 4-character feature tag, optionally prefixed with `-`
    /// to disable. Examples: `"calt"`, `"liga"`, `"-dlig"`.
    pub features: Vec<String>,
    /// Pixel advance of one column for unshaped text.
    pub cell_advance: i32,
    /// Line height of the font in pixels.
    pub max_height: f32,
    /// Tallest glyph of the font in pixels.
    pub glyph_max_height: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: 16.0,
            features: vec!["calt".into(), "liga".into()],
            cell_advance: 8,
            max_height: 20.0,
            glyph_max_height: 16.0,
        }
    }
}

impl FontConfig {
    pub fn metrics(&self) -> FontMetrics {
        FontMetrics {
            max_height: self.max_height,
            glyph_max_height: self.glyph_max_height,
        }
    }
}

/// Link detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlConfig {
    /// Flag URLs in laid-out text so clicks on them can be resolved.
    pub detect: bool,
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self { detect: true }
    }
}

impl Config {
    /// Load config from `path`, returning an error message on failure.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let data = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
        toml::from_str(&data).map_err(|e| format!("parse error in {}: {e}", path.display()))
    }

    /// Load config from `path`, falling back to defaults.
    ///
    /// A missing file is silently ignored; any other failure is logged.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("config: loaded from {}", path.display());
                config
            }
            Err(e) => {
                if path.exists() {
                    log::warn!("config: {e}");
                }
                Self::default()
            }
        }
    }
}
