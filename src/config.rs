use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Color, Point, Size};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Options for a single seven-segment digit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphConfig {
    #[serde(alias = "s")]
    pub size: Size,
    /// Stroke width of every segment, in canvas pixels.
    #[serde(alias = "seg_w")]
    pub segment_width: i32,
    /// Fill behind the glyph; `None` draws no fill.
    #[serde(alias = "bg")]
    pub background: Option<Color>,
    pub on_color: Color,
    pub off_color: Color,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        GlyphConfig {
            size: Size::new(80, 100),
            segment_width: 4,
            background: None,
            on_color: Color::RED,
            off_color: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockConfig {
    /// Top-left corner of the first digit.
    pub position: Point,
    pub glyph: GlyphConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        ClockConfig {
            position: Point::new(200, 185),
            glyph: GlyphConfig {
                size: Size::new(30, 50),
                off_color: Color::rgb(0x73, 0x34, 0x34),
                ..GlyphConfig::default()
            },
        }
    }
}

/// Canvas pixels covered by one terminal cell. Each cell is split into an
/// upper and a lower half, so `height` should be even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CellSize {
    fn default() -> Self {
        CellSize { width: 8, height: 20 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CanvasSize {
    pub width: u16,
    pub height: u16,
}

impl Default for CanvasSize {
    fn default() -> Self {
        CanvasSize { width: 640, height: 480 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub canvas: CanvasSize,
    pub cell: CellSize,
    /// Color the canvas is cleared to before every frame.
    pub background: Color,
    /// Frame rate cap; 0 runs unthrottled.
    pub fps: u32,
    pub clock: ClockConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            canvas: CanvasSize::default(),
            cell: CellSize::default(),
            background: Color::rgb(0x36, 0x26, 0x26),
            fps: 30,
            clock: ClockConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the user config, falling back to defaults when it is missing or
    /// invalid.
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::from_path(&path) {
            Ok(config) => {
                log::info!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e}, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&json)
    }

    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn config_path() -> PathBuf {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        let mut path = PathBuf::from(home);
        path.push(".config");
        path.push("segment-clock");
        path.push("config.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = AppConfig::parse("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.fps, 30);
        assert_eq!(config.clock.glyph.size, Size::new(30, 50));
    }

    #[test]
    fn glyph_defaults() {
        let glyph = GlyphConfig::default();
        assert_eq!(glyph.size, Size::new(80, 100));
        assert_eq!(glyph.segment_width, 4);
        assert_eq!(glyph.background, None);
        assert_eq!(glyph.on_color, Color::RED);
        assert_eq!(glyph.off_color, Color::WHITE);
    }

    #[test]
    fn short_aliases_are_accepted() {
        let glyph: GlyphConfig =
            serde_json::from_str(r#"{"s":[40,60],"seg_w":2,"bg":"black"}"#).unwrap();
        assert_eq!(glyph.size, Size::new(40, 60));
        assert_eq!(glyph.segment_width, 2);
        assert_eq!(glyph.background, Some(Color::parse("black").unwrap()));
        assert_eq!(glyph.on_color, Color::RED);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(AppConfig::parse(r#"{"fsp":60}"#).is_err());
        assert!(serde_json::from_str::<GlyphConfig>(r#"{"colour":"red"}"#).is_err());
    }

    #[test]
    fn nested_overrides_keep_sibling_defaults() {
        let config =
            AppConfig::parse(r##"{"clock":{"position":[0,0],"glyph":{"on_color":"#00ff00"}}}"##)
                .unwrap();
        assert_eq!(config.clock.position, Point::new(0, 0));
        assert_eq!(config.clock.glyph.on_color, Color::rgb(0, 255, 0));
        // Glyph defaults come from GlyphConfig, not the demo clock.
        assert_eq!(config.clock.glyph.size, Size::new(80, 100));
        assert_eq!(config.canvas, CanvasSize::default());
    }

    #[test]
    fn reads_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"fps":10,"cell":{{"width":4,"height":8}}}}"#).unwrap();
        let config = AppConfig::from_path(file.path()).unwrap();
        assert_eq!(config.fps, 10);
        assert_eq!(config.cell, CellSize { width: 4, height: 8 });
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::from_path(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
