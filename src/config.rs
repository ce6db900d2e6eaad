use std::{collections::BTreeMap, path::{Path, PathBuf}, time::Duration};

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    host::{CanvasType, ComplicationSlot, ComplicationSlotsManager, SurfaceHolder},
    style::UserStyle,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(
        "Surface {width}x{height} must be non-empty and at most {} pixels",
        MAX_SURFACE_PIXELS
    )]
    InvalidSurface { width: u32, height: u32 },
}

/// Largest surface the bundled host will allocate a frame buffer for.
pub const MAX_SURFACE_PIXELS: u32 = 4096 * 4096;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub id: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Settings for the bundled host. Every field is optional in the JSON file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub width: u32,
    pub height: u32,
    /// Overrides the face's own frame interval
    pub frame_interval_ms: Option<u64>,
    /// Read `<asset_dir>/gauge.bmp` instead of the bundled gauge
    pub asset_dir: Option<PathBuf>,
    pub canvas_type: CanvasType,
    pub complication_slots: Vec<SlotConfig>,
    /// Style selected when the face starts
    pub style: BTreeMap<String, String>,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            width: 454,
            height: 454,
            frame_interval_ms: None,
            asset_dir: None,
            canvas_type: CanvasType::default(),
            complication_slots: vec![],
            style: BTreeMap::new(),
        }
    }
}

impl FaceConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.width.checked_mul(self.height) {
            Some(pixels) if pixels > 0 && pixels <= MAX_SURFACE_PIXELS => Ok(()),
            _ => Err(ConfigError::InvalidSurface {
                width: self.width,
                height: self.height,
            }),
        }
    }

    pub fn surface(&self) -> SurfaceHolder {
        SurfaceHolder::new(Size::new(self.width, self.height))
    }

    pub fn frame_interval(&self) -> Option<Duration> {
        self.frame_interval_ms.map(Duration::from_millis)
    }

    pub fn complications(&self) -> ComplicationSlotsManager {
        ComplicationSlotsManager::new(
            self.complication_slots
                .iter()
                .map(|slot| ComplicationSlot {
                    id: slot.id,
                    bounds: Rectangle::new(
                        Point::new(slot.x, slot.y),
                        Size::new(slot.width, slot.height),
                    ),
                })
                .collect(),
        )
    }

    pub fn initial_style(&self) -> UserStyle {
        UserStyle {
            selections: self.style.clone(),
        }
    }
}
