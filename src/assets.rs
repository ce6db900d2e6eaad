use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::log;

/// Logical name of the gauge bitmap.
pub const GAUGE: &str = "gauge";

static GAUGE_BMP: &[u8] = include_bytes!("../assets/gauge.bmp");

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Asset '{0}' does not exist")]
    NotFound(String),
    #[error("Could not read asset '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Asset '{name}' is not a valid bitmap: {reason:?}")]
    Decode {
        name: String,
        reason: tinybmp::ParseError,
    },
}

/// Resolves logical resource names to encoded bytes.
pub trait AssetSource {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError>;
}

/// Resources compiled into the binary.
#[derive(Default, Clone, Copy)]
pub struct BundledAssets;

impl AssetSource for BundledAssets {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        match name {
            GAUGE => Ok(Cow::Borrowed(GAUGE_BMP)),
            _ => Err(AssetError::NotFound(name.to_string())),
        }
    }
}

/// Resources read from `<root>/<name>.bmp`.
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl AssetSource for DirectoryAssets {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        let path = self.root.join(format!("{name}.bmp"));
        println!("{} Loading {} from {}", log::ASSET, name, path.display());

        match std::fs::read(&path) {
            Ok(bytes) => Ok(Cow::Owned(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(name.to_string()))
            }
            Err(source) => Err(AssetError::Io {
                name: name.to_string(),
                source,
            }),
        }
    }
}
