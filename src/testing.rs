//! Fixtures shared by unit tests.

use std::{borrow::Cow, collections::HashMap};

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use image::{codecs::bmp::BmpEncoder, ColorType, RgbImage};

use crate::assets::{AssetError, AssetSource};

/// Encodes a 24-bit BMP where pixel `(x, y)` is `color(x, y)`.
pub fn bmp_24(width: u32, height: u32, color: impl Fn(u32, u32) -> Rgb888) -> Vec<u8> {
    let buffer = RgbImage::from_fn(width, height, |x, y| {
        let c = color(x, y);
        image::Rgb([c.r(), c.g(), c.b()])
    });

    let mut out = Vec::new();
    BmpEncoder::new(&mut out)
        .encode(buffer.as_raw(), width, height, ColorType::Rgb8)
        .expect("encode bmp fixture");
    out
}

/// Small non-uniform gauge so misplaced or flipped pixels show up.
pub fn checker_gauge() -> Vec<u8> {
    bmp_24(6, 4, checker_color)
}

pub fn checker_color(x: u32, y: u32) -> Rgb888 {
    Rgb888::new((x * 40) as u8, (y * 60) as u8, if (x + y) % 2 == 0 { 255 } else { 10 })
}

/// Asset source backed by a map, for injecting missing or corrupt resources.
#[derive(Default)]
pub struct MemoryAssets {
    pub files: HashMap<&'static str, Vec<u8>>,
}

impl MemoryAssets {
    pub fn with(name: &'static str, bytes: Vec<u8>) -> Self {
        let mut files = HashMap::new();
        files.insert(name, bytes);
        Self { files }
    }
}

impl AssetSource for MemoryAssets {
    fn load(&self, name: &str) -> Result<Cow<'_, [u8]>, AssetError> {
        self.files
            .get(name)
            .map(|bytes| Cow::Borrowed(bytes.as_slice()))
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}
