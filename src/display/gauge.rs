use embedded_graphics::{image::ImageDrawable, prelude::*, primitives::Rectangle};
use tinybmp::Bmp;

use crate::assets::AssetError;

use super::{FaceColor, COLOR_CLEAR};

/// Fully decoded gauge bitmap.
///
/// Decoding every pixel up front means a corrupt resource is reported when
/// the face is built, not halfway through the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeBitmap {
    size: Size,
    pixels: Vec<FaceColor>,
}

impl GaugeBitmap {
    pub fn decode(name: &str, data: &[u8]) -> Result<Self, AssetError> {
        let bmp = Bmp::<FaceColor>::from_slice(data).map_err(|reason| AssetError::Decode {
            name: name.to_string(),
            reason,
        })?;

        let size = bmp.size();
        let mut pixels = vec![COLOR_CLEAR; (size.width * size.height) as usize];
        for Pixel(point, color) in bmp.pixels() {
            if let Ok((x, y)) = <(u32, u32)>::try_from(point) {
                if x < size.width && y < size.height {
                    pixels[(y * size.width + x) as usize] = color;
                }
            }
        }

        Ok(Self { size, pixels })
    }

    pub fn pixel(&self, point: Point) -> Option<FaceColor> {
        let (x, y) = <(u32, u32)>::try_from(point).ok()?;
        (x < self.size.width && y < self.size.height)
            .then(|| self.pixels[(y * self.size.width + x) as usize])
    }
}

impl OriginDimensions for GaugeBitmap {
    fn size(&self) -> Size {
        self.size
    }
}

impl ImageDrawable for GaugeBitmap {
    type Color = FaceColor;

    fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.fill_contiguous(&self.bounding_box(), self.pixels.iter().copied())
    }

    fn draw_sub_image<D>(&self, target: &mut D, area: &Rectangle) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        let visible = area.intersection(&self.bounding_box());
        target.draw_iter(visible.points().filter_map(|point| {
            self.pixel(point)
                .map(|color| Pixel(point - area.top_left, color))
        }))
    }
}
