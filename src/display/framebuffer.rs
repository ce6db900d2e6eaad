use embedded_graphics::prelude::*;

use super::{FaceColor, COLOR_CLEAR};

/// In-memory RGB surface the host hands to the face each frame.
pub struct FrameBuffer {
    size: Size,
    /// One color per pixel, row-major
    pixels: Vec<FaceColor>,
    writes: usize,
}

impl FrameBuffer {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pixels: vec![COLOR_CLEAR; size.width as usize * size.height as usize],
            writes: 0,
        }
    }

    /// Color at `point`, or `None` when it lies outside the surface.
    pub fn pixel(&self, point: Point) -> Option<FaceColor> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Number of in-bounds pixel writes since the last call, then resets the count.
    pub fn take_writes(&mut self) -> usize {
        std::mem::take(&mut self.writes)
    }

    /// Packed `RGB` bytes, row-major, for encoders expecting 8 bits per channel.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|c| [c.r(), c.g(), c.b()])
            .collect()
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y): (u32, u32) = point.try_into().ok()?;
        if x < self.size.width && y < self.size.height {
            Some((y * self.size.width + x) as usize)
        } else {
            None
        }
    }
}

impl DrawTarget for FrameBuffer {
    type Color = FaceColor;
    // Writing to memory can never fail.
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels.into_iter() {
            // Out of bounds pixels are discarded, never an error.
            if let Some(index) = self.index(coord) {
                self.pixels[index] = color;
                self.writes += 1;
            }
        }

        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        self.size
    }
}
