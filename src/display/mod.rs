pub mod framebuffer;
pub mod gauge;

use embedded_graphics::{
    pixelcolor::{Rgb888, RgbColor},
    primitives::PrimitiveStyle,
};

/// Pixel format of every surface the face draws on.
pub type FaceColor = Rgb888;

/// The platform's standard gray (`0xFF888888`).
pub const COLOR_GRAY: FaceColor = Rgb888::new(0x88, 0x88, 0x88);
pub const COLOR_CLEAR: FaceColor = Rgb888::BLACK;

/// Paint the face declares for its gauge. Bitmaps carry their own colors,
/// so the fill never reaches the frame.
pub const FILL_STYLE_BACKGROUND: PrimitiveStyle<FaceColor> = PrimitiveStyle::with_fill(COLOR_GRAY);
