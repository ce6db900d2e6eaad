use std::fmt::Display;

use colored::{Color, Colorize};

/// Prefix printed in front of console lines, e.g. `println!("{} Ready", log::FACE)`.
pub struct Tag {
    label: &'static str,
    color: Color,
}

impl Tag {
    const fn new(label: &'static str, color: Color) -> Self {
        Self { label, color }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label.color(self.color).bold())
    }
}

pub const FACE: Tag = Tag::new("[FACE]", Color::Cyan);
pub const STYLE: Tag = Tag::new("[STYLE]", Color::Magenta);
pub const ASSET: Tag = Tag::new("[ASSET]", Color::Blue);
pub const HOST: Tag = Tag::new("[HOST]", Color::Green);
pub const WARN: Tag = Tag::new("[WARN]", Color::Yellow);
pub const ERROR: Tag = Tag::new("[ERROR]", Color::Red);
