//! Host-owned state handed to the face, plus a small runtime that drives it.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
};
use serde::{Deserialize, Serialize};

pub mod runtime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasType {
    Software,
    #[default]
    Hardware,
}

/// Geometry of the surface frames are drawn to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceHolder {
    size: Size,
}

impl SurfaceHolder {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatchState {
    pub is_ambient: bool,
    pub is_visible: bool,
    pub is_battery_low_and_not_charging: bool,
    /// Rows hidden by a flat tire at the bottom of round screens.
    pub chin_height: u32,
}

impl Default for WatchState {
    fn default() -> Self {
        Self {
            is_ambient: false,
            is_visible: true,
            is_battery_low_and_not_charging: false,
            chin_height: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComplicationSlot {
    pub id: u32,
    pub bounds: Rectangle,
}

#[derive(Clone, Debug, Default)]
pub struct ComplicationSlotsManager {
    slots: Vec<ComplicationSlot>,
}

impl ComplicationSlotsManager {
    pub fn new(slots: Vec<ComplicationSlot>) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[ComplicationSlot] {
        &self.slots
    }
}
