use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use embedded_graphics::{prelude::DrawTarget, primitives::Rectangle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{assets::AssetError, display::FaceColor, host::CanvasType, style::UserStyle};

pub mod callbacks;
pub mod renderer;
pub mod service;

/// Nominal interval between interactive frames.
pub const INTERACTIVE_FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Error, Debug)]
pub enum FaceError {
    #[error("Could not load face asset: {0}")]
    Asset(#[from] AssetError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WatchFaceType {
    Digital,
    Analog,
}

/// Per-session resources created before the first frame and released when
/// the host tears the session down.
pub trait SharedAssets {
    fn on_destroy(&mut self);
}

/// The callbacks a host drives once per frame.
pub trait CanvasRenderer {
    type SharedAssets: SharedAssets;

    fn create_shared_assets(&self) -> Self::SharedAssets;

    fn render<D>(
        &self,
        canvas: &mut D,
        bounds: Rectangle,
        time: &DateTime<FixedOffset>,
        assets: &Self::SharedAssets,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = FaceColor>;

    /// Draws the overlay used for highlighting (e.g. during face editing).
    fn render_highlight_layer<D>(
        &self,
        canvas: &mut D,
        bounds: Rectangle,
        time: &DateTime<FixedOffset>,
        assets: &Self::SharedAssets,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = FaceColor>;

    fn on_style_changed(&mut self, style: &UserStyle);

    /// Delivers a pending style change, if any, to [`Self::on_style_changed`].
    fn dispatch_style_changes(&mut self) -> bool;
}

/// What the host gets back from face creation.
pub struct WatchFace<R: CanvasRenderer> {
    pub face_type: WatchFaceType,
    pub canvas_type: CanvasType,
    pub interactive_frame_interval: Duration,
    pub renderer: R,
}

impl<R: CanvasRenderer> WatchFace<R> {
    pub fn new(face_type: WatchFaceType, canvas_type: CanvasType, renderer: R) -> Self {
        Self {
            face_type,
            canvas_type,
            interactive_frame_interval: INTERACTIVE_FRAME_INTERVAL,
            renderer,
        }
    }
}
