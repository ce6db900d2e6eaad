use std::{path::Path, time::Duration};

use chrono::{DateTime, FixedOffset, Local};
use debug_print::debug_println;
use embedded_canvas::Canvas;
use embedded_graphics::{
    prelude::{DrawTarget, Point},
    Drawable,
};
use thiserror::Error;
use tokio::time::{interval, MissedTickBehavior};

use crate::{
    display::{framebuffer::FrameBuffer, FaceColor, COLOR_CLEAR},
    face::{CanvasRenderer, SharedAssets, WatchFace},
    log,
};

use super::SurfaceHolder;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Could not write snapshot: {0}")]
    Snapshot(#[from] image::ImageError),
    #[error("Frame buffer does not match a {0}x{1} image")]
    BufferSize(u32, u32),
}

/// Plays the host's part: owns the surface, manages the render session and
/// calls into the face once per tick.
pub struct HostRuntime<R: CanvasRenderer> {
    face: WatchFace<R>,
    surface: SurfaceHolder,
    buffer: FrameBuffer,
    /// Transparent overlay the highlight layer draws into, reused every frame.
    highlight: Canvas<FaceColor>,
    session: Option<R::SharedAssets>,
    frames: u64,
    last_frame_writes: usize,
}

impl<R: CanvasRenderer> HostRuntime<R> {
    pub fn new(face: WatchFace<R>, surface: SurfaceHolder) -> Self {
        Self {
            face,
            surface,
            buffer: FrameBuffer::new(surface.size()),
            highlight: Canvas::new(surface.size()),
            session: None,
            frames: 0,
            last_frame_writes: 0,
        }
    }

    pub fn face(&self) -> &WatchFace<R> {
        &self.face
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Pixels written to the surface by the most recent frame.
    pub fn last_frame_writes(&self) -> usize {
        self.last_frame_writes
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn start_session(&mut self) {
        if self.session.is_none() {
            println!("{} Starting render session", log::HOST);
            self.session = Some(self.face.renderer.create_shared_assets());
        }
    }

    pub fn end_session(&mut self) {
        if let Some(mut assets) = self.session.take() {
            assets.on_destroy();
            println!("{} Render session ended after {} frames", log::HOST, self.frames);
        }
    }

    /// Delivers pending style changes, then draws one frame and its highlight layer.
    pub fn render_frame(&mut self, time: DateTime<FixedOffset>) {
        self.start_session();
        self.face.renderer.dispatch_style_changes();

        let bounds = self.surface.bounds();
        let Some(assets) = self.session.as_ref() else {
            return;
        };

        if let Err(e) = self.buffer.clear(COLOR_CLEAR) {
            match e {}
        }
        if let Err(e) = self
            .face
            .renderer
            .render(&mut self.buffer, bounds, &time, assets)
        {
            match e {}
        }

        self.highlight.pixels.fill(None);
        if let Err(e) = self
            .face
            .renderer
            .render_highlight_layer(&mut self.highlight, bounds, &time, assets)
        {
            match e {}
        }
        if let Err(e) = self.highlight.place_at(Point::zero()).draw(&mut self.buffer) {
            match e {}
        }

        self.frames += 1;
        self.last_frame_writes = self.buffer.take_writes();
        debug_println!(
            "Frame {} wrote {} pixels",
            self.frames,
            self.last_frame_writes
        );
    }

    /// Renders on the face's frame interval until `limit` frames have been
    /// drawn in total, or forever when there is no limit.
    pub async fn run(&mut self, frame_interval: Option<Duration>, limit: Option<u64>) {
        let period = frame_interval.unwrap_or(self.face.interactive_frame_interval);
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        println!("{} Rendering every {}ms", log::HOST, period.as_millis());
        self.start_session();

        while limit.map_or(true, |limit| self.frames < limit) {
            ticker.tick().await;
            self.render_frame(Local::now().into());
        }
    }

    /// Writes the last rendered frame as a PNG.
    pub fn snapshot(&self, path: &Path) -> Result<(), HostError> {
        let size = self.surface.size();
        let image = image::RgbImage::from_raw(size.width, size.height, self.buffer.to_rgb_bytes())
            .ok_or(HostError::BufferSize(size.width, size.height))?;
        image.save(path)?;

        println!("{} Saved frame to {}", log::HOST, path.display());
        Ok(())
    }
}
