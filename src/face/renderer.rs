use chrono::{DateTime, FixedOffset};
use debug_print::debug_println;
use embedded_graphics::{
    image::Image,
    prelude::{DrawTarget, OriginDimensions, Point},
    primitives::Rectangle,
    Drawable,
};

use crate::{
    assets::{AssetSource, GAUGE},
    display::{gauge::GaugeBitmap, FaceColor},
    host::{ComplicationSlotsManager, SurfaceHolder, WatchState},
    log,
    style::{StyleRepository, UserStyle},
};

use super::{callbacks::WatchCallbacks, CanvasRenderer, FaceError, SharedAssets};

/// Top-left corner of the gauge on the surface.
pub const GAUGE_POSITION: Point = Point::new(100, 100);

/// Session token. The dashboard face keeps nothing per session.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DashboardSharedAssets;

impl SharedAssets for DashboardSharedAssets {
    fn on_destroy(&mut self) {
        debug_println!("Shared assets released");
    }
}

pub struct DashboardRenderer {
    surface: SurfaceHolder,
    watch_state: WatchState,
    complications: ComplicationSlotsManager,
    callbacks: WatchCallbacks,
    gauge: GaugeBitmap,
    style_changes: usize,
}

impl DashboardRenderer {
    /// Decodes the gauge and subscribes to style changes. Either the renderer
    /// is fully built or nothing is.
    pub fn new(
        assets: &impl AssetSource,
        style_repository: &impl StyleRepository,
        watch_state: WatchState,
        complications: ComplicationSlotsManager,
        surface: SurfaceHolder,
    ) -> Result<Self, FaceError> {
        let gauge = GaugeBitmap::decode(GAUGE, &assets.load(GAUGE)?)?;
        let callbacks = WatchCallbacks::new(style_repository);

        println!(
            "{} Dashboard renderer ready, gauge {}x{} on a {}x{} surface",
            log::FACE,
            gauge.size().width,
            gauge.size().height,
            surface.size().width,
            surface.size().height
        );

        Ok(Self {
            surface,
            watch_state,
            complications,
            callbacks,
            gauge,
            style_changes: 0,
        })
    }

    pub fn gauge(&self) -> &GaugeBitmap {
        &self.gauge
    }

    pub fn surface(&self) -> &SurfaceHolder {
        &self.surface
    }

    pub fn watch_state(&self) -> &WatchState {
        &self.watch_state
    }

    pub fn complications(&self) -> &ComplicationSlotsManager {
        &self.complications
    }

    /// Number of style changes received so far.
    pub fn style_changes(&self) -> usize {
        self.style_changes
    }
}

impl CanvasRenderer for DashboardRenderer {
    type SharedAssets = DashboardSharedAssets;

    fn create_shared_assets(&self) -> Self::SharedAssets {
        DashboardSharedAssets
    }

    // The face is static: `time` is not consulted and `bounds` is not used
    // for clipping. Pixels off the surface are dropped by the target.
    fn render<D>(
        &self,
        canvas: &mut D,
        _bounds: Rectangle,
        time: &DateTime<FixedOffset>,
        _assets: &Self::SharedAssets,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = FaceColor>,
    {
        debug_println!("Rendering frame for {}", time);
        Image::new(&self.gauge, GAUGE_POSITION).draw(canvas)
    }

    fn render_highlight_layer<D>(
        &self,
        _canvas: &mut D,
        _bounds: Rectangle,
        _time: &DateTime<FixedOffset>,
        _assets: &Self::SharedAssets,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = FaceColor>,
    {
        Ok(())
    }

    fn on_style_changed(&mut self, style: &UserStyle) {
        self.style_changes += 1;
        println!("{} User style changed to {}", log::STYLE, style);
    }

    fn dispatch_style_changes(&mut self) -> bool {
        match self.callbacks.poll() {
            Some(style) => {
                self.on_style_changed(&style);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        display::{framebuffer::FrameBuffer, COLOR_CLEAR},
        style::CurrentUserStyleRepository,
        testing::{self, MemoryAssets},
    };
    use embedded_graphics::geometry::Size;
    use embedded_graphics_simulator::SimulatorDisplay;

    const SURFACE: Size = Size::new(240, 240);

    fn renderer(repo: &CurrentUserStyleRepository) -> DashboardRenderer {
        DashboardRenderer::new(
            &MemoryAssets::with(GAUGE, testing::checker_gauge()),
            repo,
            WatchState::default(),
            ComplicationSlotsManager::default(),
            SurfaceHolder::new(SURFACE),
        )
        .expect("renderer")
    }

    fn time(rfc3339: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(rfc3339).expect("timestamp")
    }

    fn frame(
        renderer: &DashboardRenderer,
        assets: &DashboardSharedAssets,
        bounds: Rectangle,
        at: &DateTime<FixedOffset>,
    ) -> (Vec<u8>, usize) {
        let mut fb = FrameBuffer::new(SURFACE);
        if let Err(e) = renderer.render(&mut fb, bounds, at, assets) {
            match e {}
        }
        let writes = fb.take_writes();
        (fb.to_rgb_bytes(), writes)
    }

    fn full_bounds() -> Rectangle {
        Rectangle::new(Point::zero(), SURFACE)
    }

    #[test]
    fn draws_gauge_at_fixed_offset_only() {
        let repo = CurrentUserStyleRepository::default();
        let renderer = renderer(&repo);
        let assets = renderer.create_shared_assets();

        let mut fb = FrameBuffer::new(SURFACE);
        let at = time("2024-03-03T12:34:00Z");
        if let Err(e) = renderer.render(&mut fb, full_bounds(), &at, &assets) {
            match e {}
        }

        assert_eq!(fb.take_writes(), 6 * 4);
        for y in 0..4u32 {
            for x in 0..6u32 {
                let at = GAUGE_POSITION + Point::new(x as i32, y as i32);
                assert_eq!(fb.pixel(at), Some(testing::checker_color(x, y)));
            }
        }
        assert_eq!(fb.pixel(Point::new(99, 100)), Some(COLOR_CLEAR));
        assert_eq!(fb.pixel(Point::new(106, 100)), Some(COLOR_CLEAR));
        assert_eq!(fb.pixel(Point::new(100, 104)), Some(COLOR_CLEAR));
    }

    #[test]
    fn output_ignores_time_and_clip() {
        let repo = CurrentUserStyleRepository::default();
        let renderer = renderer(&repo);
        let assets = renderer.create_shared_assets();

        let first = frame(
            &renderer,
            &assets,
            full_bounds(),
            &time("2024-03-03T12:34:00+01:00"),
        );
        let later = frame(
            &renderer,
            &assets,
            full_bounds(),
            &time("1999-12-31T23:59:59-08:00"),
        );
        let clipped = frame(
            &renderer,
            &assets,
            Rectangle::new(Point::new(5, 5), Size::new(1, 1)),
            &time("2030-01-01T00:00:00Z"),
        );

        assert_eq!(first, later);
        assert_eq!(first, clipped);
    }

    #[test]
    fn style_changes_do_not_alter_output() {
        let repo = CurrentUserStyleRepository::default();
        let mut renderer = renderer(&repo);
        let assets = renderer.create_shared_assets();
        let at = time("2024-03-03T12:34:00Z");

        let before = frame(&renderer, &assets, full_bounds(), &at);

        // Pending since construction, folded into the change below.
        repo.publish(UserStyle::default().with("color", "red"));
        assert!(renderer.dispatch_style_changes());
        assert!(!renderer.dispatch_style_changes());
        renderer.on_style_changed(&UserStyle::default().with("hands", "thin"));

        assert_eq!(renderer.style_changes(), 2);
        assert_eq!(frame(&renderer, &assets, full_bounds(), &at), before);
    }

    #[test]
    fn session_assets_do_not_alter_output() {
        let repo = CurrentUserStyleRepository::default();
        let renderer = renderer(&repo);
        let at = time("2024-03-03T12:34:00Z");

        let assets = renderer.create_shared_assets();
        let before = frame(&renderer, &assets, full_bounds(), &at);

        for _ in 0..5 {
            let mut session = renderer.create_shared_assets();
            session.on_destroy();
        }

        assert_eq!(frame(&renderer, &assets, full_bounds(), &at), before);
    }

    #[test]
    fn highlight_layer_draws_nothing() {
        let repo = CurrentUserStyleRepository::default();
        let renderer = renderer(&repo);
        let assets = renderer.create_shared_assets();

        let mut fb = FrameBuffer::new(SURFACE);
        if let Err(e) = renderer.render_highlight_layer(
            &mut fb,
            full_bounds(),
            &time("2024-03-03T12:34:00Z"),
            &assets,
        ) {
            match e {}
        }
        assert_eq!(fb.take_writes(), 0);
    }

    #[test]
    fn gauge_past_the_edge_is_dropped() {
        let repo = CurrentUserStyleRepository::default();
        let renderer = DashboardRenderer::new(
            &MemoryAssets::with(GAUGE, testing::checker_gauge()),
            &repo,
            WatchState::default(),
            ComplicationSlotsManager::default(),
            SurfaceHolder::new(Size::new(103, 102)),
        )
        .expect("renderer");
        let assets = renderer.create_shared_assets();

        let mut fb = FrameBuffer::new(renderer.surface().size());
        if let Err(e) = renderer.render(
            &mut fb,
            renderer.surface().bounds(),
            &time("2024-03-03T12:34:00Z"),
            &assets,
        ) {
            match e {}
        }
        assert_eq!(fb.take_writes(), 3 * 2);
    }

    #[test]
    fn missing_gauge_fails_construction() {
        let repo = CurrentUserStyleRepository::default();
        let result = DashboardRenderer::new(
            &MemoryAssets::default(),
            &repo,
            WatchState::default(),
            ComplicationSlotsManager::default(),
            SurfaceHolder::new(SURFACE),
        );

        assert!(matches!(
            result,
            Err(FaceError::Asset(crate::assets::AssetError::NotFound(name))) if name == GAUGE
        ));
    }

    #[test]
    fn corrupt_gauge_fails_construction() {
        let repo = CurrentUserStyleRepository::default();
        let mut bytes = testing::checker_gauge();
        bytes[0] = b'X';

        let result = DashboardRenderer::new(
            &MemoryAssets::with(GAUGE, bytes),
            &repo,
            WatchState::default(),
            ComplicationSlotsManager::default(),
            SurfaceHolder::new(SURFACE),
        );

        assert!(matches!(
            result,
            Err(FaceError::Asset(crate::assets::AssetError::Decode { .. }))
        ));
    }

    #[test]
    fn simulator_display_matches_framebuffer() {
        let repo = CurrentUserStyleRepository::default();
        let renderer = renderer(&repo);
        let assets = renderer.create_shared_assets();

        let mut display = SimulatorDisplay::<FaceColor>::new(SURFACE);
        let at = time("2024-03-03T12:34:00Z");
        renderer
            .render(&mut display, full_bounds(), &at, &assets)
            .expect("simulator draw");

        assert_eq!(display.size(), SURFACE);
        assert_eq!(
            display.get_pixel(GAUGE_POSITION + Point::new(5, 3)),
            testing::checker_color(5, 3)
        );
    }
}
