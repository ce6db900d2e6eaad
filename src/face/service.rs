use crate::{
    assets::AssetSource,
    host::{CanvasType, ComplicationSlotsManager, SurfaceHolder, WatchState},
    log,
    style::StyleRepository,
};

use super::{renderer::DashboardRenderer, FaceError, WatchFace, WatchFaceType};

/// Entry point the host calls to obtain the dashboard face. The renderer is
/// moved into the returned `WatchFace`; the service keeps no reference to it,
/// so the host owns the renderer's lifetime.
pub struct DashboardWatchFaceService<A: AssetSource> {
    assets: A,
}

impl<A: AssetSource> DashboardWatchFaceService<A> {
    pub fn new(assets: A) -> Self {
        Self { assets }
    }

    /// Builds the single renderer for this face. Asset failures abort creation.
    pub fn create_watch_face(
        &self,
        surface: SurfaceHolder,
        watch_state: WatchState,
        complications: ComplicationSlotsManager,
        style_repository: &impl StyleRepository,
        canvas_type: CanvasType,
    ) -> Result<WatchFace<DashboardRenderer>, FaceError> {
        let renderer = DashboardRenderer::new(
            &self.assets,
            style_repository,
            watch_state,
            complications,
            surface,
        )
        .map_err(|e| {
            println!("{} Could not create watch face: {}", log::ERROR, e);
            e
        })?;

        println!("{} Created analog face ({:?} canvas)", log::FACE, canvas_type);
        Ok(WatchFace::new(WatchFaceType::Analog, canvas_type, renderer))
    }
}
