mod cli;

use chrono::Local;
use clap::Parser;

use dashboard_face::{
    assets::{AssetSource, BundledAssets, DirectoryAssets},
    config::FaceConfig,
    face::{renderer::DashboardRenderer, service::DashboardWatchFaceService, FaceError, WatchFace},
    host::runtime::HostRuntime,
    log,
    style::{CurrentUserStyleRepository, StyleRepository, UserStyle},
};

use cli::Cli;

fn create_face<A: AssetSource>(
    assets: A,
    config: &FaceConfig,
    repository: &CurrentUserStyleRepository,
) -> Result<WatchFace<DashboardRenderer>, FaceError> {
    DashboardWatchFaceService::new(assets).create_watch_face(
        config.surface(),
        Default::default(),
        config.complications(),
        repository,
        config.canvas_type,
    )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FaceConfig::load(path)?,
        None => FaceConfig::default(),
    };
    let selections = cli
        .styles
        .iter()
        .map(|raw| UserStyle::parse_selection(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let repository = CurrentUserStyleRepository::new(config.initial_style());
    let face = match &config.asset_dir {
        Some(dir) => create_face(DirectoryAssets::new(dir), &config, &repository)?,
        None => create_face(BundledAssets, &config, &repository)?,
    };

    let mut host = HostRuntime::new(face, config.surface());
    host.render_frame(Local::now().into());

    if !selections.is_empty() {
        let style = selections
            .into_iter()
            .fold(repository.user_style(), |style, (setting, option)| {
                style.with(setting, option)
            });
        repository.publish(style);
    }

    tokio::select! {
        _ = host.run(config.frame_interval(), cli.frames) => {}
        _ = tokio::signal::ctrl_c() => {
            println!("{} Interrupted", log::HOST);
        }
    }
    host.end_session();

    println!(
        "{} {} frames, {} style changes",
        log::FACE,
        host.frames(),
        host.face().renderer.style_changes()
    );

    if let Some(path) = &cli.snapshot {
        host.snapshot(path)?;
    }

    Ok(())
}
