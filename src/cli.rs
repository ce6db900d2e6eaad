// cli.rs - Command-line interface of the bundled host
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "dashboard-face")]
#[command(about = "Runs the dashboard watch face in a simulated host", long_about = None)]
pub struct Cli {
    /// JSON file with surface size, frame interval, asset directory and initial style
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Stop after this many frames
    #[arg(long)]
    pub frames: Option<u64>,

    /// Write the last frame to this PNG file on exit
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Style selection published after the first frame, e.g. `--style color=red`
    #[arg(long = "style", value_name = "SETTING=OPTION")]
    pub styles: Vec<String>,
}
