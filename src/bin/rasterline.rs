//! rasterline - render a YAML line scene to PNG.
//!
//! Run: `rasterline scene.yaml -o scene.png`

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use rasterline::config::{RenderMode, SceneConfig};
use rasterline::output::PngEncoder;
use rasterline::scene;
use std::path::PathBuf;

/// Render a line scene to PNG
#[derive(Parser, Debug)]
#[command(name = "rasterline")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Rasterize the segments of a YAML scene into a PNG", long_about = None)]
struct Cli {
    /// Scene file (YAML); defaults apply when omitted
    scene: Option<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = "rasterline.png")]
    output: PathBuf,

    /// Override the view scale (drops any letterbox)
    #[arg(short, long)]
    scale: Option<i32>,

    /// Override the render mode (buffer or renderer)
    #[arg(short, long)]
    mode: Option<RenderMode>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.scene {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("failed to load scene {}", path.display()))?,
        None => SceneConfig::default(),
    };

    if let Some(scale) = cli.scale {
        if config.view.letterbox.take().is_some() {
            warn!("--scale {scale} replaces the scene's letterbox view");
        }
        config.view.scale = scale;
    }
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    let (fb, stats) = scene::render_with_stats(&config).context("failed to render scene")?;
    PngEncoder::write_to_file(&fb, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        "wrote {} ({}x{}, {} segments, {} positions)",
        cli.output.display(),
        fb.width(),
        fb.height(),
        stats.segments,
        stats.positions
    );

    Ok(())
}
