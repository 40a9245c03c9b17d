//! Headless renderer: scene document (+ optional background) in, PNG out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polycanvas::export::export_filename_today;
use polycanvas::{Editor, EditorConfig, LogLevel, SceneDocument};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene document (JSON) to render
    #[arg(long)]
    scene: PathBuf,

    /// Image drawn underneath the polygons
    #[arg(long)]
    background: Option<PathBuf>,

    /// Output PNG path (defaults to drawing_<date>.png)
    #[arg(long)]
    output: Option<PathBuf>,

    /// error, warn, info, debug or trace; overrides the config file
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Config file to use instead of the one in the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EditorConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EditorConfig::load_from_default_path(),
    };

    let level = args.log_level.unwrap_or(config.preferences.log_level);
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .init();

    let json = std::fs::read_to_string(&args.scene)
        .with_context(|| format!("Failed to read scene {}", args.scene.display()))?;
    let document = SceneDocument::from_json(&json).context("Invalid scene document")?;

    let mut editor = Editor::with_canvas_size(config, document.width, document.height);
    editor.load_document(&document)?;

    if let Some(path) = &args.background {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read background {}", path.display()))?;
        editor
            .import_image(&bytes)
            .with_context(|| format!("Failed to decode background {}", path.display()))?;
    }

    let png = editor.export_png()?;
    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(export_filename_today()));
    std::fs::write(&output, png)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    log::info!(
        "Rendered {} polygon(s) to {}",
        editor.scene().polygons().len(),
        output.display()
    );
    Ok(())
}
