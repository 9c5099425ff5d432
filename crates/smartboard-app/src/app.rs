//! Application shell: wires a script, a board and its output files together.

use crate::error::{AppError, AppResult};
use crate::script::PointerScript;
use crate::thumbnail::ThumbnailWriter;
use clap::Parser;
use serde::{Deserialize, Serialize};
use smartboard_core::{DragState, SmartBoard, SurfaceConfig, ThumbnailConfig};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Pointer script to replay.
    pub script: PathBuf,
    /// Where the final surface SVG is written.
    pub output: PathBuf,
    /// Thumbnail refreshed on every drawing change, if set.
    pub thumbnail_path: Option<PathBuf>,
    pub surface: SurfaceConfig,
    pub thumbnail: ThumbnailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            script: PathBuf::from("script.json"),
            output: PathBuf::from("smartboard.svg"),
            thumbnail_path: None,
            surface: SurfaceConfig::default(),
            thumbnail: ThumbnailConfig::default(),
        }
    }
}

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "smartboard", about = "Replay a pointer script on a SmartBoard surface")]
pub struct Cli {
    /// Pointer script to replay.
    pub script: PathBuf,

    /// Where the final surface SVG is written.
    #[arg(short, long, default_value = "smartboard.svg")]
    pub output: PathBuf,

    /// Thumbnail SVG to refresh on every drawing change.
    #[arg(short, long)]
    pub thumbnail: Option<PathBuf>,
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        Self {
            script: cli.script,
            output: cli.output,
            thumbnail_path: cli.thumbnail,
            ..Self::default()
        }
    }
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub events: usize,
    pub paths: usize,
    /// Paths still drawing or dragging when the script ended.
    pub active: usize,
}

/// Main application struct.
pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Replay the configured script and write the resulting SVG.
    pub fn run(&self) -> AppResult<RunSummary> {
        let script = PointerScript::load(&self.config.script)?;
        log::info!(
            "Loaded {} events from {}",
            script.events.len(),
            self.config.script.display()
        );

        let surface = script
            .surface
            .clone()
            .unwrap_or_else(|| self.config.surface.clone());
        let thumbnail = script
            .thumbnail
            .clone()
            .unwrap_or_else(|| self.config.thumbnail.clone());

        let mut board = SmartBoard::with_config(surface.clone());
        if let Some(path) = &self.config.thumbnail_path {
            board.subscribe(Box::new(ThumbnailWriter::new(path.clone(), surface, thumbnail)));
        }

        script.replay(&mut board)?;

        std::fs::write(&self.config.output, board.to_svg())
            .map_err(|e| AppError::io(&self.config.output, e))?;
        log::info!("Wrote {}", self.config.output.display());

        Ok(RunSummary {
            events: script.events.len(),
            paths: board.entities().len(),
            active: board
                .entities()
                .iter()
                .filter(|e| e.state() != DragState::Idle)
                .count(),
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
