//! Thumbnail file kept in sync with the board.

use smartboard_core::svg::{SvgFrame, render_document};
use smartboard_core::{BoardObserver, PathEntity, SurfaceConfig, ThumbnailConfig};
use std::path::PathBuf;

/// Rewrites a scaled-down SVG copy of the board whenever the drawing changes.
pub struct ThumbnailWriter {
    path: PathBuf,
    surface: SurfaceConfig,
    thumbnail: ThumbnailConfig,
    writes: usize,
}

impl ThumbnailWriter {
    pub fn new(path: impl Into<PathBuf>, surface: SurfaceConfig, thumbnail: ThumbnailConfig) -> Self {
        Self {
            path: path.into(),
            surface,
            thumbnail,
            writes: 0,
        }
    }
}

impl BoardObserver for ThumbnailWriter {
    fn on_drawing_changed(&mut self, entities: &[PathEntity]) {
        let svg = render_document(entities, &self.surface, &SvgFrame::thumbnail(&self.thumbnail));
        match std::fs::write(&self.path, svg) {
            Ok(()) => {
                self.writes += 1;
                log::debug!(
                    "Thumbnail #{} written to {}",
                    self.writes,
                    self.path.display()
                );
            }
            Err(e) => log::error!("Failed to write thumbnail {}: {}", self.path.display(), e),
        }
    }
}
