//! Pointer scripts: recorded input replayed against a board.

use crate::error::{AppError, AppResult};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use smartboard_core::{PointerEvent, SmartBoard, SurfaceConfig, ThumbnailConfig};
use std::path::Path;

/// One recorded input event.
///
/// `target` on a press is the creation index of the path that was hit, since
/// entity ids only exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Move {
        x: f64,
        y: f64,
    },
    Down {
        x: f64,
        y: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<usize>,
    },
    Up,
}

impl ScriptEvent {
    /// Resolve into a board event against the board's current entities.
    pub fn to_pointer_event(self, board: &SmartBoard) -> PointerEvent {
        match self {
            ScriptEvent::Move { x, y } => PointerEvent::Move {
                position: Point::new(x, y),
            },
            ScriptEvent::Down { x, y, target } => {
                let target = target.and_then(|index| {
                    let entity = board.registry().get_index(index);
                    if entity.is_none() {
                        log::warn!("Script targets path #{} which does not exist", index);
                    }
                    entity.map(|e| e.id())
                });
                PointerEvent::Down {
                    position: Point::new(x, y),
                    target,
                }
            }
            ScriptEvent::Up => PointerEvent::Up,
        }
    }
}

/// A pointer script file, optionally overriding the surface configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointerScript {
    #[serde(default)]
    pub surface: Option<SurfaceConfig>,
    #[serde(default)]
    pub thumbnail: Option<ThumbnailConfig>,
    pub events: Vec<ScriptEvent>,
}

impl PointerScript {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::from_json(&json)
    }

    /// Feed every event into `board`, in order.
    pub fn replay(&self, board: &mut SmartBoard) -> AppResult<()> {
        for event in &self.events {
            let event = event.to_pointer_event(board);
            board.handle_pointer_event(event)?;
        }
        log::info!(
            "Replayed {} events, {} paths on the board",
            self.events.len(),
            board.entities().len()
        );
        Ok(())
    }
}
