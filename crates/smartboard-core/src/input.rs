//! Pointer events and the last-known pointer state.

use crate::entity::EntityId;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Semantic pointer events consumed by the surface.
///
/// Hosts translate their native mouse/pen events into these. `target` on
/// [`PointerEvent::Down`] is the entity whose geometry received the event,
/// as reported by the host's own event targeting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Move {
        position: Point,
    },
    Down {
        position: Point,
        #[serde(default)]
        target: Option<EntityId>,
    },
    /// Pointer released anywhere in the document.
    Up,
}

/// Last-known pointer position and movement.
///
/// Overwritten on every movement; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    /// Absolute position in surface coordinates.
    pub position: Point,
    /// Movement that produced `position`.
    pub delta: Vec2,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            delta: Vec2::ZERO,
        }
    }
}

impl PointerState {
    /// Move to `position`, returning the delta from the previous position.
    pub fn advance(&mut self, position: Point) -> Vec2 {
        let delta = position - self.position;
        self.position = position;
        self.delta = delta;
        delta
    }

    /// Overwrite the position without counting it as movement.
    pub fn reset(&mut self, position: Point) {
        self.position = position;
        self.delta = Vec2::ZERO;
    }
}
