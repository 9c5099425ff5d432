//! Path entities: one drawn path plus its interaction state.

use crate::broadcast::{Channel, PointerBroadcaster, PointerListener, PositionChanged};
use crate::drag::{DragController, DragState, PathEdit};
use crate::error::BoardResult;
use crate::path::{PathBuilder, PathGeometry};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a path entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity-{}", self.0)
    }
}

/// A user-drawn path together with the controller driving it.
#[derive(Debug, Clone)]
pub struct PathEntity {
    id: EntityId,
    path: PathBuilder,
    controller: DragController,
}

impl PathEntity {
    /// Create an entity seeded with one point, already in drawing mode.
    pub(crate) fn new(seed: Point, broadcaster: &mut PointerBroadcaster) -> BoardResult<Self> {
        let id = EntityId::new();
        let mut path = PathBuilder::new();
        path.create(seed)?;
        let controller = DragController::start(id, broadcaster)?;
        Ok(Self {
            id,
            path,
            controller,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn state(&self) -> DragState {
        self.controller.state()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    pub fn path(&self) -> &PathBuilder {
        &self.path
    }

    pub fn points(&self) -> &[Point] {
        self.path.points()
    }

    pub fn geometry(&self) -> &PathGeometry {
        self.path.geometry()
    }

    /// Current path description, as set on the geometry handle.
    pub fn drawable_path(&self) -> &str {
        self.path.geometry().drawable_path()
    }

    /// Outline shown around the path while it is being dragged.
    pub fn selection_bounds(&self) -> Option<Rect> {
        if self.state() == DragState::Dragging {
            self.path.bounds()
        } else {
            None
        }
    }

    /// Begin-gesture targeted at this entity's geometry.
    pub(crate) fn begin_drag(&mut self, broadcaster: &mut PointerBroadcaster) -> BoardResult<bool> {
        self.controller.begin_gesture(broadcaster)
    }

    /// Fired end-of-gesture trigger.
    pub(crate) fn on_gesture_end(&mut self, broadcaster: &mut PointerBroadcaster) -> BoardResult<bool> {
        self.controller.end_gesture(broadcaster)
    }
}

impl PointerListener for PathEntity {
    fn on_position_changed(&mut self, channel: Channel, event: &PositionChanged) {
        match self.controller.interpret(channel, event) {
            Some(PathEdit::Append(point)) => self.path.append_point(point),
            Some(PathEdit::Translate(delta)) => self.path.translate(delta),
            None => log::trace!(
                "{} ignored {:?} notification while {:?}",
                self.id,
                channel,
                self.state()
            ),
        }
    }
}
