//! The drawing surface: routes pointer events to the broadcaster and
//! entities.

use crate::broadcast::{BoardObserver, PointerBroadcaster};
use crate::config::{SurfaceConfig, ThumbnailConfig};
use crate::entity::{EntityId, PathEntity};
use crate::error::{BoardError, BoardResult};
use crate::input::{PointerEvent, PointerState};
use crate::registry::EntityRegistry;
use crate::svg::{SvgFrame, render_document};
use kurbo::Point;

/// What a pointer-down did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDown {
    /// A new path started drawing.
    Created(EntityId),
    /// An existing path started dragging.
    DragStarted(EntityId),
}

impl PointerDown {
    pub fn entity(self) -> EntityId {
        match self {
            PointerDown::Created(id) | PointerDown::DragStarted(id) => id,
        }
    }
}

/// A freehand drawing surface.
#[derive(Debug, Default)]
pub struct SmartBoard {
    config: SurfaceConfig,
    broadcaster: PointerBroadcaster,
    registry: EntityRegistry,
}

impl SmartBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SurfaceConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    pub fn pointer(&self) -> PointerState {
        self.broadcaster.state()
    }

    pub fn broadcaster(&self) -> &PointerBroadcaster {
        &self.broadcaster
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// All entities in creation order.
    pub fn entities(&self) -> &[PathEntity] {
        self.registry.entities()
    }

    pub fn entity(&self, id: EntityId) -> Option<&PathEntity> {
        self.registry.get(id)
    }

    /// Register an observer for "position changed" and "drawing changed".
    pub fn subscribe(&mut self, observer: Box<dyn BoardObserver>) {
        self.broadcaster.add_observer(observer);
    }

    /// Dispatch a host event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> BoardResult<()> {
        match event {
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Down { position, target } => {
                self.pointer_down(target, position)?;
            }
            PointerEvent::Up => {
                self.pointer_up()?;
            }
        }
        Ok(())
    }

    /// Pointer moved over the surface.
    pub fn pointer_move(&mut self, position: Point) {
        if let Some(event) = self.broadcaster.update_position(position) {
            self.broadcaster.publish(&event, &mut self.registry);
        }
    }

    /// Pointer pressed.
    ///
    /// If `target` is a path waiting for a drag, the path takes the gesture.
    /// Otherwise a new path starts at the last-known pointer position.
    pub fn pointer_down(&mut self, target: Option<EntityId>, position: Point) -> BoardResult<PointerDown> {
        if let Some(id) = target {
            match self.registry.get_mut(id) {
                Some(entity) => {
                    if entity.begin_drag(&mut self.broadcaster)? {
                        return Ok(PointerDown::DragStarted(id));
                    }
                    log::debug!("{} is not waiting for a drag; starting a new path", id);
                }
                None => log::warn!("Pointer down on unknown {}; starting a new path", id),
            }
        }

        let last = self.broadcaster.position();
        let seed = seed_point(last, position);
        if seed != last {
            self.broadcaster.set_position(seed);
        }
        let entity = self.registry.create_entity(seed, &mut self.broadcaster)?;
        Ok(PointerDown::Created(entity.id()))
    }

    /// Pointer released anywhere in the document.
    ///
    /// Fires every armed end-of-gesture trigger once. Returns how many paths
    /// changed state; each one produces a "drawing changed" notification.
    pub fn pointer_up(&mut self) -> BoardResult<usize> {
        let mut fired = 0;
        for id in self.broadcaster.take_gesture_end() {
            let entity = self
                .registry
                .get_mut(id)
                .ok_or(BoardError::UnknownEntity(id))?;
            if entity.on_gesture_end(&mut self.broadcaster)? {
                fired += 1;
                self.broadcaster
                    .notify_drawing_changed(self.registry.entities());
            }
        }
        Ok(fired)
    }

    /// The surface as an SVG document.
    pub fn to_svg(&self) -> String {
        render_document(
            self.registry.entities(),
            &self.config,
            &SvgFrame::surface(&self.config),
        )
    }

    /// A scaled-down copy of the surface.
    pub fn to_thumbnail_svg(&self, thumbnail: &ThumbnailConfig) -> String {
        render_document(
            self.registry.entities(),
            &self.config,
            &SvgFrame::thumbnail(thumbnail),
        )
    }
}

/// Seed point for a new path.
///
/// Normally the last position the broadcaster saw. A coordinate of exactly
/// `0` counts as "no position known", in which case the pointer-down's own
/// position is used instead. This also applies to a genuine move to the
/// origin axis.
pub fn seed_point(last: Point, gesture: Point) -> Point {
    if last.x == 0.0 || last.y == 0.0 {
        gesture
    } else {
        last
    }
}
