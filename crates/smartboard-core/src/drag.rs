//! Per-path drawing/dragging state machine.
//!
//! ```text
//!   Drawing --end--> Idle --begin--> Dragging --end--> Idle ...
//! ```
//!
//! Begin and end triggers are one-shot: a transition consumes the trigger
//! that fired it and arms the next one. While a trigger is not armed the
//! matching gesture is ignored, so a path can never start a second drag
//! before the first one ends.

use crate::broadcast::{Channel, PointerBroadcaster, PositionChanged};
use crate::entity::EntityId;
use crate::error::{BoardError, BoardResult};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Interaction state of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DragState {
    /// Incoming positions are appended as new points.
    #[default]
    Drawing,
    /// Not reacting to pointer movement.
    Idle,
    /// Incoming deltas translate the whole path.
    Dragging,
}

impl DragState {
    /// Broadcaster channel the path listens on in this state.
    pub fn channel(self) -> Option<Channel> {
        match self {
            DragState::Drawing => Some(Channel::Draw),
            DragState::Idle => None,
            DragState::Dragging => Some(Channel::Move),
        }
    }
}

/// Geometry change requested by a position notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathEdit {
    Append(Point),
    Translate(Vec2),
}

/// State machine deciding how one path reacts to pointer notifications.
#[derive(Debug, Clone)]
pub struct DragController {
    entity: EntityId,
    state: DragState,
    /// Begin-gesture trigger on the path's own geometry.
    begin_armed: bool,
    /// Document-wide end-of-gesture trigger.
    end_armed: bool,
}

impl DragController {
    /// Enter `Drawing`: subscribe to the draw channel and arm the end
    /// trigger.
    pub fn start(entity: EntityId, broadcaster: &mut PointerBroadcaster) -> BoardResult<Self> {
        broadcaster.subscribe(entity, Channel::Draw)?;
        broadcaster.arm_gesture_end(entity)?;
        log::debug!("{} entered {:?}", entity, DragState::Drawing);
        Ok(Self {
            entity,
            state: DragState::Drawing,
            begin_armed: false,
            end_armed: true,
        })
    }

    /// Get the path this controller drives.
    pub fn entity(&self) -> EntityId {
        self.entity
    }

    /// Get the current interaction state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Whether a pointer-down on the path would start a drag.
    pub fn is_begin_armed(&self) -> bool {
        self.begin_armed
    }

    /// Whether the next pointer-up ends the current gesture.
    pub fn is_end_armed(&self) -> bool {
        self.end_armed
    }

    /// What a notification on `channel` means in the current state.
    pub fn interpret(&self, channel: Channel, event: &PositionChanged) -> Option<PathEdit> {
        match (self.state, channel) {
            (DragState::Drawing, Channel::Draw) => Some(PathEdit::Append(event.position)),
            (DragState::Dragging, Channel::Move) => Some(PathEdit::Translate(event.delta)),
            _ => None,
        }
    }

    /// Begin-gesture on this path's geometry: `Idle -> Dragging`.
    ///
    /// Returns `false` (and changes nothing) if the begin trigger is not armed.
    pub fn begin_gesture(&mut self, broadcaster: &mut PointerBroadcaster) -> BoardResult<bool> {
        if !self.begin_armed {
            return Ok(false);
        }
        if broadcaster.is_gesture_end_armed(self.entity) {
            return Err(BoardError::InvalidState(format!(
                "{} already has an end-of-gesture trigger armed",
                self.entity
            )));
        }
        broadcaster.subscribe(self.entity, Channel::Move)?;
        broadcaster.arm_gesture_end(self.entity)?;
        self.begin_armed = false;
        self.end_armed = true;
        self.transition(DragState::Dragging);
        Ok(true)
    }

    /// End-of-gesture: `Drawing -> Idle` or `Dragging -> Idle`.
    ///
    /// The caller has already removed the trigger from the broadcaster.
    /// Returns `false` if this controller had no end trigger armed.
    pub fn end_gesture(&mut self, broadcaster: &mut PointerBroadcaster) -> BoardResult<bool> {
        if !self.end_armed {
            return Ok(false);
        }
        if let Some(channel) = self.state.channel() {
            broadcaster.unsubscribe(self.entity, channel);
        }
        self.end_armed = false;
        self.begin_armed = true;
        self.transition(DragState::Idle);
        Ok(true)
    }

    fn transition(&mut self, to: DragState) {
        log::debug!("{}: {:?} -> {:?}", self.entity, self.state, to);
        self.state = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> (DragController, PointerBroadcaster) {
        let mut broadcaster = PointerBroadcaster::new();
        let controller = DragController::start(EntityId::new(), &mut broadcaster).unwrap();
        (controller, broadcaster)
    }

    fn event(x: f64, y: f64, dx: f64, dy: f64) -> PositionChanged {
        PositionChanged {
            position: Point::new(x, y),
            delta: Vec2::new(dx, dy),
        }
    }

    #[test]
    fn test_starts_drawing() {
        let (controller, broadcaster) = started();
        let id = controller.entity();

        assert_eq!(controller.state(), DragState::Drawing);
        assert!(broadcaster.is_subscribed(id, Channel::Draw));
        assert!(!broadcaster.is_subscribed(id, Channel::Move));
        assert!(broadcaster.is_gesture_end_armed(id));
        assert!(controller.is_end_armed());
        assert!(!controller.is_begin_armed());
    }

    #[test]
    fn test_interpret_by_state() {
        let (mut controller, mut broadcaster) = started();
        let e = event(4.0, 5.0, 1.0, -1.0);

        assert_eq!(
            controller.interpret(Channel::Draw, &e),
            Some(PathEdit::Append(Point::new(4.0, 5.0)))
        );
        assert_eq!(controller.interpret(Channel::Move, &e), None);

        broadcaster.take_gesture_end();
        controller.end_gesture(&mut broadcaster).unwrap();
        assert_eq!(controller.interpret(Channel::Draw, &e), None);
        assert_eq!(controller.interpret(Channel::Move, &e), None);

        controller.begin_gesture(&mut broadcaster).unwrap();
        assert_eq!(
            controller.interpret(Channel::Move, &e),
            Some(PathEdit::Translate(Vec2::new(1.0, -1.0)))
        );
        assert_eq!(controller.interpret(Channel::Draw, &e), None);
    }

    #[test]
    fn test_full_cycle() {
        let (mut controller, mut broadcaster) = started();
        let id = controller.entity();

        assert_eq!(broadcaster.take_gesture_end(), vec![id]);
        assert!(controller.end_gesture(&mut broadcaster).unwrap());
        assert_eq!(controller.state(), DragState::Idle);
        assert!(broadcaster.subscriptions().is_empty());
        assert!(controller.is_begin_armed());

        assert!(controller.begin_gesture(&mut broadcaster).unwrap());
        assert_eq!(controller.state(), DragState::Dragging);
        assert!(broadcaster.is_subscribed(id, Channel::Move));
        assert!(broadcaster.is_gesture_end_armed(id));
        assert!(!controller.is_begin_armed());

        assert_eq!(broadcaster.take_gesture_end(), vec![id]);
        assert!(controller.end_gesture(&mut broadcaster).unwrap());
        assert_eq!(controller.state(), DragState::Idle);
        assert!(broadcaster.subscriptions().is_empty());
        assert!(controller.is_begin_armed());
    }

    #[test]
    fn test_begin_ignored_unless_armed() {
        let (mut controller, mut broadcaster) = started();

        // Still drawing: begin trigger not armed yet.
        assert!(!controller.begin_gesture(&mut broadcaster).unwrap());
        assert_eq!(controller.state(), DragState::Drawing);

        broadcaster.take_gesture_end();
        controller.end_gesture(&mut broadcaster).unwrap();
        assert!(controller.begin_gesture(&mut broadcaster).unwrap());

        // Already dragging: the trigger was consumed.
        assert!(!controller.begin_gesture(&mut broadcaster).unwrap());
        assert_eq!(controller.state(), DragState::Dragging);
        assert_eq!(broadcaster.subscriptions().len(), 1);
    }

    #[test]
    fn test_end_ignored_unless_armed() {
        let (mut controller, mut broadcaster) = started();
        broadcaster.take_gesture_end();
        assert!(controller.end_gesture(&mut broadcaster).unwrap());

        assert!(!controller.end_gesture(&mut broadcaster).unwrap());
        assert_eq!(controller.state(), DragState::Idle);
        assert!(controller.is_begin_armed());
    }

    #[test]
    fn test_begin_leaves_no_subscription_on_error() {
        let (mut controller, mut broadcaster) = started();
        let id = controller.entity();
        broadcaster.take_gesture_end();
        controller.end_gesture(&mut broadcaster).unwrap();

        broadcaster.arm_gesture_end(id).unwrap();
        let err = controller.begin_gesture(&mut broadcaster).unwrap_err();
        assert!(matches!(err, BoardError::InvalidState(_)));

        assert!(!broadcaster.is_subscribed(id, Channel::Move));
        assert_eq!(controller.state(), DragState::Idle);
        assert!(controller.is_begin_armed());
        assert!(!controller.is_end_armed());
    }

    #[test]
    fn test_state_channels() {
        assert_eq!(DragState::Drawing.channel(), Some(Channel::Draw));
        assert_eq!(DragState::Idle.channel(), None);
        assert_eq!(DragState::Dragging.channel(), Some(Channel::Move));
        assert_eq!(DragState::default(), DragState::Drawing);
    }
}
