//! Pointer broadcaster: the shared relay every path subscribes to.
//!
//! The broadcaster owns the last-known pointer state and an explicit set of
//! subscriptions. Subscriptions are added and removed only by drag
//! controller transitions; fan-out never mutates them.

use crate::entity::{EntityId, PathEntity};
use crate::error::{BoardError, BoardResult};
use crate::input::PointerState;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Which kind of position notification a subscriber wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Absolute positions, appended while drawing.
    Draw,
    /// Movement deltas, applied while dragging.
    Move,
}

/// "Position changed" notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionChanged {
    /// Absolute pointer position.
    pub position: Point,
    /// Movement since the previously recorded position.
    pub delta: Vec2,
}

/// A single `(entity, channel)` membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    pub entity: EntityId,
    pub channel: Channel,
}

/// Capability implemented by anything that receives position notifications.
pub trait PointerListener {
    fn on_position_changed(&mut self, channel: Channel, event: &PositionChanged);
}

/// Resolves subscription ids to listeners at fan-out time.
pub trait ListenerSet {
    fn listener_mut(&mut self, id: EntityId) -> Option<&mut dyn PointerListener>;
}

/// External observer of board notifications (e.g. a thumbnail renderer).
///
/// Observers are not needed for the board to work; both methods default to
/// doing nothing.
pub trait BoardObserver {
    fn on_position_changed(&mut self, _event: &PositionChanged) {}

    /// Called after a path finished drawing or dragging, with every entity in
    /// creation order.
    fn on_drawing_changed(&mut self, _entities: &[PathEntity]) {}
}

/// Publish/subscribe hub for pointer state.
#[derive(Default)]
pub struct PointerBroadcaster {
    state: PointerState,
    /// Channel memberships in subscription order.
    subscriptions: Vec<Subscription>,
    /// One-shot end-of-gesture triggers in arming order.
    gesture_end: Vec<EntityId>,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl std::fmt::Debug for PointerBroadcaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerBroadcaster")
            .field("state", &self.state)
            .field("subscriptions", &self.subscriptions)
            .field("gesture_end", &self.gesture_end)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PointerBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn position(&self) -> Point {
        self.state.position
    }

    /// Record a new absolute position.
    ///
    /// Returns the notification to publish, or `None` if the pointer did not
    /// actually move.
    pub fn update_position(&mut self, position: Point) -> Option<PositionChanged> {
        if position == self.state.position {
            return None;
        }
        let delta = self.state.advance(position);
        Some(PositionChanged { position, delta })
    }

    /// Overwrite the position without emitting anything.
    pub fn set_position(&mut self, position: Point) {
        self.state.reset(position);
    }

    /// Deliver `event` to every subscriber in subscription order, then to
    /// observers.
    pub fn publish(&mut self, event: &PositionChanged, listeners: &mut impl ListenerSet) {
        for subscription in &self.subscriptions {
            match listeners.listener_mut(subscription.entity) {
                Some(listener) => {
                    log::trace!(
                        "Delivering {:?} notification to {}",
                        subscription.channel,
                        subscription.entity
                    );
                    listener.on_position_changed(subscription.channel, event);
                }
                None => log::warn!("No listener for subscriber {}", subscription.entity),
            }
        }
        for observer in &mut self.observers {
            observer.on_position_changed(event);
        }
    }

    /// Tell observers that the drawing changed.
    pub fn notify_drawing_changed(&mut self, entities: &[PathEntity]) {
        log::debug!("Drawing changed ({} entities)", entities.len());
        for observer in &mut self.observers {
            observer.on_drawing_changed(entities);
        }
    }

    pub fn add_observer(&mut self, observer: Box<dyn BoardObserver>) {
        self.observers.push(observer);
    }

    /// Add `entity` to `channel`. An entity holds at most one membership per
    /// channel.
    pub fn subscribe(&mut self, entity: EntityId, channel: Channel) -> BoardResult<()> {
        if self.is_subscribed(entity, channel) {
            return Err(BoardError::InvalidState(format!(
                "{} is already subscribed to {:?}",
                entity, channel
            )));
        }
        self.subscriptions.push(Subscription { entity, channel });
        Ok(())
    }

    /// Remove `entity` from `channel`. Returns whether it was subscribed.
    pub fn unsubscribe(&mut self, entity: EntityId, channel: Channel) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions
            .retain(|s| !(s.entity == entity && s.channel == channel));
        self.subscriptions.len() != before
    }

    pub fn is_subscribed(&self, entity: EntityId, channel: Channel) -> bool {
        self.subscriptions
            .iter()
            .any(|s| s.entity == entity && s.channel == channel)
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Arm a document-wide one-shot end-of-gesture trigger for `entity`.
    pub fn arm_gesture_end(&mut self, entity: EntityId) -> BoardResult<()> {
        if self.gesture_end.contains(&entity) {
            return Err(BoardError::InvalidState(format!(
                "{} already has an end-of-gesture trigger",
                entity
            )));
        }
        self.gesture_end.push(entity);
        Ok(())
    }

    /// Remove and return every armed end-of-gesture trigger.
    pub fn take_gesture_end(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.gesture_end)
    }

    pub fn is_gesture_end_armed(&self, entity: EntityId) -> bool {
        self.gesture_end.contains(&entity)
    }
}
