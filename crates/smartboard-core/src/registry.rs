//! Ordered, append-only collection of path entities.

use crate::broadcast::{ListenerSet, PointerBroadcaster, PointerListener};
use crate::entity::{EntityId, PathEntity};
use crate::error::BoardResult;
use kurbo::Point;
use std::collections::HashMap;

/// Every entity on a surface, in creation order.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    entities: Vec<PathEntity>,
    /// Position of each entity in `entities`. Stable since nothing is removed.
    index: HashMap<EntityId, usize>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a drawing entity seeded with `seed` and append it.
    pub fn create_entity(
        &mut self,
        seed: Point,
        broadcaster: &mut PointerBroadcaster,
    ) -> BoardResult<&PathEntity> {
        let entity = PathEntity::new(seed, broadcaster)?;
        log::debug!("Created {} at ({}, {})", entity.id(), seed.x, seed.y);

        let position = self.entities.len();
        self.index.insert(entity.id(), position);
        self.entities.push(entity);
        Ok(&self.entities[position])
    }

    /// Look up an entity by id.
    pub fn get(&self, id: EntityId) -> Option<&PathEntity> {
        self.index.get(&id).map(|&i| &self.entities[i])
    }

    /// Look up an entity by id for mutation.
    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut PathEntity> {
        self.index.get(&id).map(|&i| &mut self.entities[i])
    }

    /// Entity at creation position `position`.
    pub fn get_index(&self, position: usize) -> Option<&PathEntity> {
        self.entities.get(position)
    }

    /// Get all entities in creation order.
    pub fn entities(&self) -> &[PathEntity] {
        &self.entities
    }

    /// Iterate entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &PathEntity> {
        self.entities.iter()
    }

    /// Get the number of entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether no entity has been created yet.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl ListenerSet for EntityRegistry {
    fn listener_mut(&mut self, id: EntityId) -> Option<&mut dyn PointerListener> {
        self.get_mut(id).map(|entity| entity as &mut dyn PointerListener)
    }
}
