use std::collections::HashMap;

use engine::Canvas;
use thiserror::Error;

use super::{CommandQueue, GameObject, UpdateContext, WorldView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum WorldError {
    #[error("duplicate world signature '{0}'")]
    DuplicateSignature(String),
}

struct Slot {
    object: Box<dyn GameObject>,
    insertion: u64,
}

/// String-keyed registry of every live game object. Lookup is O(1); the
/// update and render sweeps run as two separate full passes over active
/// objects, ascending by update order with insertion order as the tie-break.
#[derive(Default)]
pub(crate) struct WorldManager {
    slots: HashMap<String, Slot>,
    insertion_counter: u64,
}

impl WorldManager {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    pub(crate) fn contains(&self, signature: &str) -> bool {
        self.slots.contains_key(signature)
    }

    pub(crate) fn add(
        &mut self,
        signature: &str,
        object: Box<dyn GameObject>,
    ) -> Result<(), WorldError> {
        if self.slots.contains_key(signature) {
            return Err(WorldError::DuplicateSignature(signature.to_string()));
        }
        let insertion = self.insertion_counter;
        self.insertion_counter += 1;
        self.slots
            .insert(signature.to_string(), Slot { object, insertion });
        Ok(())
    }

    /// Removing an absent signature is deliberately a no-op so scene
    /// teardown does not have to care whether dynamic objects already
    /// despawned themselves.
    pub(crate) fn remove(&mut self, signature: &str) {
        self.slots.remove(signature);
    }

    pub(crate) fn get_as<T: 'static>(&self, signature: &str) -> Option<&T> {
        self.slots
            .get(signature)
            .and_then(|slot| slot.object.as_any().downcast_ref::<T>())
    }

    pub(crate) fn get_mut_as<T: 'static>(&mut self, signature: &str) -> Option<&mut T> {
        self.slots
            .get_mut(signature)
            .and_then(|slot| slot.object.as_any_mut().downcast_mut::<T>())
    }

    pub(crate) fn update_pass(
        &mut self,
        dt_seconds: f32,
        input: &engine::InputSnapshot,
        view: &WorldView,
        commands: &mut CommandQueue,
    ) {
        for signature in self.ordered_active_signatures() {
            if let Some(slot) = self.slots.get_mut(&signature) {
                let mut ctx = UpdateContext {
                    input,
                    view,
                    commands,
                };
                slot.object.update(dt_seconds, &mut ctx);
            }
        }
    }

    pub(crate) fn render_pass(&mut self, canvas: &mut Canvas<'_>) {
        for signature in self.ordered_active_signatures() {
            if let Some(slot) = self.slots.get_mut(&signature) {
                slot.object.render(canvas);
            }
        }
    }

    fn ordered_active_signatures(&self) -> Vec<String> {
        let mut entries: Vec<(&String, i32, u64)> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.object.is_active())
            .map(|(signature, slot)| (signature, slot.object.update_order(), slot.insertion))
            .collect();
        entries.sort_by_key(|(_, order, insertion)| (*order, *insertion));
        entries
            .into_iter()
            .map(|(signature, _, _)| signature.clone())
            .collect()
    }
}
