mod commands;
mod manager;

pub(crate) use commands::{CommandQueue, WorldCommand};
pub(crate) use manager::{WorldError, WorldManager};

use std::any::Any;

use engine::{Canvas, InputSnapshot, RigidBody};

/// A polymorphic world unit. Objects own their state machines and bodies;
/// anything they need from other objects arrives through the read-only
/// [`WorldView`], and anything they want to change outside themselves goes
/// through the command queue.
pub(crate) trait GameObject {
    fn update_order(&self) -> i32;

    fn is_active(&self) -> bool {
        true
    }

    fn update(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>);

    fn render(&mut self, canvas: &mut Canvas<'_>);

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

pub(crate) struct UpdateContext<'a> {
    pub input: &'a InputSnapshot,
    pub view: &'a WorldView,
    pub commands: &'a mut CommandQueue,
}

/// Read-only cross-object probes, rebuilt before every update sweep.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct WorldView {
    pub floor: Option<FloorProbe>,
    pub bird: Option<BirdProbe>,
}

impl WorldView {
    /// The floor's movable flag doubles as the world-scroll master switch.
    pub(crate) fn world_scrolling(&self) -> bool {
        self.floor.map(|floor| floor.movable).unwrap_or(false)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FloorProbe {
    pub body: RigidBody,
    pub movable: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct BirdProbe {
    pub body: RigidBody,
    pub done: bool,
}
