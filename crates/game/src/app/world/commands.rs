use super::GameObject;

/// Deferred world mutations and cross-object effects. Objects push commands
/// during the update sweep; the game applies the drained queue only after the
/// sweep completes, so registry iteration stays well-defined.
pub(crate) enum WorldCommand {
    RequestSceneSwitch,
    StopWorldScroll,
    MarkBirdDone,
    AddScore(u32),
    PlaySound(&'static str),
    RestartSound(&'static str),
    Spawn {
        signature: String,
        object: Box<dyn GameObject>,
    },
    Despawn {
        signature: String,
    },
}

#[derive(Default)]
pub(crate) struct CommandQueue {
    items: Vec<WorldCommand>,
}

impl CommandQueue {
    pub(crate) fn push(&mut self, command: WorldCommand) {
        self.items.push(command);
    }

    pub(crate) fn drain(&mut self) -> Vec<WorldCommand> {
        std::mem::take(&mut self.items)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
