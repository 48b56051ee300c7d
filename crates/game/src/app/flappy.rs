use engine::{
    AudioMixer, Canvas, ContentDatabase, ContentError, Game, InputSnapshot, UpdateFlow,
};
use thiserror::Error;
use tracing::{info, warn};

use super::objects::{Bird, Floor, ScoreCounter};
use super::scenes::{SceneController, BIRD, BIRD_SCORE, FLOOR};
use super::world::{
    BirdProbe, CommandQueue, FloorProbe, WorldCommand, WorldError, WorldManager, WorldView,
};

const SKY_COLOR: [u8; 4] = [120, 200, 255, 255];

/// Every texture signature the scenes draw with. Checked once at boot so a
/// broken asset manifest fails loudly instead of rendering placeholders.
const REQUIRED_TEXTURE_KEYS: &[&str] = &[
    "Background",
    "Floor",
    "Bird",
    "BirdUp",
    "BirdNormal",
    "BirdDown",
    "Title",
    "PlayButton",
    "OkButton",
    "ResultBoard",
    "Pipe",
    "Number0",
    "Number1",
    "Number2",
    "Number3",
    "Number4",
    "Number5",
    "Number6",
    "Number7",
    "Number8",
    "Number9",
];

/// Every sound signature the scenes and objects play. Validated at boot for
/// the same reason as the textures.
const REQUIRED_SOUND_KEYS: &[&str] = &["Click", "Jump", "Hit", "Score", "Done"];

#[derive(Debug, Error)]
pub(crate) enum GameError {
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// The whole game: one object registry plus one scene controller, driven by
/// the engine's fixed-tick loop.
pub(crate) struct FlappyGame {
    world: WorldManager,
    scenes: SceneController,
    commands: CommandQueue,
}

impl FlappyGame {
    pub(crate) fn new() -> Self {
        Self {
            world: WorldManager::new(),
            scenes: SceneController::new(),
            commands: CommandQueue::default(),
        }
    }

    fn build_view(&self) -> WorldView {
        WorldView {
            floor: self.world.get_as::<Floor>(FLOOR).map(|floor| FloorProbe {
                body: floor.body(),
                movable: floor.is_movable(),
            }),
            bird: self.world.get_as::<Bird>(BIRD).map(|bird| BirdProbe {
                body: bird.body(),
                done: bird.is_done(),
            }),
        }
    }

    fn apply_commands(&mut self, audio: &mut AudioMixer) {
        for command in self.commands.drain() {
            match command {
                WorldCommand::RequestSceneSwitch => self.scenes.request_switch(),
                WorldCommand::StopWorldScroll => {
                    match self.world.get_mut_as::<Floor>(FLOOR) {
                        Some(floor) => floor.set_movable(false),
                        None => warn!(target_signature = FLOOR, "command_target_missing"),
                    }
                }
                WorldCommand::MarkBirdDone => match self.world.get_mut_as::<Bird>(BIRD) {
                    Some(bird) => bird.mark_done(),
                    None => warn!(target_signature = BIRD, "command_target_missing"),
                },
                WorldCommand::AddScore(points) => {
                    match self.world.get_mut_as::<ScoreCounter>(BIRD_SCORE) {
                        Some(score) => score.add(points),
                        None => warn!(target_signature = BIRD_SCORE, "command_target_missing"),
                    }
                }
                WorldCommand::PlaySound(key) => audio.play(key),
                WorldCommand::RestartSound(key) => audio.restart(key),
                WorldCommand::Spawn { signature, object } => {
                    if let Err(error) = self.world.add(&signature, object) {
                        warn!(%signature, %error, "spawn_rejected");
                    }
                }
                WorldCommand::Despawn { signature } => self.world.remove(&signature),
            }
        }
    }
}

impl Game for FlappyGame {
    type Error = GameError;

    fn boot(&mut self, content: &ContentDatabase, _audio: &mut AudioMixer) -> Result<(), GameError> {
        for key in REQUIRED_TEXTURE_KEYS {
            content.texture_path(key)?;
        }
        for key in REQUIRED_SOUND_KEYS {
            content.sound_path(key)?;
        }
        info!(
            textures = REQUIRED_TEXTURE_KEYS.len(),
            sounds = REQUIRED_SOUND_KEYS.len(),
            "assets_verified"
        );
        self.scenes.enter(&mut self.world)?;
        Ok(())
    }

    fn update(
        &mut self,
        dt_seconds: f32,
        input: &InputSnapshot,
        audio: &mut AudioMixer,
    ) -> Result<UpdateFlow, GameError> {
        if input.quit_requested() {
            info!("shutdown_requested");
            return Ok(UpdateFlow::Exit);
        }

        let view = self.build_view();
        self.world
            .update_pass(dt_seconds, input, &view, &mut self.commands);
        self.apply_commands(audio);

        if self.scenes.switch_pending() {
            self.scenes.advance(&mut self.world)?;
        }
        Ok(UpdateFlow::Continue)
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        canvas.clear(SKY_COLOR);
        self.world.render_pass(canvas);
    }
}
