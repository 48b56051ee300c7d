use engine::Vec2;
use tracing::info;

use super::objects::{
    Bird, BirdSlate, Button, ButtonAction, Floor, PipeDetector, ScoreCounter, SlideSlate,
    StaticDecor, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use super::world::{WorldError, WorldManager};

pub(crate) const BACKGROUND: &str = "Background";
pub(crate) const FLOOR: &str = "Floor";
pub(crate) const TITLE_SLATE: &str = "FlappyBirdSlate";
pub(crate) const BIRD_SLATE: &str = "BirdSlate";
pub(crate) const PLAY_BUTTON: &str = "PlayButton";
pub(crate) const BIRD: &str = "Bird";
pub(crate) const PIPE_DETECTOR: &str = "PipeDetector";
pub(crate) const BIRD_SCORE: &str = "BirdScore";
pub(crate) const RESULT_BOARD: &str = "ResultBoard";
pub(crate) const OK_BUTTON: &str = "OkButton";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SceneKind {
    Start,
    Play,
    Done,
}

impl SceneKind {
    pub(crate) fn next(self) -> SceneKind {
        match self {
            SceneKind::Start => SceneKind::Play,
            SceneKind::Play => SceneKind::Done,
            SceneKind::Done => SceneKind::Start,
        }
    }
}

/// Owns the active scene tag, the signatures the current scene registered,
/// and the pending switch flag. Scene transitions are the only place the
/// world registry is populated or torn down.
pub(crate) struct SceneController {
    active: SceneKind,
    registered: Vec<String>,
    switch_requested: bool,
}

impl SceneController {
    pub(crate) fn new() -> Self {
        Self {
            active: SceneKind::Start,
            registered: Vec::new(),
            switch_requested: false,
        }
    }

    pub(crate) fn active(&self) -> SceneKind {
        self.active
    }

    pub(crate) fn request_switch(&mut self) {
        self.switch_requested = true;
    }

    pub(crate) fn switch_pending(&self) -> bool {
        self.switch_requested
    }

    /// Tears down the active scene and enters the next one in the fixed
    /// Start -> Play -> Done -> Start cycle.
    pub(crate) fn advance(&mut self, world: &mut WorldManager) -> Result<(), WorldError> {
        let from = self.active;
        self.leave(world);
        self.active = from.next();
        self.enter(world)?;
        info!(from = ?from, to = ?self.active, "scene_switched");
        Ok(())
    }

    pub(crate) fn enter(&mut self, world: &mut WorldManager) -> Result<(), WorldError> {
        match self.active {
            SceneKind::Start => self.enter_start(world)?,
            SceneKind::Play => self.enter_play(world)?,
            SceneKind::Done => self.enter_done(world)?,
        }
        info!(scene = ?self.active, objects = world.len(), "scene_entered");
        Ok(())
    }

    pub(crate) fn leave(&mut self, world: &mut WorldManager) {
        self.switch_requested = false;

        // The score survives the Play scene so the result screen can adopt it.
        let keep_score = self.active == SceneKind::Play;

        let live_pipes: Vec<String> = world
            .get_as::<PipeDetector>(PIPE_DETECTOR)
            .map(|detector| detector.spawned_signatures().to_vec())
            .unwrap_or_default();

        for signature in std::mem::take(&mut self.registered) {
            if keep_score && signature == BIRD_SCORE {
                continue;
            }
            world.remove(&signature);
        }
        // Pipes that already despawned themselves are silent no-ops here.
        for signature in live_pipes {
            world.remove(&signature);
        }
        info!(scene = ?self.active, "scene_left");
    }

    fn register(
        &mut self,
        world: &mut WorldManager,
        signature: &str,
        object: Box<dyn super::world::GameObject>,
    ) -> Result<(), WorldError> {
        world.add(signature, object)?;
        self.registered.push(signature.to_string());
        Ok(())
    }

    fn register_background(&mut self, world: &mut WorldManager) -> Result<(), WorldError> {
        self.register(
            world,
            BACKGROUND,
            Box::new(StaticDecor::new(
                "Background",
                Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
                SCREEN_WIDTH,
                SCREEN_HEIGHT,
                0,
            )),
        )
    }

    fn enter_start(&mut self, world: &mut WorldManager) -> Result<(), WorldError> {
        self.register_background(world)?;
        self.register(world, FLOOR, Box::new(Floor::new(true, 2)))?;
        self.register(
            world,
            TITLE_SLATE,
            Box::new(SlideSlate::new(
                "Title",
                Vec2::new(500.0, 200.0),
                400.0,
                100.0,
                20.0,
                1.0,
                1,
            )),
        )?;
        self.register(
            world,
            BIRD_SLATE,
            Box::new(BirdSlate::new(Vec2::new(750.0, 200.0), 1)),
        )?;
        self.register(
            world,
            PLAY_BUTTON,
            Box::new(Button::new(
                "PlayButton",
                Vec2::new(500.0, 400.0),
                200.0,
                120.0,
                vec![
                    ButtonAction::PlaySound("Click"),
                    ButtonAction::RequestSceneSwitch,
                ],
                2,
            )),
        )?;
        Ok(())
    }

    fn enter_play(&mut self, world: &mut WorldManager) -> Result<(), WorldError> {
        self.register_background(world)?;
        self.register(world, FLOOR, Box::new(Floor::new(true, 2)))?;
        self.register(world, BIRD, Box::new(Bird::new(Vec2::new(200.0, 400.0), 3)))?;
        self.register(world, PIPE_DETECTOR, Box::new(PipeDetector::new(4)))?;
        self.register(
            world,
            BIRD_SCORE,
            Box::new(ScoreCounter::new(Vec2::new(500.0, 100.0), 7)),
        )?;
        Ok(())
    }

    fn enter_done(&mut self, world: &mut WorldManager) -> Result<(), WorldError> {
        self.register_background(world)?;
        self.register(world, FLOOR, Box::new(Floor::new(false, 2)))?;
        self.register(
            world,
            RESULT_BOARD,
            Box::new(StaticDecor::new(
                "ResultBoard",
                Vec2::new(500.0, 400.0),
                500.0,
                200.0,
                6,
            )),
        )?;
        self.register(
            world,
            OK_BUTTON,
            Box::new(Button::new(
                "OkButton",
                Vec2::new(500.0, 600.0),
                160.0,
                60.0,
                vec![
                    ButtonAction::RestartSound("Done"),
                    ButtonAction::RequestSceneSwitch,
                ],
                6,
            )),
        )?;

        // Adopt the score carried over from Play; from here it is this
        // scene's responsibility, so its leave removes it.
        let final_position = Vec2::new(650.0, 400.0);
        match world.get_mut_as::<ScoreCounter>(BIRD_SCORE) {
            Some(score) => {
                score.move_to(final_position, 7);
                self.registered.push(BIRD_SCORE.to_string());
            }
            None => {
                self.register(
                    world,
                    BIRD_SCORE,
                    Box::new(ScoreCounter::new(final_position, 7)),
                )?;
            }
        }
        Ok(())
    }
}
