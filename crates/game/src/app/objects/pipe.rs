use engine::{Canvas, RigidBody, Vec2};
use rand::Rng;
use tracing::debug;

use crate::app::world::{GameObject, UpdateContext, WorldCommand};

use super::{FLOOR_TOP_Y, WORLD_SCROLL_SPEED};

const PIPE_WIDTH: f32 = 100.0;
const GAP_HEIGHT: f32 = 200.0;
const SPAWN_X: f32 = 1100.0;
const SPAWN_INTERVAL: f32 = 2.0;

/// Band of valid gap centers. Keeps both pipe halves strictly on screen.
const GAP_CENTER_MIN: f32 = 250.0;
const GAP_CENTER_MAX: f32 = 550.0;

/// One pipe pair: a top and a bottom column sharing an x position with a
/// fixed vertical gap. Scrolls left with the world, despawns itself once
/// fully off screen, and awards a point the first time the bird passes it.
pub(crate) struct Pipe {
    signature: String,
    column_x: f32,
    gap_center_y: f32,
    scored: bool,
    update_order: i32,
}

impl Pipe {
    pub(crate) fn new(signature: String, column_x: f32, gap_center_y: f32, update_order: i32) -> Self {
        Self {
            signature,
            column_x,
            gap_center_y,
            scored: false,
            update_order,
        }
    }

    fn top_body(&self) -> RigidBody {
        let height = self.gap_center_y - GAP_HEIGHT / 2.0;
        RigidBody::new(Vec2::new(self.column_x, height / 2.0), PIPE_WIDTH, height)
    }

    fn bottom_body(&self) -> RigidBody {
        let top = self.gap_center_y + GAP_HEIGHT / 2.0;
        let height = FLOOR_TOP_Y - top;
        RigidBody::new(
            Vec2::new(self.column_x, top + height / 2.0),
            PIPE_WIDTH,
            height,
        )
    }

    fn right_edge(&self) -> f32 {
        self.column_x + PIPE_WIDTH / 2.0
    }
}

impl GameObject for Pipe {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        if ctx.view.world_scrolling() {
            self.column_x -= WORLD_SCROLL_SPEED * dt_seconds;
        }

        if let Some(bird) = ctx.view.bird {
            if !bird.done {
                if bird.body.is_collision(&self.top_body())
                    || bird.body.is_collision(&self.bottom_body())
                {
                    ctx.commands.push(WorldCommand::MarkBirdDone);
                    ctx.commands.push(WorldCommand::StopWorldScroll);
                    ctx.commands.push(WorldCommand::RestartSound("Hit"));
                } else if !self.scored && bird.body.center.x > self.column_x {
                    self.scored = true;
                    ctx.commands.push(WorldCommand::AddScore(1));
                    ctx.commands.push(WorldCommand::PlaySound("Score"));
                }
            }
        }

        if self.right_edge() < 0.0 {
            debug!(signature = %self.signature, "pipe_off_screen");
            ctx.commands.push(WorldCommand::Despawn {
                signature: self.signature.clone(),
            });
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let top = self.top_body();
        canvas.draw_texture("Pipe", top.center, top.width, top.height, 180.0);
        let bottom = self.bottom_body();
        canvas.draw_texture("Pipe", bottom.center, bottom.width, bottom.height, 0.0);
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// Spawns pipe pairs on a fixed cadence while the world scrolls and keeps
/// the list of signatures it has spawned so scene teardown can remove any
/// survivors.
pub(crate) struct PipeDetector {
    spawn_timer: f32,
    spawn_counter: u64,
    spawned: Vec<String>,
    update_order: i32,
}

impl PipeDetector {
    pub(crate) fn new(update_order: i32) -> Self {
        Self {
            spawn_timer: 0.0,
            spawn_counter: 0,
            spawned: Vec::new(),
            update_order,
        }
    }

    pub(crate) fn spawned_signatures(&self) -> &[String] {
        &self.spawned
    }

    #[cfg(test)]
    pub(crate) fn note_spawn_for_test(&mut self, signature: &str) {
        self.spawned.push(signature.to_string());
    }
}

impl GameObject for PipeDetector {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        if !ctx.view.world_scrolling() {
            return;
        }
        self.spawn_timer += dt_seconds;
        if self.spawn_timer < SPAWN_INTERVAL {
            return;
        }
        self.spawn_timer -= SPAWN_INTERVAL;

        let signature = format!("Pipe{}", self.spawn_counter);
        self.spawn_counter += 1;
        let gap_center_y = rand::thread_rng().gen_range(GAP_CENTER_MIN..=GAP_CENTER_MAX);
        debug!(signature = %signature, gap_center_y, "pipe_spawned");

        let pipe = Pipe::new(signature.clone(), SPAWN_X, gap_center_y, self.update_order + 1);
        self.spawned.push(signature.clone());
        ctx.commands.push(WorldCommand::Spawn {
            signature,
            object: Box::new(pipe),
        });
    }

    fn render(&mut self, _canvas: &mut Canvas<'_>) {}

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
