use engine::{Canvas, RigidBody, Vec2};
use tracing::info;

use crate::app::world::{GameObject, UpdateContext, WorldCommand};

const MAX_WAIT_TIME: f32 = 1.0;
const WAIT_MOVE_LENGTH: f32 = 10.0;
const JUMP_UP_LENGTH: f32 = 70.0;
const JUMP_DOWN_LENGTH: f32 = 50.0;
const MOVE_SPEED: f32 = 350.0;
const ROTATE_SPEED: f32 = 200.0;
const MIN_ROTATE: f32 = -30.0;
const MAX_ROTATE: f32 = 90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BirdState {
    Wait,
    Jump,
    Fall,
    Done,
}

/// The player. Bobs in place until the first flap, then alternates between
/// jump arcs and free fall until it touches the floor.
pub(crate) struct Bird {
    body: RigidBody,
    state: BirdState,
    rotation_degrees: f32,
    wait_time: f32,
    wait_direction: f32,
    ascending: bool,
    jump_up_distance: f32,
    jump_down_distance: f32,
    update_order: i32,
}

impl Bird {
    pub(crate) fn new(center: Vec2, update_order: i32) -> Self {
        Self {
            body: RigidBody::new(center, 70.0, 50.0),
            state: BirdState::Wait,
            rotation_degrees: 0.0,
            wait_time: 0.0,
            wait_direction: 1.0,
            ascending: true,
            jump_up_distance: 0.0,
            jump_down_distance: 0.0,
            update_order,
        }
    }

    pub(crate) fn body(&self) -> RigidBody {
        self.body
    }

    pub(crate) fn state(&self) -> BirdState {
        self.state
    }

    pub(crate) fn is_done(&self) -> bool {
        self.state == BirdState::Done
    }

    /// Pipes mark the bird done through the command queue rather than
    /// touching it mid-sweep.
    pub(crate) fn mark_done(&mut self) {
        self.state = BirdState::Done;
    }

    #[cfg(test)]
    pub(crate) fn rotation_degrees(&self) -> f32 {
        self.rotation_degrees
    }

    fn begin_jump(&mut self, ctx: &mut UpdateContext<'_>) {
        self.state = BirdState::Jump;
        self.rotation_degrees = MIN_ROTATE;
        self.ascending = true;
        self.jump_up_distance = 0.0;
        self.jump_down_distance = 0.0;
        ctx.commands.push(WorldCommand::RestartSound("Jump"));
    }

    fn update_wait(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        self.wait_time += dt_seconds;
        self.body.center.y += self.wait_direction * WAIT_MOVE_LENGTH * dt_seconds;
        if self.wait_time > MAX_WAIT_TIME {
            self.wait_direction = -self.wait_direction;
            self.wait_time = 0.0;
        }
        if ctx.input.jump_pressed() {
            self.begin_jump(ctx);
        }
    }

    fn update_jump(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        let step = MOVE_SPEED * dt_seconds;
        if self.ascending {
            self.body.center.y -= step;
            self.jump_up_distance += step;
            if self.jump_up_distance > JUMP_UP_LENGTH {
                self.ascending = false;
            }
        } else {
            self.body.center.y += step;
            self.jump_down_distance += step;
            if self.jump_down_distance > JUMP_DOWN_LENGTH {
                self.state = BirdState::Fall;
            }
        }
        if self.body.center.y < 0.0 {
            self.body.center.y = 0.0;
        }
        // The frame's movement lands before a re-flap edge restarts the arc.
        if ctx.input.jump_pressed() {
            self.begin_jump(ctx);
        }
    }

    fn update_fall(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        if ctx.input.jump_pressed() {
            self.begin_jump(ctx);
            return;
        }
        self.rotation_degrees = (self.rotation_degrees + ROTATE_SPEED * dt_seconds).min(MAX_ROTATE);
        self.body.center.y += MOVE_SPEED * dt_seconds;
    }

    fn check_floor_collision(&mut self, ctx: &mut UpdateContext<'_>) {
        let Some(floor) = ctx.view.floor else {
            return;
        };
        if self.body.is_collision(&floor.body) {
            info!(y = self.body.center.y, "bird_hit_floor");
            self.state = BirdState::Done;
            ctx.commands.push(WorldCommand::StopWorldScroll);
            ctx.commands.push(WorldCommand::RestartSound("Hit"));
        }
    }
}

impl GameObject for Bird {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        match self.state {
            BirdState::Wait => self.update_wait(dt_seconds, ctx),
            BirdState::Jump => self.update_jump(dt_seconds, ctx),
            BirdState::Fall => self.update_fall(dt_seconds, ctx),
            BirdState::Done => return,
        }
        // Floor contact is tested against this frame's position, so the bird
        // never spends a frame overlapping the floor while still alive.
        self.check_floor_collision(ctx);
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        canvas.draw_texture(
            "Bird",
            self.body.center,
            self.body.width,
            self.body.height,
            self.rotation_degrees,
        );
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use engine::InputSnapshot;

    use crate::app::world::{CommandQueue, FloorProbe, WorldView};

    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn view_with_floor(top_y: f32) -> WorldView {
        WorldView {
            floor: Some(FloorProbe {
                body: RigidBody::new(Vec2::new(500.0, top_y + 50.0), 1000.0, 100.0),
                movable: true,
            }),
            bird: None,
        }
    }

    fn step(bird: &mut Bird, input: &InputSnapshot, view: &WorldView) -> Vec<WorldCommand> {
        let mut commands = CommandQueue::default();
        let mut ctx = UpdateContext {
            input,
            view,
            commands: &mut commands,
        };
        bird.update(DT, &mut ctx);
        commands.drain()
    }

    #[test]
    fn wait_state_bobs_and_flips_direction_after_max_wait_time() {
        let mut bird = Bird::new(Vec2::new(200.0, 400.0), 3);
        let input = InputSnapshot::empty();
        let view = WorldView::default();

        step(&mut bird, &input, &view);
        assert!(bird.body().center.y > 400.0);

        // Just over one second in; direction must have flipped exactly once.
        for _ in 0..65 {
            step(&mut bird, &input, &view);
        }
        assert_eq!(bird.state(), BirdState::Wait);
        assert!(bird.wait_direction < 0.0);
    }

    #[test]
    fn jump_edge_in_wait_starts_a_jump_with_flap_sound() {
        let mut bird = Bird::new(Vec2::new(200.0, 400.0), 3);
        let input = InputSnapshot::empty().with_jump_pressed(true);
        let view = WorldView::default();

        let commands = step(&mut bird, &input, &view);
        assert_eq!(bird.state(), BirdState::Jump);
        assert_eq!(bird.rotation_degrees(), MIN_ROTATE);
        assert!(commands
            .iter()
            .any(|cmd| matches!(cmd, WorldCommand::RestartSound("Jump"))));
    }

    #[test]
    fn jump_rises_then_descends_then_falls() {
        let mut bird = Bird::new(Vec2::new(200.0, 400.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let idle = InputSnapshot::empty();
        let view = WorldView::default();

        step(&mut bird, &jump, &view);
        let start_y = bird.body().center.y;

        // Rise phase covers JUMP_UP_LENGTH at MOVE_SPEED.
        let rise_ticks = (JUMP_UP_LENGTH / (MOVE_SPEED * DT)).ceil() as usize + 1;
        for _ in 0..rise_ticks {
            step(&mut bird, &idle, &view);
        }
        assert_eq!(bird.state(), BirdState::Jump);
        assert!(!bird.ascending);
        assert!(bird.body().center.y < start_y);

        let descend_ticks = (JUMP_DOWN_LENGTH / (MOVE_SPEED * DT)).ceil() as usize + 1;
        for _ in 0..descend_ticks {
            step(&mut bird, &idle, &view);
        }
        assert_eq!(bird.state(), BirdState::Fall);
    }

    #[test]
    fn re_jump_inside_jump_moves_before_restarting_the_arc() {
        let mut bird = Bird::new(Vec2::new(200.0, 400.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let view = WorldView::default();

        step(&mut bird, &jump, &view);
        let y_before = bird.body().center.y;

        step(&mut bird, &jump, &view);
        let expected = y_before - MOVE_SPEED * DT;
        assert!((bird.body().center.y - expected).abs() < 0.0001);
        assert_eq!(bird.state(), BirdState::Jump);
        assert!(bird.ascending);
        assert_eq!(bird.jump_up_distance, 0.0);
        assert_eq!(bird.jump_down_distance, 0.0);
    }

    #[test]
    fn jump_clamps_at_top_of_screen_only() {
        let mut bird = Bird::new(Vec2::new(200.0, 3.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let idle = InputSnapshot::empty();
        let view = WorldView::default();

        step(&mut bird, &jump, &view);
        for _ in 0..5 {
            step(&mut bird, &idle, &view);
        }
        assert_eq!(bird.body().center.y, 0.0);
    }

    #[test]
    fn re_jump_during_fall_resets_rotation_and_rises_again() {
        let mut bird = Bird::new(Vec2::new(200.0, 400.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let idle = InputSnapshot::empty();
        let view = WorldView::default();

        step(&mut bird, &jump, &view);
        for _ in 0..120 {
            step(&mut bird, &idle, &view);
        }
        assert_eq!(bird.state(), BirdState::Fall);
        assert!(bird.rotation_degrees() > MIN_ROTATE);

        step(&mut bird, &jump, &view);
        assert_eq!(bird.state(), BirdState::Jump);
        assert_eq!(bird.rotation_degrees(), MIN_ROTATE);
        assert!(bird.ascending);
    }

    #[test]
    fn fall_rotation_is_clamped_at_max() {
        let mut bird = Bird::new(Vec2::new(200.0, 100.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let idle = InputSnapshot::empty();
        let view = WorldView::default();

        step(&mut bird, &jump, &view);
        for _ in 0..240 {
            step(&mut bird, &idle, &view);
        }
        assert!(bird.rotation_degrees() <= MAX_ROTATE);
        assert_eq!(bird.rotation_degrees(), MAX_ROTATE);
    }

    #[test]
    fn floor_overlap_forces_done_and_stops_world_scroll() {
        let mut bird = Bird::new(Vec2::new(200.0, 660.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let idle = InputSnapshot::empty();
        let view = view_with_floor(700.0);

        step(&mut bird, &jump, &view);
        let mut hit_commands = Vec::new();
        for _ in 0..400 {
            hit_commands = step(&mut bird, &idle, &view);
            if bird.is_done() {
                break;
            }
        }
        assert!(bird.is_done());
        assert!(hit_commands
            .iter()
            .any(|cmd| matches!(cmd, WorldCommand::StopWorldScroll)));
        assert!(hit_commands
            .iter()
            .any(|cmd| matches!(cmd, WorldCommand::RestartSound("Hit"))));
    }

    #[test]
    fn done_state_ignores_input_and_never_moves() {
        let mut bird = Bird::new(Vec2::new(200.0, 660.0), 3);
        let jump = InputSnapshot::empty().with_jump_pressed(true);
        let idle = InputSnapshot::empty();
        let view = view_with_floor(700.0);

        step(&mut bird, &jump, &view);
        for _ in 0..400 {
            step(&mut bird, &idle, &view);
            if bird.is_done() {
                break;
            }
        }
        assert!(bird.is_done());
        let resting_y = bird.body().center.y;

        let commands = step(&mut bird, &jump, &view);
        assert!(commands.is_empty());
        assert_eq!(bird.body().center.y, resting_y);
        assert_eq!(bird.state(), BirdState::Done);
    }

    #[test]
    fn floor_hit_is_detected_on_the_same_frame_the_bird_crosses() {
        // Bottom sits 2 px above the floor; one fall step moves ~5.8 px, so
        // the crossing and the Done transition happen in a single update.
        let mut bird = Bird::new(Vec2::new(200.0, 673.0), 3);
        bird.state = BirdState::Fall;
        let idle = InputSnapshot::empty();
        let view = view_with_floor(700.0);

        let commands = step(&mut bird, &idle, &view);
        assert!(bird.is_done());
        assert!(commands
            .iter()
            .any(|cmd| matches!(cmd, WorldCommand::StopWorldScroll)));
    }
}
