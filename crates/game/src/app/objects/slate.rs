use engine::{Canvas, RigidBody, Vec2};

use crate::app::world::{GameObject, UpdateContext};

const CHANGE_WING_STATE_TIME: f32 = 0.09;

/// Wing cycle for the menu bird: up, level, down, level, repeat. The level
/// frame always sits between the extremes.
const WING_TEXTURES: [&str; 4] = ["BirdUp", "BirdNormal", "BirdDown", "BirdNormal"];

/// Linear up-and-down drift within a narrow band, flipping direction on a
/// fixed period. Shared by the title card and the menu bird.
struct SlideMotion {
    move_length: f32,
    max_wait_time: f32,
    wait_time: f32,
    direction: f32,
}

impl SlideMotion {
    fn new(move_length: f32, max_wait_time: f32) -> Self {
        Self {
            move_length,
            max_wait_time,
            wait_time: 0.0,
            direction: 1.0,
        }
    }

    fn advance(&mut self, dt_seconds: f32, y: &mut f32) {
        self.wait_time += dt_seconds;
        *y += self.direction * self.move_length * dt_seconds;
        if self.wait_time > self.max_wait_time {
            self.direction = -self.direction;
            self.wait_time = 0.0;
        }
    }
}

/// A decorative slate drifting in place. Used for the title card on the
/// start scene.
pub(crate) struct SlideSlate {
    texture: &'static str,
    body: RigidBody,
    motion: SlideMotion,
    update_order: i32,
}

impl SlideSlate {
    pub(crate) fn new(
        texture: &'static str,
        center: Vec2,
        width: f32,
        height: f32,
        move_length: f32,
        max_wait_time: f32,
        update_order: i32,
    ) -> Self {
        Self {
            texture,
            body: RigidBody::new(center, width, height),
            motion: SlideMotion::new(move_length, max_wait_time),
            update_order,
        }
    }
}

impl GameObject for SlideSlate {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, dt_seconds: f32, _ctx: &mut UpdateContext<'_>) {
        self.motion.advance(dt_seconds, &mut self.body.center.y);
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        canvas.draw_texture(
            self.texture,
            self.body.center,
            self.body.width,
            self.body.height,
            0.0,
        );
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

/// The menu bird: slides like any slate and flaps its wings on a fixed-period
/// four-frame cycle. Purely decorative, never terminal.
pub(crate) struct BirdSlate {
    body: RigidBody,
    motion: SlideMotion,
    wing_time: f32,
    wing_phase: usize,
    update_order: i32,
}

impl BirdSlate {
    pub(crate) fn new(center: Vec2, update_order: i32) -> Self {
        Self {
            body: RigidBody::new(center, 70.0, 50.0),
            motion: SlideMotion::new(20.0, 1.0),
            wing_time: 0.0,
            wing_phase: 0,
            update_order,
        }
    }

    fn wing_texture(&self) -> &'static str {
        WING_TEXTURES[self.wing_phase]
    }
}

impl GameObject for BirdSlate {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, dt_seconds: f32, _ctx: &mut UpdateContext<'_>) {
        self.motion.advance(dt_seconds, &mut self.body.center.y);
        self.wing_time += dt_seconds;
        if self.wing_time > CHANGE_WING_STATE_TIME {
            self.wing_time = 0.0;
            self.wing_phase = (self.wing_phase + 1) % WING_TEXTURES.len();
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        canvas.draw_texture(
            self.wing_texture(),
            self.body.center,
            self.body.width,
            self.body.height,
            0.0,
        );
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
