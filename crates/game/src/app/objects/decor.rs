use engine::{Canvas, RigidBody, Vec2};

use crate::app::world::{GameObject, UpdateContext};

/// A fixed texture with no behavior. Backgrounds and result boards.
pub(crate) struct StaticDecor {
    texture: &'static str,
    body: RigidBody,
    update_order: i32,
}

impl StaticDecor {
    pub(crate) fn new(
        texture: &'static str,
        center: Vec2,
        width: f32,
        height: f32,
        update_order: i32,
    ) -> Self {
        Self {
            texture,
            body: RigidBody::new(center, width, height),
            update_order,
        }
    }
}

impl GameObject for StaticDecor {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, _dt_seconds: f32, _ctx: &mut UpdateContext<'_>) {}

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
