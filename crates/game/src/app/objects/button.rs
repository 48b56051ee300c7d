use engine::{Canvas, RigidBody, Vec2};

use crate::app::world::{GameObject, UpdateContext, WorldCommand};

/// Pressed-and-held buttons shrink by this factor for visual feedback.
const REDUCE_RATIO: f32 = 0.95;

/// What a button does when clicked, dispatched through the command queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ButtonAction {
    RequestSceneSwitch,
    PlaySound(&'static str),
    RestartSound(&'static str),
}

pub(crate) struct Button {
    texture: &'static str,
    body: RigidBody,
    actions: Vec<ButtonAction>,
    held_down: bool,
    update_order: i32,
}

impl Button {
    pub(crate) fn new(
        texture: &'static str,
        center: Vec2,
        width: f32,
        height: f32,
        actions: Vec<ButtonAction>,
        update_order: i32,
    ) -> Self {
        Self {
            texture,
            body: RigidBody::new(center, width, height),
            actions,
            held_down: false,
            update_order,
        }
    }

    fn contains(&self, point: Vec2) -> bool {
        point.x >= self.body.left()
            && point.x <= self.body.right()
            && point.y >= self.body.top()
            && point.y <= self.body.bottom()
    }
}

impl GameObject for Button {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, _dt_seconds: f32, ctx: &mut UpdateContext<'_>) {
        let cursor_inside = ctx
            .input
            .cursor_position_px()
            .map(|cursor| self.contains(cursor))
            .unwrap_or(false);

        self.held_down = cursor_inside && ctx.input.left_mouse_down();

        if cursor_inside && ctx.input.left_click_pressed() {
            for action in &self.actions {
                ctx.commands.push(match action {
                    ButtonAction::RequestSceneSwitch => WorldCommand::RequestSceneSwitch,
                    ButtonAction::PlaySound(key) => WorldCommand::PlaySound(key),
                    ButtonAction::RestartSound(key) => WorldCommand::RestartSound(key),
                });
            }
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let scale = if self.held_down { REDUCE_RATIO } else { 1.0 };
        canvas.draw_texture(
            self.texture,
            self.body.center,
            self.body.width * scale,
            self.body.height * scale,
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
