use engine::{Canvas, RigidBody, Vec2};

use crate::app::world::{GameObject, UpdateContext};

use super::{SCREEN_WIDTH, WORLD_SCROLL_SPEED};

/// The ground strip. Scrolls left while movable by drawing two copies offset
/// by the screen width, wrapping the offset so the seam never shows. Its
/// movable flag doubles as the world-scroll master switch that pipes and the
/// detector read through the world view.
pub(crate) struct Floor {
    body: RigidBody,
    scroll_offset: f32,
    movable: bool,
    update_order: i32,
}

impl Floor {
    pub(crate) fn new(movable: bool, update_order: i32) -> Self {
        Self {
            body: RigidBody::new(Vec2::new(500.0, 750.0), 1000.0, 100.0),
            scroll_offset: 0.0,
            movable,
            update_order,
        }
    }

    pub(crate) fn body(&self) -> RigidBody {
        self.body
    }

    pub(crate) fn is_movable(&self) -> bool {
        self.movable
    }

    pub(crate) fn set_movable(&mut self, movable: bool) {
        self.movable = movable;
    }
}

impl GameObject for Floor {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, dt_seconds: f32, _ctx: &mut UpdateContext<'_>) {
        if !self.movable {
            return;
        }
        self.scroll_offset += WORLD_SCROLL_SPEED * dt_seconds;
        if self.scroll_offset >= SCREEN_WIDTH {
            self.scroll_offset -= SCREEN_WIDTH;
        }
    }

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let first_x = self.body.center.x - self.scroll_offset;
        for copy_x in [first_x, first_x + SCREEN_WIDTH] {
            canvas.draw_texture(
                "Floor",
                Vec2::new(copy_x, self.body.center.y),
                self.body.width,
                self.body.height,
                0.0,
            );
        }
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

    use crate::app::world::{CommandQueue, WorldView};

    use super::*;

    fn step(floor: &mut Floor, dt_seconds: f32) {
        let input = InputSnapshot::empty();
        let view = WorldView::default();
        let mut commands = CommandQueue::default();
        let mut ctx = UpdateContext {
            input: &input,
            view: &view,
            commands: &mut commands,
        };
        floor.update(dt_seconds, &mut ctx);
    }

    #[test]
    fn movable_floor_accumulates_scroll_and_wraps() {
        let mut floor = Floor::new(true, 2);
        step(&mut floor, 1.0);
        assert_eq!(floor.scroll_offset, WORLD_SCROLL_SPEED);

        // 5 s of scroll covers exactly one screen width and wraps to zero.
        for _ in 0..4 {
            step(&mut floor, 1.0);
        }
        assert_eq!(floor.scroll_offset, 0.0);
    }

    #[test]
    fn stopped_floor_does_not_scroll() {
        let mut floor = Floor::new(true, 2);
        step(&mut floor, 0.5);
        let frozen = floor.scroll_offset;

        floor.set_movable(false);
        step(&mut floor, 1.0);
        assert_eq!(floor.scroll_offset, frozen);
    }

    #[test]
    fn body_spans_the_bottom_strip() {
        let floor = Floor::new(false, 2);
        assert_eq!(floor.body().top(), 700.0);
        assert_eq!(floor.body().bottom(), 800.0);
        assert_eq!(floor.body().left(), 0.0);
        assert_eq!(floor.body().right(), 1000.0);
    }
}
