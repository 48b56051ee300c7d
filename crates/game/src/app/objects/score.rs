use engine::{Canvas, Vec2};

use crate::app::world::{GameObject, UpdateContext};

const DIGIT_WIDTH: f32 = 40.0;
const DIGIT_HEIGHT: f32 = 60.0;

/// On-screen score. Renders its value as a centered row of digit textures.
pub(crate) struct ScoreCounter {
    value: u32,
    center: Vec2,
    update_order: i32,
}

impl ScoreCounter {
    pub(crate) fn new(center: Vec2, update_order: i32) -> Self {
        Self {
            value: 0,
            center,
            update_order,
        }
    }

    pub(crate) fn value(&self) -> u32 {
        self.value
    }

    pub(crate) fn add(&mut self, points: u32) {
        self.value += points;
    }

    pub(crate) fn move_to(&mut self, center: Vec2, update_order: i32) {
        self.center = center;
        self.update_order = update_order;
    }

    #[cfg(test)]
    pub(crate) fn center(&self) -> Vec2 {
        self.center
    }
}

fn decimal_digits(mut value: u32) -> Vec<u32> {
    let mut digits = Vec::new();
    loop {
        digits.push(value % 10);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

impl GameObject for ScoreCounter {
    fn update_order(&self) -> i32 {
        self.update_order
    }

    fn update(&mut self, _dt_seconds: f32, _ctx: &mut UpdateContext<'_>) {}

    fn render(&mut self, canvas: &mut Canvas<'_>) {
        let digits = decimal_digits(self.value);
        let row_width = digits.len() as f32 * DIGIT_WIDTH;
        let mut x = self.center.x - row_width / 2.0 + DIGIT_WIDTH / 2.0;
        for digit in digits {
            let key = format!("Number{digit}");
            canvas.draw_texture(
                &key,
                Vec2::new(x, self.center.y),
                DIGIT_WIDTH,
                DIGIT_HEIGHT,
                0.0,
            );
            x += DIGIT_WIDTH;
        }
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}
