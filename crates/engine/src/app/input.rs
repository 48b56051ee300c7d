use super::geometry::Vec2;

/// Per-tick input sample. Press fields are edge-triggered: true only on the
/// tick that consumed the not-pressed -> pressed transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    quit_requested: bool,
    jump_pressed: bool,
    left_click_pressed: bool,
    left_mouse_down: bool,
    cursor_position_px: Option<Vec2>,
    window_width: u32,
    window_height: u32,
}

impl InputSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        quit_requested: bool,
        jump_pressed: bool,
        left_click_pressed: bool,
        left_mouse_down: bool,
        cursor_position_px: Option<Vec2>,
        window_width: u32,
        window_height: u32,
    ) -> Self {
        Self {
            quit_requested,
            jump_pressed,
            left_click_pressed,
            left_mouse_down,
            cursor_position_px,
            window_width,
            window_height,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn jump_pressed(&self) -> bool {
        self.jump_pressed
    }

    pub fn left_click_pressed(&self) -> bool {
        self.left_click_pressed
    }

    pub fn left_mouse_down(&self) -> bool {
        self.left_mouse_down
    }

    pub fn cursor_position_px(&self) -> Option<Vec2> {
        self.cursor_position_px
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn with_quit_requested(mut self, quit_requested: bool) -> Self {
        self.quit_requested = quit_requested;
        self
    }

    pub fn with_jump_pressed(mut self, jump_pressed: bool) -> Self {
        self.jump_pressed = jump_pressed;
        self
    }

    pub fn with_left_click_pressed(mut self, left_click_pressed: bool) -> Self {
        self.left_click_pressed = left_click_pressed;
        self
    }

    pub fn with_left_mouse_down(mut self, left_mouse_down: bool) -> Self {
        self.left_mouse_down = left_mouse_down;
        self
    }

    pub fn with_cursor_position_px(mut self, cursor_position_px: Option<Vec2>) -> Self {
        self.cursor_position_px = cursor_position_px;
        self
    }

    pub fn with_window_size(mut self, window_size: (u32, u32)) -> Self {
        self.window_width = window_size.0;
        self.window_height = window_size.1;
        self
    }
}
