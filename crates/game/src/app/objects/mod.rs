mod bird;
mod button;
mod decor;
mod floor;
mod pipe;
mod score;
mod slate;

pub(crate) use bird::Bird;
pub(crate) use button::{Button, ButtonAction};
pub(crate) use decor::StaticDecor;
pub(crate) use floor::Floor;
pub(crate) use pipe::{Pipe, PipeDetector};
pub(crate) use score::ScoreCounter;
pub(crate) use slate::{BirdSlate, SlideSlate};

pub(crate) const SCREEN_WIDTH: f32 = 1000.0;
pub(crate) const SCREEN_HEIGHT: f32 = 800.0;

/// Horizontal speed of everything that scrolls with the world, in px/s.
pub(crate) const WORLD_SCROLL_SPEED: f32 = 200.0;

/// Top edge of the floor strip. The playable area ends here.
pub(crate) const FLOOR_TOP_Y: f32 = 700.0;
