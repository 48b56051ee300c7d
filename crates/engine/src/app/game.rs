use crate::content::ContentDatabase;

use super::audio::AudioMixer;
use super::input::InputSnapshot;
use super::rendering::Canvas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFlow {
    Continue,
    Exit,
}

/// The seam between the platform loop and game logic. `boot` runs once after
/// content is loaded and before the first tick; `update` runs once per fixed
/// tick; `render` once per presented frame. An `Err` from either fallible
/// hook is fatal and halts the loop with a diagnostic.
pub trait Game {
    type Error: std::error::Error + 'static;

    fn boot(&mut self, content: &ContentDatabase, audio: &mut AudioMixer)
        -> Result<(), Self::Error>;

    fn update(
        &mut self,
        dt_seconds: f32,
        input: &InputSnapshot,
        audio: &mut AudioMixer,
    ) -> Result<UpdateFlow, Self::Error>;

    fn render(&mut self, canvas: &mut Canvas<'_>);
}
