mod canvas;
mod renderer;

pub use canvas::Canvas;
pub use renderer::Renderer;
