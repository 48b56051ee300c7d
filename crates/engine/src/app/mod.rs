mod audio;
mod game;
mod geometry;
mod input;
mod loop_runner;
mod metrics;
mod rendering;

pub use audio::AudioMixer;
pub use game::{Game, UpdateFlow};
pub use geometry::{RigidBody, Vec2};
pub use input::InputSnapshot;
pub use loop_runner::{run_app, AppError, LoopConfig};
pub use metrics::LoopMetricsSnapshot;
pub use rendering::{Canvas, Renderer};
