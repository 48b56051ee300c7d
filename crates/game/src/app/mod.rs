pub(crate) mod bootstrap;
pub(crate) mod flappy;
mod objects;
mod scenes;
mod world;
