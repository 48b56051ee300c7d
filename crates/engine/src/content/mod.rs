mod database;
mod manifest;

pub use database::{ContentDatabase, ContentError};
