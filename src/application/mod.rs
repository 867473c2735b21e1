mod camera;
mod config;
mod puzzle;
mod scheduler;

pub use camera::Camera;
pub use config::EngineConfig;
pub use puzzle::PuzzleEngine;
pub use scheduler::{AnimationFrame, AnimationScheduler, Tick};
