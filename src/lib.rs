// Domain layer - cube state, moves, move engine
pub mod domain;

// Application layer - animation scheduling and the puzzle controller
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Axis, Coord, CubeError, CubeletRegistry, MoveId, QuarterTurn};
pub use application::{AnimationScheduler, Camera, EngineConfig, PuzzleEngine, Tick};
pub use ui::Button;
