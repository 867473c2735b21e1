mod coord;
mod cubelet;
mod error;
mod registry;
mod moves;
pub mod engine;

pub use coord::{Axis, Coord, Orientation, QuarterTurn};
pub use cubelet::{Cubelet, CubeletId};
pub use error::{CubeError, Result, Violation};
pub use registry::{CubeletRegistry, LAYER_SIZE};
pub use moves::{MoveDef, MoveId, DEMO_SEQUENCE, lookup, parse_sequence};
pub use engine::ResolvedMove;
