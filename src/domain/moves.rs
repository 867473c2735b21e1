//! The twelve canonical face turns.
//!
//! `R`, `U` and `F` turn their layer by +90°. `L`, `D` and `B` sit on the
//! negative end of their axis, so turning them clockwise (seen from their own
//! side) is -90° about the shared axis. The `i` suffix is the inverse.

use std::fmt;
use std::str::FromStr;

use super::{Axis, CubeError, QuarterTurn, Result};

/// Static definition of a move: which layer turns, and which way
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveDef {
    pub axis: Axis,
    /// -1 or +1
    pub layer: i8,
    pub turn: QuarterTurn,
}

/// Canonical move identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveId {
    R,
    Ri,
    L,
    Li,
    U,
    Ui,
    D,
    Di,
    F,
    Fi,
    B,
    Bi,
}

impl MoveId {
    pub const ALL: [MoveId; 12] = [
        MoveId::R,
        MoveId::Ri,
        MoveId::L,
        MoveId::Li,
        MoveId::U,
        MoveId::Ui,
        MoveId::D,
        MoveId::Di,
        MoveId::F,
        MoveId::Fi,
        MoveId::B,
        MoveId::Bi,
    ];

    /// Look up the move table entry
    pub const fn definition(self) -> MoveDef {
        use QuarterTurn::{Negative, Positive};

        let (axis, layer, turn) = match self {
            MoveId::R => (Axis::X, 1, Positive),
            MoveId::Ri => (Axis::X, 1, Negative),
            MoveId::L => (Axis::X, -1, Negative),
            MoveId::Li => (Axis::X, -1, Positive),
            MoveId::U => (Axis::Y, 1, Positive),
            MoveId::Ui => (Axis::Y, 1, Negative),
            MoveId::D => (Axis::Y, -1, Negative),
            MoveId::Di => (Axis::Y, -1, Positive),
            MoveId::F => (Axis::Z, 1, Positive),
            MoveId::Fi => (Axis::Z, 1, Negative),
            MoveId::B => (Axis::Z, -1, Negative),
            MoveId::Bi => (Axis::Z, -1, Positive),
        };
        MoveDef { axis, layer, turn }
    }

    /// The move that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            MoveId::R => MoveId::Ri,
            MoveId::Ri => MoveId::R,
            MoveId::L => MoveId::Li,
            MoveId::Li => MoveId::L,
            MoveId::U => MoveId::Ui,
            MoveId::Ui => MoveId::U,
            MoveId::D => MoveId::Di,
            MoveId::Di => MoveId::D,
            MoveId::F => MoveId::Fi,
            MoveId::Fi => MoveId::F,
            MoveId::B => MoveId::Bi,
            MoveId::Bi => MoveId::B,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MoveId::R => "R",
            MoveId::Ri => "Ri",
            MoveId::L => "L",
            MoveId::Li => "Li",
            MoveId::U => "U",
            MoveId::Ui => "Ui",
            MoveId::D => "D",
            MoveId::Di => "Di",
            MoveId::F => "F",
            MoveId::Fi => "Fi",
            MoveId::B => "B",
            MoveId::Bi => "Bi",
        }
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MoveId {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        MoveId::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| CubeError::UnknownMove(s.to_owned()))
    }
}

/// Resolve a move identifier to its definition
pub fn lookup(move_id: &str) -> Result<MoveDef> {
    move_id.parse::<MoveId>().map(MoveId::definition)
}

/// Parse a whitespace separated sequence such as `"R U Ri Ui"`.
/// Fails on the first unknown identifier.
pub fn parse_sequence(sequence: &str) -> Result<Vec<MoveId>> {
    sequence.split_whitespace().map(str::parse).collect()
}

/// Fixed demo pattern played by "solve". Not a solver.
pub const DEMO_SEQUENCE: [MoveId; 8] = [
    MoveId::R,
    MoveId::U,
    MoveId::Ri,
    MoveId::Ui,
    MoveId::R,
    MoveId::U,
    MoveId::Ri,
    MoveId::Ui,
];
