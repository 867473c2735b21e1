//! Integer geometry of the 3x3x3 lattice.
//!
//! Everything here is exact: coordinates are small integers and a quarter turn
//! is a signed swap of two components, so no floating point error can ever
//! leak into the discrete cube state.

use std::fmt;

/// One of the three cube axes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the axis as `[x, y, z]`
    pub const fn unit(self) -> [f32; 3] {
        match self {
            Axis::X => [1.0, 0.0, 0.0],
            Axis::Y => [0.0, 1.0, 0.0],
            Axis::Z => [0.0, 0.0, 1.0],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

/// Direction of a quarter turn.
///
/// `Positive` is +90°: clockwise when looking at the layer from the positive
/// end of its axis. In a right-handed frame that is a rotation by -90°, so a
/// renderer must rotate by `-degrees()` to match the committed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuarterTurn {
    Positive,
    Negative,
}

impl QuarterTurn {
    /// Signed angle in degrees (+90 or -90)
    pub const fn degrees(self) -> f32 {
        match self {
            QuarterTurn::Positive => 90.0,
            QuarterTurn::Negative => -90.0,
        }
    }

    pub const fn inverse(self) -> Self {
        match self {
            QuarterTurn::Positive => QuarterTurn::Negative,
            QuarterTurn::Negative => QuarterTurn::Positive,
        }
    }
}

/// Integer coordinate triple. Cubelet positions stay within {-1, 0, 1}.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl Coord {
    pub const fn new(x: i8, y: i8, z: i8) -> Self {
        Self { x, y, z }
    }

    pub const fn get(self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// True if every component is -1, 0 or 1
    pub const fn in_lattice(self) -> bool {
        matches!(self.x, -1..=1) && matches!(self.y, -1..=1) && matches!(self.z, -1..=1)
    }

    /// Index into a 27 slot table, unique for every lattice coordinate
    pub const fn lattice_index(self) -> usize {
        ((self.x + 1) * 9 + (self.y + 1) * 3 + (self.z + 1)) as usize
    }

    /// All 27 lattice coordinates in x-major order
    pub fn lattice() -> impl Iterator<Item = Coord> {
        (-1..=1).flat_map(|x| (-1..=1).flat_map(move |y| (-1..=1).map(move |z| Coord::new(x, y, z))))
    }

    /// Pure quarter-turn rotation about `axis`.
    ///
    /// Components are paired per axis as x:(y,z), y:(z,x), z:(x,y).
    /// Positive maps (p, q) to (q, -p), negative maps (p, q) to (-q, p).
    pub const fn rotated(self, axis: Axis, turn: QuarterTurn) -> Self {
        let (p, q) = match axis {
            Axis::X => (self.y, self.z),
            Axis::Y => (self.z, self.x),
            Axis::Z => (self.x, self.y),
        };
        let (p, q) = match turn {
            QuarterTurn::Positive => (q, -p),
            QuarterTurn::Negative => (-q, p),
        };
        match axis {
            Axis::X => Coord::new(self.x, p, q),
            Axis::Y => Coord::new(q, self.y, p),
            Axis::Z => Coord::new(p, q, self.z),
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, self.z as f32]
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Integer rotation matrix stored as the images of the x, y and z unit vectors
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    pub columns: [Coord; 3],
}

impl Orientation {
    pub const IDENTITY: Orientation = Orientation {
        columns: [Coord::new(1, 0, 0), Coord::new(0, 1, 0), Coord::new(0, 0, 1)],
    };

    /// Compose with a quarter turn applied after this orientation
    pub const fn rotated(self, axis: Axis, turn: QuarterTurn) -> Self {
        let [a, b, c] = self.columns;
        Orientation {
            columns: [a.rotated(axis, turn), b.rotated(axis, turn), c.rotated(axis, turn)],
        }
    }

    /// Where the local direction `local` points after this orientation
    pub fn apply(self, local: Coord) -> Coord {
        let [a, b, c] = self.columns;
        Coord::new(
            a.x * local.x + b.x * local.y + c.x * local.z,
            a.y * local.x + b.y * local.y + c.y * local.z,
            a.z * local.x + b.z * local.y + c.z * local.z,
        )
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::IDENTITY
    }
}
