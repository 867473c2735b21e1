use std::fmt;

use super::{Coord, Orientation};

/// Stable identity of a cubelet, assigned at creation and never reused
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CubeletId(pub u8);

impl fmt::Display for CubeletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One of the 27 unit cells of the puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cubelet {
    id: CubeletId,
    home: Coord,
    pub position: Coord,
    pub orientation: Orientation,
}

impl Cubelet {
    /// Create a cubelet sitting at its home position
    pub const fn new(id: CubeletId, home: Coord) -> Self {
        Self {
            id,
            home,
            position: home,
            orientation: Orientation::IDENTITY,
        }
    }

    pub const fn id(&self) -> CubeletId {
        self.id
    }

    /// Position in the solved state. Immutable.
    pub const fn home(&self) -> Coord {
        self.home
    }

    pub fn is_home(&self) -> bool {
        self.position == self.home && self.orientation == Orientation::IDENTITY
    }

    pub fn reset(&mut self) {
        self.position = self.home;
        self.orientation = Orientation::IDENTITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Axis, QuarterTurn};

    #[test]
    fn test_new_cubelet_is_home() {
        let c = Cubelet::new(CubeletId(4), Coord::new(1, -1, 0));
        assert!(c.is_home());
        assert_eq!(c.position, c.home());
    }

    #[test]
    fn test_reset_restores_home() {
        let mut c = Cubelet::new(CubeletId(0), Coord::new(1, 1, 1));
        c.position = c.position.rotated(Axis::X, QuarterTurn::Positive);
        c.orientation = c.orientation.rotated(Axis::X, QuarterTurn::Positive);
        assert!(!c.is_home());

        c.reset();
        assert!(c.is_home());
    }

    #[test]
    fn test_center_turned_in_place_is_not_home() {
        // Position alone is unchanged, orientation is not
        let mut c = Cubelet::new(CubeletId(0), Coord::new(1, 0, 0));
        c.orientation = c.orientation.rotated(Axis::X, QuarterTurn::Positive);
        assert_eq!(c.position, c.home());
        assert!(!c.is_home());
    }
}
