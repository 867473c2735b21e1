use super::{Axis, Coord, CubeError, Cubelet, CubeletId, QuarterTurn, Result, Violation};

/// Cubelets per layer of a 3x3x3 cube
pub const LAYER_SIZE: usize = 9;

/// CubeletRegistry holds the 27 cubelets and their lattice coordinates.
/// Positions always form a bijection onto {-1, 0, 1}^3.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubeletRegistry {
    /// Indexed by `CubeletId`
    cubelets: Vec<Cubelet>,
}

impl CubeletRegistry {
    /// Create a solved cube, ids assigned in x-major lattice order
    pub fn new() -> Self {
        let cubelets = Coord::lattice()
            .enumerate()
            .map(|(i, home)| Cubelet::new(CubeletId(i as u8), home))
            .collect();
        Self { cubelets }
    }

    /// Read-only view of every cubelet
    pub fn all_cubelets(&self) -> &[Cubelet] {
        &self.cubelets
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: CubeletId) -> Option<&Cubelet> {
        self.cubelets.get(id.0 as usize)
    }

    /// Cubelet currently sitting at `position`
    #[cfg(test)]
    pub(crate) fn at(&self, position: Coord) -> Option<&Cubelet> {
        self.cubelets.iter().find(|c| c.position == position)
    }

    /// Ids of every cubelet whose coordinate along `axis` equals `layer`.
    /// A valid cube always yields exactly nine.
    pub fn select_layer(&self, axis: Axis, layer: i8) -> Result<Vec<CubeletId>> {
        let ids: Vec<CubeletId> = self
            .cubelets
            .iter()
            .filter(|c| c.position.get(axis) == layer)
            .map(Cubelet::id)
            .collect();

        if ids.len() != LAYER_SIZE {
            return Err(Violation::LayerSize {
                axis,
                layer,
                count: ids.len(),
            }
            .into());
        }
        Ok(ids)
    }

    /// Quarter-turn the given cubelets about `axis`.
    ///
    /// New coordinates are computed first and the whole lattice is checked
    /// before anything is written, so a failed call leaves the registry as it was.
    pub fn apply_permutation(&mut self, ids: &[CubeletId], axis: Axis, turn: QuarterTurn) -> Result<()> {
        let mut next_positions: Vec<Coord> = self.cubelets.iter().map(|c| c.position).collect();
        for &id in ids {
            let slot = next_positions
                .get_mut(id.0 as usize)
                .ok_or(Violation::UnknownCubelet(id))?;
            *slot = slot.rotated(axis, turn);
        }
        check_lattice(&next_positions)?;

        for &id in ids {
            let cubelet = &mut self.cubelets[id.0 as usize];
            cubelet.position = next_positions[id.0 as usize];
            cubelet.orientation = cubelet.orientation.rotated(axis, turn);
        }
        Ok(())
    }

    /// Put every cubelet back at its home coordinate
    pub fn reset_to_home(&mut self) {
        self.cubelets.iter_mut().for_each(Cubelet::reset);
    }

    /// True when every cubelet is at home with its original orientation
    pub fn is_solved(&self) -> bool {
        self.cubelets.iter().all(Cubelet::is_home)
    }

    /// Check the bijection invariant on the current state
    pub fn validate(&self) -> Result<()> {
        let positions: Vec<Coord> = self.cubelets.iter().map(|c| c.position).collect();
        check_lattice(&positions)
    }
}

impl Default for CubeletRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Positions must cover the 27 lattice cells exactly once
fn check_lattice(positions: &[Coord]) -> Result<(), CubeError> {
    let mut occupied = [false; 27];
    for &position in positions {
        if !position.in_lattice() {
            return Err(Violation::OutOfRange(position).into());
        }
        let slot = &mut occupied[position.lattice_index()];
        if *slot {
            return Err(Violation::DuplicateCoordinate(position).into());
        }
        *slot = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_of(registry: &CubeletRegistry, axis: Axis, layer: i8) -> Vec<CubeletId> {
        registry.select_layer(axis, layer).unwrap()
    }

    #[test]
    fn test_new_registry_is_solved_and_valid() {
        let registry = CubeletRegistry::new();
        assert_eq!(registry.all_cubelets().len(), 27);
        assert!(registry.is_solved());
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_every_layer_has_nine() {
        let registry = CubeletRegistry::new();
        for axis in Axis::ALL {
            for layer in -1..=1 {
                assert_eq!(layer_of(&registry, axis, layer).len(), LAYER_SIZE);
            }
        }
    }

    #[test]
    fn test_right_face_turn_scenario() {
        let mut registry = CubeletRegistry::new();
        let before = registry.clone();
        let ids = layer_of(&registry, Axis::X, 1);
        registry.apply_permutation(&ids, Axis::X, QuarterTurn::Positive).unwrap();

        let moved_from = |home: Coord| {
            registry
                .all_cubelets()
                .iter()
                .find(|c| c.home() == home)
                .unwrap()
                .position
        };
        assert_eq!(moved_from(Coord::new(1, 1, 0)), Coord::new(1, 0, -1));
        assert_eq!(moved_from(Coord::new(1, -1, 0)), Coord::new(1, 0, 1));

        let unchanged = registry
            .all_cubelets()
            .iter()
            .zip(before.all_cubelets())
            .filter(|(after, before)| after.position == before.position)
            .filter(|(after, _)| after.home().x != 1)
            .count();
        assert_eq!(unchanged, 18);
        assert!(registry.validate().is_ok());
    }

    #[test]
    fn test_partial_layer_turn_is_rejected_without_mutation() {
        let mut registry = CubeletRegistry::new();
        let mut ids = layer_of(&registry, Axis::X, 1);
        ids.truncate(4);
        let before = registry.clone();

        let result = registry.apply_permutation(&ids, Axis::X, QuarterTurn::Positive);
        assert!(matches!(
            result,
            Err(CubeError::InvariantViolation(Violation::DuplicateCoordinate(_)))
        ));
        assert_eq!(registry, before);
    }

    #[test]
    fn test_unknown_cubelet_is_rejected() {
        let mut registry = CubeletRegistry::new();
        let result = registry.apply_permutation(&[CubeletId(27)], Axis::Y, QuarterTurn::Negative);
        assert_eq!(
            result,
            Err(CubeError::InvariantViolation(Violation::UnknownCubelet(CubeletId(27))))
        );
    }

    #[test]
    fn test_reset_to_home() {
        let mut registry = CubeletRegistry::new();
        let ids = layer_of(&registry, Axis::Z, -1);
        registry.apply_permutation(&ids, Axis::Z, QuarterTurn::Negative).unwrap();
        let ids = layer_of(&registry, Axis::Y, 1);
        registry.apply_permutation(&ids, Axis::Y, QuarterTurn::Positive).unwrap();
        assert!(!registry.is_solved());

        registry.reset_to_home();
        assert!(registry.is_solved());
        assert!(registry.all_cubelets().iter().all(|c| c.position == c.home()));
    }

    #[test]
    fn test_lookup_by_position() {
        let registry = CubeletRegistry::new();
        let corner = registry.at(Coord::new(1, 1, 1)).unwrap();
        assert_eq!(registry.get(corner.id()), Some(corner));
        assert!(registry.at(Coord::new(2, 0, 0)).is_none());
    }

    #[test]
    fn test_corrupted_layer_size_is_reported() {
        let mut registry = CubeletRegistry::new();
        // Move a cubelet out of x = 1 into x = 0
        let id = layer_of(&registry, Axis::X, 1)[0];
        registry.cubelets[id.0 as usize].position.x = 0;

        assert_eq!(
            registry.select_layer(Axis::X, 1),
            Err(CubeError::InvariantViolation(Violation::LayerSize {
                axis: Axis::X,
                layer: 1,
                count: 8,
            }))
        );
        assert!(matches!(
            registry.select_layer(Axis::X, 0),
            Err(CubeError::InvariantViolation(Violation::LayerSize { count: 10, .. }))
        ));
    }

    #[test]
    fn test_out_of_range_coordinate_is_reported() {
        let mut registry = CubeletRegistry::new();
        let id = registry.at(Coord::new(1, 0, 0)).unwrap().id();
        registry.cubelets[id.0 as usize].position = Coord::new(2, 0, 0);

        assert_eq!(
            registry.validate(),
            Err(CubeError::InvariantViolation(Violation::OutOfRange(Coord::new(2, 0, 0))))
        );
    }
}
