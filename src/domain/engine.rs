//! Move engine: turns a move identifier into the concrete layer it affects.
//!
//! Resolution only reads the registry. The returned [`ResolvedMove`] is what
//! the scheduler later commits through
//! [`CubeletRegistry::apply_permutation`].

use super::{Axis, CubeletId, CubeletRegistry, MoveId, QuarterTurn, Result};

/// A move bound to the cubelets it will turn
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedMove {
    pub move_id: MoveId,
    pub axis: Axis,
    pub turn: QuarterTurn,
    pub cubelets: Vec<CubeletId>,
}

impl ResolvedMove {
    /// Commit this move to `registry`
    pub fn apply_to(&self, registry: &mut CubeletRegistry) -> Result<()> {
        registry.apply_permutation(&self.cubelets, self.axis, self.turn)
    }
}

/// Resolve a move by identifier, failing with `UnknownMove` for anything
/// outside the move table
pub fn resolve(registry: &CubeletRegistry, move_id: &str) -> Result<ResolvedMove> {
    resolve_move(registry, move_id.parse()?)
}

/// Resolve an already parsed move
pub fn resolve_move(registry: &CubeletRegistry, move_id: MoveId) -> Result<ResolvedMove> {
    let def = move_id.definition();
    let cubelets = registry.select_layer(def.axis, def.layer)?;
    Ok(ResolvedMove {
        move_id,
        axis: def.axis,
        turn: def.turn,
        cubelets,
    })
}

/// Resolve and immediately commit a sequence, without animation
pub fn apply_sequence(registry: &mut CubeletRegistry, moves: &[MoveId]) -> Result<()> {
    moves
        .iter()
        .try_for_each(|&m| resolve_move(registry, m)?.apply_to(registry))
}
