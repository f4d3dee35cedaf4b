//! Random placement of food on unoccupied cells.
use crate::consts;
use crate::grid::{Grid, Position};
use rand::{seq::IteratorRandom, Rng};
use std::collections::HashSet;

/// Pick a uniformly-random cell of `grid` that is not in `occupied`.
///
/// Rejection sampling terminates quickly while the board is mostly empty, so
/// random cells are tried first, capped at
/// [`FOOD_SAMPLE_ATTEMPTS`][consts::FOOD_SAMPLE_ATTEMPTS]; past the cap the
/// free cells are enumerated and one is chosen directly, which stays uniform
/// and terminates even on a nearly-full board.  Returns `None` when no free
/// cell exists.
pub fn respawn<R: Rng>(occupied: &HashSet<Position>, grid: Grid, rng: &mut R) -> Option<Position> {
    let modulus = i32::from(grid.size());
    if modulus > 0 && occupied.len() < grid.cell_count() {
        for _ in 0..consts::FOOD_SAMPLE_ATTEMPTS {
            let pos = Position::new(rng.random_range(0..modulus), rng.random_range(0..modulus));
            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }
    }
    grid.positions().filter(|p| !occupied.contains(p)).choose(rng)
}
