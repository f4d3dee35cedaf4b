use std::fmt;

/// A cell coordinate on the grid.
///
/// The simulation runs on the ground plane of a 3D scene, so the axes are x
/// and z.  Coordinates are signed so that direction deltas can be applied
/// without fuss; [`Grid::wrap()`] maps any coordinate back into the grid.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Position {
    pub x: i32,
    pub z: i32,
}

impl Position {
    pub fn new(x: i32, z: i32) -> Position {
        Position { x, z }
    }

    /// Return this position displaced by `(dx, dz)`, without wrapping
    pub fn offset(self, dx: i32, dz: i32) -> Position {
        Position {
            x: self.x + dx,
            z: self.z + dz,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

/// A square toroidal grid of side `size`: exiting one edge re-enters at the
/// opposite edge.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Grid {
    size: u16,
}

impl Grid {
    pub fn new(size: u16) -> Grid {
        Grid { size }
    }

    /// The side length of the grid
    pub fn size(self) -> u16 {
        self.size
    }

    /// The total number of cells in the grid
    pub fn cell_count(self) -> usize {
        usize::from(self.size).pow(2)
    }

    /// The cell at the middle of the grid
    pub fn center(self) -> Position {
        let mid = i32::from(self.size / 2);
        Position::new(mid, mid)
    }

    /// Map `pos` back onto the grid using floored modulo on each axis, so
    /// that negative coordinates wrap to the far edge rather than producing
    /// negative remainders.
    pub fn wrap(self, pos: Position) -> Position {
        let modulus = i32::from(self.size);
        Position {
            x: pos.x.rem_euclid(modulus),
            z: pos.z.rem_euclid(modulus),
        }
    }

    /// Whether `pos` lies within the canonical `[0, size)` range on both axes
    pub fn contains(self, pos: Position) -> bool {
        let modulus = i32::from(self.size);
        (0..modulus).contains(&pos.x) && (0..modulus).contains(&pos.z)
    }

    /// Iterate over every cell of the grid in row-major order
    pub fn positions(self) -> impl Iterator<Item = Position> {
        let modulus = i32::from(self.size);
        (0..modulus).flat_map(move |z| (0..modulus).map(move |x| Position::new(x, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Position::new(0, 0), Position::new(0, 0))]
    #[case(Position::new(4, 2), Position::new(4, 2))]
    #[case(Position::new(5, 2), Position::new(0, 2))]
    #[case(Position::new(2, 5), Position::new(2, 0))]
    #[case(Position::new(-1, 2), Position::new(4, 2))]
    #[case(Position::new(2, -1), Position::new(2, 4))]
    #[case(Position::new(7, -6), Position::new(2, 4))]
    #[case(Position::new(-10, 12), Position::new(0, 2))]
    fn wrap5(#[case] pos: Position, #[case] wrapped: Position) {
        let grid = Grid::new(5);
        assert_eq!(grid.wrap(pos), wrapped);
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(20)]
    fn wrap_is_canonical(#[case] size: u16) {
        let grid = Grid::new(size);
        let modulus = i32::from(size);
        for x in -50..50 {
            for z in -50..50 {
                let wrapped = grid.wrap(Position::new(x, z));
                assert!(grid.contains(wrapped), "{wrapped} out of range");
                assert_eq!((wrapped.x - x).rem_euclid(modulus), 0);
                assert_eq!((wrapped.z - z).rem_euclid(modulus), 0);
            }
        }
    }

    #[test]
    fn positions_cover_grid() {
        let grid = Grid::new(4);
        let cells = grid.positions().collect::<Vec<_>>();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells.first(), Some(&Position::new(0, 0)));
        assert_eq!(cells.last(), Some(&Position::new(3, 3)));
        assert!(cells.iter().all(|&p| grid.contains(p)));
    }

    #[test]
    fn center_of_even_grid() {
        assert_eq!(Grid::new(20).center(), Position::new(10, 10));
    }
}
