use super::grid::Cell;

/// Next state of a cell given its live-neighbor count.
///
/// Two neighbors keep the cell as it is, three bring it to life, anything
/// else kills it.
#[inline]
pub fn next_state(current: Cell, live_neighbors: u8) -> Cell {
    match live_neighbors {
        2 => current,
        3 => Cell::Alive,
        _ => Cell::Dead,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_table() {
        use Cell::{Alive as A, Dead as D};
        let from_dead = [D, D, D, A, D, D, D, D, D];
        let from_alive = [D, D, A, A, D, D, D, D, D];
        for n in 0..=8u8 {
            assert_eq!(next_state(D, n), from_dead[n as usize], "dead cell with {} neighbors", n);
            assert_eq!(next_state(A, n), from_alive[n as usize], "live cell with {} neighbors", n);
        }
    }

    #[test]
    fn matches_standard_life() {
        for current in [Cell::Dead, Cell::Alive] {
            for n in 0..=8u8 {
                let standard = matches!((current, n), (Cell::Alive, 2) | (Cell::Alive, 3) | (Cell::Dead, 3));
                assert_eq!(next_state(current, n).is_alive(), standard);
            }
        }
    }

    #[test]
    fn lone_cell_dies() {
        assert_eq!(next_state(Cell::Alive, 0), Cell::Dead);
    }

    #[test]
    fn dead_cell_with_two_stays_dead() {
        assert_eq!(next_state(Cell::Dead, 2), Cell::Dead);
    }
}
