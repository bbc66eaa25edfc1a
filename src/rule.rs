//! the survival and birth rule of the game of life (B3/S23).

use crate::CellStatus;

/// live neighbor counts letting an alive cell stay alive.
pub const SURVIVAL: [usize; 2] = [2, 3];

/// live neighbor count giving birth to a dead cell.
pub const BIRTH: usize = 3;

/// status of a cell on the next generation.
///
/// `live_neighbors` must only count neighbors that are alive. survival accepts
/// a range of counts, birth an exact one.
pub fn next_status(current: CellStatus, live_neighbors: usize) -> CellStatus {
    let alive = match (current, live_neighbors) {
        (CellStatus::Alive, count) => SURVIVAL.contains(&count), // stays or dies
        (CellStatus::Dead, count) => count == BIRTH,             // becomes alive or stays dead
    };
    alive.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_survival_boundaries() {
        assert_eq!(next_status(CellStatus::Alive, 0), CellStatus::Dead);
        assert_eq!(next_status(CellStatus::Alive, 1), CellStatus::Dead);
        assert_eq!(next_status(CellStatus::Alive, 2), CellStatus::Alive);
        assert_eq!(next_status(CellStatus::Alive, 3), CellStatus::Alive);
        assert_eq!(next_status(CellStatus::Alive, 4), CellStatus::Dead);
        assert_eq!(next_status(CellStatus::Alive, 8), CellStatus::Dead);
    }

    #[test]
    fn test_birth_boundaries() {
        assert_eq!(next_status(CellStatus::Dead, 0), CellStatus::Dead);
        assert_eq!(next_status(CellStatus::Dead, 2), CellStatus::Dead);
        assert_eq!(next_status(CellStatus::Dead, 3), CellStatus::Alive);
        assert_eq!(next_status(CellStatus::Dead, 4), CellStatus::Dead);
    }

    #[test]
    fn test_huge_counts() {
        assert_eq!(next_status(CellStatus::Alive, usize::MAX), CellStatus::Dead);
        assert_eq!(next_status(CellStatus::Dead, usize::MAX), CellStatus::Dead);
    }

    proptest! {
        #[test]
        fn alive_dies_outside_survival(count in any::<usize>().prop_filter("survival", |c| !(2..=3).contains(c))) {
            prop_assert_eq!(next_status(CellStatus::Alive, count), CellStatus::Dead);
        }

        #[test]
        fn alive_survives_on_two_or_three(count in 2usize..=3) {
            prop_assert_eq!(next_status(CellStatus::Alive, count), CellStatus::Alive);
        }

        #[test]
        fn dead_stays_dead_unless_three(count in any::<usize>().prop_filter("birth", |c| *c != 3)) {
            prop_assert_eq!(next_status(CellStatus::Dead, count), CellStatus::Dead);
        }

        #[test]
        fn matches_the_b3_s23_table(alive in any::<bool>(), count in 0usize..=16) {
            let expected = match (alive, count) {
                (true, 2) | (true, 3) => CellStatus::Alive,
                (false, 3) => CellStatus::Alive,
                _ => CellStatus::Dead,
            };
            prop_assert_eq!(next_status(CellStatus::from(alive), count), expected);
        }
    }
}
