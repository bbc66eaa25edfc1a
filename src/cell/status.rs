use crate::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellStatus {
    Alive,
    Dead,
}

impl CellStatus {
    pub fn is_alive(self) -> bool {
        self.into()
    }

    /// builds the cell of this status over the given neighbors.
    pub fn with_neighbors<'n>(self, neighbors: &'n [Cell<'n>]) -> Cell<'n> {
        match self {
            CellStatus::Alive => Cell::alive(neighbors),
            CellStatus::Dead => Cell::dead(neighbors),
        }
    }
}

impl From<bool> for CellStatus {
    fn from(alive: bool) -> Self {
        match alive {
            true => CellStatus::Alive,
            false => CellStatus::Dead,
        }
    }
}

impl From<CellStatus> for bool {
    fn from(status: CellStatus) -> Self {
        match status {
            CellStatus::Alive => true,
            CellStatus::Dead => false,
        }
    }
}

#[test]
fn test_bool_dispatch() {
    assert_eq!(CellStatus::from(true), CellStatus::Alive);
    assert_eq!(CellStatus::from(false), CellStatus::Dead);
    assert!(CellStatus::Alive.is_alive());
    assert!(!CellStatus::Dead.is_alive());
}

#[test]
fn test_with_neighbors() {
    let neighbors = [Cell::isolated(CellStatus::Alive)];
    let cell = CellStatus::Dead.with_neighbors(&neighbors);
    assert_eq!(cell.status(), CellStatus::Dead);
    assert_eq!(cell.live_neighbor_count(), 1);
}
