use crate::rule;

/// a single generation of a cell.
///
/// the neighbor slice is borrowed, never owned, and must only hold neighbors
/// that are currently alive: its length is taken as the live neighbor count.
/// filtering dead neighbors out is up to whoever wires the cell (see [`crate::Sim`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'n> {
    status: CellStatus,
    neighbors: &'n [Cell<'n>],
}

impl<'n> Cell<'n> {
    pub fn new(status: CellStatus, neighbors: &'n [Cell<'n>]) -> Self {
        Self { status, neighbors }
    }

    pub fn alive(neighbors: &'n [Cell<'n>]) -> Self {
        Self::new(CellStatus::Alive, neighbors)
    }

    pub fn dead(neighbors: &'n [Cell<'n>]) -> Self {
        Self::new(CellStatus::Dead, neighbors)
    }

    /// a cell without any neighbor.
    pub fn isolated(status: CellStatus) -> Self {
        Self::new(status, &[])
    }

    pub fn status(&self) -> CellStatus {
        self.status
    }

    pub fn is_alive(&self) -> bool {
        self.status.is_alive()
    }

    pub fn neighbors(&self) -> &'n [Cell<'n>] {
        self.neighbors
    }

    pub fn live_neighbor_count(&self) -> usize {
        self.neighbors.len()
    }

    /// computes the next generation of this cell, sharing its neighbor slice.
    #[must_use]
    pub fn advance(&self) -> Cell<'n> {
        rule::next_status(self.status, self.live_neighbor_count()).with_neighbors(self.neighbors)
    }
}

pub use status::CellStatus;
mod status;
