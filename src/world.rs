use crate::{CellStatus, Pos, WorldError};

/// a finite store of cell statuses, one generation at a time.
pub trait World: Clone {
    fn get(&self, pos: Pos) -> CellStatus;
    fn set(&mut self, pos: Pos, status: CellStatus) -> Result<(), WorldError>;
    fn actives(&self) -> Vec<Pos>;
    fn contains(&self, pos: Pos) -> bool;

    /// an empty world with the same bounds.
    fn blank(&self) -> Self;

    fn population(&self) -> usize {
        self.actives().len()
    }

    fn is_empty(&self) -> bool {
        self.population() == 0
    }
}

pub use bounded_world::BoundedWorld;
mod bounded_world;
