use std::collections::HashSet;

use log::{debug, info};
use metrohash::MetroBuildHasher;

use crate::{Cell, CellStatus, Pos, World, WorldError};

/// advances a world one generation at a time.
#[derive(Debug, Clone)]
pub struct Sim<W>
where
    W: World,
{
    world: W,
    generation: u64,
}

impl<W> Sim<W>
where
    W: World,
{
    pub fn new(world: W) -> Self {
        Self {
            world,
            generation: 0,
        }
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_neighbor_count(&self, pos: Pos) -> usize {
        self.live_neighbors(pos).count()
    }

    fn live_neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        pos.neighbors()
            .filter(move |neighbor| self.world.get(*neighbor).is_alive())
    }

    /// live cells and their surroundings, the only positions that may change.
    fn possible_change_pos(&self) -> HashSet<Pos, MetroBuildHasher> {
        self.world
            .actives()
            .into_iter()
            .flat_map(|pos| pos.neighbors().chain([pos]))
            .filter(|pos| self.world.contains(*pos))
            .collect()
    }

    fn next_world(&self) -> Result<W, WorldError> {
        let mut next = self.world.blank();
        for pos in self.possible_change_pos() {
            let neighbors: Vec<_> = self
                .live_neighbors(pos)
                .map(|_| Cell::isolated(CellStatus::Alive))
                .collect();
            let cell = Cell::new(self.world.get(pos), &neighbors);
            if cell.advance().is_alive() {
                next.set(pos, CellStatus::Alive)?;
            }
        }
        Ok(next)
    }

    pub fn step(&mut self) -> Result<(), WorldError> {
        self.world = self.next_world()?;
        self.generation += 1;
        debug!(
            "generation {}: {} alive",
            self.generation,
            self.world.population()
        );
        Ok(())
    }

    /// runs up to `generations` steps, stopping once the world is empty.
    pub fn run(&mut self, generations: u64) -> Result<(), WorldError> {
        for _ in 0..generations {
            if self.world.is_empty() {
                info!("world is empty at generation {}, stopping", self.generation);
                break;
            }
            self.step()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pos, BoundedWorld};

    fn world_with(width: i32, height: i32, actives: &[Pos]) -> BoundedWorld {
        let mut world = BoundedWorld::new(width, height);
        for pos in actives {
            world.set(*pos, CellStatus::Alive).unwrap();
        }
        world
    }

    #[test]
    fn lone_cell_dies() {
        let mut sim = Sim::new(world_with(3, 3, &[pos!(1, 1)]));
        sim.step().unwrap();
        assert!(sim.world().is_empty());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn block_is_still() {
        let block = [pos!(1, 1), pos!(2, 1), pos!(1, 2), pos!(2, 2)];
        let mut sim = Sim::new(world_with(4, 4, &block));
        sim.run(5).unwrap();
        assert_eq!(sim.world().actives(), block.to_vec());
        assert_eq!(sim.generation(), 5);
    }

    #[test]
    fn blinker_oscillates() {
        let horizontal = vec![pos!(1, 2), pos!(2, 2), pos!(3, 2)];
        let vertical = vec![pos!(2, 1), pos!(2, 2), pos!(2, 3)];
        let mut sim = Sim::new(world_with(5, 5, &horizontal));

        sim.step().unwrap();
        assert_eq!(sim.world().actives(), vertical);

        sim.step().unwrap();
        assert_eq!(sim.world().actives(), horizontal);
    }

    #[test]
    fn births_past_the_edge_are_dropped() {
        // blinker against the top edge, (1, -1) would be born.
        let mut sim = Sim::new(world_with(3, 3, &[pos!(0, 0), pos!(1, 0), pos!(2, 0)]));
        sim.step().unwrap();
        assert_eq!(sim.world().actives(), vec![pos!(1, 0), pos!(1, 1)]);
    }

    #[test]
    fn counts_only_live_neighbors() {
        let sim = Sim::new(world_with(3, 3, &[pos!(0, 0), pos!(2, 2), pos!(1, 1)]));
        assert_eq!(sim.live_neighbor_count(pos!(1, 1)), 2);
        assert_eq!(sim.live_neighbor_count(pos!(0, 1)), 2);
        assert_eq!(sim.live_neighbor_count(pos!(2, 0)), 1);
    }

    #[test]
    fn run_stops_on_empty_world() {
        let mut sim = Sim::new(world_with(3, 3, &[pos!(1, 1)]));
        sim.run(10).unwrap();
        assert_eq!(sim.generation(), 1);
    }
}
