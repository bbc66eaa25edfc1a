use std::collections::HashSet;

use metrohash::MetroBuildHasher;

use crate::{pos, CellStatus, Pos, World, WorldError};

/// a `width` by `height` world anchored at the origin; everything past its
/// edges reads as dead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoundedWorld {
    width: i32,
    height: i32,
    actives: HashSet<Pos, MetroBuildHasher>,
}

impl BoundedWorld {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
            actives: HashSet::default(),
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// every position of the world, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| pos!(x, y)))
    }
}

impl World for BoundedWorld {
    fn get(&self, pos: Pos) -> CellStatus {
        self.actives.contains(&pos).into()
    }

    fn set(&mut self, pos: Pos, status: CellStatus) -> Result<(), WorldError> {
        if !self.contains(pos) {
            return Err(WorldError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            });
        }
        match status {
            CellStatus::Alive => self.actives.insert(pos),
            CellStatus::Dead => self.actives.remove(&pos),
        };
        Ok(())
    }

    fn actives(&self) -> Vec<Pos> {
        let mut actives: Vec<_> = self.actives.iter().copied().collect();
        actives.sort_by_key(|pos| (pos.y, pos.x));
        actives
    }

    fn contains(&self, Pos { x, y }: Pos) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    fn blank(&self) -> Self {
        Self::new(self.width, self.height)
    }

    fn population(&self) -> usize {
        self.actives.len()
    }
}

#[test]
fn test_get_set() {
    let mut world = BoundedWorld::new(4, 3);
    assert_eq!(world.get(pos!(1, 1)), CellStatus::Dead);

    world.set(pos!(1, 1), CellStatus::Alive).unwrap();
    assert_eq!(world.get(pos!(1, 1)), CellStatus::Alive);
    assert_eq!(world.population(), 1);

    world.set(pos!(1, 1), CellStatus::Dead).unwrap();
    assert_eq!(world.get(pos!(1, 1)), CellStatus::Dead);
    assert!(world.is_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut world = BoundedWorld::new(4, 3);
    assert_eq!(world.get(pos!(-1, 0)), CellStatus::Dead);
    assert_eq!(world.get(pos!(4, 0)), CellStatus::Dead);
    assert_eq!(
        world.set(pos!(0, 3), CellStatus::Alive),
        Err(WorldError::OutOfBounds {
            pos: pos!(0, 3),
            width: 4,
            height: 3
        })
    );
}

#[test]
fn test_actives_are_row_major() {
    let mut world = BoundedWorld::new(3, 3);
    for pos in [pos!(2, 1), pos!(0, 2), pos!(1, 0), pos!(0, 1)] {
        world.set(pos, CellStatus::Alive).unwrap();
    }
    assert_eq!(
        world.actives(),
        vec![pos!(1, 0), pos!(0, 1), pos!(2, 1), pos!(0, 2)]
    );
}

#[test]
fn test_blank_keeps_bounds() {
    let mut world = BoundedWorld::new(5, 2);
    world.set(pos!(4, 1), CellStatus::Alive).unwrap();
    let blank = world.blank();
    assert!(blank.is_empty());
    assert_eq!((blank.width(), blank.height()), (5, 2));
    assert_eq!(blank.positions().count(), 10);
}
