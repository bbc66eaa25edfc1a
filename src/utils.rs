use std::{fmt, ops::Add};

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        $crate::Pos { x: $x, y: $y }
    };
}

impl Pos {
    /// the eight surrounding positions, center excluded.
    pub fn neighbors(self) -> impl Iterator<Item = Pos> {
        (-1..=1)
            .flat_map(|y| (-1..=1).map(move |x| pos!(x, y)))
            .filter(|offset| *offset != pos!(0, 0))
            .map(move |offset| self + offset)
    }
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[test]
fn test_neighbors() {
    let neighbors: Vec<_> = pos!(5, 5).neighbors().collect();
    assert_eq!(neighbors.len(), 8);
    assert!(!neighbors.contains(&pos!(5, 5)));
    assert!(neighbors.contains(&pos!(4, 4)));
    assert!(neighbors.contains(&pos!(6, 6)));
    assert!(neighbors.contains(&pos!(5, 4)));
}

#[test]
fn test_arithmetic() {
    assert_eq!(pos!(1, 2) + pos!(3, -4), pos!(4, -2));
}
