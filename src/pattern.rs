//! plain text patterns: one row per line, `#` for alive cells, `.` or a space
//! for dead ones. short lines are padded with dead cells.

use crate::{pos, BoundedWorld, CellStatus, PatternError, World};

const ALIVE: char = '#';
const DEAD: char = '.';

fn symbol_status(symbol: char) -> Option<CellStatus> {
    match symbol {
        ALIVE => Some(CellStatus::Alive),
        DEAD | ' ' => Some(CellStatus::Dead),
        _ => None,
    }
}

fn status_symbol(status: CellStatus) -> char {
    match status {
        CellStatus::Alive => ALIVE,
        CellStatus::Dead => DEAD,
    }
}

fn coordinate(n: usize) -> Result<i32, PatternError> {
    i32::try_from(n).map_err(|_| PatternError::TooLarge(n))
}

/// builds a world just large enough to hold the pattern.
pub fn parse(text: &str) -> Result<BoundedWorld, PatternError> {
    let lines: Vec<&str> = text.lines().collect();
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let mut world = BoundedWorld::new(coordinate(width)?, coordinate(lines.len())?);

    for (y, line) in lines.iter().enumerate() {
        for (x, symbol) in line.chars().enumerate() {
            let status = symbol_status(symbol).ok_or(PatternError::UnknownSymbol {
                symbol,
                line: y + 1,
                column: x + 1,
            })?;
            if status.is_alive() {
                world.set(pos!(coordinate(x)?, coordinate(y)?), status)?;
            }
        }
    }
    Ok(world)
}

pub fn render(world: &BoundedWorld) -> String {
    let mut result = String::new();
    for pos in world.positions() {
        result.push(status_symbol(world.get(pos)));
        if pos.x == world.width() - 1 {
            result.push('\n');
        }
    }
    result
}
