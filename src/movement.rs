//! Positions, directions, and the single step rule shared by every entity.

use crate::grid::{Grid, Tile};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    /// Fixed expansion order used wherever neighbors are tried; the
    /// pathfinder relies on it for deterministic tie-breaking.
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The cell one step in `dir`, or `None` if that would leave the
    /// non-negative quadrant. Upper bounds are the grid's concern.
    pub fn stepped(self, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Pos { x, y })
    }
}

#[derive(Clone, Copy, Debug)]
pub struct StepOutcome {
    pub pos: Pos,
    pub consumed: bool,
}

/// Apply one directional step against the grid.
///
/// A blocked step (wall or outside the grid) returns the original position
/// untouched; the caller keeps its direction, since direction-changing on
/// wall contact is entity policy. A `None` direction is a defined no-op and
/// never re-consumes the current tile. Landing on a pellet consumes it and
/// reports `consumed` so the caller can score it.
pub fn attempt_step(grid: &mut Grid, pos: Pos, dir: Option<Dir>) -> StepOutcome {
    let rejected = StepOutcome {
        pos,
        consumed: false,
    };
    let Some(dir) = dir else {
        return rejected;
    };
    let Some(next) = pos.stepped(dir) else {
        return rejected;
    };
    if !grid.is_passable(next) {
        return rejected;
    }
    let consumed = grid.tile_at(next) == Tile::Pellet;
    grid.consume_pellet(next);
    StepOutcome {
        pos: next,
        consumed,
    }
}
