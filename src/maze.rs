//! The fixed maze layout and spawn cells.

use crate::movement::Pos;

/// 28x25 layout used by every mode. The versus mode parses it twice so each
/// side eats through its own copy.
pub const TEMPLATE: [&str; 25] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#......##....##....##......#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "######.##### ## #####.######",
    "######.##          ##.######",
    "######.## ######## ##.######",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#...##................##...#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

pub const CHASER_SPAWN: Pos = Pos::new(1, 1);

/// Inside the open central pen.
pub const PATROLLER_SPAWNS: [Pos; 2] = [Pos::new(13, 11), Pos::new(14, 11)];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Grid, Tile};

    #[test]
    fn template_parses_to_expected_extent() {
        let grid = Grid::parse(&TEMPLATE).unwrap();
        assert_eq!(grid.width(), 28);
        assert_eq!(grid.height(), 25);
        assert!(grid.pellet_count() > 0);
    }

    #[test]
    fn spawn_cells_are_usable() {
        let grid = Grid::parse(&TEMPLATE).unwrap();
        assert!(grid.is_passable(CHASER_SPAWN));
        for spawn in PATROLLER_SPAWNS {
            assert_eq!(grid.tile_at(spawn), Tile::OpenGap);
        }
    }
}
