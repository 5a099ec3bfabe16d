//! Maze grid: tile storage, template parsing, and pellet bookkeeping.
//!
//! The grid's dimensions are fixed at construction. Only tile identity
//! mutates afterwards, and the only legal transition is `Pellet -> Empty`.

use thiserror::Error;

use crate::movement::Pos;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tile {
    Wall,
    Empty,
    Pellet,
    /// Passable corridor cell that never carried a pellet. Behaves like
    /// `Empty` for movement; kept distinct so templates round-trip.
    OpenGap,
}

impl Tile {
    /// True for every tile a mover may occupy: anything that is not a wall.
    pub fn is_passable(self) -> bool {
        self != Tile::Wall
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze template has no rows")]
    EmptyTemplate,

    #[error("maze row {row} is {got} columns wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unrecognized maze symbol {symbol:?} at row {row}, column {col}")]
    UnrecognizedSymbol {
        row: usize,
        col: usize,
        symbol: char,
    },
}

/// Row-major tile store. Callers never see the backing array; all reads and
/// writes go through the accessors so the one-way pellet transition holds.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    pellets: usize,
}

impl Grid {
    /// Parse a textual template: `#` wall, `.` pellet, space an open gap,
    /// any other printable ASCII symbol plain empty floor.
    pub fn parse(template: &[&str]) -> Result<Self, MazeError> {
        if template.is_empty() {
            return Err(MazeError::EmptyTemplate);
        }
        let width = template[0].chars().count();
        if width == 0 {
            return Err(MazeError::EmptyTemplate);
        }
        let height = template.len();

        let mut tiles = Vec::with_capacity(width * height);
        let mut pellets = 0;
        for (row, line) in template.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(MazeError::RaggedRow {
                    row,
                    expected: width,
                    got,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let tile = match symbol {
                    '#' => Tile::Wall,
                    '.' => Tile::Pellet,
                    ' ' => Tile::OpenGap,
                    c if c.is_ascii_graphic() => Tile::Empty,
                    c => {
                        return Err(MazeError::UnrecognizedSymbol {
                            row,
                            col,
                            symbol: c,
                        })
                    }
                };
                if tile == Tile::Pellet {
                    pellets += 1;
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            width,
            height,
            tiles,
            pellets,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn in_bounds(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Tile at `pos`. Every call site must have bounds-checked already; an
    /// out-of-range query is a programming error and panics.
    pub fn tile_at(&self, pos: Pos) -> Tile {
        assert!(
            self.in_bounds(pos),
            "tile query at {:?} outside {}x{} grid",
            pos,
            self.width,
            self.height
        );
        self.tiles[pos.y * self.width + pos.x]
    }

    /// True iff `pos` is inside the grid and not a wall. Everything outside
    /// the extent counts as impassable.
    pub fn is_passable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.tile_at(pos).is_passable()
    }

    /// Turn a pellet at `pos` into empty floor. No-op on any other tile, so
    /// consuming twice is safe.
    pub fn consume_pellet(&mut self, pos: Pos) {
        if self.tile_at(pos) == Tile::Pellet {
            self.tiles[pos.y * self.width + pos.x] = Tile::Empty;
            self.pellets -= 1;
        }
    }

    pub fn has_remaining_pellets(&self) -> bool {
        self.pellets > 0
    }

    pub fn pellet_count(&self) -> usize {
        self.pellets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: usize, y: usize) -> Pos {
        Pos::new(x, y)
    }

    #[test]
    fn parses_template_symbols() {
        let grid = Grid::parse(&["####", "#. #", "#-.#", "####"]).unwrap();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.tile_at(pos(0, 0)), Tile::Wall);
        assert_eq!(grid.tile_at(pos(1, 1)), Tile::Pellet);
        assert_eq!(grid.tile_at(pos(2, 1)), Tile::OpenGap);
        assert_eq!(grid.tile_at(pos(1, 2)), Tile::Empty);
        assert_eq!(grid.pellet_count(), 2);
        assert!(grid.has_remaining_pellets());
    }

    #[test]
    fn rejects_empty_template() {
        assert!(matches!(Grid::parse(&[]), Err(MazeError::EmptyTemplate)));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Grid::parse(&["###", "##"]).unwrap_err();
        assert_eq!(
            err,
            MazeError::RaggedRow {
                row: 1,
                expected: 3,
                got: 2
            }
        );
    }

    #[test]
    fn rejects_control_characters() {
        let err = Grid::parse(&["###", "#\t#", "###"]).unwrap_err();
        assert_eq!(
            err,
            MazeError::UnrecognizedSymbol {
                row: 1,
                col: 1,
                symbol: '\t'
            }
        );
    }

    #[test]
    fn pellet_consumption_is_one_way() {
        let mut grid = Grid::parse(&["###", "#.#", "###"]).unwrap();
        assert_eq!(grid.pellet_count(), 1);

        grid.consume_pellet(pos(1, 1));
        assert_eq!(grid.tile_at(pos(1, 1)), Tile::Empty);
        assert_eq!(grid.pellet_count(), 0);
        assert!(!grid.has_remaining_pellets());

        // Consuming again, or consuming a wall, changes nothing.
        grid.consume_pellet(pos(1, 1));
        grid.consume_pellet(pos(0, 0));
        assert_eq!(grid.tile_at(pos(1, 1)), Tile::Empty);
        assert_eq!(grid.tile_at(pos(0, 0)), Tile::Wall);
        assert_eq!(grid.pellet_count(), 0);
    }

    #[test]
    fn out_of_bounds_is_impassable() {
        let grid = Grid::parse(&["##", "#."]).unwrap();
        assert!(!grid.is_passable(pos(2, 0)));
        assert!(!grid.is_passable(pos(0, 2)));
        assert!(grid.is_passable(pos(1, 1)));
        assert!(!grid.is_passable(pos(0, 0)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_bounds_tile_query_panics() {
        let grid = Grid::parse(&["##", "#."]).unwrap();
        grid.tile_at(pos(5, 5));
    }
}
