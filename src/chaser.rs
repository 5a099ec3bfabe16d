//! The pellet-eating agent, human- or CPU-driven.

use crate::grid::Grid;
use crate::movement::{self, Dir, Pos};
use crate::pathfinding;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ControlMode {
    Human,
    Ai,
}

/// One struct covers both control modes; direction selection is a branch on
/// the mode tag, not a subtype. Lives only ever go down, score only up; once
/// lives hit zero the chaser is terminal and ignores further ticks.
pub struct Chaser {
    pos: Pos,
    spawn: Pos,
    dir: Option<Dir>,
    mode: ControlMode,
    score: u32,
    lives: u32,
    pellet_score: u32,
}

impl Chaser {
    /// Place a chaser at its spawn cell. A pellet under the spawn is cleared
    /// without scoring, so the tile reads as already visited from tick zero.
    pub fn new(
        grid: &mut Grid,
        spawn: Pos,
        mode: ControlMode,
        lives: u32,
        pellet_score: u32,
    ) -> Self {
        grid.consume_pellet(spawn);
        Self {
            pos: spawn,
            spawn,
            dir: None,
            mode,
            score: 0,
            lives,
            pellet_score,
        }
    }

    /// Record the desired direction for the next move. Intents persist until
    /// replaced: holding a direction into a wall keeps bumping rather than
    /// stalling silently.
    pub fn set_intent(&mut self, dir: Option<Dir>) {
        self.dir = dir;
    }

    pub fn tick(&mut self, grid: &mut Grid) {
        if self.is_game_over() {
            return;
        }
        if self.mode == ControlMode::Ai {
            self.dir = pathfinding::nearest_pellet_step(grid, self.pos);
        }
        let out = movement::attempt_step(grid, self.pos, self.dir);
        self.pos = out.pos;
        if out.consumed {
            self.score += self.pellet_score;
        }
    }

    /// Take one life. With lives remaining the chaser returns to its spawn
    /// cell with a cleared direction; score and grid state are untouched.
    /// Reaching zero is terminal.
    pub fn lose_life(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.lives -= 1;
        if self.lives > 0 {
            self.pos = self.spawn;
            self.dir = None;
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn dir(&self) -> Option<Dir> {
        self.dir
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Tile;

    const PELLET_SCORE: u32 = 10;

    fn corridor() -> Grid {
        Grid::parse(&["#####", "#  .#", "#####"]).unwrap()
    }

    fn human(grid: &mut Grid, spawn: Pos) -> Chaser {
        Chaser::new(grid, spawn, ControlMode::Human, 3, PELLET_SCORE)
    }

    #[test]
    fn spawn_pellet_is_cleared_without_score() {
        let mut grid = Grid::parse(&["###", "#.#", "###"]).unwrap();
        let chaser = Chaser::new(&mut grid, Pos::new(1, 1), ControlMode::Ai, 3, PELLET_SCORE);
        assert_eq!(grid.tile_at(Pos::new(1, 1)), Tile::Empty);
        assert_eq!(grid.pellet_count(), 0);
        assert_eq!(chaser.score(), 0);
    }

    #[test]
    fn score_rises_exactly_on_pellet_steps() {
        let mut grid = corridor();
        let mut chaser = human(&mut grid, Pos::new(1, 1));
        chaser.set_intent(Some(Dir::Right));

        chaser.tick(&mut grid); // onto open gap
        assert_eq!(chaser.score(), 0);
        chaser.tick(&mut grid); // onto the pellet
        assert_eq!(chaser.score(), PELLET_SCORE);
        assert_eq!(chaser.pos(), Pos::new(3, 1));
    }

    #[test]
    fn direction_survives_wall_bumps() {
        let mut grid = corridor();
        let mut chaser = human(&mut grid, Pos::new(1, 1));
        chaser.set_intent(Some(Dir::Up));

        chaser.tick(&mut grid);
        chaser.tick(&mut grid);
        assert_eq!(chaser.pos(), Pos::new(1, 1));
        assert_eq!(chaser.dir(), Some(Dir::Up));

        // The held intent applies the moment it becomes useful elsewhere.
        chaser.set_intent(Some(Dir::Right));
        chaser.tick(&mut grid);
        assert_eq!(chaser.pos(), Pos::new(2, 1));
    }

    #[test]
    fn ai_reaches_the_pellet_in_two_ticks() {
        let mut grid = corridor();
        let mut chaser = Chaser::new(&mut grid, Pos::new(1, 1), ControlMode::Ai, 3, PELLET_SCORE);

        chaser.tick(&mut grid);
        chaser.tick(&mut grid);
        assert_eq!(chaser.score(), PELLET_SCORE);
        assert_eq!(chaser.pos(), Pos::new(3, 1));
        assert!(!grid.has_remaining_pellets());
    }

    #[test]
    fn ai_holds_still_with_nothing_left() {
        let mut grid = Grid::parse(&["####", "#  #", "####"]).unwrap();
        let mut chaser = Chaser::new(&mut grid, Pos::new(1, 1), ControlMode::Ai, 3, PELLET_SCORE);
        chaser.tick(&mut grid);
        assert_eq!(chaser.pos(), Pos::new(1, 1));
        assert_eq!(chaser.dir(), None);
    }

    #[test]
    fn life_loss_resets_position_and_direction_only() {
        let mut grid = corridor();
        let mut chaser = human(&mut grid, Pos::new(1, 1));
        chaser.set_intent(Some(Dir::Right));
        chaser.tick(&mut grid);
        chaser.tick(&mut grid);
        assert_eq!(chaser.score(), PELLET_SCORE);

        chaser.lose_life();
        assert_eq!(chaser.pos(), Pos::new(1, 1));
        assert_eq!(chaser.dir(), None);
        assert_eq!(chaser.lives(), 2);
        assert_eq!(chaser.score(), PELLET_SCORE);
    }

    #[test]
    fn exhausted_lives_freeze_the_chaser() {
        let mut grid = corridor();
        let mut chaser = Chaser::new(&mut grid, Pos::new(1, 1), ControlMode::Human, 1, PELLET_SCORE);
        chaser.lose_life();
        assert!(chaser.is_game_over());

        chaser.set_intent(Some(Dir::Right));
        chaser.tick(&mut grid);
        chaser.tick(&mut grid);
        assert_eq!(chaser.pos(), Pos::new(1, 1));
        assert_eq!(chaser.score(), 0);

        chaser.lose_life();
        assert_eq!(chaser.lives(), 0);
    }
}
