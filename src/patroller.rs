//! The wall-avoiding adversary.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::Grid;
use crate::movement::{self, Dir, Pos};

/// A patroller keeps a heading until it runs into something. No score, no
/// lives, no chase logic: blocked means "pick a fresh uniform-random heading
/// and wait a tick", which may well pick the blocked one again.
pub struct Patroller {
    pos: Pos,
    dir: Dir,
}

impl Patroller {
    pub fn new(pos: Pos, dir: Dir) -> Self {
        Self { pos, dir }
    }

    pub fn tick(&mut self, grid: &mut Grid, rng: &mut impl Rng) {
        let blocked = self
            .pos
            .stepped(self.dir)
            .map_or(true, |next| !grid.is_passable(next));
        if blocked {
            self.dir = *Dir::ALL.choose(rng).unwrap();
            return;
        }
        // Pellets mean nothing to a patroller, but the shared step rule still
        // clears them; that parity with the chaser's grid is deliberate.
        let out = movement::attempt_step(grid, self.pos, Some(self.dir));
        self.pos = out.pos;
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }
}
