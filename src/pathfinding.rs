//! Breadth-first search from a start cell to the nearest pellet.
//!
//! Only the first step of the shortest discovered path is returned: the
//! caller re-runs the search every tick, so the rest of the path would be
//! stale by the time it mattered. Recomputing from scratch keeps the policy
//! correct as pellets disappear, and a full sweep of a tens-by-tens grid is
//! nothing at interactive tick rates.

use std::collections::VecDeque;

use crate::grid::{Grid, Tile};
use crate::movement::{Dir, Pos};

/// First step of a shortest path from `start` to the nearest pellet, or
/// `None` when no pellet is reachable (hold still). Neighbors expand in
/// left/right/up/down order, so equidistant pellets tie-break
/// deterministically. A pellet under `start` itself yields `None`; entities
/// clear the tile they stand on when they arrive, so that case only comes up
/// with hand-built grids.
pub fn nearest_pellet_step(grid: &Grid, start: Pos) -> Option<Dir> {
    let index = |p: Pos| p.y * grid.width() + p.x;
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut frontier: VecDeque<(Pos, Option<Dir>)> = VecDeque::new();

    visited[index(start)] = true;
    frontier.push_back((start, None));

    while let Some((pos, first_step)) = frontier.pop_front() {
        if grid.tile_at(pos) == Tile::Pellet {
            return first_step;
        }
        for dir in Dir::ALL {
            let Some(next) = pos.stepped(dir) else {
                continue;
            };
            if !grid.is_passable(next) || visited[index(next)] {
                continue;
            }
            visited[index(next)] = true;
            frontier.push_back((next, first_step.or(Some(dir))));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::attempt_step;

    #[test]
    fn corridor_pellet_two_steps_east() {
        let grid = Grid::parse(&["#####", "#  .#", "#####"]).unwrap();
        assert_eq!(nearest_pellet_step(&grid, Pos::new(1, 1)), Some(Dir::Right));
    }

    #[test]
    fn equidistant_pellets_tie_break_left_first() {
        let grid = Grid::parse(&["#####", "#. .#", "#####"]).unwrap();
        assert_eq!(nearest_pellet_step(&grid, Pos::new(2, 1)), Some(Dir::Left));
    }

    #[test]
    fn no_pellets_means_no_step_anywhere() {
        let grid = Grid::parse(&["#####", "#   #", "# # #", "#####"]).unwrap();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let pos = Pos::new(x, y);
                if grid.is_passable(pos) {
                    assert_eq!(nearest_pellet_step(&grid, pos), None);
                }
            }
        }
    }

    #[test]
    fn walled_off_pellet_is_unreachable() {
        let grid = Grid::parse(&["#####", "# #.#", "#####"]).unwrap();
        assert_eq!(nearest_pellet_step(&grid, Pos::new(1, 1)), None);
    }

    #[test]
    fn pellet_under_start_yields_none() {
        let grid = Grid::parse(&["###", "#.#", "###"]).unwrap();
        assert_eq!(nearest_pellet_step(&grid, Pos::new(1, 1)), None);
    }

    #[test]
    fn suggested_steps_reach_the_pellet_in_shortest_length() {
        // Both ways around the block are six steps; following the suggested
        // first step each tick must arrive in exactly six.
        let mut grid = Grid::parse(&[
            "#######",
            "#    .#",
            "# ### #",
            "#     #",
            "#######",
        ])
        .unwrap();
        let mut pos = Pos::new(1, 3);

        let mut steps = 0;
        while grid.has_remaining_pellets() {
            let dir = nearest_pellet_step(&grid, pos);
            assert!(dir.is_some(), "search lost the pellet at step {steps}");
            let out = attempt_step(&mut grid, pos, dir);
            assert_ne!(out.pos, pos, "suggested step was blocked");
            pos = out.pos;
            steps += 1;
            assert!(steps <= 6, "path overshot the shortest length");
        }
        assert_eq!(steps, 6);
        assert_eq!(pos, Pos::new(5, 1));
    }
}
