//! Session orchestration: one discrete tick at a time, in a fixed order.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::chaser::{Chaser, ControlMode};
use crate::config::Config;
use crate::grid::{Grid, MazeError};
use crate::maze;
use crate::movement::Dir;
use crate::patroller::Patroller;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// One maze, human chaser, patrollers.
    Human,
    /// One maze, CPU chaser, patrollers.
    Ai,
    /// Two independent mazes side by side: the human dodges patrollers while
    /// the CPU races through an unguarded copy.
    Versus,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Won { score: u32 },
    Lost { score: u32 },
}

/// One maze with its entity set. Arenas never interact; versus mode simply
/// ticks two of them.
pub struct Arena {
    pub grid: Grid,
    pub chaser: Chaser,
    pub patrollers: Vec<Patroller>,
    pub outcome: Option<Outcome>,
}

impl Arena {
    fn new(
        mode: ControlMode,
        with_patrollers: bool,
        config: &Config,
        rng: &mut impl Rng,
    ) -> Result<Self, MazeError> {
        let mut grid = Grid::parse(&maze::TEMPLATE)?;
        let chaser = Chaser::new(
            &mut grid,
            maze::CHASER_SPAWN,
            mode,
            config.starting_lives,
            config.pellet_score,
        );
        let patrollers = if with_patrollers {
            maze::PATROLLER_SPAWNS
                .iter()
                .map(|&spawn| Patroller::new(spawn, *Dir::ALL.choose(rng).unwrap()))
                .collect()
        } else {
            Vec::new()
        };
        Ok(Self {
            grid,
            chaser,
            patrollers,
            outcome: None,
        })
    }

    /// Chaser first, then patrollers, then the collision and terminal
    /// checks. Coinciding with several patrollers in one tick still costs a
    /// single life: the check is "does any patroller share my tile", not a
    /// count. Losing on the same tick the last pellet disappears is a loss.
    fn tick(&mut self, rng: &mut impl Rng) {
        if self.outcome.is_some() {
            return;
        }

        self.chaser.tick(&mut self.grid);
        for patroller in &mut self.patrollers {
            patroller.tick(&mut self.grid, rng);
        }

        let caught = self
            .patrollers
            .iter()
            .any(|p| p.pos() == self.chaser.pos());
        if caught {
            debug!(
                pos = ?self.chaser.pos(),
                dir = ?self.chaser.dir(),
                "chaser caught"
            );
            self.chaser.lose_life();
        }

        if self.chaser.is_game_over() {
            self.outcome = Some(Outcome::Lost {
                score: self.chaser.score(),
            });
            info!(score = self.chaser.score(), "arena lost");
        } else if !self.grid.has_remaining_pellets() {
            self.outcome = Some(Outcome::Won {
                score: self.chaser.score(),
            });
            info!(score = self.chaser.score(), "arena cleared");
        }
    }
}

pub struct Session {
    pub mode: Mode,
    pub arenas: Vec<Arena>,
    rng: StdRng,
}

impl Session {
    pub fn new(mode: Mode, config: &Config) -> Result<Self, MazeError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let arenas = match mode {
            Mode::Human => vec![Arena::new(ControlMode::Human, true, config, &mut rng)?],
            Mode::Ai => vec![Arena::new(ControlMode::Ai, true, config, &mut rng)?],
            Mode::Versus => vec![
                Arena::new(ControlMode::Human, true, config, &mut rng)?,
                Arena::new(ControlMode::Ai, false, config, &mut rng)?,
            ],
        };
        info!(?mode, seed = ?config.seed, "session started");
        Ok(Self { mode, arenas, rng })
    }

    /// Route a keypress to the human-controlled chaser(s). The intent is
    /// retained until the next keypress.
    pub fn set_human_intent(&mut self, dir: Dir) {
        for arena in &mut self.arenas {
            if arena.chaser.mode() == ControlMode::Human {
                arena.chaser.set_intent(Some(dir));
            }
        }
    }

    pub fn tick(&mut self) {
        for arena in &mut self.arenas {
            arena.tick(&mut self.rng);
        }
    }

    /// First terminal arena outcome, if any; reaching one ends the run.
    pub fn outcome(&self) -> Option<Outcome> {
        self.arenas.iter().find_map(|arena| arena.outcome)
    }
}
