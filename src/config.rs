//! Tuning knobs, read once from the environment at start-up.

use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_TICK_HZ: u64 = 15;
const DEFAULT_RENDER_FPS: u64 = 60;
const DEFAULT_LIVES: u32 = 3;
const DEFAULT_PELLET_SCORE: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    /// Simulation steps per second.
    pub tick_hz: u64,
    /// Upper bound on render passes per second.
    pub render_fps: u64,
    pub starting_lives: u32,
    pub pellet_score: u32,
    /// Fixed adversary RNG seed; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_hz: DEFAULT_TICK_HZ,
            render_fps: DEFAULT_RENDER_FPS,
            starting_lives: DEFAULT_LIVES,
            pellet_score: DEFAULT_PELLET_SCORE,
            seed: None,
        }
    }
}

impl Config {
    /// Unset, unparseable, or zero values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            tick_hz: parsed_var("GRIDCHASE_TICK_HZ")
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_TICK_HZ),
            render_fps: parsed_var("GRIDCHASE_RENDER_FPS")
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_RENDER_FPS),
            starting_lives: parsed_var("GRIDCHASE_LIVES")
                .filter(|v| *v > 0)
                .unwrap_or(DEFAULT_LIVES),
            pellet_score: parsed_var("GRIDCHASE_PELLET_SCORE").unwrap_or(DEFAULT_PELLET_SCORE),
            seed: parsed_var("GRIDCHASE_SEED"),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.tick_hz.max(1))
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.render_fps.max(1))
    }
}

fn parsed_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}
