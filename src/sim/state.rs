//! Game state and run bookkeeping
//!
//! Everything the tick transitions mutate lives here. Display layers get
//! read-only snapshots; nothing in this module touches a drawing surface.

use serde::{Deserialize, Serialize};

use super::playback::Playback;
use super::trajectory::{LaunchParams, Trajectory};
use crate::consts::MAX_LEVEL;
use crate::projection::ScreenProjection;
use crate::tuning::Tuning;

/// Operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Mode {
    /// Open-ended exploration, no targets or scoring
    Sandbox,
    /// Levels, targets, scoring
    #[default]
    Game,
}

/// Result of the most recent completed shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShotResult {
    #[default]
    None,
    Hit,
    Miss,
}

/// Read-only snapshot of the run for display layers
///
/// Refreshed on every transition; never hand out a mutable reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRunState {
    pub mode: Mode,
    /// Current level, 1-based
    pub level: u8,
    pub score: u32,
    pub last_result: ShotResult,
    /// Whether a flight is being played back right now
    pub running: bool,
}

/// Complete game state, mutated only through [`tick`](super::tick::tick)
#[derive(Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed; each launch derives its own RNG stream from it
    pub seed: u64,
    pub mode: Mode,
    /// Current level, 1-based, capped at [`MAX_LEVEL`]
    pub level: u8,
    pub score: u32,
    pub last_result: ShotResult,
    /// Shots launched this session (also salts the per-run RNG)
    pub shots_fired: u32,
    /// Current launch controls snapshot
    pub params: LaunchParams,
    /// Trajectory for the current params; recomputed on change and launch
    pub trajectory: Option<Trajectory>,
    /// Playback cursor and particle pool (ephemeral, never persisted)
    #[serde(skip)]
    pub playback: Playback,
    /// Physics-to-screen transform shared with the drawing layer
    pub projection: ScreenProjection,
    /// Gameplay balance knobs
    pub tuning: Tuning,
}

impl GameState {
    /// Fresh session: game mode, level 1, score 0, default controls.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            mode: Mode::Game,
            level: 1,
            score: 0,
            last_result: ShotResult::None,
            shots_fired: 0,
            params: LaunchParams::default(),
            trajectory: None,
            playback: Playback::default(),
            projection: ScreenProjection::default(),
            tuning: Tuning::default(),
        }
    }

    /// Fresh session with non-default balance knobs.
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            tuning,
            ..Self::new(seed)
        }
    }

    /// Snapshot for display layers.
    pub fn run_state(&self) -> GameRunState {
        GameRunState {
            mode: self.mode,
            level: self.level,
            score: self.score,
            last_result: self.last_result,
            running: self.playback.is_running(),
        }
    }

    /// Victory: a hit on the highest level. No further level transition
    /// is offered from here.
    pub fn is_victory(&self) -> bool {
        self.last_result == ShotResult::Hit && self.level == MAX_LEVEL
    }
}
