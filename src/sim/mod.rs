//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One cursor step per visual tick, no wall-clock reads
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod playback;
pub mod state;
pub mod targets;
pub mod tick;
pub mod trajectory;

pub use playback::{Particle, Playback, PlaybackStatus};
pub use state::{GameRunState, GameState, Mode, ShotResult};
pub use targets::{Target, evaluate, target_for_level};
pub use tick::{TickInput, tick};
pub use trajectory::{Environment, LaunchParams, Trajectory, TrajectorySample, solve};
