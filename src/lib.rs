//! Hoop Shot - a projectile motion sandbox and target game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (trajectory solver, playback, game state)
//! - `projection`: Physics-space to screen-space transform
//! - `tuning`: Data-driven game balance
//! - `highscores`: Best-run leaderboard

pub mod highscores;
pub mod projection;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use projection::ScreenProjection;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Sampling intervals along a solved trajectory
    pub const SAMPLE_INTERVALS: u32 = 100;
    /// Minimum sampling step (s), guards near-instant flights
    pub const MIN_SAMPLE_DT: f32 = 0.01;

    /// Highest defined game level
    pub const MAX_LEVEL: u8 = 3;

    /// Canvas the projection targets (px)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    /// Linear scale of the physics-to-screen transform
    pub const PIXELS_PER_METER: f32 = 4.0;
    /// Screen position of the launch origin (px, y-down)
    pub const ORIGIN_X_PX: f32 = 50.0;
    pub const ORIGIN_Y_PX: f32 = CANVAS_HEIGHT - 50.0;

    /// Hard cap on live particles
    pub const MAX_PARTICLES: usize = 256;
}
