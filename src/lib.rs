//! Gap Glider - a side-scrolling flap-and-glide arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pipe pool, run state machine, collisions)
//! - `config`: Data-driven game balance (one config replaces the N hand-tuned versions)
//! - `highscores`: Session-scoped leaderboard
//! - `driver`: Frame driver boundary (asset manifest, input keys, fixed-step session)

pub mod config;
pub mod driver;
pub mod highscores;
pub mod sim;

pub use config::{GameConfig, StartInput};
pub use highscores::HighScores;

/// Game world constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// Top edge of the road strip; the bird rests here after a crash
    pub const GROUND_Y: f32 = 568.0;

    /// Pipe sprite dimensions
    pub const PIPE_WIDTH: f32 = 32.0;
    pub const PIPE_SPRITE_HEIGHT: f32 = 320.0;
    /// Pairs whose x drops below this are recycled to the right edge
    pub const PIPE_CULL_X: f32 = -PIPE_WIDTH;

    /// Bird spritesheet frame dimensions
    pub const BIRD_WIDTH: f32 = 64.0;
    pub const BIRD_HEIGHT: f32 = 96.0;
    /// The bird never moves horizontally; the world scrolls past it
    pub const BIRD_START_X: f32 = 150.0;
    pub const BIRD_START_Y: f32 = 200.0;

    /// A pair counts as passed once its x crosses this line leftward
    pub const PASS_LINE_X: f32 = BIRD_START_X - BIRD_WIDTH;

    /// Rotation clamp while airborne (radians, ±45 degrees)
    pub const MAX_TILT: f32 = std::f32::consts::FRAC_PI_4;
}
