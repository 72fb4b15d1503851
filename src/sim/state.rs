//! Game state and core simulation types
//!
//! All state needed to replay a run deterministically lives here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::pipes::PipePool;
use crate::config::GameConfig;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Waiting for the start input; bird hovers, obstacles stationary
    Idle,
    /// Active gameplay
    Running,
    /// Collision happened; waiting for the acknowledge input
    Crashed,
}

/// Collision scan results for one frame
///
/// Typed replacement for the source's ambient `hasLanded`/`hasBumped`
/// globals. Written once per tick by the collision scan, read by the run
/// state machine, cleared on run reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionFlags {
    /// Bird touched the road
    pub landed: bool,
    /// Bird touched a pipe
    pub bumped: bool,
}

impl CollisionFlags {
    #[inline]
    pub fn any(&self) -> bool {
        self.landed || self.bumped
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// The controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    /// Center position; x never changes, the world scrolls instead
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vel_y: f32,
    /// Body tilt in radians, tracks vertical velocity, clamped to ±45°
    pub rotation: f32,
    /// Disabled while idle so the bird hovers at the spawn point
    pub gravity_enabled: bool,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BIRD_START_X, BIRD_START_Y),
            vel_y: 0.0,
            rotation: 0.0,
            gravity_enabled: false,
        }
    }
}

impl Bird {
    /// Bounding box for the collision scan
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::new(BIRD_WIDTH, BIRD_HEIGHT))
    }

    /// Apply a flap impulse
    pub fn flap(&mut self, cfg: &GameConfig) {
        self.vel_y = cfg.flap_velocity;
    }

    /// Integrate gravity and position for one step, clamping at the ceiling
    pub fn integrate(&mut self, cfg: &GameConfig, dt: f32) {
        if self.gravity_enabled {
            self.vel_y += cfg.gravity * dt;
        }
        self.pos.y += self.vel_y * dt;

        // World-bounds clamp at the top
        let ceiling = BIRD_HEIGHT / 2.0;
        if self.pos.y < ceiling {
            self.pos.y = ceiling;
            self.vel_y = self.vel_y.max(0.0);
        }

        // Tilt toward the velocity sign; full deflection at flap speed
        let tilt = self.vel_y / cfg.flap_velocity.abs() * MAX_TILT;
        self.rotation = tilt.clamp(-MAX_TILT, MAX_TILT);
    }

    /// True once the bottom of the bird reaches the road
    pub fn on_ground(&self) -> bool {
        self.pos.y + BIRD_HEIGHT / 2.0 >= GROUND_Y
    }

    /// Pin the bird to the road surface (post-crash settle)
    pub fn rest_on_ground(&mut self) {
        self.pos.y = GROUND_Y - BIRD_HEIGHT / 2.0;
        self.vel_y = 0.0;
    }
}

/// Serializable RNG state
///
/// Each draw derives a fresh `Pcg32` from the seed and a draw counter, so
/// saved state replays identically without serializing the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
    pub draws: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed, draws: 0 }
    }

    /// Draw a uniform gap offset from the configured range
    pub fn next_gap_y(&mut self, cfg: &GameConfig) -> f32 {
        self.draws += 1;
        let stream = self.seed.wrapping_add(self.draws.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let mut rng = Pcg32::seed_from_u64(stream);
        rng.random_range(cfg.gap_range())
    }
}

/// Player-facing status line for the current phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Banner {
    Instructions,
    StayUpright,
    Crashed,
}

impl Banner {
    pub fn text(&self) -> &'static str {
        match self {
            Banner::Instructions => "Instructions: Press space bar to start",
            Banner::StayUpright => {
                "Instructions: Press the up arrow to stay upright\nAnd don't hit the columns or ground"
            }
            Banner::Crashed => "Oh no! You crashed!",
        }
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Gameplay constants for this session
    pub config: GameConfig,
    /// Current phase
    pub phase: RunPhase,
    /// The controlled entity
    pub bird: Bird,
    /// Recycled pipe pairs
    pub pipes: PipePool,
    /// Collision scan results for the current frame
    pub flags: CollisionFlags,
    /// Pairs passed this run
    pub score: u32,
    /// Best score this session, monotonically non-decreasing
    pub best_score: u32,
    /// Completed (crashed) runs this session
    pub crashes: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Ticks spent in the current run
    pub run_ticks: u64,
    /// Accumulated parallax offset, wrapped at world width
    pub background_offset: f32,
}

impl GameState {
    /// Create a new game state with the given seed and config
    pub fn new(seed: u64, config: GameConfig) -> Self {
        let mut rng_state = RngState::new(seed);
        let pipes = PipePool::new(&config, &mut rng_state);

        Self {
            seed,
            rng_state,
            config,
            phase: RunPhase::Idle,
            bird: Bird::default(),
            pipes,
            flags: CollisionFlags::default(),
            score: 0,
            best_score: 0,
            crashes: 0,
            time_ticks: 0,
            run_ticks: 0,
            background_offset: 0.0,
        }
    }

    /// Fold the current score into the session best
    pub fn commit_best(&mut self) {
        self.best_score = self.best_score.max(self.score);
    }

    /// Reset for a fresh run (crash acknowledged)
    ///
    /// Clears flags and score, respawns the bird, and lays the pool back
    /// out at its initial offsets. `best_score` survives.
    pub fn reset_run(&mut self) {
        self.commit_best();
        self.flags.clear();
        self.bird = Bird::default();
        self.pipes.reset(&self.config, &mut self.rng_state);
        self.score = 0;
        self.run_ticks = 0;
        self.background_offset = 0.0;
        self.phase = RunPhase::Idle;
    }

    /// Status line for the current phase
    pub fn banner(&self) -> Banner {
        match self.phase {
            RunPhase::Idle => Banner::Instructions,
            RunPhase::Running => Banner::StayUpright,
            RunPhase::Crashed => Banner::Crashed,
        }
    }
}
