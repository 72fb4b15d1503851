//! Data-driven game balance
//!
//! The original game shipped as a stack of near-identical versions, each
//! hard-coding slightly different constants. All of the knobs that varied
//! between versions live in one `GameConfig` instead.

use serde::{Deserialize, Serialize};

/// Which key starts a run (and acknowledges the crash screen)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StartInput {
    /// Space bar starts, up arrow flaps
    #[default]
    SpaceBar,
    /// Up arrow both starts and flaps
    UpArrow,
}

/// Tunable gameplay constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Downward acceleration while airborne (px/s²)
    pub gravity: f32,
    /// Vertical velocity applied by a flap (negative = up, px/s)
    pub flap_velocity: f32,
    /// Leftward obstacle scroll speed (px/s)
    pub scroll_speed: f32,
    /// Parallax background scroll speed (px/s)
    pub background_scroll_speed: f32,
    /// Number of pipe pairs in the pool
    pub pipe_count: usize,
    /// Horizontal spacing between consecutive pairs (px)
    pub pipe_horizontal_gap: f32,
    /// Vertical opening between a pair's top and bottom pipe (px)
    pub pipe_vertical_gap: f32,
    /// Random range for the top pipe's lower edge (px from world top)
    pub gap_y_min: f32,
    pub gap_y_max: f32,
    /// X of the first pair at run start
    pub first_pipe_x: f32,
    /// Key binding for starting a run
    pub start_input: StartInput,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity: 300.0,
            flap_velocity: -160.0,
            scroll_speed: 50.0,
            background_scroll_speed: 10.0,
            pipe_count: 4,
            pipe_horizontal_gap: 300.0,
            pipe_vertical_gap: 200.0,
            gap_y_min: 50.0,
            gap_y_max: 300.0,
            first_pipe_x: 400.0,
            start_input: StartInput::SpaceBar,
        }
    }
}

impl GameConfig {
    /// Inclusive random range for a recycled pair's gap offset
    pub fn gap_range(&self) -> std::ops::RangeInclusive<f32> {
        self.gap_y_min..=self.gap_y_max
    }
}
