//! Frame driver boundary
//!
//! Everything an embedding engine needs to host the sim: the asset
//! manifest to load before the first frame (preload), a `Session` to
//! construct once assets are ready (create), and `Session::frame` to call
//! once per rendered frame with the real delta (update). Inside, frames
//! are chopped into fixed 120 Hz steps so gameplay is frame-rate
//! independent.

use serde::{Deserialize, Serialize};

use crate::config::{GameConfig, StartInput};
use crate::consts::*;
use crate::highscores::HighScores;
use crate::sim::{GameState, RunPhase, TickInput, tick};

/// How a named resource should be loaded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AssetKind {
    Image,
    SpriteSheet { frame_width: u32, frame_height: u32 },
}

/// A named resource the driver must load before the first frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSpec {
    pub name: &'static str,
    pub path: &'static str,
    pub kind: AssetKind,
}

/// The preload manifest
pub fn manifest() -> Vec<AssetSpec> {
    vec![
        AssetSpec {
            name: "background",
            path: "assets/background.png",
            kind: AssetKind::Image,
        },
        AssetSpec {
            name: "road",
            path: "assets/road.png",
            kind: AssetKind::Image,
        },
        AssetSpec {
            name: "column",
            path: "assets/column.png",
            kind: AssetKind::Image,
        },
        AssetSpec {
            name: "bird",
            path: "assets/bird.png",
            kind: AssetKind::SpriteSheet {
                frame_width: BIRD_WIDTH as u32,
                frame_height: BIRD_HEIGHT as u32,
            },
        },
    ]
}

/// Keys the game recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
}

/// One hosted game: state, leaderboard, and pending input
///
/// The driver forwards key presses and calls `frame` once per rendered
/// frame; one-shot inputs are consumed by the first substep.
pub struct Session {
    pub state: GameState,
    pub scores: HighScores,
    pub input: TickInput,
    accumulator: f32,
    last_phase: RunPhase,
}

impl Session {
    pub fn new(seed: u64, config: GameConfig) -> Self {
        Self {
            state: GameState::new(seed, config),
            scores: HighScores::new(),
            input: TickInput::default(),
            accumulator: 0.0,
            last_phase: RunPhase::Idle,
        }
    }

    /// Map a key press onto tick inputs per the configured binding
    pub fn key_down(&mut self, key: Key) {
        let binding = self.state.config.start_input;
        match key {
            Key::Space => {
                if binding == StartInput::SpaceBar {
                    self.input.start = true;
                }
            }
            Key::ArrowUp => {
                self.input.flap = true;
                if binding == StartInput::UpArrow {
                    self.input.start = true;
                }
            }
        }
    }

    /// Run simulation ticks for one rendered frame
    pub fn frame(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.input.clone();
            tick(&mut self.state, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.start = false;
            self.input.flap = false;

            self.on_phase_change();
        }
    }

    /// Record finished runs on the leaderboard
    fn on_phase_change(&mut self) {
        let phase = self.state.phase;
        if phase != self.last_phase {
            if self.last_phase == RunPhase::Running && phase == RunPhase::Crashed {
                self.scores.add_score(self.state.score, self.state.run_ticks);
            }
            self.last_phase = phase;
        }
    }
}
