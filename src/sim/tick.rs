//! Fixed timestep simulation tick
//!
//! The run state machine: Idle -> Running -> Crashed -> Idle. Crashing is
//! ordinary gameplay, so it is a phase transition here, never an error.

use super::collision;
use super::state::{GameState, RunPhase};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start a run from Idle, or acknowledge the crash screen
    pub start: bool,
    /// Flap (up arrow)
    pub flap: bool,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }
    let input = &input;

    state.time_ticks += 1;
    let cfg = state.config;

    match state.phase {
        RunPhase::Idle => {
            // Hover with a gentle bob until the start input
            let t = state.time_ticks as f32 * SIM_DT;
            state.bird.pos.y = BIRD_START_Y + (t * 3.5).sin() * 12.0;
            state.bird.vel_y = 0.0;

            if input.start {
                state.bird.pos.y = BIRD_START_Y;
                state.bird.gravity_enabled = true;
                state.run_ticks = 0;
                state.phase = RunPhase::Running;
                log::info!("Run started (seed {})", state.seed);
            }
        }

        RunPhase::Running => {
            state.run_ticks += 1;

            if input.flap {
                state.bird.flap(&cfg);
            }
            state.bird.integrate(&cfg, dt);

            // World scroll; the bird's x never moves
            state.pipes.advance(cfg.scroll_speed * dt);
            state.background_offset =
                (state.background_offset + cfg.background_scroll_speed * dt) % WORLD_WIDTH;

            // Scoring: edge-triggered pass detection, best tracked live
            let events = state.pipes.check_passed(PASS_LINE_X);
            if events > 0 {
                state.score += events;
                state.commit_best();
                log::debug!("Score {}", state.score);
            }

            state
                .pipes
                .recycle_offscreen(&cfg, &mut state.rng_state);

            state.flags = collision::scan(&state.bird, &state.pipes, &cfg);
            if state.flags.any() {
                state.commit_best();
                state.crashes += 1;
                state.phase = RunPhase::Crashed;
                log::info!(
                    "Crashed after {} ticks: score {}, best {}",
                    state.run_ticks,
                    state.score,
                    state.best_score
                );
            }
        }

        RunPhase::Crashed => {
            // Scrolling has stopped; the bird settles onto the road
            if state.bird.on_ground() {
                state.bird.rest_on_ground();
            } else {
                state.bird.integrate(&cfg, dt);
            }

            if input.start {
                state.reset_run();
            }
        }
    }
}

/// Demo AI: start immediately, flap to chase the next gap center
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        RunPhase::Idle => input.start = true,
        // Let the bird settle before acknowledging the crash screen
        RunPhase::Crashed => input.start = state.bird.on_ground(),
        RunPhase::Running => {
            if let Some(pair) = state.pipes.next_ahead(state.bird.pos.x) {
                let target = pair.top_y + state.config.pipe_vertical_gap / 2.0;
                if state.bird.pos.y > target && state.bird.vel_y > -20.0 {
                    input.flap = true;
                }
            } else if state.bird.pos.y > BIRD_START_Y && state.bird.vel_y > -20.0 {
                input.flap = true;
            }
        }
    }
}
