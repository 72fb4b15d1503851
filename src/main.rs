//! Gap Glider entry point
//!
//! Headless demo: the autopilot plays a handful of runs and the final
//! leaderboard is printed as JSON. Useful for eyeballing balance changes
//! with `RUST_LOG=info`.

use gap_glider::config::GameConfig;
use gap_glider::consts::SIM_DT;
use gap_glider::driver::Session;
use gap_glider::sim::RunPhase;

const DEMO_RUNS: u32 = 5;
const FRAME_DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xF1A9);
    log::info!("Gap Glider demo starting (seed {})", seed);

    let mut session = Session::new(seed, GameConfig::default());
    session.input.idle_mode = true;

    // Hard cap so a pathologically good autopilot still terminates
    let max_frames = (10.0 * 60.0 / SIM_DT) as u64;
    let mut frames = 0u64;
    let mut reported = 0u64;

    while session.state.crashes < DEMO_RUNS as u64 && frames < max_frames {
        session.frame(FRAME_DT);
        frames += 1;

        if session.state.crashes > reported && session.state.phase == RunPhase::Crashed {
            reported = session.state.crashes;
            log::info!(
                "Run {}/{} over: score {}, session best {}",
                reported,
                DEMO_RUNS,
                session.state.score,
                session.state.best_score
            );
        }
    }

    println!("Best score this session: {}", session.state.best_score);
    match serde_json::to_string_pretty(&session.scores) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize leaderboard: {}", e),
    }
}
