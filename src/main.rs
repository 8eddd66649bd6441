//! Hoop Shot entry point
//!
//! Headless demo: a sandbox solve followed by a short scripted game
//! session driven through the public tick API, printing what the display
//! layers would show.

use std::path::Path;

use hoop_shot::HighScores;
use hoop_shot::sim::{Environment, GameState, LaunchParams, ShotResult, TickInput, tick};

const HIGH_SCORE_FILE: &str = "highscores.json";

fn main() {
    env_logger::init();

    // Sandbox: solve and report, no playback needed.
    let params = LaunchParams::clamped(50.0, 45.0, 0.0, Environment::Earth);
    let trajectory = params.solve();
    println!(
        "Sandbox solve: {} m/s at {}° on {}",
        params.velocity,
        params.angle_deg,
        params.environment.label()
    );
    println!("  time of flight  {:7.2} s", trajectory.time_of_flight);
    println!("  max height      {:7.2} m", trajectory.max_height);
    println!("  range           {:7.2} m", trajectory.max_range);
    println!(
        "  impact          {:7.2} m/s at {:.1}°",
        trajectory.impact_velocity, trajectory.impact_angle
    );

    // Game session: one shot dialed in on the level-1 target, then a
    // wild one at level 2.
    let mut state = GameState::new(7);
    play_shot(
        &mut state,
        LaunchParams::clamped(37.9, 29.25, 0.0, Environment::Earth),
    );
    report(&state);

    tick(
        &mut state,
        &TickInput {
            next_level: true,
            ..Default::default()
        },
    );

    play_shot(
        &mut state,
        LaunchParams::clamped(20.0, 45.0, 0.0, Environment::Earth),
    );
    report(&state);

    let path = Path::new(HIGH_SCORE_FILE);
    let mut scores = HighScores::load(path);
    if let Some(rank) = scores.add_score(state.score, state.level, state.shots_fired) {
        println!("Run entered the leaderboard at #{rank}");
        scores.save(path);
    }
}

/// Set the controls, launch, and tick until the flight completes.
/// One-shot inputs are consumed on the first tick; the rest are idle
/// frames.
fn play_shot(state: &mut GameState, params: LaunchParams) {
    tick(
        state,
        &TickInput {
            set_params: Some(params),
            launch: true,
            ..Default::default()
        },
    );
    let idle = TickInput::default();
    let mut guard = 0;
    while state.run_state().running && guard < 10_000 {
        tick(state, &idle);
        guard += 1;
    }
}

fn report(state: &GameState) {
    let run = state.run_state();
    match run.last_result {
        ShotResult::Hit if state.is_victory() => {
            println!("Level {}: HIT - all levels clear, score {}", run.level, run.score)
        }
        ShotResult::Hit => println!("Level {}: HIT, score {}", run.level, run.score),
        ShotResult::Miss => println!("Level {}: miss, score {}", run.level, run.score),
        ShotResult::None => println!("Level {}: no shot completed", run.level),
    }
}
