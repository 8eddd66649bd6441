//! Frame transition function
//!
//! One call per display frame. Discrete requests (launch, reset, ...)
//! ride in on [`TickInput`]; a request arriving outside its legal state
//! is ignored rather than escalated, since UI races (a double-click, a
//! click landing mid-flight) are normal.

use super::playback::PlaybackStatus;
use super::state::{GameState, Mode, ShotResult};
use super::targets::{evaluate, target_for_level};
use super::trajectory::LaunchParams;
use crate::consts::MAX_LEVEL;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Replace the launch controls (ignored while in flight)
    pub set_params: Option<LaunchParams>,
    /// Launch request (click/space)
    pub launch: bool,
    /// Advance to the next level after a hit
    pub next_level: bool,
    /// Clear the current run, keeping score and level
    pub reset: bool,
    /// Switch between sandbox and game mode
    pub toggle_mode: bool,
}

/// Advance the game by one visual tick.
///
/// Processes the discrete requests first, then moves playback one frame.
/// When the cursor runs off the end of the path, the completed flight is
/// evaluated against the current level's target (game mode only) and the
/// score/result updated before this call returns.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if input.toggle_mode {
        toggle_mode(state);
    }
    if input.reset {
        reset_run(state);
    }
    if let Some(params) = input.set_params {
        set_params(state, params);
    }
    if input.next_level {
        next_level(state);
    }
    if input.launch {
        launch(state);
    }

    let status = state
        .playback
        .advance(state.trajectory.as_ref(), &state.projection, &state.tuning);
    if status == PlaybackStatus::Completed {
        on_flight_complete(state);
    }
}

/// Mode toggle: score and level reset along with the run.
fn toggle_mode(state: &mut GameState) {
    state.mode = match state.mode {
        Mode::Sandbox => Mode::Game,
        Mode::Game => Mode::Sandbox,
    };
    state.score = 0;
    state.level = 1;
    reset_run(state);
    log::info!("mode switched to {:?}", state.mode);
}

/// Run reset: clears flight state, keeps score and level.
fn reset_run(state: &mut GameState) {
    state.playback.stop();
    state.trajectory = None;
    state.last_result = ShotResult::None;
}

fn set_params(state: &mut GameState, params: LaunchParams) {
    if state.playback.is_running() {
        log::debug!("parameter change ignored while in flight");
        return;
    }
    state.params = params;
    state.trajectory = Some(params.solve());
}

fn next_level(state: &mut GameState) {
    let legal = state.mode == Mode::Game
        && state.last_result == ShotResult::Hit
        && state.level < MAX_LEVEL
        && !state.playback.is_running();
    if !legal {
        log::debug!("next-level request ignored");
        return;
    }
    state.level += 1;
    reset_run(state);
    log::info!("advanced to level {}", state.level);
}

fn launch(state: &mut GameState) {
    if state.playback.is_running() {
        log::debug!("launch ignored while in flight");
        return;
    }
    let trajectory = state.params.solve();
    let seed = state.seed.wrapping_add(state.shots_fired as u64 + 1);
    if state.playback.start(&trajectory, seed) {
        state.shots_fired += 1;
        state.trajectory = Some(trajectory);
        state.last_result = ShotResult::None;
        log::debug!("shot {} launched", state.shots_fired);
    }
}

fn on_flight_complete(state: &mut GameState) {
    if state.mode != Mode::Game {
        return;
    }
    let Some(trajectory) = state.trajectory.as_ref() else {
        return;
    };
    let target = target_for_level(state.level);
    if evaluate(trajectory, &target, state.tuning.hit_margin) {
        let points = state.tuning.hit_score(state.level);
        state.score += points;
        state.last_result = ShotResult::Hit;
        log::info!(
            "hit! +{points} (level {}, score {})",
            state.level,
            state.score
        );
    } else {
        state.last_result = ShotResult::Miss;
        log::info!("miss (level {})", state.level);
    }
}
